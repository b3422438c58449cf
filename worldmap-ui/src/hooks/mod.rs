mod persistence;
mod use_map_interaction;

pub use persistence::{load_view, save_view, PersistedView};
pub use use_map_interaction::{use_map_interaction, InteractionHandle};
