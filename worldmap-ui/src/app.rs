// worldmap-ui/src/app.rs
use leptos::*;

use crate::components::MapViewport;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main style="width: 100vw; height: 100vh; overflow: hidden; background: #1a1a1a;">
            <MapViewport src="assets/world-map.jpg" alt="World map"/>
        </main>
    }
}
