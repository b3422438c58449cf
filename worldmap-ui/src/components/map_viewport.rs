// worldmap-ui/src/components/map_viewport.rs
use leptos::*;

use crate::components::ZoomControls;
use crate::hooks::use_map_interaction;

/// The pan-zoom map widget: an image layer inside a clipping container,
/// with zoom buttons and a live zoom readout.
///
/// All interaction (wheel, drag, touch, keyboard) is wired up by
/// `use_map_interaction`; this component only supplies the markup.
#[component]
pub fn MapViewport(
    /// URL of the map image.
    #[prop(into)]
    src: String,
    /// Alt text for the map image.
    #[prop(into, default = "Map".to_string())]
    alt: String,
) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();
    let layer_ref = create_node_ref::<html::Div>();
    let readout_ref = create_node_ref::<html::Span>();

    let handle = use_map_interaction(container_ref, layer_ref, readout_ref);

    let zoom_in = handle.clone();
    let zoom_out = handle.clone();
    let reset = handle.clone();

    view! {
        <div class="map-viewport" node_ref=container_ref>
            <div class="map-layer" node_ref=layer_ref>
                <img src=src alt=alt draggable="false"/>
            </div>
            <ZoomControls
                on_zoom_in=Callback::new(move |_| zoom_in.zoom_in())
                on_zoom_out=Callback::new(move |_| zoom_out.zoom_out())
                on_reset=Callback::new(move |_| reset.reset_view())
            />
            <span class="zoom-readout" node_ref=readout_ref>
                "Zoom: 100%"
            </span>
        </div>
    }
}
