// worldmap-ui/src/components/zoom_controls.rs
use leptos::*;

#[component]
pub fn ZoomControls(
    on_zoom_in: Callback<()>,
    on_zoom_out: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="zoom-controls">
            <button
                class="zoom-button"
                on:click=move |_| on_zoom_in.call(())
                title="Zoom in (+)"
            >
                "+"
            </button>
            <button
                class="zoom-button"
                on:click=move |_| on_zoom_out.call(())
                title="Zoom out (-)"
            >
                "\u{2212}"
            </button>
            <button
                class="zoom-button"
                on:click=move |_| on_reset.call(())
                title="Reset view (0)"
            >
                "\u{2302}"
            </button>
        </div>
    }
}
