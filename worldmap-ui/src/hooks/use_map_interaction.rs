// worldmap-ui/src/hooks/use_map_interaction.rs
//!
//! Wires raw DOM events to a `ViewportController`.
//!
//! All listeners are attached with `web-sys` rather than leptos event
//! handlers: wheel and touch listeners must be registered non-passive
//! so their browser defaults (page scroll, pinch page zoom) can be
//! suppressed, and pointer/key listeners live on the window so drags
//! keep tracking when the pointer leaves the container.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use worldmap_core::{Point, ViewportController};

use crate::dom::DomHost;
use crate::hooks::persistence::{load_view, save_view, PersistedView};

/// Handle returned by the map interaction hook.
///
/// Buttons and other UI chrome drive the controller through this handle;
/// every method is a no-op until the widget elements have mounted.
#[derive(Clone)]
pub struct InteractionHandle {
    controller: Rc<RefCell<Option<ViewportController<DomHost>>>>,
}

impl InteractionHandle {
    pub fn zoom_in(&self) {
        if let Some(c) = self.controller.borrow_mut().as_mut() {
            c.zoom_in();
        }
        save_current(&self.controller);
    }

    pub fn zoom_out(&self) {
        if let Some(c) = self.controller.borrow_mut().as_mut() {
            c.zoom_out();
        }
        save_current(&self.controller);
    }

    pub fn reset_view(&self) {
        if let Some(c) = self.controller.borrow_mut().as_mut() {
            c.reset_view();
        }
        save_current(&self.controller);
    }
}

/// Persist the current transform after an interaction settles.
fn save_current(controller: &Rc<RefCell<Option<ViewportController<DomHost>>>>) {
    let transform = controller.borrow().as_ref().map(|c| c.transform());
    if let Some(transform) = transform {
        save_view(&PersistedView::new(transform));
    }
}

fn touch_points(list: &web_sys::TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|touch| Point::new(touch.client_x() as f64, touch.client_y() as f64))
        .collect()
}

/// Every listener the hook registers, kept alive together so they can
/// be removed together on cleanup.
struct DomListeners {
    container: web_sys::HtmlElement,
    window: web_sys::Window,
    wheel: Closure<dyn Fn(web_sys::WheelEvent)>,
    pointer_down: Closure<dyn Fn(web_sys::PointerEvent)>,
    pointer_move: Closure<dyn Fn(web_sys::PointerEvent)>,
    pointer_up: Closure<dyn Fn(web_sys::PointerEvent)>,
    touch_start: Closure<dyn Fn(web_sys::TouchEvent)>,
    touch_move: Closure<dyn Fn(web_sys::TouchEvent)>,
    touch_end: Closure<dyn Fn(web_sys::TouchEvent)>,
    context_menu: Closure<dyn Fn(web_sys::Event)>,
    key_down: Closure<dyn Fn(web_sys::KeyboardEvent)>,
}

impl DomListeners {
    fn attach(&self) {
        // Non-passive registration is what allows preventDefault on
        // wheel and touch events.
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);

        self.container
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                self.wheel.as_ref().unchecked_ref(),
                &options,
            )
            .expect("should add wheel listener");
        self.container
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                self.touch_start.as_ref().unchecked_ref(),
                &options,
            )
            .expect("should add touchstart listener");
        self.container
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                self.touch_move.as_ref().unchecked_ref(),
                &options,
            )
            .expect("should add touchmove listener");

        self.container
            .add_event_listener_with_callback(
                "pointerdown",
                self.pointer_down.as_ref().unchecked_ref(),
            )
            .expect("should add pointerdown listener");
        self.container
            .add_event_listener_with_callback(
                "contextmenu",
                self.context_menu.as_ref().unchecked_ref(),
            )
            .expect("should add contextmenu listener");

        // Move and release live on the window so a drag keeps tracking
        // after the pointer leaves the container.
        self.window
            .add_event_listener_with_callback(
                "pointermove",
                self.pointer_move.as_ref().unchecked_ref(),
            )
            .expect("should add pointermove listener");
        self.window
            .add_event_listener_with_callback("pointerup", self.pointer_up.as_ref().unchecked_ref())
            .expect("should add pointerup listener");
        for event_name in ["touchend", "touchcancel"] {
            self.window
                .add_event_listener_with_callback(
                    event_name,
                    self.touch_end.as_ref().unchecked_ref(),
                )
                .expect("should add touch end listener");
        }
        self.window
            .add_event_listener_with_callback("keydown", self.key_down.as_ref().unchecked_ref())
            .expect("should add keydown listener");
    }

    fn detach(&self) {
        let _ = self
            .container
            .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        let _ = self.container.remove_event_listener_with_callback(
            "touchstart",
            self.touch_start.as_ref().unchecked_ref(),
        );
        let _ = self.container.remove_event_listener_with_callback(
            "touchmove",
            self.touch_move.as_ref().unchecked_ref(),
        );
        let _ = self.container.remove_event_listener_with_callback(
            "pointerdown",
            self.pointer_down.as_ref().unchecked_ref(),
        );
        let _ = self.container.remove_event_listener_with_callback(
            "contextmenu",
            self.context_menu.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "pointermove",
            self.pointer_move.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "pointerup",
            self.pointer_up.as_ref().unchecked_ref(),
        );
        for event_name in ["touchend", "touchcancel"] {
            let _ = self.window.remove_event_listener_with_callback(
                event_name,
                self.touch_end.as_ref().unchecked_ref(),
            );
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.key_down.as_ref().unchecked_ref());
    }
}

/// Set up a viewport controller over the given elements and attach all
/// interaction listeners once they mount. Listeners are removed again
/// when the owning component is disposed.
pub fn use_map_interaction(
    container_ref: NodeRef<html::Div>,
    layer_ref: NodeRef<html::Div>,
    readout_ref: NodeRef<html::Span>,
) -> InteractionHandle {
    let controller: Rc<RefCell<Option<ViewportController<DomHost>>>> =
        Rc::new(RefCell::new(None));

    let listeners_storage = store_value::<Option<Rc<DomListeners>>>(None);

    let controller_for_effect = Rc::clone(&controller);
    create_effect(move |_| {
        let layer_el = layer_ref.get();
        let container_el = container_ref.get();
        let readout_el = readout_ref.get();

        let Some(layer_el) = layer_el else {
            return;
        };
        if controller_for_effect.borrow().is_some() {
            return;
        }

        let layer = layer_el.unchecked_ref::<web_sys::HtmlElement>().clone();
        let container = container_el
            .as_ref()
            .map(|el| el.unchecked_ref::<web_sys::HtmlElement>().clone());
        let readout = readout_el
            .as_ref()
            .map(|el| el.unchecked_ref::<web_sys::HtmlElement>().clone());

        let host = DomHost::new(layer, container.clone(), readout);
        let mut new_controller = ViewportController::new(host);
        match load_view() {
            Some(view) => new_controller.restore(view.transform),
            None => new_controller.reset_view(),
        }
        *controller_for_effect.borrow_mut() = Some(new_controller);

        let Some(container) = container else {
            log::debug!("map container not found; interaction listeners not attached");
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        // Wheel zoom; the page-scroll default is suppressed even at the
        // scale bounds.
        let c = Rc::clone(&controller_for_effect);
        let wheel = Closure::wrap(Box::new(move |ev: web_sys::WheelEvent| {
            ev.prevent_default();
            if let Some(ctrl) = c.borrow_mut().as_mut() {
                ctrl.wheel(
                    ev.delta_y(),
                    Point::new(ev.client_x() as f64, ev.client_y() as f64),
                );
            }
            save_current(&c);
        }) as Box<dyn Fn(web_sys::WheelEvent)>);

        // Drag start; default suppressed so the browser's native image
        // drag never kicks in.
        let c = Rc::clone(&controller_for_effect);
        let pointer_down = Closure::wrap(Box::new(move |ev: web_sys::PointerEvent| {
            ev.prevent_default();
            if let Some(ctrl) = c.borrow_mut().as_mut() {
                ctrl.pointer_down(
                    ev.button(),
                    Point::new(ev.client_x() as f64, ev.client_y() as f64),
                );
            }
        }) as Box<dyn Fn(web_sys::PointerEvent)>);

        let c = Rc::clone(&controller_for_effect);
        let pointer_move = Closure::wrap(Box::new(move |ev: web_sys::PointerEvent| {
            if let Some(ctrl) = c.borrow_mut().as_mut() {
                ctrl.pointer_move(Point::new(ev.client_x() as f64, ev.client_y() as f64));
            }
        }) as Box<dyn Fn(web_sys::PointerEvent)>);

        let c = Rc::clone(&controller_for_effect);
        let pointer_up = Closure::wrap(Box::new(move |_ev: web_sys::PointerEvent| {
            if let Some(ctrl) = c.borrow_mut().as_mut() {
                ctrl.pointer_up();
            }
            save_current(&c);
        }) as Box<dyn Fn(web_sys::PointerEvent)>);

        // Touch drag and pinch; the default is only suppressed when the
        // controller consumed the touches.
        let c = Rc::clone(&controller_for_effect);
        let touch_start = Closure::wrap(Box::new(move |ev: web_sys::TouchEvent| {
            let points = touch_points(&ev.touches());
            if let Some(ctrl) = c.borrow_mut().as_mut() {
                if ctrl.touch_start(&points) {
                    ev.prevent_default();
                }
            }
        }) as Box<dyn Fn(web_sys::TouchEvent)>);

        let c = Rc::clone(&controller_for_effect);
        let touch_move = Closure::wrap(Box::new(move |ev: web_sys::TouchEvent| {
            let points = touch_points(&ev.touches());
            if let Some(ctrl) = c.borrow_mut().as_mut() {
                if ctrl.touch_move(&points) {
                    ev.prevent_default();
                }
            }
        }) as Box<dyn Fn(web_sys::TouchEvent)>);

        // touchend fires with the *remaining* touches, which is what
        // the controller keys its state transitions on.
        let c = Rc::clone(&controller_for_effect);
        let touch_end = Closure::wrap(Box::new(move |ev: web_sys::TouchEvent| {
            let remaining = touch_points(&ev.touches());
            let mut ended = false;
            if let Some(ctrl) = c.borrow_mut().as_mut() {
                ended = ctrl.touch_end(&remaining);
            }
            if ended {
                save_current(&c);
            }
        }) as Box<dyn Fn(web_sys::TouchEvent)>);

        // No context menu over the map; it interrupts drags.
        let context_menu = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            ev.prevent_default();
        }) as Box<dyn Fn(web_sys::Event)>);

        // Keyboard shortcuts are global; the browser default is only
        // suppressed for keys the controller actually consumed.
        let c = Rc::clone(&controller_for_effect);
        let key_down = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
            let mut consumed = false;
            if let Some(ctrl) = c.borrow_mut().as_mut() {
                consumed = ctrl.key_down(&ev.key());
            }
            if consumed {
                ev.prevent_default();
                save_current(&c);
            }
        }) as Box<dyn Fn(web_sys::KeyboardEvent)>);

        let listeners = Rc::new(DomListeners {
            container,
            window,
            wheel,
            pointer_down,
            pointer_move,
            pointer_up,
            touch_start,
            touch_move,
            touch_end,
            context_menu,
            key_down,
        });
        listeners.attach();
        listeners_storage.set_value(Some(Rc::clone(&listeners)));

        on_cleanup(move || {
            listeners.detach();
            listeners_storage.set_value(None);
        });
    });

    InteractionHandle { controller }
}
