use std::cell::Cell;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::motion::offset::{
    compute_offset, follow_glow, ElementAnchor, OffsetParams, OffsetVector, PointerSample,
    ViewportExtent,
};

/// A registered DOM listener. Dropping it removes the listener, so whoever
/// owns the subscription decides how long the handler lives.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Subscribes on `window`, logging instead of failing when that is not possible.
    pub fn on_window<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        match Self::new(&window, event, handler) {
            Ok(subscription) => Some(subscription),
            Err(e) => {
                warn!("could not listen for {}: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn viewport() -> Option<ViewportExtent> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    (width > 0.0 && height > 0.0).then_some(ViewportExtent { width, height })
}

pub fn anchor_of(element: &Element) -> ElementAnchor {
    let rect = element.get_bounding_client_rect();
    ElementAnchor {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Smooth-scrolls to the element with `id`. Returns false when the current
/// page has no such element.
pub fn scroll_to_section(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

thread_local! {
    static PENDING_SECTION: Cell<Option<&'static str>> = Cell::new(None);
}

/// Section to scroll to once the page that holds it has rendered.
/// A later call replaces an earlier one.
pub fn remember_section(id: &'static str) {
    PENDING_SECTION.with(|pending| pending.set(Some(id)));
}

/// Hands out the remembered section once.
pub fn take_pending_section() -> Option<&'static str> {
    PENDING_SECTION.with(|pending| pending.take())
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            warn!("could not open {}: {:?}", url, e);
        }
    }
}

/// Offset of the element behind `node` toward the mouse, recomputed on
/// every `mousemove` while the calling component is mounted.
#[hook]
pub fn use_pointer_offset(node: NodeRef, params: OffsetParams) -> OffsetVector {
    let offset = use_state(|| OffsetVector::ZERO);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = EventSubscription::on_window("mousemove", move |event| {
                    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let (Some(element), Some(viewport)) = (node.cast::<Element>(), viewport()) else {
                        return;
                    };
                    let pointer = PointerSample {
                        x: mouse.client_x() as f64,
                        y: mouse.client_y() as f64,
                    };
                    offset.set(compute_offset(pointer, viewport, anchor_of(&element), params));
                });
                move || drop(subscription)
            },
            (),
        );
    }

    *offset
}

#[hook]
pub fn use_follow_glow(node: NodeRef, factor: f64) -> OffsetVector {
    let offset = use_state(|| OffsetVector::ZERO);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = EventSubscription::on_window("mousemove", move |event| {
                    let (Some(mouse), Some(element)) =
                        (event.dyn_ref::<MouseEvent>(), node.cast::<Element>())
                    else {
                        return;
                    };
                    let pointer = PointerSample {
                        x: mouse.client_x() as f64,
                        y: mouse.client_y() as f64,
                    };
                    offset.set(follow_glow(pointer, anchor_of(&element), factor));
                });
                move || drop(subscription)
            },
            (),
        );
    }

    *offset
}

/// Runs `progress` over the element's rect on every scroll and resize and
/// returns the latest value.
#[hook]
pub fn use_scroll_progress(node: NodeRef, progress: fn(f64, f64, f64) -> f64) -> f64 {
    let value = use_state(|| 0.0_f64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |_| {
                let measure = move || {
                    let (Some(element), Some(viewport)) = (node.cast::<Element>(), viewport()) else {
                        return;
                    };
                    let rect = anchor_of(&element);
                    value.set(progress(rect.top, rect.height, viewport.height));
                };
                measure();

                let on_scroll = {
                    let measure = measure.clone();
                    EventSubscription::on_window("scroll", move |_| measure())
                };
                let on_resize = EventSubscription::on_window("resize", move |_| measure());

                move || {
                    drop(on_scroll);
                    drop(on_resize);
                }
            },
            (),
        );
    }

    *value
}

/// True once the page has scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state(|| scroll_y() > threshold);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = EventSubscription::on_window("scroll", move |_| {
                    scrolled.set(scroll_y() > threshold);
                });
                move || drop(subscription)
            },
            (),
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_section_is_taken_once() {
        assert_eq!(take_pending_section(), None);
        remember_section("contact");
        assert_eq!(take_pending_section(), Some("contact"));
        assert_eq!(take_pending_section(), None);
    }

    #[test]
    fn latest_remembered_section_wins() {
        remember_section("about");
        remember_section("contact");
        assert_eq!(take_pending_section(), Some("contact"));
    }
}
