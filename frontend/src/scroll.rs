use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};
use yew::prelude::*;

use crate::state::NavStyle;

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingAnchor(String),
}

/// How a programmatic scroll moves the viewport. `Jump` overrides the
/// page-wide `scroll-behavior: smooth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Animated,
    Jump,
}

impl ScrollMode {
    pub fn behavior(self) -> ScrollBehavior {
        match self {
            ScrollMode::Animated => ScrollBehavior::Smooth,
            ScrollMode::Jump => ScrollBehavior::Instant,
        }
    }
}

/// Section the landing page scrolls to once it has mounted. Carried as
/// history state when a nav link is used on another route.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSection(pub String);

/// Smoothly scrolls the viewport to the element with the given id.
pub fn scroll_to_section(id: &str) -> Result<(), ScrollError> {
    let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
    let document = window.document().ok_or(ScrollError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| ScrollError::MissingAnchor(id.to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollMode::Animated.behavior());
    element.scroll_into_view_with_scroll_into_view_options(&options);
    debug!("Scrolling to #{}", id);
    Ok(())
}

pub fn scroll_to_top(mode: ScrollMode) -> Result<(), ScrollError> {
    let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(mode.behavior());
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Scrolls to `id`, logging instead of failing when the anchor is missing.
pub fn go_to_section(id: &str) {
    if let Err(err) = scroll_to_section(id) {
        warn!("Section scroll skipped: {}", err);
    }
}

/// Jumps to the top without animation. Used when a routed page mounts.
pub fn reset_scroll() {
    if let Err(err) = scroll_to_top(ScrollMode::Jump) {
        warn!("Scroll reset skipped: {}", err);
    }
}

/// Tracks the window scroll offset and reports the matching nav bar style.
/// Re-renders only when the style flips.
#[hook]
pub fn use_nav_style() -> NavStyle {
    let style = use_state_eq(|| NavStyle::Transparent);

    {
        let style = style.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let update = {
                        let style = style.clone();
                        move |win: &web_sys::Window| {
                            if let Ok(offset) = win.scroll_y() {
                                style.set(NavStyle::from_offset(offset));
                            }
                        }
                    };

                    let listener_window = window.clone();
                    let on_scroll = update.clone();
                    let callback = Closure::<dyn Fn()>::new(move || on_scroll(&listener_window));

                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("Failed to attach scroll listener: {:?}", err);
                    }

                    // A reload can restore a scrolled position
                    update(&window);

                    Box::new(move || {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Failed to detach scroll listener: {:?}", err);
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    *style
}

/// Reports `true` once the referenced element has entered the viewport and
/// stays `true` afterwards. Elements that cannot be observed count as visible.
#[hook]
pub fn use_in_view_once(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut active: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> = None;

                match node.cast::<Element>() {
                    Some(element) => {
                        let on_hit = visible.clone();
                        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                let hit = entries.iter().any(|entry| {
                                    entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting()
                                });
                                if hit {
                                    on_hit.set(true);
                                    observer.disconnect();
                                }
                            },
                        );

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&REVEAL_THRESHOLD.into());
                        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                            Ok(observer) => {
                                observer.observe(&element);
                                active = Some((observer, callback));
                            }
                            Err(err) => {
                                warn!("IntersectionObserver unavailable: {:?}", err);
                                visible.set(true);
                            }
                        }
                    }
                    None => visible.set(true),
                }

                move || {
                    if let Some((observer, _callback)) = active {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *visible
}

/// Share of an element that must be visible before it counts as in view.
const REVEAL_THRESHOLD: f64 = 0.15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_mode_overrides_smooth_page_scrolling() {
        assert_eq!(ScrollMode::Jump.behavior(), ScrollBehavior::Instant);
        assert_eq!(ScrollMode::Animated.behavior(), ScrollBehavior::Smooth);
    }

    #[test]
    fn pending_section_compares_by_anchor() {
        assert_eq!(PendingSection("standorte".into()), PendingSection("standorte".into()));
        assert_ne!(PendingSection("standorte".into()), PendingSection("kontakt".into()));
    }
}
