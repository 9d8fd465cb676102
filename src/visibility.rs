/// Observer configuration, passed through to the platform primitive.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct InViewOptions {
    /// Latch the signal on first intersection and release the observer.
    pub once: bool,
    /// Minimum visible fraction before the region counts as intersecting.
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            once: false,
            threshold: 0.0,
            root_margin: None,
        }
    }
}

impl InViewOptions {
    pub fn latched(threshold: f64) -> Self {
        Self {
            once: true,
            threshold,
            root_margin: None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LatchPhase {
    Idle,
    Satisfied,
}

/// Boolean visibility signal fed by intersection-change events.
///
/// In `once` mode the first intersection moves the tracker to `Satisfied`,
/// after which the signal never reverts and the caller is told to release
/// the underlying observation. Otherwise the signal tracks the most recent
/// event.
#[derive(Debug)]
pub struct VisibilityTracker {
    once: bool,
    phase: LatchPhase,
    visible: bool,
}

impl VisibilityTracker {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            phase: LatchPhase::Idle,
            visible: false,
        }
    }

    pub fn visible(&self) -> bool {
        matches!(self.phase, LatchPhase::Satisfied) || self.visible
    }

    /// Records one intersection change. Returns `true` when the observation
    /// can be released because the signal is latched for good.
    pub fn record(&mut self, intersecting: bool) -> bool {
        match self.phase {
            LatchPhase::Satisfied => false,
            LatchPhase::Idle if intersecting => {
                self.visible = true;
                if self.once {
                    self.phase = LatchPhase::Satisfied;
                    return true;
                }
                false
            }
            LatchPhase::Idle => {
                if !self.once {
                    self.visible = false;
                }
                false
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod hook {
    use super::{InViewOptions, VisibilityTracker};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
    use yew::prelude::*;

    /// Reports whether the referenced region currently intersects the
    /// viewport. The signal stays `false` until the first observer callback;
    /// the subscription is released when the node detaches.
    #[hook]
    pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
        let visible = use_state_eq(|| false);

        {
            let visible = visible.clone();
            use_effect_with((node, options), move |(node, options)| {
                let mut subscription = None;

                if let Some(element) = node.cast::<Element>() {
                    let tracker = Rc::new(RefCell::new(VisibilityTracker::new(options.once)));

                    let callback = {
                        let tracker = tracker.clone();
                        let visible = visible.clone();
                        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                let Some(entry) = entries
                                    .iter()
                                    .filter_map(|value| {
                                        value.dyn_into::<IntersectionObserverEntry>().ok()
                                    })
                                    .last()
                                else {
                                    return;
                                };

                                let release =
                                    tracker.borrow_mut().record(entry.is_intersecting());
                                visible.set(tracker.borrow().visible());

                                if release {
                                    observer.disconnect();
                                }
                            },
                        )
                    };

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(options.threshold));
                    if let Some(margin) = options.root_margin {
                        init.set_root_margin(margin);
                    }

                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        observer.observe(&element);
                        subscription = Some((observer, callback, element));
                    }
                }

                move || {
                    if let Some((observer, _callback, element)) = subscription {
                        observer.unobserve(&element);
                        observer.disconnect();
                    }
                }
            });
        }

        *visible
    }
}

#[cfg(target_arch = "wasm32")]
pub use hook::use_in_view;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_starts_false() {
        assert!(!VisibilityTracker::new(true).visible());
        assert!(!VisibilityTracker::new(false).visible());
    }

    #[test]
    fn latched_tracker_becomes_true_once_and_stays_true() {
        let mut tracker = VisibilityTracker::new(true);

        assert!(!tracker.record(false));
        assert!(!tracker.visible());

        assert!(tracker.record(true));
        assert!(tracker.visible());

        // Late events after release must not move the signal.
        assert!(!tracker.record(false));
        assert!(tracker.visible());
        assert!(!tracker.record(true));
        assert!(tracker.visible());
    }

    #[test]
    fn unlatched_tracker_follows_the_most_recent_event() {
        let mut tracker = VisibilityTracker::new(false);

        for _ in 0..4 {
            assert!(!tracker.record(true));
            assert!(tracker.visible());

            assert!(!tracker.record(false));
            assert!(!tracker.visible());
        }
    }

    #[test]
    fn latched_tracker_ignores_leading_exits() {
        let mut tracker = VisibilityTracker::new(true);

        for _ in 0..3 {
            assert!(!tracker.record(false));
            assert!(!tracker.visible());
        }

        assert!(tracker.record(true));
        assert!(tracker.visible());
    }

    #[test]
    fn reveal_options_latch_at_the_configured_fraction() {
        let options = InViewOptions::latched(0.1);

        assert!(options.once);
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, None);
    }
}
