//! Viewport visibility for enter animations.
//!
//! `use_in_view` binds a `NodeRef` to an `IntersectionObserver` and reports whether the
//! element is currently visible and whether it ever was. Visitors who ask for reduced
//! motion get both flags set at once and no observer is created.
//!
//! The state transitions live in [`VisibilityTracker`], which has no browser dependency.

use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::SiteError;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Debug, Clone, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element that must be visible, 0.0 to 1.0.
    pub threshold: f64,
    pub root_margin: String,
    pub trigger_once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            trigger_once: true,
        }
    }
}

impl InViewOptions {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }

    pub fn trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityState {
    pub is_in_view: bool,
    pub has_been_in_view: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// Reduced motion: everything is visible, nothing to observe.
    Bypass,
    Observe,
    /// A one-shot tracker that already fired.
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveOutcome {
    Continue,
    Disconnect,
}

#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    trigger_once: bool,
    state: VisibilityState,
    inert: bool,
}

impl VisibilityTracker {
    pub fn new(trigger_once: bool) -> Self {
        Self::resume(trigger_once, VisibilityState::default())
    }

    /// Continues from a previous state so `has_been_in_view` survives option changes.
    pub fn resume(trigger_once: bool, state: VisibilityState) -> Self {
        Self {
            trigger_once,
            state,
            inert: trigger_once && state.has_been_in_view,
        }
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_inert(&self) -> bool {
        self.inert
    }

    pub fn bind(&mut self, prefers_reduced_motion: bool) -> BindOutcome {
        if prefers_reduced_motion {
            self.state = VisibilityState {
                is_in_view: true,
                has_been_in_view: true,
            };
            self.inert = true;
            return BindOutcome::Bypass;
        }
        if self.inert {
            BindOutcome::Settled
        } else {
            BindOutcome::Observe
        }
    }

    pub fn observe(&mut self, is_intersecting: bool) -> ObserveOutcome {
        if self.inert {
            return ObserveOutcome::Disconnect;
        }
        self.state.is_in_view = is_intersecting;
        if is_intersecting {
            self.state.has_been_in_view = true;
            if self.trigger_once {
                self.inert = true;
                return ObserveOutcome::Disconnect;
            }
        }
        ObserveOutcome::Continue
    }
}

pub trait MotionPreference {
    fn prefers_reduced_motion(&self) -> bool;
}

/// Reads `prefers-reduced-motion` through `window.matchMedia`.
pub struct SystemMotionPreference;

impl MotionPreference for SystemMotionPreference {
    fn prefers_reduced_motion(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

#[derive(Clone)]
pub struct UseInViewHandle {
    pub node: NodeRef,
    pub is_in_view: bool,
    pub has_been_in_view: bool,
}

#[hook]
pub fn use_in_view(options: InViewOptions) -> UseInViewHandle {
    use_in_view_with(options, Rc::new(SystemMotionPreference))
}

#[hook]
pub fn use_in_view_with(options: InViewOptions, preference: Rc<dyn MotionPreference>) -> UseInViewHandle {
    let node = use_node_ref();
    let state = use_state_eq(VisibilityState::default);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |options: &InViewOptions| {
                let mut tracker = VisibilityTracker::resume(options.trigger_once, *state);
                let destructor: Box<dyn FnOnce()> = match node.cast::<Element>() {
                    None => {
                        debug!("use_in_view: no element bound, skipping");
                        Box::new(|| ())
                    }
                    Some(element) => match tracker.bind(preference.prefers_reduced_motion()) {
                        BindOutcome::Bypass => {
                            state.set(tracker.state());
                            Box::new(|| ())
                        }
                        BindOutcome::Settled => Box::new(|| ()),
                        BindOutcome::Observe => {
                            match subscribe(&element, options, tracker, state.setter()) {
                                Ok(subscription) => Box::new(move || subscription.disconnect()),
                                Err(e) => {
                                    warn!("use_in_view: {}", e);
                                    Box::new(|| ())
                                }
                            }
                        }
                    },
                };
                destructor
            },
            options,
        );
    }

    UseInViewHandle {
        node,
        is_in_view: state.is_in_view,
        has_been_in_view: state.has_been_in_view,
    }
}

struct Subscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Subscription {
    fn disconnect(self) {
        self.observer.disconnect();
    }
}

fn subscribe(
    element: &Element,
    options: &InViewOptions,
    mut tracker: VisibilityTracker,
    setter: UseStateSetter<VisibilityState>,
) -> Result<Subscription, SiteError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let outcome = tracker.observe(entry.is_intersecting());
                setter.set(tracker.state());
                if outcome == ObserveOutcome::Disconnect {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| SiteError::browser("IntersectionObserver", e))?;
    observer.observe(element);

    Ok(Subscription {
        observer,
        _callback: callback,
    })
}
