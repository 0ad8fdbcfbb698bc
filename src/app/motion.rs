use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

#[cfg(feature = "hydrate")]
use crate::motion::Region;
use crate::motion::{
    AnimationFrame, Animator, ElementId, MotionConfig, ObserveOptions, Pose, ScrollState,
    Transition,
};

/// Shared handle to the page's [`Animator`], provided by [`MotionProvider`].
#[derive(Clone, Copy)]
pub struct MotionContext {
    animator: StoredValue<Arc<Mutex<Animator>>>,
    /// Bumped whenever any element's frame may have changed.
    frame: RwSignal<u64>,
    next_id: StoredValue<u64>,
    scroll_y: Signal<f64>,
    viewport_height: Signal<f64>,
}

impl MotionContext {
    fn allocate(&self) -> ElementId {
        let mut id = 0;
        self.next_id.update_value(|next| {
            id = *next;
            *next += 1;
        });
        ElementId(id)
    }

    fn with_animator<T>(&self, f: impl FnOnce(&mut Animator) -> T) -> T {
        self.animator.with_value(|a| {
            let mut animator = a.lock().expect("should be able to lock animator");
            f(&mut animator)
        })
    }

    /// Like `with_animator`, but tolerates the provider being torn down first.
    fn try_with_animator(&self, f: impl FnOnce(&mut Animator)) {
        let _ = self.animator.try_with_value(|a| {
            if let Ok(mut animator) = a.lock() {
                f(&mut animator);
            }
        });
    }

    fn current_scroll(&self) -> ScrollState {
        ScrollState::new(
            self.scroll_y.get_untracked(),
            self.viewport_height.get_untracked(),
        )
    }

    fn invalidate(&self) {
        self.frame.update(|n| *n = n.wrapping_add(1));
    }

    /// Current frame for `id`; tracks the frame counter.
    fn frame(&self, id: ElementId) -> Option<AnimationFrame> {
        self.frame.track();
        self.with_animator(|a| a.frame(id))
    }

    pub fn scroll_y(&self) -> Signal<f64> {
        self.scroll_y
    }
}

pub fn use_motion() -> MotionContext {
    expect_context::<MotionContext>()
}

/// Owns the animator and drives it from window scroll/resize and the
/// browser's animation frames.
#[component]
pub fn MotionProvider(
    #[prop(optional)] config: Option<MotionConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let ctx = MotionContext {
        animator: StoredValue::new(Arc::new(Mutex::new(Animator::new(config)))),
        frame: RwSignal::new(0),
        next_id: StoredValue::new(0),
        scroll_y,
        viewport_height: height,
    };
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

        log::debug!("starting motion loop with {config:?}");
        let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
            let now = Duration::from_secs_f64(args.timestamp.max(0.0) / 1000.0);
            let scroll = ctx.current_scroll();
            let report = ctx.with_animator(|a| a.tick(scroll, now));
            if report.changed > 0 || report.animating {
                ctx.invalidate();
            }
        });
    }

    children()
}

/// Inline style for a `Reveal`: the animator's frame once registered, the
/// starting pose before that. Rendering the starting pose on the server keeps
/// content above the fold from showing at rest and then snapping back.
fn reveal_style(frame: Option<AnimationFrame>, initial: Pose) -> String {
    frame.map_or(initial, |f| f.pose).css()
}

/// Wraps `children` in a block that fades/slides in when scrolled into view.
///
/// Nothing is registered on the server; registration happens once the
/// element has been measured in the browser. Without scripting, the
/// `<noscript>` rule in the shell shows `.reveal` blocks at rest.
#[component]
pub fn Reveal(
    /// Seconds spent entering before the transition starts.
    #[prop(optional)]
    delay: f64,
    #[prop(optional)] from: Option<Pose>,
    /// Transition length in seconds.
    #[prop(optional)]
    duration: Option<f64>,
    #[prop(default = true)] once: bool,
    #[prop(optional)] threshold: Option<f64>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_motion();
    let id = ctx.allocate();
    let node_ref = NodeRef::<html::Div>::new();

    let mut transition = Transition::default();
    if let Some(from) = from {
        transition = transition.starting_from(from);
    }
    if let Some(secs) = duration {
        transition = transition.duration_secs(secs);
    }
    let initial = transition.from;
    let mut options = ObserveOptions::default()
        .once(once)
        .delay_secs(delay)
        .transition(transition);
    if let Some(fraction) = threshold {
        options = options.threshold(fraction);
    }

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_element_bounding, UseElementBoundingReturn};

        let UseElementBoundingReturn { top, height, .. } = use_element_bounding(node_ref);
        let registered = StoredValue::new(false);
        Effect::new(move |_| {
            let height = height.get();
            // not laid out yet
            if height <= 0.0 {
                return;
            }
            let doc_top = top.get() + window().scroll_y().unwrap_or_default();
            let region = Region::new(doc_top, height);
            if registered.get_value() {
                ctx.with_animator(|a| a.update_region(id, region));
                return;
            }
            let scroll = ctx.current_scroll();
            ctx.with_animator(|a| {
                a.set_scroll(scroll);
                a.observe(id, region, options);
            });
            registered.set_value(true);
            ctx.invalidate();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = options;

    on_cleanup(move || {
        ctx.try_with_animator(|a| {
            a.unobserve(id);
        });
    });

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal {class}")
            style=move || reveal_style(ctx.frame(id), initial)
        >
            {children()}
        </div>
    }
}
