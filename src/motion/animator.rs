use std::collections::HashMap;
use std::time::Duration;

use super::pose::secs_to_duration;
use super::{MotionConfig, Pose, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(top: f64, height: f64) -> Self {
        let top = if top.is_finite() { top } else { 0.0 };
        let height = if height.is_finite() {
            height.max(0.0)
        } else {
            0.0
        };
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Window scroll position and height, shared by every element during a tick.
///
/// A viewport height that is zero, negative or non-finite means the size is
/// unknown (server rendering, hidden tab) and every element is treated as
/// visible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub offset_y: f64,
    pub viewport_height: f64,
}

impl ScrollState {
    pub fn new(offset_y: f64, viewport_height: f64) -> Self {
        Self {
            offset_y,
            viewport_height,
        }
    }

    pub fn is_known(&self) -> bool {
        self.offset_y.is_finite() && self.viewport_height.is_finite() && self.viewport_height > 0.0
    }

    pub fn bottom(&self) -> f64 {
        self.offset_y + self.viewport_height
    }

    /// Share of `region` that lies inside the viewport, in `[0, 1]`.
    pub fn visible_fraction(&self, region: &Region) -> f64 {
        if region.height <= 0.0 {
            let inside = region.top >= self.offset_y && region.top < self.bottom();
            return if inside { 1.0 } else { 0.0 };
        }
        let overlap = region.bottom().min(self.bottom()) - region.top.max(self.offset_y);
        (overlap.max(0.0) / region.height).min(1.0)
    }

    fn intersects(&self, region: &Region, threshold: f64) -> bool {
        let fraction = self.visible_fraction(region);
        fraction > 0.0 && fraction >= threshold
    }

    /// The region lies entirely above the viewport.
    fn has_passed(&self, region: &Region) -> bool {
        region.bottom() <= self.offset_y
    }

    /// No overlap with the viewport grown by `margin` on both edges.
    fn is_clear_of(&self, region: &Region, margin: f64) -> bool {
        region.bottom() <= self.offset_y - margin || region.top >= self.bottom() + margin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
    Pending,
    Entering,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    /// Stay visible forever after the first reveal.
    pub once: bool,
    /// Share of the element that must be on screen to count as intersecting.
    /// `None` falls back to [`MotionConfig::default_threshold`].
    pub threshold_fraction: Option<f64>,
    /// Time spent in [`PresentationState::Entering`] before settling.
    pub delay: Duration,
    pub transition: Transition,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            once: true,
            threshold_fraction: None,
            delay: Duration::ZERO,
            transition: Transition::default(),
        }
    }
}

impl ObserveOptions {
    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    pub fn threshold(mut self, fraction: f64) -> Self {
        self.threshold_fraction = Some(fraction);
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay in seconds, clamped by [`secs_to_duration`].
    pub fn delay_secs(self, secs: f64) -> Self {
        self.delay(secs_to_duration(secs))
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    fn normalized(mut self, default_threshold: f64) -> Self {
        let fraction = self.threshold_fraction.unwrap_or(default_threshold);
        self.threshold_fraction = Some(if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        });
        self
    }

    fn effective_threshold(&self) -> f64 {
        self.threshold_fraction.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Pending,
    Entering {
        since: Duration,
    },
    /// `settled_at` is `None` when the element was shown without playing
    /// its transition.
    Visible {
        settled_at: Option<Duration>,
    },
}

impl Phase {
    fn state(&self) -> PresentationState {
        match self {
            Phase::Pending => PresentationState::Pending,
            Phase::Entering { .. } => PresentationState::Entering,
            Phase::Visible { .. } => PresentationState::Visible,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VisualElement {
    pub id: ElementId,
    pub order: u64,
    pub region: Region,
    pub options: ObserveOptions,
    phase: Phase,
}

impl VisualElement {
    pub fn state(&self) -> PresentationState {
        self.phase.state()
    }

    fn frame(&self, now: Duration) -> AnimationFrame {
        let transition = &self.options.transition;
        let pose = match self.phase {
            Phase::Pending | Phase::Entering { .. } => transition.from,
            Phase::Visible { settled_at: None } => transition.to,
            Phase::Visible {
                settled_at: Some(at),
            } => transition.sample(now.saturating_sub(at)),
        };
        AnimationFrame {
            state: self.state(),
            pose,
        }
    }

    fn is_animating(&self, now: Duration) -> bool {
        match self.phase {
            Phase::Pending | Phase::Visible { settled_at: None } => false,
            Phase::Entering { .. } => true,
            Phase::Visible {
                settled_at: Some(at),
            } => !self.options.transition.is_done(now.saturating_sub(at)),
        }
    }
}

/// What the renderer should draw for an element right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub state: PresentationState,
    pub pose: Pose,
}

impl AnimationFrame {
    pub fn css(&self) -> String {
        self.pose.css()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Elements whose presentation state changed during the tick.
    pub changed: usize,
    /// At least one element is entering or still playing its transition.
    pub animating: bool,
}

/// Registry of scroll-revealed elements.
///
/// The page layer feeds it scroll positions and timestamps; each element's
/// state depends only on its region, its options and the latest
/// [`ScrollState`], never on how far the page moved between ticks.
#[derive(Debug, Default)]
pub struct Animator {
    config: MotionConfig,
    elements: HashMap<ElementId, VisualElement>,
    next_order: u64,
    scroll: ScrollState,
    now: Duration,
}

impl Animator {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config: config.normalized(),
            ..Default::default()
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Records the latest scroll state without stepping any element, so
    /// elements registered afterwards are classified against it.
    pub fn set_scroll(&mut self, scroll: ScrollState) {
        self.scroll = scroll;
    }

    /// Registers `id`, or replaces the region and options of an element that
    /// is already registered. Replacing keeps the element's state and order.
    pub fn observe(&mut self, id: ElementId, region: Region, options: ObserveOptions) {
        let options = options.normalized(self.config.default_threshold);
        let (scroll, now, margin) = (self.scroll, self.now, self.config.hysteresis_px);
        if let Some(element) = self.elements.get_mut(&id) {
            log::debug!("re-observing {id:?}");
            element.region = region;
            element.options = options;
            step(element, &scroll, now, margin);
            return;
        }

        let phase = if !scroll.is_known() || scroll.has_passed(&region) {
            Phase::Visible { settled_at: None }
        } else if scroll.intersects(&region, options.effective_threshold()) {
            Phase::Entering { since: now }
        } else {
            Phase::Pending
        };
        log::trace!("observing {id:?} at {region:?} as {:?}", phase.state());
        let order = self.next_order;
        self.next_order += 1;
        self.elements.insert(
            id,
            VisualElement {
                id,
                order,
                region,
                options,
                phase,
            },
        );
    }

    /// Removes `id`. Returns whether it was registered.
    pub fn unobserve(&mut self, id: ElementId) -> bool {
        self.elements.remove(&id).is_some()
    }

    /// Moves an element after a layout change. The new position takes effect
    /// on the next tick. Unknown ids are ignored.
    pub fn update_region(&mut self, id: ElementId, region: Region) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.region = region;
        }
    }

    pub fn state(&self, id: ElementId) -> Option<PresentationState> {
        self.elements.get(&id).map(VisualElement::state)
    }

    pub fn frame(&self, id: ElementId) -> Option<AnimationFrame> {
        self.elements.get(&id).map(|e| e.frame(self.now))
    }

    /// Registered elements in registration order.
    pub fn elements(&self) -> Vec<&VisualElement> {
        let mut elements = self.elements.values().collect::<Vec<_>>();
        elements.sort_by_key(|e| e.order);
        elements
    }

    pub fn tick(&mut self, scroll: ScrollState, now: Duration) -> TickReport {
        self.scroll = scroll;
        self.now = now;
        let margin = self.config.hysteresis_px;
        let mut report = TickReport::default();
        for element in self.elements.values_mut() {
            if step(element, &scroll, now, margin) {
                report.changed += 1;
            }
            report.animating |= element.is_animating(now);
        }
        report
    }
}

/// Advances one element. Returns whether its presentation state changed.
fn step(element: &mut VisualElement, scroll: &ScrollState, now: Duration, margin: f64) -> bool {
    let options = &element.options;
    let region = &element.region;
    let next = match element.phase {
        Phase::Visible { .. } if !scroll.is_known() => element.phase,
        _ if !scroll.is_known() => Phase::Visible { settled_at: None },
        Phase::Pending => {
            if scroll.intersects(region, options.effective_threshold()) {
                Phase::Entering { since: now }
            } else if options.once && scroll.has_passed(region) {
                Phase::Visible { settled_at: None }
            } else {
                Phase::Pending
            }
        }
        Phase::Entering { .. } if !options.once && scroll.is_clear_of(region, margin) => {
            Phase::Pending
        }
        Phase::Entering { since } => {
            if now.saturating_sub(since) >= options.delay {
                Phase::Visible {
                    settled_at: Some(now),
                }
            } else {
                element.phase
            }
        }
        Phase::Visible { .. } if !options.once && scroll.is_clear_of(region, margin) => {
            Phase::Pending
        }
        Phase::Visible { .. } => element.phase,
    };
    let changed = next.state() != element.phase.state();
    if changed {
        log::trace!(
            "{:?}: {:?} -> {:?}",
            element.id,
            element.phase.state(),
            next.state()
        );
    }
    element.phase = next;
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEWPORT: f64 = 800.0;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn at(offset: f64) -> ScrollState {
        ScrollState::new(offset, VIEWPORT)
    }

    fn animator_at(offset: f64) -> Animator {
        let mut animator = Animator::default();
        animator.tick(at(offset), Duration::ZERO);
        animator
    }

    #[test]
    fn test_passed_elements_are_visible_on_registration() {
        let mut animator = animator_at(2000.0);
        let id = ElementId(1);
        animator.observe(id, Region::new(100.0, 300.0), ObserveOptions::default());
        assert_eq!(animator.state(id), Some(PresentationState::Visible));

        // repeatable elements get the same treatment
        let id = ElementId(2);
        animator.observe(
            id,
            Region::new(500.0, 100.0),
            ObserveOptions::default().once(false),
        );
        assert_eq!(animator.state(id), Some(PresentationState::Visible));

        // shown without playing, so the frame is already at rest
        let frame = animator.frame(ElementId(1)).unwrap();
        assert_eq!(frame.pose, Pose::REST);
    }

    #[test]
    fn test_registration_classifies_against_current_scroll() {
        let mut animator = animator_at(0.0);
        animator.observe(ElementId(1), Region::new(100.0, 50.0), ObserveOptions::default());
        animator.observe(ElementId(2), Region::new(2000.0, 50.0), ObserveOptions::default());
        assert_eq!(animator.state(ElementId(1)), Some(PresentationState::Entering));
        assert_eq!(animator.state(ElementId(2)), Some(PresentationState::Pending));
    }

    #[test]
    fn test_jump_scroll_enters_then_settles() {
        let mut animator = animator_at(0.0);
        let id = ElementId(7);
        animator.observe(
            id,
            Region::new(1000.0, 100.0),
            ObserveOptions::default().delay(ms(300)),
        );
        assert_eq!(animator.state(id), Some(PresentationState::Pending));

        let report = animator.tick(at(1050.0), ms(16));
        assert_eq!(animator.state(id), Some(PresentationState::Entering));
        assert_eq!(report.changed, 1);
        assert!(report.animating);

        animator.tick(at(1050.0), ms(200));
        assert_eq!(animator.state(id), Some(PresentationState::Entering));

        animator.tick(at(1050.0), ms(316));
        assert_eq!(animator.state(id), Some(PresentationState::Visible));
    }

    #[test]
    fn test_zero_delay_still_passes_through_entering() {
        let mut animator = animator_at(0.0);
        let id = ElementId(1);
        animator.observe(id, Region::new(1000.0, 100.0), ObserveOptions::default());
        animator.tick(at(900.0), ms(10));
        assert_eq!(animator.state(id), Some(PresentationState::Entering));
        animator.tick(at(900.0), ms(20));
        assert_eq!(animator.state(id), Some(PresentationState::Visible));
    }

    #[test]
    fn test_once_never_reverts() {
        let mut animator = animator_at(0.0);
        let id = ElementId(1);
        animator.observe(id, Region::new(1000.0, 100.0), ObserveOptions::default());
        animator.tick(at(900.0), ms(10));
        animator.tick(at(900.0), ms(20));
        assert_eq!(animator.state(id), Some(PresentationState::Visible));

        for (i, offset) in [0.0, 5000.0, 950.0, -300.0].into_iter().enumerate() {
            animator.tick(at(offset), ms(100 + i as u64));
            assert_eq!(animator.state(id), Some(PresentationState::Visible));
        }
    }

    #[test]
    fn test_once_element_skipped_over_is_shown() {
        let mut animator = animator_at(0.0);
        let id = ElementId(1);
        animator.observe(id, Region::new(1000.0, 100.0), ObserveOptions::default());
        animator.tick(at(4000.0), ms(16));
        assert_eq!(animator.state(id), Some(PresentationState::Visible));
        assert_eq!(animator.frame(id).unwrap().pose, Pose::REST);
    }

    #[test]
    fn test_repeatable_replays_full_sequence() {
        let mut animator = animator_at(0.0);
        let id = ElementId(3);
        animator.observe(
            id,
            Region::new(1000.0, 100.0),
            ObserveOptions::default().once(false).delay(ms(100)),
        );

        let mut now = 0;
        for _ in 0..3 {
            assert_eq!(animator.state(id), Some(PresentationState::Pending));
            now += 16;
            animator.tick(at(1050.0), ms(now));
            assert_eq!(animator.state(id), Some(PresentationState::Entering));
            now += 150;
            animator.tick(at(1050.0), ms(now));
            assert_eq!(animator.state(id), Some(PresentationState::Visible));
            now += 16;
            animator.tick(at(3000.0), ms(now));
        }
    }

    #[test]
    fn test_repeatable_leaving_while_entering_resets() {
        let mut animator = animator_at(0.0);
        let id = ElementId(1);
        animator.observe(
            id,
            Region::new(1000.0, 100.0),
            ObserveOptions::default().once(false).delay(ms(500)),
        );
        animator.tick(at(500.0), ms(10));
        assert_eq!(animator.state(id), Some(PresentationState::Entering));
        animator.tick(at(0.0), ms(20));
        assert_eq!(animator.state(id), Some(PresentationState::Pending));
    }

    #[test]
    fn test_hysteresis_margin_holds_state() {
        let mut animator = Animator::new(MotionConfig::default().with_hysteresis(50.0));
        animator.tick(at(0.0), Duration::ZERO);
        let id = ElementId(1);
        animator.observe(
            id,
            Region::new(1000.0, 100.0),
            ObserveOptions::default().once(false),
        );
        animator.tick(at(1000.0), ms(10));
        animator.tick(at(1000.0), ms(20));
        assert_eq!(animator.state(id), Some(PresentationState::Visible));

        // bottom edge 30px above the viewport, inside the margin
        animator.tick(at(1130.0), ms(30));
        assert_eq!(animator.state(id), Some(PresentationState::Visible));

        // top edge 40px below the viewport, inside the margin
        animator.tick(at(160.0), ms(40));
        assert_eq!(animator.state(id), Some(PresentationState::Visible));

        animator.tick(at(1151.0), ms(50));
        assert_eq!(animator.state(id), Some(PresentationState::Pending));
    }

    #[test]
    fn test_threshold_fraction() {
        let mut animator = animator_at(0.0);
        let id = ElementId(1);
        animator.observe(
            id,
            Region::new(700.0, 200.0),
            ObserveOptions::default().threshold(0.6),
        );
        // 100 of 200px on screen
        assert_eq!(animator.state(id), Some(PresentationState::Pending));
        animator.tick(at(10.0), ms(10));
        assert_eq!(animator.state(id), Some(PresentationState::Pending));
        animator.tick(at(100.0), ms(20));
        assert_eq!(animator.state(id), Some(PresentationState::Entering));
    }

    #[test]
    fn test_config_default_threshold() {
        let config = MotionConfig {
            default_threshold: 0.6,
            ..Default::default()
        };
        let mut animator = Animator::new(config);
        animator.tick(at(0.0), Duration::ZERO);

        animator.observe(ElementId(1), Region::new(700.0, 200.0), ObserveOptions::default());
        assert_eq!(animator.state(ElementId(1)), Some(PresentationState::Pending));

        // explicit threshold wins over the config
        animator.observe(
            ElementId(2),
            Region::new(700.0, 200.0),
            ObserveOptions::default().threshold(0.0),
        );
        assert_eq!(animator.state(ElementId(2)), Some(PresentationState::Entering));
    }

    #[test]
    fn test_unknown_viewport_degrades_to_visible() {
        let mut animator = Animator::default();
        let id = ElementId(1);
        animator.observe(id, Region::new(5000.0, 100.0), ObserveOptions::default());
        assert_eq!(animator.state(id), Some(PresentationState::Visible));

        let mut animator = animator_at(0.0);
        animator.observe(id, Region::new(5000.0, 100.0), ObserveOptions::default());
        assert_eq!(animator.state(id), Some(PresentationState::Pending));
        animator.tick(ScrollState::new(0.0, f64::NAN), ms(10));
        assert_eq!(animator.state(id), Some(PresentationState::Visible));
    }

    #[test]
    fn test_reobserve_replaces_configuration() {
        let mut animator = animator_at(0.0);
        let id = ElementId(4);
        animator.observe(ElementId(1), Region::new(3000.0, 10.0), ObserveOptions::default());
        animator.observe(id, Region::new(3000.0, 10.0), ObserveOptions::default());
        animator.observe(
            id,
            Region::new(100.0, 10.0),
            ObserveOptions::default().once(false),
        );

        assert_eq!(animator.len(), 2);
        let elements = animator.elements();
        assert_eq!(elements[0].id, ElementId(1));
        assert_eq!(elements[1].id, id);
        assert_eq!(elements[1].order, 1);
        assert!(!elements[1].options.once);
        assert_eq!(animator.state(id), Some(PresentationState::Entering));
    }

    #[test]
    fn test_unobserve_is_idempotent() {
        let mut animator = animator_at(0.0);
        let id = ElementId(9);
        animator.observe(id, Region::new(100.0, 10.0), ObserveOptions::default());
        animator.observe(ElementId(10), Region::new(100.0, 10.0), ObserveOptions::default());

        assert!(animator.unobserve(id));
        assert!(!animator.unobserve(id));
        assert!(!animator.unobserve(ElementId(404)));
        assert_eq!(animator.len(), 1);
        assert_eq!(animator.state(id), None);
        assert_eq!(animator.frame(id), None);

        let report = animator.tick(at(0.0), ms(10));
        assert_eq!(report.changed, 1);
    }

    #[test]
    fn test_update_region_applies_on_tick() {
        let mut animator = animator_at(0.0);
        let id = ElementId(1);
        animator.observe(id, Region::new(3000.0, 100.0), ObserveOptions::default());
        animator.update_region(id, Region::new(200.0, 100.0));
        assert_eq!(animator.state(id), Some(PresentationState::Pending));
        animator.tick(at(0.0), ms(10));
        assert_eq!(animator.state(id), Some(PresentationState::Entering));
        animator.update_region(ElementId(99), Region::new(0.0, 1.0));
    }

    #[test]
    fn test_frame_interpolates_after_settling() {
        let mut animator = animator_at(0.0);
        let id = ElementId(1);
        let transition = Transition::default()
            .starting_from(Pose::rise(40.0))
            .duration(ms(1000))
            .easing(crate::motion::Easing::Linear);
        animator.observe(
            id,
            Region::new(1000.0, 100.0),
            ObserveOptions::default().transition(transition),
        );
        assert_eq!(animator.frame(id).unwrap().pose, Pose::rise(40.0));

        animator.tick(at(900.0), ms(0));
        assert_eq!(animator.frame(id).unwrap().pose, Pose::rise(40.0));
        animator.tick(at(900.0), ms(100));
        animator.tick(at(900.0), ms(600));
        let frame = animator.frame(id).unwrap();
        assert_eq!(frame.state, PresentationState::Visible);
        assert!((frame.pose.opacity - 0.5).abs() < 1e-9);
        assert!((frame.pose.translate_y - 20.0).abs() < 1e-9);

        let report = animator.tick(at(900.0), ms(1100));
        assert!(!report.animating);
        assert!(animator.frame(id).unwrap().pose.approx_eq(&Pose::REST, 1e-9));
    }

    #[test]
    fn test_negative_delay_is_clamped() {
        let options = ObserveOptions::default().delay_secs(-2.0);
        assert_eq!(options.delay, Duration::ZERO);
        let options = ObserveOptions::default().delay_secs(f64::INFINITY);
        assert_eq!(options.delay, Duration::ZERO);
        let options = ObserveOptions::default().delay_secs(0.25);
        assert_eq!(options.delay, ms(250));
        let options = ObserveOptions::default().delay_secs(1e30);
        assert_eq!(options.delay, Duration::MAX);
    }

    #[test]
    fn test_negative_hysteresis_does_not_flicker() {
        let config = MotionConfig {
            hysteresis_px: -200.0,
            ..Default::default()
        };
        let mut animator = Animator::new(config);
        animator.tick(at(900.0), Duration::ZERO);
        let id = ElementId(1);
        animator.observe(id, Region::new(1000.0, 100.0), ObserveOptions::default().once(false));

        let states: Vec<_> = (1..=6)
            .map(|i| {
                animator.tick(at(900.0), ms(40 * i));
                animator.state(id).unwrap()
            })
            .collect();
        assert!(states.iter().all(|s| *s == PresentationState::Visible));
    }

    #[test]
    fn test_huge_delay_stays_entering() {
        let mut animator = animator_at(0.0);
        let id = ElementId(1);
        animator.observe(
            id,
            Region::new(100.0, 100.0),
            ObserveOptions::default().delay_secs(1e30),
        );
        animator.tick(at(0.0), Duration::from_secs(3600));
        animator.tick(at(0.0), Duration::from_secs(86_400 * 365));
        assert_eq!(animator.state(id), Some(PresentationState::Entering));
    }

    #[test]
    fn test_zero_height_region() {
        let scroll = at(100.0);
        assert_eq!(scroll.visible_fraction(&Region::new(100.0, 0.0)), 1.0);
        assert_eq!(scroll.visible_fraction(&Region::new(900.0, 0.0)), 0.0);
        assert_eq!(Region::new(10.0, -5.0).height, 0.0);
    }

    fn run(threshold: f64, once: bool, offsets: &[f64]) -> Vec<PresentationState> {
        let mut animator = animator_at(0.0);
        let id = ElementId(1);
        animator.observe(
            id,
            Region::new(1000.0, 300.0),
            ObserveOptions::default()
                .once(once)
                .threshold(threshold)
                .delay(ms(50)),
        );
        offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| {
                animator.tick(at(*offset), ms(40 * (i as u64 + 1)));
                animator.state(id).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_threshold_above_one_clamps() {
        let offsets = [0.0, 400.0, 700.0, 700.0, 1000.0, 1000.0, 1000.0];
        assert_eq!(run(1.5, true, &offsets), run(1.0, true, &offsets));
        assert_eq!(run(-3.0, true, &offsets), run(0.0, true, &offsets));
    }

    proptest! {
        #[test]
        fn prop_once_visible_is_sticky(offsets in proptest::collection::vec(-500.0f64..6000.0, 1..40)) {
            let states = run(0.0, true, &offsets);
            if let Some(first) = states.iter().position(|s| *s == PresentationState::Visible) {
                prop_assert!(states[first..].iter().all(|s| *s == PresentationState::Visible));
            }
        }

        #[test]
        fn prop_threshold_clamp_is_identity_above_one(
            threshold in 1.0f64..100.0,
            offsets in proptest::collection::vec(0.0f64..3000.0, 1..30),
        ) {
            prop_assert_eq!(run(threshold, false, &offsets), run(1.0, false, &offsets));
        }

        #[test]
        fn prop_repeatable_never_skips_entering(offsets in proptest::collection::vec(0.0f64..3000.0, 1..40)) {
            let mut previous = PresentationState::Pending;
            for state in run(0.0, false, &offsets) {
                prop_assert!(!(previous == PresentationState::Pending && state == PresentationState::Visible));
                previous = state;
            }
        }
    }
}
