//! Wheel-driven progress for the stacked service cards.
//!
//! While the section fills the viewport, wheel input is captured and fed
//! into a clamped accumulator instead of scrolling the page. Once every card
//! has been revealed, downward input is handed back to the page so the user
//! can leave the section.

use std::rc::Rc;

use super::interpolate::{interpolate, CARD_OPACITY, COVERED_BRIGHTNESS, OFFSET_VH};
use super::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Section rectangle relative to the viewport, as `getBoundingClientRect`
/// reports it, plus the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Entirely above the viewport.
    Above,
    /// Entirely below the viewport.
    Below,
    /// Covers the whole viewport.
    Pinned,
    /// Partly visible, entering or leaving.
    Partial,
}

impl SectionBounds {
    pub fn placement(&self) -> Placement {
        if self.bottom <= 0.0 {
            Placement::Above
        } else if self.top >= self.viewport_height {
            Placement::Below
        } else if self.top <= 0.0 && self.bottom >= self.viewport_height {
            Placement::Pinned
        } else {
            Placement::Partial
        }
    }

    /// Share of the viewport height the section currently occupies.
    pub fn visible_fraction(&self) -> f64 {
        if self.viewport_height <= 0.0 {
            return 0.0;
        }
        let visible = self.bottom.min(self.viewport_height) - self.top.max(0.0);
        (visible / self.viewport_height).clamp(0.0, 1.0)
    }

    /// Share of the element itself that is inside the viewport.
    pub fn element_fraction(&self) -> f64 {
        let height = self.bottom - self.top;
        if height <= 0.0 {
            return 0.0;
        }
        let visible = self.bottom.min(self.viewport_height) - self.top.max(0.0);
        (visible / height).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// The sequencer consumed the event; the page must not scroll.
    Captured,
    /// The page scrolls as usual.
    PassThrough,
}

impl WheelOutcome {
    pub fn should_prevent_default(self) -> bool {
        self == WheelOutcome::Captured
    }
}

pub struct ScrollSequencer {
    item_count: usize,
    budget: f64,
    accumulator: f64,
    lock: Rc<ScrollLock>,
    guard: Option<ScrollLockGuard>,
}

impl ScrollSequencer {
    pub fn new(item_count: usize, budget: f64, lock: Rc<ScrollLock>) -> Self {
        Self {
            item_count,
            budget: budget.max(0.0),
            accumulator: 0.0,
            lock,
            guard: None,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn total_distance(&self) -> f64 {
        self.item_count as f64 * self.budget
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Normalized progress in `[0, 1]`. A sequence with nothing to reveal is
    /// complete from the start.
    pub fn progress(&self) -> f64 {
        let total = self.total_distance();
        if total <= 0.0 {
            return 1.0;
        }
        (self.accumulator / total).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn is_locked(&self) -> bool {
        self.guard.is_some()
    }

    pub fn on_wheel(&mut self, delta_y: f64, bounds: SectionBounds) -> WheelOutcome {
        match bounds.placement() {
            Placement::Above | Placement::Below => {
                self.reset();
                WheelOutcome::PassThrough
            }
            Placement::Partial => {
                self.unlock();
                WheelOutcome::PassThrough
            }
            Placement::Pinned => {
                let leaving_down = delta_y > 0.0 && self.is_complete();
                let leaving_up = delta_y < 0.0 && self.accumulator <= 0.0;
                if leaving_down || leaving_up {
                    self.unlock();
                    return WheelOutcome::PassThrough;
                }
                self.accumulator = (self.accumulator + delta_y).clamp(0.0, self.total_distance());
                self.lock();
                WheelOutcome::Captured
            }
        }
    }

    /// Native scroll moved the section; only the out-of-view reset applies.
    pub fn on_scroll(&mut self, bounds: SectionBounds) {
        match bounds.placement() {
            Placement::Above | Placement::Below => self.reset(),
            Placement::Partial => self.unlock(),
            Placement::Pinned => {}
        }
    }

    pub fn reset(&mut self) {
        if self.accumulator != 0.0 || self.is_locked() {
            log::debug!("services sequence reset");
        }
        self.accumulator = 0.0;
        self.unlock();
    }

    /// Styling for every card at the current progress.
    pub fn frames(&self) -> Vec<CardFrame> {
        let progress = self.progress();
        (0..self.item_count)
            .map(|index| CardFrame::at(progress, index, self.item_count))
            .collect()
    }

    fn lock(&mut self) {
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
    }

    fn unlock(&mut self) {
        self.guard = None;
    }
}

/// Progress of card `index` through its own slice `[i/N, (i+1)/N)`.
pub fn item_progress(progress: f64, index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let slice = 1.0 / count as f64;
    let start = index as f64 / count as f64;
    ((progress - start) / slice).clamp(0.0, 1.0)
}

/// Scale a card settles at once fully covered; deeper cards shrink more.
pub fn target_scale(index: usize, count: usize) -> f64 {
    let below = count.saturating_sub(1).saturating_sub(index) as f64;
    1.0 - below * 0.1
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub item_progress: f64,
    /// Vertical offset in percent of the viewport height.
    pub translate_y_vh: f64,
    pub opacity: f64,
    pub scale: f64,
    pub brightness: f64,
    /// Cascading inset independent of progress.
    pub top_inset_px: f64,
}

impl CardFrame {
    pub fn at(progress: f64, index: usize, count: usize) -> Self {
        let own = item_progress(progress, index, count);
        let is_last = index + 1 >= count;
        let (scale, brightness) = if is_last {
            (1.0, 1.0)
        } else {
            let next = item_progress(progress, index + 1, count);
            let target = target_scale(index, count);
            (
                interpolate(next, &[(0.0, 1.0), (1.0, target)]),
                interpolate(next, &COVERED_BRIGHTNESS),
            )
        };

        Self {
            item_progress: own,
            translate_y_vh: interpolate(own, &OFFSET_VH),
            opacity: interpolate(own, &CARD_OPACITY),
            scale,
            brightness,
            top_inset_px: 20.0 + index as f64 * 20.0,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.item_progress > 0.0
    }

    /// Inline style for the card wrapper.
    pub fn wrapper_style(&self, index: usize) -> String {
        format!(
            "transform: translateY({:.3}vh); opacity: {:.3}; z-index: {}; padding-top: {}px; pointer-events: {};",
            self.translate_y_vh,
            self.opacity,
            index,
            self.top_inset_px,
            if self.is_interactive() { "auto" } else { "none" },
        )
    }

    /// Inline style for the card body that shrinks and dims under the next card.
    pub fn body_style(&self) -> String {
        format!(
            "transform: scale({:.4}); filter: brightness({:.3}); transform-origin: center top;",
            self.scale, self.brightness,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scroll_lock::testing::RecordingHost;

    const BUDGET: f64 = 100.0;
    const PINNED: SectionBounds = SectionBounds { top: -10.0, bottom: 1500.0, viewport_height: 800.0 };
    const ABOVE: SectionBounds = SectionBounds { top: -2400.0, bottom: -20.0, viewport_height: 800.0 };
    const BELOW: SectionBounds = SectionBounds { top: 900.0, bottom: 3000.0, viewport_height: 800.0 };
    const ENTERING: SectionBounds = SectionBounds { top: 300.0, bottom: 2400.0, viewport_height: 800.0 };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sequencer(count: usize) -> (ScrollSequencer, RecordingHost, Rc<ScrollLock>) {
        let host = RecordingHost::default();
        let lock = ScrollLock::new(host.clone());
        (ScrollSequencer::new(count, BUDGET, Rc::clone(&lock)), host, lock)
    }

    #[test]
    fn classifies_placement() {
        assert_eq!(PINNED.placement(), Placement::Pinned);
        assert_eq!(ABOVE.placement(), Placement::Above);
        assert_eq!(BELOW.placement(), Placement::Below);
        assert_eq!(ENTERING.placement(), Placement::Partial);
        assert!(close(ENTERING.visible_fraction(), 500.0 / 800.0));
        assert!(close(PINNED.visible_fraction(), 1.0));
        assert!(close(BELOW.visible_fraction(), 0.0));

        let card = SectionBounds { top: 700.0, bottom: 1000.0, viewport_height: 800.0 };
        assert!(close(card.element_fraction(), 100.0 / 300.0));
    }

    #[test]
    fn progress_stays_in_unit_range_for_any_deltas() {
        let (mut seq, _, _) = sequencer(4);
        let deltas = [
            120.0, -500.0, 33.3, 999.0, 250.0, -75.0, 1e6, -1e6, 0.0, 42.0, -3.5, 400.0, 400.0, -0.1,
        ];
        for (i, delta) in deltas.iter().cycle().take(200).enumerate() {
            let _ = seq.on_wheel(*delta * (1.0 + (i % 7) as f64), PINNED);
            let p = seq.progress();
            assert!((0.0..=1.0).contains(&p), "progress {} out of range", p);
            assert!(seq.accumulator() >= 0.0 && seq.accumulator() <= seq.total_distance());
        }
    }

    #[test]
    fn captures_and_locks_while_pinned_and_incomplete() {
        let (mut seq, host, lock) = sequencer(4);
        assert_eq!(seq.on_wheel(150.0, PINNED), WheelOutcome::Captured);
        assert!(seq.is_locked());
        assert!(lock.is_engaged());
        assert!(close(seq.progress(), 150.0 / 400.0));

        assert_eq!(seq.on_wheel(-50.0, PINNED), WheelOutcome::Captured);
        assert!(close(seq.accumulator(), 100.0));
        assert_eq!(*host.calls.borrow(), vec![true]);
    }

    #[test]
    fn completion_releases_lock_for_downward_wheel() {
        let (mut seq, host, lock) = sequencer(4);
        assert!(seq.on_wheel(10_000.0, PINNED).should_prevent_default());
        assert!(seq.is_complete());
        assert!(seq.is_locked());

        let outcome = seq.on_wheel(30.0, PINNED);
        assert_eq!(outcome, WheelOutcome::PassThrough);
        assert!(!outcome.should_prevent_default());
        assert!(!seq.is_locked());
        assert!(!lock.is_engaged());
        assert_eq!(*host.calls.borrow(), vec![true, false]);
        assert!(close(seq.progress(), 1.0));
    }

    #[test]
    fn upward_wheel_after_completion_rewinds() {
        let (mut seq, _, _) = sequencer(4);
        seq.on_wheel(10_000.0, PINNED);
        seq.on_wheel(30.0, PINNED);
        assert_eq!(seq.on_wheel(-100.0, PINNED), WheelOutcome::Captured);
        assert!(close(seq.progress(), 0.75));
    }

    #[test]
    fn upward_wheel_at_start_passes_through() {
        let (mut seq, _, lock) = sequencer(4);
        assert_eq!(seq.on_wheel(-40.0, PINNED), WheelOutcome::PassThrough);
        assert!(!lock.is_engaged());
        assert_eq!(seq.accumulator(), 0.0);
    }

    #[test]
    fn leaving_viewport_resets_everything() {
        for outside in [ABOVE, BELOW] {
            let (mut seq, _, lock) = sequencer(4);
            seq.on_wheel(250.0, PINNED);
            assert!(seq.is_locked());

            assert_eq!(seq.on_wheel(10.0, outside), WheelOutcome::PassThrough);
            assert_eq!(seq.accumulator(), 0.0);
            assert!(!seq.is_locked());
            assert!(!lock.is_engaged());
        }

        let (mut seq, _, _) = sequencer(4);
        seq.on_wheel(10_000.0, PINNED);
        seq.on_scroll(ABOVE);
        assert_eq!(seq.progress(), 0.0);
    }

    #[test]
    fn partial_visibility_unlocks_but_keeps_progress() {
        let (mut seq, _, lock) = sequencer(4);
        seq.on_wheel(200.0, PINNED);
        assert_eq!(seq.on_wheel(20.0, ENTERING), WheelOutcome::PassThrough);
        assert!(!lock.is_engaged());
        assert!(close(seq.progress(), 0.5));
    }

    #[test]
    fn dropping_sequencer_releases_page_lock() {
        let (mut seq, host, lock) = sequencer(3);
        seq.on_wheel(50.0, PINNED);
        assert!(lock.is_engaged());
        drop(seq);
        assert!(!lock.is_engaged());
        assert_eq!(host.calls.borrow().last(), Some(&false));
    }

    #[test]
    fn two_sequencers_share_the_page_lock() {
        let host = RecordingHost::default();
        let lock = ScrollLock::new(host.clone());
        let mut a = ScrollSequencer::new(2, BUDGET, Rc::clone(&lock));
        let mut b = ScrollSequencer::new(2, BUDGET, Rc::clone(&lock));
        a.on_wheel(10.0, PINNED);
        b.on_wheel(10.0, PINNED);
        a.reset();
        assert!(lock.is_engaged());
        b.reset();
        assert!(!lock.is_engaged());
        assert_eq!(*host.calls.borrow(), vec![true, false]);
    }

    #[test]
    fn empty_sequence_never_captures() {
        let (mut seq, _, lock) = sequencer(0);
        assert!(seq.is_complete());
        assert_eq!(seq.on_wheel(50.0, PINNED), WheelOutcome::PassThrough);
        assert!(!lock.is_engaged());
        assert!(seq.frames().is_empty());
    }

    #[test]
    fn item_mapping_at_boundaries() {
        let first = CardFrame::at(0.0, 0, 4);
        assert_eq!(first.item_progress, 0.0);
        assert_eq!(first.opacity, 0.0);
        assert_eq!(first.translate_y_vh, 100.0);

        let last = CardFrame::at(1.0, 3, 4);
        assert_eq!(last.item_progress, 1.0);
        assert_eq!(last.translate_y_vh, 0.0);
        assert_eq!(last.opacity, 1.0);
        assert_eq!(last.scale, 1.0);
        assert_eq!(last.brightness, 1.0);

        assert_eq!(item_progress(0.5, 1, 4), 1.0);
        assert_eq!(item_progress(0.5, 2, 4), 0.0);
    }

    #[test]
    fn covered_cards_shrink_and_dim() {
        // Card 0 of 4 is fully covered once card 1 has finished its slice.
        let covered = CardFrame::at(0.5, 0, 4);
        assert!(close(covered.scale, 0.7));
        assert!(close(covered.brightness, 0.6));

        // Halfway through card 2's slice, card 1 is half shrunk.
        let half = CardFrame::at(0.625, 1, 4);
        assert!(close(half.scale, 1.0 - (1.0 - 0.8) * 0.5));
        assert!(close(half.brightness, 1.0 - 0.4 * 0.5));

        assert!(close(target_scale(3, 4), 1.0));
        assert!(close(target_scale(0, 4), 0.7));
    }

    #[test]
    fn opacity_and_offset_follow_own_slice() {
        let frame = CardFrame::at(0.125, 0, 4);
        assert!(close(frame.item_progress, 0.5));
        assert!(close(frame.opacity, 1.0));
        assert!(close(frame.translate_y_vh, 50.0));
        assert!(close(CardFrame::at(0.0625, 0, 4).opacity, 0.5));
    }

    #[test]
    fn insets_cascade_by_index() {
        let (seq, _, _) = sequencer(4);
        let insets: Vec<f64> = seq.frames().iter().map(|f| f.top_inset_px).collect();
        assert_eq!(insets, vec![20.0, 40.0, 60.0, 80.0]);
    }

    #[test]
    fn styles_render_numbers() {
        let frame = CardFrame::at(1.0, 1, 2);
        assert_eq!(
            frame.wrapper_style(1),
            "transform: translateY(0.000vh); opacity: 1.000; z-index: 1; padding-top: 40px; pointer-events: auto;"
        );
        assert_eq!(
            frame.body_style(),
            "transform: scale(1.0000); filter: brightness(1.000); transform-origin: center top;"
        );
    }
}
