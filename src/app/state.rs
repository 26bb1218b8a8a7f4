// app/state.rs - Core Application State
//
// The responsive layout state machine shared by both sample binaries: which
// panes are visible, which item is selected, and whether a detail crossfade
// is in flight. Window events and taps feed in here; the views only read.

use std::time::{Duration, Instant};

use crate::constants::fade;

/// Whether the window currently fits one pane or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneLayout {
    /// Narrow window, one pane at a time
    #[default]
    Single,
    /// Wide (spanned) window, list and detail side by side
    Dual,
}

/// Navigation state for single-pane mode. List is the start destination,
/// Detail is pushed on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    List,
    Detail,
}

/// Which composite view the window should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisiblePanes {
    ListOnly,
    DetailOnly,
    Split,
}

/// Selected list index, kept valid against the item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    count: usize,
}

impl Selection {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Current index, `None` when the backing list is empty.
    pub fn selected(&self) -> Option<usize> {
        (self.count > 0).then_some(self.index)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Select `index`, clamped into range. Returns the previous index when
    /// this was an effective change, `None` for no-ops.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let clamped = index.min(self.count - 1);
        if clamped == self.index {
            return None;
        }
        let previous = self.index;
        self.index = clamped;
        Some(previous)
    }

    pub fn select_next(&mut self) -> Option<usize> {
        self.select(self.index.saturating_add(1))
    }

    pub fn select_previous(&mut self) -> Option<usize> {
        self.select(self.index.saturating_sub(1))
    }
}

/// A detail transition in flight: the outgoing index and when it started.
#[derive(Debug, Clone, Copy)]
pub struct Crossfade {
    /// Index of the item fading out
    pub from: usize,
    started: Instant,
}

impl Crossfade {
    pub fn duration() -> Duration {
        Duration::from_millis(fade::CROSSFADE_MS)
    }

    /// Fade progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / Self::duration().as_secs_f32()).min(1.0)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Main application state
/// This is the single source of truth for all per-window data
#[derive(Debug)]
pub struct AppState {
    selection: Selection,
    layout: PaneLayout,
    screen: Screen,
    fade: Option<Crossfade>,
}

impl AppState {
    /// Fresh state over `item_count` items: first item selected, single-pane
    /// layout, list screen.
    pub fn new(item_count: usize) -> Self {
        Self {
            selection: Selection::new(item_count),
            layout: PaneLayout::default(),
            screen: Screen::default(),
            fade: None,
        }
    }

    /// Restore a persisted selection without starting a crossfade. The index
    /// is clamped against the item count.
    pub fn with_initial_selection(mut self, index: usize) -> Self {
        self.selection.select(index);
        self
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn layout(&self) -> PaneLayout {
        self.layout
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The view selector: exactly one composite view per state.
    pub fn visible_panes(&self) -> VisiblePanes {
        match (self.layout, self.screen) {
            (PaneLayout::Dual, _) => VisiblePanes::Split,
            (PaneLayout::Single, Screen::List) => VisiblePanes::ListOnly,
            (PaneLayout::Single, Screen::Detail) => VisiblePanes::DetailOnly,
        }
    }

    /// Row tap or keyboard selection. Starts the detail crossfade on an
    /// effective change; re-selecting the current row is a no-op. Returns
    /// whether the selection actually moved.
    pub fn select(&mut self, index: usize, now: Instant) -> bool {
        match self.selection.select(index) {
            Some(previous) => {
                self.fade = Some(Crossfade { from: previous, started: now });
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self, now: Instant) -> bool {
        match self.selection.select_next() {
            Some(previous) => {
                self.fade = Some(Crossfade { from: previous, started: now });
                true
            }
            None => false,
        }
    }

    pub fn select_previous(&mut self, now: Instant) -> bool {
        match self.selection.select_previous() {
            Some(previous) => {
                self.fade = Some(Crossfade { from: previous, started: now });
                true
            }
            None => false,
        }
    }

    /// Apply a layout mode change from the resize handler or a posture
    /// override. Entering single-pane mode restarts navigation at the list,
    /// so the window never comes back up on a stale detail screen.
    pub fn set_layout(&mut self, layout: PaneLayout) -> bool {
        if layout == self.layout {
            return false;
        }
        self.layout = layout;
        if layout == PaneLayout::Single {
            self.screen = Screen::List;
        }
        true
    }

    /// Push the detail screen. Only meaningful in single-pane mode with a
    /// live selection; anywhere else this is a no-op.
    pub fn open_detail(&mut self) -> bool {
        if self.layout == PaneLayout::Single
            && self.screen == Screen::List
            && self.selected().is_some()
        {
            self.screen = Screen::Detail;
            true
        } else {
            false
        }
    }

    /// Pop back to the list screen.
    pub fn go_back(&mut self) -> bool {
        if self.screen == Screen::Detail {
            self.screen = Screen::List;
            true
        } else {
            false
        }
    }

    /// The crossfade in flight, if any.
    pub fn fade(&self) -> Option<Crossfade> {
        self.fade
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Animation tick: drops the fade once it has run its course.
    pub fn tick(&mut self, now: Instant) {
        if let Some(fade) = self.fade {
            if fade.is_done(now) {
                self.fade = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_defaults_to_first_item() {
        let selection = Selection::new(5);
        assert_eq!(selection.selected(), Some(0));
    }

    #[test]
    fn selection_is_none_when_empty() {
        let mut selection = Selection::new(0);
        assert_eq!(selection.selected(), None);
        assert_eq!(selection.select(3), None);
    }

    #[test]
    fn selection_clamps_out_of_range_indices() {
        let mut selection = Selection::new(3);
        assert_eq!(selection.select(99), Some(0));
        assert_eq!(selection.selected(), Some(2));
    }

    #[test]
    fn reselecting_current_index_is_a_noop() {
        let mut selection = Selection::new(3);
        selection.select(1);
        assert_eq!(selection.select(1), None);
        assert_eq!(selection.selected(), Some(1));
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        let mut selection = Selection::new(2);
        assert_eq!(selection.select_previous(), None);
        assert_eq!(selection.select_next(), Some(0));
        assert_eq!(selection.select_next(), None);
        assert_eq!(selection.selected(), Some(1));
    }

    #[test]
    fn initial_selection_is_clamped_and_does_not_fade() {
        let state = AppState::new(3).with_initial_selection(42);
        assert_eq!(state.selected(), Some(2));
        assert!(!state.is_fading());
    }

    #[test]
    fn visible_panes_follow_layout_and_screen() {
        let mut state = AppState::new(2);
        assert_eq!(state.visible_panes(), VisiblePanes::ListOnly);

        assert!(state.open_detail());
        assert_eq!(state.visible_panes(), VisiblePanes::DetailOnly);

        state.set_layout(PaneLayout::Dual);
        assert_eq!(state.visible_panes(), VisiblePanes::Split);
    }

    #[test]
    fn select_starts_a_crossfade_from_the_previous_item() {
        let now = Instant::now();
        let mut state = AppState::new(3);
        assert!(state.select(2, now));
        let fade = state.fade().unwrap();
        assert_eq!(fade.from, 0);
    }

    #[test]
    fn reselecting_does_not_restart_the_fade() {
        let now = Instant::now();
        let mut state = AppState::new(3);
        state.select(1, now);
        state.tick(now + Crossfade::duration());
        assert!(!state.is_fading());
        assert!(!state.select(1, now + Crossfade::duration()));
        assert!(!state.is_fading());
    }

    #[test]
    fn crossfade_progress_runs_zero_to_one() {
        let t0 = Instant::now();
        let mut state = AppState::new(2);
        state.select(1, t0);
        let fade = state.fade().unwrap();
        assert_eq!(fade.progress(t0), 0.0);
        let halfway = fade.progress(t0 + Crossfade::duration() / 2);
        assert!((halfway - 0.5).abs() < 0.01);
        assert!(fade.is_done(t0 + Crossfade::duration()));

        state.tick(t0 + Crossfade::duration());
        assert!(!state.is_fading());
    }

    #[test]
    fn entering_single_pane_resets_to_the_list() {
        let mut state = AppState::new(2);
        state.set_layout(PaneLayout::Dual);
        assert!(!state.open_detail());

        state.set_layout(PaneLayout::Single);
        assert!(state.open_detail());
        assert_eq!(state.screen(), Screen::Detail);

        state.set_layout(PaneLayout::Dual);
        state.set_layout(PaneLayout::Single);
        assert_eq!(state.screen(), Screen::List);
    }

    #[test]
    fn back_only_works_from_the_detail_screen() {
        let mut state = AppState::new(2);
        assert!(!state.go_back());
        state.open_detail();
        assert!(state.go_back());
        assert_eq!(state.screen(), Screen::List);
    }

    #[test]
    fn detail_cannot_open_without_items() {
        let mut state = AppState::new(0);
        assert!(!state.open_detail());
        assert_eq!(state.visible_panes(), VisiblePanes::ListOnly);
    }
}
