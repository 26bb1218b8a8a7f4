// Scenario tests for the responsive layout state machine, driven the way
// the binaries drive it: resize events pick a layout, taps move the
// selection, navigation pushes and pops the detail screen.

use std::time::Instant;

use hingeview::{
    AppState, Crossfade, GalleryItem, PaneLayout, Posture, Screen, Settings, VisiblePanes,
};

fn two_items() -> Vec<GalleryItem> {
    vec![
        GalleryItem::new("1", "First", 1),
        GalleryItem::new("2", "Second", 2),
    ]
}

fn spanned_state(items: &[GalleryItem]) -> AppState {
    let mut state = AppState::new(items.len());
    state.set_layout(PaneLayout::Dual);
    state
}

#[test]
fn spanned_window_shows_list_and_detail_together() {
    let items = two_items();
    let state = spanned_state(&items);

    assert_eq!(state.visible_panes(), VisiblePanes::Split);
    // Both panes render from the same selection
    let selected = state.selected().unwrap();
    assert_eq!(items[selected].id, "1");
}

#[test]
fn tapping_a_row_updates_the_detail_pane() {
    let items = two_items();
    let mut state = spanned_state(&items);

    assert!(state.select(1, Instant::now()));
    assert_eq!(items[state.selected().unwrap()].id, "2");
    assert_eq!(state.visible_panes(), VisiblePanes::Split);
}

#[test]
fn retapping_the_selected_row_changes_nothing() {
    let items = two_items();
    let mut state = spanned_state(&items);
    let t0 = Instant::now();

    state.select(1, t0);
    state.tick(t0 + Crossfade::duration());

    assert!(!state.select(1, t0 + Crossfade::duration()));
    assert_eq!(items[state.selected().unwrap()].id, "2");
    assert!(!state.is_fading());
}

#[test]
fn narrow_window_navigates_between_list_and_detail() {
    let mut state = AppState::new(2);
    assert_eq!(state.visible_panes(), VisiblePanes::ListOnly);

    // Row tap: select then push, the way the listdetail binary wires it
    state.select(1, Instant::now());
    assert!(state.open_detail());
    assert_eq!(state.visible_panes(), VisiblePanes::DetailOnly);

    assert!(state.go_back());
    assert_eq!(state.visible_panes(), VisiblePanes::ListOnly);
    // Selection survives the round trip
    assert_eq!(state.selected(), Some(1));
}

#[test]
fn unspanning_from_detail_lands_back_on_the_list() {
    let mut state = AppState::new(3);
    state.open_detail();
    state.set_layout(PaneLayout::Dual);

    // Narrowing the window rebuilds single-pane navigation at the start
    state.set_layout(PaneLayout::Single);
    assert_eq!(state.screen(), Screen::List);
    assert_eq!(state.visible_panes(), VisiblePanes::ListOnly);
}

#[test]
fn resize_across_the_breakpoint_flips_the_layout() {
    let settings = Settings::default();
    let posture = Posture::Auto;
    let mut state = AppState::new(2);

    state.set_layout(posture.layout_for_width(700.0, settings.span_breakpoint));
    assert_eq!(state.visible_panes(), VisiblePanes::ListOnly);

    state.set_layout(posture.layout_for_width(1400.0, settings.span_breakpoint));
    assert_eq!(state.visible_panes(), VisiblePanes::Split);

    state.set_layout(posture.layout_for_width(700.0, settings.span_breakpoint));
    assert_eq!(state.visible_panes(), VisiblePanes::ListOnly);
}

#[test]
fn pinned_posture_ignores_the_window_width() {
    let settings = Settings::default();
    let posture = Posture::from_args(["hingeview_gallery", "--spanned"]);
    let mut state = AppState::new(2);

    state.set_layout(posture.layout_for_width(500.0, settings.span_breakpoint));
    assert_eq!(state.visible_panes(), VisiblePanes::Split);
}

#[test]
fn selection_moves_start_a_crossfade_that_expires() {
    let mut state = AppState::new(3);
    let t0 = Instant::now();

    state.select(2, t0);
    let fade = state.fade().expect("selection change starts a fade");
    assert_eq!(fade.from, 0);
    assert!(fade.progress(t0) < f32::EPSILON);

    state.tick(t0 + Crossfade::duration() / 2);
    assert!(state.is_fading());

    state.tick(t0 + Crossfade::duration());
    assert!(!state.is_fading());
}

#[test]
fn keyboard_selection_clamps_at_the_list_ends() {
    let mut state = AppState::new(2);
    let now = Instant::now();

    assert!(!state.select_previous(now));
    assert!(state.select_next(now));
    assert!(!state.select_next(now));
    assert_eq!(state.selected(), Some(1));
}

#[test]
fn persisted_selection_is_restored_and_clamped() {
    let settings = Settings {
        remember_selection: true,
        last_selected: 99,
        ..Default::default()
    };
    let items = two_items();

    let state = AppState::new(items.len())
        .with_initial_selection(settings.initial_selection(items.len()));
    assert_eq!(state.selected(), Some(1));
    assert!(!state.is_fading());
}

#[test]
fn empty_item_set_never_opens_detail() {
    let mut state = AppState::new(0);
    assert_eq!(state.selected(), None);
    assert!(!state.open_detail());
    assert!(!state.select(0, Instant::now()));
    assert_eq!(state.visible_panes(), VisiblePanes::ListOnly);

    state.set_layout(PaneLayout::Dual);
    assert_eq!(state.visible_panes(), VisiblePanes::Split);
}
