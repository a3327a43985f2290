use anyhow::Result;
use titledit::style::{EditColors, StyleManager};
use titledit::state::{EditState, DEFAULT_TITLE_WIDTH, TEXT_PADDING};

const FRAME: f32 = 1.0 / 60.0;

/// Drives the state's animations until every property settles.
fn settle(state: &mut EditState) {
    let mut ticks = 0;
    while state.tick(FRAME) {
        ticks += 1;
        assert!(ticks < 10_000, "animations failed to settle");
    }
}

#[test]
fn test_focus_in_clamps_indicator_to_available_span() {
    let mut state = EditState::new("Title");
    assert_eq!(state.title_width(), DEFAULT_TITLE_WIDTH);

    // Reference scenario: widget 300, title 160, text measuring 40
    // available span = 300 - 160 - 36 = 104, so the target is 40
    state.handle_focus_gained(40.0, 300.0);
    assert_eq!(state.indicator_width_target(), 40.0);

    // Text wider than the span clamps to it
    state.handle_text_changed(200.0, 300.0);
    assert_eq!(state.indicator_width_target(), 104.0);

    // A widget narrower than the title column yields zero, never negative
    state.handle_text_changed(40.0, 100.0);
    assert_eq!(state.indicator_width_target(), 0.0);
}

#[test]
fn test_focus_in_targets_focused_colors() {
    let mut state = EditState::new("Title");
    let colors = state.colors().clone();

    state.handle_focus_gained(0.0, 300.0);
    assert!(state.is_focused());
    assert_eq!(state.title_color_target(), colors.title_focused);
    assert_eq!(state.indicator_color_target(), colors.indicator_editing);

    settle(&mut state);
    assert_eq!(state.title_color(), colors.title_focused);
    assert_eq!(state.indicator_color(), colors.indicator_editing);
}

#[test]
fn test_focus_out_targets_idle_colors_and_zero_width() {
    let mut state = EditState::new("Title");
    let colors = state.colors().clone();

    state.handle_focus_gained(40.0, 300.0);
    settle(&mut state);

    state.handle_focus_lost();
    assert!(!state.is_focused());
    assert_eq!(state.indicator_width_target(), 0.0);
    assert_eq!(state.title_color_target(), colors.title_idle);
    assert_eq!(state.indicator_color_target(), colors.indicator_idle);

    settle(&mut state);
    assert_eq!(state.indicator_width(), 0.0);
    assert_eq!(state.title_color(), colors.title_idle);
}

#[test]
fn test_invalid_input_targets_error_colors_and_full_span() {
    let mut state = EditState::new("Title");
    let colors = state.colors().clone();

    state.notify_invalid_input(300.0);
    assert_eq!(state.title_color_target(), colors.title_error);
    assert_eq!(state.indicator_color_target(), colors.indicator_error);
    assert_eq!(
        state.indicator_width_target(),
        300.0 - DEFAULT_TITLE_WIDTH - 2.0 * TEXT_PADDING
    );

    // The flash does not revert on its own; the next focus event does
    settle(&mut state);
    assert_eq!(state.title_color(), colors.title_error);

    state.handle_focus_gained(10.0, 300.0);
    assert_eq!(state.title_color_target(), colors.title_focused);
}

#[test]
fn test_invalid_input_can_fire_from_any_state() {
    let mut state = EditState::new("Title");
    let colors = state.colors().clone();

    // From idle
    state.notify_invalid_input(300.0);
    assert_eq!(state.indicator_color_target(), colors.indicator_error);

    // From focused, mid animation
    state.handle_focus_gained(40.0, 300.0);
    state.tick(FRAME);
    state.notify_invalid_input(300.0);
    assert_eq!(state.indicator_color_target(), colors.indicator_error);
    assert_eq!(state.indicator_width_target(), 104.0);
}

#[test]
fn test_indicator_width_converges_without_overshoot() {
    let mut state = EditState::new("Title");
    state.handle_focus_gained(40.0, 300.0);

    let mut last = state.indicator_width();
    for _ in 0..600 {
        state.tick(FRAME);
        let w = state.indicator_width();
        assert!(w >= last, "indicator width moved backward");
        assert!(w <= 40.0 + 0.01, "indicator width overshot: {}", w);
        last = w;
    }
    assert!(!state.is_animating());
    assert_eq!(state.indicator_width(), 40.0);
}

#[test]
fn test_repeated_focus_events_are_idempotent() {
    let mut state = EditState::new("Title");

    for _ in 0..5 {
        state.handle_focus_gained(40.0, 300.0);
        state.tick(FRAME);
    }
    settle(&mut state);
    assert_eq!(state.indicator_width(), 40.0);

    // Settled animators do not wake up on a repeated identical event
    state.handle_text_changed(40.0, 300.0);
    assert!(!state.is_animating());
}

#[test]
fn test_title_and_width_setters() {
    let mut state = EditState::new("Before");
    state.set_title("After");
    assert_eq!(state.title(), "After");

    state.set_title_width(120.0);
    assert_eq!(state.title_width(), 120.0);
    // span widens accordingly: 300 - 120 - 36
    assert_eq!(state.indicator_span(300.0), 144.0);

    state.set_text_bg_progress(2.0);
    assert_eq!(state.text_bg_progress(), 1.0);
}

#[test]
fn test_switching_presets_resyncs_colors() -> Result<()> {
    let mut styles = StyleManager::new();
    styles
        .set_current_preset("Paper Light")
        .map_err(anyhow::Error::msg)?;
    let light: EditColors = styles.current_preset().colors.clone();

    let mut state = EditState::new("Title");
    state.set_colors(light.clone());
    // Idle and settled: colors snap instead of animating
    assert!(!state.is_animating());
    assert_eq!(state.title_color(), light.title_idle);

    // Focused and mid-flight: the running animation is redirected
    state.handle_focus_gained(0.0, 300.0);
    state.tick(FRAME);
    let dark = EditColors::default();
    state.set_colors(dark.clone());
    assert_eq!(state.title_color_target(), dark.title_focused);
    settle(&mut state);
    assert_eq!(state.title_color(), dark.title_focused);
    Ok(())
}
