//! Widget state and the focus/validation state machine.
//!
//! `EditState` owns everything that survives between frames: the title, the
//! title column width, the active palette, and the three animated properties
//! (title color, indicator color, indicator width). Focus and input events
//! only retarget the animators; the actual per-frame stepping happens in
//! [`EditState::tick`], driven by the host's repaint loop.

use crate::animation::ExpAnimation;
use crate::style::EditColors;
use egui::Color32;

/// Default width of the title column in pixels.
pub const DEFAULT_TITLE_WIDTH: f32 = 160.0;

/// Horizontal padding inside the text region, applied on both sides.
/// The indicator is clamped to (widget width − title width − 2 × padding).
pub const TEXT_PADDING: f32 = 18.0;

/// Persistent state for one titled line edit.
///
/// Responsibilities:
/// - Holding the title, title column width, and palette
/// - Owning the three animated properties
/// - Mapping focus/input/validation events to animation targets
pub struct EditState {
    /// Label drawn in the title pill
    title: String,
    /// Width of the title column in pixels
    title_width: f32,
    /// Active palette
    colors: EditColors,
    /// Animated title text color
    title_color: ExpAnimation<Color32>,
    /// Animated indicator bar color
    indicator_color: ExpAnimation<Color32>,
    /// Animated indicator bar width in pixels
    indicator_width: ExpAnimation<f32>,
    /// Fraction of the text pill width that is drawn (0.0 to 1.0)
    text_bg_progress: f32,
    /// Whether the edit currently has keyboard focus
    focused: bool,
}

impl std::fmt::Debug for EditState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditState")
            .field("title", &self.title)
            .field("title_width", &self.title_width)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl Default for EditState {
    fn default() -> Self {
        Self::new("Untitled Edit Box")
    }
}

impl EditState {
    /// Creates a new state with the default palette and title column width.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_colors(title, EditColors::default())
    }

    /// Creates a new state using a specific palette.
    pub fn with_colors(title: impl Into<String>, colors: EditColors) -> Self {
        // Animator rates: the title color settles slowest so the label trails
        // the indicator slightly, matching the reference motion.
        let title_color = ExpAnimation::new(1.0 / 6.0, 0.001, colors.title_idle);
        let indicator_color = ExpAnimation::new(1.0 / 4.0, 0.01, colors.indicator_idle);
        let indicator_width = ExpAnimation::new(1.0 / 8.0, 0.01, 0.0);

        Self {
            title: title.into(),
            title_width: DEFAULT_TITLE_WIDTH,
            colors,
            title_color,
            indicator_color,
            indicator_width,
            text_bg_progress: 1.0,
            focused: false,
        }
    }

    // ===== Queries =====

    /// Returns the title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the title column width in pixels.
    pub fn title_width(&self) -> f32 {
        self.title_width
    }

    /// Returns the active palette.
    pub fn colors(&self) -> &EditColors {
        &self.colors
    }

    /// Returns the current (possibly mid-animation) title color.
    pub fn title_color(&self) -> Color32 {
        *self.title_color.current()
    }

    /// Returns the current (possibly mid-animation) indicator color.
    pub fn indicator_color(&self) -> Color32 {
        *self.indicator_color.current()
    }

    /// Returns the current (possibly mid-animation) indicator width.
    pub fn indicator_width(&self) -> f32 {
        *self.indicator_width.current()
    }

    /// Returns the indicator width the animator is heading toward.
    pub fn indicator_width_target(&self) -> f32 {
        *self.indicator_width.target()
    }

    /// Returns the title color the animator is heading toward.
    pub fn title_color_target(&self) -> Color32 {
        *self.title_color.target()
    }

    /// Returns the indicator color the animator is heading toward.
    pub fn indicator_color_target(&self) -> Color32 {
        *self.indicator_color.target()
    }

    /// Returns the drawn fraction of the text pill width.
    pub fn text_bg_progress(&self) -> f32 {
        self.text_bg_progress
    }

    /// Whether the edit currently has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether any property animation is still running.
    pub fn is_animating(&self) -> bool {
        self.title_color.is_running()
            || self.indicator_color.is_running()
            || self.indicator_width.is_running()
    }

    /// Horizontal space available to the indicator inside a widget of the
    /// given width, never negative.
    pub fn indicator_span(&self, widget_width: f32) -> f32 {
        (widget_width - self.title_width - 2.0 * TEXT_PADDING).max(0.0)
    }

    // ===== Mutations (no animation) =====

    /// Sets the title text; takes effect on the next repaint.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Sets the title column width in pixels.
    pub fn set_title_width(&mut self, width: f32) {
        self.title_width = width;
    }

    /// Replaces the palette. Settled colors snap to their counterpart in the
    /// new palette; running animations are redirected to it.
    pub fn set_colors(&mut self, colors: EditColors) {
        self.colors = colors;
        let (title, indicator) = if self.focused {
            (self.colors.title_focused, self.colors.indicator_editing)
        } else {
            (self.colors.title_idle, self.colors.indicator_idle)
        };
        if self.title_color.is_running() {
            self.title_color.set_target(title);
        } else {
            self.title_color.set_value(title);
        }
        if self.indicator_color.is_running() {
            self.indicator_color.set_target(indicator);
        } else {
            self.indicator_color.set_value(indicator);
        }
    }

    /// Sets the drawn fraction of the text pill width (clamped to 0.0..=1.0).
    pub fn set_text_bg_progress(&mut self, progress: f32) {
        self.text_bg_progress = progress.clamp(0.0, 1.0);
    }

    // ===== Focus / input / validation events =====

    /// Focus entered the edit: colors transition to their focused variants
    /// and the indicator grows to the measured width of the current text.
    pub fn handle_focus_gained(&mut self, measured_text_width: f32, widget_width: f32) {
        self.focused = true;
        self.title_color.set_target(self.colors.title_focused);
        self.indicator_color.set_target(self.colors.indicator_editing);
        self.handle_text_changed(measured_text_width, widget_width);
    }

    /// Focus left the edit: colors fall back to idle and the indicator
    /// shrinks to nothing.
    pub fn handle_focus_lost(&mut self) {
        self.focused = false;
        self.title_color.set_target(self.colors.title_idle);
        self.indicator_color.set_target(self.colors.indicator_idle);
        self.indicator_width.set_target(0.0);
    }

    /// The text changed while editing: the indicator tracks the measured
    /// text width, clamped to the available span.
    pub fn handle_text_changed(&mut self, measured_text_width: f32, widget_width: f32) {
        let width = measured_text_width
            .min(self.indicator_span(widget_width))
            .max(0.0);
        self.indicator_width.set_target(width);
    }

    /// Flashes the error palette and snaps the indicator target to the full
    /// available span. Transient: nothing reverts automatically — the next
    /// focus event retargets the colors.
    pub fn notify_invalid_input(&mut self, widget_width: f32) {
        self.title_color.set_target(self.colors.title_error);
        self.indicator_color.set_target(self.colors.indicator_error);
        self.indicator_width.set_target(self.indicator_span(widget_width));
    }

    /// Advances all property animations by `dt_secs` seconds.
    ///
    /// Returns true while any animation is still running, which the widget
    /// uses to keep repaint requests flowing.
    pub fn tick(&mut self, dt_secs: f32) -> bool {
        let a = self.title_color.tick(dt_secs);
        let b = self.indicator_color.tick(dt_secs);
        let c = self.indicator_width.tick(dt_secs);
        a || b || c
    }
}
