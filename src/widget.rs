//! The titled line edit widget
//!
//! Glues the state machine, renderer, and egui together: allocates the
//! widget rect, advances the property animations with the frame dt, paints
//! the pills and indicator, and embeds a frameless `TextEdit` for the
//! actual editing. Focus and text-change events coming back from egui are
//! translated into state-machine transitions.

use eframe::egui;

use crate::focus::FocusRegistry;
use crate::measure::measure_text_width;
use crate::render;
use crate::state::{EditState, TEXT_PADDING};

/// Fixed height of the widget in pixels
pub const WIDGET_HEIGHT: f32 = 36.0;

/// A styled single-line text input with an animated title pill and an
/// animated indicator bar tracking the text extent.
///
/// The widget itself is transient; all surviving state lives in the
/// caller-owned [`EditState`] and text buffer.
///
/// ```no_run
/// # use titledit::{EditState, TitledLineEdit};
/// # fn ui(ui: &mut egui::Ui, state: &mut EditState, text: &mut String) {
/// TitledLineEdit::new(state, text)
///     .desired_width(360.0)
///     .show(ui);
/// # }
/// ```
pub struct TitledLineEdit<'a> {
    state: &'a mut EditState,
    text: &'a mut String,
    registry: Option<&'a mut FocusRegistry>,
    desired_width: Option<f32>,
    font: egui::FontId,
    title_font: egui::FontId,
}

impl<'a> TitledLineEdit<'a> {
    /// Creates a widget over caller-owned state and text.
    pub fn new(state: &'a mut EditState, text: &'a mut String) -> Self {
        Self {
            state,
            text,
            registry: None,
            desired_width: None,
            font: egui::FontId::proportional(14.0),
            title_font: egui::FontId::proportional(13.0),
        }
    }

    /// Sets an explicit widget width; defaults to the available width.
    pub fn desired_width(mut self, width: f32) -> Self {
        self.desired_width = Some(width);
        self
    }

    /// Sets the font used for the edited text.
    pub fn font(mut self, font: egui::FontId) -> Self {
        self.font = font;
        self
    }

    /// Sets the font used for the title label.
    pub fn title_font(mut self, font: egui::FontId) -> Self {
        self.title_font = font;
        self
    }

    /// Attaches a focus registry so Enter advances to the next edit.
    pub fn focus_registry(mut self, registry: &'a mut FocusRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Renders the widget and processes its events for this frame.
    ///
    /// Returns the inner `TextEdit` response, so the caller can observe
    /// `changed`, `gained_focus`, and `lost_focus` as usual.
    pub fn show(mut self, ui: &mut egui::Ui) -> egui::Response {
        let width = self.desired_width.unwrap_or_else(|| ui.available_width());
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(width, WIDGET_HEIGHT), egui::Sense::hover());

        // stable_dt is capped so a stalled frame cannot make colors jump
        let dt = ui.input(|i| i.stable_dt.min(0.1));
        self.state.tick(dt);

        if ui.is_rect_visible(rect) {
            render::paint_line_edit(ui.painter(), rect, self.state, &self.title_font);
        }

        // Text sits inside the text region with the reference paddings
        let inner = egui::Rect::from_min_max(
            egui::pos2(
                rect.min.x + self.state.title_width() + TEXT_PADDING,
                rect.min.y,
            ),
            egui::pos2(rect.max.x - TEXT_PADDING, rect.max.y),
        );
        let text_color = self.state.colors().text;
        let response = ui.put(
            inner,
            egui::TextEdit::singleline(self.text)
                .frame(false)
                .font(self.font.clone())
                .text_color(text_color)
                .desired_width(inner.width()),
        );

        if response.gained_focus() {
            let measured = measure_text_width(ui.painter(), self.text, &self.font);
            self.state.handle_focus_gained(measured, rect.width());
        }

        if response.changed() && self.state.is_focused() {
            let measured = measure_text_width(ui.painter(), self.text, &self.font);
            self.state.handle_text_changed(measured, rect.width());
        }

        if response.lost_focus() {
            self.state.handle_focus_lost();
            // Enter surrenders focus; hand it to the next edit if we know one
            if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                if let Some(registry) = self.registry.as_deref_mut() {
                    registry.request_advance(rect.min);
                }
            }
        }

        if let Some(registry) = self.registry.as_deref_mut() {
            registry.register(response.id, rect.min);
        }

        if self.state.is_animating() {
            ui.ctx().request_repaint();
        }

        response
    }
}
