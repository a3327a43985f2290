//! Text measurement utilities
//!
//! The widget state machine works on plain pixel widths, so this module is
//! the only place that talks to egui's text layout.

use eframe::egui;

/// Measures the rendered width of `text` in the given font.
///
/// The galley color does not affect metrics, so a placeholder is used.
pub fn measure_text_width(painter: &egui::Painter, text: &str, font_id: &egui::FontId) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let galley = painter.layout_no_wrap(text.to_string(), font_id.clone(), egui::Color32::WHITE);
    galley.size().x
}
