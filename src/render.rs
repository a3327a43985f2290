//! Widget painting
//!
//! Pure rendering over the current `EditState`: the title pill, the text
//! pill, and the indicator bar. Geometry helpers are split out so the
//! indicator placement can be verified without a paint context.

use eframe::egui;
use egui::{Align2, Rect};

use crate::state::EditState;

/// Corner rounding of the title and text pills
pub const PILL_ROUNDING: f32 = 10.0;

/// Left inset of the title text inside the title pill
const TITLE_TEXT_INSET: f32 = 17.0;

/// Left inset of the indicator bar inside the text region
const INDICATOR_INSET: f32 = 16.0;

/// Extra width added to the animated indicator value so the bar stays
/// visible for empty text once focused
const INDICATOR_EXTRA: f32 = 8.0;

/// Height of the indicator bar
const INDICATOR_HEIGHT: f32 = 2.0;

/// Returns the text region rect: everything right of the title column,
/// scaled horizontally by the text-background progress.
pub fn text_region_rect(widget_rect: Rect, title_width: f32, progress: f32) -> Rect {
    let full = Rect::from_min_max(
        egui::pos2(widget_rect.min.x + title_width, widget_rect.min.y),
        widget_rect.max,
    );
    Rect::from_min_size(
        full.min,
        egui::vec2(full.width() * progress.clamp(0.0, 1.0), full.height()),
    )
}

/// Returns the indicator bar rect for a given animated width, anchored to
/// the bottom edge of the text region.
pub fn indicator_rect(text_rect: Rect, indicator_width: f32) -> Rect {
    Rect::from_min_size(
        egui::pos2(
            text_rect.min.x + INDICATOR_INSET,
            text_rect.max.y - INDICATOR_HEIGHT,
        ),
        egui::vec2(indicator_width + INDICATOR_EXTRA, INDICATOR_HEIGHT),
    )
}

/// Paints the full widget background: title pill, title text, text pill,
/// and the indicator bar, using the current (possibly mid-animation)
/// property values.
///
/// # Arguments
/// * `painter` - Painter clipped to the widget area
/// * `rect` - Full widget rect
/// * `state` - Widget state supplying colors, widths, and the title
/// * `title_font` - Font for the title label
pub fn paint_line_edit(
    painter: &egui::Painter,
    rect: Rect,
    state: &EditState,
    title_font: &egui::FontId,
) {
    let colors = state.colors();

    // Title pill spans the whole widget; the text pill overlays its right part
    painter.rect_filled(rect, PILL_ROUNDING, colors.title_background);
    painter.text(
        egui::pos2(rect.min.x + TITLE_TEXT_INSET, rect.center().y),
        Align2::LEFT_CENTER,
        state.title(),
        title_font.clone(),
        state.title_color(),
    );

    let text_rect = text_region_rect(rect, state.title_width(), state.text_bg_progress());
    painter.rect_filled(text_rect, PILL_ROUNDING, colors.text_background);

    painter.rect_filled(
        indicator_rect(text_rect, state.indicator_width()),
        1.0,
        state.indicator_color(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_region_progress_scales_width() {
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(300.0, 36.0));
        let full = text_region_rect(rect, 160.0, 1.0);
        assert_eq!(full.min.x, 160.0);
        assert_eq!(full.width(), 140.0);

        let half = text_region_rect(rect, 160.0, 0.5);
        assert_eq!(half.width(), 70.0);
    }

    #[test]
    fn test_indicator_anchored_to_bottom() {
        let text_rect = Rect::from_min_size(egui::pos2(160.0, 0.0), egui::vec2(140.0, 36.0));
        let indi = indicator_rect(text_rect, 40.0);
        assert_eq!(indi.min.x, 176.0);
        assert_eq!(indi.max.y, 36.0);
        assert_eq!(indi.height(), 2.0);
        assert_eq!(indi.width(), 48.0);
    }
}
