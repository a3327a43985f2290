//! Spatial focus advance
//!
//! Pressing Enter in an edit moves focus to the next edit in reading order.
//! Widgets register their screen position each frame; an Enter press files a
//! request that is resolved once every widget has registered, as an explicit
//! spatial query over the collected positions.

use eframe::egui;
use egui::Pos2;

/// Two entries within this vertical distance count as being on the same row
const ROW_TOLERANCE: f32 = 1.0;

/// One registered widget position for the current frame
#[derive(Debug, Clone, Copy)]
struct FocusEntry {
    id: egui::Id,
    pos: Pos2,
}

/// Per-frame registry of edit widgets used to resolve Enter-to-advance.
///
/// Usage per frame: call [`FocusRegistry::begin_frame`] first, let every
/// widget register itself during `show`, then call
/// [`FocusRegistry::end_frame`] after the last widget to hand focus over.
#[derive(Debug, Default)]
pub struct FocusRegistry {
    entries: Vec<FocusEntry>,
    pending_advance: Option<Pos2>,
}

impl FocusRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the registrations of the previous frame.
    pub fn begin_frame(&mut self) {
        self.entries.clear();
    }

    /// Registers a widget's focus id and screen position for this frame.
    pub fn register(&mut self, id: egui::Id, pos: Pos2) {
        self.entries.push(FocusEntry { id, pos });
    }

    /// Files a request to move focus to the widget after `from`.
    pub fn request_advance(&mut self, from: Pos2) {
        self.pending_advance = Some(from);
    }

    /// Returns the id of the first widget after `from` in reading order
    /// (top to bottom, then left to right), if any.
    pub fn next_in_reading_order(&self, from: Pos2) -> Option<egui::Id> {
        self.entries
            .iter()
            .filter(|e| Self::is_after(e.pos, from))
            .min_by(|a, b| {
                (a.pos.y, a.pos.x)
                    .partial_cmp(&(b.pos.y, b.pos.x))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|e| e.id)
    }

    /// Resolves a pending advance request against this frame's entries.
    ///
    /// No wrap-around: Enter on the last widget only surrenders focus.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if let Some(from) = self.pending_advance.take() {
            if let Some(id) = self.next_in_reading_order(from) {
                ctx.memory_mut(|m| m.request_focus(id));
            }
        }
    }

    fn is_after(pos: Pos2, from: Pos2) -> bool {
        if pos.y > from.y + ROW_TOLERANCE {
            return true;
        }
        (pos.y - from.y).abs() <= ROW_TOLERANCE && pos.x > from.x
    }
}
