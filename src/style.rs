//! Style support module for the titled line edit
//!
//! This module provides the color palette consumed by the widget renderer,
//! plus a small preset manager for switching between built-in palettes.
//!
//! # Examples
//!
//! ```
//! use titledit::style::StyleManager;
//!
//! let manager = StyleManager::new();
//! let preset = manager.get_preset("Quartz Dark").unwrap();
//! println!("title background: {:?}", preset.colors.title_background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for the widget, covering every painted region
/// in each of the idle / focused / error states.
#[derive(Debug, Clone, PartialEq)]
pub struct EditColors {
    // Title pill
    pub title_background: Color32,
    pub title_idle: Color32,
    pub title_focused: Color32,
    pub title_error: Color32,

    // Text pill
    pub text_background: Color32,
    pub text: Color32,

    // Indicator bar
    pub indicator_idle: Color32,
    pub indicator_editing: Color32,
    pub indicator_error: Color32,
}

impl Default for EditColors {
    fn default() -> Self {
        quartz_dark_preset().colors
    }
}

/// A named palette with metadata, analogous to an application theme.
#[derive(Debug, Clone)]
pub struct StylePreset {
    pub name: String,
    pub description: String,
    pub colors: EditColors,
}

/// Centralized manager providing access to all built-in style presets.
pub struct StyleManager {
    presets: HashMap<String, StylePreset>,
    current_preset_name: String,
}

impl StyleManager {
    /// Creates a new StyleManager initialized with all built-in presets
    pub fn new() -> Self {
        let mut presets = HashMap::new();

        presets.insert("Quartz Dark".to_string(), quartz_dark_preset());
        presets.insert("Paper Light".to_string(), paper_light_preset());

        Self {
            presets,
            current_preset_name: "Quartz Dark".to_string(),
        }
    }

    /// Retrieves a preset by name
    pub fn get_preset(&self, name: &str) -> Option<&StylePreset> {
        self.presets.get(name)
    }

    /// Returns a sorted list of all available preset names
    pub fn list_presets(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected preset
    pub fn current_preset(&self) -> &StylePreset {
        self.presets.get(&self.current_preset_name).unwrap()
    }

    /// Sets the current preset by name
    pub fn set_current_preset(&mut self, name: &str) -> Result<(), String> {
        if self.presets.contains_key(name) {
            self.current_preset_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Style preset '{}' not found", name))
        }
    }
}

impl Default for StyleManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Quartz Dark preset (the reference palette)
fn quartz_dark_preset() -> StylePreset {
    StylePreset {
        name: "Quartz Dark".to_string(),
        description: "Dark violet palette with a muted title column".to_string(),
        colors: EditColors {
            // Title pill
            title_background: hex_to_color32("#28252d"),
            title_idle: hex_to_color32("#918497"),
            title_focused: hex_to_color32("#D1CBD4"),
            title_error: hex_to_color32("#b27b84"),

            // Text pill
            text_background: hex_to_color32("#201d23"),
            text: hex_to_color32("#D1CBD4"),

            // Indicator: fully transparent when idle so the focus-in
            // transition fades it in rather than popping
            indicator_idle: with_alpha(hex_to_color32("#A681BF"), 0),
            indicator_editing: hex_to_color32("#A681BF"),
            indicator_error: hex_to_color32("#d36764"),
        },
    }
}

/// Creates the Paper Light preset
fn paper_light_preset() -> StylePreset {
    StylePreset {
        name: "Paper Light".to_string(),
        description: "Light palette for bright application chrome".to_string(),
        colors: EditColors {
            // Title pill
            title_background: hex_to_color32("#e4e0e8"),
            title_idle: hex_to_color32("#6f6377"),
            title_focused: hex_to_color32("#2e2433"),
            title_error: hex_to_color32("#9c4350"),

            // Text pill
            text_background: hex_to_color32("#f2eff5"),
            text: hex_to_color32("#2e2433"),

            indicator_idle: with_alpha(hex_to_color32("#7a50a0"), 0),
            indicator_editing: hex_to_color32("#7a50a0"),
            indicator_error: hex_to_color32("#c6504c"),
        },
    }
}

/// Converts a hex color string (like "#28252d" or "#A681BF80") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 || hex.len() == 8 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        if hex.len() == 8 {
            let a = u8::from_str_radix(&hex[6..8], 16).unwrap_or(255);
            Color32::from_rgba_unmultiplied(r, g, b, a)
        } else {
            Color32::from_rgb(r, g, b)
        }
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
