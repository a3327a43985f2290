//! Titled line edit demo application
//!
//! A small eframe app showcasing the widget: a column of edits sharing a
//! focus registry (Enter advances to the next field), a style preset
//! selector, and a button that triggers the invalid-input flash on the
//! focused field. The selected preset and the field contents persist
//! across sessions through eframe storage.

use eframe::egui;
use serde::{Deserialize, Serialize};

use titledit::{EditState, FocusRegistry, StyleManager, TitledLineEdit};

const PRESET_KEY: &str = "style_preset";
const FIELDS_KEY: &str = "field_texts";

/// Width used for every edit in the demo column
const FIELD_WIDTH: f32 = 420.0;

/// Main entry point that launches the demo window.
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 320.0])
            .with_title("Titled Line Edit Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Titled Line Edit Demo",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
}

/// Loads a JSON-serialized setting from persistent storage, falling back to
/// `default` when missing or invalid.
fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
where
    T: for<'de> Deserialize<'de>,
{
    if let Some(storage) = storage {
        if let Some(json_str) = storage.get_string(key) {
            if let Ok(value) = serde_json::from_str(&json_str) {
                return value;
            }
        }
    }
    default
}

/// Saves a JSON-serializable setting to persistent storage.
fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
where
    T: Serialize,
{
    if let Ok(json_str) = serde_json::to_string(value) {
        storage.set_string(key, json_str);
    }
}

/// One demo field: its widget state plus the edited text.
struct DemoField {
    state: EditState,
    text: String,
}

impl DemoField {
    fn new(title: &str, text: String) -> Self {
        Self {
            state: EditState::new(title),
            text,
        }
    }
}

/// The demo application.
struct DemoApp {
    fields: Vec<DemoField>,
    styles: StyleManager,
    focus: FocusRegistry,
}

impl DemoApp {
    /// Creates the demo with preset and field contents restored from storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let preset_name: String = load_setting_or(cc.storage, PRESET_KEY, "Quartz Dark".to_string());
        let texts: Vec<String> = load_setting_or(cc.storage, FIELDS_KEY, vec![String::new(); 3]);
        let mut texts = texts.into_iter();

        let mut styles = StyleManager::new();
        let _ = styles.set_current_preset(&preset_name);
        let colors = styles.current_preset().colors.clone();

        let mut fields = vec![
            DemoField::new("Project name", texts.next().unwrap_or_default()),
            DemoField::new("Owner", texts.next().unwrap_or_default()),
            DemoField::new("Description", texts.next().unwrap_or_default()),
        ];
        for field in &mut fields {
            field.state.set_colors(colors.clone());
        }

        Self {
            fields,
            styles,
            focus: FocusRegistry::new(),
        }
    }

    /// Applies base visuals matching the current preset to the context.
    fn apply_visuals(&self, ctx: &egui::Context) {
        let preset = self.styles.current_preset();
        let visuals = if preset.name.contains("Light") {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        ctx.set_visuals(visuals);
    }

    /// Renders the preset selector, switching every field on change.
    fn preset_selector(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.styles.current_preset().name.clone();
        let names: Vec<String> = self
            .styles
            .list_presets()
            .iter()
            .map(|s| s.to_string())
            .collect();

        egui::ComboBox::from_label("Style preset")
            .selected_text(selected.clone())
            .show_ui(ui, |ui| {
                for name in &names {
                    ui.selectable_value(&mut selected, name.clone(), name);
                }
            });

        if selected != self.styles.current_preset().name
            && self.styles.set_current_preset(&selected).is_ok()
        {
            let colors = self.styles.current_preset().colors.clone();
            for field in &mut self.fields {
                field.state.set_colors(colors.clone());
            }
        }
    }
}

impl eframe::App for DemoApp {
    /// Persists the preset and field contents on shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        save_setting(storage, PRESET_KEY, &self.styles.current_preset().name);
        let texts: Vec<&String> = self.fields.iter().map(|f| &f.text).collect();
        save_setting(storage, FIELDS_KEY, &texts);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.focus.begin_frame();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            self.preset_selector(ui);
            ui.add_space(16.0);

            for field in &mut self.fields {
                TitledLineEdit::new(&mut field.state, &mut field.text)
                    .desired_width(FIELD_WIDTH)
                    .focus_registry(&mut self.focus)
                    .show(ui);
                ui.add_space(10.0);
            }

            ui.add_space(8.0);
            if ui.button("Flag invalid input").clicked() {
                // Flash the focused field, or the first one as a fallback
                let focused = self.fields.iter().position(|f| f.state.is_focused());
                let target = match focused {
                    Some(i) => self.fields.get_mut(i),
                    None => self.fields.first_mut(),
                };
                if let Some(field) = target {
                    field.state.notify_invalid_input(FIELD_WIDTH);
                    ctx.request_repaint();
                }
            }
        });

        self.focus.end_frame(ctx);
    }
}
