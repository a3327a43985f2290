pub mod animation;
pub mod focus;
pub mod measure;
pub mod render;
pub mod state;
pub mod style;
pub mod widget;

// Export animation primitives
pub use animation::{ExpAnimation, Interpolate};

// Export style support
pub use style::{hex_to_color32, with_alpha, EditColors, StyleManager, StylePreset};

// Export widget state
pub use state::EditState;

// Export widget glue
pub use widget::TitledLineEdit;

// Export focus advance support
pub use focus::FocusRegistry;
