//! HingeView - Dual-Pane Sample Library
//!
//! This library holds everything the two sample binaries share: the
//! responsive layout state machine, the item model with its placeholder
//! image provider, the persisted settings, and the list/detail widgets.

pub mod app;
pub mod constants;
pub mod models;
pub mod posture;
pub mod settings;
pub mod ui;

// Re-export commonly used types
pub use app::{AppState, Crossfade, PaneLayout, Screen, Selection, VisiblePanes};
pub use models::GalleryItem;
pub use posture::Posture;
pub use settings::Settings;
