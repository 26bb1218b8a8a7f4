// ui/mod.rs - Shared iced Components
//
// The list and detail renderers used by both sample binaries, plus the
// theme and the procedural window icon. Everything here is stateless; the
// binaries pass state in and map row taps to their own messages.

mod detail;
mod icon;
mod list;
pub mod theme;

pub use detail::{detail_view, empty_view, DetailContent};
pub use icon::app_icon;
pub use list::list_view;
