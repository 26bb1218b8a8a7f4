// constants.rs - Application-wide Constants
//
// Centralized constants for dimensions, breakpoints, and timings shared by
// both sample binaries. This makes the code more maintainable and consistent.

/// Main window dimensions (logical pixels)
pub mod window {
    /// Default window width, below the span breakpoint so both samples
    /// start in single-pane mode
    pub const DEFAULT_WIDTH: f32 = 800.0;
    /// Default window height
    pub const DEFAULT_HEIGHT: f32 = 600.0;
    /// Minimum window width
    pub const MIN_WIDTH: f32 = 420.0;
    /// Minimum window height
    pub const MIN_HEIGHT: f32 = 360.0;
}

/// Responsive layout breakpoints and pane metrics
pub mod layout {
    /// Window width at or above which the layout is considered spanned
    pub const SPAN_BREAKPOINT: f32 = 960.0;
    /// Smallest breakpoint a settings file may configure
    pub const MIN_SPAN_BREAKPOINT: f32 = 320.0;
    /// Gap between the two panes in spanned mode
    pub const PANE_SPACING: f32 = 20.0;
    /// Height of the top app bar
    pub const TOP_BAR_HEIGHT: f32 = 48.0;
}

/// List row metrics
pub mod list {
    /// Thumbnail width inside a row
    pub const THUMB_WIDTH: f32 = 150.0;
    /// Thumbnail height inside a row
    pub const THUMB_HEIGHT: f32 = 100.0;
    /// Horizontal gap between thumbnail and caption
    pub const ROW_SPACING: f32 = 16.0;
    /// Size of the bold item id in a row
    pub const ID_TEXT_SIZE: f32 = 20.0;
}

/// Detail pane metrics
pub mod detail {
    /// Size of the large item id above the full image
    pub const ID_TEXT_SIZE: f32 = 50.0;
    /// Vertical gap between the id and the image
    pub const CONTENT_SPACING: f32 = 20.0;
}

/// Detail crossfade timing
pub mod fade {
    /// Crossfade duration between successive selections, in milliseconds
    pub const CROSSFADE_MS: u64 = 600;
    /// Animation tick interval while a fade is running, in milliseconds
    pub const TICK_MS: u64 = 16;
}

/// Placeholder image synthesis
pub mod gallery {
    /// Width of a synthesized placeholder image
    pub const IMAGE_WIDTH: u32 = 800;
    /// Height of a synthesized placeholder image
    pub const IMAGE_HEIGHT: u32 = 500;
}
