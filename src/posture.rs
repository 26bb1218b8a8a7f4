// posture.rs - Layout Mode Source
//
// Decides whether the window counts as spanned. By default the window width
// is measured against a breakpoint, so dragging the window across it flips
// the layout live. A CLI flag can pin the mode for demos and screenshots.

use crate::app::PaneLayout;

/// How the layout mode is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Posture {
    /// Follow the window width against the span breakpoint
    #[default]
    Auto,
    /// Pinned two-pane mode (`--spanned`)
    Spanned,
    /// Pinned single-pane mode (`--unspanned`)
    Unspanned,
}

impl Posture {
    /// Parse the override flags from process arguments. The last flag wins
    /// when both are given.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut posture = Posture::Auto;
        for arg in args {
            match arg.as_ref() {
                "--spanned" => posture = Posture::Spanned,
                "--unspanned" => posture = Posture::Unspanned,
                _ => {}
            }
        }
        posture
    }

    /// Read the override from the real command line.
    pub fn from_env() -> Self {
        Self::from_args(std::env::args())
    }

    /// Resolve the pane layout for the current window width.
    pub fn layout_for_width(self, width: f32, breakpoint: f32) -> PaneLayout {
        match self {
            Posture::Spanned => PaneLayout::Dual,
            Posture::Unspanned => PaneLayout::Single,
            Posture::Auto => {
                if width >= breakpoint {
                    PaneLayout::Dual
                } else {
                    PaneLayout::Single
                }
            }
        }
    }
}
