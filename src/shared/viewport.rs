//! Viewport mode classification
//!
//! A single fixed breakpoint splits the layout into "wide" (pointer/hover
//! desktop) and "narrow" (touch/mobile). Gesture semantics in the overlay
//! machine branch on this mode.

use crate::shared::constants::WIDE_BREAKPOINT_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Wide,
    Narrow,
}

impl ViewportMode {
    pub fn is_wide(self) -> bool {
        self == ViewportMode::Wide
    }
}

/// Classify a viewport width. Widths strictly greater than the breakpoint
/// are wide; the breakpoint itself is narrow.
pub fn mode_for_width(width_px: f64) -> ViewportMode {
    if width_px > WIDE_BREAKPOINT_PX {
        ViewportMode::Wide
    } else {
        ViewportMode::Narrow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert_eq!(mode_for_width(1024.0), ViewportMode::Narrow);
        assert_eq!(mode_for_width(1024.5), ViewportMode::Wide);
        assert_eq!(mode_for_width(1025.0), ViewportMode::Wide);
    }

    #[test]
    fn test_common_widths() {
        assert_eq!(mode_for_width(375.0), ViewportMode::Narrow);
        assert_eq!(mode_for_width(768.0), ViewportMode::Narrow);
        assert_eq!(mode_for_width(1440.0), ViewportMode::Wide);
    }
}
