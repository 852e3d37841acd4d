//! Overlay state machine
//!
//! One machine owns every transient navigation surface: the nav dropdowns,
//! the mobile slide-menu and the profile menu. The dropdowns and the mobile
//! menu share the primary region (they occupy the same space on screen), so
//! at most one of them is open at a time. The profile menu is independent
//! and may coexist with either.
//!
//! Gesture semantics depend on the viewport mode: hover drives dropdowns in
//! wide mode, discrete taps drive them in narrow mode, and the opposite
//! gesture kind is ignored. All transitions are pure; the hosting hook wires
//! DOM events to them and exposes snapshots to the view.

use crate::shared::viewport::ViewportMode;

/// What currently occupies the primary nav region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimarySurface {
    Closed,
    Dropdown(String),
    MobileMenu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayState {
    mode: ViewportMode,
    primary: PrimarySurface,
    profile_open: bool,
}

impl OverlayState {
    pub fn new(mode: ViewportMode) -> Self {
        OverlayState {
            mode,
            primary: PrimarySurface::Closed,
            profile_open: false,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    /// Label of the open dropdown, if any.
    pub fn open_dropdown(&self) -> Option<&str> {
        match &self.primary {
            PrimarySurface::Dropdown(label) => Some(label),
            _ => None,
        }
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.primary == PrimarySurface::MobileMenu
    }

    pub fn profile_open(&self) -> bool {
        self.profile_open
    }

    pub fn any_open(&self) -> bool {
        self.primary != PrimarySurface::Closed || self.profile_open
    }

    /// Pointer entered a dropdown trigger. Hover only opens in wide mode;
    /// in narrow mode hover is not an activation signal.
    pub fn hover_enter_dropdown(&mut self, label: &str) {
        if self.mode.is_wide() {
            self.primary = PrimarySurface::Dropdown(label.to_string());
        }
    }

    /// Pointer left a dropdown trigger. Only closes the same group, so a
    /// leave event racing a later enter never closes the newer dropdown.
    pub fn hover_leave_dropdown(&mut self, label: &str) {
        if self.mode.is_wide() && self.open_dropdown() == Some(label) {
            self.primary = PrimarySurface::Closed;
        }
    }

    /// Discrete activation (tap/click) of a dropdown trigger. Narrow mode
    /// only: toggles the same label off, replaces a different one, and takes
    /// over the primary region from the mobile menu.
    pub fn activate_dropdown(&mut self, label: &str) {
        if self.mode.is_wide() {
            return;
        }
        if self.open_dropdown() == Some(label) {
            self.primary = PrimarySurface::Closed;
        } else {
            self.primary = PrimarySurface::Dropdown(label.to_string());
        }
    }

    /// Toggle the mobile slide-menu. Meaningless in wide mode, where the
    /// full menu is already visible.
    pub fn toggle_mobile_menu(&mut self) {
        if self.mode.is_wide() {
            return;
        }
        self.primary = if self.mobile_menu_open() {
            PrimarySurface::Closed
        } else {
            PrimarySurface::MobileMenu
        };
    }

    /// Toggle the profile menu, independent of the primary region.
    pub fn toggle_profile_menu(&mut self) {
        self.profile_open = !self.profile_open;
    }

    /// Close every overlay. Idempotent; used for outside clicks, Escape and
    /// link activation inside any overlay.
    pub fn dismiss_all(&mut self) {
        self.primary = PrimarySurface::Closed;
        self.profile_open = false;
    }

    /// Viewport mode changed. The primary region resets so stale hover
    /// state never leaks across layouts; the profile menu is preserved.
    /// Same-mode calls are no-ops, keeping the transition edge-triggered.
    pub fn set_mode(&mut self, mode: ViewportMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.primary = PrimarySurface::Closed;
    }
}
