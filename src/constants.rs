//! Shared UI constants: colors and panel sizing.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PRIMARY: &str = "#3b82f6";
pub const ACCENT_AI: &str = "#a855f7";
pub const ACCENT_ERROR: &str = "#ef4444";
pub const PLAYHEAD_COLOR: &str = "#ef4444";

pub const SIDEBAR_WIDTH: f64 = 280.0;
pub const PANEL_COLLAPSED_WIDTH: f64 = 40.0;
pub const PROPERTIES_WIDTH: f64 = 260.0;
pub const TIMELINE_HEIGHT: f64 = 260.0;
pub const RULER_HEIGHT: f64 = 24.0;
pub const TRACK_ROW_HEIGHT: f64 = 48.0;

/// Window title and title bar label.
pub const PRODUCT_NAME: &str = "Lumina Studio Pro";
