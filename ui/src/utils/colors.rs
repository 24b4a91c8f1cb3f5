//! Shared color constants for the UI.

use egui::Color32;

/// Red color for error/failed status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Blue accent for the active sort column.
pub const COLOR_ACCENT: Color32 = Color32::from_rgb(13, 110, 253);

/// Subtle gray for table borders.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
