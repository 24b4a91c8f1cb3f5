//! Column definitions for the user table.

use egui_extras::Column;

/// Fixed column widths for consistent table layout
pub const ID_WIDTH: f32 = 50.0;
pub const NAME_MIN_WIDTH: f32 = 160.0;
pub const EMAIL_MIN_WIDTH: f32 = 200.0;
pub const WEBSITE_MIN_WIDTH: f32 = 120.0;
pub const ROW_HEIGHT: f32 = 26.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// Table column configuration, in order:
/// - ID (fixed, not sortable)
/// - Name
/// - Email
/// - Website (fills remaining space)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(ID_WIDTH),
        Column::initial(NAME_MIN_WIDTH).at_least(NAME_MIN_WIDTH),
        Column::initial(EMAIL_MIN_WIDTH).at_least(EMAIL_MIN_WIDTH),
        Column::remainder().at_least(WEBSITE_MIN_WIDTH),
    ]
}
