//! Table components for the user table.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Header row with the sortable column labels
//! - `row`: One row per user on the current page

pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use userdeck_business::{DerivedView, SortColumn, ViewState};

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders the current page of users.
///
/// Returns the column whose header was clicked, if any.
pub fn render_users_table(
    ui: &mut Ui,
    page: &DerivedView<'_>,
    view_state: &ViewState,
) -> Option<SortColumn> {
    let mut clicked = None;

    let mut table = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        table = table.column(column);
    }

    table
        .header(HEADER_HEIGHT, |mut header| {
            clicked = render_table_header(&mut header, view_state);
        })
        .body(|mut body| {
            for user in &page.page_items {
                body.row(ROW_HEIGHT, |mut row| {
                    render_user_row(&mut row, user);
                });
            }
        });

    clicked
}
