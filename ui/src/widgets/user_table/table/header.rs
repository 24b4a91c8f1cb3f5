//! Table header rendering for the user table.

use egui::{Label, Response, RichText, Sense, Ui};
use egui_extras::TableRow;
use userdeck_business::{SortColumn, SortOrder, ViewState};

use crate::utils::colors::COLOR_ACCENT;

/// Label of the only non-sortable column.
const ID_HEADER: &str = "ID";

/// Renders the header row.
///
/// Returns the sortable column whose header was clicked, if any.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    view_state: &ViewState,
) -> Option<SortColumn> {
    let mut clicked = None;

    header.col(|ui| {
        ui.strong(ID_HEADER);
    });

    for column in SortColumn::ALL {
        header.col(|ui| {
            if render_sort_header_cell(ui, column, view_state.sort_order_of(column)).clicked() {
                clicked = Some(column);
            }
        });
    }

    clicked
}

/// Header text for `column`, with an arrow when it is the active sort key.
pub fn sort_header_text(column: SortColumn, order: Option<SortOrder>) -> String {
    match order {
        Some(SortOrder::Asc) => format!("{} ⏶", column.label()),
        Some(SortOrder::Desc) => format!("{} ⏷", column.label()),
        None => column.label().to_owned(),
    }
}

fn render_sort_header_cell(ui: &mut Ui, column: SortColumn, order: Option<SortOrder>) -> Response {
    let mut text = RichText::new(sort_header_text(column, order)).strong();
    if order.is_some() {
        text = text.color(COLOR_ACCENT);
    }

    ui.add(Label::new(text).selectable(false).sense(Sense::click()))
        .on_hover_text(format!("Sort by {}", column.label().to_lowercase()))
}
