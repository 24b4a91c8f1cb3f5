//! Row rendering for the user table.

use egui::{RichText, Ui};
use egui_extras::TableRow;
use userdeck_business::User;

/// Renders one user: ID, name, email, website.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &User) {
    row.col(|ui| {
        ui.label(RichText::new(user.id.to_string()).monospace());
    });

    row.col(|ui| {
        render_text_cell(ui, user.name());
    });

    row.col(|ui| {
        render_text_cell(ui, user.email());
    });

    row.col(|ui| {
        render_text_cell(ui, user.website());
    });
}

/// Renders a text cell; absent values render as an empty cell.
#[inline]
fn render_text_cell(ui: &mut Ui, value: Option<&str>) {
    if let Some(value) = value {
        ui.label(value);
    }
}
