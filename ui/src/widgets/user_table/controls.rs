//! Filter controls shown above the table once users are loaded.

use egui::{DragValue, TextEdit, Ui};
use userdeck_business::{UserTableAction, ViewState};

const FILTER_HINT: &str = "Search by name";
const FILTER_WIDTH: f32 = 240.0;

/// Renders the name filter and the ID range inputs.
///
/// Edits are collected as actions instead of being written into the view
/// state, so the caller decides when they are applied.
pub fn render_filter_controls(ui: &mut Ui, view_state: &ViewState) -> Vec<UserTableAction> {
    let mut actions = Vec::new();

    let mut filter_text = view_state.filter_text.clone();
    let filter_response = ui.add(
        TextEdit::singleline(&mut filter_text)
            .hint_text(FILTER_HINT)
            .desired_width(FILTER_WIDTH),
    );
    if filter_response.changed() {
        actions.push(UserTableAction::SetFilterText(filter_text));
    }

    ui.horizontal(|ui| {
        let mut start_user_id = view_state.start_user_id;
        let start_label = ui.label("Start User ID:");
        if ui
            .add(DragValue::new(&mut start_user_id).speed(1))
            .labelled_by(start_label.id)
            .changed()
        {
            actions.push(UserTableAction::SetStartUserId(start_user_id));
        }

        ui.add_space(12.0);

        let mut end_user_id = view_state.end_user_id;
        let end_label = ui.label("End User ID:");
        if ui
            .add(DragValue::new(&mut end_user_id).speed(1))
            .labelled_by(end_label.id)
            .changed()
        {
            actions.push(UserTableAction::SetEndUserId(end_user_id));
        }
    });

    actions
}
