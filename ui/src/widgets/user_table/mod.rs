//! User table widget.
//!
//! Layout, top to bottom:
//! - `Fetch Data` button, spinner while a request is in flight
//! - error line when the last request failed
//! - once loaded: name filter, ID range, table, pagination

mod controls;
mod fetch;
mod pagination;
pub mod table;

pub use fetch::start_fetch;

use egui::{Frame, Margin, Response, Stroke, Ui};
use userdeck_business::UserTableAction;

use crate::state::State;
use crate::utils::colors::{COLOR_RED, TABLE_BORDER_COLOR};
use controls::render_filter_controls;
use pagination::render_pagination;
use table::render_users_table;

/// Displays the user table panel.
pub fn user_table_panel(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        let fetch_clicked = ui
            .horizontal(|ui| {
                let clicked = ui.button("Fetch Data").clicked();
                if state.user_table().is_fetching() {
                    ui.spinner();
                    ui.label("Loading...");
                }
                clicked
            })
            .inner;

        if fetch_clicked {
            start_fetch(state, ui.ctx());
        }

        if let Some(error) = state.user_table().last_error() {
            ui.colored_label(COLOR_RED, format!("Error: {error}"));
        }

        if !state.user_table().is_fetched() {
            return;
        }

        ui.add_space(8.0);

        // Actions are applied after rendering so the whole frame sees one view.
        let mut actions: Vec<UserTableAction> = Vec::new();
        {
            let table_state = state.user_table();
            let view_state = table_state.view();
            let page = table_state.derive();

            actions.extend(render_filter_controls(ui, view_state));

            ui.add_space(8.0);

            Frame::NONE
                .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                .inner_margin(Margin::symmetric(4, 4))
                .show(ui, |ui| {
                    if let Some(column) = render_users_table(ui, &page, view_state) {
                        actions.push(UserTableAction::SortBy(column));
                    }
                });

            ui.add_space(8.0);

            actions.extend(render_pagination(ui, &page));
        }

        for action in actions {
            state.dispatch(action);
        }
    })
    .response
}
