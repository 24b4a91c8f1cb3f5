//! Previous / next page controls.

use egui::Ui;
use userdeck_business::{DerivedView, UserTableAction};

/// Renders `◀ {n} of {total} ▶`.
///
/// Returns the page action for the clicked button, if any.
pub fn render_pagination(ui: &mut Ui, page: &DerivedView<'_>) -> Option<UserTableAction> {
    ui.horizontal(|ui| {
        let mut action = None;

        if ui
            .add_enabled(page.has_previous(), egui::Button::new("◀"))
            .on_hover_text("Previous page")
            .clicked()
        {
            action = Some(UserTableAction::PreviousPage);
        }

        ui.label(page.page_label());

        if ui
            .add_enabled(page.has_next(), egui::Button::new("▶"))
            .on_hover_text("Next page")
            .clicked()
        {
            action = Some(UserTableAction::NextPage);
        }

        action
    })
    .inner
}
