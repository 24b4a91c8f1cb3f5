//! User table domain module.
//!
//! This module is the single home for:
//! - `UserTableState` and the `UserTableAction` reducer
//! - `ViewState` (filter, sort, page, ID range)
//! - the derived view pipeline the UI renders from
//!
//! UI code only reads `UserTableState::derive()` and dispatches actions.

mod state;
mod view;

pub use state::{
    DEFAULT_END_USER_ID, DEFAULT_START_USER_ID, ITEMS_PER_PAGE, SortColumn, SortOrder,
    UserTableAction, UserTableState, ViewState,
};
pub use view::{DerivedView, derive_view, in_id_range, locale_compare, matches_name, total_pages};
