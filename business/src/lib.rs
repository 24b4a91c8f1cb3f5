//! Business layer of the userdeck app: user records, the user table state and
//! reducer, the derived view pipeline, and the users API client.
//!
//! Nothing in this crate depends on egui; the UI crate renders from it.

mod config;
pub mod http;
mod user;
pub mod user_table;
mod users_api;

pub use config::{BusinessConfig, DEFAULT_USERS_URL};
pub use user::User;
pub use user_table::{
    DerivedView, ITEMS_PER_PAGE, SortColumn, SortOrder, UserTableAction, UserTableState, ViewState,
    derive_view,
};
pub use users_api::{ApiResult, UsersApiError, fetch_users};
