//! State for the user table and its reducer.
//!
//! The UI never writes fields directly. Every change is a [`UserTableAction`]
//! applied through [`UserTableState::reduce`], which consumes the old state and
//! returns the next one.

use log::{debug, error};

use crate::User;

use super::view::{DerivedView, derive_view, total_pages};

/// Rows per page. Fixed.
pub const ITEMS_PER_PAGE: usize = 5;

/// Lower ID bound after every successful fetch.
pub const DEFAULT_START_USER_ID: i64 = 1;

/// Upper ID bound after every successful fetch.
pub const DEFAULT_END_USER_ID: i64 = 10;

/// A sortable column. The ID column is not sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    Email,
    Website,
}

impl SortColumn {
    /// Sortable columns in display order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Website];

    /// Header text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Email => "EMAIL",
            Self::Website => "WEBSITE",
        }
    }

    /// The user's value for this column, coerced to text. Absent values are empty.
    pub fn text_of(self, user: &User) -> &str {
        let value = match self {
            Self::Name => user.name(),
            Self::Email => user.email(),
            Self::Website => user.website(),
        };
        value.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Presentation state of the table: everything the derived view depends on
/// besides the users themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter_text: String,
    /// `None` keeps fetch order; `sort_order` is ignored then.
    pub sort_by: Option<SortColumn>,
    pub sort_order: SortOrder,
    /// 1-based. Never below 1, but not clamped to the page count.
    pub current_page: u32,
    pub start_user_id: i64,
    pub end_user_id: i64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            sort_by: None,
            sort_order: SortOrder::Asc,
            current_page: 1,
            start_user_id: DEFAULT_START_USER_ID,
            end_user_id: DEFAULT_END_USER_ID,
        }
    }
}

impl ViewState {
    /// Direction of `column` if it is the active sort key.
    pub fn sort_order_of(&self, column: SortColumn) -> Option<SortOrder> {
        (self.sort_by == Some(column)).then_some(self.sort_order)
    }
}

/// Everything that can happen to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserTableAction {
    /// A fetch request was sent.
    FetchStarted,
    /// The fetch returned these users.
    FetchSucceeded(Vec<User>),
    /// The fetch failed with this message.
    FetchFailed(String),
    SetFilterText(String),
    SetStartUserId(i64),
    SetEndUserId(i64),
    /// A sortable column header was clicked.
    SortBy(SortColumn),
    PreviousPage,
    NextPage,
}

/// The table as a whole: fetched users, view state and fetch bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTableState {
    users: Vec<User>,
    view: ViewState,
    /// Flips to true on the first successful fetch and stays there.
    data_fetched: bool,
    /// Fetches started but not yet finished. Concurrent fetches are allowed.
    in_flight: u32,
    last_error: Option<String>,
}

impl UserTableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action and returns the resulting state.
    pub fn reduce(mut self, action: UserTableAction) -> Self {
        debug!("UserTableState: applying {action:?}");

        match action {
            UserTableAction::FetchStarted => {
                self.in_flight = self.in_flight.saturating_add(1);
            }
            UserTableAction::FetchSucceeded(users) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.users = users;
                self.view = ViewState::default();
                self.data_fetched = true;
                self.last_error = None;
            }
            UserTableAction::FetchFailed(message) => {
                error!("Fetching users failed: {message}");
                self.in_flight = self.in_flight.saturating_sub(1);
                self.last_error = Some(message);
            }
            UserTableAction::SetFilterText(text) => {
                self.view.filter_text = text;
                self.view.current_page = 1;
            }
            UserTableAction::SetStartUserId(id) => {
                self.view.start_user_id = id;
            }
            UserTableAction::SetEndUserId(id) => {
                self.view.end_user_id = id;
            }
            UserTableAction::SortBy(column) => {
                if self.users.is_empty() {
                    return self;
                }
                if self.view.sort_by == Some(column) {
                    self.view.sort_order = self.view.sort_order.toggled();
                } else {
                    self.view.sort_by = Some(column);
                    self.view.sort_order = SortOrder::Asc;
                }
            }
            UserTableAction::PreviousPage => {
                if self.view.current_page > 1 {
                    self.view.current_page -= 1;
                }
            }
            UserTableAction::NextPage => {
                if self.view.current_page < total_pages(&self.users, &self.view) {
                    self.view.current_page += 1;
                }
            }
        }

        self
    }

    /// Applies several actions in order.
    pub fn reduce_all(self, actions: impl IntoIterator<Item = UserTableAction>) -> Self {
        actions.into_iter().fold(self, Self::reduce)
    }

    /// The page to render for the current state.
    pub fn derive(&self) -> DerivedView<'_> {
        derive_view(&self.users, &self.view)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Whether the controls and table should be shown.
    pub fn is_fetched(&self) -> bool {
        self.data_fetched
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    /// Message of the most recent failed fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
