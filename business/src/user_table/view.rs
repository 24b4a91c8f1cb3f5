//! Derived view pipeline: sort, filter by name, filter by ID range, paginate.
//!
//! Everything here is pure and recomputed every frame from the fetched users
//! and the current [`ViewState`]. Nothing is cached.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use log::warn;

use crate::User;

use super::state::{ITEMS_PER_PAGE, SortColumn, SortOrder, ViewState};

/// The page of users to render plus what the pagination row needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    /// Rows on the current page, at most [`ITEMS_PER_PAGE`].
    pub page_items: Vec<&'a User>,
    /// Users left after both filters, across all pages.
    pub filtered_count: usize,
    /// `ceil(filtered_count / ITEMS_PER_PAGE)`; zero when nothing matches.
    pub total_pages: u32,
    pub current_page: u32,
}

impl DerivedView<'_> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// False on the last page, and also past it (an empty filter result or a
    /// page left out of range by an ID-range change).
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Label shown between the pagination buttons.
    pub fn page_label(&self) -> String {
        format!("{} of {}", self.current_page, self.total_pages)
    }
}

/// Runs the full pipeline for `view` over `users`.
pub fn derive_view<'a>(users: &'a [User], view: &ViewState) -> DerivedView<'a> {
    let mut rows: Vec<&User> = users.iter().collect();

    if let Some(column) = view.sort_by {
        sort_users(&mut rows, column, view.sort_order);
    }

    let filtered: Vec<&User> = rows
        .into_iter()
        .filter(|user| matches_name(user, &view.filter_text))
        .filter(|user| in_id_range(user, view.start_user_id, view.end_user_id))
        .collect();

    let filtered_count = filtered.len();
    let total_pages = u32::try_from(filtered_count.div_ceil(ITEMS_PER_PAGE)).unwrap_or(u32::MAX);

    let start = (view.current_page.saturating_sub(1) as usize).saturating_mul(ITEMS_PER_PAGE);
    let page_items = filtered
        .into_iter()
        .skip(start)
        .take(ITEMS_PER_PAGE)
        .collect();

    DerivedView {
        page_items,
        filtered_count,
        total_pages,
        current_page: view.current_page,
    }
}

/// Number of pages `view` would produce over `users`.
pub fn total_pages(users: &[User], view: &ViewState) -> u32 {
    derive_view(users, view).total_pages
}

/// Stable sort, so rows with equal keys keep fetch order.
fn sort_users(rows: &mut [&User], column: SortColumn, order: SortOrder) {
    rows.sort_by(|a, b| {
        let (a, b) = (column.text_of(a), column.text_of(b));
        match order {
            SortOrder::Asc => locale_compare(a, b),
            SortOrder::Desc => locale_compare(b, a),
        }
    });
}

/// Case-insensitive substring match on `name`. A user whose name is absent or
/// empty never matches.
pub fn matches_name(user: &User, filter_text: &str) -> bool {
    user.name()
        .filter(|name| !name.is_empty())
        .is_some_and(|name| name.to_lowercase().contains(&filter_text.to_lowercase()))
}

/// Inclusive on both ends. An inverted range (`start > end`) matches nothing.
pub fn in_id_range(user: &User, start: i64, end: i64) -> bool {
    start <= user.id && user.id <= end
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                warn!("root collator unavailable, falling back to code point order: {err}");
                None
            }
        };
}

/// Human-oriented string ordering using the root (CLDR) collation at tertiary
/// strength: base letters first, then accents, then case with lowercase first.
///
/// Falls back to code point order if the collation data cannot be loaded.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
