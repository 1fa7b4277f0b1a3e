use std::future::Future;

use payloads::{ClientError, IdeaSort, ListQuery, Page, responses::PageOf};
use yew::prelude::*;

use crate::Route;
use crate::hooks::{ApiError, use_api, use_push_route};

/// State of one paginated list view.
pub struct PaginatedList<T> {
    pub page: Page,
    /// Items currently on display. An empty successful result for a page
    /// beyond the first retains the previous items, so entries can be
    /// momentarily stale while a new page loads.
    pub entries: Vec<T>,
    pub total_pages: i64,
    pub is_loading: bool,
    pub error: Option<ApiError>,
    /// Navigate to a page: pushes the page's canonical address onto the
    /// history stack and fetches it.
    pub go_to_page: Callback<Page>,
    /// Re-fetch the current page without touching history.
    pub refetch: Callback<()>,
}

impl<T> PaginatedList<T> {
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.entries.is_empty() && self.error.is_none()
    }

    /// The empty state renders only for a settled, empty first page.
    pub fn is_empty(&self) -> bool {
        !self.is_loading
            && self.error.is_none()
            && self.entries.is_empty()
            && self.page.is_first()
    }
}

/// Controller for a paginated list: owns the current page, fetches the
/// matching slice through [`use_api`], derives the page count from the
/// result envelope, and keeps the address bar in sync with the displayed
/// page.
///
/// Address synchronization works in both directions: `go_to_page` pushes the
/// page's canonical route (a new history entry), while back/forward and
/// direct links arrive through the router as a changed `initial_page`, which
/// re-derives the page and re-fetches without pushing.
///
/// `deps` identifies the list configuration the fetch closure captures
/// (e.g. a user id); changing it re-fetches, like a change to `limit` or
/// `sort`.
#[hook]
pub fn use_paginated_list<T, D, F, Fut, R>(
    deps: D,
    limit: i64,
    sort: Option<IdeaSort>,
    initial_page: Page,
    fetch_fn: F,
    route_for: R,
) -> PaginatedList<T>
where
    T: Clone + PartialEq + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<PageOf<T>, ClientError>> + 'static,
    R: Fn(Page) -> Route + 'static,
{
    let page = use_state(|| initial_page);
    let entries = use_state(Vec::<T>::new);
    let total_pages = use_state(|| 0i64);
    let push_route = use_push_route();

    let api = use_api(true, fetch_fn);

    // Externally supplied page changes (back/forward, direct links) replace
    // the current page without pushing a history entry.
    {
        let page = page.clone();
        use_effect_with(initial_page, move |initial| {
            page.set(*initial);
        });
    }

    // Fetch whenever the page or the list configuration changes.
    {
        let trigger = api.trigger.clone();
        use_effect_with(
            (deps, limit, sort, *page),
            move |(_, limit, sort, page)| {
                trigger.emit(ListQuery::for_page(*page, *limit, *sort));
            },
        );
    }

    // Apply the retention policy: non-empty results replace the entries; an
    // empty first page clears them; an empty later page keeps what's shown.
    // The page count only updates from envelopes that carry a total.
    {
        let entries = entries.clone();
        let total_pages = total_pages.clone();
        let page_number = page.number();
        use_effect_with(api.data.clone(), move |data| {
            if let Some(envelope) = data {
                if !envelope.data.is_empty() {
                    entries.set(envelope.data.clone());
                } else if page_number == 0 {
                    entries.set(Vec::new());
                }
                if envelope.count > 0 {
                    total_pages.set(envelope.total_pages(limit));
                }
            }
        });
    }

    let go_to_page = {
        let page = page.clone();
        Callback::from(move |new_page: Page| {
            page.set(new_page);
            push_route.emit(route_for(new_page));
        })
    };

    let refetch = {
        let trigger = api.trigger.clone();
        let current = *page;
        Callback::from(move |_| {
            trigger.emit(ListQuery::for_page(current, limit, sort));
        })
    };

    PaginatedList {
        page: *page,
        entries: (*entries).clone(),
        total_pages: *total_pages,
        is_loading: api.is_loading,
        error: api.error,
        go_to_page,
        refetch,
    }
}
