use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use payloads::ClientError;
use reqwest::StatusCode;
use yew::prelude::*;

/// A settled request failure, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
    /// Present when the failure was an HTTP error status rather than a
    /// transport-level problem.
    pub status: Option<StatusCode>,
}

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        ApiError {
            status: error.status(),
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Hands out a token per initiated request and answers, at completion time,
/// whether that request is still the most recently initiated one. Stale
/// completions are discarded instead of overwriting newer state; the
/// underlying transport is never cancelled.
#[derive(Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    pub fn begin(&self) -> u64 {
        let token = self.latest.get() + 1;
        self.latest.set(token);
        token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest.get() == token
    }
}

/// State of a single in-flight-or-settled request.
pub struct UseApiHandle<I, T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub is_loading: bool,
    /// Start a (new) request. Superseded in-flight requests keep running but
    /// no longer affect this state.
    pub trigger: Callback<I>,
}

impl<I, T> UseApiHandle<I, T> {
    /// Returns true if this is the initial load (nothing fetched yet,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.data.is_none() && self.error.is_none()
    }
}

/// Generic request hook.
///
/// Wraps one logical request slot: triggering issues the call and exposes
/// its lifecycle as state. On settlement exactly one of `data`/`error` is
/// updated. When triggers overlap, the most recently initiated call wins;
/// replies to superseded calls are dropped (see [`RequestSequence`]).
///
/// # Example
///
/// ```ignore
/// let ideas = use_api(true, |query: ListQuery| async move {
///     get_api_client().list_ideas(&query).await
/// });
/// // ...
/// ideas.trigger.emit(ListQuery::for_page(page, 10, None));
/// ```
#[hook]
pub fn use_api<I, T, F, Fut>(
    loading_initially: bool,
    fetch_fn: F,
) -> UseApiHandle<I, T>
where
    I: 'static,
    T: Clone + 'static,
    F: Fn(I) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let data = use_state(|| None::<T>);
    let error = use_state(|| None::<ApiError>);
    let is_loading = use_state(move || loading_initially);
    let sequence = use_memo((), |_| RequestSequence::default());

    let trigger = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let sequence = sequence.clone();
        let fetch_fn = Rc::new(fetch_fn);

        Callback::from(move |input: I| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let sequence = sequence.clone();
            let fetch_fn = fetch_fn.clone();
            let token = sequence.begin();

            is_loading.set(true);
            error.set(None);

            yew::platform::spawn_local(async move {
                let result = fetch_fn(input).await;

                if !sequence.is_current(token) {
                    // A newer trigger owns the state now.
                    tracing::debug!("discarding stale response");
                    return;
                }

                match result {
                    Ok(value) => {
                        data.set(Some(value));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e.into()));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    UseApiHandle {
        data: (*data).clone(),
        error: (*error).clone(),
        is_loading: *is_loading,
        trigger,
    }
}

#[cfg(test)]
mod tests {
    use super::RequestSequence;

    #[test]
    fn test_latest_initiated_request_wins() {
        let sequence = RequestSequence::default();
        let a = sequence.begin();
        let b = sequence.begin();

        // B settles first and is current; A settles later and is stale.
        assert!(sequence.is_current(b));
        assert!(!sequence.is_current(a));
    }

    #[test]
    fn test_settlement_order_does_not_matter() {
        let sequence = RequestSequence::default();
        let a = sequence.begin();
        let b = sequence.begin();

        // Even if the earlier request settles last, it stays superseded.
        assert!(!sequence.is_current(a));
        assert!(sequence.is_current(b));

        let c = sequence.begin();
        assert!(!sequence.is_current(b));
        assert!(sequence.is_current(c));
    }

    #[test]
    fn test_single_request_is_current() {
        let sequence = RequestSequence::default();
        let token = sequence.begin();
        assert!(sequence.is_current(token));
    }
}
