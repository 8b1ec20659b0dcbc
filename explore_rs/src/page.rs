//! Page load state machine.
//!
//! `Loading -> Success | Empty | Error`. Every load takes a generation
//! token; a response is applied only if no newer load started meanwhile,
//! so a slow request for an old page can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::{ExploreError, Result};
use crate::source::PageSource;
use crate::types::{Page, PageResponse};

/// Fallback error text when the CMS gives none.
pub const GENERIC_FAILURE: &str = "Failed to fetch data";

/// What the page currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum PageState {
    Loading,
    Success(Page),
    /// The CMS answered successfully but had no page data.
    Empty,
    Error(String),
}

/// Result of one [`PageLoader::load`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// The load finished and its state is now current.
    Applied(PageState),
    /// A newer load started first; this result was dropped.
    Stale,
}

/// Unwrap the response envelope.
///
/// `success: false` becomes [`ExploreError::Application`] carrying the CMS
/// message, or [`GENERIC_FAILURE`] when it sent none.
pub fn page_data(response: PageResponse) -> Result<Option<Page>> {
    if !response.success {
        let message = response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(ExploreError::Application { message });
    }
    Ok(response.data)
}

/// Map a fetch result to a terminal state.
pub fn interpret(fetched: Result<PageResponse>) -> PageState {
    match fetched.and_then(page_data) {
        Ok(Some(page)) => PageState::Success(page),
        Ok(None) => PageState::Empty,
        Err(e) => PageState::Error(e.to_string()),
    }
}

/// Head metadata derived from the route's page name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    /// Decoded page name, e.g. `All Destinations`
    pub name: String,
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    /// Build from a route segment such as `All%20Destinations`.
    ///
    /// A segment that is not valid percent-encoding is used as-is.
    pub fn from_route(segment: &str, site_name: &str) -> Self {
        let name = urlencoding::decode(segment)
            .map(|n| n.into_owned())
            .unwrap_or_else(|_| segment.to_string());
        Self {
            title: format!("{name} - {site_name}"),
            description: format!("Explore our curated collection of {}", name.to_lowercase()),
            name,
        }
    }
}

/// Drives page loads against a [`PageSource`].
pub struct PageLoader<S> {
    source: S,
    generation: AtomicU64,
    state: RwLock<PageState>,
}

impl<S: PageSource> PageLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
            state: RwLock::new(PageState::Loading),
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> PageState {
        self.state.read().await.clone()
    }

    /// Number of loads started so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Load `name` and apply the result unless a newer load has begun.
    pub async fn load(&self, name: &str) -> LoadOutcome {
        // Bump and reset under one lock so a newer load can never be reset
        // by an older one.
        let token = {
            let mut state = self.state.write().await;
            let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = PageState::Loading;
            token
        };
        info!(page = name, generation = token, "loading page");

        let next = interpret(self.source.fetch_page(name).await);

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != token {
            warn!(page = name, generation = token, "dropping stale page response");
            return LoadOutcome::Stale;
        }
        *state = next.clone();
        LoadOutcome::Applied(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::sync::oneshot;

    fn page(name: &str) -> Page {
        Page {
            id: name.to_lowercase(),
            name: name.into(),
            slug: name.to_lowercase(),
            sections: vec![],
        }
    }

    fn ok(page: Option<Page>) -> PageResponse {
        PageResponse {
            success: true,
            data: page,
            message: None,
        }
    }

    struct Canned(fn() -> Result<PageResponse>);

    impl PageSource for Canned {
        async fn fetch_page(&self, _name: &str) -> Result<PageResponse> {
            (self.0)()
        }
    }

    /// Each page name resolves only when the test sends its response.
    struct Gated {
        pending: Mutex<HashMap<String, oneshot::Receiver<PageResponse>>>,
    }

    impl PageSource for Gated {
        async fn fetch_page(&self, name: &str) -> Result<PageResponse> {
            let rx = self.pending.lock().unwrap().remove(name);
            match rx {
                Some(rx) => rx
                    .await
                    .map_err(|_| ExploreError::Network("gate dropped".into())),
                None => Err(ExploreError::Network(format!("unexpected page {name}"))),
            }
        }
    }

    #[test]
    fn metadata_decodes_route_name() {
        let meta = PageMetadata::from_route("All%20Destinations", "Holiday Tribe");
        assert_eq!(meta.name, "All Destinations");
        assert_eq!(meta.title, "All Destinations - Holiday Tribe");
        assert_eq!(
            meta.description,
            "Explore our curated collection of all destinations"
        );
    }

    #[test]
    fn metadata_keeps_undecodable_segment() {
        let meta = PageMetadata::from_route("Beach%FF", "Holiday Tribe");
        assert_eq!(meta.name, "Beach%FF");
    }

    #[tokio::test]
    async fn starts_in_loading() {
        let loader = PageLoader::new(Canned(|| Ok(ok(None))));
        assert_eq!(loader.state().await, PageState::Loading);
        assert_eq!(loader.generation(), 0);
    }

    #[tokio::test]
    async fn success_with_data() {
        let loader = PageLoader::new(Canned(|| Ok(ok(Some(page("Home"))))));
        let outcome = loader.load("Home").await;

        assert_eq!(outcome, LoadOutcome::Applied(PageState::Success(page("Home"))));
        assert_eq!(loader.state().await, PageState::Success(page("Home")));
    }

    #[tokio::test]
    async fn success_without_data_is_empty() {
        let loader = PageLoader::new(Canned(|| Ok(ok(None))));
        assert_eq!(loader.load("Home").await, LoadOutcome::Applied(PageState::Empty));
    }

    #[tokio::test]
    async fn application_failure_uses_message() {
        let loader = PageLoader::new(Canned(|| {
            Ok(PageResponse {
                success: false,
                data: None,
                message: Some("Page not found".into()),
            })
        }));
        loader.load("Nope").await;
        assert_eq!(loader.state().await, PageState::Error("Page not found".into()));
    }

    #[tokio::test]
    async fn application_failure_without_message_is_generic() {
        let loader = PageLoader::new(Canned(|| {
            Ok(PageResponse {
                success: false,
                data: None,
                message: None,
            })
        }));
        loader.load("Nope").await;
        assert_eq!(loader.state().await, PageState::Error(GENERIC_FAILURE.into()));
    }

    #[tokio::test]
    async fn transport_failure_is_error_state() {
        let loader = PageLoader::new(Canned(|| Err(ExploreError::Status { status: 500 })));
        loader.load("Home").await;
        assert_eq!(
            loader.state().await,
            PageState::Error("HTTP error! status: 500".into())
        );
    }

    #[tokio::test]
    async fn stale_response_does_not_overwrite_newer_load() {
        let (old_tx, old_rx) = oneshot::channel();
        let (new_tx, new_rx) = oneshot::channel();
        let pending = HashMap::from([("Old".to_string(), old_rx), ("New".to_string(), new_rx)]);
        let loader = Arc::new(PageLoader::new(Gated {
            pending: Mutex::new(pending),
        }));

        let first = {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move { loader.load("Old").await })
        };
        while loader.generation() < 1 {
            tokio::task::yield_now().await;
        }
        let second = {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move { loader.load("New").await })
        };
        while loader.generation() < 2 {
            tokio::task::yield_now().await;
        }

        new_tx.send(ok(Some(page("New")))).unwrap();
        assert_eq!(
            second.await.unwrap(),
            LoadOutcome::Applied(PageState::Success(page("New")))
        );

        old_tx.send(ok(Some(page("Old")))).unwrap();
        assert_eq!(first.await.unwrap(), LoadOutcome::Stale);
        assert_eq!(loader.state().await, PageState::Success(page("New")));
    }

    #[test]
    fn unsuccessful_envelope_is_an_application_error() {
        let err = page_data(PageResponse {
            success: false,
            data: None,
            message: Some("Page not found".into()),
        })
        .unwrap_err();
        assert!(matches!(&err, ExploreError::Application { message } if message == "Page not found"));

        let err = page_data(PageResponse::default()).unwrap_err();
        assert_eq!(err.to_string(), GENERIC_FAILURE);
        assert_eq!(page_data(ok(None)).unwrap(), None);
    }

    #[tokio::test]
    async fn generation_bump_waits_for_the_state_lock() {
        let loader = Arc::new(PageLoader::new(Canned(|| Ok(ok(Some(page("Home")))))));
        let guard = loader.state.write().await;

        let load = {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move { loader.load("Home").await })
        };
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(loader.generation(), 0);

        drop(guard);
        assert_eq!(
            load.await.unwrap(),
            LoadOutcome::Applied(PageState::Success(page("Home")))
        );
        assert_eq!(loader.generation(), 1);
    }

    #[tokio::test]
    async fn reload_resets_to_loading_then_applies() {
        let loader = PageLoader::new(Canned(|| Ok(ok(Some(page("Home"))))));
        loader.load("Home").await;
        loader.load("Home").await;
        assert_eq!(loader.generation(), 2);
        assert_eq!(loader.state().await, PageState::Success(page("Home")));
    }
}
