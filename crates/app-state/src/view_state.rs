//! Page view-state machine
//!
//! Every route-bound page follows the same lifecycle: on a parameter change it
//! resets to [`ViewState::Loading`], validates its parameters, issues its
//! request(s), and settles in [`ViewState::Success`] or [`ViewState::Error`].
//! A settled page stays settled until the next navigation.
//!
//! Late results are guarded by [`FetchTicket`]s. Each navigation bumps the
//! controller's generation; a ticket from an older generation, or one whose
//! controller no longer exists, is discarded on resolve.

use crate::{PageError, Result};
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::{Arc, Weak};

/// Title shown before any page has set one
pub const DEFAULT_TITLE: &str = "Bhagavad Gita";

// =============================================================================
// View State
// =============================================================================

/// Lifecycle state of a page's data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// Request in flight
    Loading,
    /// Data received
    Success(T),
    /// Fixed user-visible message
    Error(String),
}

impl<T> ViewState<T> {
    /// Whether the page is still waiting on its data
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Loaded data, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Error message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

// =============================================================================
// Document Title
// =============================================================================

/// Shared, process-wide document title
#[derive(Debug, Clone)]
pub struct DocumentTitle {
    inner: Arc<RwLock<String>>,
}

impl Default for DocumentTitle {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl DocumentTitle {
    /// Create a title holder with an initial value
    pub fn new(initial: impl Into<String>) -> Self {
        Self { inner: Arc::new(RwLock::new(initial.into())) }
    }

    /// Current title
    pub fn get(&self) -> String {
        self.inner.read().clone()
    }

    /// Replace the title
    pub fn set(&self, title: impl Into<String>) {
        *self.inner.write() = title.into();
    }
}

impl fmt::Display for DocumentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.read())
    }
}

// =============================================================================
// Page Trait
// =============================================================================

/// A route-bound page: parameter validation, data loading, and the fixed
/// messages it shows on failure
#[async_trait]
pub trait Page: Send + Sync {
    /// Raw route parameters
    type Params: fmt::Debug + Send + Sync;

    /// Parameters after validation
    type Request: Send;

    /// Data the page renders on success
    type Data: Clone + Send + Sync;

    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Check parameters synchronously; an error here means no request is made
    fn validate(&self, params: &Self::Params) -> Result<Self::Request>;

    /// Issue the page's request(s)
    async fn load(&self, request: Self::Request) -> Result<Self::Data>;

    /// Document title to set on success
    fn title(&self, _data: &Self::Data) -> Option<String> {
        None
    }

    /// Fixed user-visible message for a failure
    fn error_message(&self, error: &PageError) -> &'static str;
}

// =============================================================================
// Fetch Ticket
// =============================================================================

struct Slot<T> {
    state: ViewState<T>,
    generation: u64,
}

/// Proof of an in-flight navigation
///
/// Holds only a weak reference to the controller's state so that a result
/// arriving after the page is gone has nowhere to land.
pub struct FetchTicket<T> {
    generation: u64,
    slot: Weak<Mutex<Slot<T>>>,
    title: DocumentTitle,
}

impl<T> FetchTicket<T> {
    /// Generation this ticket was issued for
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Store `state` if this ticket is still current; returns whether it was
    /// applied
    pub fn apply(self, state: ViewState<T>, title: Option<String>) -> bool {
        let Some(slot) = self.slot.upgrade() else {
            tracing::debug!(generation = self.generation, "page gone, discarding result");
            return false;
        };

        let mut slot = slot.lock();
        if slot.generation != self.generation {
            tracing::debug!(
                ticket = self.generation,
                current = slot.generation,
                "stale result discarded"
            );
            return false;
        }

        slot.state = state;
        drop(slot);

        if let Some(title) = title {
            self.title.set(title);
        }
        true
    }
}

impl<T> fmt::Debug for FetchTicket<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchTicket")
            .field("generation", &self.generation)
            .finish()
    }
}

// =============================================================================
// Page Controller
// =============================================================================

/// Owns one page's view-state and drives it through navigations
pub struct PageController<P: Page> {
    page: P,
    slot: Arc<Mutex<Slot<P::Data>>>,
    title: DocumentTitle,
}

impl<P: Page> PageController<P> {
    /// Create a controller in the `Loading` state
    pub fn new(page: P, title: DocumentTitle) -> Self {
        Self {
            page,
            slot: Arc::new(Mutex::new(Slot { state: ViewState::Loading, generation: 0 })),
            title,
        }
    }

    /// The page this controller drives
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Shared document title
    pub fn document_title(&self) -> &DocumentTitle {
        &self.title
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ViewState<P::Data> {
        self.slot.lock().state.clone()
    }

    /// Current generation
    pub fn generation(&self) -> u64 {
        self.slot.lock().generation
    }

    /// Start a navigation: bump the generation and reset to `Loading`
    pub fn begin(&self) -> FetchTicket<P::Data> {
        let mut slot = self.slot.lock();
        slot.generation += 1;
        slot.state = ViewState::Loading;

        FetchTicket {
            generation: slot.generation,
            slot: Arc::downgrade(&self.slot),
            title: self.title.clone(),
        }
    }

    /// Settle a navigation with its outcome
    pub fn resolve(&self, ticket: FetchTicket<P::Data>, result: Result<P::Data>) -> bool {
        match result {
            Ok(data) => {
                let title = self.page.title(&data);
                ticket.apply(ViewState::Success(data), title)
            }
            Err(error) => {
                tracing::warn!(page = self.page.name(), %error, "page load failed");
                let message = self.page.error_message(&error).to_string();
                ticket.apply(ViewState::Error(message), None)
            }
        }
    }

    /// Run a full navigation and return the resulting state
    pub async fn navigate(&self, params: P::Params) -> ViewState<P::Data> {
        let ticket = self.begin();
        tracing::debug!(page = self.page.name(), ?params, generation = ticket.generation(), "navigate");

        let result = match self.page.validate(&params) {
            Ok(request) => self.page.load(request).await,
            Err(error) => Err(error),
        };

        self.resolve(ticket, result);
        self.state()
    }
}
