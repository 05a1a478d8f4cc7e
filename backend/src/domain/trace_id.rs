//! Correlation identifier for a single request.
//!
//! Every request gets a fresh [`TraceId`] from the tracing middleware. The
//! same value lands in three places: structured log events, the `trace-id`
//! response header, and the `trace_id` field of error payloads, so a support
//! ticket quoting any one of them can be matched to the other two.
//!
//! The active identifier lives in Tokio task-local storage rather than being
//! threaded through every call. Task locals do not cross `tokio::spawn`
//! boundaries; wrap spawned work in [`TraceId::scope`] to carry it over.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static ACTIVE_TRACE: TraceId;
}

/// Identifier correlating one request's logs, header, and error payload.
///
/// # Examples
/// ```
/// use repair_backend::domain::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let id: TraceId = "6f2cbf0f-98f2-4f22-a1c4-d87b0a9fd4c3".parse().unwrap();
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a random identifier for a new request.
    #[must_use]
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request being handled, if any is in scope.
    ///
    /// Returns `None` outside a request context, for example in a detached
    /// background task that was not wrapped in [`TraceId::scope`].
    #[must_use]
    pub fn current() -> Option<Self> {
        ACTIVE_TRACE.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` installed as the current identifier.
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        ACTIVE_TRACE.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Uuid>().map(Self)
    }
}
