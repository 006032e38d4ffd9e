//! Task-local trace context for web requests.
//!
//! `TraceSpan` scopes every request future with its trace id so that error
//! responses built deep inside handlers or middleware can stamp the same id
//! into the problem document and the `x-trace-id` header.
//!
//! Part of the web boundary; services and the auth core do not import it.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id for the current task, or "unknown" outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future within a trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
