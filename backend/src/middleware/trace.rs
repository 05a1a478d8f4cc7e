//! Middleware stamping every request with a [`TraceId`].
//!
//! The identifier is installed in task-local storage for the duration of the
//! request, so handlers, services, and error constructors can read it via
//! [`TraceId::current`], and it is echoed to the client in the `trace-id`
//! response header. Spawned tasks need [`TraceId::scope`] to see it.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::error;

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Request-tracing middleware; wrap the application with it once.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use repair_backend::RequestTracing;
///
/// let app = App::new().wrap(RequestTracing);
/// ```
#[derive(Clone)]
pub struct RequestTracing;

impl<S, B> Transform<S, ServiceRequest> for RequestTracing
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTracingMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTracingMiddleware { service }))
    }
}

/// Per-request service built by [`RequestTracing`]; never constructed by hand.
pub struct RequestTracingMiddleware<S> {
    service: S,
}

/// Attach the trace header to an outgoing response.
///
/// A UUID always renders to a valid header value; the error arm exists only
/// because `HeaderValue` cannot know that.
fn append_trace_header<B>(res: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::try_from(trace_id.to_string()) {
        Ok(value) => {
            res.headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(err) => {
            error!(error = %err, trace_id = %trace_id, "trace header encoding failed");
        }
    }
}

impl<S, B> Service<ServiceRequest> for RequestTracingMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let fut = self.service.call(req);
        Box::pin(TraceId::scope(trace_id, async move {
            let mut res = fut.await?;
            append_trace_header(&mut res, trace_id);
            Ok(res)
        }))
    }
}
