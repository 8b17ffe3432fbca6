//! Middleware attaching a request-scoped identifier.
//!
//! Each incoming request receives a UUID `request_id` stored in task-local
//! storage for correlation across logs and error responses.
//!
//! Tokio task-local variables are not inherited across spawned tasks. Use
//! [`RequestId::scope`] when spawning new tasks or moving work onto blocking
//! threads to ensure the active identifier propagates correctly.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::future::Future;
use tokio::task_local;
use tracing::error;
use uuid::Uuid;

task_local! {
    static REQUEST_ID: RequestId;
}

/// Response header carrying the request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request identifier exposed via task-local storage.
///
/// # Examples
/// ```
/// use backend::middleware::trace::RequestId;
///
/// async fn handler() {
///     if let Some(id) = RequestId::current() {
///         tracing::info!(request_id = %id, "handling request");
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(Uuid);

impl RequestId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the current request identifier if one is in scope.
    pub fn current() -> Option<Self> {
        REQUEST_ID.try_with(|id| *id).ok()
    }

    /// Execute the provided future with the supplied identifier in scope.
    ///
    /// # Examples
    /// ```
    /// use backend::middleware::trace::RequestId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let request_id: RequestId = "00000000-0000-0000-0000-000000000000"
    ///     .parse()
    ///     .expect("valid UUID");
    /// let observed = RequestId::scope(request_id, async move { RequestId::current() }).await;
    /// assert_eq!(observed, Some(request_id));
    /// # });
    /// ```
    pub async fn scope<Fut>(request_id: RequestId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        REQUEST_ID.scope(request_id, fut).await
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RequestId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Middleware attaching a request-scoped UUID and adding an
/// `x-request-id` header to every response.
///
/// Handlers can read the identifier via [`RequestId::current`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::RequestTrace;
///
/// let app = App::new().wrap(RequestTrace);
/// ```
#[derive(Clone)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`RequestTrace`].
///
/// Applications should not use this type directly.
pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
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
        let request_id = RequestId::generate();
        let header_value = request_id.to_string();
        let fut = self.service.call(req);
        Box::pin(RequestId::scope(request_id, async move {
            let mut res = fut.await?;
            match HeaderValue::from_str(&header_value) {
                Ok(value) => {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }
                Err(error) => {
                    error!(
                        %error,
                        request_id = %request_id,
                        "failed to encode request identifier header"
                    );
                }
            }
            Ok(res)
        }))
    }
}
