//! Request context middleware - request IDs and per-request cancellation.

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{HeaderName, HeaderValue},
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::time::Duration;

use blog_core::RequestContext;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Middleware that gives each request an ID and a [`RequestContext`].
///
/// The context's token is cancelled if the request future is dropped before
/// it completes (the client went away). When a timeout is configured the
/// context also carries a deadline that far from arrival.
pub struct RequestContextMiddleware {
    timeout: Option<Duration>,
}

impl RequestContextMiddleware {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestContextMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestContextService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestContextService {
            service,
            timeout: self.timeout,
        }))
    }
}

pub struct RequestContextService<S> {
    service: S,
    timeout: Option<Duration>,
}

impl<S, B> Service<ServiceRequest> for RequestContextService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Keep an ID supplied by the client or a load balancer
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let token = CancellationToken::new();
        let mut ctx = RequestContext::with_token(token.clone());
        if let Some(timeout) = self.timeout {
            ctx = ctx.with_timeout(timeout);
        }

        req.extensions_mut().insert(RequestScope {
            id: request_id.clone(),
            ctx,
        });

        let span = tracing::info_span!("request", request_id = %request_id);
        let fut = span.in_scope(|| self.service.call(req));
        let guard = token.drop_guard();

        Box::pin(
            async move {
                let res = fut.await;
                guard.disarm();
                let mut res = res?;

                res.headers_mut().insert(
                    HeaderName::from_static("x-request-id"),
                    HeaderValue::from_str(&request_id)
                        .unwrap_or_else(|_| HeaderValue::from_static("unknown")),
                );

                Ok(res)
            }
            .instrument(span),
        )
    }
}

/// Request ID and cancellation context for the current request.
///
/// Handlers take this as an extractor and pass [`RequestScope::ctx`] down to
/// the service. Without the middleware a fresh, never-cancelled scope is
/// produced.
#[derive(Debug, Clone)]
pub struct RequestScope {
    id: String,
    ctx: RequestContext,
}

impl RequestScope {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn ctx(&self) -> &RequestContext {
        &self.ctx
    }
}

impl actix_web::FromRequest for RequestScope {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let scope = req
            .extensions()
            .get::<RequestScope>()
            .cloned()
            .unwrap_or_else(|| RequestScope {
                id: Uuid::new_v4().to_string(),
                ctx: RequestContext::new(),
            });

        ready(Ok(scope))
    }
}
