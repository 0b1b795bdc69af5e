//! HMAC authentication middleware.
//!
//! Extracts a credential from the request headers, checks request
//! freshness, invokes the [`HmacAuthenticator`], and injects the resulting
//! [`Principal`] into the request extensions for handlers to pick up.
//!
//! ## Wire contract
//!
//! Protected requests carry two headers:
//!
//! - `Authorization: HMAC <api_key>:<algorithm>:<hex_digest>`
//! - `X-Request-Date: <unix_seconds>`
//!
//! The signed content is the canonical string
//! `"{METHOD}\n{path}\n{x_request_date}"`. Supported algorithm names are
//! `hmac-sha256`, `hmac-sha384` and `hmac-sha512` (case-insensitive, with
//! the `HmacSHA256`-style aliases accepted).
//!
//! Requests whose `X-Request-Date` falls outside the configured freshness
//! window are rejected before any signature work happens.
//!
//! Every rejection except the unsupported-algorithm case maps to the same
//! generic 401 response: a missing header, a stale date, an unknown API
//! key, and a digest mismatch are indistinguishable to the caller.

use crate::config::HmacConfig;
use crate::models::audit::{AuthAuditEvent, AuthEventOutcome, AuthEventType};
use crate::models::auth::{AuthFailure, Credential, Principal};
use crate::services::authenticator::HmacAuthenticator;
use crate::services::metrics::AppMetrics;
use crate::utils::http::{extract_client_ip, extract_user_agent};
use actix_web::{
    Error, HttpMessage, HttpRequest, HttpResponse,
    body::{BoxBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    error::ErrorUnauthorized,
    web,
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    rc::Rc,
    time::{SystemTime, UNIX_EPOCH},
};

/// Scheme token expected in the `Authorization` header
pub const AUTH_SCHEME: &str = "HMAC";

/// Header carrying the caller's request date as unix seconds
pub const REQUEST_DATE_HEADER: &str = "X-Request-Date";

/// Paths served without authentication
const PUBLIC_PATHS: &[&str] = &["/", "/api/health", "/api/version", "/api/metrics", "/api/spec/v2"];

/// Build the canonical string a caller signs for one request
pub fn canonical_content(method: &str, path: &str, request_date: &str) -> String {
    format!("{method}\n{path}\n{request_date}")
}

/// Fetch the principal injected by the middleware, or reject with the
/// generic 401.
pub fn require_principal(req: &HttpRequest) -> Result<Principal, Error> {
    req.extensions()
        .get::<Principal>()
        .cloned()
        .ok_or_else(|| ErrorUnauthorized("authentication failed"))
}

/// HMAC authentication middleware factory
pub struct HmacAuth {
    authenticator: HmacAuthenticator,
    config: HmacConfig,
}

impl HmacAuth {
    pub fn new(authenticator: HmacAuthenticator, config: HmacConfig) -> Self {
        Self {
            authenticator,
            config,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for HmacAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = HmacAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HmacAuthMiddleware {
            service: Rc::new(service),
            authenticator: self.authenticator.clone(),
            config: self.config.clone(),
        }))
    }
}

/// The actual HMAC authentication middleware service
pub struct HmacAuthMiddleware<S> {
    service: Rc<S>,
    authenticator: HmacAuthenticator,
    config: HmacConfig,
}

impl<S, B> Service<ServiceRequest> for HmacAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authenticator = self.authenticator.clone();
        let config = self.config.clone();

        Box::pin(async move {
            if PUBLIC_PATHS.contains(&req.path()) {
                return service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_boxed_body);
            }

            // Verification always runs so signed requests carry a principal
            // even when enforcement is switched off.
            match verify_request(req.request(), &authenticator, &config) {
                Ok(principal) => {
                    audit(req.request(), AuthEventType::HmacAccepted, Some(&principal.api_key));
                    record_metric(&req, "accepted");
                    req.extensions_mut().insert(principal);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_boxed_body)
                }
                Err(rejection) if config.require_signature => {
                    audit(req.request(), rejection.event_type(), rejection.api_key());
                    record_metric(&req, rejection.metric_label());
                    Ok(req.into_response(rejection.into_response()))
                }
                // Enforcement off: forward unverified requests; handlers that
                // need an identity still reject on the missing principal.
                Err(_) => service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_boxed_body),
            }
        })
    }
}

/// Server-side rejection reasons.
///
/// These stay internal: audit logs and metrics see the distinction, the
/// caller sees one generic 401 (or a 400 for the algorithm check).
enum Rejection {
    MissingHeader,
    MalformedHeader,
    StaleDate { api_key: String },
    Failed { api_key: String, failure: AuthFailure },
}

impl Rejection {
    fn event_type(&self) -> AuthEventType {
        match self {
            Rejection::MissingHeader | Rejection::MalformedHeader => AuthEventType::MalformedHeader,
            Rejection::StaleDate { .. } => AuthEventType::StaleRequest,
            Rejection::Failed {
                failure: AuthFailure::UnsupportedAlgorithm,
                ..
            } => AuthEventType::UnsupportedAlgorithm,
            Rejection::Failed { .. } => AuthEventType::HmacRejected,
        }
    }

    fn api_key(&self) -> Option<&str> {
        match self {
            Rejection::MissingHeader | Rejection::MalformedHeader => None,
            Rejection::StaleDate { api_key } | Rejection::Failed { api_key, .. } => {
                Some(api_key.as_str())
            }
        }
    }

    fn metric_label(&self) -> &'static str {
        match self {
            Rejection::Failed {
                failure: AuthFailure::UnsupportedAlgorithm,
                ..
            } => "unsupported_algorithm",
            _ => "rejected",
        }
    }

    fn into_response(self) -> HttpResponse {
        match self {
            Rejection::Failed {
                failure: AuthFailure::UnsupportedAlgorithm,
                ..
            } => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Bad Request",
                "message": "unsupported signature algorithm"
            })),
            // One response shape for every other rejection
            _ => HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Unauthorized",
                "message": "authentication failed"
            })),
        }
    }
}

fn verify_request(
    req: &HttpRequest,
    authenticator: &HmacAuthenticator,
    config: &HmacConfig,
) -> Result<Principal, Rejection> {
    let authorization = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(Rejection::MissingHeader)?;

    let fields = authorization
        .strip_prefix(AUTH_SCHEME)
        .and_then(|rest| rest.strip_prefix(' '))
        .map(str::trim_start)
        .ok_or(Rejection::MalformedHeader)?;

    let mut parts = fields.splitn(3, ':');
    let (Some(api_key), Some(algorithm), Some(digest)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(Rejection::MalformedHeader);
    };

    let request_date = req
        .headers()
        .get(REQUEST_DATE_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or(Rejection::MissingHeader)?;

    let timestamp: u64 = request_date
        .parse()
        .map_err(|_| Rejection::MalformedHeader)?;

    // Freshness window: replayed requests age out before any signature work
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    if now.abs_diff(timestamp) > config.timestamp_tolerance_seconds {
        return Err(Rejection::StaleDate {
            api_key: api_key.to_string(),
        });
    }

    let content = canonical_content(req.method().as_str(), req.path(), request_date);
    let credential = Credential::new(api_key, algorithm, content, digest)
        .map_err(|_| Rejection::MalformedHeader)?;

    authenticator
        .authenticate(&credential)
        .map_err(|failure| Rejection::Failed {
            api_key: api_key.to_string(),
            failure,
        })
}

fn audit(req: &HttpRequest, event_type: AuthEventType, api_key: Option<&str>) {
    let outcome = match event_type {
        AuthEventType::HmacAccepted => AuthEventOutcome::Success,
        _ => AuthEventOutcome::Failure,
    };
    AuthAuditEvent::new(
        event_type,
        outcome,
        extract_client_ip(req),
        req.method().to_string(),
        req.path().to_string(),
    )
    .with_api_key(api_key.map(str::to_string))
    .with_user_agent(extract_user_agent(req))
    .log();
}

fn record_metric(req: &ServiceRequest, outcome: &str) {
    if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
        metrics.record_auth_attempt(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_content_joins_with_newlines() {
        assert_eq!(
            canonical_content("GET", "/api/orders", "1700000000"),
            "GET\n/api/orders\n1700000000"
        );
    }
}
