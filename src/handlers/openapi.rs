//! OpenAPI specification generation and app factory.

use crate::{
    config::{DirectoryConfig, HmacConfig, MetricsConfig, SecurityHeadersConfig},
    handlers::{get_metrics, health, index, list_orders, version},
    middleware::{HmacAuth, SecurityHeaders},
    services::{AppMetrics, HmacAuthenticator, InMemoryDirectory, OrderStore, UserDirectory},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};
use std::sync::Arc;

/// Creates the shared OpenAPI specification for the API
///
/// The description documents the HMAC request signing contract, which is
/// part of the wire contract every client depends on.
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Merchant API".into(),
            version: "1.0.0".into(),
            description: Some(
                "Merchant platform API authenticated with per-account HMAC request signatures.\n\
                \n\
                ## HMAC Request Authentication\n\
                Every protected request is signed with the account's shared secret; the secret \
                itself never crosses the wire.\n\
                \n\
                **Headers for signed requests:**\n\
                - `Authorization: HMAC <api_key>:<algorithm>:<hex_digest>`\n\
                - `X-Request-Date`: Unix timestamp (seconds since epoch)\n\
                \n\
                **Signature calculation:**\n\
                1. Build the canonical content: `{METHOD}\\n{path}\\n{x_request_date}`\n\
                2. Compute the HMAC over the canonical content using the account secret\n\
                3. Encode the digest as a lowercase hexadecimal string\n\
                \n\
                **Supported algorithms:** `hmac-sha256`, `hmac-sha384`, `hmac-sha512` \
                (case-insensitive).\n\
                \n\
                Requests older than the configured freshness window are rejected. All \
                authentication failures return the same generic 401 response; requesting an \
                unsupported algorithm returns 400.\n\
                \n\
                **Configuration:**\n\
                - `MERCHANT_ACCOUNTS`: seeded `api_key:secret_key` pairs, comma separated\n\
                - `HMAC_REQUIRE_SIGNATURE`: set to `false` to disable enforcement (development only)\n\
                - `HMAC_TIMESTAMP_TOLERANCE`: freshness window in seconds (default: 300)"
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates an app from explicit dependencies
///
/// Used directly by tests that need a known directory and configuration;
/// [`create_base_app`] wires the same graph from the environment.
pub fn create_app(
    directory: Arc<dyn UserDirectory>,
    store: OrderStore,
    hmac_config: HmacConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let security_config = SecurityHeadersConfig::from_env();
    let metrics_config = MetricsConfig::from_env();
    let metrics = AppMetrics::new().expect("Failed to create metrics");
    let authenticator = HmacAuthenticator::new(directory);

    App::new()
        .wrap(SecurityHeaders::new(security_config))
        .wrap(HmacAuth::new(authenticator, hmac_config))
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(metrics_config))
        .app_data(web::Data::new(metrics))
        .app_data(web::Data::new(store))
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/orders").route(web::get().to(list_orders)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}

/// Creates the app with environment-driven configuration
///
/// Seeds the account directory from `MERCHANT_ACCOUNTS` and demo orders
/// for each seeded account.
pub fn create_base_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let directory_config = DirectoryConfig::from_env();
    let directory = InMemoryDirectory::from_config(&directory_config);
    let store = OrderStore::seed_demo(directory.accounts());
    let hmac_config = HmacConfig::from_env();

    create_app(Arc::new(directory), store, hmac_config)
}
