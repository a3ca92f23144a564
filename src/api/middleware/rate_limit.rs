//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Requests replenished per second for each client.
pub const REQUESTS_PER_SECOND: u64 = 5;

/// Requests a client may send in a burst before throttling starts.
pub const BURST_SIZE: u32 = 50;

/// Type of the layer returned by [`layer`].
pub type ApiRateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates the rate limiter for the JSON API.
///
/// # Limits
///
/// - **Rate**: [`REQUESTS_PER_SECOND`] requests per second
/// - **Burst**: [`BURST_SIZE`] requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Limits apply per client IP taken from the socket peer address, so the
/// server must be started with `into_make_service_with_connect_info`.
///
/// # Example
///
/// ```rust,ignore
/// let api = api::routes::api_routes().layer(rate_limit::layer());
/// ```
pub fn layer() -> ApiRateLimitLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(REQUESTS_PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("non-zero rate limit settings"),
    );

    GovernorLayer::new(governor_conf)
}
