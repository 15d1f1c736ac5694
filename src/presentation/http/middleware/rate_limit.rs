// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Sustained requests per second allowed for one client address.
pub const REQUESTS_PER_SECOND: u64 = 10;
pub const BURST_SIZE: u32 = 20;

pub type PostRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter shared by every router built in this process.
///
/// The key comes from forwarding headers when present, otherwise from the
/// peer address, so the server must be run with connect info.
pub fn rate_limit_layer() -> PostRateLimitLayer {
    static RATE_LIMITER: OnceLock<PostRateLimitLayer> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REQUESTS_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("non-zero rate limit quota");

            GovernorLayer::new(config)
        })
        .clone()
}
