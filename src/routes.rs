use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

use crate::{api::leave, config::Config};

pub type LimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer limit of `requests_per_min` with an equal burst. Build it once
/// and hand it to every worker so they share one quota.
pub fn build_limiter(requests_per_min: u32) -> LimiterConfig {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .expect("period and burst are clamped to non-zero")
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: &LimiterConfig) {
    cfg.service(
        web::scope(&config.api_prefix).service(
            web::scope("/leave")
                .wrap(Governor::new(limiter))
                // /leave/policies
                .service(web::resource("/policies").route(web::get().to(leave::list_policies)))
                // /leave/days
                .service(web::resource("/days").route(web::post().to(leave::compute_days)))
                // /leave/balance
                .service(web::resource("/balance").route(web::post().to(leave::balance)))
                // /leave/balances
                .service(web::resource("/balances").route(web::post().to(leave::balances)))
                // /leave/evaluate
                .service(web::resource("/evaluate").route(web::post().to(leave::evaluate))),
        ),
    );
}
