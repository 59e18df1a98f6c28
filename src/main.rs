//! Timetable Scraper HTTP server.

use std::sync::Arc;

use axum::Router;
use tracing_subscriber::EnvFilter;

use timetable_scraper::adapters::http::{
    health_router, schedule_router, with_http_layers, PortalCookieState, ScheduleAppState,
};
use timetable_scraper::adapters::markup::HtmlTimetableParser;
use timetable_scraper::adapters::portal::{ReqwestPortal, ReqwestPortalConfig};
use timetable_scraper::application::{GetScheduleHandler, ScheduleSettings};
use timetable_scraper::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    init_tracing(&config);

    let portal = ReqwestPortal::new(
        ReqwestPortalConfig::new()
            .with_cookie_name(config.portal.cookie_name.clone())
            .with_user_agent(config.portal.user_agent.clone())
            .with_login_marker(config.portal.login_marker.clone())
            .with_timeout(config.portal.fetch_timeout()),
    )?;

    let handler = GetScheduleHandler::new(
        Arc::new(portal),
        Arc::new(HtmlTimetableParser::new()),
        ScheduleSettings::new(config.portal.schedule_url.clone())
            .with_session_timeout(config.portal.session_timeout()),
    );

    let routes = Router::new()
        .merge(health_router())
        .merge(schedule_router(
            ScheduleAppState::new(Arc::new(handler)),
            PortalCookieState::new(config.portal.cookie_name.clone()),
        ));
    let app = with_http_layers(routes, &config.server.http_layers());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, portal = %config.portal.schedule_url, "Timetable scraper listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
