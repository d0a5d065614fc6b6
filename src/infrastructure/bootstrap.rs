//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::clock::SystemClock;
use crate::adapter::outbound::csfloat::{CsfloatClient, CsfloatConfig};
use crate::adapter::outbound::notifier::log::LogNotifier;
use crate::application::{Links, Pipeline, Scheduler};
use crate::error::Result;
use crate::infrastructure::config::notify::NotifyConfig;
use crate::infrastructure::config::settings::Config;
use crate::port::{Clock, ListingFeed, Notifier, NotifierRegistry};

/// Build the notifier registry from `[notify]`.
///
/// Email is registered when enabled; otherwise notifications are only
/// logged.
#[allow(clippy::result_large_err)]
pub fn build_notifier(config: &NotifyConfig) -> Result<Arc<dyn Notifier>> {
    let mut registry = NotifierRegistry::new();

    if config.email_enabled {
        register_email(&mut registry, config)?;
    } else {
        info!("Email disabled, notifications will be logged");
        registry.register(Box::new(LogNotifier));
    }

    Ok(Arc::new(registry))
}

#[cfg(feature = "email")]
#[allow(clippy::result_large_err)]
fn register_email(registry: &mut NotifierRegistry, config: &NotifyConfig) -> Result<()> {
    use crate::adapter::outbound::notifier::email::{EmailNotifier, EmailSettings};

    let settings = EmailSettings {
        smtp_host: config.smtp_host.clone(),
        smtp_port: config.smtp_port,
        username: config.username.clone(),
        password: config.password.clone().unwrap_or_default(),
        from: config.sender().to_string(),
        recipients: config.recipients.clone(),
    };
    registry.register(Box::new(EmailNotifier::new(settings)?));
    info!(
        recipients = config.recipients.len(),
        host = %config.smtp_host,
        "Email notifier enabled"
    );
    Ok(())
}

#[cfg(not(feature = "email"))]
#[allow(clippy::result_large_err)]
fn register_email(registry: &mut NotifierRegistry, _config: &NotifyConfig) -> Result<()> {
    tracing::warn!("Email enabled but built without the `email` feature, logging instead");
    registry.register(Box::new(LogNotifier));
    Ok(())
}

/// Notification link prefixes from `[feed]`.
#[must_use]
pub fn links(config: &CsfloatConfig) -> Links {
    Links {
        item_url: config.item_url.clone(),
        search_url: config.search_url.clone(),
        price_lookup_url: config.price_lookup_url.clone(),
    }
}

/// Wire a pipeline over the live feed.
#[allow(clippy::result_large_err)]
pub fn build_pipeline(config: &Config, clock: Arc<dyn Clock>) -> Result<Pipeline> {
    let feed: Arc<dyn ListingFeed> =
        Arc::new(CsfloatClient::from_config(&config.feed, config.api_key.clone())?);
    let notifier = build_notifier(&config.notify)?;

    Ok(Pipeline::new(
        feed,
        notifier,
        clock,
        config.filter.clone(),
        links(&config.feed),
        config.schedule.pipeline_settings(),
    ))
}

/// Wire the scheduler on the system clock.
#[allow(clippy::result_large_err)]
pub fn build_scheduler(config: &Config) -> Result<Scheduler> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let pipeline = build_pipeline(config, clock.clone())?;
    Ok(Scheduler::new(
        pipeline,
        clock,
        config.schedule.schedule_settings(),
    ))
}
