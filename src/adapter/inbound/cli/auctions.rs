//! Handler for the `auctions` command.

use std::sync::Arc;

use crate::adapter::inbound::cli::command::AuctionsArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::run::apply_overrides;
use crate::adapter::outbound::clock::SystemClock;
use crate::application::PollContext;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_pipeline;
use crate::infrastructure::config::settings::Config;
use crate::port::Clock;

/// Run one auction scan and exit.
pub async fn execute(args: &AuctionsArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    apply_overrides(&mut config, &args.overrides)?;
    config.init_logging();

    let hours = args
        .hours
        .unwrap_or(config.schedule.auction_lookahead_hours);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut pipeline = build_pipeline(&config, clock)?;
    let mut context = PollContext::new();

    let report = pipeline.scan_auctions(&mut context, hours).await?;

    output::section("Auction Scan");
    output::field("Window", format!("{hours}h"));
    if report.throttled {
        output::warning("Feed throttled the scan; try again later");
        return Ok(());
    }
    output::field("Fetched", report.fetched);
    output::field("In window", report.classified);
    output::field("Deals", report.new_deals);
    if report.notified {
        output::success("Notification sent");
    }
    Ok(())
}
