//! Handler for the `run` command.

use tracing::{info, warn};

use crate::adapter::inbound::cli::command::{FilterOverrides, RunArgs};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::shutdown::select_hook;
use crate::application::format_cents;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_scheduler;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    apply_overrides(&mut config, &args.overrides)?;
    config.init_logging();

    if !output::is_quiet() {
        print_startup_config(&config);
    }

    let hook = select_hook(&config.shutdown, args.exit_scan_hours, args.no_exit_prompt);
    let mut scheduler = build_scheduler(&config)?;
    info!("floatscout starting");
    output::note("Press Ctrl+C to stop.");

    scheduler
        .run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = %err, "Failed to listen for interrupt");
                std::future::pending::<()>().await;
            }
        })
        .await;

    match scheduler.shutdown(hook.as_ref()).await {
        Ok(Some(report)) => {
            output::section("Exit Auction Scan");
            output::field("Checked", report.classified);
            output::field("New deals", report.new_deals);
        }
        Ok(None) => {}
        Err(err) => output::warning(&format!("Exit auction scan failed: {err}")),
    }

    let session = scheduler.context().session;
    output::section("Session");
    output::field("Polls", session.polls());
    output::field("Auction scans", session.auction_scans());
    output::field("Deals", session.deals());
    output::success("Goodbye!");
    Ok(())
}

/// Apply command-line overrides and re-validate.
///
/// # Errors
///
/// Returns a config error if an override leaves the config invalid.
#[allow(clippy::result_large_err)]
pub fn apply_overrides(config: &mut Config, overrides: &FilterOverrides) -> Result<()> {
    if let Some(max_price) = overrides.max_price {
        config.filter.max_price = max_price;
    }
    if let Some(min_price) = overrides.min_price {
        config.filter.min_price = min_price;
    }
    if let Some(min_discount) = overrides.min_discount {
        config.filter.min_discount = min_discount;
    }
    if let Some(level) = &overrides.log_level {
        config.logging.level.clone_from(level);
    }
    if overrides.json_logs || output::is_json() {
        config.logging.format = "json".into();
    }
    config.validate()
}

fn print_startup_config(config: &Config) {
    let filter = &config.filter;
    let schedule = &config.schedule;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field(
        "Price band",
        format!(
            "{} - {}",
            format_cents(filter.min_price),
            format_cents(filter.max_price)
        ),
    );
    output::field("Min discount", format!("{}%", filter.min_discount));
    output::field("Reference", filter.reference_source);
    output::field("Allow-list", filter.allow_list.join(", "));
    output::field("Poll every", format!("{}s", schedule.poll_interval_secs));
    output::field(
        "Auctions",
        format!(
            "every {}m, {}h ahead",
            schedule.auction_interval_mins, schedule.auction_lookahead_hours
        ),
    );
    let notify = if config.notify.email_enabled {
        format!("email to {} recipient(s)", config.notify.recipients.len())
    } else {
        "log only".to_string()
    };
    output::field("Notify", notify);
}
