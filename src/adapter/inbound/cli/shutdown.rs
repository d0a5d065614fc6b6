//! Exit-time prompt.

use std::io::IsTerminal;

use async_trait::async_trait;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::error::{Error, Result};
use crate::infrastructure::config::shutdown::ShutdownConfig;
use crate::port::{FixedShutdown, ShutdownHook};

/// Longest window the prompt accepts, in hours.
const MAX_HOURS: u32 = 336;

/// Asks the operator on the terminal whether to scan auctions before exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptShutdown;

#[async_trait]
impl ShutdownHook for PromptShutdown {
    async fn exit_scan_hours(&self) -> Result<Option<u32>> {
        tokio::task::spawn_blocking(ask)
            .await
            .map_err(|err| Error::Prompt(err.to_string()))?
    }
}

fn ask() -> Result<Option<u32>> {
    let theme = ColorfulTheme::default();
    println!();
    let scan = Confirm::with_theme(&theme)
        .with_prompt("Check upcoming auctions while you are away?")
        .default(false)
        .interact()?;
    if !scan {
        return Ok(None);
    }

    let hours: u32 = Input::with_theme(&theme)
        .with_prompt("How many hours will you be away?")
        .validate_with(|hours: &u32| -> std::result::Result<(), String> {
            if (1..=MAX_HOURS).contains(hours) {
                Ok(())
            } else {
                Err(format!("enter a number from 1 to {MAX_HOURS}"))
            }
        })
        .interact_text()?;
    Ok(Some(hours))
}

/// Pick the shutdown hook for a run.
///
/// Command-line flags win over config. The prompt is only used when stdin
/// is a terminal; headless runs fall back to `shutdown.exit_scan_hours`.
#[must_use]
pub fn select_hook(
    config: &ShutdownConfig,
    exit_scan_hours: Option<u32>,
    no_exit_prompt: bool,
) -> Box<dyn ShutdownHook> {
    if no_exit_prompt {
        return Box::new(FixedShutdown::skip());
    }
    if let Some(hours) = exit_scan_hours {
        return Box::new(FixedShutdown::new(Some(hours)));
    }
    if config.prompt && std::io::stdin().is_terminal() {
        return Box::new(PromptShutdown);
    }
    Box::new(FixedShutdown::new(config.exit_scan_hours))
}
