//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::application::format_cents;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::{Config, API_KEY_ENV, SMTP_PASSWORD_ENV};

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Set {SMTP_PASSWORD_ENV} (and optionally {API_KEY_ENV}) in the environment or .env"
    ));
    output::note(&format!("3. Run: floatscout config validate -c {}", path.display()));
    output::note(&format!("4. Run: floatscout run -c {}", path.display()));
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    output::section("Configuration");
    output::success("Configuration is valid");
    output::field("Path", path.display());
    output::field(
        "Price band",
        format!(
            "{} - {}",
            format_cents(config.filter.min_price),
            format_cents(config.filter.max_price)
        ),
    );
    output::field("Min discount", format!("{}%", config.filter.min_discount));
    output::field("Email", config.notify.email_enabled);
    if config.api_key.is_none() {
        output::warning(&format!("{API_KEY_ENV} is not set; requests are anonymous"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_with_email_disabled() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(!config.notify.email_enabled);
        assert_eq!(config.filter.min_discount, 24.0);
    }
}
