//! Notification settings.

use serde::Deserialize;

/// `[notify]` section.
///
/// The SMTP password is read from `SMTP_PASSWORD`, never from the file.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// Send email. When false, notifications are only logged.
    #[serde(default)]
    pub email_enabled: bool,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP login; also the sender address when `from` is unset.
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub recipients: Vec<String>,
    /// Populated from the environment at load time.
    #[serde(skip)]
    pub password: Option<String>,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".into()
}

const fn default_smtp_port() -> u16 {
    587
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            email_enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            username: String::new(),
            from: None,
            recipients: Vec::new(),
            password: None,
        }
    }
}

impl NotifyConfig {
    /// Sender address.
    #[must_use]
    pub fn sender(&self) -> &str {
        self.from.as_deref().unwrap_or(&self.username)
    }
}
