//! SMTP email notifier.
//!
//! Sends each notification as a plain-text message over STARTTLS, one
//! message per recipient so addresses are not shared. Requires the `email`
//! feature.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{debug, warn};

use crate::error::Result;
use crate::port::{Notification, Notifier};

/// Connection and addressing for [`EmailNotifier`].
#[derive(Debug, Clone)]
pub struct EmailSettings {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    /// From `SMTP_PASSWORD`; never read from the config file.
    pub password: String,
    pub from: String,
    pub recipients: Vec<String>,
}

/// Delivers notifications by email.
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipients: Vec<Mailbox>,
}

impl EmailNotifier {
    /// Build the transport and parse every address up front.
    ///
    /// # Errors
    ///
    /// Returns an error if an address does not parse or the relay host is
    /// rejected.
    pub fn new(settings: EmailSettings) -> Result<Self> {
        let from: Mailbox = settings.from.parse()?;
        let recipients = settings
            .recipients
            .iter()
            .map(|address| address.parse::<Mailbox>())
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)?
            .port(settings.smtp_port)
            .credentials(Credentials::new(settings.username, settings.password))
            .build();

        Ok(Self {
            transport,
            from,
            recipients,
        })
    }

    fn message(&self, notification: &Notification, recipient: &Mailbox) -> Result<Message> {
        Ok(Message::builder()
            .from(self.from.clone())
            .to(recipient.clone())
            .subject(notification.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())?)
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    /// Every recipient is attempted; the first failure is returned.
    async fn send(&self, notification: &Notification) -> Result<()> {
        let mut first_error = None;
        for recipient in &self.recipients {
            let sent = match self.message(notification, recipient) {
                Ok(message) => self.transport.send(message).await.map_err(Into::into),
                Err(err) => Err(err),
            };
            match sent {
                Ok(_) => debug!(to = %recipient, subject = %notification.subject, "Email sent"),
                Err(err) => {
                    warn!(to = %recipient, error = %err, "Email delivery failed");
                    first_error.get_or_insert(err);
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "email"
    }
}
