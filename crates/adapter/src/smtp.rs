use anyhow::Context;
use async_trait::async_trait;
use domain::{Mailer, OutgoingMail};
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    /// Empty host puts the mailer in log-only mode.
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub starttls: bool,
}

/// SMTP transport, or a no-op that only logs when no relay is configured.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        if config.host.trim().is_empty() {
            warn!("SMTP host not configured; outgoing mail will only be logged");
            return Ok(Self { transport: None });
        }

        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        }
        .with_context(|| format!("Failed to configure SMTP relay {}", config.host))?
        .port(config.port);

        let builder = match (&config.username, &config.password) {
            (Some(user), Some(pass)) => builder.credentials(Credentials::new(user.clone(), pass.clone())),
            _ => builder,
        };

        info!(host = %config.host, port = config.port, "SMTP transport configured");
        Ok(Self {
            transport: Some(Arc::new(builder.build())),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }
}

fn build_message(mail: &OutgoingMail) -> anyhow::Result<Message> {
    let from: Mailbox = mail
        .from
        .parse()
        .with_context(|| format!("Invalid sender address: {}", mail.from))?;

    let mut builder = Message::builder().from(from).subject(mail.subject.as_str());
    for to in &mail.to {
        let mailbox: Mailbox = to
            .parse()
            .with_context(|| format!("Invalid recipient address: {}", to))?;
        builder = builder.to(mailbox);
    }

    builder
        .header(header::ContentType::TEXT_PLAIN)
        .body(mail.body.clone())
        .context("Failed to build email message")
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> anyhow::Result<()> {
        let message = build_message(&mail)?;

        match &self.transport {
            Some(transport) => {
                transport.send(message).await.context("Failed to send email")?;
                info!(subject = %mail.subject, recipients = mail.to.len(), "email sent");
            }
            None => {
                info!(
                    subject = %mail.subject,
                    from = %mail.from,
                    to = ?mail.to,
                    "mail transport disabled; skipping send"
                );
            }
        }
        Ok(())
    }
}
