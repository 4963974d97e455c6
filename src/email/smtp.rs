use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::{Mailer, OutgoingEmail};
use crate::config::SmtpConfig;

// ── Session encryption ────────────────────────────────

/// Encryption mode of the SMTP session, derived from the configured port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS from the first byte (classic SMTPS).
    Implicit,
    /// Plain connection upgraded via STARTTLS.
    StartTls,
}

impl TlsMode {
    /// Port 465 is the implicit-TLS submission port; every other port
    /// (587 included) negotiates STARTTLS.
    pub fn for_port(port: u16) -> Self {
        if port == 465 {
            TlsMode::Implicit
        } else {
            TlsMode::StartTls
        }
    }
}

// ── Transport ─────────────────────────────────────────

/// SMTP transport over lettre. A session is built per delivery; the
/// relay sends too rarely to keep a pooled connection warm.
pub struct SmtpMailer {
    cfg: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(cfg: SmtpConfig) -> Self {
        SmtpMailer { cfg }
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        if self.cfg.host.is_empty() {
            return Err("SMTP host not configured".into());
        }

        let from: Mailbox = email
            .from
            .parse()
            .map_err(|e| format!("Invalid from address: {}", e))?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| format!("Invalid to address: {}", e))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(&email.subject)
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))
            .map_err(|e| format!("Failed to build email: {}", e))?;

        let creds = Credentials::new(self.cfg.username.clone(), self.cfg.password.clone());

        let builder = match TlsMode::for_port(self.cfg.port) {
            TlsMode::Implicit => SmtpTransport::relay(&self.cfg.host),
            TlsMode::StartTls => SmtpTransport::starttls_relay(&self.cfg.host),
        };

        let mailer = builder
            .map_err(|e| format!("SMTP relay error: {}", e))?
            .port(self.cfg.port)
            .credentials(creds)
            .build();

        mailer
            .send(&message)
            .map_err(|e| format!("SMTP send error: {}", e))?;
        Ok(())
    }
}
