use crate::config::AppConfig;
use crate::contact::ContactRequest;
use crate::email::{Mailer, OutgoingEmail};

/// What happened to one contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Delivered to the operator mailbox.
    Sent,
    /// Accepted without delivery: transport credentials are missing.
    NotConfigured,
    /// Delivery was attempted and the transport failed.
    Failed(String),
}

/// Relay one submission to the operator mailbox.
///
/// Missing credentials short-circuit before the mailer is touched:
/// a submission is never failed because delivery is unconfigured.
/// Every call that reaches the mailer makes exactly one attempt; a
/// duplicate submission produces a duplicate email.
pub fn deliver(cfg: &AppConfig, mailer: &dyn Mailer, req: &ContactRequest) -> RelayOutcome {
    log::info!(
        "Received contact request from {} <{}>",
        req.full_name,
        req.email
    );

    if !cfg.smtp.credentials_present() {
        log::warn!("SMTP not configured. Email NOT sent to {}", cfg.contact_email);
        return RelayOutcome::NotConfigured;
    }

    let email = OutgoingEmail {
        from: format!("\"Landing per PMI\" <{}>", cfg.smtp.username),
        to: cfg.contact_email.clone(),
        subject: req.subject(),
        text: req.text_body(),
        html: req.html_body(),
    };

    match mailer.send(&email) {
        Ok(()) => {
            log::info!("Email sent successfully to {}", cfg.contact_email);
            RelayOutcome::Sent
        }
        Err(e) => {
            log::error!("Error sending email: {}", e);
            RelayOutcome::Failed(e)
        }
    }
}
