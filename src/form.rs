use serde::Deserialize;

use crate::contact::ContactRequest;

// ── Submission status ─────────────────────────────────

/// Submission status of the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    /// Delivered — or accepted with an advisory when the server could
    /// not actually send. `notice` carries the server's message so the
    /// degraded case stays distinguishable from a real delivery.
    Success { notice: Option<String> },
    Error,
}

/// Named form fields. Each edit touches exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Company,
    Email,
    Phone,
    Request,
}

// ── Relay client seam ─────────────────────────────────

/// Wire reply from the relay endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayReply {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// One submission call against the relay. `Err` means the request never
/// completed (network failure); a reply the server rejected still comes
/// back as `Ok` with a non-ok status.
pub trait ContactApi: Send + Sync {
    fn submit(&self, req: &ContactRequest) -> Result<RelayReply, String>;
}

/// Production client for POST /api/contact.
pub struct HttpContactApi {
    base_url: String,
}

impl HttpContactApi {
    pub fn new(base_url: &str) -> Self {
        HttpContactApi {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl ContactApi for HttpContactApi {
    fn submit(&self, req: &ContactRequest) -> Result<RelayReply, String> {
        let client = reqwest::blocking::Client::new();
        let resp = client
            .post(format!("{}/api/contact", self.base_url))
            .json(req)
            .send()
            .map_err(|e| format!("Contact request failed: {}", e))?;

        if !resp.status().is_success() {
            return Ok(RelayReply {
                status: "error".into(),
                message: None,
            });
        }

        resp.json()
            .map_err(|e| format!("Contact reply parse error: {}", e))
    }
}

// ── Controller ────────────────────────────────────────

/// State machine behind the contact form: five fields plus one status.
///
/// Exactly one relay call per submit that passes the guard; errors keep
/// the fields so the visitor never retypes them; only the explicit
/// reset after a success clears them.
pub struct FormController {
    fields: ContactRequest,
    status: FormStatus,
}

impl FormController {
    pub fn new() -> Self {
        FormController {
            fields: ContactRequest::default(),
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn fields(&self) -> &ContactRequest {
        &self.fields
    }

    /// Update exactly one field, leaving the others untouched.
    pub fn set_field(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::FullName => &mut self.fields.full_name,
            Field::Company => &mut self.fields.company,
            Field::Email => &mut self.fields.email,
            Field::Phone => &mut self.fields.phone,
            Field::Request => &mut self.fields.request,
        };
        *slot = value.to_string();
    }

    /// All five fields non-empty. This mirrors the form's `required`
    /// attributes and is the only submit guard; no field is checked for
    /// shape beyond that.
    pub fn is_complete(&self) -> bool {
        !self.fields.full_name.is_empty()
            && !self.fields.company.is_empty()
            && !self.fields.email.is_empty()
            && !self.fields.phone.is_empty()
            && !self.fields.request.is_empty()
    }

    /// Submit the current field snapshot. Legal from `Idle` or `Error`
    /// with all fields filled; any other call is a no-op that touches
    /// neither the api nor the status.
    pub fn submit(&mut self, api: &dyn ContactApi) {
        match self.status {
            FormStatus::Idle | FormStatus::Error => {}
            _ => return,
        }
        if !self.is_complete() {
            return;
        }

        self.status = FormStatus::Submitting;

        self.status = match api.submit(&self.fields) {
            Ok(reply) if reply.status == "ok" => FormStatus::Success {
                notice: reply.message,
            },
            Ok(_) | Err(_) => FormStatus::Error,
        };
    }

    /// "Invia un'altra richiesta": clear all fields and return to
    /// `Idle`. Only meaningful from `Success`; a no-op elsewhere so an
    /// error never wipes what the visitor typed.
    pub fn reset(&mut self) {
        if matches!(self.status, FormStatus::Success { .. }) {
            self.fields = ContactRequest::default();
            self.status = FormStatus::Idle;
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
