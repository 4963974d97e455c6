use serde::{Deserialize, Serialize};

/// One contact submission as posted by the landing page form.
///
/// The relay trusts the shape the client sends: fields absent from the
/// JSON body deserialize to empty strings and are rendered as such in
/// the outgoing email, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub full_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub request: String,
}

impl ContactRequest {
    pub fn subject(&self) -> String {
        format!("Nuova richiesta da {} - Landing per PMI", self.full_name)
    }

    /// Plaintext rendering for the multipart/alternative body.
    pub fn text_body(&self) -> String {
        format!(
            "Nome: {}\n\
             Azienda/P.IVA: {}\n\
             Email: {}\n\
             Telefono: {}\n\
             \n\
             Richiesta:\n\
             {}",
            self.full_name, self.company, self.email, self.phone, self.request
        )
    }

    /// HTML rendering. Line breaks in the free-text request become
    /// `<br>`; no other rewriting is applied to any field.
    pub fn html_body(&self) -> String {
        format!(
            "<h2>Nuova richiesta di contatto</h2>\n\
             <p><strong>Nome:</strong> {}</p>\n\
             <p><strong>Azienda/P.IVA:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Telefono:</strong> {}</p>\n\
             <br>\n\
             <p><strong>Richiesta:</strong></p>\n\
             <p>{}</p>",
            self.full_name,
            self.company,
            self.email,
            self.phone,
            self.request.replace('\n', "<br>"),
        )
    }
}
