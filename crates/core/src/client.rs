//! Client directory records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::search::matches_text;
use crate::stage::Stage;
use crate::types::ClientId;
use crate::validation::Schema;

/// A client record as the backend stores it.
///
/// `id` is `None` until the backend has persisted the record and assigned
/// one; before that the record is identified by a client-generated
/// temporary key (see [`temp_key`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ClientId>,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub status: Stage,
}

/// A client payload without the backend-assigned id, used for create and
/// update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub status: Stage,
}

impl NewClient {
    /// Validate the client form before submission.
    ///
    /// Mirrors the original modal form rules: every field required, email
    /// must be well-formed.
    pub fn validate(&self) -> Result<(), CoreError> {
        let errors = client_schema().check(&[
            ("name", &self.name),
            ("contact", &self.contact),
            ("email", &self.email),
        ]);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors))
        }
    }

    /// Promote to a full [`Client`] with the backend-assigned id.
    pub fn with_id(self, id: ClientId) -> Client {
        Client {
            id: Some(id),
            name: self.name,
            contact: self.contact,
            email: self.email,
            status: self.status,
        }
    }
}

impl Client {
    /// Whether this client matches a free-text query against name or id.
    pub fn matches(&self, query: &str) -> bool {
        let id = self.id.map(|id| id.to_string()).unwrap_or_default();
        matches_text(query, &[self.name.as_str(), id.as_str()])
    }
}

/// Generate a temporary identity key for a record the backend has not
/// persisted yet.
pub fn temp_key() -> String {
    Uuid::new_v4().to_string()
}

fn client_schema() -> Schema {
    Schema::new()
        .required("name", "Por favor, insira o nome!")
        .required("contact", "Por favor, insira o contato!")
        .required("email", "Por favor, insira o email!")
        .email("email", "Email inválido!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn sample() -> NewClient {
        NewClient {
            name: "Restaurante A".into(),
            contact: "(11) 98765-4321".into(),
            email: "contato@restaurantea.com".into(),
            status: Stage::Collection,
        }
    }

    #[test]
    fn complete_form_validates() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn blank_contact_blocks_submission() {
        let mut form = sample();
        form.contact = String::new();
        let err = form.validate().unwrap_err();
        assert_matches!(err, CoreError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "contact");
        });
    }

    #[test]
    fn malformed_email_blocks_submission() {
        let mut form = sample();
        form.email = "contato.restaurantea.com".into();
        assert_matches!(form.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn wire_format_matches_backend_contract() {
        let client = sample().with_id(7);
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "coleta");

        // Unsaved payloads must not serialize a null id.
        let body = serde_json::to_value(sample()).unwrap();
        assert!(body.get("id").is_none());
    }

    #[test]
    fn search_matches_name_or_numeric_id() {
        let client = sample().with_id(42);
        assert!(client.matches("restaurante"));
        assert!(client.matches("42"));
        assert!(!client.matches("pizzaria"));
    }
}
