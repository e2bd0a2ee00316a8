//! Transaction Models
//!
//! Data structures matching the backend's `/transaction` resource.

use serde::{Deserialize, Deserializer, Serialize};

/// Transaction record (matches backend row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    /// Kept as text; the database may hand it back as a number or a decimal string.
    #[serde(default, deserialize_with = "scalar_text")]
    pub amount: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `GET /transaction`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListResponse {
    pub result: Vec<Record>,
}

/// Body of `POST /transaction`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub amount: String,
    pub desc: String,
}

impl From<&DraftInput> for NewTransaction {
    fn from(draft: &DraftInput) -> Self {
        Self {
            amount: draft.amount.clone(),
            desc: draft.description.clone(),
        }
    }
}

/// Body returned by the write endpoints; only ever logged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Unsubmitted amount/description pair typed into the input row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftInput {
    pub amount: String,
    pub description: String,
}

/// Which draft field an input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Amount,
    Description,
}

impl DraftInput {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Amount => self.amount = value,
            DraftField::Description => self.description = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Amount => &self.amount,
            DraftField::Description => &self.description,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_empty() && self.description.is_empty()
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Int(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_amount_accepts_number_and_string() {
        let body = r#"{"result":[
            {"id":1,"amount":100,"description":"Transaction 1","created_at":"2024-01-01"},
            {"id":2,"amount":"200.50","description":"Transaction 2","created_at":"2024-01-02"}
        ]}"#;
        let parsed: ListResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.result.len(), 2);
        assert_eq!(parsed.result[0].amount, "100");
        assert_eq!(parsed.result[1].amount, "200.50");
        assert_eq!(parsed.result[1].created_at.as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn test_record_tolerates_null_description() {
        let parsed: Record =
            serde_json::from_str(r#"{"id":7,"amount":1.5,"description":null}"#).unwrap();
        assert_eq!(parsed.amount, "1.5");
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.created_at, None);
    }

    #[test]
    fn test_row_without_amount_keeps_rest_of_list() {
        let body = r#"{"result":[
            {"id":1,"amount":"5","description":"has amount","created_at":"2024-01-01"},
            {"id":2,"description":"no amount"}
        ]}"#;
        let parsed: ListResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.result.len(), 2);
        assert_eq!(parsed.result[0].amount, "5");
        assert_eq!(parsed.result[1].amount, "");
        assert_eq!(parsed.result[1].description, "no amount");
    }

    #[test]
    fn test_new_transaction_uses_desc_key() {
        let draft = DraftInput {
            amount: "150".to_string(),
            description: "New Transaction".to_string(),
        };
        let json = serde_json::to_string(&NewTransaction::from(&draft)).unwrap();
        assert_eq!(json, r#"{"amount":"150","desc":"New Transaction"}"#);
    }

    #[test]
    fn test_draft_set_touches_one_field() {
        let mut draft = DraftInput {
            amount: "1".to_string(),
            description: "keep".to_string(),
        };
        draft.set(DraftField::Amount, "500".to_string());
        assert_eq!(draft.get(DraftField::Amount), "500");
        assert_eq!(draft.get(DraftField::Description), "keep");
        assert!(!draft.is_empty());
        assert!(DraftInput::default().is_empty());
    }
}
