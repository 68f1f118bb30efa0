use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// A stored news record. `(title, date)` is the composite key of the
/// backing table; a put with a colliding pair overwrites the older record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub date: String,
    pub description: String,
}

/// Intermediate between an arbitrary JSON payload and a [`NewsItem`].
/// Callers submit free-form objects; only the three known fields are
/// carried forward, everything else is dropped before the write path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NewsItemDraft {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl NewsItemDraft {
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            title: text_field(payload, "title"),
            date: text_field(payload, "date"),
            description: text_field(payload, "description"),
        }
    }

    pub fn validate(self) -> Result<NewsItem, ValidationError> {
        match (self.title, self.date, self.description) {
            (Some(title), Some(date), Some(description)) => Ok(NewsItem {
                title,
                date,
                description,
            }),
            _ => Err(ValidationError::MissingFields),
        }
    }
}

// A field counts as present only when it is a non-empty JSON string.
fn text_field(payload: &Value, name: &str) -> Option<String> {
    payload
        .get(name)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
