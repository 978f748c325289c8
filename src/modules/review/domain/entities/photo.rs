use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub url: String,
    pub upload_date: DateTime<Utc>,
}

impl Photo {
    /// Attach a caller-supplied photo reference, stamped with the attach time
    pub fn attach(url: impl Into<String>, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            upload_date: uploaded_at,
        }
    }

    pub fn attach_all(photo_ids: &[String], uploaded_at: DateTime<Utc>) -> Vec<Self> {
        photo_ids
            .iter()
            .map(|url| Self::attach(url.clone(), uploaded_at))
            .collect()
    }
}
