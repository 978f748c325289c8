use serde::{Deserialize, Serialize};

/// Claims handed over by whatever authenticated the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IdentityClaims {
    #[serde(rename = "sub")]
    pub subject: String,
    pub preferred_username: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

/// Author of a review
///
/// Only `id` takes part in equality; display attributes may drift between
/// sessions without making the same person look like a different author.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            given_name: None,
            family_name: None,
        }
    }

    pub fn from_claims(claims: IdentityClaims) -> Self {
        Self {
            id: claims.subject,
            username: claims.preferred_username,
            given_name: claims.given_name,
            family_name: claims.family_name,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_name(mut self, given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        self.given_name = Some(given_name.into());
        self.family_name = Some(family_name.into());
        self
    }

    pub fn display_name(&self) -> String {
        match (&self.given_name, &self.family_name) {
            (Some(given), Some(family)) => format!("{} {}", given, family),
            (Some(given), None) => given.clone(),
            (None, Some(family)) => family.clone(),
            (None, None) => self.username.clone().unwrap_or_else(|| self.id.clone()),
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_uses_identity_only() {
        let a = User::new("user-1").with_username("ana");
        let b = User::new("user-1").with_name("Ana", "Lopez");
        let c = User::new("user-2").with_username("ana");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn builds_from_claims() {
        let user = User::from_claims(IdentityClaims {
            subject: "5f1c".to_string(),
            preferred_username: Some("ana".to_string()),
            given_name: Some("Ana".to_string()),
            family_name: None,
        });

        assert_eq!(user.id, "5f1c");
        assert_eq!(user.username.as_deref(), Some("ana"));
        assert_eq!(user.display_name(), "Ana");
    }

    #[test]
    fn display_name_falls_back_to_username_then_id() {
        assert_eq!(User::new("u-9").with_username("kim").display_name(), "kim");
        assert_eq!(User::new("u-9").display_name(), "u-9");
    }
}
