use serde::{Deserialize, Serialize};

/// A user record as returned by the users endpoint.
///
/// Only the displayed fields are kept; anything else in the payload (address,
/// company, ...) is ignored. Text fields are optional so that one incomplete
/// record does not fail the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl User {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            email: Some(email.into()),
            website: Some(website.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }
}
