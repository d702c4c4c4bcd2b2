use serde::{Deserialize, Serialize};

/// Label shown when nobody is signed in or the user has no display name.
pub const FALLBACK_USER_LABEL: &str = "User";

/// Identity of the signed-in user, as handed out by the auth provider.
///
/// The dashboard only reads this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CurrentUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CurrentUser {
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            email: None,
        }
    }

    /// Display name, or [`FALLBACK_USER_LABEL`] when it is missing or blank.
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => FALLBACK_USER_LABEL,
        }
    }
}

/// Label for an optional user; `"User"` when signed out.
pub fn user_label(user: Option<&CurrentUser>) -> String {
    user.map(|u| u.label().to_string())
        .unwrap_or_else(|| FALLBACK_USER_LABEL.to_string())
}
