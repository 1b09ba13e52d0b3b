//! Shared DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON. Every optional field is tolerated as
//! missing so partially populated records still render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `/api/auth/user`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl User {
    /// Full display name, falling back to the email address.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            self.email.clone().unwrap_or_default()
        } else {
            parts.join(" ")
        }
    }
}

/// A person the user keeps track of.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Kind of occasion attached to an important date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateKind {
    Birthday,
    Anniversary,
    Holiday,
    #[default]
    #[serde(other)]
    Other,
}

impl DateKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Birthday => "Birthday",
            Self::Anniversary => "Anniversary",
            Self::Holiday => "Holiday",
            Self::Other => "Occasion",
        }
    }
}

/// A birthday, anniversary, or other recurring occasion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantDate {
    pub id: i64,
    pub title: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    #[serde(default, rename = "type")]
    pub kind: DateKind,
    #[serde(default)]
    pub contact_id: Option<i64>,
    #[serde(default)]
    pub contact_name: Option<String>,
}

/// Something the user would like to receive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

/// Friendship lifecycle as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

/// Another user connected to the current one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: i64,
    #[serde(default)]
    pub status: FriendStatus,
    pub friend: User,
}

/// A gift suggestion sourced from a friend's wishlist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: i64,
    pub item_name: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub for_user: Option<User>,
    #[serde(default)]
    pub url: Option<String>,
}
