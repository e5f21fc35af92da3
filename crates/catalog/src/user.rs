use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use categorydesk_core::UserId;

/// Profile of an authenticated dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert-or-replace payload coming from the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUser {
    pub id: Option<UserId>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl UpsertUser {
    /// Build the stored profile. A missing id is generated; `updated_at`
    /// is always `now`.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: self.id.unwrap_or_default(),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            profile_image_url: self.profile_image_url,
            created_at: self.created_at.unwrap_or(now),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn missing_id_and_created_at_are_filled_in() {
        let now = Utc::now();
        let user = UpsertUser {
            email: Some("ops@example.com".into()),
            ..Default::default()
        }
        .into_user(now);

        assert_eq!(user.created_at, now);
        assert_eq!(user.updated_at, now);
        assert_eq!(user.email.as_deref(), Some("ops@example.com"));
    }

    #[test]
    fn supplied_created_at_is_kept() {
        let now = Utc::now();
        let earlier = now - Duration::days(3);
        let id = UserId::new();
        let user = UpsertUser {
            id: Some(id),
            created_at: Some(earlier),
            ..Default::default()
        }
        .into_user(now);

        assert_eq!(user.id, id);
        assert_eq!(user.created_at, earlier);
        assert_eq!(user.updated_at, now);
    }
}
