use uuid::Uuid;

use super::timestamp_now;

/// Public-facing profile details. Every `User` owns exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub school: String,
    pub major: String,
    pub total_upvotes: i64,
    pub resume_url: String,
}

/// An account on the interview prep site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// Opaque timestamp string, stored as given.
    pub created_at: String,
    pub last_login: String,
    pub is_admin: bool,
    pub is_contributor: bool,
    pub profile: Profile,
}

impl User {
    /// Build a user from known values. The profile starts empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        created_at: impl Into<String>,
        last_login: impl Into<String>,
        is_admin: bool,
        is_contributor: bool,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            created_at: created_at.into(),
            last_login: last_login.into(),
            is_admin,
            is_contributor,
            profile: Profile::default(),
        }
    }

    /// Register a brand new user with a generated id, stamped with the current time.
    pub fn create(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        let now = timestamp_now();
        Self::new(
            Uuid::new_v4().to_string(),
            email,
            password_hash,
            first_name,
            last_name,
            now.clone(),
            now,
            false,
            false,
        )
    }

    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    /// Touch the last login timestamp.
    pub fn record_login(&mut self) {
        self.last_login = timestamp_now();
    }
}
