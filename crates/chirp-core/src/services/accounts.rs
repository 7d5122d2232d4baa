//! Account service - registration, login, profile editing.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::{PasswordService, UserRepository};

const MAX_USERNAME_LEN: usize = 64;
const MAX_EMAIL_LEN: usize = 120;
const MAX_ABOUT_ME_LEN: usize = 140;
const MIN_PASSWORD_LEN: usize = 8;

/// Registration, authentication, and profile edits over the user store.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { users, passwords }
    }

    /// Register a new account.
    ///
    /// Duplicates are checked before the insert so the caller gets a
    /// field-specific error; the storage unique constraints remain the
    /// backstop against a concurrent registration slipping between the
    /// check and the insert.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        validate_username(username)?;
        validate_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(DomainError::DuplicateUsername(username.to_string()));
        }
        if self.users.find_by_email(email).await?.is_some() {
            return Err(DomainError::DuplicateEmail(email.to_string()));
        }

        let password_hash = self
            .passwords
            .hash(password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let user = User::new(username.to_string(), email.to_string(), password_hash);
        let saved = self.users.insert(user).await?;

        tracing::info!(user_id = %saved.id, username = %saved.username, "user registered");
        Ok(saved)
    }

    /// Authenticate by username and password.
    ///
    /// Unknown usernames and wrong passwords are reported as distinct
    /// errors; the HTTP layer collapses both to 401.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, DomainError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UnknownUsername(username.to_string()))?;

        let valid = self
            .passwords
            .verify(password, &user.password_hash)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if !valid {
            return Err(DomainError::BadCredential);
        }
        Ok(user)
    }

    /// Change username and/or about-me text.
    ///
    /// Username uniqueness is only re-checked when the name actually
    /// changes, so saving the form with the current name is not a conflict.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        username: &str,
        about_me: Option<&str>,
    ) -> Result<User, DomainError> {
        validate_username(username)?;
        if let Some(text) = about_me
            && text.chars().count() > MAX_ABOUT_ME_LEN
        {
            return Err(DomainError::Validation(format!(
                "about_me must be at most {MAX_ABOUT_ME_LEN} characters"
            )));
        }

        let mut user = self.get(user_id).await?;

        if username != user.username && self.users.find_by_username(username).await?.is_some() {
            return Err(DomainError::DuplicateUsername(username.to_string()));
        }

        user.username = username.to_string();
        user.about_me = about_me.map(str::to_string);
        user.updated_at = Utc::now();

        Ok(self.users.update(user).await?)
    }

    /// Record that the user is active right now.
    pub async fn touch_last_seen(&self, user_id: Uuid) -> Result<(), DomainError> {
        self.users.touch_last_seen(user_id, Utc::now()).await?;
        Ok(())
    }

    pub async fn get(&self, user_id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "user",
                id: user_id,
            })
    }

    pub async fn get_by_username(&self, username: &str) -> Result<User, DomainError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UnknownUsername(username.to_string()))
    }
}

fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.is_empty() {
        return Err(DomainError::Validation("username must not be empty".into()));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(DomainError::Validation(format!(
            "username must be at most {MAX_USERNAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    if !email.contains('@') || email.chars().count() > MAX_EMAIL_LEN {
        return Err(DomainError::Validation("invalid email address".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryUsers, PlainPasswords};

    fn service() -> AccountService {
        AccountService::new(Arc::new(InMemoryUsers::default()), Arc::new(PlainPasswords))
    }

    #[tokio::test]
    async fn register_hashes_password_and_persists() {
        let svc = service();
        let user = svc
            .register("susan", "susan@example.com", "correct horse")
            .await
            .unwrap();

        assert_eq!(user.username, "susan");
        assert_ne!(user.password_hash, "correct horse");

        let back = svc.authenticate("susan", "correct horse").await.unwrap();
        assert_eq!(back.id, user.id);
    }

    #[tokio::test]
    async fn duplicate_username_is_field_specific() {
        let svc = service();
        svc.register("susan", "susan@example.com", "password1")
            .await
            .unwrap();

        let err = svc
            .register("susan", "other@example.com", "password1")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateUsername(_)));
    }

    #[tokio::test]
    async fn duplicate_email_is_field_specific() {
        let svc = service();
        svc.register("susan", "susan@example.com", "password1")
            .await
            .unwrap();

        let err = svc
            .register("john", "susan@example.com", "password1")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_distinct() {
        let svc = service();
        svc.register("susan", "susan@example.com", "password1")
            .await
            .unwrap();

        let err = svc.authenticate("susan", "nope nope").await.unwrap_err();
        assert!(matches!(err, DomainError::BadCredential));

        let err = svc.authenticate("nobody", "password1").await.unwrap_err();
        assert!(matches!(err, DomainError::UnknownUsername(_)));
    }

    #[tokio::test]
    async fn short_password_rejected() {
        let svc = service();
        let err = svc
            .register("susan", "susan@example.com", "short")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn profile_edit_keeps_own_username() {
        let svc = service();
        let user = svc
            .register("susan", "susan@example.com", "password1")
            .await
            .unwrap();

        // Re-saving the same username must not count as a duplicate.
        let updated = svc
            .update_profile(user.id, "susan", Some("hello"))
            .await
            .unwrap();
        assert_eq!(updated.about_me.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn profile_edit_rejects_taken_username() {
        let svc = service();
        svc.register("susan", "susan@example.com", "password1")
            .await
            .unwrap();
        let john = svc
            .register("john", "john@example.com", "password1")
            .await
            .unwrap();

        let err = svc
            .update_profile(john.id, "susan", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateUsername(_)));
    }
}
