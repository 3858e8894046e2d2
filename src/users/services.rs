use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use super::{
    dto::{AuthOutput, DeleteUserInput, LoginInput, MessageOutput, SignupInput},
    repo::{InsertOutcome, UserStore},
    repo_types::{Role, User},
    validate::{normalize_email, require_string},
};
use crate::{
    auth::{IdGenerator, PasswordHasher, TokenPayload, TokenService},
    config::AdminSeed,
    error::AppError,
};

/// Signup, login and account deletion over injected collaborators.
///
/// Every operation runs its rules in a fixed order and stops at the first one
/// that fails: type checks, then existence checks, then authorization.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
    ids: Arc<dyn IdGenerator>,
    tokens: Arc<dyn TokenService>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn UserStore>,
        ids: Arc<dyn IdGenerator>,
        tokens: Arc<dyn TokenService>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            store,
            ids,
            tokens,
            hasher,
        }
    }

    #[instrument(skip_all)]
    pub async fn signup(&self, input: SignupInput) -> Result<AuthOutput, AppError> {
        let name = require_string(&input.name, "name")?;
        let email = normalize_email(&require_string(&input.email, "email")?);
        let password = require_string(&input.password, "password")?;

        if self.store.find_by_email(&email).await?.is_some() {
            warn!(email = %email, "email already registered");
            return Err(AppError::validation("'email' já está cadastrado"));
        }

        let user = User {
            id: self.ids.generate(),
            name,
            email,
            password_hash: self.hasher.hash(&password)?,
            role: Role::Normal,
            created_at: OffsetDateTime::now_utc(),
        };
        if self.store.insert(&user).await? == InsertOutcome::DuplicateEmail {
            // lost a race with a concurrent signup for the same email
            warn!(email = %user.email, "email registered concurrently");
            return Err(AppError::validation("'email' já está cadastrado"));
        }

        let token = self.issue_token(&user)?;
        info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(AuthOutput {
            message: "success".into(),
            token,
        })
    }

    #[instrument(skip_all)]
    pub async fn login(&self, input: LoginInput) -> Result<AuthOutput, AppError> {
        let email = normalize_email(&require_string(&input.email, "email")?);
        let password = require_string(&input.password, "password")?;

        let Some(user) = self.store.find_by_email(&email).await? else {
            warn!(email = %email, "login unknown email");
            return Err(AppError::not_found("'email' não encontrado"));
        };

        if !self.hasher.compare(&password, &user.password_hash)? {
            warn!(user_id = %user.id, "login invalid password");
            return Err(AppError::validation("'password' incorreto"));
        }

        let token = self.issue_token(&user)?;
        info!(user_id = %user.id, role = %user.role, "user logged in");
        Ok(AuthOutput {
            message: "success".into(),
            token,
        })
    }

    #[instrument(skip_all, fields(id_to_delete = %input.id_to_delete))]
    pub async fn delete_user(&self, input: DeleteUserInput) -> Result<MessageOutput, AppError> {
        let caller = self.tokens.verify(&input.token)?;

        if self.store.find_by_id(&input.id_to_delete).await?.is_none() {
            return Err(AppError::not_found("'id' não encontrado"));
        }

        if caller.user_id != input.id_to_delete {
            warn!(caller = %caller.user_id, "delete of foreign account refused");
            return Err(AppError::validation(
                "somente quem criou a conta pode deletá-la",
            ));
        }

        self.store.delete(&input.id_to_delete).await?;
        info!(user_id = %input.id_to_delete, "user deleted");
        Ok(MessageOutput {
            message: "deletion success".into(),
        })
    }

    /// Creates the configured admin account unless its email is already taken.
    /// Returns whether an account was created.
    pub async fn seed_admin(&self, seed: &AdminSeed) -> anyhow::Result<bool> {
        let email = normalize_email(&seed.email);
        if self.store.find_by_email(&email).await?.is_some() {
            info!(email = %email, "admin account already present");
            return Ok(false);
        }

        let user = User {
            id: self.ids.generate(),
            name: seed.name.clone(),
            email,
            password_hash: self.hasher.hash(&seed.password)?,
            role: Role::Admin,
            created_at: OffsetDateTime::now_utc(),
        };
        if self.store.insert(&user).await? == InsertOutcome::DuplicateEmail {
            info!(email = %user.email, "admin account already present");
            return Ok(false);
        }
        info!(user_id = %user.id, email = %user.email, "admin account created");
        Ok(true)
    }

    fn issue_token(&self, user: &User) -> anyhow::Result<String> {
        self.tokens.sign(&TokenPayload {
            user_id: user.id.clone(),
            role: user.role,
        })
    }
}
