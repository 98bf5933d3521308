//! User and role resolution
//!
//! `RoleService` is the contract access decisions rely on: it maps a
//! username to its role names. `MemoryUserStore` implements it and also
//! authenticates users against Argon2id password hashes stored as PHC
//! strings.

use std::collections::{BTreeSet, HashMap};

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use tracing::debug;

use crate::error::{SecurityError, SecurityResult};
use crate::principal::Principal;

/// Resolves the roles of a user.
pub trait RoleService {
    /// Roles held by `username`. Unknown users hold no roles.
    fn roles_of(&self, username: &str) -> BTreeSet<String>;
}

#[derive(Debug, Clone)]
struct UserRecord {
    /// PHC-formatted Argon2id hash.
    password_hash: String,
    roles: BTreeSet<String>,
}

/// In-memory user store.
///
/// # Example
///
/// ```
/// use geo_security::{MemoryUserStore, RoleService, SecurityError};
///
/// let mut users = MemoryUserStore::new();
/// users.add_user("cite", "cite", ["ROLE_CITE_ADMIN"]).unwrap();
///
/// let principal = users.authenticate("cite", "cite").unwrap();
/// assert!(principal.has_role("ROLE_CITE_ADMIN"));
/// assert!(matches!(
///     users.authenticate("cite", "wrong"),
///     Err(SecurityError::InvalidCredentials)
/// ));
/// assert!(users.roles_of("nobody").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: HashMap<String, UserRecord>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user.
    ///
    /// # Errors
    ///
    /// * `DuplicateUser` if the username is taken
    /// * `PasswordHash` if the password cannot be hashed
    pub fn add_user<I, S>(&mut self, username: &str, password: &str, roles: I) -> SecurityResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.users.contains_key(username) {
            return Err(SecurityError::DuplicateUser(username.to_string()));
        }

        let record = UserRecord {
            password_hash: hash_password(password)?,
            roles: roles.into_iter().map(Into::into).collect(),
        };

        debug!(username, roles = record.roles.len(), "Added user");
        self.users.insert(username.to_string(), record);
        Ok(())
    }

    /// Remove a user, returning whether it existed.
    pub fn remove_user(&mut self, username: &str) -> bool {
        self.users.remove(username).is_some()
    }

    /// Check credentials and build the principal.
    ///
    /// # Errors
    ///
    /// * `InvalidCredentials` for an unknown user or a wrong password
    /// * `PasswordHash` if the stored hash cannot be parsed
    pub fn authenticate(&self, username: &str, password: &str) -> SecurityResult<Principal> {
        let record = self.users.get(username).ok_or_else(|| {
            debug!(username, "Authentication failed: unknown user");
            SecurityError::InvalidCredentials
        })?;

        if !verify_password(password, &record.password_hash)? {
            debug!(username, "Authentication failed: bad password");
            return Err(SecurityError::InvalidCredentials);
        }

        Ok(Principal::new(username, self.roles_of(username)))
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl RoleService for MemoryUserStore {
    fn roles_of(&self, username: &str) -> BTreeSet<String> {
        self.users
            .get(username)
            .map(|r| r.roles.clone())
            .unwrap_or_default()
    }
}

fn hash_password(password: &str) -> SecurityResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| SecurityError::PasswordHash(format!("failed to hash password: {}", e)))
}

fn verify_password(password: &str, hash: &str) -> SecurityResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| SecurityError::PasswordHash(format!("invalid stored hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(SecurityError::PasswordHash(format!(
            "password verification failed: {}",
            e
        ))),
    }
}
