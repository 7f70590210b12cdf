use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Cost used when none is configured
pub const DEFAULT_HASH_COST: u32 = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password must be at least 6 characters long")]
    ShortPassword,
    #[error("Password cannot be empty")]
    EmptyPassword,
    #[error("An account with this email already exists")]
    DuplicateEmail,
}

/// Why a login was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("No account found with this email. Please sign up.")]
    NotFound,
    #[error("Invalid password. Please try again.")]
    InvalidPassword,
}

pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        Err(AccountError::EmptyName.to_string())
    } else {
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(AccountError::InvalidEmail.to_string())
    }
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(AccountError::ShortPassword.to_string())
    }
}

/// Login only needs something typed; the stored hash decides the rest
pub fn validate_password_present(password: &str) -> Result<(), String> {
    if password.is_empty() {
        Err(AccountError::EmptyPassword.to_string())
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    pub name: String,
    pub email: String,
    password_hash: String,
}

/// In-memory accounts keyed by email; gone when the process exits
#[derive(Debug)]
pub struct AccountStore {
    accounts: HashMap<String, Account>,
    cost: u32,
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::with_cost(DEFAULT_HASH_COST)
    }
}

impl AccountStore {
    pub fn with_cost(cost: u32) -> Self {
        Self {
            accounts: HashMap::new(),
            cost,
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn register(&mut self, name: &str, email: &str, password: &str) -> crate::Result<&Account> {
        validate_name(name).map_err(|_| AccountError::EmptyName)?;
        validate_email(email).map_err(|_| AccountError::InvalidEmail)?;
        validate_password(password).map_err(|_| AccountError::ShortPassword)?;

        let email = email.trim().to_string();
        if self.accounts.contains_key(&email) {
            warn!(%email, "duplicate registration refused");
            return Err(AccountError::DuplicateEmail.into());
        }

        let password_hash = bcrypt::hash(password, self.cost)?;
        info!(%email, "account registered");
        let account = Account {
            name: name.trim().to_string(),
            email: email.clone(),
            password_hash,
        };
        Ok(self.accounts.entry(email).or_insert(account))
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<&Account, AuthError> {
        let Some(account) = self.accounts.get(email.trim()) else {
            info!(email = email.trim(), "login for unknown email");
            return Err(AuthError::NotFound);
        };

        // a corrupt hash can only mean the password does not match it
        if bcrypt::verify(password, &account.password_hash).unwrap_or(false) {
            info!(email = %account.email, "login succeeded");
            Ok(account)
        } else {
            info!(email = %account.email, "login refused: bad password");
            Err(AuthError::InvalidPassword)
        }
    }
}
