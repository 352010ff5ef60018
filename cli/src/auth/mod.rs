//! # Pulse Auth Forms (Mock)
//!
//! File: cli/src/auth/mod.rs
//!
//! ## Overview
//!
//! State and submission handling for the login/signup screen. There is no
//! account store yet, so both submissions end in a redirect to the home page
//! once the input passes the one check that exists: on signup, the password
//! and its confirmation must match.
//!
//! Exactly one of the two views is active at a time; the login view is the
//! default.
//!
use crate::core::error::{PulseError, Result};
use anyhow::anyhow;
use std::collections::HashMap;
use std::fmt;
use tracing::{info, warn};

/// Page every successful submission navigates to.
pub const HOME_ROUTE: &str = "/home";

/// Shown after any successful submission until accounts are backed by storage.
pub const PLACEHOLDER_NOTICE: &str = "database not set up yet btw";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Signup,
}

impl fmt::Display for AuthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuthView::Login => "login",
            AuthView::Signup => "signup",
        })
    }
}

/// Where the form sends the user after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect(pub String);

/// Submitted fields, keyed by input name (`username`, `password`, `confirmPassword`, ...).
pub type FormFields = HashMap<String, String>;

#[derive(Debug, Default)]
pub struct AuthForm {
    view: AuthView,
    signup_warning: bool,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AuthView {
        self.view
    }

    pub fn show_login(&mut self) {
        self.view = AuthView::Login;
    }

    pub fn show_signup(&mut self) {
        self.view = AuthView::Signup;
    }

    /// Whether the "passwords do not match" warning is visible.
    pub fn signup_warning(&self) -> bool {
        self.signup_warning
    }

    pub fn submit_login(&self, fields: &FormFields) -> Result<Redirect> {
        info!("Login submit: {:?}", redact(fields));
        info!("{}", PLACEHOLDER_NOTICE);
        Ok(Redirect(HOME_ROUTE.to_string()))
    }

    pub fn submit_signup(&mut self, fields: &FormFields) -> Result<Redirect> {
        info!("Signup submit: {:?}", redact(fields));
        self.signup_warning = false;

        let password = field(fields, "password");
        let confirm = field(fields, "confirmPassword");
        if password != confirm {
            warn!("Signup rejected: password confirmation does not match.");
            self.signup_warning = true;
            return Err(anyhow!(PulseError::PasswordMismatch));
        }

        info!("{}", PLACEHOLDER_NOTICE);
        Ok(Redirect(HOME_ROUTE.to_string()))
    }
}

/// Missing fields read as empty strings.
fn field<'a>(fields: &'a FormFields, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or("")
}

/// Copy of the submitted fields with password values masked, for logging.
fn redact(fields: &FormFields) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, &str)> = fields
        .iter()
        .map(|(name, value)| {
            let shown = if name.to_lowercase().contains("password") {
                "***"
            } else {
                value.as_str()
            };
            (name.as_str(), shown)
        })
        .collect();
    entries.sort();
    entries
}
