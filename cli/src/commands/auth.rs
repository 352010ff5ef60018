//! # Pulse Auth Commands (`pulse auth`)
//!
//! File: cli/src/commands/auth.rs
//!
//! ## Overview
//!
//! Drives the mock login/signup form from the command line:
//! - `pulse auth login --username U --password P`
//! - `pulse auth signup --username U --password P --confirm-password C`
//!
//! Nothing is stored. A successful submission prints the placeholder notice
//! and the page the form would navigate to.
//!
use crate::auth::{AuthForm, FormFields, PLACEHOLDER_NOTICE};
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use tracing::info;

/// # Auth Command Group Arguments (`AuthArgs`)
#[derive(Parser, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    command: AuthCommand,
}

#[derive(Subcommand, Debug)]
enum AuthCommand {
    /// Submit the login form.
    Login(LoginArgs),
    /// Submit the signup form.
    Signup(SignupArgs),
}

#[derive(Parser, Debug)]
struct LoginArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
}

#[derive(Parser, Debug)]
struct SignupArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
}

/// # Handle Auth Command (`handle_auth`)
///
/// Switches the form to the requested view and submits it. A signup whose
/// passwords differ returns `PulseError::PasswordMismatch`.
pub async fn handle_auth(args: AuthArgs) -> Result<()> {
    let mut form = AuthForm::new();

    let redirect = match args.command {
        AuthCommand::Login(login) => {
            form.show_login();
            let fields = FormFields::from([
                ("username".to_string(), login.username),
                ("password".to_string(), login.password),
            ]);
            form.submit_login(&fields)?
        }
        AuthCommand::Signup(signup) => {
            form.show_signup();
            let mut fields = FormFields::from([
                ("username".to_string(), signup.username),
                ("password".to_string(), signup.password),
                ("confirmPassword".to_string(), signup.confirm_password),
            ]);
            if let Some(email) = signup.email {
                fields.insert("email".to_string(), email);
            }
            form.submit_signup(&fields)?
        }
    };

    info!("Submitted {} form.", form.view());
    println!("{}", PLACEHOLDER_NOTICE);
    println!("Redirecting to {}", redirect.0);
    Ok(())
}
