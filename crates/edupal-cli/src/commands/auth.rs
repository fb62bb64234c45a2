//! Backend credential management.

use clap::Subcommand;

use edupal_core::updates::keyring_store::{self, API_TOKEN_KEY};

use super::common::CliResult;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the updates backend token in the OS keyring
    Login {
        /// Bearer token issued by the portal
        #[arg(long)]
        token: Option<String>,
    },
    /// Remove the stored token
    Logout,
    /// Check whether a token is stored
    Status,
}

pub fn run(action: AuthAction) -> CliResult {
    match action {
        AuthAction::Login { token } => {
            let token = token.ok_or("--token required")?;
            if token.trim().is_empty() {
                return Err("token must not be empty".into());
            }
            keyring_store::set(API_TOKEN_KEY, &token)?;
            println!("Token stored");
        }
        AuthAction::Logout => {
            keyring_store::delete(API_TOKEN_KEY)?;
            println!("Token removed");
        }
        AuthAction::Status => {
            let stored = keyring_store::get(API_TOKEN_KEY)?.is_some();
            println!("{}", if stored { "authenticated" } else { "not authenticated" });
        }
    }
    Ok(())
}
