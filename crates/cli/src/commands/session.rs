//! `pp-cli login`, `logout` and `whoami`.
//!
//! Sign-in goes through the backend boundary; the resulting session is
//! written to the session file so later commands can load it.

use parcelport_core::{AccountCode, AccountTier, OrderBackend, SessionContext, SignInRequest};
use tracing::info;

use crate::error::Result;
use crate::output;
use crate::state::App;

/// Sign in and persist the session.
///
/// # Errors
///
/// Returns an error if the account code is invalid, the backend refuses the
/// sign-in, or the session cannot be saved.
pub async fn login(app: &App, account: &str, name: &str, corporate: bool) -> Result<SessionContext> {
    let request = SignInRequest {
        account: AccountCode::parse(account)?,
        display_name: name.to_string(),
        tier: if corporate {
            AccountTier::Corporate
        } else {
            AccountTier::Individual
        },
    };

    let session = app.backend().sign_in(request).await?;
    app.sessions().save(&session).await?;
    output::line(format_args!(
        "Signed in as {} ({}, {})",
        session.display_name, session.account, session.tier
    ));
    Ok(session)
}

/// Forget the stored session.
///
/// # Errors
///
/// Returns an error if the session file exists but cannot be removed.
pub async fn logout(app: &App) -> Result<()> {
    if app.sessions().clear().await? {
        output::line("Signed out");
    } else {
        info!("No session to clear");
        output::line("Not signed in");
    }
    Ok(())
}

/// Show the stored session.
///
/// # Errors
///
/// Returns an error if the session file cannot be read.
pub async fn whoami(app: &App) -> Result<()> {
    match app.sessions().load().await? {
        Some(session) => output::line(format_args!(
            "{} ({}, {}) since {}",
            session.display_name,
            session.account,
            session.tier,
            session.signed_in_at.format("%Y-%m-%d %H:%M UTC")
        )),
        None => output::line("Not signed in"),
    }
    Ok(())
}
