//! Admin login and logout handlers.
//!
//! The login form sits behind a session-scoped lockout guard: five failed
//! attempts lock the form for fifteen minutes. The guard is checked before
//! credentials are verified, so a locked session never reaches the password
//! check; submissions while locked are rejected with 429. All credential
//! failures render one uniform message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::filters;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::{CurrentAdmin, LockoutState, session_keys};
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    /// Seconds left on an active lockout; drives the countdown script.
    pub lockout_seconds: Option<i64>,
}

const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect email or password.";

fn locked_out_message(seconds: i64) -> String {
    // `i64::div_ceil` is still unstable (`int_roundings`); this is its exact
    // stable equivalent, including for negative inputs.
    let minutes = seconds.div_euclid(60) + i64::from(seconds.rem_euclid(60) != 0);
    format!("Too many failed attempts. Try again in {minutes} minute(s).")
}

async fn load_lockout(session: &Session) -> Result<LockoutState, AppError> {
    session
        .get::<LockoutState>(session_keys::LOCKOUT)
        .await
        .map_err(|e| AppError::Internal(format!("session read failed: {e}")))
        .map(Option::unwrap_or_default)
}

async fn store_lockout(session: &Session, lockout: &LockoutState) -> Result<(), AppError> {
    session
        .insert(session_keys::LOCKOUT, lockout)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))
}

/// Display the login page.
///
/// A session that is already locked out sees the countdown immediately,
/// before submitting anything.
pub async fn login_page(session: Session) -> Result<LoginTemplate, AppError> {
    let lockout = load_lockout(&session).await?;
    let now = Utc::now();

    if lockout.is_locked(now) {
        let seconds = lockout.remaining_seconds(now);
        return Ok(LoginTemplate {
            error: Some(locked_out_message(seconds)),
            lockout_seconds: Some(seconds),
        });
    }

    Ok(LoginTemplate {
        error: None,
        lockout_seconds: None,
    })
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let mut lockout = load_lockout(&session).await?;
    let now = Utc::now();

    // Short-circuit before touching credentials at all. The form disables
    // itself while locked, so a POST here is a client bypassing the page;
    // it gets the normalized 429 rather than a form re-render.
    if lockout.is_locked(now) {
        let seconds = lockout.remaining_seconds(now);
        tracing::warn!(seconds_remaining = seconds, "Login attempt while locked out");
        return Err(AuthError::LockedOut.into());
    }

    let auth = AuthService::new(state.pool());

    match auth.verify_credentials(&form.email, &form.password).await {
        Ok(user) => {
            lockout.reset();
            store_lockout(&session, &lockout).await?;

            // New session id on privilege change
            session
                .cycle_id()
                .await
                .map_err(|e| AppError::Internal(format!("session cycle failed: {e}")))?;

            let admin = CurrentAdmin {
                id: user.id,
                email: user.email.to_string(),
            };
            set_current_admin(&session, &admin)
                .await
                .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

            tracing::info!(admin_id = %user.id, "Admin logged in");
            Ok(Redirect::to("/admin").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            lockout.record_failure(now);
            store_lockout(&session, &lockout).await?;

            tracing::info!(attempts = lockout.attempts, "Failed admin login attempt");

            if lockout.is_locked(now) {
                let seconds = lockout.remaining_seconds(now);
                return Ok(LoginTemplate {
                    error: Some(locked_out_message(seconds)),
                    lockout_seconds: Some(seconds),
                }
                .into_response());
            }

            Ok(LoginTemplate {
                error: Some(INVALID_CREDENTIALS_MESSAGE.to_string()),
                lockout_seconds: None,
            }
            .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Handle logout.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("session cycle failed: {e}")))?;

    Ok(Redirect::to("/admin/login"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_out_message_rounds_minutes_up() {
        assert_eq!(
            locked_out_message(900),
            "Too many failed attempts. Try again in 15 minute(s)."
        );
        assert_eq!(
            locked_out_message(61),
            "Too many failed attempts. Try again in 2 minute(s)."
        );
        assert_eq!(
            locked_out_message(1),
            "Too many failed attempts. Try again in 1 minute(s)."
        );
    }
}
