//! Session commands: login, register, logout, whoami.

use jobdeck_cli::{CLIError, Result};
use jobdeck_link::{decode_claims, FileStorage, JobDeckClient, Session, SessionStore};

fn resolve_password(password: Option<String>) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => rpassword::prompt_password("Password: ")
            .map_err(|e| CLIError::InputError(format!("failed to read password: {}", e))),
    }
}

// A token without a role claim grants nothing; don't dress it up as one.
fn role_label(session: &Session) -> &str {
    if session.role.is_empty() {
        "no role"
    } else {
        &session.role
    }
}

pub async fn login(
    client: &JobDeckClient,
    store: &mut SessionStore<FileStorage>,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let password = resolve_password(password)?;
    let session = store.login(client, email, &password).await?;
    println!("Signed in as {} ({})", session.email, role_label(&session));
    Ok(())
}

pub async fn register(
    client: &JobDeckClient,
    store: &mut SessionStore<FileStorage>,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let password = resolve_password(password)?;
    let session = store.register(client, email, &password).await?;
    println!(
        "Account created; signed in as {} ({})",
        session.email,
        role_label(&session)
    );
    Ok(())
}

pub fn logout(store: &mut SessionStore<FileStorage>) -> Result<()> {
    store.logout()?;
    println!("Signed out");
    Ok(())
}

pub fn whoami(session: Option<&Session>) -> Result<()> {
    match session {
        Some(session) => {
            println!("Signed in as {} ({})", session.email, role_label(session));
            // The restored session already decoded cleanly; show the expiry
            if let Ok(claims) = decode_claims(&session.token) {
                if let Some(expires) = chrono::DateTime::from_timestamp(claims.exp, 0) {
                    println!("Token expires: {}", expires.to_rfc3339());
                }
            }
        }
        None => println!("Not signed in"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_role(role: &str) -> Session {
        Session {
            email: "alice@example.com".to_string(),
            token: "token".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_role_label_shows_granted_role() {
        assert_eq!(role_label(&session_with_role("admin")), "admin");
        assert_eq!(role_label(&session_with_role("user")), "user");
    }

    #[test]
    fn test_role_label_missing_role_is_not_a_role() {
        assert_eq!(role_label(&session_with_role("")), "no role");
    }
}
