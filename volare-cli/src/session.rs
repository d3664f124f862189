use chrono::{DateTime, Utc};
use tracing::{info, warn};
use volare_core::CredentialRepository;
use volare_shared::Masked;

/// The signed-in operator. Only the menu consults it; booking never does.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// `None` on bad credentials or when the credential store cannot be read.
    pub fn authenticate(
        credentials: &dyn CredentialRepository,
        username: &str,
        password: &Masked<String>,
    ) -> Option<Session> {
        match credentials.verify(username, password.expose()) {
            Ok(true) => {
                info!(username, "Login successful");
                Some(Session {
                    username: username.to_string(),
                    started_at: Utc::now(),
                })
            }
            Ok(false) => {
                info!(username, "Login rejected");
                None
            }
            Err(e) => {
                warn!("Error reading user database: {}", e);
                None
            }
        }
    }
}
