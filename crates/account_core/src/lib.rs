use shared::{domain::UserRecord, error::AuthError};
use tracing::{debug, info, warn};

pub mod store;

pub use store::{demo_users, UserStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    AwaitingCredentials,
    Registering,
    LoggedIn,
    Failed,
}

#[derive(Debug, Default)]
pub struct LoginSession {
    store: UserStore,
    state: SessionState,
    // Stays set through failed attempts; only success or log_out clears it.
    registering: bool,
    current_user: Option<UserRecord>,
}

impl LoginSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: UserStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_registering(&self) -> bool {
        self.registering
    }

    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user.as_ref()
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Appends the record immediately, before any name is typed; the sign-in
    /// that follows fills the name in. Ignored while registering or signed in.
    pub fn begin_registration(&mut self, email: &str, password: &str) {
        if self.registering || self.state == SessionState::LoggedIn {
            warn!(state = ?self.state, "auth: ignoring registration request");
            return;
        }
        self.store.add_user(UserRecord::new("", password, email));
        self.registering = true;
        self.state = SessionState::Registering;
        info!(email, roster_len = self.store.len(), "auth: registration opened");
    }

    /// First exact (email, password) match wins; a non-empty `name_entry`
    /// renames the matched record while registering.
    pub fn submit_login(
        &mut self,
        email: &str,
        password: &str,
        name_entry: &str,
    ) -> Result<UserRecord, AuthError> {
        let matched = if self.registering && !name_entry.is_empty() {
            self.store.rename_match(email, password, name_entry)
        } else {
            self.store.find_match(email, password).cloned()
        };
        match matched {
            Some(user) => {
                info!(email, "auth: signed in");
                self.state = SessionState::LoggedIn;
                self.registering = false;
                self.current_user = Some(user.clone());
                Ok(user)
            }
            None => {
                debug!(email, "auth: sign-in rejected");
                self.state = SessionState::Failed;
                self.current_user = None;
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    pub fn log_out(&mut self) {
        // The roster is untouched; users registered this session can sign back in.
        info!("auth: signed out");
        self.state = SessionState::AwaitingCredentials;
        self.registering = false;
        self.current_user = None;
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
