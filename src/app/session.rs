//! Session seam for the external auth collaborator.
//!
//! Authentication lives outside this application; the browser only consumes
//! an identity signal and forwards sign-out. Anything implementing
//! [`SessionProvider`] can be plugged in; [`LocalSession`] is the stand-in
//! used when no real provider is wired up.

/// Identity signal consumed from the auth collaborator.
pub trait SessionProvider {
    /// Display identity of the signed-in user, or `None` when signed out.
    fn identity(&self) -> Option<String>;

    /// Forwards a sign-out request to the collaborator.
    fn sign_out(&mut self);
}

/// Local stand-in session: signed in as the OS user until signed out.
pub struct LocalSession {
    identity: Option<String>,
}

impl LocalSession {
    pub fn new() -> Self {
        Self {
            identity: Some(std::env::var("USER").unwrap_or_else(|_| "local-user".to_string())),
        }
    }
}

impl Default for LocalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider for LocalSession {
    fn identity(&self) -> Option<String> {
        self.identity.clone()
    }

    fn sign_out(&mut self) {
        self.identity = None;
    }
}
