//! Bearer token holder
//!
//! Sign-in and sign-out belong to whoever owns the login flow; everything
//! else only reads the current token.

use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct CredentialHolder {
    sender: Arc<watch::Sender<Option<String>>>,
}

impl CredentialHolder {
    pub fn new(token: Option<String>) -> Self {
        let (sender, _) = watch::channel(token.filter(|t| !t.is_empty()));
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn signed_out() -> Self {
        Self::new(None)
    }

    /// Current token, if signed in
    pub fn token(&self) -> Option<String> {
        self.sender.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.sender.borrow().is_some()
    }

    pub fn sign_in(&self, token: impl Into<String>) {
        let token = token.into();
        tracing::debug!("credential updated");
        self.sender.send_replace((!token.is_empty()).then_some(token));
    }

    pub fn sign_out(&self) {
        tracing::debug!("credential cleared");
        self.sender.send_replace(None);
    }
}

impl Default for CredentialHolder {
    fn default() -> Self {
        Self::signed_out()
    }
}
