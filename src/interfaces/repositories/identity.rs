/// Answers "who is signed in right now", if anyone.
pub trait IdentityProvider: Send + Sync {
    fn current_user_id(&self) -> Option<String>;
}

/// Nobody is signed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl IdentityProvider for Anonymous {
    fn current_user_id(&self) -> Option<String> {
        None
    }
}

/// A fixed identity, for embedding the view outside a request.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<String>);

impl StaticIdentity {
    pub fn user(uid: impl Into<String>) -> Self {
        StaticIdentity(Some(uid.into()))
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user_id(&self) -> Option<String> {
        self.0.clone()
    }
}
