use dioxus::prelude::*;
use shared_types::{AppError, CurrentUser};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Future returned by [`AuthBackend::logout`].
pub type LogoutFuture = Pin<Box<dyn Future<Output = Result<(), AppError>>>>;

/// What the UI needs from whoever owns authentication.
pub trait AuthBackend {
    /// The signed-in user, if any. Implementations backed by signals make
    /// the calling component re-render when the user changes.
    fn current_user(&self) -> Option<CurrentUser>;

    /// End the session.
    fn logout(&self) -> LogoutFuture;
}

/// Shared handle to the active [`AuthBackend`], provided as context.
#[derive(Clone)]
pub struct AuthClient(Rc<dyn AuthBackend>);

impl AuthClient {
    pub fn new(backend: impl AuthBackend + 'static) -> Self {
        Self(Rc::new(backend))
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.0.current_user()
    }

    pub fn logout(&self) -> LogoutFuture {
        self.0.logout()
    }
}

impl PartialEq for AuthClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// In-memory session state: the user the app was started with, cleared on
/// logout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalSession {
    pub current_user: Signal<Option<CurrentUser>>,
}

impl LocalSession {
    pub fn new(initial: Option<CurrentUser>) -> Self {
        Self {
            current_user: Signal::new(initial),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: CurrentUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

impl AuthBackend for LocalSession {
    fn current_user(&self) -> Option<CurrentUser> {
        self.current_user.read().clone()
    }

    fn logout(&self) -> LogoutFuture {
        let mut session = *self;
        Box::pin(async move {
            session.clear_auth();
            tracing::info!("Session cleared");
            Ok(())
        })
    }
}

/// Hook to access the auth capability.
pub fn use_auth_client() -> AuthClient {
    use_context::<AuthClient>()
}

/// Hook to access the local session, for pages that edit it directly.
pub fn use_session() -> LocalSession {
    use_context::<LocalSession>()
}

/// Log the user out. A failed logout is reported to the log and otherwise
/// ignored; the caller never sees it.
pub async fn sign_out(client: &AuthClient) {
    if let Err(err) = client.logout().await {
        tracing::error!(error = %err, "Failed to log out");
    }
}
