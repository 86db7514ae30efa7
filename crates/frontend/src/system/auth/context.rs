use contracts::system::auth::{LoginResponse, Role, UserInfo};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Session context provided at the root of the component tree.
///
/// Screens never read localStorage themselves: they go through this
/// context, which exposes the role and user read-only.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<AuthState>,
}

impl SessionContext {
    /// Restores a previous session from localStorage when present.
    pub fn new() -> Self {
        let restored = match (storage::get_access_token(), storage::get_user()) {
            (Some(token), Some(user)) => AuthState {
                access_token: Some(token),
                user: Some(user),
            },
            _ => AuthState::default(),
        };
        Self {
            state: RwSignal::new(restored),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    /// Role of the logged-in user. Without a session this is the least
    /// privileged role, the login gate hides everything anyway.
    pub fn current_role(&self) -> Role {
        self.state
            .with(|s| s.user.as_ref().map(|u| u.role()).unwrap_or(Role::Cashier))
    }

    pub fn current_user_name(&self) -> String {
        self.state.with(|s| {
            s.user
                .as_ref()
                .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
                .unwrap_or_default()
        })
    }

    /// Store a successful login in memory and localStorage.
    pub fn login(&self, response: LoginResponse) {
        storage::save_access_token(&response.access_token);
        storage::save_user(&response.user);
        self.state.set(AuthState {
            access_token: Some(response.access_token),
            user: Some(response.user),
        });
    }

    pub fn logout(&self) {
        storage::clear_session();
        self.state.set(AuthState::default());
    }
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
