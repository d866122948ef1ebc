use gloo::storage::{LocalStorage, Storage};

pub const TOKEN_KEY: &str = "accessToken";
pub const RESTAURANT_ID_KEY: &str = "restaurantId";

/// Values the sign-in flow leaves behind in browser storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
    pub access_token: String,
    pub restaurant_id: String,
}

/// Session state read once at startup and injected into everything that
/// talks to the backend. Absence of either stored value is an explicit
/// state, not a missing header at request time.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionContext {
    Authenticated(SessionData),
    Unauthenticated,
}

impl SessionContext {
    pub fn load() -> Self {
        match (read_key(TOKEN_KEY), read_key(RESTAURANT_ID_KEY)) {
            (Some(access_token), Some(restaurant_id)) => {
                SessionContext::Authenticated(SessionData {
                    access_token,
                    restaurant_id,
                })
            }
            _ => SessionContext::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionContext::Authenticated(_))
    }

    pub fn access_token(&self) -> Option<&str> {
        match self {
            SessionContext::Authenticated(data) => Some(&data.access_token),
            SessionContext::Unauthenticated => None,
        }
    }

    pub fn restaurant_id(&self) -> Option<&str> {
        match self {
            SessionContext::Authenticated(data) => Some(&data.restaurant_id),
            SessionContext::Unauthenticated => None,
        }
    }
}

// The sign-in flow writes plain strings, so read through the raw storage
// handle rather than the JSON-typed accessor.
fn read_key(key: &str) -> Option<String> {
    LocalStorage::raw()
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.is_empty())
}
