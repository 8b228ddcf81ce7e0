//! Session persisted by the sign-in page in `localStorage`.

use gloo::storage::{LocalStorage, Storage};
use shared::SessionUser;

pub const TOKEN_KEY: &str = "@GoBarber:token";
pub const USER_KEY: &str = "@GoBarber:user";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    /// Read the stored token and user. Missing or malformed entries are treated as absent.
    pub fn restore() -> Self {
        // The token is stored as a raw string, not JSON
        let token = LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten();
        let user = match LocalStorage::get::<SessionUser>(USER_KEY) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("🔐 SESSION: no stored user: {}", e);
                None
            }
        };

        Self { token, user }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Forget the stored session
    pub fn sign_out() {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
        log::info!("🔐 SESSION: signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_restore_and_sign_out() {
        LocalStorage::raw().set_item(TOKEN_KEY, "jwt-token").unwrap();
        LocalStorage::raw()
            .set_item(
                USER_KEY,
                r#"{
                    "id": "2c7b6a9e-5a7a-4a4e-9d55-0e3f3a0d2b11",
                    "name": "Ana",
                    "email": "ana@example.com",
                    "avatar_url": null
                }"#,
            )
            .unwrap();

        let session = Session::restore();
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("jwt-token"));
        assert_eq!(session.user.map(|user| user.name), Some("Ana".to_string()));

        Session::sign_out();
        assert_eq!(Session::restore(), Session::default());
    }
}
