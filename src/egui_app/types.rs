/**
 * Shared Types Module
 *
 * Defines shared types for the egui app including screen destinations and
 * the request/response shapes spoken with the backend.
 */

use serde::{Deserialize, Serialize};

/// Current screen. Login is the initial destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login screen (email/phone + password, Facebook stub)
    Login,
    /// Post-authentication landing screen
    Home,
    /// Sign-up screen
    SignUp,
    /// Forgot-password placeholder screen
    ForgotPassword,
}

/// Body for `POST /api/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Body for `POST /api/auth/login`.
///
/// The method tag carries exactly one of email or phone, so the
/// "both set / neither set" payload is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum LoginCredentials {
    Email { email: String, password: String },
    Phone { phone: String, password: String },
}

/// Successful authentication response: a bearer token plus an opaque
/// user record we store verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub user: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_login_credentials_email_wire_shape() {
        let credentials = LoginCredentials::Email {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        };
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "method": "email",
                "email": "a@b.com",
                "password": "secret1",
            })
        );
    }

    #[test]
    fn test_login_credentials_phone_wire_shape() {
        let credentials = LoginCredentials::Phone {
            phone: "0917 123 4567".to_string(),
            password: "secret1".to_string(),
        };
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(json["method"], "phone");
        assert_eq!(json["phone"], "0917 123 4567");
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_register_request_wire_shape() {
        let request = RegisterRequest {
            name: "Bini".to_string(),
            email: "bini@example.com".to_string(),
            phone: "123456".to_string(),
            password: "abcdef".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Bini",
                "email": "bini@example.com",
                "phone": "123456",
                "password": "abcdef",
            })
        );
    }

    #[test]
    fn test_auth_session_deserializes_with_user() {
        let session: AuthSession =
            serde_json::from_str(r#"{"token":"T","user":{"id":1}}"#).unwrap();
        assert_eq!(session.token, "T");
        assert_eq!(session.user["id"], 1);
    }
}
