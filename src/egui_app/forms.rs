//! Form State Module
//!
//! In-memory state for the sign-up and login forms: field values plus the
//! per-field validation errors shown inline under each input.
//!
//! Forms are fixed-shape records mutated only through explicit setters.
//! Each setter clears exactly that field's error, so a field the user has
//! edited never retains a stale message. Errors are otherwise recomputed
//! wholesale on every submit attempt.

use std::collections::BTreeMap;

use crate::egui_app::types::LoginCredentials;

/// Form fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Wire name used by the backend's per-field error mapping
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Parse a backend field name, `None` for fields we don't render
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "password" => Some(Field::Password),
            "confirmPassword" | "password_confirmation" => Some(Field::ConfirmPassword),
            _ => None,
        }
    }
}

/// Mapping from field to a human-readable message. Empty mapping = valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Merge the backend's per-field messages into this mapping so the
    /// inline labels reflect server-side validation. The first message per
    /// field wins; unknown fields are ignored.
    pub fn merge_server(&mut self, errors: &BTreeMap<String, Vec<String>>) {
        for (name, messages) in errors {
            if let (Some(field), Some(message)) = (Field::from_name(name), messages.first()) {
                self.0.insert(field, message.clone());
            }
        }
    }
}

/// Sign-up form state, created empty when the screen mounts
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub errors: ValidationErrors,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
        self.errors.clear_field(Field::Name);
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.errors.clear_field(Field::Email);
    }

    pub fn set_phone(&mut self, value: String) {
        self.phone = value;
        self.errors.clear_field(Field::Phone);
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.errors.clear_field(Field::Password);
    }

    pub fn set_confirm_password(&mut self, value: String) {
        self.confirm_password = value;
        self.errors.clear_field(Field::ConfirmPassword);
    }
}

/// Which identifier the user logs in with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginMethod {
    #[default]
    Email,
    Phone,
}

/// Login form state. Both identifier fields are kept so switching the
/// method back and forth doesn't lose input; only the active one is
/// validated and sent.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub method: LoginMethod,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub errors: ValidationErrors,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_method(&mut self, method: LoginMethod) {
        self.method = method;
        self.errors.clear_field(Field::Email);
        self.errors.clear_field(Field::Phone);
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.errors.clear_field(Field::Email);
    }

    pub fn set_phone(&mut self, value: String) {
        self.phone = value;
        self.errors.clear_field(Field::Phone);
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.errors.clear_field(Field::Password);
    }

    /// Build the wire payload for the active method
    pub fn credentials(&self) -> LoginCredentials {
        match self.method {
            LoginMethod::Email => LoginCredentials::Email {
                email: self.email.clone(),
                password: self.password.clone(),
            },
            LoginMethod::Phone => LoginCredentials::Phone {
                phone: self.phone.clone(),
                password: self.password.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_clears_only_that_fields_error() {
        let mut form = SignUpForm::new();
        form.errors.insert(Field::Name, "Name is required");
        form.errors.insert(Field::Email, "Email is required");

        form.set_name("Bini".to_string());

        assert!(form.errors.get(Field::Name).is_none());
        assert_eq!(form.errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_merge_server_errors_maps_known_fields() {
        let mut errors = ValidationErrors::new();
        let mut server = BTreeMap::new();
        server.insert(
            "email".to_string(),
            vec!["The email has already been taken.".to_string()],
        );
        server.insert("tos".to_string(), vec!["must accept".to_string()]);

        errors.merge_server(&server);

        assert_eq!(
            errors.get(Field::Email),
            Some("The email has already been taken.")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_login_credentials_follow_method() {
        let mut form = LoginForm::new();
        form.set_email("a@b.com".to_string());
        form.set_phone("0917".to_string());
        form.set_password("secret1".to_string());

        assert_eq!(
            form.credentials(),
            LoginCredentials::Email {
                email: "a@b.com".to_string(),
                password: "secret1".to_string(),
            }
        );

        form.set_method(LoginMethod::Phone);
        assert_eq!(
            form.credentials(),
            LoginCredentials::Phone {
                phone: "0917".to_string(),
                password: "secret1".to_string(),
            }
        );
    }

    #[test]
    fn test_switching_method_clears_identifier_errors() {
        let mut form = LoginForm::new();
        form.errors.insert(Field::Email, "Email is required");
        form.errors.insert(Field::Password, "Password is required");

        form.set_method(LoginMethod::Phone);

        assert!(form.errors.get(Field::Email).is_none());
        assert_eq!(
            form.errors.get(Field::Password),
            Some("Password is required")
        );
    }
}
