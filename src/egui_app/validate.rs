//! Client-side form validation.
//!
//! Pure functions from a form snapshot to a [`ValidationErrors`] mapping;
//! no side effects, no I/O. A form is valid iff the returned mapping is
//! empty. Errors are recomputed wholesale on each submit attempt.

use crate::egui_app::forms::{Field, LoginForm, LoginMethod, SignUpForm, ValidationErrors};

/// Minimum accepted password length for sign-up
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate the sign-up form
pub fn validate_sign_up(form: &SignUpForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    if form.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.insert(Field::Email, "Email is invalid");
    }

    if form.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Phone number is required");
    }

    if form.password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(Field::Password, "Password must be at least 6 characters");
    }

    // Checked unconditionally, even when password itself already errored
    if form.password != form.confirm_password {
        errors.insert(Field::ConfirmPassword, "Passwords do not match");
    }

    errors
}

/// Validate the login form. Only the active method's identifier is checked.
pub fn validate_login(form: &LoginForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match form.method {
        LoginMethod::Email => {
            if form.email.trim().is_empty() {
                errors.insert(Field::Email, "Email is required");
            } else if !is_valid_email(&form.email) {
                errors.insert(Field::Email, "Email is invalid");
            }
        }
        LoginMethod::Phone => {
            if form.phone.trim().is_empty() {
                errors.insert(Field::Phone, "Phone number is required");
            }
        }
    }

    if form.password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    }

    errors
}

/// Basic `local@domain.tld` shape: a non-space local part, and a domain
/// containing a dot with non-space text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SignUpForm {
        SignUpForm {
            name: "Bini".to_string(),
            email: "bini@example.com".to_string(),
            phone: "0917 123 4567".to_string(),
            password: "abcdef".to_string(),
            confirm_password: "abcdef".to_string(),
            errors: ValidationErrors::new(),
        }
    }

    #[test]
    fn test_empty_form_reports_all_required_errors() {
        let errors = validate_sign_up(&SignUpForm::new());

        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
        // Both passwords empty: no mismatch
        assert!(errors.get(Field::ConfirmPassword).is_none());
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_empty_form_with_confirm_password_reports_mismatch() {
        let mut form = SignUpForm::new();
        form.confirm_password = "x".to_string();
        let errors = validate_sign_up(&form);
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate_sign_up(&filled_form()).is_empty());
    }

    #[test]
    fn test_validator_is_idempotent() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        let first = validate_sign_up(&form);
        let second = validate_sign_up(&form);
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_matching_password_reports_length_not_mismatch() {
        let mut form = filled_form();
        form.password = "abc12".to_string();
        form.confirm_password = "abc12".to_string();
        let errors = validate_sign_up(&form);

        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 6 characters")
        );
        assert!(errors.get(Field::ConfirmPassword).is_none());
    }

    #[test]
    fn test_long_mismatched_password_reports_mismatch_not_length() {
        let mut form = filled_form();
        form.password = "abcdef".to_string();
        form.confirm_password = "xyzxyz".to_string();
        let errors = validate_sign_up(&form);

        assert!(errors.get(Field::Password).is_none());
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_invalid_email_shapes() {
        for email in ["plain", "a@b", "@b.com", "a@.com", "a@b.", "a b@c.com"] {
            assert!(!is_valid_email(email), "accepted {email:?}");
        }
    }

    #[test]
    fn test_valid_email_shapes() {
        for email in ["a@b.com", "first.last@sub.domain.ph", " a@b.co "] {
            assert!(is_valid_email(email), "rejected {email:?}");
        }
    }

    #[test]
    fn test_login_email_method_requires_email() {
        let form = LoginForm::new();
        let errors = validate_login(&form);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
        assert!(errors.get(Field::Phone).is_none());
    }

    #[test]
    fn test_login_phone_method_ignores_email() {
        let mut form = LoginForm::new();
        form.set_method(LoginMethod::Phone);
        form.set_password("secret1".to_string());
        let errors = validate_login(&form);
        assert_eq!(errors.get(Field::Phone), Some("Phone number is required"));
        assert!(errors.get(Field::Email).is_none());
    }

    #[test]
    fn test_login_valid_email_form() {
        let mut form = LoginForm::new();
        form.set_email("a@b.com".to_string());
        form.set_password("secret1".to_string());
        assert!(validate_login(&form).is_empty());
    }
}
