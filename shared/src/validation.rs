//! Client-side form checks.
//!
//! Each form is validated synchronously and turned into its request body.
//! A failure stops the submission before any network call is made.

use crate::error::ValidationError;
use crate::{GuestUpdateRequest, LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Placeholder for address fields the guest fills in at checkout
pub const PENDING_FIELD: &str = "Por definir";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub confirm_email: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_privacy: bool,
    pub confirmed_account_creation: bool,
}

impl RegisterForm {
    /// Validate and build the registration body. `now_millis` seeds the
    /// provisional identity document.
    pub fn validate(&self, now_millis: u64) -> Result<RegisterRequest, ValidationError> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();

        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        if email != self.confirm_email.trim() {
            return Err(ValidationError::EmailMismatch);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if !self.accepted_privacy || !self.confirmed_account_creation {
            return Err(ValidationError::RegistrationConsentMissing);
        }

        Ok(RegisterRequest {
            names: first_name.to_string(),
            surnames: last_name.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            phone: self.phone.trim().to_string(),
            dni: provisional_dni(now_millis),
            country: PENDING_FIELD.to_string(),
            city: PENDING_FIELD.to_string(),
            state: 1,
        })
    }
}

/// `REG` followed by the last ten digits of the timestamp
pub fn provisional_dni(now_millis: u64) -> String {
    let digits = now_millis.to_string();
    let start = digits.len().saturating_sub(10);
    format!("REG{}", &digits[start..])
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub confirm_email: String,
    /// Empty keeps the current password
    pub password: String,
    pub confirm_password: String,
    pub accepted_privacy: bool,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<GuestUpdateRequest, ValidationError> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();

        if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        if email != self.confirm_email.trim() {
            return Err(ValidationError::EmailMismatch);
        }
        if !self.password.is_empty() && self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if !self.accepted_privacy {
            return Err(ValidationError::PrivacyNotAccepted);
        }

        Ok(GuestUpdateRequest {
            names: first_name.to_string(),
            surnames: last_name.to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form() -> RegisterForm {
        RegisterForm {
            first_name: " Kenji ".to_string(),
            last_name: "Tanaka".to_string(),
            phone: "600111222".to_string(),
            email: "kenji@example.com".to_string(),
            confirm_email: "kenji@example.com".to_string(),
            password: "sakura2026".to_string(),
            confirm_password: "sakura2026".to_string(),
            accepted_privacy: true,
            confirmed_account_creation: true,
        }
    }

    fn profile_form() -> ProfileForm {
        ProfileForm {
            first_name: "Kenji".to_string(),
            last_name: "Tanaka".to_string(),
            phone: String::new(),
            email: "kenji@example.com".to_string(),
            confirm_email: "kenji@example.com".to_string(),
            password: String::new(),
            confirm_password: String::new(),
            accepted_privacy: true,
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm {
            email: "  ".to_string(),
            password: "x".to_string(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingCredentials));
        let form = LoginForm {
            email: " a@b.c ".to_string(),
            password: "x".to_string(),
        };
        assert_eq!(form.validate().unwrap().email, "a@b.c");
    }

    #[test]
    fn test_register_builds_request() {
        let request = register_form().validate(1_767_000_123_456).unwrap();
        assert_eq!(request.names, "Kenji");
        assert_eq!(request.dni, "REG7000123456");
        assert_eq!(request.country, PENDING_FIELD);
        assert_eq!(request.city, PENDING_FIELD);
        assert_eq!(request.state, 1);
    }

    #[test]
    fn test_register_rule_order() {
        let mut form = register_form();
        form.last_name.clear();
        assert_eq!(form.validate(0), Err(ValidationError::MissingRequiredFields));

        let mut form = register_form();
        form.confirm_email = "other@example.com".to_string();
        assert_eq!(form.validate(0), Err(ValidationError::EmailMismatch));

        let mut form = register_form();
        form.confirm_password = "different".to_string();
        assert_eq!(form.validate(0), Err(ValidationError::PasswordMismatch));

        let mut form = register_form();
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();
        assert_eq!(
            form.validate(0),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );

        let mut form = register_form();
        form.confirmed_account_creation = false;
        assert_eq!(form.validate(0), Err(ValidationError::RegistrationConsentMissing));
    }

    #[test]
    fn test_provisional_dni_short_timestamp() {
        assert_eq!(provisional_dni(42), "REG42");
    }

    #[test]
    fn test_profile_password_is_optional() {
        let request = profile_form().validate().unwrap();
        assert_eq!(request.password, "");

        let mut form = profile_form();
        form.password = "newpassword".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
        form.confirm_password = "newpassword".to_string();
        assert_eq!(form.validate().unwrap().password, "newpassword");
    }

    #[test]
    fn test_profile_requires_privacy() {
        let mut form = profile_form();
        form.accepted_privacy = false;
        assert_eq!(form.validate(), Err(ValidationError::PrivacyNotAccepted));
    }
}
