//! Sign-in and Sign-up Forms
//!
//! Request bodies for `/auth/login` and `/auth/signup`.

use serde::Serialize;

use super::validation::{FieldErrors, MIN_PASSWORD_LEN};

const MIN_NAME_LEN: usize = 3;

/// Body of `/auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `/auth/signup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInFields {
    pub email: String,
    pub password: String,
}

impl SignInFields {
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = errors.require("email", &self.email, "Email is required");
        if let Some(email) = email {
            errors.email("email", email, "Invalid email address");
        }
        password_rules(&mut errors, &self.password);

        let credentials = Credentials {
            email: email.unwrap_or_default().to_string(),
            password: self.password.clone(),
        };
        errors.into_result(credentials)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpFields {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpFields {
    pub fn validate(&self) -> Result<SignUpRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.require("name", &self.name, "Name is required");
        if let Some(name) = name {
            errors.min_chars("name", name, MIN_NAME_LEN, "Name must be at least 3 characters");
        }
        let username = errors.require("username", &self.username, "Username is required");
        if let Some(username) = username {
            errors.min_chars(
                "username",
                username,
                MIN_NAME_LEN,
                "Username must be at least 3 characters",
            );
        }
        let email = errors.require("email", &self.email, "Email is required");
        if let Some(email) = email {
            errors.email("email", email, "Invalid email address");
        }
        password_rules(&mut errors, &self.password);

        let request = SignUpRequest {
            name: name.unwrap_or_default().to_string(),
            username: username.unwrap_or_default().to_string(),
            email: email.unwrap_or_default().to_string(),
            password: self.password.clone(),
        };
        errors.into_result(request)
    }
}

fn password_rules(errors: &mut FieldErrors, password: &str) {
    if password.is_empty() {
        errors.insert("password", "Password is required");
    } else {
        errors.min_chars(
            "password",
            password,
            MIN_PASSWORD_LEN,
            "Password must be at least 6 characters",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_valid() {
        let fields = SignInFields {
            email: " a@b.com ".into(),
            password: "secret1".into(),
        };
        let credentials = fields.validate().unwrap();
        assert_eq!(credentials.email, "a@b.com");
        assert_eq!(credentials.password, "secret1");
    }

    #[test]
    fn test_sign_in_messages() {
        let errors = SignInFields::default().validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let errors = SignInFields {
            email: "nope".into(),
            password: "123".into(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
    }

    #[test]
    fn test_sign_up_minimum_lengths() {
        let errors = SignUpFields {
            name: "Al".into(),
            username: "al".into(),
            email: "al@example.com".into(),
            password: "secret1".into(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("name"), Some("Name must be at least 3 characters"));
        assert_eq!(errors.get("username"), Some("Username must be at least 3 characters"));
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn test_sign_up_valid() {
        let request = SignUpFields {
            name: "Alice".into(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "secret1".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(request.username, "alice");
    }
}
