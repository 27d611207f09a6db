//! User Entity
//!
//! Accounts managed from the admin-only user-management screen.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, FormMode};
use super::validation::{FieldErrors, MIN_PASSWORD_LEN};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    #[default]
    User,
}

impl UserType {
    pub const ALL: [UserType; 2] = [UserType::Admin, UserType::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::Admin => "Admin",
            UserType::User => "User",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "admin" => Some(UserType::Admin),
            "user" => Some(UserType::User),
            _ => None,
        }
    }
}

/// A user as returned by `/user/list`; the password never comes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
}

/// Raw values of the create/edit user form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub username: String,
    pub user_type: String,
    /// Only shown on the create form
    pub password: String,
}

/// Body of `/user/create` and `/user/update/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Entity for User {
    type Fields = UserFields;
    type Input = UserInput;

    const KIND: &'static str = "user";
    const LABEL: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.email, &self.username]
    }

    fn to_fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            user_type: self.user_type.as_str().to_string(),
            password: String::new(),
        }
    }

    fn validate(fields: &UserFields, mode: FormMode) -> Result<UserInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.require("name", &fields.name, "Name is required");
        let email = errors.require("email", &fields.email, "Email is required");
        if let Some(email) = email {
            errors.email("email", email, "Invalid email format");
        }
        let username = errors.require("username", &fields.username, "Username is required");
        let user_type = errors
            .require("userType", &fields.user_type, "User Type is required")
            .and_then(UserType::parse);
        if user_type.is_none() {
            errors.insert("userType", "User Type is required");
        }

        // The edit form has no password field; anything left over is never sent.
        let password = match mode {
            FormMode::Edit => None,
            FormMode::Create => {
                if fields.password.is_empty() {
                    errors.insert("password", "Password is required");
                } else {
                    errors.min_chars(
                        "password",
                        &fields.password,
                        MIN_PASSWORD_LEN,
                        "Password must be at least 6 characters",
                    );
                }
                Some(fields.password.clone())
            }
        };

        match (name, email, username, user_type) {
            (Some(name), Some(email), Some(username), Some(user_type)) if errors.is_empty() => {
                Ok(UserInput {
                    name: name.to_string(),
                    email: email.to_string(),
                    username: username.to_string(),
                    user_type,
                    password,
                })
            }
            _ => Err(errors),
        }
    }
}
