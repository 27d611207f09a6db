//! Session
//!
//! The signed-in user's bearer token plus profile.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::user::UserType;

/// Profile of the signed-in user, as carried by the login response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(rename = "userType", default)]
    pub user_type: UserType,
}

/// Sessions compare by token and profile; the raw body is not part of
/// equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user: Profile,
    /// Login response body this session was read from
    #[serde(skip)]
    raw: Option<Value>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token && self.user == other.user
    }
}

impl Eq for Session {}

impl Session {
    pub fn new(token: impl Into<String>, user: Profile) -> Self {
        Self {
            token: token.into(),
            user,
            raw: None,
        }
    }

    /// Read a login response body (`{ "data": { "token", "user" }, ... }`),
    /// keeping the whole body for persistence.
    pub fn from_login_body(raw: Value) -> Result<Self, serde_json::Error> {
        let record = SessionRecord::deserialize(&raw)?;
        Ok(Self {
            raw: Some(raw),
            ..record.data
        })
    }

    /// The record to persist: the login body as received, or the envelope
    /// rebuilt from token and profile when there is none.
    pub fn to_record(&self) -> Result<Value, serde_json::Error> {
        match &self.raw {
            Some(raw) => Ok(raw.clone()),
            None => serde_json::to_value(SessionRecord::from(self.clone())),
        }
    }

    /// A session without a token counts as absent
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.user.user_type == UserType::Admin
    }
}

/// `{ "data": { "token", "user" } }`: the login response body, also the
/// shape persisted in durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub data: Session,
}

impl From<Session> for SessionRecord {
    fn from(data: Session) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let json = r#"{"success":true,"message":"ok","data":{"token":"abc",
                       "user":{"_id":"u1","name":"Ann","email":"a@b.com","userType":"admin"}}}"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();
        assert!(record.data.has_token());
        assert!(record.data.is_admin());
        assert_eq!(record.data.user.name, "Ann");
        assert_eq!(record.data.user.username, "");
    }

    #[test]
    fn test_blank_token_is_absent() {
        assert!(!Session::new("", Profile::default()).has_token());
        assert!(!Session::new("  ", Profile::default()).has_token());
        assert!(Session::new("t", Profile::default()).has_token());
    }

    #[test]
    fn test_login_body_kept_verbatim() {
        let body = serde_json::json!({
            "success": true,
            "message": "Login ok",
            "data": {
                "token": "abc",
                "user": {"id": "u1", "name": "Ann", "userType": "admin",
                         "createdAt": "2024-01-01"}
            }
        });
        let session = Session::from_login_body(body.clone()).unwrap();
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.to_record().unwrap(), body);
    }

    #[test]
    fn test_built_session_record_is_envelope() {
        let record = Session::new("t", Profile::default()).to_record().unwrap();
        assert_eq!(record["data"]["token"], "t");
    }

    #[test]
    fn test_missing_user_type_defaults_to_user() {
        let record: SessionRecord =
            serde_json::from_str(r#"{"data":{"token":"abc","user":{"name":"Bob"}}}"#).unwrap();
        assert!(!record.data.is_admin());
    }
}
