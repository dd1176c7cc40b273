//! User-related DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tramita_core::{Role, User, UserId};

/// Request to register a new user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub name: String,
    /// Plain-text password. Hashed by the service before storage.
    pub password: String,
    pub role: Role,
}

/// Partial update of a user. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
}

impl UserRequest {
    /// Copies the present fields onto `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        user.touch();
    }
}

/// User response DTO. Never carries the password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<UserResponse> for User {
    fn from(response: UserResponse) -> Self {
        Self {
            id: response.id,
            username: response.username,
            email: response.email,
            name: response.name,
            password_hash: String::new(),
            role: response.role,
            created_at: response.created_at,
            updated_at: response.updated_at,
        }
    }
}

impl From<User> for SignupRequest {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            name: user.name,
            password: String::new(),
            role: user.role,
        }
    }
}

/// Builds an unsaved user with an empty password hash.
impl From<SignupRequest> for User {
    fn from(request: SignupRequest) -> Self {
        Self::new(request.username, request.email, request.name, String::new(), request.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        let mut user = User::new("ana", "ana@example.com", "Ana", "x", Role::Admin);
        user.id = UserId::new(7);
        user
    }

    #[test]
    fn test_user_response_drops_password_hash() {
        let response = UserResponse::from(create_test_user());
        assert_eq!(response.id, UserId::new(7));
        assert_eq!(response.name, "Ana");
        assert_eq!(response.role, Role::Admin);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "ADMIN");
    }

    #[test]
    fn test_user_from_response_has_empty_hash() {
        let user = User::from(UserResponse::from(create_test_user()));
        assert_eq!(user.id, UserId::new(7));
        assert!(user.password_hash.is_empty());
    }

    #[test]
    fn test_signup_request_into_user() {
        let request = SignupRequest {
            username: "bia".to_string(),
            email: "bia@example.com".to_string(),
            name: "Bia".to_string(),
            password: "secret".to_string(),
            role: Role::Triador,
        };

        let user = User::from(request);
        assert_eq!(user.id, UserId::UNASSIGNED);
        assert_eq!(user.username, "bia");
        assert_eq!(user.role, Role::Triador);
        assert!(user.password_hash.is_empty());
    }

    #[test]
    fn test_signup_request_deserializes_role() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"username":"bia","email":"b@x.com","name":"Bia","password":"pw","role":"TRIADOR"}"#,
        )
        .unwrap();
        assert_eq!(request.role, Role::Triador);
    }

    #[test]
    fn test_user_request_applies_present_fields_only() {
        let mut user = create_test_user();
        let request = UserRequest {
            name: Some("Ana Maria".to_string()),
            role: Some(Role::Finalizador),
            ..UserRequest::default()
        };

        request.apply_to(&mut user);
        assert_eq!(user.name, "Ana Maria");
        assert_eq!(user.role, Role::Finalizador);
        assert_eq!(user.username, "ana");
        assert_eq!(user.email, "ana@example.com");
    }

    #[test]
    fn test_requests_accept_lower_case_roles() {
        let signup: SignupRequest = serde_json::from_str(
            r#"{"username":"ana","email":"a@x.com","name":"Ana","password":"pw","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(signup.role, Role::Admin);

        let update: UserRequest = serde_json::from_str(r#"{"role":"finalizador"}"#).unwrap();
        assert_eq!(update.role, Some(Role::Finalizador));
    }
}
