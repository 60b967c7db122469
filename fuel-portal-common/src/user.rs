use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString, IntoStaticStr};

/// Access tier of a FuelTrackr user. Governs which views and endpoints are
/// permitted once authenticated.
#[derive(
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    AsRefStr,
    PartialEq,
    Eq,
    Debug,
    Copy,
    Clone,
)]
pub enum Role {
    #[serde(rename = "employee")]
    #[strum(serialize = "employee")]
    Employee,
    #[serde(rename = "admin")]
    #[strum(serialize = "admin")]
    Admin,
}

/// User entity as served by the backend. The email doubles as the unique
/// identifier for admin actions against the user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub fuel_card_no: String,
    pub role: Role,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Bearer token issued by the login endpoint. The token is opaque to the
/// client and presented as-is on subsequent requests.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub fuel_card_no: String,
    pub role: Role,
}

/// Self-service profile update. Only the name and fuel card number can be
/// changed by the user themselves.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub fuel_card_no: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateRoleRequest {
    pub role: Role,
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use rstest::rstest;

    use super::{Role, TokenResponse, User};

    #[rstest]
    #[case::employee("employee", Role::Employee)]
    #[case::admin("admin", Role::Admin)]
    fn role_should_parse_when_known_name(#[case] name: &str, #[case] expected: Role) {
        let role = Role::from_str(name).expect("Could not parse role name");
        assert_eq!(role, expected);
    }

    #[test]
    fn role_should_not_parse_when_unknown_name() {
        assert!(Role::from_str("manager").is_err());
    }

    #[test]
    fn user_should_deserialize_from_backend_payload() {
        let payload = r#"{
            "name": "Test User",
            "email": "test@example.com",
            "fuel_card_no": "FC-0001",
            "role": "admin"
        }"#;

        let user: User = serde_json::from_str(payload).expect("Could not deserialize user");

        assert_eq!(user.name, "Test User");
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.fuel_card_no, "FC-0001");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn token_response_should_default_token_type_when_absent() {
        let payload = r#"{"access_token":"abc123"}"#;

        let session: TokenResponse =
            serde_json::from_str(payload).expect("Could not deserialize token response");

        assert_eq!(session.access_token, "abc123");
        assert_eq!(session.token_type, "bearer");
    }
}
