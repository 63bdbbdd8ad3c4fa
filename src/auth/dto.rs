use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub msg: String,
}

#[derive(Debug, Serialize)]
pub struct MsgResponse {
    pub msg: String,
}

/// Identity echoed back by the token check endpoint.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub msg: String,
    pub user_id: Uuid,
    pub user_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_shape() {
        let res = LoginResponse {
            token: "abc.def.ghi".into(),
            msg: "Login successful".into(),
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["token"], "abc.def.ghi");
        assert_eq!(json["msg"], "Login successful");
    }

    #[test]
    fn check_response_shape() {
        let res = CheckResponse {
            msg: "Valid user".into(),
            user_id: Uuid::new_v4(),
            user_name: "alice".into(),
        };
        let json = serde_json::to_string(&res).unwrap();
        assert!(json.contains("user_name"));
        assert!(json.contains("alice"));
    }
}
