use serde::{Deserialize, Serialize};

/// Failure payload returned by the backend for any rejected request. The
/// `detail` field carries a human readable message intended for display.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Acknowledgment body returned by the registration endpoint. Extra fields
/// sent by the backend are ignored.
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    pub msg: String,
}

#[cfg(test)]
mod test {
    use super::ErrorDetail;

    #[test]
    fn error_detail_should_deserialize_from_rejection_payload() {
        let payload = r#"{"detail":"Invalid email or password"}"#;

        let error: ErrorDetail =
            serde_json::from_str(payload).expect("Could not deserialize error payload");

        assert_eq!(error.detail, "Invalid email or password");
    }
}
