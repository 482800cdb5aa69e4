use serde::Deserialize;
use serde_json::Value;

/// Body returned by the login endpoint.
/// `code` and `message` are informational and their JSON type varies;
/// only `data.token` decides whether decoding succeeds.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    pub data: LoginData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_body() {
        let parsed: LoginResponse = serde_json::from_str(r#"{"data":{"token":"abc123"}}"#).unwrap();
        assert_eq!(parsed.data.token, "abc123");
        assert_eq!(parsed.code, None);
    }

    #[test]
    fn test_parse_full_envelope() {
        let json = r#"{"code":20000,"message":"ok","data":{"token":"abc123","expire":3600}}"#;
        let parsed: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.code, Some(Value::from(20000)));
        assert_eq!(parsed.message, Some(Value::from("ok")));
        assert_eq!(parsed.data.token, "abc123");
    }

    #[test]
    fn test_envelope_field_types_are_not_checked() {
        let bodies = [
            r#"{"code":"20000","message":"ok","data":{"token":"abc123"}}"#,
            r#"{"code":200.0,"data":{"token":"abc123"}}"#,
            r#"{"code":null,"message":{"zh":"x"},"data":{"token":"abc123"}}"#,
        ];
        for body in bodies {
            let parsed: LoginResponse = serde_json::from_str(body).unwrap();
            assert_eq!(parsed.data.token, "abc123", "body: {}", body);
        }
    }

    #[test]
    fn test_missing_token_is_an_error() {
        assert!(serde_json::from_str::<LoginResponse>(r#"{"data":{}}"#).is_err());
        assert!(serde_json::from_str::<LoginResponse>(r#"{"code":40001}"#).is_err());
    }
}
