use serde::Deserialize;

/// Envelope every RongCloud JSON response carries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeResult {
    pub code: i32,
    #[serde(default, rename = "errorMessage")]
    pub error_message: Option<String>,
}

pub fn decode_code_result(json: &str) -> Result<CodeResult, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_envelope_and_ignores_extra_fields() {
        let parsed = decode_code_result(r#"{"code":200,"token":"t"}"#).unwrap();
        assert_eq!(
            parsed,
            CodeResult {
                code: 200,
                error_message: None,
            }
        );
    }

    #[test]
    fn decodes_error_message() {
        let parsed =
            decode_code_result(r#"{"code":1002,"errorMessage":"userId is required"}"#).unwrap();
        assert_eq!(parsed.code, 1002);
        assert_eq!(parsed.error_message.as_deref(), Some("userId is required"));
    }

    #[test]
    fn rejects_non_json() {
        assert!(decode_code_result("<html>bad gateway</html>").is_err());
    }
}
