use serde::Deserialize;

use crate::domain::{Mobile, Region, SendCode, SendCodeResponse, TemplateId};

pub const SEND_CODE_PATH: &str = "sendCode.json";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendCodeJsonResponse {
    code: i32,
    session_id: String,
}

pub fn encode_send_code_form(request: &SendCode) -> Vec<(String, String)> {
    vec![
        (
            Mobile::FIELD.to_owned(),
            request.mobile().national().to_owned(),
        ),
        (
            TemplateId::FIELD.to_owned(),
            request.template_id().as_str().to_owned(),
        ),
        (Region::FIELD.to_owned(), request.region().as_str().to_owned()),
    ]
}

pub fn decode_send_code_json_response(json: &str) -> Result<SendCodeResponse, TransportError> {
    let parsed: SendCodeJsonResponse = serde_json::from_str(json)?;
    Ok(SendCodeResponse {
        code: parsed.code,
        session_id: parsed.session_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_send_code_form_params() {
        let region = Region::default();
        let request = SendCode::new(
            Mobile::parse(&region, "13800138000").unwrap(),
            TemplateId::new("tpl-1").unwrap(),
            region,
        );
        assert_eq!(
            encode_send_code_form(&request),
            vec![
                ("mobile".to_owned(), "13800138000".to_owned()),
                ("templateId".to_owned(), "tpl-1".to_owned()),
                ("region".to_owned(), "86".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_send_code_response() {
        let parsed =
            decode_send_code_json_response(r#"{"code":200,"sessionId":"s-42"}"#).unwrap();
        assert_eq!(parsed.code, 200);
        assert_eq!(parsed.session_id, "s-42");
    }
}
