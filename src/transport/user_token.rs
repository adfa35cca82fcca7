use serde::Deserialize;

use crate::domain::{GetToken, TokenResponse, UserId, UserName};

pub const GET_TOKEN_PATH: &str = "user/getToken.json";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenJsonResponse {
    code: i32,
    user_id: String,
    token: String,
}

pub fn encode_get_token_form(request: &GetToken) -> Vec<(String, String)> {
    let mut params = vec![
        (
            UserId::FIELD.to_owned(),
            request.user_id().as_str().to_owned(),
        ),
        (UserName::FIELD.to_owned(), request.name().as_str().to_owned()),
    ];
    if let Some(uri) = request.portrait_uri() {
        params.push((GetToken::PORTRAIT_URI_FIELD.to_owned(), uri.to_string()));
    }
    params
}

pub fn decode_get_token_json_response(json: &str) -> Result<TokenResponse, TransportError> {
    let parsed: TokenJsonResponse = serde_json::from_str(json)?;
    Ok(TokenResponse {
        code: parsed.code,
        user_id: parsed.user_id,
        token: parsed.token,
    })
}
