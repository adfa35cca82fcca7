//! Transport layer: request signing, headers and wire-format details.

mod code;
mod headers;
mod send_code;
mod signature;
mod user_token;

pub use code::{CodeResult, decode_code_result};
pub use headers::{
    APP_KEY, DEFAULT_USER_AGENT, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE, NONCE, SIGNATURE,
    TIMESTAMP, fill_json_content_type, fill_signed_headers,
};
pub use send_code::{SEND_CODE_PATH, decode_send_code_json_response, encode_send_code_form};
pub use signature::Signature;
pub use user_token::{GET_TOKEN_PATH, decode_get_token_json_response, encode_get_token_form};
