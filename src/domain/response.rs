/// `code` value RongCloud returns for a successful call.
pub const SUCCESS_CODE: i32 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub code: i32,
    pub user_id: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendCodeResponse {
    pub code: i32,
    pub session_id: String,
}
