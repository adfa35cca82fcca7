//! Typed Rust client core for the RongCloud server HTTP API.
//!
//! Every request is signed with the application secret (`SHA-1(secret + nonce + timestamp)`)
//! and stamped with the `App-Key`, `Nonce`, `Timestamp` and `Signature` headers. Repeated
//! transport failures move the client between the primary and secondary API hosts.
//!
//! ```rust,no_run
//! use rongcloud::{GetToken, RongCloud, UserId, UserName};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rongcloud::RongCloudError> {
//!     let client = RongCloud::new("app-key", "app-secret", None)?;
//!     let request = GetToken::new(UserId::new("user-1")?, UserName::new("Alice")?);
//!     let token = client.get_token(request).await?;
//!     println!("{}", token.token);
//!     Ok(())
//! }
//! ```
//!
//! Callers with their own HTTP stack can use [`RongCloud::fill_header`],
//! [`fill_json_header`] and [`RongCloud::observe_error`] directly.
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{RongCloud, RongCloudBuilder, RongCloudError, fill_json_header};
pub use domain::{
    AppKey, AppSecret, Credentials, DEFAULTS, Defaults, GetToken, Host, Mobile, Options, Region,
    SUCCESS_CODE, SendCode, SendCodeResponse, TemplateId, TokenResponse, UserId, UserName,
    ValidationError,
};
pub use transport::{
    APP_KEY, CodeResult, DEFAULT_USER_AGENT, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE, NONCE,
    SIGNATURE, Signature, TIMESTAMP,
};
