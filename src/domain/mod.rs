//! Domain layer: strong types with validation and invariants (no I/O).

mod config;
mod endpoint;
mod request;
mod response;
mod validation;
mod value;

pub use config::{DEFAULTS, Defaults, Options};
pub(crate) use endpoint::{EndpointState, FailoverOutcome};
pub use endpoint::Host;
pub use request::{GetToken, SendCode};
pub use response::{SUCCESS_CODE, SendCodeResponse, TokenResponse};
pub use validation::ValidationError;
pub use value::{AppKey, AppSecret, Credentials, Mobile, Region, TemplateId, UserId, UserName};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_key_rejects_empty() {
        assert!(matches!(
            AppKey::new("   "),
            Err(ValidationError::Empty {
                field: AppKey::FIELD
            })
        ));
    }

    #[test]
    fn app_key_rejects_header_breaking_characters() {
        assert!(matches!(
            AppKey::new("key\nInjected: yes"),
            Err(ValidationError::InvalidHeaderValue {
                field: AppKey::FIELD
            })
        ));
    }

    #[test]
    fn app_key_is_trimmed() {
        assert_eq!(AppKey::new("  k3y ").unwrap().as_str(), "k3y");
    }

    #[test]
    fn app_secret_rejects_empty_and_redacts_debug() {
        assert!(AppSecret::new("").is_err());
        let secret = AppSecret::new("s3cr3t").unwrap();
        assert_eq!(secret.as_str(), "s3cr3t");
        assert!(!format!("{secret:?}").contains("s3cr3t"));

        let credentials = Credentials::parse("key", "s3cr3t").unwrap();
        assert!(!format!("{credentials:?}").contains("s3cr3t"));
        assert_eq!(credentials.app_key().as_str(), "key");
    }

    #[test]
    fn app_secret_keeps_surrounding_whitespace() {
        assert_eq!(AppSecret::new(" abc ").unwrap().as_str(), " abc ");
        assert_eq!(AppSecret::new("  ").unwrap().as_str(), "  ");
    }

    #[test]
    fn region_accepts_digits_with_optional_plus() {
        assert_eq!(Region::new("+86").unwrap().as_str(), "86");
        assert_eq!(Region::default().as_str(), "86");
        assert!(matches!(
            Region::new("CN"),
            Err(ValidationError::InvalidRegion { .. })
        ));
        assert!(Region::new(" ").is_err());
    }

    #[test]
    fn mobile_parses_within_region() {
        let region = Region::default();
        let mobile = Mobile::parse(&region, " 13800138000 ").unwrap();
        assert_eq!(mobile.national(), "13800138000");
        assert_eq!(mobile.e164(), "+8613800138000");

        let prefixed = Mobile::parse(&region, "+8613800138000").unwrap();
        assert_eq!(prefixed.national(), "13800138000");
        assert_eq!(prefixed, mobile);
    }

    #[test]
    fn mobile_rejects_garbage() {
        let region = Region::default();
        assert!(matches!(
            Mobile::parse(&region, "12"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(matches!(
            Mobile::parse(&region, ""),
            Err(ValidationError::Empty {
                field: Mobile::FIELD
            })
        ));
    }

    #[test]
    fn get_token_validates_portrait_uri() {
        let request = GetToken::new(
            UserId::new("u1").unwrap(),
            UserName::new("Alice").unwrap(),
        );
        assert!(request.portrait_uri().is_none());

        let request = request
            .with_portrait_uri("https://cdn.example.invalid/a.png")
            .unwrap();
        assert_eq!(
            request.portrait_uri().map(|it| it.as_str()),
            Some("https://cdn.example.invalid/a.png")
        );

        let err = GetToken::new(UserId::new("u1").unwrap(), UserName::new("A").unwrap())
            .with_portrait_uri("no scheme")
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl { .. }));
    }
}
