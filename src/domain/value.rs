use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// RongCloud application key (`App-Key` header).
///
/// Invariant: non-empty after trimming and usable as an HTTP header value.
pub struct AppKey(String);

impl AppKey {
    /// Header/field name used by RongCloud.
    pub const FIELD: &'static str = "App-Key";

    /// Create a validated [`AppKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if http::HeaderValue::from_str(trimmed).is_err() {
            return Err(ValidationError::InvalidHeaderValue { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq)]
/// RongCloud application secret.
///
/// Only ever used as signature input; never sent over the wire. `Debug` output is redacted.
///
/// Invariant: must not be empty. Whitespace is kept, since every byte goes into the signature.
pub struct AppSecret(String);

impl AppSecret {
    pub const FIELD: &'static str = "appSecret";

    /// Create a validated [`AppSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Application credentials issued by RongCloud.
///
/// Immutable for the lifetime of a client.
pub struct Credentials {
    app_key: AppKey,
    app_secret: AppSecret,
}

impl Credentials {
    pub fn new(app_key: AppKey, app_secret: AppSecret) -> Self {
        Self {
            app_key,
            app_secret,
        }
    }

    /// Validate both parts and build [`Credentials`].
    pub fn parse(
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(AppKey::new(app_key)?, AppSecret::new(app_secret)?))
    }

    pub fn app_key(&self) -> &AppKey {
        &self.app_key
    }

    pub fn app_secret(&self) -> &AppSecret {
        &self.app_secret
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// RongCloud user id (`userId`).
///
/// Invariant: non-empty after trimming.
pub struct UserId(String);

impl UserId {
    pub const FIELD: &'static str = "userId";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Display name of a user (`name`).
///
/// Invariant: non-empty after trimming. The original value is preserved.
pub struct UserName(String);

impl UserName {
    pub const FIELD: &'static str = "name";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS template id configured in the RongCloud console (`templateId`).
///
/// Invariant: non-empty after trimming.
pub struct TemplateId(String);

impl TemplateId {
    pub const FIELD: &'static str = "templateId";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Country calling code without the leading `+` (`region`), e.g. `86`.
pub struct Region(String);

impl Region {
    pub const FIELD: &'static str = "region";

    /// Calling code used by RongCloud when none is given.
    pub const CHINA: &'static str = "86";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim().trim_start_matches('+');
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidRegion {
                input: value.trim().to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Region {
    fn default() -> Self {
        Self(Self::CHINA.to_owned())
    }
}

#[derive(Debug, Clone)]
/// Mobile number in national format, checked against its region calling code.
///
/// Equality is based on the E.164 form.
pub struct Mobile {
    national: String,
    e164: String,
}

impl Mobile {
    pub const FIELD: &'static str = "mobile";

    /// Parse `input` as a number within `region`.
    ///
    /// A leading `+<region>` prefix in the input is accepted and stripped.
    pub fn parse(region: &Region, input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let prefix = format!("+{}", region.as_str());
        let national = raw.strip_prefix(&prefix).unwrap_or(raw).trim().to_owned();

        let parsed = phonenumber::parse(None, format!("{prefix}{national}")).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            }
        })?;
        if !phonenumber::is_valid(&parsed) || parsed.code().value().to_string() != region.as_str()
        {
            return Err(ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            });
        }

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { national, e164 })
    }

    /// National number as sent in the `mobile` field.
    pub fn national(&self) -> &str {
        &self.national
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

impl PartialEq for Mobile {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for Mobile {}

impl std::hash::Hash for Mobile {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}
