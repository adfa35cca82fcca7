use url::Url;

use crate::domain::validation::ValidationError;
use crate::domain::value::{Mobile, Region, TemplateId, UserId, UserName};

#[derive(Debug, Clone)]
/// Register a user and obtain an IM token (`user/getToken`).
pub struct GetToken {
    user_id: UserId,
    name: UserName,
    portrait_uri: Option<Url>,
}

impl GetToken {
    pub const PORTRAIT_URI_FIELD: &'static str = "portraitUri";

    pub fn new(user_id: UserId, name: UserName) -> Self {
        Self {
            user_id,
            name,
            portrait_uri: None,
        }
    }

    /// Attach an avatar URL shown by RongCloud clients.
    pub fn with_portrait_uri(mut self, uri: impl AsRef<str>) -> Result<Self, ValidationError> {
        let uri = uri.as_ref().trim();
        let parsed = Url::parse(uri).map_err(|_| ValidationError::InvalidUrl {
            field: Self::PORTRAIT_URI_FIELD,
            input: uri.to_owned(),
        })?;
        self.portrait_uri = Some(parsed);
        Ok(self)
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn portrait_uri(&self) -> Option<&Url> {
        self.portrait_uri.as_ref()
    }
}

#[derive(Debug, Clone)]
/// Send a verification code through a console-configured template (`sendCode`).
pub struct SendCode {
    mobile: Mobile,
    template_id: TemplateId,
    region: Region,
}

impl SendCode {
    pub fn new(mobile: Mobile, template_id: TemplateId, region: Region) -> Self {
        Self {
            mobile,
            template_id,
            region,
        }
    }

    pub fn mobile(&self) -> &Mobile {
        &self.mobile
    }

    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }

    pub fn region(&self) -> &Region {
        &self.region
    }
}
