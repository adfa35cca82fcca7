use std::time::Duration;

use crate::domain::validation::ValidationError;

/// Built-in endpoint and tuning constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    /// Primary public API host.
    pub api_url: &'static str,
    /// Secondary API host used after failover from the primary.
    pub secondary_api_url: &'static str,
    pub sms_url: &'static str,
    pub timeout: Duration,
    /// Consecutive transport failures tolerated before switching hosts.
    pub failover_threshold: u32,
}

pub const DEFAULTS: Defaults = Defaults {
    api_url: "http://api-cn.ronghub.com",
    secondary_api_url: "http://api2-cn.ronghub.com",
    sms_url: "http://api.sms.ronghub.com",
    timeout: Duration::from_secs(10),
    failover_threshold: 3,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Optional overrides applied on top of [`DEFAULTS`].
///
/// `api_url` and `sms_url` form a pair: if either one is empty, both fall back to the
/// defaults. A zero `timeout` means "use the default", and so does a missing
/// `failover_threshold`.
pub struct Options {
    pub api_url: String,
    pub sms_url: String,
    pub timeout: Duration,
    pub failover_threshold: Option<u32>,
}

/// Options after defaults were applied and URLs were validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedOptions {
    pub api_url: String,
    pub sms_url: String,
    pub timeout: Duration,
    pub failover_threshold: u32,
}

impl ResolvedOptions {
    pub(crate) fn from_defaults(defaults: &Defaults) -> Self {
        Self {
            api_url: defaults.api_url.to_owned(),
            sms_url: defaults.sms_url.to_owned(),
            timeout: defaults.timeout,
            failover_threshold: defaults.failover_threshold,
        }
    }
}

impl Options {
    pub(crate) fn resolve(
        options: Option<Options>,
        defaults: &Defaults,
    ) -> Result<ResolvedOptions, ValidationError> {
        let Some(options) = options else {
            return Ok(ResolvedOptions::from_defaults(defaults));
        };

        let timeout = if options.timeout.is_zero() {
            defaults.timeout
        } else {
            options.timeout
        };

        let api_url = options.api_url.trim();
        let sms_url = options.sms_url.trim();
        let (api_url, sms_url) = if api_url.is_empty() || sms_url.is_empty() {
            (defaults.api_url.to_owned(), defaults.sms_url.to_owned())
        } else {
            (
                normalize_base_url("api url", api_url)?,
                normalize_base_url("sms url", sms_url)?,
            )
        };

        Ok(ResolvedOptions {
            api_url,
            sms_url,
            timeout,
            failover_threshold: options
                .failover_threshold
                .unwrap_or(defaults.failover_threshold),
        })
    }
}

fn normalize_base_url(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidUrl {
        field,
        input: input.to_owned(),
    };
    let parsed = url::Url::parse(input).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        return Err(invalid());
    }
    Ok(input.trim_end_matches('/').to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_options_use_defaults() {
        let resolved = Options::resolve(None, &DEFAULTS).unwrap();
        assert_eq!(resolved.api_url, "http://api-cn.ronghub.com");
        assert_eq!(resolved.sms_url, "http://api.sms.ronghub.com");
        assert_eq!(resolved.timeout, Duration::from_secs(10));
        assert_eq!(resolved.failover_threshold, 3);
    }

    #[test]
    fn zero_timeout_is_filled_with_default() {
        let resolved = Options::resolve(
            Some(Options {
                failover_threshold: Some(5),
                ..Default::default()
            }),
            &DEFAULTS,
        )
        .unwrap();
        assert_eq!(resolved.timeout, DEFAULTS.timeout);
        assert_eq!(resolved.failover_threshold, 5);
    }

    #[test]
    fn single_url_override_resets_both_urls() {
        let resolved = Options::resolve(
            Some(Options {
                sms_url: "https://sms.example.invalid".to_owned(),
                timeout: Duration::from_secs(3),
                ..Default::default()
            }),
            &DEFAULTS,
        )
        .unwrap();
        assert_eq!(resolved.api_url, DEFAULTS.api_url);
        assert_eq!(resolved.sms_url, DEFAULTS.sms_url);
        assert_eq!(resolved.timeout, Duration::from_secs(3));

        let resolved = Options::resolve(
            Some(Options {
                api_url: "https://api.example.invalid".to_owned(),
                sms_url: "   ".to_owned(),
                ..Default::default()
            }),
            &DEFAULTS,
        )
        .unwrap();
        assert_eq!(resolved.api_url, DEFAULTS.api_url);
        assert_eq!(resolved.sms_url, DEFAULTS.sms_url);
    }

    #[test]
    fn url_pair_override_is_applied_and_trimmed() {
        let resolved = Options::resolve(
            Some(Options {
                api_url: "https://api.example.invalid/".to_owned(),
                sms_url: "https://sms.example.invalid".to_owned(),
                ..Default::default()
            }),
            &DEFAULTS,
        )
        .unwrap();
        assert_eq!(resolved.api_url, "https://api.example.invalid");
        assert_eq!(resolved.sms_url, "https://sms.example.invalid");
        assert_eq!(resolved.failover_threshold, DEFAULTS.failover_threshold);
    }

    #[test]
    fn malformed_urls_are_rejected() {
        let err = Options::resolve(
            Some(Options {
                api_url: "api.example.invalid".to_owned(),
                sms_url: "https://sms.example.invalid".to_owned(),
                ..Default::default()
            }),
            &DEFAULTS,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidUrl {
                field: "api url",
                ..
            }
        ));

        let err = Options::resolve(
            Some(Options {
                api_url: "https://api.example.invalid".to_owned(),
                sms_url: "ftp://sms.example.invalid".to_owned(),
                ..Default::default()
            }),
            &DEFAULTS,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidUrl {
                field: "sms url",
                ..
            }
        ));
    }
}
