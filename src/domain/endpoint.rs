use crate::domain::config::{Defaults, ResolvedOptions};
use crate::domain::validation::ValidationError;

/// Which base URL a call is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    /// Main server API; subject to failover.
    Api,
    /// SMS API; never switched.
    Sms,
}

/// Result of feeding one transport failure into [`EndpointState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FailoverOutcome {
    /// Threshold is zero, nothing was recorded.
    Disabled,
    /// Failure counted; `failures` is the new counter value.
    Counted { failures: u32 },
    /// The API base URL was toggled and the counter reset.
    Switched { from: String, to: String },
}

/// Active endpoints and consecutive-failure bookkeeping.
///
/// The API URL only ever moves between the configured URL and the two built-in hosts:
/// from the primary default it goes to the secondary default, from anywhere else it goes
/// back to the primary default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EndpointState {
    api_url: String,
    sms_url: String,
    failures: u32,
    threshold: u32,
    primary: &'static str,
    secondary: &'static str,
}

impl EndpointState {
    /// Counter value right after construction and after every switch.
    pub const INITIAL_FAILURES: u32 = 1;

    pub(crate) fn new(options: &ResolvedOptions, defaults: &Defaults) -> Self {
        Self {
            api_url: options.api_url.clone(),
            sms_url: options.sms_url.clone(),
            failures: Self::INITIAL_FAILURES,
            threshold: options.failover_threshold,
            primary: defaults.api_url,
            secondary: defaults.secondary_api_url,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn sms_url(&self) -> &str {
        &self.sms_url
    }

    pub fn url(&self, host: Host) -> &str {
        match host {
            Host::Api => &self.api_url,
            Host::Sms => &self.sms_url,
        }
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Set the failover threshold; `0` disables failover.
    ///
    /// Negative values are rejected and leave the state untouched.
    pub fn set_threshold(&mut self, threshold: i64) -> Result<(), ValidationError> {
        if threshold < 0 {
            return Err(ValidationError::NegativeThreshold { actual: threshold });
        }
        self.threshold = u32::try_from(threshold).unwrap_or(u32::MAX);
        Ok(())
    }

    /// Record one transport-level failure.
    pub fn record_transport_failure(&mut self) -> FailoverOutcome {
        if self.threshold == 0 {
            return FailoverOutcome::Disabled;
        }
        if self.failures >= self.threshold {
            let from = std::mem::take(&mut self.api_url);
            self.api_url = self.toggled(&from).to_owned();
            self.failures = Self::INITIAL_FAILURES;
            return FailoverOutcome::Switched {
                from,
                to: self.api_url.clone(),
            };
        }
        self.failures = self.failures.saturating_add(1);
        FailoverOutcome::Counted {
            failures: self.failures,
        }
    }

    fn toggled(&self, current: &str) -> &'static str {
        if current == self.primary {
            self.secondary
        } else {
            self.primary
        }
    }
}
