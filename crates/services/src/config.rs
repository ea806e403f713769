use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::error::ServiceError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Route layout of the quiz backend.
///
/// The local development server mounts its handlers under feature prefixes,
/// the hosted deployment serves every function under `/api`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiStyle {
    #[default]
    Dev,
    Hosted,
}

impl ApiStyle {
    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            ApiStyle::Dev => "/auth/login",
            ApiStyle::Hosted => "/api/login",
        }
    }

    #[must_use]
    pub fn questions_path(self) -> &'static str {
        match self {
            ApiStyle::Dev => "/quiz/unified",
            ApiStyle::Hosted => "/api/quiz",
        }
    }

    #[must_use]
    pub fn submit_path(self) -> &'static str {
        match self {
            ApiStyle::Dev => "/quiz/submit",
            ApiStyle::Hosted => "/api/submit",
        }
    }
}

impl FromStr for ApiStyle {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "local" => Ok(ApiStyle::Dev),
            "hosted" | "api" => Ok(ApiStyle::Hosted),
            other => Err(ServiceError::InvalidConfig(format!(
                "unknown api style {other:?} (expected dev or hosted)"
            ))),
        }
    }
}

impl fmt::Display for ApiStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiStyle::Dev => f.write_str("dev"),
            ApiStyle::Hosted => f.write_str("hosted"),
        }
    }
}

/// Where and how to reach the quiz backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizApiConfig {
    base_url: Url,
    style: ApiStyle,
    timeout: Duration,
}

impl QuizApiConfig {
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidUrl` if `base_url` does not parse, or
    /// `ServiceError::InvalidConfig` if it cannot serve as a base.
    pub fn new(base_url: &str, style: ApiStyle) -> Result<Self, ServiceError> {
        let base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(ServiceError::InvalidConfig(format!(
                "{base_url} cannot be used as a base url"
            )));
        }
        Ok(Self {
            base_url,
            style,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }

    /// Read `QUIZ_API_URL`, `QUIZ_API_STYLE` and `QUIZ_HTTP_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_env_with_url(None)
    }

    /// Like [`Self::from_env`], but `base_url` replaces `QUIZ_API_URL` when
    /// given, so a malformed variable is never parsed.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` when the url or a remaining variable is malformed.
    pub fn from_env_with_url(base_url: Option<&str>) -> Result<Self, ServiceError> {
        Self::from_lookup(base_url, |key| env::var(key).ok())
    }

    fn from_lookup(
        base_url: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ServiceError> {
        let base_url = match base_url {
            Some(url) => url.to_string(),
            None => lookup("QUIZ_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into()),
        };
        let style = match lookup("QUIZ_API_STYLE") {
            Some(raw) => raw.parse()?,
            None => ApiStyle::default(),
        };
        let config = Self::new(&base_url, style)?;
        match lookup("QUIZ_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    ServiceError::InvalidConfig(format!("invalid QUIZ_HTTP_TIMEOUT_SECS: {raw}"))
                })?;
                Ok(config.with_timeout(Duration::from_secs(secs)))
            }
            None => Ok(config),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ApiStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn style(&self) -> ApiStyle {
        self.style
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// # Errors
    ///
    /// Returns `ServiceError::InvalidUrl` if the path cannot be joined.
    pub fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        Ok(self.base_url.join(path)?)
    }
}
