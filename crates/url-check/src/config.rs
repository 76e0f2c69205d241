use std::str::FromStr;
use std::time::Duration;

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default pause after each request, so large blocks don't flood servers.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(2);

/// Default User-Agent header sent with probes.
pub const DEFAULT_USER_AGENT: &str = concat!("rowfn-url-check/", env!("CARGO_PKG_VERSION"));

/// HTTP method used to probe a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMethod {
    #[default]
    Get,
    Head,
}

impl ProbeMethod {
    pub fn as_reqwest(&self) -> reqwest::Method {
        match self {
            ProbeMethod::Get => reqwest::Method::GET,
            ProbeMethod::Head => reqwest::Method::HEAD,
        }
    }
}

impl FromStr for ProbeMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(ProbeMethod::Get),
            "head" => Ok(ProbeMethod::Head),
            other => Err(format!("unsupported probe method '{}'", other)),
        }
    }
}

/// Settings for [`UrlChecker`](crate::UrlChecker) and the `url_status` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCheckConfig {
    /// Upper bound for a whole request, including redirects.
    pub request_timeout: Duration,
    /// Sleep after every issued request, before the next row.
    pub pause: Duration,
    pub method: ProbeMethod,
    pub user_agent: String,
    /// Honor HTTP(S)_PROXY from the environment.
    pub system_proxy: bool,
}

impl UrlCheckConfig {
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn with_method(mut self, method: ProbeMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }
}

impl Default for UrlCheckConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            pause: DEFAULT_PAUSE,
            method: ProbeMethod::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            system_proxy: true,
        }
    }
}
