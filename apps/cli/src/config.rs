use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rowfn_url_check::{ProbeMethod, UrlCheckConfig};

/// Run a rowfn scalar function over CSV rows.
///
/// Each input record is one row. The function's output column is written to
/// stdout as CSV, one value per input row, in input order.
#[derive(Parser, Debug, Clone)]
#[command(name = "rowfn", version, about)]
pub struct Config {
    /// Function to run (see --list)
    #[arg(required_unless_present = "list")]
    pub function: Option<String>,

    /// CSV input file; reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Print the registered function names and exit
    #[arg(long)]
    pub list: bool,

    /// Treat the first input record as a header
    #[arg(long, env = "ROWFN_HAS_HEADERS")]
    pub has_headers: bool,

    /// JSON file of currency rates (units per 1 USD) replacing the built-in table
    #[arg(long, env = "ROWFN_RATES_FILE")]
    pub rates_file: Option<PathBuf>,

    /// Per-request timeout for url_status, in seconds
    #[arg(long, env = "ROWFN_URL_TIMEOUT_SECS", default_value_t = 30)]
    pub url_timeout_secs: u64,

    /// Pause after each url_status request, in milliseconds
    #[arg(long, env = "ROWFN_URL_PAUSE_MS", default_value_t = 2000)]
    pub url_pause_ms: u64,

    /// HTTP method used by url_status (get or head)
    #[arg(long, env = "ROWFN_URL_METHOD", default_value = "get")]
    pub url_method: ProbeMethod,
}

impl Config {
    /// Settings handed to the url_status function.
    pub fn url_check_config(&self) -> UrlCheckConfig {
        UrlCheckConfig {
            request_timeout: Duration::from_secs(self.url_timeout_secs),
            pause: Duration::from_millis(self.url_pause_ms),
            method: self.url_method,
            ..UrlCheckConfig::default()
        }
    }

    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["rowfn", "integer_sum"]).unwrap();
        assert_eq!(config.function.as_deref(), Some("integer_sum"));
        assert!(config.input_path().is_none());
        assert!(!config.has_headers);

        let url = config.url_check_config();
        assert_eq!(url.request_timeout, Duration::from_secs(30));
        assert_eq!(url.pause, Duration::from_secs(2));
        assert_eq!(url.method, ProbeMethod::Get);
    }

    #[test]
    fn test_url_flags() {
        let config = Config::try_parse_from([
            "rowfn",
            "url_status",
            "urls.csv",
            "--url-timeout-secs",
            "5",
            "--url-pause-ms",
            "0",
            "--url-method",
            "head",
        ])
        .unwrap();

        let url = config.url_check_config();
        assert_eq!(url.request_timeout, Duration::from_secs(5));
        assert!(url.pause.is_zero());
        assert_eq!(url.method, ProbeMethod::Head);
        assert_eq!(
            config.input_path().map(|p| p.to_string_lossy().into_owned()),
            Some("urls.csv".to_string())
        );
    }

    #[test]
    fn test_dash_means_stdin() {
        let config = Config::try_parse_from(["rowfn", "integer_sum", "-"]).unwrap();
        assert!(config.input_path().is_none());
    }

    #[test]
    fn test_function_required_unless_listing() {
        assert!(Config::try_parse_from(["rowfn"]).is_err());
        let config = Config::try_parse_from(["rowfn", "--list"]).unwrap();
        assert!(config.list);
    }
}
