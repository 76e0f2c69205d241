use async_trait::async_trait;
use log::debug;
use rowfn_core::rows::{ColumnType, Row, RowError, Signature, Value};
use rowfn_core::{DiagnosticSink, ScalarFunction};

use crate::checker::{UrlChecker, UrlStatus, FAILURE_SENTINEL};
use crate::config::UrlCheckConfig;

/// `url_status(VARCHAR url) -> VARCHAR`
///
/// Writes the HTTP status code of each URL, or the failure sentinel. Never
/// fails a row. After every request that reached the network the function
/// sleeps for the configured pause before returning, so consecutive rows
/// are spaced out.
pub struct UrlStatusFunction {
    checker: UrlChecker,
}

impl UrlStatusFunction {
    pub fn new(config: UrlCheckConfig) -> Self {
        Self {
            checker: UrlChecker::new(config),
        }
    }

    pub fn checker(&self) -> &UrlChecker {
        &self.checker
    }
}

impl Default for UrlStatusFunction {
    fn default() -> Self {
        Self::new(UrlCheckConfig::default())
    }
}

#[async_trait]
impl ScalarFunction for UrlStatusFunction {
    fn name(&self) -> &'static str {
        "url_status"
    }

    fn signature(&self) -> Signature {
        Signature::fixed(vec![ColumnType::Varchar], ColumnType::Varchar)
    }

    fn banner(&self) -> String {
        "url_status - validating URL accessibility".to_string()
    }

    async fn process_row(&self, row: &Row, sink: &dyn DiagnosticSink) -> Result<Value, RowError> {
        let Some(url) = row.get_varchar(0)? else {
            sink.log("NULL URL, failed to load page");
            return Ok(Value::Varchar(FAILURE_SENTINEL.to_string()));
        };

        let status = self.checker.check(url).await;
        if let UrlStatus::Failed(failure) = &status {
            sink.log(&format!("{}: {}", url, failure));
        }

        let pause = self.checker.config().pause;
        if status.request_issued() && !pause.is_zero() {
            debug!("Pausing {:?} after request to {}", pause, url);
            tokio::time::sleep(pause).await;
        }

        Ok(Value::Varchar(status.to_string()))
    }
}
