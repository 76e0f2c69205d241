use std::io::{Read, Write};
use std::sync::Arc;

use anyhow::Context;
use rowfn_core::errors::Error;
use rowfn_core::functions::{process_block, BlockWriter, FunctionRegistry};
use rowfn_core::fx::CurrencyRateTable;
use rowfn_core::{LogDiagnosticSink, Row, Signature, Value};
use rowfn_url_check::UrlStatusFunction;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Logs go to stderr; stdout carries the output column.
pub fn init_tracing() {
    let log_format = std::env::var("ROWFN_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Builds the function registry: built-ins plus `url_status`.
pub fn build_registry(config: &Config) -> anyhow::Result<FunctionRegistry> {
    let rate_table = match &config.rates_file {
        Some(path) => CurrencyRateTable::from_path(path)
            .with_context(|| format!("loading rate table {}", path.display()))?,
        None => CurrencyRateTable::default(),
    };
    tracing::debug!(
        "Rate table: {}",
        rate_table.codes().collect::<Vec<_>>().join(", ")
    );

    let mut registry = FunctionRegistry::with_builtins(Arc::new(rate_table));
    registry.register(Arc::new(UrlStatusFunction::new(config.url_check_config())));
    Ok(registry)
}

/// Lazily parses CSV records into typed rows following a signature.
///
/// Iteration stops at the first record that fails to parse; the failure is
/// kept and can be taken with [`CsvRows::take_error`] once the block is done.
pub struct CsvRows<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    signature: Signature,
    index: usize,
    error: Option<Error>,
}

impl<R: Read> CsvRows<R> {
    pub fn new(input: R, has_headers: bool, signature: Signature) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(has_headers)
            .flexible(true)
            .from_reader(input);

        Self {
            records: reader.into_records(),
            signature,
            index: 0,
            error: None,
        }
    }

    /// Parse failure that ended iteration, if any.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    fn parse_record(&self, record: csv::Result<csv::StringRecord>) -> rowfn_core::Result<Row> {
        let index = self.index;
        let record = record.map_err(|e| Error::Config(format!("CSV record {}: {}", index, e)))?;
        let fields: Vec<&str> = record.iter().collect();
        self.signature
            .parse_row(&fields)
            .map_err(|source| Error::Row {
                index,
                function: "csv input".to_string(),
                source,
            })
    }
}

impl<R: Read> Iterator for CsvRows<R> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.error.is_some() {
            return None;
        }

        let record = self.records.next()?;
        let parsed = self.parse_record(record);
        self.index += 1;

        match parsed {
            Ok(row) => Some(row),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

/// Writes each output value as a one-field CSV record.
pub struct CsvBlockWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvBlockWriter<W> {
    pub fn new(output: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(output),
        }
    }

    pub fn write_header(&mut self, name: &str) -> rowfn_core::Result<()> {
        self.writer
            .write_record([name])
            .map_err(|e| Error::Output(e.to_string()))
    }

    pub fn finish(mut self) -> rowfn_core::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> BlockWriter for CsvBlockWriter<W> {
    fn write(&mut self, value: Value) -> rowfn_core::Result<()> {
        self.writer
            .write_record([value.to_string()])
            .map_err(|e| Error::Output(e.to_string()))
    }
}

/// Runs `function_name` over CSV `input` and writes the output column to
/// `output`. Returns the number of rows written.
pub async fn run_function<R, W>(
    registry: &FunctionRegistry,
    function_name: &str,
    has_headers: bool,
    input: R,
    output: W,
) -> anyhow::Result<usize>
where
    R: Read,
    W: Write + Send,
{
    let function = registry.get(function_name)?;
    let mut rows = CsvRows::new(input, has_headers, function.signature());
    tracing::info!("Running {}", function.name());

    let mut writer = CsvBlockWriter::new(output);
    if has_headers {
        writer.write_header(function.name())?;
    }

    let result = process_block(
        function.as_ref(),
        &mut rows,
        &LogDiagnosticSink,
        &mut writer,
    )
    .await;
    // Rows before a failure are already written; flush them either way.
    writer.finish()?;

    if let Some(e) = rows.take_error() {
        return Err(e.into());
    }
    Ok(result?)
}
