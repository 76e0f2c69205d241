//! Diagnostic log sink used by scalar functions.

mod sink;

pub use sink::{
    DiagnosticSink, LogDiagnosticSink, MemoryDiagnosticSink, NoOpDiagnosticSink,
    DIAGNOSTIC_TARGET,
};
