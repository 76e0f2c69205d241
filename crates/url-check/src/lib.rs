//! rowfn URL check
//!
//! The `url_status` scalar function: probes each URL over HTTP and writes the
//! status code, or `"Failed to load page"` when the page can't be loaded.
//!
//! Every request is bounded by a timeout, and the function pauses after each
//! request so a large block does not flood remote servers. Both are set
//! through [`UrlCheckConfig`].

pub mod checker;
pub mod config;
pub mod errors;
mod function;

pub use checker::{UrlChecker, UrlStatus, FAILURE_SENTINEL};
pub use config::{ProbeMethod, UrlCheckConfig};
pub use errors::ProbeFailure;
pub use function::UrlStatusFunction;
