//! Scalar functions, the block driver, and the function registry.
//!
//! Each function maps one input row to one output value and keeps no state
//! between rows. Two error policies coexist:
//!
//! - **Strict** (`integer_sum`, `add_any_ints`): invalid input fails the row,
//!   which aborts the block.
//! - **Lenient** (`currency_convert`, and `url_status` in the url-check crate):
//!   failures are replaced by a substitute value plus a diagnostic line.

mod add_any_ints;
mod block;
mod currency_convert;
mod functions_traits;
mod integer_sum;
mod registry;

pub use add_any_ints::{add_any_ints, AddAnyInts};
pub use block::{collect_block, process_block};
pub use currency_convert::CurrencyConvert;
pub use functions_traits::{BlockWriter, FnWriter, ScalarFunction};
pub use integer_sum::{integer_sum, IntegerSum};
pub use registry::FunctionRegistry;
