//! Function registry: name-based lookup of scalar functions.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, warn};

use super::{AddAnyInts, CurrencyConvert, IntegerSum, ScalarFunction};
use crate::errors::{Error, Result};
use crate::fx::CurrencyRateTable;

/// Registry of scalar functions keyed by [`ScalarFunction::name`].
#[derive(Default, Clone)]
pub struct FunctionRegistry {
    functions: BTreeMap<&'static str, Arc<dyn ScalarFunction>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in functions.
    ///
    /// `currency_convert` shares `rate_table`; it is never copied or mutated.
    pub fn with_builtins(rate_table: Arc<CurrencyRateTable>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(IntegerSum));
        registry.register(Arc::new(AddAnyInts));
        registry.register(Arc::new(CurrencyConvert::new(rate_table)));
        registry
    }

    /// Register a function. A function with the same name is replaced.
    pub fn register(&mut self, function: Arc<dyn ScalarFunction>) {
        let name = function.name();
        if self.functions.insert(name, function).is_some() {
            warn!("Function '{}' was already registered, replacing it", name);
        } else {
            debug!("Registered function '{}'", name);
        }
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn ScalarFunction>> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownFunction(name.to_string()))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.functions.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
