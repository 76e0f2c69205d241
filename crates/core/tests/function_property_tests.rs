//! Property-based integration tests for the scalar functions.
//!
//! These tests verify that properties hold across generated inputs,
//! using the `proptest` crate for random test case generation.

use std::sync::Arc;

use proptest::prelude::*;
use rowfn_core::functions::{add_any_ints, collect_block, integer_sum, FunctionRegistry};
use rowfn_core::fx::{CurrencyConverter, CurrencyRateTable};
use rowfn_core::{MemoryDiagnosticSink, Row, RowError, Value};
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a currency code, mostly from the built-in table.
fn arb_currency() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("USD".to_string()),
        Just("EUR".to_string()),
        Just("GBP".to_string()),
        Just("INR".to_string()),
        Just("AUD".to_string()),
        Just("CAD".to_string()),
        Just("ZAR".to_string()),
        "[A-Z]{3}",
    ]
}

/// Generates an amount with two fractional digits up to 9999.99.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_integer_sum_matches_addition(
        a in -1_000_000_000i64..1_000_000_000,
        b in -1_000_000_000i64..1_000_000_000,
        gate in 100i64..i64::MAX,
    ) {
        prop_assert_eq!(integer_sum(Some(a), Some(b), Some(gate)), Ok(a + b));
        prop_assert_eq!(integer_sum(Some(b), Some(a), Some(gate)), Ok(a + b));
    }

    #[test]
    fn prop_integer_sum_rejects_low_gates(a in any::<i64>(), b in any::<i64>(), gate in i64::MIN..100) {
        prop_assert!(matches!(
            integer_sum(Some(a), Some(b), Some(gate)),
            Err(RowError::InvalidInput(_))
        ));
    }

    #[test]
    fn prop_add_any_ints_matches_iterator_sum(values in prop::collection::vec(-1_000_000i64..1_000_000, 1..20)) {
        let expected: i64 = values.iter().sum();
        prop_assert_eq!(
            add_any_ints(values.iter().copied().map(Some)),
            Ok(Some(expected))
        );
    }

    #[test]
    fn prop_conversion_is_deterministic(code in arb_currency(), amount in arb_amount()) {
        let converter = CurrencyConverter::default();
        let first = converter.convert(Some(&code), amount).unwrap();
        let second = converter.convert(Some(&code), amount).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_conversion_has_four_fractional_digits(code in arb_currency(), amount in arb_amount()) {
        let conversion = CurrencyConverter::default().convert(Some(&code), amount).unwrap();
        prop_assert_eq!(conversion.amount_usd.scale(), 4);
    }

    #[test]
    fn prop_fallback_only_for_unknown_codes(code in arb_currency(), amount in arb_amount()) {
        let table = CurrencyRateTable::default();
        let conversion = CurrencyConverter::default().convert(Some(&code), amount).unwrap();
        prop_assert_eq!(conversion.fallback, !table.contains(&code));
    }
}

#[tokio::test]
async fn test_currency_block_logs_one_line_per_unknown_code() {
    let registry = FunctionRegistry::with_builtins(Arc::new(CurrencyRateTable::default()));
    let function = registry.get("currency_convert").unwrap();
    let sink = MemoryDiagnosticSink::new();

    let rows = vec![
        Row::new(vec![Value::from("EUR"), Value::Numeric(Decimal::new(10000, 2))]),
        Row::new(vec![Value::from("XYZ"), Value::Numeric(Decimal::new(5000, 2))]),
        Row::new(vec![Value::from("USD"), Value::Numeric(Decimal::new(100, 2))]),
        Row::new(vec![Value::from("QQQ"), Value::Numeric(Decimal::new(1, 0))]),
    ];

    let values = collect_block(function.as_ref(), rows, &sink).await.unwrap();
    let rendered: Vec<String> = values.iter().map(Value::to_string).collect();

    assert_eq!(rendered, vec!["111.1395", "50.0000", "1.0000", "1.0000"]);
    // Banner plus one line per unknown code.
    assert_eq!(sink.len(), 3);
    assert!(sink.contains("XYZ"));
    assert!(sink.contains("QQQ"));
}

#[tokio::test]
async fn test_integer_sum_block_stops_at_null() {
    let registry = FunctionRegistry::with_builtins(Arc::new(CurrencyRateTable::default()));
    let function = registry.get("integer_sum").unwrap();
    let sink = MemoryDiagnosticSink::new();

    let rows = vec![
        Row::new(vec![Value::Int(5), Value::Int(7), Value::Int(100)]),
        Row::new(vec![Value::Null, Value::Int(7), Value::Int(100)]),
    ];

    let err = collect_block(function.as_ref(), rows, &sink).await.unwrap_err();
    assert_eq!(err.row_index(), Some(1));
    assert!(matches!(err.row_error(), Some(RowError::NullValue(_))));
}
