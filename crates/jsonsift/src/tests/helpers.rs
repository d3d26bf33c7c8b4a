//! Shared helpers for the crate-level tests.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use std::str::FromStr;

use crate::{
    JsonError, Number, ParseEvent, ParseOptions, StrSource, Value, basic_parse, parse,
};

pub fn events(input: &str, options: ParseOptions) -> Result<Vec<ParseEvent>, JsonError> {
    basic_parse(StrSource::new(input), options)?.collect()
}

pub fn tagged(
    input: &str,
    options: ParseOptions,
) -> Result<Vec<(String, ParseEvent)>, JsonError> {
    parse(StrSource::new(input), options)?.collect()
}

/// Converts a `serde_json` decode into our value model, for reference
/// comparisons. `serde_json` is built with `preserve_order`, so object order
/// survives.
pub fn from_reference(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::Number(Number::BigInt(BigInt::from(u)))
            } else {
                // The shortest round-trip rendering of the f64 recovers the
                // decimal digits.
                let text = n.to_string();
                Value::Number(Number::Decimal(
                    BigDecimal::from_str(&text).expect("reference number parses"),
                ))
            }
        }
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            Value::Array(items.iter().map(from_reference).collect())
        }
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_reference(v)))
                .collect(),
        ),
    }
}

/// A generated JSON document for property tests.
#[derive(Debug, Clone)]
pub struct ArbJson(pub Value);

/// Like [`ArbJson`] but with integer-only numbers, for properties that
/// compare against an `f64`-based reference decoder.
#[derive(Debug, Clone)]
pub struct ArbIntJson(pub Value);

fn small_string(g: &mut Gen) -> String {
    let s = String::arbitrary(g);
    s.chars().take(8).collect()
}

fn gen_number(g: &mut Gen) -> Number {
    if bool::arbitrary(g) {
        Number::Int(i64::arbitrary(g))
    } else {
        let mantissa = BigInt::from(i32::arbitrary(g));
        let scale = i64::from(u8::arbitrary(g) % 6);
        Number::Decimal(BigDecimal::new(mantissa, scale))
    }
}

fn gen_value(g: &mut Gen, depth: usize, int_only: bool) -> Value {
    let variants: u8 = if depth == 0 { 4 } else { 6 };
    match u8::arbitrary(g) % variants {
        0 => Value::Null,
        1 => Value::Boolean(bool::arbitrary(g)),
        2 => {
            if int_only {
                Value::from(i64::arbitrary(g))
            } else {
                Value::Number(gen_number(g))
            }
        }
        3 => Value::String(small_string(g)),
        4 => {
            let len = usize::arbitrary(g) % 4;
            Value::Array((0..len).map(|_| gen_value(g, depth - 1, int_only)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            Value::Object(
                (0..len)
                    .map(|_| (small_string(g), gen_value(g, depth - 1, int_only)))
                    .collect(),
            )
        }
    }
}

impl Arbitrary for ArbJson {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(gen_value(g, 3, false))
    }
}

impl Arbitrary for ArbIntJson {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(gen_value(g, 3, true))
    }
}
