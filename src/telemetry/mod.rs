mod types;

pub use types::*;

use crate::{Error, Result};
use serde_json::{Map, Number, Value};

/// Builds a complete [`TelemetryInput`] from a loosely typed JSON object.
///
/// A field that is missing, `null`, `false`, an empty string or numerically
/// zero takes its default. Numbers may also arrive as numeric strings.
/// Unknown keys are ignored.
pub fn normalize(fields: &Map<String, Value>) -> Result<TelemetryInput> {
    let defaults = TelemetryInput::default();

    Ok(TelemetryInput {
        gen_fossil_brown_coal: reading_or(fields, "gen_fossil_brown_coal", defaults.gen_fossil_brown_coal)?,
        gen_fossil_gas: reading_or(fields, "gen_fossil_gas", defaults.gen_fossil_gas)?,
        gen_fossil_hard_coal: reading_or(fields, "gen_fossil_hard_coal", defaults.gen_fossil_hard_coal)?,
        gen_fossil_oil: reading_or(fields, "gen_fossil_oil", defaults.gen_fossil_oil)?,
        gen_hydro: reading_or(fields, "gen_hydro", defaults.gen_hydro)?,
        gen_other_renewable: reading_or(fields, "gen_other_renewable", defaults.gen_other_renewable)?,
        gen_wind_onshore: reading_or(fields, "gen_wind_onshore", defaults.gen_wind_onshore)?,
        total_load_actual: reading_or(fields, "total_load_actual", defaults.total_load_actual)?,
        price: reading_or(fields, "price", defaults.price)?,
        max_gen_len: token_limit_or(fields, "max_gen_len", defaults.max_gen_len)?,
        temperature: reading_or(fields, "temperature", defaults.temperature.into())?.as_f64(),
    })
}

fn reading_or(fields: &Map<String, Value>, name: &str, default: Reading) -> Result<Reading> {
    Ok(supplied_reading(name, fields.get(name))?.unwrap_or(default))
}

fn token_limit_or(fields: &Map<String, Value>, name: &str, default: u32) -> Result<u32> {
    let Some(reading) = supplied_reading(name, fields.get(name))? else {
        return Ok(default);
    };

    match reading {
        Reading::Integer(v) => u32::try_from(v).map_err(|_| {
            Error::invalid_input(name, format!("expected a positive integer, got {}", v))
        }),
        Reading::Decimal(v) if v.fract() == 0.0 && v > 0.0 && v <= u32::MAX as f64 => Ok(v as u32),
        Reading::Decimal(v) => Err(Error::invalid_input(
            name,
            format!("expected a positive integer, got {:?}", v),
        )),
    }
}

/// `Ok(None)` means the field counts as absent and the default applies.
fn supplied_reading(name: &str, value: Option<&Value>) -> Result<Option<Reading>> {
    let reading = match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return Ok(None),
        Some(Value::Number(n)) => reading_from_number(n),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            parse_reading(trimmed).ok_or_else(|| {
                Error::invalid_input(name, format!("'{}' is not a number", s))
            })?
        }
        Some(other) => {
            return Err(Error::invalid_input(
                name,
                format!("expected a number, got {}", json_kind(other)),
            ));
        }
    };

    if !reading.is_finite() {
        return Err(Error::invalid_input(name, "must be a finite number"));
    }

    Ok((!reading.is_zero()).then_some(reading))
}

fn reading_from_number(n: &Number) -> Reading {
    match n.as_i64() {
        Some(v) => Reading::Integer(v),
        None => Reading::Decimal(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn parse_reading(raw: &str) -> Option<Reading> {
    raw.parse::<i64>()
        .map(Reading::Integer)
        .or_else(|_| raw.parse::<f64>().map(Reading::Decimal))
        .ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
