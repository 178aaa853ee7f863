use std::fmt;

pub const DEFAULT_GEN_FOSSIL_BROWN_COAL: f64 = 582.0;
pub const DEFAULT_GEN_FOSSIL_GAS: f64 = 5537.0;
pub const DEFAULT_GEN_FOSSIL_HARD_COAL: f64 = 4039.0;
pub const DEFAULT_GEN_FOSSIL_OIL: f64 = 331.0;
pub const DEFAULT_GEN_HYDRO: f64 = 454.0;
pub const DEFAULT_GEN_OTHER_RENEWABLE: f64 = 97.0;
pub const DEFAULT_GEN_WIND_ONSHORE: f64 = 7556.0;
pub const DEFAULT_TOTAL_LOAD_ACTUAL: f64 = 31648.0;
pub const DEFAULT_PRICE: f64 = 40.61;
pub const DEFAULT_MAX_GEN_LEN: u32 = 1024;
pub const DEFAULT_TEMPERATURE: f64 = 0.0;

/// A numeric telemetry value that remembers whether it was supplied as an
/// integer, so `9000` renders as `9000` and `582.0` as `582.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Integer(i64),
    Decimal(f64),
}

impl Reading {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(v) => v as f64,
            Self::Decimal(v) => v,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(v) => v == 0,
            Self::Decimal(v) => v == 0.0,
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Decimal(v) => v.is_finite(),
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            // Debug keeps the trailing ".0" on whole decimals.
            Self::Decimal(v) => write!(f, "{:?}", v),
        }
    }
}

/// The complete field set consumed by prompt rendering. Every field is
/// populated; absent inputs have already been replaced by their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryInput {
    pub gen_fossil_brown_coal: Reading,
    pub gen_fossil_gas: Reading,
    pub gen_fossil_hard_coal: Reading,
    pub gen_fossil_oil: Reading,
    pub gen_hydro: Reading,
    pub gen_other_renewable: Reading,
    pub gen_wind_onshore: Reading,
    pub total_load_actual: Reading,
    pub price: Reading,
    pub max_gen_len: u32,
    pub temperature: f64,
}

impl Default for TelemetryInput {
    fn default() -> Self {
        Self {
            gen_fossil_brown_coal: DEFAULT_GEN_FOSSIL_BROWN_COAL.into(),
            gen_fossil_gas: DEFAULT_GEN_FOSSIL_GAS.into(),
            gen_fossil_hard_coal: DEFAULT_GEN_FOSSIL_HARD_COAL.into(),
            gen_fossil_oil: DEFAULT_GEN_FOSSIL_OIL.into(),
            gen_hydro: DEFAULT_GEN_HYDRO.into(),
            gen_other_renewable: DEFAULT_GEN_OTHER_RENEWABLE.into(),
            gen_wind_onshore: DEFAULT_GEN_WIND_ONSHORE.into(),
            total_load_actual: DEFAULT_TOTAL_LOAD_ACTUAL.into(),
            price: DEFAULT_PRICE.into(),
            max_gen_len: DEFAULT_MAX_GEN_LEN,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
