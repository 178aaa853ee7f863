//! Turns a normalized [`TelemetryInput`] into prompt text.
//!
//! The wording is what the downstream models were tuned against, so any change
//! here changes generated output.

mod template;

use crate::{Error, telemetry::TelemetryInput};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use template::{
    ANALYSIS_INSTRUCTION, INDENT, NARRATIVE_HEADER, SOURCES, TABULAR_HEADER,
    TOTAL_LOAD_DESCRIPTION,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One annotated line per field followed by the observed price.
    #[default]
    Narrative,
    /// Labeled generation table, totals, forecast price and an analysis request.
    Tabular,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Narrative => "narrative",
            Self::Tabular => "tabular",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "narrative" => Ok(Self::Narrative),
            "tabular" => Ok(Self::Tabular),
            other => Err(Error::invalid_input(
                "render_mode",
                format!("unknown render mode '{}', expected narrative or tabular", other),
            )),
        }
    }
}

pub fn render(input: &TelemetryInput, mode: RenderMode) -> String {
    match mode {
        RenderMode::Narrative => render_narrative(input),
        RenderMode::Tabular => render_tabular(input),
    }
}

fn generation_values(input: &TelemetryInput) -> [String; 7] {
    [
        input.gen_fossil_brown_coal.to_string(),
        input.gen_fossil_gas.to_string(),
        input.gen_fossil_hard_coal.to_string(),
        input.gen_fossil_oil.to_string(),
        input.gen_hydro.to_string(),
        input.gen_other_renewable.to_string(),
        input.gen_wind_onshore.to_string(),
    ]
}

fn render_narrative(input: &TelemetryInput) -> String {
    let mut lines = vec![NARRATIVE_HEADER.to_string()];

    for (source, value) in SOURCES.iter().zip(generation_values(input)) {
        lines.push(format!(
            "{INDENT}- generation {}: {} {}",
            source.name, value, source.description
        ));
    }
    lines.push(format!(
        "{INDENT}- total load actual: {} {}",
        input.total_load_actual, TOTAL_LOAD_DESCRIPTION
    ));
    lines.push(format!(
        "{INDENT}Based on these parameters, the price of electricity (in EUR/MWh) is: {}.",
        input.price
    ));

    lines.join("\n")
}

fn render_tabular(input: &TelemetryInput) -> String {
    let mut lines = vec![TABULAR_HEADER.to_string(), String::new(), "Generation:".to_string()];

    for (source, value) in SOURCES.iter().zip(generation_values(input)) {
        lines.push(format!("Generation from {}: {} MW", source.name, value));
    }

    lines.push(String::new());
    lines.push("Totals:".to_string());
    lines.push(format!("Total actual load: {} MW", input.total_load_actual));
    lines.push(String::new());
    lines.push(format!("Forecast price: {} EUR/MWh", input.price));
    lines.push(String::new());
    lines.push(ANALYSIS_INSTRUCTION.to_string());

    lines.join("\n")
}
