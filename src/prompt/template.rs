pub const INDENT: &str = "        ";

pub const NARRATIVE_HEADER: &str = "Generate a report on the electricity usage and pricing based on the following information entered by the user:";

pub const TABULAR_HEADER: &str = "Electricity grid snapshot entered by the user:";

pub const ANALYSIS_INSTRUCTION: &str =
    "Write a short analysis of the electricity usage and pricing based on the data above.";

pub const TOTAL_LOAD_DESCRIPTION: &str = "This column represents the total electricity demand or consumption at a given time, measured in megawatts (MW).";

pub struct GenerationSource {
    pub name: &'static str,
    pub description: &'static str,
}

/// Generation sources in prompt order.
pub const SOURCES: [GenerationSource; 7] = [
    GenerationSource {
        name: "fossil brown coal/lignite",
        description: "This column represents the amount of electricity generated from burning brown coal or lignite, measured in megawatts (MW).",
    },
    GenerationSource {
        name: "fossil gas",
        description: "This column represents the amount of electricity generated from burning natural gas, measured in megawatts (MW).",
    },
    GenerationSource {
        name: "fossil hard coal",
        description: "This column represents the amount of electricity generated from burning hard coal, also known as anthracite or bituminous coal, measured in megawatts (MW).",
    },
    GenerationSource {
        name: "fossil oil",
        description: "This column represents the amount of electricity generated from burning oil or petroleum, measured in megawatts (MW).",
    },
    GenerationSource {
        name: "hydro pumped storage consumption",
        description: "This column represents the amount of electricity generated from pumped storage hydroelectric power plants, measured in megawatts (MW).",
    },
    GenerationSource {
        name: "other renewable",
        description: "This column represents the amount of electricity generated from other renewable energy sources, such as solar, biomass, geothermal, or tidal energy, measured in megawatts (MW).",
    },
    GenerationSource {
        name: "wind onshore",
        description: "This column represents the amount of electricity generated from onshore wind turbines, measured in megawatts (MW).",
    },
];
