//! Fixed user attributes stored alongside every plan.
//!
//! None of these values feed a computation today. They are recorded with each
//! plan so that later features can rely on them being present.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Biological sex used by common energy-expenditure formulas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {s}")),
        }
    }
}

/// User attributes captured with a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,

    /// Height in centimetres
    pub height_cm: f64,

    /// Activity multiplier (1.2 = sedentary)
    pub activity_level: f64,

    pub gender: Gender,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 25,
            height_cm: 171.0,
            activity_level: 1.2,
            gender: Gender::Male,
        }
    }
}
