use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "male",
            Gender::Female => "female",
        })
    }
}

/// The two gender toggles of the form, independent on purpose so an
/// inconsistent pair can be rejected with its own message.
#[derive(Clone, Copy, Debug, Default)]
pub struct Selection {
    pub male: bool,
    pub female: bool,
}

/// Response body of the prediction service. `gender` is null or absent when
/// the service has no prediction for the name.
#[derive(Clone, Debug, Deserialize)]
pub struct Prediction {
    pub name: String,
    pub gender: Option<Gender>,

    #[serde(default)]
    pub probability: f64,
}
