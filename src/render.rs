use crate::models::Prediction;

/// Shown in both the error and result regions when the service answered but
/// had no prediction for the name.
pub const NO_PREDICTION: &str = "There's not any prediction";

/// The three output regions of the form. Each render overwrites the region
/// it targets, so within a region the last write wins.
#[derive(Debug, Default, Clone)]
pub struct Regions {
    pub error: String,
    pub result: String,
    pub saved: String,
}

#[derive(Debug)]
pub enum Output {
    Error(String),
    ClearError,
    Prediction(Prediction),
    Saved(Option<String>),
}

/// Single funnel for display writes; handlers never touch the regions
/// directly.
pub fn render(regions: &mut Regions, output: Output) {
    match output {
        Output::Error(message) => regions.error = message,

        Output::ClearError => regions.error.clear(),

        Output::Prediction(prediction) => match prediction.gender {
            Some(gender) => {
                regions.result = format!("gender: {gender}\n\nprob: {}", prediction.probability);
            }
            None => {
                regions.error = NO_PREDICTION.to_string();
                regions.result = NO_PREDICTION.to_string();
            }
        },

        Output::Saved(record) => match record {
            Some(gender) => regions.saved = format!("saved gender: {gender}"),
            None => regions.saved.clear(),
        },
    }
}
