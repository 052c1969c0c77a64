use thiserror::Error;

/// Rejections produced while checking form input. The display strings are
/// the exact messages shown in the error region.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide name!")]
    MissingName,

    #[error("Name length exceeds 255 characters.")]
    NameTooLong,

    #[error("Name should contain only letters (uppercase and lowercase) and spaces.")]
    InvalidNameCharacters,

    #[error("Please provide gender!")]
    MissingGender,

    #[error("Gender cannot be both male and female!")]
    ConflictingGenders,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network response was not ok")]
    BadStatus,

    #[error("Fetch error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Format(#[from] serde_json::Error),
}
