use regex::Regex;

use crate::{
    error::ValidationError,
    models::{Gender, Selection},
};

pub const NAME_LIMIT: usize = 255;

/// Check a trimmed name against the form rules, first failure wins.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    if name.chars().count() > NAME_LIMIT {
        return Err(ValidationError::NameTooLong);
    }

    let letters_and_spaces = Regex::new(r"^[a-zA-Z\s]+$").unwrap();
    if !letters_and_spaces.is_match(name) {
        return Err(ValidationError::InvalidNameCharacters);
    }

    Ok(())
}

/// Pick the gender to persist: an explicit toggle wins, otherwise the last
/// prediction is used as the fallback.
pub fn resolve_gender(
    selection: Selection,
    last_prediction: Option<Gender>,
) -> Result<Gender, ValidationError> {
    if selection.male && selection.female {
        return Err(ValidationError::ConflictingGenders);
    }

    if selection.male {
        return Ok(Gender::Male);
    }

    if selection.female {
        return Ok(Gender::Female);
    }

    last_prediction.ok_or(ValidationError::MissingGender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Alex").is_ok());
        assert!(validate_name("Mary Jane").is_ok());
        assert!(validate_name("a").is_ok());
        assert!(validate_name(&"a".repeat(NAME_LIMIT)).is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            validate_name("").unwrap_err().to_string(),
            "Please provide name!"
        );
    }

    #[test]
    fn test_name_too_long() {
        assert_eq!(
            validate_name(&"a".repeat(NAME_LIMIT + 1)).unwrap_err().to_string(),
            "Name length exceeds 255 characters."
        );
    }

    #[test]
    fn test_length_checked_before_charset() {
        assert_eq!(
            validate_name(&"9".repeat(300)).unwrap_err(),
            ValidationError::NameTooLong
        );
    }

    #[test]
    fn test_invalid_characters() {
        let message = "Name should contain only letters (uppercase and lowercase) and spaces.";

        assert_eq!(validate_name("Alex99").unwrap_err().to_string(), message);
        assert_eq!(validate_name("O'Brien").unwrap_err().to_string(), message);
        assert_eq!(validate_name("Anne-Marie").unwrap_err().to_string(), message);
    }

    #[test]
    fn test_explicit_toggle_wins() {
        let male = Selection { male: true, female: false };
        let female = Selection { male: false, female: true };

        assert_eq!(resolve_gender(male, None), Ok(Gender::Male));
        assert_eq!(resolve_gender(female, Some(Gender::Male)), Ok(Gender::Female));
    }

    #[test]
    fn test_fallback_to_last_prediction() {
        assert_eq!(
            resolve_gender(Selection::default(), Some(Gender::Female)),
            Ok(Gender::Female)
        );
    }

    #[test]
    fn test_no_gender_available() {
        assert_eq!(
            resolve_gender(Selection::default(), None).unwrap_err().to_string(),
            "Please provide gender!"
        );
    }

    #[test]
    fn test_both_toggles_set() {
        let both = Selection { male: true, female: true };

        assert_eq!(
            resolve_gender(both, Some(Gender::Male)).unwrap_err().to_string(),
            "Gender cannot be both male and female!"
        );
    }
}
