use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for asset file names: a single path segment
    /// - Valid: "cot.jpg", "pram 2.png", "teddy-bear_01.webp"
    /// - Invalid: "images/cot.jpg", "..\\cot.jpg", ""
    pub static ref FILE_NAME_REGEX: Regex = Regex::new(r"^[^/\\]+$").unwrap();
}

/// Rejects strings that are empty or whitespace only
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_regex_valid() {
        assert!(FILE_NAME_REGEX.is_match("cot.jpg"));
        assert!(FILE_NAME_REGEX.is_match("pram 2.png"));
        assert!(FILE_NAME_REGEX.is_match("teddy-bear_01.webp"));
        assert!(FILE_NAME_REGEX.is_match("no-extension"));
    }

    #[test]
    fn test_file_name_regex_invalid() {
        assert!(!FILE_NAME_REGEX.is_match("images/cot.jpg")); // forward slash
        assert!(!FILE_NAME_REGEX.is_match("..\\cot.jpg")); // backslash
        assert!(!FILE_NAME_REGEX.is_match("/cot.jpg")); // absolute path
        assert!(!FILE_NAME_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Toys").is_ok());
        assert!(validate_not_blank(" a ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   \t").is_err());
    }
}
