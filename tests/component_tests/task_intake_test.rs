#[cfg(test)]
mod tests {
    use ai_explorer_desk::components::task_intake::{
        validate_description, IntakeError, MIN_DESCRIPTION_LEN,
    };

    #[test]
    fn test_short_description_rejected() {
        // Under 10 characters must produce a warning, never a request
        let result = validate_description("too short");
        assert_eq!(result, Err(IntakeError::TooShort));
    }

    #[test]
    fn test_whitespace_does_not_count() {
        // Padding must not push a short description over the minimum
        let padded = format!("   short{}", " ".repeat(20));
        assert_eq!(validate_description(&padded), Err(IntakeError::TooShort));
        assert_eq!(validate_description("          "), Err(IntakeError::TooShort));
        assert_eq!(validate_description(""), Err(IntakeError::TooShort));
    }

    #[test]
    fn test_valid_description_is_trimmed() {
        let result = validate_description("  Write a 500-word blog on AI in healthcare  ");
        assert_eq!(
            result,
            Ok("Write a 500-word blog on AI in healthcare".to_string())
        );
    }

    #[test]
    fn test_minimum_length_boundary() {
        let exactly_min = "a".repeat(MIN_DESCRIPTION_LEN);
        assert_eq!(validate_description(&exactly_min), Ok(exactly_min.clone()));

        let one_under = "a".repeat(MIN_DESCRIPTION_LEN - 1);
        assert_eq!(validate_description(&one_under), Err(IntakeError::TooShort));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 10 multibyte characters are a valid description
        let description = "日本語のタスク説明文";
        assert_eq!(description.chars().count(), MIN_DESCRIPTION_LEN);
        assert!(validate_description(description).is_ok());
    }
}
