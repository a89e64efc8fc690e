use super::errors::StrengthError;

const MIN_LENGTH: usize = 6;

/// Check a plaintext secret against the strength policy.
///
/// The policy requires at least [`MIN_LENGTH`] characters, one digit,
/// one uppercase letter, and one punctuation/symbol character. Only
/// letters, digits, and punctuation/symbol characters are allowed;
/// whitespace and control characters reject the secret outright.
///
/// This is a pre-hash policy check and is independent of hashing.
pub fn validate_strength(secret: &str) -> Result<(), StrengthError> {
    let length = secret.chars().count();
    if length < MIN_LENGTH {
        return Err(StrengthError::TooShort {
            min: MIN_LENGTH,
            actual: length,
        });
    }

    let mut has_digit = false;
    let mut has_uppercase = false;
    let mut has_punctuation = false;

    for c in secret.chars() {
        if c.is_numeric() {
            has_digit = true;
        } else if c.is_alphabetic() {
            if c.is_uppercase() {
                has_uppercase = true;
            }
        } else if c.is_whitespace() || c.is_control() {
            return Err(StrengthError::DisallowedCharacter);
        } else {
            // Anything printable that is neither a letter nor a digit
            // counts as punctuation/symbol
            has_punctuation = true;
        }
    }

    if !has_digit {
        return Err(StrengthError::MissingDigit);
    }
    if !has_uppercase {
        return Err(StrengthError::MissingUppercase);
    }
    if !has_punctuation {
        return Err(StrengthError::MissingPunctuation);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_strong_secret() {
        assert_eq!(validate_strength("Abc123!"), Ok(()));
    }

    #[test]
    fn test_rejects_short_secret() {
        assert_eq!(
            validate_strength("Ab1!"),
            Err(StrengthError::TooShort { min: 6, actual: 4 })
        );
    }

    #[test]
    fn test_rejects_all_lowercase() {
        assert_eq!(
            validate_strength("abcdefg"),
            Err(StrengthError::MissingDigit)
        );
    }

    #[test]
    fn test_rejects_missing_digit() {
        assert_eq!(
            validate_strength("Abcdef!"),
            Err(StrengthError::MissingDigit)
        );
    }

    #[test]
    fn test_rejects_missing_uppercase() {
        assert_eq!(
            validate_strength("abc123!"),
            Err(StrengthError::MissingUppercase)
        );
    }

    #[test]
    fn test_rejects_missing_punctuation() {
        assert_eq!(
            validate_strength("Abc1234"),
            Err(StrengthError::MissingPunctuation)
        );
    }

    #[test]
    fn test_rejects_whitespace() {
        assert_eq!(
            validate_strength("Abc 123!"),
            Err(StrengthError::DisallowedCharacter)
        );
    }
}
