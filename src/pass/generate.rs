//! Password generation.

use super::charset;
use crate::rand::Rand;
use crate::settings::Settings;

#[derive(Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// Every class toggle is off: the pool is empty and indexing it would
    /// be undefined.
    NoClassesSelected,
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::NoClassesSelected => write!(f, "no character classes selected"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generate a single password from the options form.
pub fn generate(settings: &Settings) -> Result<String, GenerateError> {
    let chars = charset::build(settings);
    generate_from_charset(&chars, settings.pass_length)
}

/// Generate `count` passwords, each drawn independently.
pub fn generate_batch(settings: &Settings, count: usize) -> Result<Vec<String>, GenerateError> {
    let chars = charset::build(settings);
    if chars.is_empty() && settings.pass_length > 0 && count > 0 {
        return Err(GenerateError::NoClassesSelected);
    }

    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(generate_from_charset(&chars, settings.pass_length)?);
    }
    Ok(passwords)
}

/// Draw `length` uniform samples from a pre-built pool.
///
/// Length 0 yields the empty password even when the pool is empty; a
/// non-zero length against an empty pool is the no-classes failure.
pub fn generate_from_charset(chars: &[u8], length: usize) -> Result<String, GenerateError> {
    if length == 0 {
        return Ok(String::new());
    }
    if chars.is_empty() {
        return Err(GenerateError::NoClassesSelected);
    }

    let bytes: Vec<u8> = (0..length).map(|_| chars[Rand::below(chars.len())]).collect();
    // Pool is ASCII by construction
    unsafe { Ok(String::from_utf8_unchecked(bytes)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_membership_hold() {
        let settings = Settings {
            pass_length: 32,
            include_symbols: true,
            ..Settings::default()
        };
        let pool = charset::build(&settings);

        for _ in 0..50 {
            let pass = generate(&settings).unwrap();
            assert_eq!(pass.len(), 32);
            assert!(pass.bytes().all(|b| pool.contains(&b)));
        }
    }

    #[test]
    fn single_class_draws_only_that_class() {
        let settings = Settings {
            pass_length: 64,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: true,
            include_symbols: false,
            ..Settings::default()
        };
        let pass = generate(&settings).unwrap();
        assert!(pass.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn zero_length_is_empty_regardless_of_pool() {
        let mut settings = Settings {
            pass_length: 0,
            ..Settings::default()
        };
        assert_eq!(generate(&settings).unwrap(), "");

        settings.include_uppercase = false;
        settings.include_lowercase = false;
        settings.include_numbers = false;
        settings.include_symbols = false;
        assert_eq!(generate(&settings).unwrap(), "");
    }

    #[test]
    fn empty_pool_reports_no_classes() {
        let settings = Settings {
            pass_length: 5,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Settings::default()
        };
        assert_eq!(generate(&settings), Err(GenerateError::NoClassesSelected));
        assert_eq!(
            generate_batch(&settings, 3),
            Err(GenerateError::NoClassesSelected)
        );
    }

    #[test]
    fn batch_produces_requested_count() {
        let settings = Settings::default();
        let batch = generate_batch(&settings, 7).unwrap();
        assert_eq!(batch.len(), 7);
        for pass in &batch {
            assert_eq!(pass.len(), settings.pass_length);
        }
    }

    #[test]
    fn no_classes_message_names_the_condition() {
        assert_eq!(
            GenerateError::NoClassesSelected.to_string(),
            "no character classes selected"
        );
    }
}
