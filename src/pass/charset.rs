//! Character pool building for password generation.

use crate::settings::Settings;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+[]{}|;:,.<>?";

/// Build the character pool from the enabled classes.
///
/// Classes are appended in fixed order (uppercase, lowercase, numbers,
/// symbols); an empty pool is returned as-is when every toggle is off.
pub fn build(settings: &Settings) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(size(settings));

    if settings.include_uppercase {
        chars.extend_from_slice(UPPERCASE);
    }
    if settings.include_lowercase {
        chars.extend_from_slice(LOWERCASE);
    }
    if settings.include_numbers {
        chars.extend_from_slice(NUMBERS);
    }
    if settings.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}

/// Pool size for the enabled classes, without building the pool.
pub fn size(settings: &Settings) -> usize {
    let mut size = 0;
    if settings.include_uppercase {
        size += UPPERCASE.len();
    }
    if settings.include_lowercase {
        size += LOWERCASE.len();
    }
    if settings.include_numbers {
        size += NUMBERS.len();
    }
    if settings.include_symbols {
        size += SYMBOLS.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(upper: bool, lower: bool, numbers: bool, symbols: bool) -> Settings {
        Settings {
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
            ..Settings::default()
        }
    }

    #[test]
    fn lowercase_and_numbers_concatenate_in_order() {
        let pool = build(&only(false, true, true, false));
        assert_eq!(pool, b"abcdefghijklmnopqrstuvwxyz0123456789");
    }

    #[test]
    fn all_classes_keep_fixed_order() {
        let pool = build(&only(true, true, true, true));
        let mut expected = Vec::new();
        expected.extend_from_slice(UPPERCASE);
        expected.extend_from_slice(LOWERCASE);
        expected.extend_from_slice(NUMBERS);
        expected.extend_from_slice(SYMBOLS);
        assert_eq!(pool, expected);
        assert_eq!(pool.len(), 26 + 26 + 10 + 24);
    }

    #[test]
    fn no_classes_yields_empty_pool() {
        assert!(build(&only(false, false, false, false)).is_empty());
        assert_eq!(size(&only(false, false, false, false)), 0);
    }

    #[test]
    fn size_matches_build() {
        for upper in [false, true] {
            for lower in [false, true] {
                for numbers in [false, true] {
                    for symbols in [false, true] {
                        let s = only(upper, lower, numbers, symbols);
                        assert_eq!(size(&s), build(&s).len());
                    }
                }
            }
        }
    }
}
