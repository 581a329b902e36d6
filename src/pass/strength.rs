//! Password strength scoring.
//!
//! Five independent criteria, each worth one point: length of at least 8,
//! and presence of an uppercase letter, a lowercase letter, a digit, and a
//! symbol. The symbol criterion uses its own character set, distinct from
//! the generation alphabet.

/// Symbols counted by the scorer. Not the same set as `charset::SYMBOLS`.
const CRITERION_SYMBOLS: &[u8] = b"!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
    Excellent,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "WEAK",
            Strength::Fair => "FAIR",
            Strength::Good => "GOOD",
            Strength::Strong => "STRONG",
            Strength::VeryStrong => "VERY STRONG",
            Strength::Excellent => "EXCELLENT",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a password. Pure function of the text; the options that produced
/// it play no part.
pub fn score(password: &str) -> Strength {
    let mut points = 0u8;

    if password.len() >= 8 {
        points += 1;
    }
    if password.bytes().any(|b| b.is_ascii_uppercase()) {
        points += 1;
    }
    if password.bytes().any(|b| b.is_ascii_lowercase()) {
        points += 1;
    }
    if password.bytes().any(|b| b.is_ascii_digit()) {
        points += 1;
    }
    if password.bytes().any(|b| CRITERION_SYMBOLS.contains(&b)) {
        points += 1;
    }

    match points {
        0 => Strength::Weak,
        1 => Strength::Fair,
        2 => Strength::Good,
        3 => Strength::Strong,
        4 => Strength::VeryStrong,
        _ => Strength::Excellent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_weak() {
        assert_eq!(score(""), Strength::Weak);
    }

    #[test]
    fn single_uppercase_is_fair() {
        assert_eq!(score("A"), Strength::Fair);
    }

    #[test]
    fn two_criteria_is_good() {
        // uppercase + digit, short, no symbol
        assert_eq!(score("A1"), Strength::Good);
    }

    #[test]
    fn three_criteria_is_strong() {
        // uppercase + lowercase + digit, short
        assert_eq!(score("Ab1"), Strength::Strong);
    }

    #[test]
    fn four_criteria_is_very_strong() {
        // length 8 + uppercase + lowercase + digit, no scored symbol
        assert_eq!(score("Ab3defgh"), Strength::VeryStrong);
    }

    #[test]
    fn all_five_criteria_is_excellent() {
        assert_eq!(score("Ab3$defg"), Strength::Excellent);
    }

    #[test]
    fn scoring_is_deterministic() {
        for text in ["", "A", "xk9#mZ2q", "correct horse battery staple"] {
            assert_eq!(score(text), score(text));
        }
    }

    #[test]
    fn criterion_symbols_differ_from_generation_symbols() {
        // Underscore is generatable but not scored
        assert_eq!(score("_"), Strength::Weak);
        // Double quote is scored but not generatable
        assert_eq!(score("\""), Strength::Fair);
    }

    #[test]
    fn length_counts_without_any_class() {
        // Eight spaces: length criterion only
        assert_eq!(score("        "), Strength::Fair);
    }
}
