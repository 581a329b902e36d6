//! Password output.

use std::io::Write;

use zeroize::Zeroize;

use super::strength::{self, Strength};

/// Print passwords to stdout, one per line, wiping the line buffer after
/// each write.
pub fn print_to_terminal(passwords: &[String]) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut line: Vec<u8> = Vec::new();
    for pass in passwords {
        line.clear();
        line.extend_from_slice(pass.as_bytes());
        line.push(b'\n');
        let _ = out.write_all(&line);
        line.zeroize();
    }
    let _ = out.flush();
}

/// Weakest score across a batch. `None` for an empty batch.
pub fn weakest(passwords: &[String]) -> Option<Strength> {
    passwords.iter().map(|p| strength::score(p)).min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weakest_picks_the_lowest_label() {
        let batch = vec!["Ab3$defg".to_string(), "A".to_string()];
        assert_eq!(weakest(&batch), Some(Strength::Fair));
    }

    #[test]
    fn weakest_of_empty_batch_is_none() {
        assert_eq!(weakest(&[]), None);
    }
}
