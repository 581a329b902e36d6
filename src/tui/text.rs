//! Menu and help text.

use crate::rand;
use crate::settings::Settings;
use crate::terminal::{RESET, UNDERLINE, box_bottom, box_line, box_opt, box_top, print_rule};

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Draw the options form.
pub fn print_form(settings: &Settings) {
    box_top("Options");
    box_line(&format!("  1) Length:             {}", settings.pass_length));
    box_line(&format!(
        "  2) Uppercase (A-Z):    {}",
        on_off(settings.include_uppercase)
    ));
    box_line(&format!(
        "  3) Lowercase (a-z):    {}",
        on_off(settings.include_lowercase)
    ));
    box_line(&format!(
        "  4) Numbers (0-9):      {}",
        on_off(settings.include_numbers)
    ));
    box_line(&format!(
        "  5) Symbols (!@#$...):  {}",
        on_off(settings.include_symbols)
    ));
    box_line(&format!(
        "  6) Passwords per run:  {}",
        settings.number_of_passwords
    ));
    print_rule();
    box_line("  [Enter] generate   [c] copy to clipboard");
    box_line("  [s] save options   [h] help   [q] quit");
    box_bottom();
}

pub fn print_help() {
    box_top("passmint");
    box_line("Password generator with a strength meter.");
    box_line("");
    box_line(&format!("{UNDERLINE}Usage{RESET}"));
    box_line("  passmint            interactive options form");
    box_line("  passmint [FLAGS]    one-shot generation");
    box_line("");
    box_line(&format!("{UNDERLINE}Flags{RESET}"));
    box_opt("  -l, --length N", "password length (default 10)");
    box_opt("  -n, --number N", "how many passwords to generate");
    box_opt("  --no-upper", "drop uppercase letters from the pool");
    box_opt("  --no-lower", "drop lowercase letters from the pool");
    box_opt("  --no-digits", "drop digits from the pool");
    box_opt("  --symbols", "add symbols to the pool");
    box_opt("  -b, --board", "copy result to clipboard instead of printing");
    box_opt("  -s, --saved", "start from saved options");
    box_opt("  -q, --quiet", "suppress warnings and confirmations");
    box_opt("  -h, --help", "show this help");
    box_opt("  -v, --version", "show version");
    box_line("");
    box_line(&format!("{UNDERLINE}Strength labels{RESET}"));
    box_line("  WEAK FAIR GOOD STRONG VERY STRONG EXCELLENT");
    box_line("  One point each: length >= 8, uppercase, lowercase,");
    box_line("  digit, symbol.");
    box_line("");
    box_line(&format!("Random source: {}", rand::entropy_source()));
    box_bottom();
}
