//! Interactive options form.

mod input;
mod options;
mod text;

pub use text::print_help;

/// Run TUI interactive mode.
pub fn run() {
    options::run_form();
}
