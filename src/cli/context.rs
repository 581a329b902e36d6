//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::ClipboardContext;
use zeroize::Zeroize;

use super::{CliFlags, clipboard, prompts, quiet};
use crate::pass;
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passmint {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        if self.flags.no_upper {
            self.settings.include_uppercase = false;
        }
        if self.flags.no_lower {
            self.settings.include_lowercase = false;
        }
        if self.flags.no_digits {
            self.settings.include_numbers = false;
        }
        if self.flags.symbols {
            self.settings.include_symbols = true;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) {
        let count = self
            .flags
            .number
            .unwrap_or(self.settings.number_of_passwords.max(1));

        let mut passwords = match pass::generate_batch(&self.settings, count) {
            Ok(passwords) => passwords,
            Err(e) => {
                prompts::error(&format!("Cannot generate: {}", e));
                std::process::exit(1);
            }
        };

        if self.settings.to_clipboard {
            let mut joined = passwords.join("\n");
            if let Some(ctx) = self.clipboard.as_mut() {
                match clipboard::export(ctx, &joined) {
                    Ok(()) => prompts::clipboard_copied(),
                    Err(e) => {
                        prompts::clipboard_error(&e);
                        joined.zeroize();
                        wipe(&mut passwords);
                        std::process::exit(1);
                    }
                }
            }
            joined.zeroize();
        } else {
            pass::output::print_to_terminal(&passwords);
        }

        if let Some(label) = pass::output::weakest(&passwords) {
            prompts::strength(label, count > 1);
        }
        wipe(&mut passwords);
    }
}

fn wipe(passwords: &mut [String]) {
    for pass in passwords.iter_mut() {
        pass.zeroize();
    }
}
