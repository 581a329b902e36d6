//! Generation options.

mod file;

/// The options form state: everything a single generation run reads.
///
/// Defaults mirror the initial form values: length 10, letters and digits
/// on, symbols off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 10,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
            number_of_passwords: 1,
            to_clipboard: false,
        }
    }
}
