//! Settings file persistence.
//!
//! Stores only the options form (length, class toggles, count); generated
//! passwords are never written anywhere.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = Path::new(&path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(serialize(settings).as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists() {
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !apply(settings, line.trim()) {
        // Unparseable or stale format: rewrite with current values
        save(settings)?;
    }

    Ok(())
}

fn serialize(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.include_uppercase,
        settings.include_lowercase,
        settings.include_numbers,
        settings.include_symbols,
        settings.number_of_passwords,
    )
}

fn apply(settings: &mut Settings, line: &str) -> bool {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 6 {
        return false;
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.include_uppercase = parts[1].parse().unwrap_or(settings.include_uppercase);
    settings.include_lowercase = parts[2].parse().unwrap_or(settings.include_lowercase);
    settings.include_numbers = parts[3].parse().unwrap_or(settings.include_numbers);
    settings.include_symbols = parts[4].parse().unwrap_or(settings.include_symbols);
    settings.number_of_passwords = parts[5].parse().unwrap_or(settings.number_of_passwords);
    true
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passmint/settings", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_text_form() {
        let settings = Settings {
            pass_length: 24,
            include_uppercase: false,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            number_of_passwords: 3,
            to_clipboard: false,
        };

        let mut loaded = Settings::default();
        assert!(apply(&mut loaded, serialize(&settings).trim()));
        assert_eq!(loaded, settings);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let mut settings = Settings::default();
        assert!(!apply(&mut settings, "10,true,true"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn bad_field_keeps_prior_value() {
        let mut settings = Settings::default();
        assert!(apply(&mut settings, "nope,false,true,true,false,2"));
        assert_eq!(settings.pass_length, Settings::default().pass_length);
        assert!(!settings.include_uppercase);
        assert_eq!(settings.number_of_passwords, 2);
    }
}
