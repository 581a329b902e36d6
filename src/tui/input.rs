//! Raw-mode input helpers.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Read a single key event in raw mode.
pub fn read_key() -> Option<KeyEvent> {
    let _guard = RawModeGuard::new().ok()?;
    loop {
        match read() {
            Ok(Event::Key(key_event)) => {
                if key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    // process::exit skips destructors; leave the terminal sane first
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                return Some(key_event);
            }
            Err(_) => return None,
            _ => {}
        }
    }
}

/// Prompt for a number. Digits, backspace, Enter to accept, Esc to cancel.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let mut digits = initial_value.to_string();

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value),
    };

    print!("{}: {}", prompt, digits);
    flush();

    let mut cancelled = false;
    loop {
        match read() {
            Ok(Event::Key(key_event)) => match key_event.code {
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                KeyCode::Esc => {
                    cancelled = true;
                    break;
                }
                KeyCode::Enter => break,
                KeyCode::Backspace => {
                    digits.pop();
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    digits.push(c);
                }
                _ => {}
            },
            Err(_) => break,
            _ => {}
        }

        print!("\r\x1b[2K{}: {}", prompt, digits);
        flush();
    }

    drop(_guard);
    println!();

    if cancelled {
        None
    } else if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}
