//! Interactive options form loop.

use copypasta::ClipboardContext;
use crossterm::event::KeyCode;
use zeroize::Zeroize;

use crate::cli::export_to_clipboard;
use crate::pass;
use crate::settings::Settings;
use crate::terminal::{
    RED, RESET, box_bottom, box_line, box_top, clear, flush, reset_terminal,
};

use super::input::{get_numeric_input, read_key};
use super::text::{print_form, print_help};

enum Status {
    Idle,
    Info(String),
    Error(String),
}

/// Run the options form until the user quits.
pub fn run_form() {
    reset_terminal();
    clear();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        println!("Error loading settings: {}", e);
        Settings::default()
    });

    let mut results: Vec<String> = Vec::new();
    let mut status = Status::Idle;

    loop {
        clear();
        print_form(&settings);
        print_results(&results);
        print_status(&status);

        let Some(key) = read_key() else { break };
        status = Status::Idle;

        match key.code {
            KeyCode::Enter => {
                let outcome = if settings.number_of_passwords == 1 {
                    pass::generate(&settings).map(|p| vec![p])
                } else {
                    pass::generate_batch(&settings, settings.number_of_passwords)
                };
                match outcome {
                    Ok(passwords) => {
                        wipe(&mut results);
                        results = passwords;
                    }
                    Err(e) => status = Status::Error(format!("Cannot generate: {}", e)),
                }
            }
            KeyCode::Char('1') | KeyCode::Char('l') => {
                println!();
                if let Some(len) = get_numeric_input("Password length", settings.pass_length) {
                    settings.pass_length = len;
                }
            }
            KeyCode::Char('2') => settings.include_uppercase = !settings.include_uppercase,
            KeyCode::Char('3') => settings.include_lowercase = !settings.include_lowercase,
            KeyCode::Char('4') => settings.include_numbers = !settings.include_numbers,
            KeyCode::Char('5') => settings.include_symbols = !settings.include_symbols,
            KeyCode::Char('6') | KeyCode::Char('n') => {
                println!();
                if let Some(num) =
                    get_numeric_input("Passwords per run", settings.number_of_passwords)
                {
                    settings.number_of_passwords = num.max(1);
                }
            }
            KeyCode::Char('c') => status = copy_results(&results),
            KeyCode::Char('s') => {
                status = match settings.save_to_file() {
                    Ok(()) => Status::Info("Options saved.".to_string()),
                    Err(e) => Status::Error(format!("Error saving options: {}", e)),
                }
            }
            KeyCode::Char('h') => {
                clear();
                print_help();
                println!();
                println!("Press any key to return.");
                flush();
                if read_key().is_none() {
                    break;
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => break,
            _ => {}
        }
    }

    wipe(&mut results);
    clear();
    reset_terminal();
}

fn print_results(results: &[String]) {
    if results.is_empty() {
        return;
    }

    println!();
    box_top("Result");
    for pass in results {
        box_line(pass);
    }
    if let Some(label) = pass::output::weakest(results) {
        if results.len() > 1 {
            box_line(&format!("Weakest strength: {}", label));
        } else {
            box_line(&format!("Strength: {}", label));
        }
    }
    box_bottom();
}

fn print_status(status: &Status) {
    match status {
        Status::Idle => {}
        Status::Info(msg) => {
            println!();
            println!("{}", msg);
        }
        Status::Error(msg) => {
            println!();
            println!("{RED}{msg}{RESET}");
        }
    }
}

/// Copy the last generation to the clipboard: one export call, success and
/// failure reported distinctly.
fn copy_results(results: &[String]) -> Status {
    if results.is_empty() {
        return Status::Error("Nothing to copy: generate a password first.".to_string());
    }

    let mut ctx = match ClipboardContext::new() {
        Ok(ctx) => ctx,
        Err(e) => return Status::Error(format!("Clipboard unavailable: {}", e)),
    };

    let mut joined = results.join("\n");
    let status = match export_to_clipboard(&mut ctx, &joined) {
        Ok(()) => Status::Info("Copied to clipboard.".to_string()),
        Err(e) => Status::Error(format!("Clipboard error: {}", e)),
    };
    joined.zeroize();
    status
}

fn wipe(results: &mut Vec<String>) {
    for pass in results.iter_mut() {
        pass.zeroize();
    }
    results.clear();
}
