mod clipboard;
mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use clipboard::export as export_to_clipboard;
pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Run CLI mode with the given arguments.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(msg) => {
            prompts::error(&msg);
            eprintln!("Try 'passmint --help' for usage.");
            std::process::exit(2);
        }
    };

    // Err(Done) is an early exit (help/version), not a failure
    let _ = ctx.run();
}
