mod console;
mod context;
mod flags;
mod output;
mod parse;

pub use console::Console;
pub use context::{Context, Exit};
pub use flags::CliFlags;
pub use output::generate_batch;
pub use parse::{ParseError, parse};

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            console::error(format!("{e}. Run with --help for usage."));
            return 1;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Exit::Done) => 0,
        Err(Exit::Failed(msg)) => {
            console::error(msg);
            1
        }
    }
}
