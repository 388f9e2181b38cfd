use std::env;

mod cli;
mod exits;
mod settings;
mod terminal;

fn main() {
    init_logger();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}

/// Logs go to stderr so stdout carries nothing but passwords.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
