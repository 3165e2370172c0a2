use std::process;

mod cli;
mod config;
mod image;
mod logging;
mod utils;

fn main() {
    if let Err(e) = cli::run() {
        logging::error(&e);
        process::exit(1);
    }
}
