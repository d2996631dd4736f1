mod app;
mod bootstrap;
mod clap_app;
mod directories;

use app::App;
use notbr::error::*;
use std::process;

fn run() -> Result<()> {
    App::new()?.start()
}

fn main() {
    if let Err(error) = run() {
        default_error_handler(&error, &mut std::io::stderr().lock());
        process::exit(1);
    }
}
