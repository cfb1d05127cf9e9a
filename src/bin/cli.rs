// src/bin/cli.rs
use attendance_hub::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
