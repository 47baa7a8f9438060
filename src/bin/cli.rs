// src/bin/cli.rs
use eponyms::cli;

fn main() -> color_eyre::Result<()> {
    // pretty panic reports; expected errors still exit plainly below
    color_eyre::install()?;

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}
