// src/cli.rs
use std::env;
use std::error::Error;

use crate::config::regions;
use crate::runner;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let cmd = match args.next() {
        Some(c) => c,
        None => {
            eprintln!("{}", include_str!("cli_help.txt"));
            return Ok(());
        }
    };

    match cmd.as_str() {
        "update" => runner::update(&known_country(args.next())?),
        "wiki" => runner::wiki(&known_country(args.next())?),
        "check" => runner::check(&known_country(args.next())?),
        "check-all" => runner::check_all(),
        "worldwide" => runner::worldwide(),
        "occupations" => runner::occupations(),
        "occupations-update" => runner::occupations_update(),
        "countries" => runner::countries(),
        "-h" | "--help" | "help" => {
            eprintln!("{}", include_str!("cli_help.txt"));
            Ok(())
        }
        other => Err(format!("unknown command: {} (try --help)", other).into()),
    }
}

// Commands taking <country> only accept configured ones; a typo here
// would otherwise just report an empty dataset.
fn known_country(arg: Option<String>) -> Result<String, Box<dyn Error>> {
    let country = arg.ok_or("missing <country> argument")?;
    if regions::min_street_frequency(&country).is_none() {
        return Err(format!("unknown country: {} (see `countries`)", country).into());
    }
    Ok(country)
}
