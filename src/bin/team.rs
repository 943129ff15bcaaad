use std::path::Path;
use std::process;

use colored::Colorize;
use constructs::config::{Config, DEFAULT_CONFIG_FILE};
use constructs::logging;
use constructs::team::{Member, Start, Team};

fn main() {
    let config = match Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
    };
    logging::init(&config.logging);

    let mut team = Team::start("Acme", vec![Member::new("John Doe"), Member::new("Jane Doe")]);
    team.add(Member::new("Joe Bloggs"));

    println!("{}", team.dump());
}
