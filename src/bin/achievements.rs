use std::path::Path;
use std::process;

use colored::Colorize;
use constructs::achievement;
use constructs::config::{Config, DEFAULT_CONFIG_FILE};
use constructs::logging;

fn main() {
    let config = match Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
    };
    logging::init(&config.logging);

    for achievement in achievement::all() {
        println!("{}", achievement.name());
        println!("{}", achievement.icon());
    }
}
