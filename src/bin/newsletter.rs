use std::path::Path;
use std::process;

use colored::Colorize;
use constructs::config::{Config, DEFAULT_CONFIG_FILE};
use constructs::newsletter::NewsletterSubscriptionsController;
use constructs::{logging, Result};

fn run(config: &Config) -> Result<()> {
    let provider = config.newsletter.provider_kind()?.provider();
    let controller = NewsletterSubscriptionsController::with_email(&config.newsletter.email);

    let subscription = controller.store(provider.as_ref())?;
    println!("{subscription}");
    Ok(())
}

fn main() {
    let result = Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE)).and_then(|config| {
        logging::init(&config.logging);
        run(&config)
    });

    if let Err(err) = result {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}
