use clap::Parser;
use lmsr::cli::{self, output, Cli};
use lmsr::config::Config;
use tracing::error;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();

    if let Err(e) = cli::run(&cli, &config) {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
