mod action;

use clap::Parser;
use std::process::ExitCode;

#[derive(clap::Parser)]
#[clap(about, author, version)]
struct Args {
    /// Path to the configuration toml file.
    #[clap(short, long, default_value = "mailmerge.toml", env = "MAILMERGE_CONFIG")]
    config_path: String,
    #[clap(subcommand)]
    action: action::Action,
}

#[tokio::main]
async fn main() -> ExitCode {
    let directive = std::env::var("LOG").unwrap_or_else(|_| "mailmerge=info".into());
    if let Err(err) = mailmerge::init_logs(&directive, true) {
        eprintln!("unable to initialize logs: {err}");
    }

    let args = Args::parse();
    let result = match mailmerge::service::config::Configuration::from_path(&args.config_path) {
        Ok(config) => args.action.execute(config).await,
        Err(err) => Err(err.into()),
    };
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
