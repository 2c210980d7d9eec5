use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Error, Result};
use clap::Parser;
use push_sender::{
    cli::Cli,
    clients::fcm::FcmClient,
    config::{Config, LogFormat},
    dispatcher::dispatch,
    error::DispatchError,
    models::validation::validate_fcm_token,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_format);

    match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<DispatchError>() {
            Some(dispatch_error) => {
                eprintln!("❌ {}", dispatch_error);
                if let Some(hint) = dispatch_error.hint() {
                    eprintln!("\n{}", hint);
                }
                ExitCode::from(dispatch_error.exit_code())
            }
            None => {
                eprintln!("❌ {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

async fn run(cli: &Cli, config: &Config) -> Result<(), Error> {
    // Rejected before credentials are touched or the sample file is read.
    validate_fcm_token(cli.token.as_deref(), cli.from_sample)?;

    let credentials = config.credentials_path(cli.credentials.as_deref())?;

    let client = FcmClient::from_credentials(&credentials, config).await?;
    println!("✅ Firebase Admin SDK inicializado");

    let delivery = dispatch(cli, &client).await?;

    let mut stdout = io::stdout().lock();
    delivery.report(&mut stdout)?;
    stdout.flush()?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
