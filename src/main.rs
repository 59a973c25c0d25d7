//! Command-line client: sign a GET for `/stream/<target>` and stream the
//! response body to a file.

use {
    clap::Parser,
    log::{info, warn},
    sigstream_client::{
        constants::{DEFAULT_BASE_URL, DEFAULT_IDENTIFIER},
        fetch_to_file, ClientConfig, SignatureError,
    },
    std::{path::PathBuf, process::ExitCode},
};

#[derive(Debug, Parser)]
#[command(name = "sigstream-client", about = "Fetch a target from the streaming endpoint with HMAC-signed headers")]
struct Cli {
    /// Name of the target to stream. Percent-encoded before being embedded in
    /// the request path.
    target: String,

    /// File to write the response body to.
    #[arg(long, default_value = "outfile.dat")]
    output: PathBuf,

    /// Base URL of the streaming endpoint.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Secret shared with the server, used as the HMAC key.
    #[arg(long, env = "STREAM_SHARED_SECRET", default_value = "rubbish", hide_env_values = true)]
    secret: String,

    /// Client identifier sent in the X-Hmac-Authorization header.
    #[arg(long, default_value = DEFAULT_IDENTIFIER)]
    identifier: String,
}

fn run(cli: &Cli) -> Result<(), SignatureError> {
    let config = ClientConfig::builder()
        .shared_secret(cli.secret.as_bytes().to_vec())
        .identifier(cli.identifier.as_str())
        .base_url(cli.base_url.as_str())
        .build()
        .expect("shared_secret is always provided");

    info!("Fetching {} from {}", cli.target, config.base_url());
    let report = fetch_to_file(&config, &cli.target, &cli.output)?;

    if !report.status().is_success() {
        warn!("Server returned {}", report.status());
    }
    info!("Wrote {} bytes to {}", report.bytes_written(), cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", e.error_code(), e);
            ExitCode::FAILURE
        }
    }
}
