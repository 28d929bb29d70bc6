use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use csr_conf::{config::CsrConfConfig, resolve_inputs, Policy};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "csr-conf", version)]
#[command(about = "Print an OpenSSL request config for a certificate signing request", long_about = None)]
struct Args {
    /// IP address for the IP.1 alternative name
    ip: Option<String>,

    /// Hostname for the common name and DNS.1 alternative name
    hostname: Option<String>,

    /// Input policy, overrides the one in --config
    #[arg(long, value_enum)]
    policy: Option<Policy>,

    /// JSON profile overriding the fixed subject fields
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!(?args, "parsed arguments");

    let config = match &args.config {
        Some(path) => CsrConfConfig::load_from_file(path)?,
        None => CsrConfConfig::default(),
    };
    let policy = args.policy.or(config.policy).unwrap_or_default();

    let inputs = resolve_inputs(policy, args.ip, args.hostname)?;

    tracing::info!(
        ip = %inputs.ip,
        hostname = %inputs.hostname,
        ?policy,
        "rendering request config"
    );

    let document = config.subject.request(&inputs.ip, &inputs.hostname).to_string();

    match &args.output {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            std::fs::write(path, &document)?;
            tracing::info!(path = ?path, "request config written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
