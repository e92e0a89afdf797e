use clap::Parser;
use relay_dns_domain::CliOverrides;
use std::ffi::OsString;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "relay-dns")]
#[command(version)]
#[command(about = "Relay DNS - static A/MX responder that forwards everything else")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long = "conf", value_name = "FILE")]
    config: Option<String>,

    /// Listen address (ip:port)
    #[arg(short = 'l', long)]
    listen: Option<String>,

    /// Upstream DNS server (host:port)
    #[arg(short = 'r', long)]
    remote: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

const LONG_FLAGS: [&str; 4] = ["conf", "listen", "remote", "log-level"];

/// Rewrites single-dash long flags (`-conf x.toml`, `-listen=:53`) to their
/// `--` form, so they are not read as `-c onf`.
fn normalize_long_flags(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|text| {
                let flag = text.strip_prefix('-')?;
                if flag.starts_with('-') {
                    return None;
                }
                let name = flag.split('=').next().unwrap_or(flag);
                LONG_FLAGS
                    .contains(&name)
                    .then(|| OsString::from(format!("-{}", text)))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_long_flags(std::env::args_os()));

    let cli_overrides = CliOverrides {
        listen_addr: cli.listen,
        remote_dns: cli.remote,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Relay DNS v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config);
    let listen_addr = config.listen_socket_addr()?;

    tokio::select! {
        result = server::start_dns_server(listen_addr, dns_services.handler) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutdown signal received"),
    }

    info!("Server shutdown complete");
    Ok(())
}
