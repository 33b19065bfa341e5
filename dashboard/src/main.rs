use std::{fs::OpenOptions, io::Write, sync::Arc};

use clap::Parser;
use dashboard::{
    config::{Config, DashboardConfig},
    data_provider::UpstreamDataProvider,
    errors::{DashboardError, Result},
    server,
    state::AppState,
};
use env_logger::Env;

#[derive(Parser, Debug)]
#[command(name = "dashboard", about = "Caching proxy for the Bitcoin market dashboard")]
struct Args {
    /// Config file (toml, json or yaml)
    #[arg(short, long, default_value = "conf/dashboard_conf.toml")]
    config: String,
}

fn init_logger(log_file_path: Option<&str>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(move |buf, record| {
        let ts = buf.timestamp();
        writeln!(buf, "{} [{}] - {}", ts, record.level(), record.args())
    });
    if let Some(path) = log_file_path {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| DashboardError::ConfigError {
                message: format!("failed to open log file {}: {}", path, e),
            })?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    builder.init();
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = Config::from_path(&args.config).map_err(|e| DashboardError::ConfigError {
        message: e.to_string(),
    })?;
    let dashboard_config = DashboardConfig::from_config(config)?
        .with_port_override(std::env::var("PORT").ok().as_deref())?;

    init_logger(dashboard_config.log_file.as_deref())?;
    log::info!(
        "dashboard starting, config: {}, coins: {:?}",
        args.config,
        dashboard_config.upstream.coin_ids
    );
    if dashboard_config.upstream.search_api_key.is_none() {
        log::info!("no search api key, /api/x-posts serves an empty digest");
    }

    let provider = UpstreamDataProvider::new(&dashboard_config)?;
    let state = Arc::new(AppState::new(dashboard_config, Arc::new(provider)));
    server::run(state).await
}

#[tokio::main]
pub async fn main() {
    let args = Args::parse();
    if let Err(e) = run(args).await {
        log::error!("dashboard exited: {}", e);
        eprintln!("dashboard exited: {}", e);
        std::process::exit(1);
    }
}
