//! route-resolver command line.
//!
//! ```text
//! route-resolver --config routes.toml resolve GET /users/42 --base-url /api
//! route-resolver --config routes.toml routes
//! route-resolver --config routes.toml check
//! route-resolver --config routes.toml watch   < requests.txt
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};

use route_resolver::config::watcher::ConfigWatcher;
use route_resolver::config::{load_config, ConfigError, RouterConfig};
use route_resolver::observability::logging::init_logging;
use route_resolver::{Router, SharedRouter};

#[derive(Parser)]
#[command(name = "route-resolver")]
#[command(about = "Resolve requests against a route table", long_about = None)]
struct Cli {
    /// Route configuration file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single request and print the result
    Resolve {
        method: String,
        path: String,
        #[arg(short, long)]
        base_url: Option<String>,
    },
    /// List routes in priority order
    Routes,
    /// Validate the configuration file
    Check,
    /// Reload on file change and resolve `METHOD PATH [BASE_URL]` lines from stdin
    Watch,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            report_config_error(&cli.config, &e);
            return Ok(ExitCode::FAILURE);
        }
    };

    init_logging(&config.observability)?;

    match cli.command {
        Commands::Check => {
            println!(
                "{}: ok ({} routes, {} aliases)",
                cli.config.display(),
                config.routes.len(),
                config.aliases.len()
            );
        }
        Commands::Resolve { method, path, base_url } => {
            let router = Router::from_config(&config);
            let result = router.route(&method, &path, base_url.as_deref());
            println!("{}", serde_json::to_string_pretty(&result.to_json())?);
        }
        Commands::Routes => {
            let router = Router::from_config(&config);
            println!("{}", serde_json::to_string_pretty(&route_table(&router))?);
        }
        Commands::Watch => watch(&cli.config, &config).await?,
    }

    Ok(ExitCode::SUCCESS)
}

fn report_config_error(path: &Path, error: &ConfigError) {
    match error {
        ConfigError::Validation(errors) => {
            eprintln!("{}: {} validation error(s)", path.display(), errors.len());
            for err in errors {
                eprintln!("  - {}", err);
            }
        }
        other => eprintln!("{}: {}", path.display(), other),
    }
}

fn route_table(router: &Router) -> serde_json::Value {
    let routes: Vec<_> = router.container().definitions().collect();
    let mut aliases: Vec<_> = router.container().aliases().collect();
    aliases.sort_by(|a, b| a.alias().cmp(b.alias()));

    json!({
        "routes": routes,
        "aliases": aliases,
        "default_route": router.default_route(),
    })
}

async fn watch(path: &Path, config: &RouterConfig) -> Result<(), Box<dyn std::error::Error>> {
    let shared = SharedRouter::new(Router::from_config(config));

    let (watcher, mut updates) = ConfigWatcher::new(path);
    // Dropping the watcher stops notifications.
    let _watcher = watcher.run()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(config) = updates.recv() => shared.apply_config(&config),
            line = lines.next_line() => match line? {
                Some(line) => resolve_line(&shared, &line)?,
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}

fn resolve_line(shared: &SharedRouter, line: &str) -> Result<(), serde_json::Error> {
    let mut parts = line.split_whitespace();
    let (Some(method), Some(path)) = (parts.next(), parts.next()) else {
        if !line.trim().is_empty() {
            tracing::warn!(line = %line, "Expected: METHOD PATH [BASE_URL]");
        }
        return Ok(());
    };
    let base_url = parts.next();

    let result = shared.route(method, path, base_url);
    println!("{}", serde_json::to_string(&result.to_json())?);
    Ok(())
}
