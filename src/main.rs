use clap::{Parser, Subcommand};
use folio::route::Route;
use folio::{commands, config, tui};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio viewer", long_about = "Portfolio viewer\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Directory with projects.json, company_work.json and profile.json
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Route to open in interactive mode (e.g. about, project/<id>, work/<id>)
    #[arg(long, default_value = "home")]
    open: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route
    List,
    /// Print a route as plain text
    Show {
        /// Route such as about, project/<id> or work/<id>
        route: String,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!(
        "content_dir: {}",
        cfg.content_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "(bundled)".to_string())
    );
    println!("asset_base_url: {}", cfg.asset_base_url);
    println!();
    println!("[theme]");
    println!("mode: {}", cfg.theme.mode.as_str());
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!();
    println!("[navigation]");
    println!("band_top_percent: {}", cfg.navigation.band_top_percent);
    println!("band_bottom_percent: {}", cfg.navigation.band_bottom_percent);
    println!("suppression_ms: {}", cfg.navigation.suppression_ms);
    println!("scroll_animation_ms: {}", cfg.navigation.scroll_animation_ms);
    println!();
    println!("[lottie]");
    println!("speed: {}", cfg.lottie.effective_speed());
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

async fn run(cli: Cli, mut config: config::Config) -> anyhow::Result<()> {
    if let Some(dir) = cli.content {
        config.content_dir = Some(dir);
    }

    if let Some(Commands::Config) = cli.command {
        handle_config_command(&config);
        return Ok(());
    }

    let content = Arc::new(commands::load_content(config.content_dir.as_deref())?);

    match cli.command {
        None => {
            let route: Route = cli.open.parse()?;
            tui::run(content, config, route).await?;
        }
        Some(Commands::List) => commands::list::run(&content)?,
        Some(Commands::Show { route }) => commands::show::run(content, config, &route)?,
        Some(Commands::Config) => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
