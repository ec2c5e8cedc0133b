//! Context setup and dispatch.
//!
//! `run()` resolves the app home, loads `AppConfig`, starts logging, picks the
//! data file and then hands a `CrowdfundApi<FileStore>` to the requested
//! command. With no subcommand the interactive menu runs.
//!
//! Data file precedence: `--data-file`, then `CROWDFUND_DB`, then
//! `data_file` from `<home>/config.json`.

use super::menu::Menu;
use super::print::{print_heading, print_messages, print_projects};
use super::prompt::Console;
use super::setup::{Cli, Commands};
use clap::Parser;
use crowdfund::api::{CmdMessage, CrowdfundApi};
use crowdfund::config::{AppConfig, CONFIG_FILENAME};
use crowdfund::error::{CrowdfundError, Result};
use crowdfund::store::fs::FileStore;
use directories::ProjectDirs;
use flexi_logger::{Logger, LoggerHandle};
use log::info;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

const HOME_ENV: &str = "CROWDFUND_HOME";
const DATA_FILE_ENV: &str = "CROWDFUND_DB";

struct AppContext {
    api: CrowdfundApi<FileStore>,
    home: PathBuf,
    config: AppConfig,
    data_file: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let home = resolve_home()?;
    let config = AppConfig::load(&home)?;
    let _logger = init_logging(&config, cli.verbose);

    let ctx = init_context(&cli, home, config);
    info!(
        "event=app_start module=cli status=ok version={} data_file={}",
        env!("CARGO_PKG_VERSION"),
        ctx.data_file.display()
    );

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Search { start, end }) => handle_search(&ctx, start, end),
        Some(Commands::Config { init }) => handle_config(&ctx, init),
    }
}

fn resolve_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "crowdfund", "crowdfund")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CrowdfundError::Config("Could not determine a home directory".into()))
}

/// Logs go to stderr so they never mix with menu output. `RUST_LOG` wins
/// over both `--verbose` and the configured level.
fn init_logging(config: &AppConfig, verbose: bool) -> Option<LoggerHandle> {
    let level = if verbose { "info" } else { config.log_level.as_str() };
    let started =
        Logger::try_with_env_or_str(level).and_then(|logger| logger.log_to_stderr().start());
    match started {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    }
}

fn init_context(cli: &Cli, home: PathBuf, config: AppConfig) -> AppContext {
    let data_file = resolve_data_file(cli.data_file.as_deref(), &home, &config);
    AppContext {
        api: CrowdfundApi::new(FileStore::new(&data_file)),
        home,
        config,
        data_file,
    }
}

fn resolve_data_file(flag: Option<&Path>, home: &Path, config: &AppConfig) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    match std::env::var_os(DATA_FILE_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config.data_path(home),
    }
}

fn handle_menu(mut ctx: AppContext) -> Result<()> {
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), stdin.is_terminal());
    Menu::new(&mut ctx.api, console).run()
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_projects()?;
    print_projects(&result.listed_projects);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, start: Option<String>, end: Option<String>) -> Result<()> {
    let result = match (start, end) {
        (Some(start), _) => ctx.api.find_by_start_date(&start)?,
        (None, Some(end)) => ctx.api.find_by_end_date(&end)?,
        (None, None) => return Ok(()),
    };
    print_projects(&result.listed_projects);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, init: bool) -> Result<()> {
    if init {
        ctx.config.save(&ctx.home)?;
        info!(
            "event=config_write module=cli status=ok home={}",
            ctx.home.display()
        );
        let written = format!("Wrote {}", ctx.home.join(CONFIG_FILENAME).display());
        print_messages(&[CmdMessage::success(written)]);
    }

    print_heading("Configuration");
    println!("home = {}", ctx.home.display());
    println!("data_file = {}", ctx.data_file.display());
    println!("log_level = {}", ctx.config.log_level);
    Ok(())
}
