mod bootstrap;
mod show;
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use milkvendor_core::{AttendanceService, Config, DateKey, FileAttendanceRepository, ViewedMonth};

#[derive(Parser)]
#[command(name = "milkvendor")]
#[command(about = "Track milk deliveries and the monthly bill", long_about = None)]
struct Cli {
    /// Directory holding the attendance file (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to config.toml (default: ~/.config/milkvendor/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "debug"
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Mark or unmark a delivery (usage: toggle 2024-01-05 | toggle today)
    Toggle {
        date: String,
    },
    /// Print the month grid with its totals
    Show {
        /// Month as YYYY-MM (default: current month)
        #[arg(long, short)]
        month: Option<String>,
    },
    /// Print the monthly totals only
    Stats {
        #[arg(long, short)]
        month: Option<String>,
    },
    /// List the delivery days of a month
    List {
        #[arg(long, short)]
        month: Option<String>,
    },
    /// Open the Terminal User Interface
    Tui,
}

fn parse_month(month: Option<&str>) -> Result<ViewedMonth> {
    match month {
        Some(m) => Ok(m.parse::<ViewedMonth>()?),
        None => Ok(ViewedMonth::current()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    let data_dir = config.resolved_data_dir()?;
    let repo = FileAttendanceRepository::new(Some(data_dir.clone()), &config.storage_key)?;

    let run_tui = matches!(cli.command, None | Some(Commands::Tui));
    let log_file = run_tui.then(|| data_dir.join("milkvendor.log"));
    bootstrap::setup_logging(&config.log_level, log_file.as_deref())?;
    tracing::debug!(path = %repo.path().display(), "using attendance file");

    match cli.command {
        Some(Commands::Toggle { date }) => {
            let key = DateKey::parse(&date)?;
            let mut service = AttendanceService::open(repo);
            let present = service
                .toggle(&key)
                .with_context(|| format!("Could not save attendance for {}", key))?;
            if present {
                println!("{}: marked present", key);
            } else {
                println!("{}: marked absent", key);
            }
        },
        Some(Commands::Show { month }) => {
            let mut service = AttendanceService::open(repo);
            service.view_month(parse_month(month.as_deref())?);
            show::print_month(&service.calendar(&DateKey::today()), &config.currency_symbol);
        },
        Some(Commands::Stats { month }) => {
            let mut service = AttendanceService::open(repo);
            let month = parse_month(month.as_deref())?;
            service.view_month(month);
            println!("{}", month.title());
            show::print_stats(&service.statistics(), &config.currency_symbol);
        },
        Some(Commands::List { month }) => {
            let mut service = AttendanceService::open(repo);
            service.view_month(parse_month(month.as_deref())?);
            let dates = service.store().present_in_month();
            if dates.is_empty() {
                println!("No deliveries recorded.");
            } else {
                for date in dates {
                    println!("{}", date);
                }
            }
        },
        Some(Commands::Tui) | None => {
            let service = AttendanceService::open(repo);
            tui::run(service, config.currency_symbol)?;
        }
    }
    Ok(())
}
