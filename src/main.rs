//! Attendance Dashboard - report export and employee updates from the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use attendance_dashboard as app;
use clap::{Parser, Subcommand};

use app::client::ApiClient;
use app::clock::{Meridiem, WallClockTime};
use app::config::{AppConfig, ConfigLoadResult};
use app::export::{ExportFormat, export_to_file, generate_export_filename};
use app::form::EditForm;
use app::models::employee::{EmployeeRecord, NatureOfTime, ShiftType};
use app::models::{AttendanceRecord, AttendanceSummary, filter_records};

/// Attendance dashboard tooling: export reports, summarize, push updates.
#[derive(Parser)]
#[command(name = "attendance-dashboard")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export attendance records to CSV, Excel, or PDF
    Export {
        /// JSON file with an array of attendance records
        input: PathBuf,
        /// Output format: csv, excel, or pdf
        #[arg(long, default_value = "csv")]
        format: String,
        /// Output file (defaults to a timestamped name in the configured directory)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Only export rows matching this search term
        #[arg(long)]
        search: Option<String>,
    },
    /// Print dashboard summary counts for a set of records
    Summary {
        /// JSON file with an array of attendance records
        input: PathBuf,
        /// Roster size (defaults to the number of records)
        #[arg(long)]
        total_employees: Option<u32>,
    },
    /// Push an employee update to the server
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        number: u32,
        #[arg(long, default_value = "0m")]
        buffer_time: String,
        /// Shift type: day, night, or rotational
        #[arg(long, default_value = "day")]
        shift: String,
        /// Check-in on the 12-hour dial, e.g. "09:15"
        #[arg(long)]
        in_time: String,
        /// Check-in designator: am or pm
        #[arg(long, default_value = "am")]
        in_meridiem: String,
        /// Check-out on the 12-hour dial, e.g. "05:45"
        #[arg(long)]
        out_time: String,
        /// Check-out designator: am or pm
        #[arg(long, default_value = "pm")]
        out_meridiem: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };

    let config = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded from {:?}", config_path);
            config
        }
        ConfigLoadResult::Missing => {
            tracing::info!("No config file, using defaults");
            AppConfig::default()
        }
        ConfigLoadResult::Invalid(e) => bail!("Invalid config at {config_path:?}: {e}"),
    };

    match cli.command {
        Command::Export {
            input,
            format,
            output,
            search,
        } => run_export(&config, &input, &format, output, search.as_deref()),
        Command::Summary {
            input,
            total_employees,
        } => run_summary(&input, total_employees),
        Command::Update {
            id,
            name,
            number,
            buffer_time,
            shift,
            in_time,
            in_meridiem,
            out_time,
            out_meridiem,
        } => run_update(
            &config,
            UpdateArgs {
                id,
                name,
                number,
                buffer_time,
                shift,
                in_time,
                in_meridiem,
                out_time,
                out_meridiem,
            },
        ),
    }
}

fn load_records(input: &Path) -> anyhow::Result<Vec<AttendanceRecord>> {
    let content = std::fs::read_to_string(input).with_context(|| format!("Failed to read {input:?}"))?;
    let records = serde_json::from_str(&content).with_context(|| format!("Invalid records in {input:?}"))?;
    Ok(records)
}

fn run_export(
    config: &AppConfig,
    input: &Path,
    format: &str,
    output: Option<PathBuf>,
    search: Option<&str>,
) -> anyhow::Result<()> {
    let format: ExportFormat = format.parse()?;
    let records = load_records(input)?;

    let selected: Vec<AttendanceRecord> = match search {
        Some(term) => filter_records(&records, term).into_iter().cloned().collect(),
        None => records,
    };

    let path = output.unwrap_or_else(|| {
        config
            .export
            .output_dir
            .join(generate_export_filename(&config.export.filename_prefix, format))
    });

    export_to_file(&selected, format, &path)?;
    tracing::info!("Exported {count} records to {path:?}", count = selected.len());
    println!("{}", path.display());
    Ok(())
}

fn run_summary(input: &Path, total_employees: Option<u32>) -> anyhow::Result<()> {
    let records = load_records(input)?;
    let total = total_employees.unwrap_or(records.len() as u32);
    let summary = AttendanceSummary::from_records(&records, total);

    for card in summary.cards() {
        println!("{label}: {count}", label = card.label, count = card.count);
    }
    Ok(())
}

struct UpdateArgs {
    id: String,
    name: String,
    number: u32,
    buffer_time: String,
    shift: String,
    in_time: String,
    in_meridiem: String,
    out_time: String,
    out_meridiem: String,
}

fn run_update(config: &AppConfig, args: UpdateArgs) -> anyhow::Result<()> {
    let shift_type = match args.shift.to_ascii_lowercase().as_str() {
        "day" => ShiftType::Day,
        "night" => ShiftType::Night,
        "rotational" => ShiftType::Rotational,
        other => bail!("Unknown shift type: '{other}'"),
    };

    let check_in = parse_check_time(&args.in_time, &args.in_meridiem)?;
    let check_out = parse_check_time(&args.out_time, &args.out_meridiem)?;

    let employee = EmployeeRecord {
        id: args.id,
        name: args.name,
        number: args.number,
        buffer_time: args.buffer_time,
        shift_type,
        nature_of_time: NatureOfTime::Flexible,
        check_in,
        check_out,
    };

    let mut form = EditForm::open(&employee);
    let client = ApiClient::with_timeout(&config.server.base_url, config.server.timeout_secs);

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(form.submit(&client))?;

    println!("Employee {id} updated", id = employee.id);
    Ok(())
}

/// Validate a 12-hour CLI time argument and resolve it to a 24-hour time.
fn parse_check_time(raw: &str, meridiem: &str) -> anyhow::Result<chrono::NaiveTime> {
    let meridiem = Meridiem::parse(meridiem)?;
    let canonical = WallClockTime::parse_clock_input(raw, meridiem)?.to_canonical();
    chrono::NaiveTime::from_hms_opt(canonical.hour24, canonical.minute, 0)
        .with_context(|| format!("Invalid time: '{raw}' {m}", m = meridiem.as_str()))
}
