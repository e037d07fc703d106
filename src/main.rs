use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rentdesk::interactive::domain::validation::rental_terms_error;
use rentdesk::logging::{init_console_tracing, init_tracing};
use rentdesk::provider::mock::{MockConfig, MockProvider};
use rentdesk::{
    CostBreakdown, ProviderOperation, RentalConsole, RentalProvider, Settings, VehicleClass,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "rentdesk",
    version,
    about = "Terminal console for browsing vehicles, managing inventory and previewing rentals",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Vehicle class selected at startup (overrides the settings file)
    #[arg(long, value_enum)]
    class: Option<ClassArg>,

    /// Settings file (default: <config dir>/rentdesk/settings.json)
    #[arg(long, env = "RENTDESK_CONFIG")]
    config: Option<PathBuf>,

    /// Make a provider operation fail; may be repeated
    #[arg(long = "fail", value_enum)]
    fail: Vec<OperationArg>,

    /// Multiplier applied to every simulated provider delay
    #[arg(long)]
    latency_scale: Option<f64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cost breakdown of a rental without opening the console
    Quote {
        /// Rental duration in hours
        #[arg(long)]
        hours: f64,

        /// Distance in kilometers
        #[arg(long, default_value = "0")]
        kilometers: f64,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClassArg {
    A,
    B,
    C,
}

impl From<ClassArg> for VehicleClass {
    fn from(class: ClassArg) -> Self {
        match class {
            ClassArg::A => VehicleClass::A,
            ClassArg::B => VehicleClass::B,
            ClassArg::C => VehicleClass::C,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationArg {
    ListVehicles,
    ListInventory,
    AddStock,
    QuoteRental,
    ConfirmRental,
}

impl From<OperationArg> for ProviderOperation {
    fn from(operation: OperationArg) -> Self {
        match operation {
            OperationArg::ListVehicles => ProviderOperation::ListVehicles,
            OperationArg::ListInventory => ProviderOperation::ListInventory,
            OperationArg::AddStock => ProviderOperation::AddStock,
            OperationArg::QuoteRental => ProviderOperation::QuoteRental,
            OperationArg::ConfirmRental => ProviderOperation::ConfirmRental,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Quote {
            hours,
            kilometers,
            format,
        }) => {
            init_tracing(cli.verbose);
            print_quote(hours, kilometers, format)
        }
        None => run_console(&cli),
    }
}

fn run_console(cli: &Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(class) = cli.class {
        settings.default_class = class.into();
    }
    if let Some(scale) = cli.latency_scale {
        settings.latency = settings.latency.scaled(scale);
    }

    init_console_tracing(settings.log_file.as_deref(), cli.verbose)?;

    let mut mock_config = MockConfig {
        latency: settings.latency,
        ..MockConfig::default()
    };
    for operation in &cli.fail {
        mock_config = mock_config.failing((*operation).into());
    }
    let provider: Arc<dyn RentalProvider> = Arc::new(MockProvider::new(mock_config));

    let mut console = RentalConsole::new(provider, &settings)?;
    console.run()
}

fn print_quote(hours: f64, kilometers: f64, format: OutputFormat) -> Result<()> {
    if let Some(message) = rental_terms_error(hours, kilometers) {
        bail!("{message}");
    }

    let breakdown = CostBreakdown::new(hours, kilometers);
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            let lines = breakdown.lines();
            let width = lines
                .iter()
                .map(|(label, amount)| label.chars().count() + amount.chars().count())
                .max()
                .unwrap_or(0)
                + 4;
            let last = lines.len().saturating_sub(1);
            for (i, (label, amount)) in lines.into_iter().enumerate() {
                let pad = width - label.chars().count() - amount.chars().count();
                let line = format!("{label}{}{amount}", " ".repeat(pad));
                if i == last {
                    writeln!(handle, "{}", line.green().bold())?;
                } else {
                    writeln!(handle, "{line}")?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &breakdown)
                .context("Failed to serialize quote")?;
            writeln!(handle)?;
        }
    }
    Ok(())
}
