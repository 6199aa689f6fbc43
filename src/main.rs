use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tpman::{Client, ClientConfig, Password};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Command-line front end for a Team Password Manager instance
#[derive(Parser, Debug)]
#[command(name = "tpman", version, about, long_about = None)]
struct Args {
    /// Base URL of the instance (falls back to TPM_BASE_URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Pre-encoded Basic auth token (falls back to TPM_AUTH_TOKEN)
    #[arg(short, long)]
    token: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all password entries
    List,
    /// Show one entry by id
    Get { id: u32 },
    /// Find an entry by name and project name
    Find { name: String, project: String },
    /// Print the data of a custom field on an entry
    Field { id: u32, label: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) {
    let Some(tracing_level) = level.to_tracing_level() else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing_level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn print_entry(password: &Password) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(password)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.log_level);

    let Some(config) = ClientConfig::resolve(args.url, args.token) else {
        bail!("base URL and auth token are required (--url/--token or TPM_BASE_URL/TPM_AUTH_TOKEN)");
    };
    let client = Client::new(&config)?;

    match args.command {
        Command::List => {
            for password in client.list_passwords().await? {
                println!("{password}");
            }
        }
        Command::Get { id } => print_entry(&client.get_password(id).await?)?,
        Command::Find { name, project } => {
            print_entry(&client.get_password_by_name(&name, &project).await?)?
        }
        Command::Field { id, label } => {
            let password = client.get_password(id).await?;
            println!("{}", password.custom_field(&label)?);
        }
    }

    Ok(())
}
