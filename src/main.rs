//! journcode - terminal front end for the coding-interview journal.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use journcode::adapters::terminal::{
    render_created, render_detail, render_field_errors, render_health, render_list,
    render_notification, render_sections,
};
use journcode::adapters::{HttpJournalApi, InMemoryJournalApi, RecordingNotifier, TracingNotifier};
use journcode::application::{DashboardController, FormError, SyncStatus};
use journcode::config::{AppConfig, LogFormat};
use journcode::domain::foundation::EntryId;
use journcode::domain::journal::ProblemSubmission;
use journcode::ports::JournalApi;

#[derive(Parser, Debug)]
#[command(name = "journcode", version)]
#[command(about = "Log and review solved coding-interview problems", long_about = None)]
struct Cli {
    /// Use the built-in sample journal instead of the remote service
    #[arg(long, global = true, env = "JOURNCODE_OFFLINE")]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all journal entries
    List,
    /// Show one entry in full
    Show {
        /// Entry id as shown in the list
        id: u32,
    },
    /// Add an entry from a JSON draft
    Add {
        /// Path to a camelCase JSON problem submission
        #[arg(long)]
        file: PathBuf,
    },
    /// Check that the journal service is reachable
    Health,
    /// Show the dashboard sections
    Sections,
}

fn init_tracing(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.logging.log_format()? {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
    }
    Ok(())
}

fn load_submission(path: &Path) -> Result<ProblemSubmission, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn print_notifications(notifier: &RecordingNotifier) {
    for notification in notifier.drain() {
        eprintln!("{}", render_notification(&notification));
    }
}

async fn run(cli: Cli, config: AppConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let api: Arc<dyn JournalApi> = if cli.offline {
        tracing::debug!("using the in-memory sample journal");
        Arc::new(InMemoryJournalApi::seeded())
    } else {
        Arc::new(HttpJournalApi::new(config.api.http_client_config()))
    };

    if let Command::Sections = cli.command {
        print!("{}", render_sections(Default::default()));
        return Ok(ExitCode::SUCCESS);
    }

    if let Command::Health = cli.command {
        let status = api.health_check().await?;
        println!("{}", render_health(&status));
        return Ok(if status.error {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    let notifier = RecordingNotifier::forwarding_to(Arc::new(TracingNotifier));
    let mut controller = DashboardController::new(api, Arc::new(notifier.clone()));
    if let Err(err) = controller.mount().await {
        tracing::debug!(error = %err, "continuing with an empty journal");
    }
    print_notifications(&notifier);

    match cli.command {
        Command::List => print!("{}", render_list(&controller.list_view())),
        Command::Show { id } => {
            controller.select_entry(EntryId::new(id));
            if let Some(view) = controller.detail_view() {
                print!("{}", render_detail(&view));
            }
        }
        Command::Add { file } => {
            let submission = load_submission(&file)?;
            *controller.open_form().draft_mut()? = submission;

            match controller.submit_form().await {
                Ok(outcome) => {
                    print_notifications(&notifier);
                    let synced = matches!(outcome.sync, SyncStatus::Synced(_));
                    println!("{}", render_created(&outcome.entry, synced));
                    print!("{}", render_list(&controller.list_view()));
                }
                Err(FormError::Invalid(errors)) => {
                    eprint!("{}", render_field_errors(&errors));
                    return Ok(ExitCode::FAILURE);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Health | Command::Sections => {}
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {}", err);
        return ExitCode::FAILURE;
    }
    if let Err(err) = init_tracing(&config) {
        eprintln!("Failed to initialise logging: {}", err);
        return ExitCode::FAILURE;
    }

    match run(cli, config).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
