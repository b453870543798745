//! Exam Service - operational commands for the exam portal backend.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exam_service_lib::config::ExamServiceConfig;
use exam_service_lib::{AdminAccount, MigrateAction};

#[derive(Parser)]
#[command(name = "exam-service")]
#[command(about = "Exam portal backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Check database connectivity
    Check,
    /// Create an administrator account (or update the existing one)
    CreateAdmin {
        #[arg(long)]
        username: String,
        #[arg(long, env = "EXAM_SERVICE_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() {
    let config = ExamServiceConfig::from_env();

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli.command).await {
        eprintln!("error: {}", exam_service_lib::failure_message(err.as_ref()));
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            exam_service_lib::run_migrations(migrate_action).await?;
        }
        Commands::Check => {
            exam_service_lib::check_connection().await?;
        }
        Commands::CreateAdmin {
            username,
            password,
            first_name,
            last_name,
            email,
            phone,
        } => {
            let account = AdminAccount {
                username,
                password,
                first_name,
                last_name,
                email,
                phone,
            };
            exam_service_lib::create_admin(account).await?;
        }
    }

    Ok(())
}
