use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tempo::{
  adapters::http::{RequestIdMiddleware, configure_app},
  container,
  infrastructure::{config::Config, database, telemetry},
};

/// Access log line; the request id is read back from the response header
const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %T request_id=%{x-request-id}o"#;

#[derive(Debug, Parser)]
#[command(name = "tempo", version, about = "User accounts and news REST API")]
struct Cli {
  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Run the HTTP server (default)
  #[command(alias = "server")]
  Serve {
    /// Do not apply pending migrations on startup
    #[arg(long = "skip-migrations")]
    skip_migrations: bool,
  },
  /// Manage database migrations
  Migrate {
    /// Read migrations from this directory instead of the embedded set
    #[arg(short, long)]
    path: Option<PathBuf>,
    /// Revert the most recently applied migration
    #[arg(short, long, conflicts_with = "force")]
    rollback: bool,
    /// Mark VERSION as cleanly applied without running it
    #[arg(short, long, value_name = "VERSION")]
    force: Option<i64>,
  },
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  let cli = Cli::parse();
  let config = Config::load().context("failed to load configuration")?;
  telemetry::init(&config.log)?;

  match cli.command.unwrap_or(Command::Serve {
    skip_migrations: false,
  }) {
    Command::Serve { skip_migrations } => serve(config, skip_migrations).await,
    Command::Migrate {
      path,
      rollback,
      force,
    } => migrate(config, path, rollback, force).await,
  }
}

async fn serve(config: Config, skip_migrations: bool) -> anyhow::Result<()> {
  tracing::info!("Starting Tempo API");

  let pool = database::connect(&config.database).await?;
  if skip_migrations {
    tracing::warn!("Skipping database migrations");
  } else {
    database::run_migrations(&pool, &database::MIGRATOR).await?;
  }

  let deps = container::postgres_dependencies(pool, &config)?;

  let bind_address = (config.server.host.clone(), config.server.port);
  tracing::info!(
    host = %config.server.host,
    port = config.server.port,
    api_prefix = %config.server.api_prefix,
    "Starting HTTP server"
  );

  HttpServer::new(move || {
    let deps = deps.clone();
    App::new()
      .wrap(RequestIdMiddleware::new())
      .wrap(Logger::new(ACCESS_LOG_FORMAT))
      .configure(move |cfg| configure_app(cfg, &deps))
  })
  .bind(bind_address)
  .with_context(|| {
    format!(
      "failed to bind {}:{}",
      config.server.host, config.server.port
    )
  })?
  .run()
  .await?;

  tracing::info!("Server stopped");
  Ok(())
}

async fn migrate(
  config: Config,
  path: Option<PathBuf>,
  rollback: bool,
  force: Option<i64>,
) -> anyhow::Result<()> {
  let loaded = match &path {
    Some(path) => Some(database::load_migrator(path).await?),
    None => None,
  };
  let migrator = loaded.as_ref().unwrap_or(&database::MIGRATOR);

  let pool = database::connect(&config.database).await?;

  if rollback {
    match database::rollback_last_migration(&pool, migrator).await? {
      Some(version) => println!("Reverted migration {}", version),
      None => println!("Nothing to revert"),
    }
  } else if let Some(version) = force {
    database::force_migration_version(&pool, migrator, version).await?;
    println!("Forced migration version {}", version);
  } else {
    database::run_migrations(&pool, migrator).await?;
    println!("Migrations applied");
  }

  pool.close().await;
  Ok(())
}
