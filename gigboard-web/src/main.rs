//! gigboard — venue, artist, and show listing service

use anyhow::{Context, Result};
use clap::Parser;
use gigboard_common::config::{resolve_database_path, ServeArgs, TomlConfig};
use gigboard_common::db::init_database;
use gigboard_web::{build_router, AppState};
use tracing::info;
use tracing_subscriber::fmt::writer::{MakeWriterExt, Tee};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ServeArgs::parse();
    let toml_config = TomlConfig::load();

    init_tracing(&args, &toml_config)?;

    info!("Starting Gigboard (gigboard-web) v{}", env!("CARGO_PKG_VERSION"));

    let db_path = resolve_database_path(args.database.as_deref(), &toml_config);
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path).await?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("gigboard listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize the tracing subscriber. Outside dev mode, log output also
/// goes to the configured log file.
fn init_tracing(args: &ServeArgs, toml_config: &TomlConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let log_file = args.log_file.clone().or_else(|| toml_config.log_file.clone());
    match log_file {
        Some(path) if !args.dev => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(file_and_stderr(file))
                .init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }

    Ok(())
}

/// Writer that appends each log line to the file and still emits it on
/// stderr, so file logging supplements console output rather than
/// replacing it.
fn file_and_stderr(
    file: std::fs::File,
) -> Tee<std::sync::Mutex<std::fs::File>, fn() -> std::io::Stderr> {
    std::sync::Mutex::new(file).and(std::io::stderr as fn() -> std::io::Stderr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn file_and_stderr_writer_appends_to_the_file() {
        let path = std::env::temp_dir()
            .join(format!("gigboard-tee-test-{}.log", std::process::id()));
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();

        let make = file_and_stderr(file);
        let mut writer = make.make_writer();
        writer.write_all(b"tee writer smoke line\n").unwrap();
        writer.flush().unwrap();
        drop(writer);

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(contents.contains("tee writer smoke line"));
    }
}
