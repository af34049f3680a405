//! Stackpad entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_config::load_from;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

mod shell;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "stackpad", version, about = "Character-level text editor with undo/redo")]
struct Args {
    /// Optional configuration file path (overrides discovery of `stackpad.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Log file path (overrides `[log] file` from the configuration).
    #[arg(long = "log")]
    pub log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_from(args.config.clone()).context("loading configuration")?;
    let log_path = args
        .log
        .clone()
        .unwrap_or_else(|| config.log_file().to_path_buf());
    let _log_guard = configure_logging(&log_path)?;
    install_panic_hook();

    let config_path = config.path.as_ref().map(|p| p.display().to_string());
    info!(
        target: "runtime",
        config = config_path.as_deref(),
        config_override = args.config.is_some(),
        log = %log_path.display(),
        "startup"
    );
    let policy = config.history_policy();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(stdin.lock(), stdout.lock(), policy).context("menu loop i/o")?;

    info!(target: "runtime", "shutdown");
    Ok(())
}

fn configure_logging(log_path: &Path) -> Result<Option<WorkerGuard>> {
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = log_path
        .file_name()
        .with_context(|| format!("log path {} has no file name", log_path.display()))?;
    if log_path.exists() {
        let _ = std::fs::remove_file(log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Ok(Some(guard)),
        // Global subscriber already installed; drop guard so writer shuts down.
        Err(_err) => Ok(None),
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_overrides() {
        let args = Args::try_parse_from(["stackpad", "--config", "c.toml", "--log", "out/x.log"])
            .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("c.toml")));
        assert_eq!(args.log, Some(PathBuf::from("out/x.log")));
    }

    #[test]
    fn args_default_to_none() {
        let args = Args::try_parse_from(["stackpad"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log.is_none());
    }

    #[test]
    fn logging_rejects_path_without_file_name() {
        assert!(configure_logging(Path::new("/")).is_err());
    }
}
