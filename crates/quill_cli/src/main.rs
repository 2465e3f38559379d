use quill_editor::EditorConfig;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "quill.toml";

fn usage() -> ! {
    eprintln!("Usage: quill [form.json] [--config quill.toml]");
    std::process::exit(1);
}

fn init_logging(config: &EditorConfig) {
    // RUST_LOG wins over the configured filter.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("quill=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn main() {
    let mut args = env::args().skip(1);
    let mut form_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => usage(),
            },
            "-h" | "--help" => usage(),
            _ if form_path.is_none() => form_path = Some(PathBuf::from(arg)),
            _ => usage(),
        }
    }

    let default_config = PathBuf::from(DEFAULT_CONFIG);
    let config = match config_path {
        Some(path) => EditorConfig::load(&path).unwrap_or_else(|err| {
            eprintln!("Error: could not read config {}: {}", path.display(), err);
            std::process::exit(1);
        }),
        None if default_config.exists() => EditorConfig::load(&default_config).unwrap_or_else(|err| {
            eprintln!("Warning: ignoring {}: {}", default_config.display(), err);
            EditorConfig::default()
        }),
        None => EditorConfig::default(),
    };

    init_logging(&config);

    if let Some(path) = &form_path {
        if !path.exists() {
            eprintln!("Error: file not found: {}", path.display());
            std::process::exit(1);
        }
    }

    if let Err(err) = quill_ui::run(form_path.as_deref(), config) {
        tracing::error!(error = %err, "could not open form");
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
