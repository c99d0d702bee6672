mod cli;
mod shell;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing_subscriber::EnvFilter;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Give the terminal back before printing anything.
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        eprintln!("\n--- DeskOS crashed ---");
        eprintln!("Please report this issue at: https://github.com/dylan/deskos/issues");
        eprintln!("----------------------\n");
        default_hook(info);
    }));
}

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let candidates = [
        std::path::PathBuf::from(".env"),
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn main() {
    // Load .env before anything reads the API key.
    load_dotenv();
    install_panic_hook();

    let args = cli::parse();

    // Logging goes to stderr so the alternate screen owns stdout.
    let log_directive = args.log_level.as_deref().unwrap_or("deskos=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "deskos=info".parse().unwrap()),
            ),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("DeskOS v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config = match args.config {
        Some(ref path) => deskos_config::loader::load_from_path(std::path::Path::new(path)),
        None => deskos_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        deskos_config::DeskosConfig::default()
    });

    // Bring up the AI bridge unless disabled.
    let ai = if args.no_ai || !config.ai.enabled {
        tracing::info!("AI bridge disabled");
        None
    } else {
        match deskos_ai::GeminiConfig::from_env() {
            Ok(gemini) => {
                let gemini = gemini
                    .with_model(config.ai.model.clone())
                    .with_max_output_tokens(config.ai.max_output_tokens)
                    .with_temperature(config.ai.temperature);
                tracing::info!("AI bridge ready ({})", config.ai.model);
                Some(deskos_ai::bridge::spawn(gemini))
            }
            Err(e) => {
                tracing::warn!("AI bridge unavailable: {e}");
                None
            }
        }
    };

    let mut desktop = shell::DesktopShell::new(config, ai);

    tracing::info!("Entering event loop");
    let terminal = ratatui::init();
    if let Err(e) = execute!(std::io::stdout(), EnableMouseCapture) {
        tracing::warn!("Mouse capture unavailable: {e}");
    }
    let result = shell::run(&mut desktop, terminal);
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    if let Err(e) = result {
        tracing::error!("Event loop error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
