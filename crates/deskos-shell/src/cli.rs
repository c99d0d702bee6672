use clap::Parser;

/// DeskOS: a simulated desktop environment in your terminal.
#[derive(Parser, Debug)]
#[command(name = "deskos", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error). Logs go to stderr;
    /// redirect it to a file to keep the desktop clean.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable the text-generation service even if configured.
    #[arg(long)]
    pub no_ai: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
