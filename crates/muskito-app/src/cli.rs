use clap::Parser;

/// Muskito: a dual-personality chatbot in your terminal.
#[derive(Parser, Debug)]
#[command(name = "muskito", version, about)]
pub struct Args {
    /// Groq API key (defaults to the GROQ_API_KEY env var).
    #[arg(long)]
    pub api_key: Option<String>,

    /// Personality to start in (happy_delusional, brutal_roaster).
    #[arg(short = 'm', long)]
    pub mode: Option<String>,

    /// Model identifier override.
    #[arg(long)]
    pub model: Option<String>,

    /// Wait for whole replies instead of streaming them.
    #[arg(long)]
    pub no_stream: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
