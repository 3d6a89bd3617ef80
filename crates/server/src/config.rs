use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "robur-server", version, about = "Workout recommendation service")]
pub struct Settings {
    /// Address to listen on
    #[arg(long, env = "ROBUR_LISTEN", default_value = "127.0.0.1:8000")]
    pub listen: String,

    /// Path of the SQLite catalog database
    #[arg(long, env = "ROBUR_DATABASE", default_value = "data/robur.db")]
    pub database: PathBuf,

    /// Base URL of the exercise video search API; video enrichment is
    /// disabled when unset
    #[arg(long, env = "ROBUR_VIDEO_API_URL")]
    pub video_api_url: Option<String>,

    /// Base URL of the coach completion API
    #[arg(long, env = "ROBUR_COACH_API_URL", default_value = "https://api.openai.com/v1")]
    pub coach_api_url: String,

    /// API key for the coach completion API; coach endpoints degrade
    /// gracefully when unset
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub coach_api_key: Option<String>,

    /// Default model for coach completions
    #[arg(long, env = "ROBUR_COACH_MODEL", default_value = "gpt-4o-mini")]
    pub coach_model: String,
}
