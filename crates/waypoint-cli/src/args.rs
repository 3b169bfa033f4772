use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ExtractArgs, KeyCommands};

/// Conversational travel and task planning assistant
///
/// Waypoint chats with Gemini to build travel plans. Lists in the replies
/// become tracked tasks, classified by type and risk. Travel requests start a
/// short questionnaire so the plan can be personalised.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the file holding the Gemini API key. Defaults to
    /// $XDG_CONFIG_HOME/waypoint/gemini-api-key
    #[arg(long, global = true)]
    pub key_file: Option<PathBuf>,

    /// Gemini model to use
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Base URL of the Gemini API
    #[arg(long, global = true, hide = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 60)]
    pub timeout: u64,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands; `chat` runs when none is given.
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive planning conversation
    #[command(alias = "c")]
    Chat,
    /// Extract a plan from text without contacting the assistant
    #[command(alias = "x")]
    Extract(ExtractArgs),
    /// Manage the stored Gemini API key
    #[command(alias = "k")]
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
    /// List the travel questionnaire
    #[command(alias = "q")]
    Questions,
}
