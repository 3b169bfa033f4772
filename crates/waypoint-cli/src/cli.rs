//! Command-line argument wrappers and one-shot command handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so `waypoint-core` never depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```
//!
//! The same pattern covers the slash commands typed inside the chat, which
//! are parsed by [`SlashLine`].

use std::{io, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use waypoint_core::{
    AddPlan, AddRoute, ApiKey, KeyStore, PlanExtractor, PlanStore, credentials::KEY_ENV_VAR,
    ids::RandomIds, questionnaire::TRAVEL_QUESTIONS,
};

use crate::renderer::TerminalRenderer;

/// Extract a plan from a saved assistant reply
#[derive(Args)]
pub struct ExtractArgs {
    /// File to read; standard input when omitted
    pub file: Option<PathBuf>,
    /// Print the extracted plan as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum KeyCommands {
    /// Validate and store a Gemini API key
    Set(SetKeyArgs),
    /// Show the active key, masked
    Show,
    /// Print the key file location
    Path,
}

#[derive(Args)]
pub struct SetKeyArgs {
    /// The key, starting with AIza
    pub key: String,
}

/// One slash command typed in the chat, without the leading `/`.
#[derive(Parser)]
#[command(
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct SlashLine {
    #[command(subcommand)]
    pub command: SlashCommand,
}

#[derive(Subcommand)]
pub enum SlashCommand {
    /// Stop the questionnaire
    Skip,
    /// List plans
    #[command(alias = "ls")]
    Plans,
    /// Planning history by day
    History,
    /// Show one plan
    Show(PlanArg),
    /// Tick or untick a task
    #[command(alias = "t")]
    Toggle(TodoArgs),
    /// Ask about a task; prefills the next input
    Ask(TodoArgs),
    /// Add a route leg to a plan
    Route(RouteArgs),
    /// Create a plan: `/new Title | task | task`
    New(NewPlanArgs),
    /// List the questionnaire
    Questions,
    /// Show this help
    #[command(alias = "?")]
    Help,
    /// Leave the chat
    #[command(aliases = ["exit", "q"])]
    Quit,
}

#[derive(Args)]
pub struct PlanArg {
    /// Plan id or 1-based position
    pub plan: String,
}

#[derive(Args)]
pub struct TodoArgs {
    /// Plan id or 1-based position
    pub plan: String,
    /// Task id or 1-based position within the plan
    pub task: String,
}

#[derive(Args)]
pub struct RouteArgs {
    /// Plan id or 1-based position
    pub plan: String,
    pub from: String,
    pub to: String,
    /// flight, road or train
    pub mode: String,
    #[arg(long)]
    pub distance: Option<String>,
    #[arg(long)]
    pub time: Option<String>,
}

impl RouteArgs {
    /// Core parameters for the plan `plan_id` resolved from [`Self::plan`].
    pub fn into_params(self, plan_id: String) -> AddRoute {
        AddRoute {
            plan_id,
            from: self.from,
            to: self.to,
            transport_mode: self.mode,
            distance: self.distance,
            estimated_time: self.time,
        }
    }
}

#[derive(Args)]
pub struct NewPlanArgs {
    /// Plan kind: general, travel, business or personal
    #[arg(long = "type")]
    pub plan_type: Option<String>,
    /// Title and tasks separated by `|`
    #[arg(trailing_var_arg = true, num_args = 1.., required = true)]
    pub words: Vec<String>,
}

impl From<NewPlanArgs> for AddPlan {
    fn from(val: NewPlanArgs) -> Self {
        let line = val.words.join(" ");
        let mut parts = line.split('|').map(|p| p.trim().to_string());
        AddPlan {
            title: parts.next().unwrap_or_default(),
            tasks: parts.collect(),
            plan_type: val.plan_type,
        }
    }
}

/// Markdown listing of the questionnaire.
pub fn format_questions() -> String {
    let mut out = String::from("# Travel Questionnaire\n\n");
    for (idx, q) in TRAVEL_QUESTIONS.iter().enumerate() {
        out.push_str(&format!("{}. {} `{}`\n", idx + 1, q.question, q.id));
    }
    out
}

/// Handler for the one-shot commands.
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    pub fn handle_extract(&self, args: ExtractArgs) -> Result<()> {
        let text = match &args.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => io::read_to_string(io::stdin()).context("Failed to read standard input")?,
        };

        let ids = Arc::new(RandomIds);
        let Some(extracted) = PlanExtractor::new(ids.clone()).extract(&text) else {
            return self.renderer.render("No plan found in input.\n");
        };

        if args.json {
            println!("{}", extracted.to_json()?);
            return Ok(());
        }

        let mut store = PlanStore::new(ids);
        let plan = store.add_plan(extracted.title, extracted.todos, Some(extracted.metadata));
        self.renderer.render(&plan.to_string())
    }

    pub fn handle_key_command(&self, store: &KeyStore, command: KeyCommands) -> Result<()> {
        match command {
            KeyCommands::Set(args) => {
                let key = store.save(&args.key).context("Failed to store API key")?;
                self.renderer.render(&format!(
                    "Saved API key {} to {}\n",
                    key.masked(),
                    store.path().display()
                ))
            }
            KeyCommands::Show => self.show_key(store),
            KeyCommands::Path => {
                println!("{}", store.path().display());
                Ok(())
            }
        }
    }

    fn show_key(&self, store: &KeyStore) -> Result<()> {
        let from_env = std::env::var(KEY_ENV_VAR).is_ok_and(|v| !v.trim().is_empty());
        let Some(raw) = store.resolve()? else {
            return self.renderer.render(
                "No API key configured. Set one with `wp key set <KEY>` or GEMINI_API_KEY.\n",
            );
        };
        let source = if from_env {
            KEY_ENV_VAR.to_string()
        } else {
            store.path().display().to_string()
        };
        match ApiKey::parse(&raw) {
            Ok(key) => self
                .renderer
                .render(&format!("API key: {} (from {source})\n", key.masked())),
            Err(e) => self
                .renderer
                .render(&format!("Stored key is not usable ({source}): {e}\n")),
        }
    }

    pub fn list_questions(&self) -> Result<()> {
        self.renderer.render(&format_questions())
    }
}
