//! Interactive chat loop.
//!
//! Plain lines go to the session; lines starting with `/` are parsed as
//! [`SlashCommand`]s. Plans and tasks can be addressed by id or by their
//! 1-based position as listed.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::debug;
use rustyline::{DefaultEditor, error::ReadlineError};
use waypoint_core::{
    Plan, PlanStore, Role, Session, TodoRef, WaypointError,
    display::{PlanHistory, PlanSummaries},
};

use crate::{
    cli::{SlashCommand, SlashLine, TodoArgs, format_questions},
    renderer::TerminalRenderer,
};

const HELP: &str = "\
# Commands

- `/skip` stop the travel questionnaire
- `/plans` list plans
- `/history` planning history by day
- `/show <plan>` show one plan
- `/toggle <plan> <task>` tick or untick a task
- `/ask <plan> <task>` ask about a task
- `/route <plan> <from> <to> <flight|road|train>` add a route leg
- `/new <title> | <task> | ...` create a plan by hand
- `/questions` list the questionnaire
- `/help` show this help
- `/quit` leave

Plans and tasks take an id or a position such as `1`.
";

/// Whether the loop keeps going after a command.
enum Flow {
    Continue,
    Quit,
}

/// Resolves `token` to a plan id: a 1-based position or an exact id.
pub fn resolve_plan<'a>(store: &'a PlanStore, token: &str) -> Result<&'a Plan> {
    if let Ok(position) = token.parse::<usize>()
        && let Some(plan) = position.checked_sub(1).and_then(|i| store.plans().get(i))
    {
        return Ok(plan);
    }
    store
        .plan(token)
        .ok_or_else(|| anyhow!(WaypointError::PlanNotFound { id: token.to_string() }))
}

/// Resolves a plan and task pair typed by the user.
pub fn resolve_todo(store: &PlanStore, args: &TodoArgs) -> Result<TodoRef> {
    let plan = resolve_plan(store, &args.plan)?;
    if let Ok(position) = args.task.parse::<usize>()
        && let Some(todo) = position.checked_sub(1).and_then(|i| plan.todos.get(i))
    {
        return Ok(TodoRef::new(&plan.id, &todo.id));
    }
    match plan.todo(&args.task) {
        Some(todo) => Ok(TodoRef::new(&plan.id, &todo.id)),
        None => Err(anyhow!(WaypointError::TodoNotFound {
            plan_id: plan.id.clone(),
            id: args.task.clone(),
        })),
    }
}

pub struct Repl {
    session: Session,
    renderer: TerminalRenderer,
    prefill: Option<String>,
}

impl Repl {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self {
            session,
            renderer,
            prefill: None,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let mut editor = DefaultEditor::new().context("Failed to initialize line editor")?;

        for message in self.session.transcript() {
            self.renderer.render(&format!("{message}\n"))?;
        }
        self.renderer.hint("Type /help for commands.")?;

        loop {
            let prompt = self.prompt()?;
            let read = match self.prefill.take() {
                Some(prefill) => editor.readline_with_initial(&prompt, (&prefill, "")),
                None => editor.readline(&prompt),
            };
            let line = match read {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => return Err(e).context("Failed to read input"),
            };
            if line.trim().is_empty() {
                continue;
            }
            if let Err(e) = editor.add_history_entry(line.as_str()) {
                debug!("history entry not recorded: {e}");
            }

            let outcome = match line.trim().strip_prefix('/') {
                Some(command) => self.handle_command(command),
                None => self.handle_input(&line).await.map(|()| Flow::Continue),
            };
            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => self.renderer.render(&format!("Error: {e:#}\n"))?,
            }
        }
        Ok(())
    }

    /// Prompt text, with questionnaire progress and hint while one runs.
    fn prompt(&self) -> Result<String> {
        let q = self.session.questionnaire();
        let Some(index) = q.current_index() else {
            return Ok("> ".to_string());
        };
        if let Some(placeholder) = q.placeholder() {
            self.renderer.hint(&format!("{placeholder} (/skip to stop)"))?;
        }
        Ok(format!(
            "[{}/{} {}%] > ",
            index + 1,
            q.total(),
            q.progress_percent()
        ))
    }

    async fn handle_input(&mut self, line: &str) -> Result<()> {
        let turn = match self.session.submit(line).await {
            Ok(turn) => turn,
            Err(WaypointError::Busy) => {
                return self.renderer.hint("Still working on the previous request.");
            }
            Err(e) => return Err(e.into()),
        };

        for message in turn.messages.iter().filter(|m| m.role == Role::Assistant) {
            self.renderer.render(&format!("{message}\n"))?;
        }
        if let Some(notice) = &turn.notice {
            self.renderer.notice(notice)?;
        }
        if turn.created_plan.is_some() {
            self.renderer
                .hint("Use /show 1 to see the new plan, /toggle 1 <task> to tick tasks off.")?;
        }
        Ok(())
    }

    fn handle_command(&mut self, line: &str) -> Result<Flow> {
        let slash = SlashLine::try_parse_from(line.split_whitespace())
            .map_err(|e| anyhow!("{}", e.render().to_string().trim_end()))?;

        match slash.command {
            SlashCommand::Quit => return Ok(Flow::Quit),
            SlashCommand::Help => self.renderer.render(HELP)?,
            SlashCommand::Questions => self.renderer.render(&format_questions())?,
            SlashCommand::Skip => match self.session.skip_questionnaire() {
                Some(message) => self.renderer.render(&format!("{message}\n"))?,
                None => self.renderer.hint("No questionnaire in progress.")?,
            },
            SlashCommand::Plans => {
                let summaries = PlanSummaries(self.session.store().summaries());
                self.renderer.render(&summaries.to_string())?;
            }
            SlashCommand::History => {
                let history = PlanHistory::for_now(self.session.store().summaries());
                self.renderer.render(&history.to_string())?;
            }
            SlashCommand::Show(args) => {
                let plan = resolve_plan(self.session.store(), &args.plan)?;
                self.renderer.render(&plan.to_string())?;
            }
            SlashCommand::Toggle(args) => {
                let target = resolve_todo(self.session.store(), &args)?;
                let done = self.session.toggle_todo(&target)?;
                self.renderer.render(&format!(
                    "Task `{}` marked {}.\n",
                    target.todo_id,
                    if done { "done" } else { "not done" }
                ))?;
            }
            SlashCommand::Ask(args) => {
                let target = resolve_todo(self.session.store(), &args)?;
                self.prefill = Some(self.session.discuss_todo(&target)?);
            }
            SlashCommand::Route(args) => {
                let plan_id = resolve_plan(self.session.store(), &args.plan)?.id.clone();
                let route = self.session.add_route(&args.into_params(plan_id))?;
                self.renderer.render(&route.to_string())?;
            }
            SlashCommand::New(args) => {
                let plan = self.session.create_plan(&args.into())?;
                self.renderer.render(&plan.to_string())?;
            }
        }
        Ok(Flow::Continue)
    }
}
