//! In-memory plan collection.
//!
//! Plans are kept newest first. Mutations addressed to an unknown plan or
//! task do nothing; the return values tell the caller whether anything
//! changed.

use jiff::Timestamp;
use log::{debug, info};

use crate::{
    ids::SharedIds,
    models::{Plan, PlanMetadata, PlanSummary, TodoItem, TravelRoute},
};

/// Owns every plan of a session plus the task selected for discussion.
pub struct PlanStore {
    plans: Vec<Plan>,
    selected: Option<TodoItem>,
    ids: SharedIds,
}

impl PlanStore {
    pub fn new(ids: SharedIds) -> Self {
        Self {
            plans: Vec::new(),
            selected: None,
            ids,
        }
    }

    /// Creates a plan from `todos` and puts it in front of all others.
    ///
    /// Without metadata the plan is a general one with no endpoints.
    pub fn add_plan(
        &mut self,
        title: impl Into<String>,
        todos: Vec<TodoItem>,
        metadata: Option<PlanMetadata>,
    ) -> &Plan {
        self.add_plan_at(title, todos, metadata, Timestamp::now())
    }

    /// [`Self::add_plan`] with an explicit creation time.
    pub fn add_plan_at(
        &mut self,
        title: impl Into<String>,
        todos: Vec<TodoItem>,
        metadata: Option<PlanMetadata>,
        created_at: Timestamp,
    ) -> &Plan {
        let meta = metadata.unwrap_or_default();
        let plan = Plan {
            id: self.ids.next_id(),
            title: title.into(),
            todos,
            created_at,
            plan_type: meta.plan_type,
            routes: meta.routes,
            start_location: meta.start_location,
            end_location: meta.end_location,
            travel_dates: meta.travel_dates,
        };
        info!(
            "created plan {} '{}' with {} tasks",
            plan.id,
            plan.title,
            plan.todos.len()
        );
        self.plans.insert(0, plan);
        &self.plans[0]
    }

    /// Flips the completion flag of one task.
    ///
    /// Returns the new state, or `None` when the plan or task is unknown.
    pub fn toggle_todo(&mut self, plan_id: &str, todo_id: &str) -> Option<bool> {
        let todo = self
            .plans
            .iter_mut()
            .find(|p| p.id == plan_id)?
            .todos
            .iter_mut()
            .find(|t| t.id == todo_id)?;
        todo.completed = !todo.completed;
        debug!("toggled {plan_id}/{todo_id} to {}", todo.completed);
        Some(todo.completed)
    }

    /// Appends a route leg. Returns `false` when the plan is unknown.
    pub fn add_route(&mut self, plan_id: &str, route: TravelRoute) -> bool {
        match self.plans.iter_mut().find(|p| p.id == plan_id) {
            Some(plan) => {
                debug!("added route {} → {} to {plan_id}", route.from, route.to);
                plan.routes.push(route);
                true
            }
            None => false,
        }
    }

    /// Records the task the user wants to talk about, replacing any earlier
    /// selection.
    pub fn select_todo_for_discussion(&mut self, todo: TodoItem) {
        debug!("selected task {} for discussion", todo.id);
        self.selected = Some(todo);
    }

    pub fn selected_todo(&self) -> Option<&TodoItem> {
        self.selected.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Newest first.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn plan(&self, plan_id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == plan_id)
    }

    pub fn find_todo(&self, plan_id: &str, todo_id: &str) -> Option<&TodoItem> {
        self.plan(plan_id)?.todo(todo_id)
    }

    pub fn summaries(&self) -> Vec<PlanSummary> {
        self.plans.iter().map(PlanSummary::from).collect()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
