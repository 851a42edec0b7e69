//! Session facade used by the command layer
//!
//! [`ModelManager`] owns the versioned store and one [`Filter`] per list kind
//! (members, events, tasks). Filtered views are recomputed from the live
//! store on every call, so they always reflect the latest mutation.
//!
//! After a successful undo or redo all three filters go back to "show all";
//! a stale filter could otherwise hide entries the undo just brought back.

use super::club_data::ClubData;
use super::filters::Filter;
use super::identity::ModelError;
use super::versioned::VersionedClubData;
use crate::domain::{Amount, Attendance, Budget, Event, EventId, Member, Task};

/// Spending against the current budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSummary {
    pub budget: Budget,

    /// Sum of expenses of events inside the budget period
    pub spent: Amount,

    /// Number of events inside the budget period
    pub event_count: usize,
}

impl BudgetSummary {
    pub fn is_overspent(&self) -> bool {
        self.spent > self.budget.amount
    }

    /// Budget left, or zero once overspent
    pub fn remaining(&self) -> Amount {
        Amount::from_cents(self.budget.amount.cents().saturating_sub(self.spent.cents()))
    }

    /// Amount spent beyond the budget, or zero
    pub fn overspent_by(&self) -> Amount {
        Amount::from_cents(self.spent.cents().saturating_sub(self.budget.amount.cents()))
    }
}

/// The store plus the per-kind filters shown to the user
#[derive(Debug, Default)]
pub struct ModelManager {
    store: VersionedClubData,
    member_filter: Filter<Member>,
    event_filter: Filter<Event>,
    task_filter: Filter<Task>,
}

impl ModelManager {
    /// Starts a session from a copy of `initial`, with no history and no filters
    pub fn new(initial: &ClubData) -> Self {
        Self {
            store: VersionedClubData::from_data(initial),
            ..Self::default()
        }
    }

    /// Returns the live store, e.g. for saving
    pub fn data(&self) -> &ClubData {
        self.store.data()
    }

    /// Replaces the live store with a copy of `source`; history is untouched
    pub fn reset_data(&mut self, source: &ClubData) {
        self.store.data_mut().reset_data(source);
    }

    // History

    pub fn commit(&mut self) {
        self.store.commit();
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.store.undo();
        if undone {
            self.clear_filters();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.store.redo();
        if redone {
            self.clear_filters();
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    pub fn rollback_last_commit(&mut self) -> Result<(), ModelError> {
        self.store.rollback_last_commit()
    }

    // Filters

    pub fn set_member_filter(&mut self, filter: Filter<Member>) {
        self.member_filter = filter;
    }

    pub fn set_event_filter(&mut self, filter: Filter<Event>) {
        self.event_filter = filter;
    }

    pub fn set_task_filter(&mut self, filter: Filter<Task>) {
        self.task_filter = filter;
    }

    pub fn member_filter(&self) -> &Filter<Member> {
        &self.member_filter
    }

    pub fn event_filter(&self) -> &Filter<Event> {
        &self.event_filter
    }

    pub fn task_filter(&self) -> &Filter<Task> {
        &self.task_filter
    }

    /// Resets every list filter to "show all"
    pub fn clear_filters(&mut self) {
        self.member_filter = Filter::all();
        self.event_filter = Filter::all();
        self.task_filter = Filter::all();
    }

    pub fn filtered_members(&self) -> Vec<Member> {
        filtered(self.store.members(), &self.member_filter)
    }

    pub fn filtered_events(&self) -> Vec<Event> {
        filtered(self.store.events(), &self.event_filter)
    }

    pub fn filtered_tasks(&self) -> Vec<Task> {
        filtered(self.store.tasks(), &self.task_filter)
    }

    // Members

    pub fn has_member(&self, member: &Member) -> bool {
        self.store.has_member(member)
    }

    pub fn add_member(&mut self, member: Member) -> Result<(), ModelError> {
        self.store.add_member(member)
    }

    pub fn replace_member(&mut self, target: &Member, edited: Member) -> Result<(), ModelError> {
        self.store.replace_member(target, edited)
    }

    pub fn remove_member(&mut self, member: &Member) -> Result<Member, ModelError> {
        self.store.remove_member(member)
    }

    // Events

    pub fn has_event(&self, event: &Event) -> bool {
        self.store.has_event(event)
    }

    pub fn add_event(&mut self, event: Event) -> Result<(), ModelError> {
        self.store.add_event(event)
    }

    pub fn replace_event(&mut self, target: &Event, edited: Event) -> Result<(), ModelError> {
        self.store.replace_event(target, edited)
    }

    pub fn remove_event(&mut self, event: &Event) -> Result<Event, ModelError> {
        self.store.remove_event(event)
    }

    pub fn event_by_id(&self, id: &EventId) -> Option<&Event> {
        self.store.event_by_id(id)
    }

    // Tasks

    pub fn has_task(&self, task: &Task) -> bool {
        self.store.has_task(task)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), ModelError> {
        self.store.add_task(task)
    }

    pub fn replace_task(&mut self, target: &Task, edited: Task) -> Result<(), ModelError> {
        self.store.replace_task(target, edited)
    }

    pub fn remove_task(&mut self, task: &Task) -> Result<Task, ModelError> {
        self.store.remove_task(task)
    }

    // Attendance

    pub fn has_attendance(&self, record: &Attendance) -> bool {
        self.store.has_attendance(record)
    }

    pub fn add_attendance(&mut self, record: Attendance) -> Result<(), ModelError> {
        self.store.add_attendance(record)
    }

    pub fn replace_attendance(
        &mut self,
        target: &Attendance,
        edited: Attendance,
    ) -> Result<(), ModelError> {
        self.store.replace_attendance(target, edited)
    }

    pub fn remove_attendance(&mut self, record: &Attendance) -> Result<Attendance, ModelError> {
        self.store.remove_attendance(record)
    }

    /// Every record for the event, unfiltered
    pub fn attendance_for_event(&self, event_id: &EventId) -> Vec<Attendance> {
        self.store.attendance_for_event(event_id)
    }

    // Budget

    pub fn budget(&self) -> Option<&Budget> {
        self.store.budget()
    }

    pub fn set_budget(&mut self, budget: Budget) -> Option<Budget> {
        self.store.set_budget(budget)
    }

    pub fn clear_budget(&mut self) -> Option<Budget> {
        self.store.clear_budget()
    }

    /// Events dated inside the budget period; empty when no budget is set
    pub fn events_in_budget_period(&self) -> Vec<Event> {
        match self.store.budget() {
            Some(budget) => self
                .store
                .events()
                .iter()
                .filter(|e| budget.covers(e.date))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Totals the expenses of events inside the budget period
    pub fn budget_summary(&self) -> Option<BudgetSummary> {
        let budget = self.store.budget()?.clone();
        let events = self.events_in_budget_period();
        let spent = events
            .iter()
            .fold(Amount::ZERO, |acc, e| acc.saturating_add(e.expense));

        Some(BudgetSummary {
            budget,
            spent,
            event_count: events.len(),
        })
    }
}

fn filtered<'a, T: Clone + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    filter: &Filter<T>,
) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}
