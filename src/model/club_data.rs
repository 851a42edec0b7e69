//! Aggregate store of everything the club tracks
//!
//! [`ClubData`] owns one [`UniqueList`] per entity kind plus the optional
//! budget. Attendance records hold event ids and member names by value; the
//! store does not check that the referenced event or member exists.

use super::identity::ModelError;
use super::unique::UniqueList;
use crate::domain::{Attendance, Budget, Event, EventId, Member, Task};

/// Members, events, tasks, attendance and budget of one club
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubData {
    members: UniqueList<Member>,
    events: UniqueList<Event>,
    tasks: UniqueList<Task>,
    attendance: UniqueList<Attendance>,
    budget: Option<Budget>,
}

impl ClubData {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every list and the budget with copies of `source`'s
    pub fn reset_data(&mut self, source: &ClubData) {
        *self = source.clone();
    }

    /// Returns true if nothing at all is stored
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
            && self.events.is_empty()
            && self.tasks.is_empty()
            && self.attendance.is_empty()
            && self.budget.is_none()
    }

    // Members

    pub fn members(&self) -> &UniqueList<Member> {
        &self.members
    }

    pub fn has_member(&self, member: &Member) -> bool {
        self.members.contains(member)
    }

    pub fn add_member(&mut self, member: Member) -> Result<(), ModelError> {
        self.members.add(member)
    }

    pub fn replace_member(&mut self, target: &Member, edited: Member) -> Result<(), ModelError> {
        self.members.replace(target, edited)
    }

    pub fn remove_member(&mut self, member: &Member) -> Result<Member, ModelError> {
        self.members.remove(member)
    }

    pub fn set_members(&mut self, members: Vec<Member>) -> Result<(), ModelError> {
        self.members.replace_all(members)
    }

    // Events

    pub fn events(&self) -> &UniqueList<Event> {
        &self.events
    }

    pub fn has_event(&self, event: &Event) -> bool {
        self.events.contains(event)
    }

    pub fn add_event(&mut self, event: Event) -> Result<(), ModelError> {
        self.events.add(event)
    }

    pub fn replace_event(&mut self, target: &Event, edited: Event) -> Result<(), ModelError> {
        self.events.replace(target, edited)
    }

    pub fn remove_event(&mut self, event: &Event) -> Result<Event, ModelError> {
        self.events.remove(event)
    }

    pub fn set_events(&mut self, events: Vec<Event>) -> Result<(), ModelError> {
        self.events.replace_all(events)
    }

    /// Looks up an event by id (linear scan)
    pub fn event_by_id(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    // Tasks

    pub fn tasks(&self) -> &UniqueList<Task> {
        &self.tasks
    }

    pub fn has_task(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), ModelError> {
        self.tasks.add(task)
    }

    pub fn replace_task(&mut self, target: &Task, edited: Task) -> Result<(), ModelError> {
        self.tasks.replace(target, edited)
    }

    pub fn remove_task(&mut self, task: &Task) -> Result<Task, ModelError> {
        self.tasks.remove(task)
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> Result<(), ModelError> {
        self.tasks.replace_all(tasks)
    }

    // Attendance

    pub fn attendance(&self) -> &UniqueList<Attendance> {
        &self.attendance
    }

    pub fn has_attendance(&self, record: &Attendance) -> bool {
        self.attendance.contains(record)
    }

    pub fn add_attendance(&mut self, record: Attendance) -> Result<(), ModelError> {
        self.attendance.add(record)
    }

    pub fn replace_attendance(
        &mut self,
        target: &Attendance,
        edited: Attendance,
    ) -> Result<(), ModelError> {
        self.attendance.replace(target, edited)
    }

    pub fn remove_attendance(&mut self, record: &Attendance) -> Result<Attendance, ModelError> {
        self.attendance.remove(record)
    }

    pub fn set_attendance(&mut self, records: Vec<Attendance>) -> Result<(), ModelError> {
        self.attendance.replace_all(records)
    }

    /// Returns the records for one event, in insertion order
    pub fn attendance_for_event(&self, event_id: &EventId) -> Vec<Attendance> {
        self.attendance
            .iter()
            .filter(|r| r.is_for_event(event_id))
            .cloned()
            .collect()
    }

    // Budget

    pub fn budget(&self) -> Option<&Budget> {
        self.budget.as_ref()
    }

    /// Sets the budget, returning the one it replaced
    pub fn set_budget(&mut self, budget: Budget) -> Option<Budget> {
        self.budget.replace(budget)
    }

    /// Removes the budget, returning it if one was set
    pub fn clear_budget(&mut self) -> Option<Budget> {
        self.budget.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Year};
    use crate::model::identity::EntityKind;

    fn member(name: &str, number: &str) -> Member {
        Member::new(
            name,
            number.parse().unwrap(),
            Year::new(3).unwrap(),
            "m@u.nus.edu".parse().unwrap(),
            "91234567".parse().unwrap(),
        )
        .unwrap()
    }

    fn event(id: &str, desc: &str) -> Event {
        Event::new(
            id.parse().unwrap(),
            "2024-01-01".parse().unwrap(),
            desc,
            Amount::from_cents(500),
        )
        .unwrap()
    }

    fn budget() -> Budget {
        Budget::new(
            Amount::from_cents(10_000),
            "2024-01-01".parse().unwrap(),
            "2024-12-31".parse().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn new_store_is_empty() {
        let data = ClubData::new();
        assert!(data.is_empty());
        assert!(data.budget().is_none());
    }

    #[test]
    fn per_kind_errors_are_tagged() {
        let mut data = ClubData::new();
        data.add_member(member("Alice", "A1234567X")).unwrap();
        data.add_event(event("E1", "X")).unwrap();

        assert_eq!(
            data.add_member(member("Alice", "A1234567X")),
            Err(ModelError::Duplicate(EntityKind::Member))
        );
        assert_eq!(
            data.add_event(event("E1", "Y")),
            Err(ModelError::Duplicate(EntityKind::Event))
        );
        assert_eq!(
            data.remove_task(&Task::new("Nope", "2024-01-01".parse().unwrap()).unwrap()),
            Err(ModelError::NotFound(EntityKind::Task))
        );
    }

    #[test]
    fn event_by_id_finds_exact_id() {
        let mut data = ClubData::new();
        data.add_event(event("E1", "Camp")).unwrap();
        data.add_event(event("E2", "Dinner")).unwrap();

        let found = data.event_by_id(&"E2".parse().unwrap()).unwrap();
        assert_eq!(found.description, "Dinner");
        assert!(data.event_by_id(&"e2".parse().unwrap()).is_none());
    }

    #[test]
    fn attendance_for_event_filters_by_id() {
        let mut data = ClubData::new();
        for (event_id, name) in [("E1", "Alice"), ("E2", "Alice"), ("E1", "Bob")] {
            data.add_attendance(Attendance::new(event_id.parse().unwrap(), name, false).unwrap())
                .unwrap();
        }

        let records = data.attendance_for_event(&"E1".parse().unwrap());
        let names: Vec<_> = records.iter().map(|r| r.member_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn reset_data_copies_instead_of_aliasing() {
        let mut source = ClubData::new();
        source.add_member(member("Alice", "A1234567X")).unwrap();
        source.set_budget(budget());

        let mut target = ClubData::new();
        target.add_event(event("E1", "gone")).unwrap();
        target.reset_data(&source);

        assert_eq!(target, source);

        source.add_member(member("Bob", "A7654321Y")).unwrap();
        assert_eq!(target.members().len(), 1);
        assert!(target.events().is_empty());
    }

    #[test]
    fn budget_set_and_clear() {
        let mut data = ClubData::new();

        assert!(data.set_budget(budget()).is_none());
        assert!(data.set_budget(budget()).is_some());
        assert_eq!(data.clear_budget(), Some(budget()));
        assert!(data.clear_budget().is_none());
    }

    #[test]
    fn set_members_rejects_duplicates_without_change() {
        let mut data = ClubData::new();
        data.add_member(member("Alice", "A1234567X")).unwrap();

        let result = data.set_members(vec![
            member("Bob", "A7654321Y"),
            member("Robert", "a7654321y"),
        ]);

        assert_eq!(result, Err(ModelError::Duplicate(EntityKind::Member)));
        assert_eq!(data.members().get(0).unwrap().name, "Alice");
    }
}
