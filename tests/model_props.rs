//! Store-level behaviour tests
//!
//! Scenario tests for the identity rules and the commit/undo/redo protocol,
//! plus property tests over random mutation sequences.

use clubroll::domain::{Amount, Attendance, Event, Member, Task, Year};
use clubroll::model::{ClubData, EntityKind, Filter, ModelError, ModelManager, UniqueList};
use proptest::prelude::*;

fn member(name: &str, number: &str) -> Member {
    Member::new(
        name,
        number.parse().unwrap(),
        Year::new(1).unwrap(),
        "member@u.nus.edu".parse().unwrap(),
        "91234567".parse().unwrap(),
    )
    .unwrap()
}

fn event(id: &str, desc: &str) -> Event {
    Event::new(
        id.parse().unwrap(),
        "2024-06-01".parse().unwrap(),
        desc,
        Amount::ZERO,
    )
    .unwrap()
}

fn record(event: &str, name: &str, attended: bool) -> Attendance {
    Attendance::new(event.parse().unwrap(), name, attended).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn scenario_undo_and_redo_member_add() {
    let mut manager = ModelManager::default();

    manager.commit();
    manager.add_member(member("Alice", "A1234567X")).unwrap();

    assert!(manager.undo());
    assert_eq!(manager.data().members().len(), 0);

    assert!(manager.redo());
    let members = manager.data().members();
    assert_eq!(members.len(), 1);
    assert_eq!(members.get(0).unwrap().student_number.as_str(), "A1234567X");
}

#[test]
fn scenario_duplicate_event_rejected() {
    let mut manager = ModelManager::default();

    manager.add_event(event("E1", "X")).unwrap();
    let result = manager.add_event(event("E1", "Y"));

    assert_eq!(result, Err(ModelError::Duplicate(EntityKind::Event)));
    let events = manager.data().events();
    assert_eq!(events.len(), 1);
    assert_eq!(events.get(0).unwrap().description, "X");
}

#[test]
fn scenario_attendance_update_then_stale_remove() {
    let mut manager = ModelManager::default();
    let absent = record("E1", "Alice", false);
    let present = record("E1", "Alice", true);

    manager.add_attendance(absent.clone()).unwrap();
    manager.replace_attendance(&absent, present.clone()).unwrap();

    assert_eq!(
        manager.remove_attendance(&absent),
        Err(ModelError::NotFound(EntityKind::Attendance))
    );
    assert_eq!(manager.attendance_for_event(&"E1".parse().unwrap()), vec![present]);
}

#[test]
fn scenario_undo_resets_member_filter() {
    let mut manager = ModelManager::default();
    manager.add_member(member("X", "A1111111A")).unwrap();
    manager.add_member(member("Y", "A2222222B")).unwrap();
    manager.set_member_filter(Filter::name_keywords(["X"]));
    assert_eq!(manager.filtered_members().len(), 1);

    manager.commit();
    manager.add_task(Task::new("Venue", "2024-01-01".parse().unwrap()).unwrap())
        .unwrap();
    assert!(manager.undo());

    assert!(manager.member_filter().is_all());
    assert_eq!(manager.filtered_members().len(), 2);
}

#[test]
fn replace_with_same_identity_does_not_collide_with_itself() {
    let mut manager = ModelManager::default();
    let alice = member("Alice", "A1234567X");
    manager.add_member(alice.clone()).unwrap();

    manager
        .replace_member(&alice, member("Alice Tan", "a1234567x"))
        .unwrap();

    assert_eq!(manager.data().members().get(0).unwrap().name, "Alice Tan");
}

#[test]
fn redo_after_fresh_commit_fails() {
    let mut manager = ModelManager::default();
    manager.commit();
    manager.add_member(member("Alice", "A1234567X")).unwrap();
    manager.undo();

    manager.commit();

    assert!(!manager.can_redo());
    assert!(!manager.redo());
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(u8, u8),
    Replace(u8, u8, u8),
    Remove(u8, u8),
}

fn make_event(id: u8, version: u8) -> Event {
    event(&format!("E{}", id), &format!("v{}", version))
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..6, 0u8..3).prop_map(|(id, v)| Op::Add(id, v)),
        (0u8..6, 0u8..6, 0u8..3).prop_map(|(t, id, v)| Op::Replace(t, id, v)),
        (0u8..6, 0u8..3).prop_map(|(id, v)| Op::Remove(id, v)),
    ]
}

fn apply(manager: &mut ModelManager, op: &Op) -> Result<(), ModelError> {
    match *op {
        Op::Add(id, v) => manager.add_event(make_event(id, v)),
        Op::Replace(target, id, v) => {
            let stored = manager
                .data()
                .events()
                .find(&make_event(target, 0))
                .cloned()
                .unwrap_or_else(|| make_event(target, 0));
            manager.replace_event(&stored, make_event(id, v))
        }
        Op::Remove(id, v) => manager.remove_event(&make_event(id, v)).map(|_| ()),
    }
}

fn ids_unique(data: &ClubData) -> bool {
    let ids: Vec<_> = data.events().iter().map(|e| e.id.clone()).collect();
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    deduped.len() == ids.len()
}

proptest! {
    // Identity stays unique and failed operations change nothing.
    #[test]
    fn prop_failures_leave_store_unchanged(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let mut manager = ModelManager::default();

        for op in &ops {
            let before = manager.data().clone();
            if apply(&mut manager, op).is_err() {
                prop_assert_eq!(manager.data(), &before);
            }
            prop_assert!(ids_unique(manager.data()));
        }
    }

    // Committing before each change lets undo walk back through every state
    // and redo walk forward through them again.
    #[test]
    fn prop_undo_redo_retrace_history(ops in proptest::collection::vec(arb_op(), 1..20)) {
        let mut manager = ModelManager::default();
        let mut states = vec![manager.data().clone()];

        for op in &ops {
            manager.commit();
            if apply(&mut manager, op).is_err() {
                manager.rollback_last_commit().unwrap();
                continue;
            }
            states.push(manager.data().clone());
        }

        for expected in states.iter().rev().skip(1) {
            prop_assert!(manager.undo());
            prop_assert_eq!(manager.data(), expected);
        }
        prop_assert!(!manager.can_undo());

        for expected in states.iter().skip(1) {
            prop_assert!(manager.redo());
            prop_assert_eq!(manager.data(), expected);
        }
        prop_assert!(!manager.can_redo());
    }

    // Adding then checking membership always agrees, whatever the case of the
    // student number.
    #[test]
    fn prop_add_then_contains(digits in 0u32..10_000_000, lower in any::<bool>()) {
        let number = format!("A{:07}X", digits);
        let number = if lower { number.to_lowercase() } else { number };
        let mut list = UniqueList::new();
        let m = member("Someone", &number);

        list.add(m.clone()).unwrap();

        prop_assert!(list.contains(&m));
        prop_assert!(list.contains(&member("Other", &number.to_uppercase())));
    }
}
