use std::path::PathBuf;

use chrono::NaiveDate;
use uuid::Uuid;

use super::assignment::{Assignment, AssignmentFields, MatchKey};

/// One of the fixed class buckets, backed by its own file.
///
/// Record order is insertion order, which is also file order and
/// on-screen order.
#[derive(Debug, Clone)]
pub struct ClassSlot {
    pub name: String,
    pub path: PathBuf,
    pub assignments: Vec<Assignment>,
}

impl ClassSlot {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            assignments: Vec::new(),
        }
    }

    /// Append a record. No dedup.
    pub fn add(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    pub fn get(&self, id: Uuid) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// Index of the first record whose displayed fields equal `key`.
    pub fn position_of(&self, key: &MatchKey<'_>) -> Option<usize> {
        self.assignments.iter().position(|a| a.match_key() == *key)
    }

    /// Remove the first record structurally equal to `record`.
    /// With duplicates, the earliest one in list order goes.
    pub fn remove(&mut self, record: &Assignment) -> Option<Assignment> {
        let idx = self.position_of(&record.match_key())?;
        Some(self.assignments.remove(idx))
    }

    /// Give every record in `ids` the same field values.
    /// Returns how many records were changed.
    pub fn apply_edit(&mut self, ids: &[Uuid], fields: &AssignmentFields, today: NaiveDate) -> usize {
        let mut changed = 0;
        for a in self.assignments.iter_mut().filter(|a| ids.contains(&a.id)) {
            a.apply(fields, today);
            changed += 1;
        }
        changed
    }

    /// Recompute every derived date field against `today`.
    pub fn refresh(&mut self, today: NaiveDate) {
        for a in &mut self.assignments {
            a.refresh(today);
        }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::assignment::Status;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn record(name: &str, due: &str) -> Assignment {
        Assignment::new(
            AssignmentFields {
                name: name.into(),
                due_date: due.into(),
                kind: "Homework".into(),
                ..Default::default()
            },
            today(),
        )
    }

    fn slot_with(names: &[&str]) -> ClassSlot {
        let mut slot = ClassSlot::new("Class 1", "class1.csv");
        for n in names {
            slot.add(record(n, "11/02/2026"));
        }
        slot
    }

    fn names(slot: &ClassSlot) -> Vec<&str> {
        slot.assignments.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn add_preserves_insertion_order_without_dedup() {
        let slot = slot_with(&["b", "a", "b"]);
        assert_eq!(names(&slot), ["b", "a", "b"]);
        assert_eq!(slot.len(), 3);
    }

    #[test]
    fn remove_takes_first_structural_match() {
        let mut slot = slot_with(&["Essay", "Quiz", "Essay"]);
        let first_id = slot.assignments[0].id;
        let last_id = slot.assignments[2].id;

        // A fresh record with equal fields but its own id still matches.
        let probe = record("Essay", "11/02/2026");
        let removed = slot.remove(&probe).unwrap();
        assert_eq!(removed.id, first_id);
        assert_eq!(names(&slot), ["Quiz", "Essay"]);
        assert_eq!(slot.assignments[1].id, last_id);

        assert!(slot.remove(&record("Missing", "")).is_none());
        assert_eq!(slot.len(), 2);
    }

    #[test]
    fn get_finds_records_by_id() {
        let mut slot = slot_with(&["Essay", "Essay"]);
        let second = slot.assignments[1].id;
        assert_eq!(slot.get(second).map(|a| a.id), Some(second));

        let record = slot.get(second).cloned().unwrap();
        slot.remove(&record).unwrap();
        assert!(slot.get(second).is_some());
        assert_eq!(slot.len(), 1);
    }

    #[test]
    fn apply_edit_sets_same_values_on_every_target() {
        let mut slot = slot_with(&["a", "b", "c"]);
        let ids = [slot.assignments[0].id, slot.assignments[2].id];
        let fields = AssignmentFields {
            status: Status::Complete,
            name: "done".into(),
            due_date: "10/20/2026".into(),
            ..Default::default()
        };
        assert_eq!(slot.apply_edit(&ids, &fields, today()), 2);
        assert_eq!(names(&slot), ["done", "b", "done"]);
        assert_eq!(slot.assignments[0].days_until_due, Some(1));
        assert_eq!(slot.assignments[1].status, Status::NotStarted);
        assert_eq!(slot.assignments[2].status, Status::Complete);
    }

    #[test]
    fn refresh_recomputes_days_for_a_new_day() {
        let mut slot = slot_with(&["a"]);
        assert_eq!(slot.assignments[0].days_until_due, Some(14));
        slot.refresh(NaiveDate::from_ymd_opt(2026, 11, 4).unwrap());
        assert_eq!(slot.assignments[0].days_until_due, Some(-2));
    }
}
