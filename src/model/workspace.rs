use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use uuid::Uuid;

use super::assignment::{is_valid_due_date, Assignment, AssignmentFields, Status};
use super::class_slot::ClassSlot;
use super::settings::{Settings, ThemeName, CLASS_COUNT};
use crate::error::{Action, Result, TrackerError};
use crate::io;

/// Everything the tracker knows: the class slots, the settings and which
/// class is on screen. Every mutating command rewrites the affected file
/// before returning.
#[derive(Debug)]
pub struct Workspace {
    pub classes: Vec<ClassSlot>,
    pub settings: Settings,
    pub current: usize,
    dir: PathBuf,
}

impl Workspace {
    /// Load settings and all class files from `dir`, creating whatever
    /// is missing.
    pub fn open(dir: &Path, today: NaiveDate) -> Result<Self> {
        let settings = io::load_settings(&io::paths::settings_path(dir))?;

        let mut classes = Vec::with_capacity(CLASS_COUNT);
        for index in 0..CLASS_COUNT {
            let path = io::paths::class_file_path(dir, index);
            let mut slot = ClassSlot::new(settings.class_label(index), path);
            slot.assignments = io::load_class(&slot.path, today)?;
            classes.push(slot);
        }

        log::info!(
            "Opened workspace at {} ({} assignments, theme {})",
            dir.display(),
            classes.iter().map(ClassSlot::len).sum::<usize>(),
            settings.theme
        );

        Ok(Self {
            classes,
            settings,
            current: 0,
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn current_class(&self) -> &ClassSlot {
        &self.classes[self.current]
    }

    pub fn theme(&self) -> ThemeName {
        self.settings.theme
    }

    /// Switch the class on screen. Out-of-range indices are ignored.
    pub fn select_class(&mut self, index: usize) {
        if index < self.classes.len() {
            self.current = index;
        }
    }

    fn save_class(&self, index: usize, today: NaiveDate) -> Result<()> {
        let slot = &self.classes[index];
        io::save_class(&slot.path, &slot.assignments, today)?;
        Ok(())
    }

    /// Recompute days-until-due in every class against `today`.
    pub fn refresh(&mut self, today: NaiveDate) {
        for slot in &mut self.classes {
            slot.refresh(today);
        }
    }

    /// Append a new record to the current class and save it.
    /// The status of a new record is always "Not Started".
    pub fn add_assignment(&mut self, mut fields: AssignmentFields, today: NaiveDate) -> Result<Uuid> {
        if !is_valid_due_date(&fields.due_date) {
            return Err(TrackerError::InvalidDate(fields.due_date));
        }
        fields.status = Status::NotStarted;
        let assignment = Assignment::new(fields, today);
        let id = assignment.id;
        self.classes[self.current].add(assignment);
        self.save_class(self.current, today)?;
        Ok(id)
    }

    /// Give every selected record of class `class` the same new field
    /// values and save that class, which need not be the one on screen.
    ///
    /// Fails with `NoSelection` when none of the targets exist any more.
    pub fn edit_selected(
        &mut self,
        class: usize,
        selected: &[Uuid],
        fields: &AssignmentFields,
        today: NaiveDate,
    ) -> Result<usize> {
        if !is_valid_due_date(&fields.due_date) {
            return Err(TrackerError::InvalidDate(fields.due_date.clone()));
        }
        let changed = match self.classes.get_mut(class) {
            Some(slot) => slot.apply_edit(selected, fields, today),
            None => 0,
        };
        if changed == 0 {
            return Err(TrackerError::NoSelection(Action::Edit));
        }
        self.save_class(class, today)?;
        Ok(changed)
    }

    /// Remove every selected record of the current class and save. Each
    /// removal takes the first record with the same displayed fields, so
    /// duplicates leave identical rows behind. With nothing selected the
    /// class is left untouched.
    pub fn delete_selected(&mut self, selected: &[Uuid], today: NaiveDate) -> Result<usize> {
        if selected.is_empty() {
            return Err(TrackerError::NoSelection(Action::Delete));
        }
        let slot = &mut self.classes[self.current];
        let records: Vec<Assignment> = selected
            .iter()
            .filter_map(|id| slot.get(*id).cloned())
            .collect();
        let removed = records
            .iter()
            .filter_map(|record| slot.remove(record))
            .count();
        self.save_class(self.current, today)?;
        Ok(removed)
    }

    /// Apply new class labels. A non-blank entry renames its slot; a blank
    /// entry leaves the slot's label alone. Only the non-blank entries are
    /// persisted, so on the next start the stored names fill the slots in
    /// order.
    pub fn rename_classes(&mut self, entries: &[String]) -> Result<()> {
        for (slot, entry) in self.classes.iter_mut().zip(entries) {
            let name = entry.trim();
            if !name.is_empty() {
                slot.name = name.to_string();
            }
        }
        self.settings.rename(entries);
        io::save_settings(&io::paths::settings_path(&self.dir), &self.settings)
    }

    pub fn set_theme(&mut self, theme: ThemeName) -> Result<()> {
        self.settings.theme = theme;
        io::write_theme(&io::paths::settings_path(&self.dir), theme)
    }
}
