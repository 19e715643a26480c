use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::model::assignment::{Assignment, AssignmentFields, Status};

/// Number of columns in a class file row.
pub const COLUMNS: usize = 7;

/// One on-disk row, in column order:
/// status, name, due date, due time, type, days until due, description.
#[derive(Debug, Serialize, Deserialize)]
struct AssignmentRow {
    status: String,
    name: String,
    due_date: String,
    due_time: String,
    type_of_assignment: String,
    days_until_due: String,
    description: String,
}

impl AssignmentRow {
    fn from_assignment(a: &Assignment, today: NaiveDate) -> Self {
        let mut a = a.clone();
        a.refresh(today);
        Self {
            status: a.status.label().to_string(),
            name: a.name,
            due_date: a.due_date_string,
            due_time: a.due_time,
            type_of_assignment: a.type_of_assignment,
            days_until_due: a
                .days_until_due
                .map(|d| d.to_string())
                .unwrap_or_default(),
            description: a.description,
        }
    }

    /// The stored days-until-due column is ignored; it is re-derived.
    fn into_assignment(self, today: NaiveDate) -> Assignment {
        Assignment::new(
            AssignmentFields {
                status: Status::from_label(&self.status),
                name: self.name,
                due_date: self.due_date,
                due_time: self.due_time,
                kind: self.type_of_assignment,
                description: self.description,
            },
            today,
        )
    }
}

/// Load a class file into records, in file order.
///
/// Rows without exactly seven fields are skipped. A missing file is
/// created empty and yields no records.
pub fn load_class(path: &Path, today: NaiveDate) -> Result<Vec<Assignment>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            File::create(path).map_err(|e| TrackerError::io(path, e))?;
            log::info!("Created empty class file {}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(TrackerError::io(path, e)),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut assignments = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping row {} of {}: {}", i + 1, path.display(), e);
                continue;
            }
        };
        if record.len() != COLUMNS {
            log::debug!(
                "Skipping row {} of {}: expected {} fields, found {}",
                i + 1,
                path.display(),
                COLUMNS,
                record.len()
            );
            continue;
        }
        match record.deserialize::<AssignmentRow>(None) {
            Ok(row) => {
                let a = row.into_assignment(today);
                if a.due_date.is_none() && !a.due_date_string.is_empty() {
                    log::debug!(
                        "Row {} of {}: unparseable due date '{}'",
                        i + 1,
                        path.display(),
                        a.due_date_string
                    );
                }
                assignments.push(a);
            }
            Err(e) => log::warn!("Skipping row {} of {}: {}", i + 1, path.display(), e),
        }
    }

    log::debug!("Loaded {} assignments from {}", assignments.len(), path.display());
    Ok(assignments)
}

/// Overwrite a class file with one row per record, in list order.
/// Days-until-due is computed against `today` at write time.
pub fn save_class(path: &Path, assignments: &[Assignment], today: NaiveDate) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| TrackerError::csv(path, e))?;

    for a in assignments {
        wtr.serialize(AssignmentRow::from_assignment(a, today))
            .map_err(|e| TrackerError::csv(path, e))?;
    }

    wtr.flush().map_err(|e| TrackerError::io(path, e))?;
    log::info!("Saved {} assignments to {}", assignments.len(), path.display());
    Ok(assignments.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(status: Status, name: &str, due: &str, desc: &str, today: NaiveDate) -> Assignment {
        Assignment::new(
            AssignmentFields {
                status,
                name: name.into(),
                due_date: due.into(),
                due_time: "23:59".into(),
                kind: "Homework".into(),
                description: desc.into(),
            },
            today,
        )
    }

    #[test]
    fn missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("class1.csv");
        let loaded = load_class(&path, ymd(2026, 10, 19)).unwrap();
        assert!(loaded.is_empty());
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn loads_documented_example_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("class1.csv");
        std::fs::write(
            &path,
            ",Essay 1,05/01/2030,23:59,Homework,,Draft intro\nComplete,Quiz,13/40/2024,,,,\n",
        )
        .unwrap();

        let today = ymd(2026, 10, 19);
        let loaded = load_class(&path, today).unwrap();
        assert_eq!(loaded.len(), 2);

        let essay = &loaded[0];
        assert_eq!(essay.status, Status::NotStarted);
        assert_eq!(essay.name, "Essay 1");
        assert_eq!(essay.due_date, Some(ymd(2030, 5, 1)));
        assert_eq!(essay.days_until_due, Some((ymd(2030, 5, 1) - today).num_days()));
        assert_eq!(essay.description, "Draft intro");

        let quiz = &loaded[1];
        assert_eq!(quiz.status, Status::Complete);
        assert!(quiz.due_date.is_none());
        assert_eq!(quiz.days_until_due_label(), "");
    }

    #[test]
    fn rows_with_wrong_field_count_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("class2.csv");
        std::fs::write(
            &path,
            "only,three,fields\n\
             In Progress,Lab,10/25/2026,9:00,Lab,,Bring goggles\n\
             a,b,c,d,e,f,g,h\n\
             \n",
        )
        .unwrap();
        let loaded = load_class(&path, ymd(2026, 10, 19)).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Lab");
        assert_eq!(loaded[0].days_until_due, Some(6));

        std::fs::write(&path, "x,y\n1,2,3\n").unwrap();
        assert!(load_class(&path, ymd(2026, 10, 19)).unwrap().is_empty());
    }

    #[test]
    fn save_then_load_reproduces_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("class3.csv");
        let saved_on = ymd(2026, 10, 19);
        let records = vec![
            record(Status::NotStarted, "Essay, part 1", "11/01/2026", "Intro \"hook\"", saved_on),
            record(Status::Complete, "Quiz", "", "", saved_on),
            record(Status::Other("Blocked".into()), "Project", "bad/date", "multi\nline", saved_on),
        ];
        assert_eq!(save_class(&path, &records, saved_on).unwrap(), 3);

        let loaded_on = ymd(2026, 10, 25);
        let loaded = load_class(&path, loaded_on).unwrap();
        assert_eq!(loaded.len(), records.len());
        for (a, b) in records.iter().zip(&loaded) {
            assert_eq!(a.match_key(), b.match_key());
        }
        assert_eq!(loaded[0].days_until_due, Some(7));
        assert_eq!(loaded[1].days_until_due, None);
    }

    #[test]
    fn days_column_is_written_for_the_save_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("class4.csv");
        let stale = record(Status::NotStarted, "Read", "10/29/2026", "", ymd(2026, 10, 1));
        save_class(&path, &[stale], ymd(2026, 10, 19)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), "Not Started,Read,10/29/2026,23:59,Homework,10,");
    }

    #[test]
    fn saving_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("class1.csv");
        let err = save_class(&path, &[], ymd(2026, 10, 19)).unwrap_err();
        assert!(matches!(err, TrackerError::Csv { .. }));
    }
}
