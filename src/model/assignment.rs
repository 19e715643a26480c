use chrono::NaiveDate;
use uuid::Uuid;

/// Progress state of an assignment.
///
/// Labels outside the three known ones are kept verbatim so that a
/// hand-edited class file survives a load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Complete,
    Other(String),
}

impl Status {
    /// The statuses offered in the edit form.
    pub fn all() -> [Status; 3] {
        [Status::NotStarted, Status::InProgress, Status::Complete]
    }

    /// Parse a stored label. Blank defaults to `NotStarted`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Not Started" => Status::NotStarted,
            "In Progress" => Status::InProgress,
            "Complete" => Status::Complete,
            s if s.trim().is_empty() => Status::NotStarted,
            s => Status::Other(s.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Complete => "Complete",
            Status::Other(s) => s,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Status::Complete)
    }
}

/// Parse a `MM/DD/YYYY` string into a calendar date.
///
/// Any deviation (wrong part count, non-integer part, impossible date)
/// yields `None` rather than an error.
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let month: u32 = parts[0].trim().parse().ok()?;
    let day: u32 = parts[1].trim().parse().ok()?;
    let year: i32 = parts[2].trim().parse().ok()?;
    if !(1..=9999).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whether a due date typed into a form is acceptable.
/// An empty entry means "no due date yet" and is valid.
pub fn is_valid_due_date(s: &str) -> bool {
    s.trim().is_empty() || parse_due_date(s).is_some()
}

/// Whole days from `today` until `due`; negative when overdue.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// The editable fields of an assignment, as captured by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentFields {
    pub status: Status,
    pub name: String,
    pub due_date: String,
    pub due_time: String,
    pub kind: String,
    pub description: String,
}

/// A tracked task in a class.
///
/// `due_date_string` is the source of truth; `due_date` and
/// `days_until_due` are always derived from it.
#[derive(Debug, Clone)]
pub struct Assignment {
    /// In-memory identity; never written to disk.
    pub id: Uuid,
    pub status: Status,
    pub name: String,
    pub due_date_string: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: String,
    pub type_of_assignment: String,
    pub days_until_due: Option<i64>,
    pub description: String,
}

impl Assignment {
    pub fn new(fields: AssignmentFields, today: NaiveDate) -> Self {
        let due_date = parse_due_date(&fields.due_date);
        Self {
            id: Uuid::new_v4(),
            status: fields.status,
            name: fields.name,
            due_date_string: fields.due_date,
            due_date,
            due_time: fields.due_time,
            type_of_assignment: fields.kind,
            days_until_due: due_date.map(|d| days_until(d, today)),
            description: fields.description,
        }
    }

    /// Overwrite every editable field and re-derive the date fields.
    /// The id is kept.
    pub fn apply(&mut self, fields: &AssignmentFields, today: NaiveDate) {
        self.status = fields.status.clone();
        self.name = fields.name.clone();
        self.due_time = fields.due_time.clone();
        self.type_of_assignment = fields.kind.clone();
        self.description = fields.description.clone();
        self.set_due_date(&fields.due_date, today);
    }

    pub fn set_due_date(&mut self, due_date: &str, today: NaiveDate) {
        self.due_date_string = due_date.to_string();
        self.refresh(today);
    }

    /// Recompute the derived fields against `today`.
    pub fn refresh(&mut self, today: NaiveDate) {
        self.due_date = parse_due_date(&self.due_date_string);
        self.days_until_due = self.due_date.map(|d| days_until(d, today));
    }

    pub fn fields(&self) -> AssignmentFields {
        AssignmentFields {
            status: self.status.clone(),
            name: self.name.clone(),
            due_date: self.due_date_string.clone(),
            due_time: self.due_time.clone(),
            kind: self.type_of_assignment.clone(),
            description: self.description.clone(),
        }
    }

    /// Days until due as displayed and stored: a number, or empty.
    pub fn days_until_due_label(&self) -> String {
        self.days_until_due
            .map(|d| d.to_string())
            .unwrap_or_default()
    }

    pub fn match_key(&self) -> MatchKey<'_> {
        MatchKey {
            status: self.status.label(),
            name: &self.name,
            due_date: &self.due_date_string,
            due_time: &self.due_time,
            kind: &self.type_of_assignment,
            description: &self.description,
        }
    }
}

/// The displayed fields used to re-locate a record structurally.
/// Days-until-due is not part of the key; it drifts with the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchKey<'a> {
    pub status: &'a str,
    pub name: &'a str,
    pub due_date: &'a str,
    pub due_time: &'a str,
    pub kind: &'a str,
    pub description: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fields(status: &str, name: &str, due: &str) -> AssignmentFields {
        AssignmentFields {
            status: Status::from_label(status),
            name: name.into(),
            due_date: due.into(),
            ..Default::default()
        }
    }

    #[test]
    fn parses_valid_dates_and_preserves_components() {
        assert_eq!(parse_due_date("05/01/2030"), Some(ymd(2030, 5, 1)));
        assert_eq!(parse_due_date("12/31/1999"), Some(ymd(1999, 12, 31)));
        assert_eq!(parse_due_date("2/29/2024"), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_due_date(" 7 / 4 / 2026 "), Some(ymd(2026, 7, 4)));

        let d = parse_due_date("09/15/2027").unwrap();
        assert_eq!(d.format("%m/%d/%Y").to_string(), "09/15/2027");
    }

    #[test]
    fn malformed_dates_are_absent() {
        for bad in [
            "",
            "05-01-2030",
            "05/01",
            "05/01/2030/1",
            "May/01/2030",
            "13/40/2024",
            "02/30/2023",
            "00/10/2024",
            "01/01/0",
            "01/01/10000",
            "//",
        ] {
            assert_eq!(parse_due_date(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn date_validity_accepts_blank() {
        assert!(is_valid_due_date(""));
        assert!(is_valid_due_date("   "));
        assert!(is_valid_due_date("10/19/2026"));
        assert!(!is_valid_due_date("10/32/2026"));
        assert!(!is_valid_due_date("tomorrow"));
    }

    #[test]
    fn days_until_due_is_signed_difference() {
        let today = ymd(2026, 10, 19);
        assert_eq!(days_until(ymd(2026, 10, 19), today), 0);
        assert_eq!(days_until(ymd(2026, 10, 26), today), 7);
        assert_eq!(days_until(ymd(2026, 10, 1), today), -18);
        assert_eq!(days_until(ymd(2027, 10, 19), today), 365);
    }

    #[test]
    fn blank_status_defaults_to_not_started() {
        let today = ymd(2026, 10, 19);
        let a = Assignment::new(fields("", "Essay 1", "05/01/2030"), today);
        assert_eq!(a.status, Status::NotStarted);
        assert_eq!(a.due_date, Some(ymd(2030, 5, 1)));
        assert_eq!(
            a.days_until_due,
            Some((ymd(2030, 5, 1) - today).num_days())
        );
    }

    #[test]
    fn invalid_date_keeps_record_with_empty_days() {
        let a = Assignment::new(fields("Complete", "Quiz", "13/40/2024"), ymd(2026, 1, 1));
        assert_eq!(a.status, Status::Complete);
        assert_eq!(a.due_date_string, "13/40/2024");
        assert!(a.due_date.is_none());
        assert_eq!(a.days_until_due_label(), "");
    }

    #[test]
    fn unknown_status_labels_survive() {
        let s = Status::from_label("Blocked");
        assert_eq!(s, Status::Other("Blocked".into()));
        assert_eq!(s.label(), "Blocked");
        assert!(!s.is_complete());
    }

    #[test]
    fn apply_rederives_date_fields_and_keeps_id() {
        let today = ymd(2026, 10, 19);
        let mut a = Assignment::new(fields("", "Lab", "10/20/2026"), today);
        let id = a.id;
        assert_eq!(a.days_until_due, Some(1));

        let mut edit = a.fields();
        edit.status = Status::InProgress;
        edit.due_date = "garbage".into();
        a.apply(&edit, today);
        assert_eq!(a.id, id);
        assert_eq!(a.status, Status::InProgress);
        assert!(a.due_date.is_none());
        assert_eq!(a.days_until_due, None);

        a.set_due_date("10/10/2026", today);
        assert_eq!(a.days_until_due, Some(-9));
    }

    #[test]
    fn match_key_ignores_days_until_due() {
        let mut a = Assignment::new(fields("", "Read ch. 3", "11/01/2026"), ymd(2026, 10, 1));
        let b = Assignment::new(fields("", "Read ch. 3", "11/01/2026"), ymd(2026, 10, 19));
        assert_ne!(a.days_until_due, b.days_until_due);
        assert_eq!(a.match_key(), b.match_key());

        a.description = "pages 40-60".into();
        assert_ne!(a.match_key(), b.match_key());
    }
}
