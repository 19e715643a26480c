use std::fmt;
use std::str::FromStr;

/// Number of fixed class slots.
pub const CLASS_COUNT: usize = 7;

/// Default label for the slot at `index` (zero-based).
pub fn default_class_name(index: usize) -> String {
    format!("Class {}", index + 1)
}

/// A named colour palette for the UI chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    White,
    Pink,
    Yellow,
    #[default]
    Green,
    Blue,
    Purple,
}

impl ThemeName {
    /// Themes in picker order.
    pub fn all() -> &'static [ThemeName] {
        &[
            ThemeName::Pink,
            ThemeName::Yellow,
            ThemeName::Green,
            ThemeName::Blue,
            ThemeName::Purple,
            ThemeName::White,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::White => "white",
            ThemeName::Pink => "pink",
            ThemeName::Yellow => "yellow",
            ThemeName::Green => "green",
            ThemeName::Blue => "blue",
            ThemeName::Purple => "purple",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("unknown theme '{}'", s))
    }
}

/// The persisted settings row: class labels followed by the theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Up to `CLASS_COUNT` labels, in slot order.
    pub class_names: Vec<String>,
    pub theme: ThemeName,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            class_names: (0..CLASS_COUNT).map(default_class_name).collect(),
            theme: ThemeName::default(),
        }
    }
}

impl Settings {
    /// Label of the slot at `index`, or its default when unnamed.
    pub fn class_label(&self, index: usize) -> String {
        self.class_names
            .get(index)
            .cloned()
            .unwrap_or_else(|| default_class_name(index))
    }

    /// Keep only the non-blank entries (trimmed). Blanks are dropped,
    /// not kept as empty labels, so later names shift down a slot on the
    /// next load.
    pub fn rename(&mut self, entries: &[String]) {
        self.class_names = entries
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .take(CLASS_COUNT)
            .map(str::to_string)
            .collect();
    }

    /// The row as written to disk.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = self.class_names.clone();
        row.push(self.theme.to_string());
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_seven_classes_and_green() {
        let s = Settings::default();
        assert_eq!(s.class_names.len(), CLASS_COUNT);
        assert_eq!(s.class_names[0], "Class 1");
        assert_eq!(s.class_names[6], "Class 7");
        assert_eq!(s.theme, ThemeName::Green);
        assert_eq!(s.to_row().last().map(String::as_str), Some("green"));
    }

    #[test]
    fn missing_names_fall_back_to_default_labels() {
        let s = Settings {
            class_names: vec!["Math".into(), "Biology".into()],
            theme: ThemeName::Blue,
        };
        assert_eq!(s.class_label(0), "Math");
        assert_eq!(s.class_label(1), "Biology");
        assert_eq!(s.class_label(2), "Class 3");
        assert_eq!(s.class_label(6), "Class 7");
    }

    #[test]
    fn rename_drops_blank_entries() {
        let mut s = Settings::default();
        let entries: Vec<String> = ["Math", "  ", "History ", "", "", "", "Art"]
            .iter()
            .map(|e| e.to_string())
            .collect();
        s.rename(&entries);
        assert_eq!(s.class_names, ["Math", "History", "Art"]);
        assert_eq!(s.class_label(2), "Art");
        assert_eq!(s.class_label(3), "Class 4");
        assert_eq!(s.to_row(), ["Math", "History", "Art", "green"]);
    }

    #[test]
    fn theme_names_round_trip_through_strings() {
        for t in ThemeName::all() {
            assert_eq!(t.as_str().parse::<ThemeName>(), Ok(*t));
        }
        assert!("orange".parse::<ThemeName>().is_err());
        assert_eq!(ThemeName::all().len(), 6);
    }
}
