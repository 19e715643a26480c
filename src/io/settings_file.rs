use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, TrackerError};
use crate::model::settings::{Settings, ThemeName, CLASS_COUNT};

/// Read the first non-empty row, or `None` when the file is absent.
fn read_row(path: &Path) -> Result<Option<Vec<String>>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(TrackerError::io(path, e)),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    for result in reader.records() {
        let record = result.map_err(|e| TrackerError::csv(path, e))?;
        if !record.is_empty() {
            return Ok(Some(record.iter().map(str::to_string).collect()));
        }
    }
    Ok(Some(Vec::new()))
}

fn write_row(path: &Path, row: &[String]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| TrackerError::csv(path, e))?;
    wtr.write_record(row).map_err(|e| TrackerError::csv(path, e))?;
    wtr.flush().map_err(|e| TrackerError::io(path, e))
}

/// Load the settings row. The last field is the theme; the fields before
/// it name the class slots in order, blanks skipped.
///
/// A missing file is written with the defaults. A file without any row
/// yields no names and the default theme.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let Some(mut row) = read_row(path)? else {
        let settings = Settings::default();
        save_settings(path, &settings)?;
        log::info!("Wrote default settings to {}", path.display());
        return Ok(settings);
    };

    let Some(theme_field) = row.pop() else {
        return Ok(Settings {
            class_names: Vec::new(),
            theme: ThemeName::default(),
        });
    };

    let theme: ThemeName = theme_field.parse().unwrap_or_else(|e| {
        log::warn!("{} in {}; using {}", e, path.display(), ThemeName::default());
        ThemeName::default()
    });

    let class_names = row
        .into_iter()
        .filter(|n| !n.trim().is_empty())
        .take(CLASS_COUNT)
        .collect();

    Ok(Settings { class_names, theme })
}

/// Rewrite the whole settings row.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    write_row(path, &settings.to_row())?;
    log::info!("Saved settings to {}", path.display());
    Ok(())
}

/// Replace only the theme field of the row on disk, keeping whatever
/// class names are stored there. An empty or missing row becomes just
/// the theme.
pub fn write_theme(path: &Path, theme: ThemeName) -> Result<()> {
    let mut row = read_row(path)?.unwrap_or_default();
    match row.last_mut() {
        Some(last) => *last = theme.to_string(),
        None => row.push(theme.to_string()),
    }
    write_row(path, &row)?;
    log::info!("Saved theme '{}' to {}", theme, path.display());
    Ok(())
}
