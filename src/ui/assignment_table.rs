use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use uuid::Uuid;

use crate::model::{Assignment, ClassSlot};
use crate::ui::theme::{self, Palette};

pub const HEADERS: [&str; 7] = [
    "Status",
    "Name",
    "Due Date",
    "Due Time",
    "Type",
    "Days Until Due",
    "Description",
];

/// Relative column weights; actual widths scale with the panel.
pub const BASE_WIDTHS: [f32; 7] = [120.0, 120.0, 100.0, 80.0, 120.0, 150.0, 250.0];

const MIN_COLUMN_WIDTH: f32 = 50.0;
const MIN_TABLE_WIDTH: f32 = 400.0;
const SCROLLBAR_ALLOWANCE: f32 = 18.0;

/// Split `available` width across the columns in proportion to
/// [`BASE_WIDTHS`].
pub fn column_widths(available: f32) -> [f32; 7] {
    let total = (available - SCROLLBAR_ALLOWANCE).max(MIN_TABLE_WIDTH);
    let base_total: f32 = BASE_WIDTHS.iter().sum();
    BASE_WIDTHS.map(|w| (total * w / base_total).floor().max(MIN_COLUMN_WIDTH))
}

/// Actions the table can request.
pub enum TableAction {
    None,
    /// Make this row the only selected one.
    Select(Uuid),
    /// Add or remove this row from the selection.
    Toggle(Uuid),
}

fn cells(a: &Assignment) -> [String; 7] {
    [
        a.status.label().to_string(),
        a.name.clone(),
        a.due_date_string.clone(),
        a.due_time.clone(),
        a.type_of_assignment.clone(),
        a.days_until_due_label(),
        a.description.clone(),
    ]
}

/// Render the current class as a table, in list order.
pub fn show_assignment_table(
    class: &ClassSlot,
    selected: &[Uuid],
    palette: &Palette,
    ui: &mut Ui,
) -> TableAction {
    let mut action = TableAction::None;
    let widths = column_widths(ui.available_width());
    let toggle_modifier = ui.input(|i| i.modifiers.command);

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .auto_shrink([false, false]);
    for w in widths {
        table = table.column(Column::exact(w).clip(true));
    }

    table
        .header(theme::HEADER_HEIGHT, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.label(
                        RichText::new(title)
                            .font(theme::font_header())
                            .strong()
                            .color(palette.foreground),
                    );
                });
            }
        })
        .body(|mut body| {
            for a in &class.assignments {
                body.row(theme::ROW_HEIGHT, |mut row| {
                    row.set_selected(selected.contains(&a.id));
                    for text in cells(a) {
                        row.col(|ui| {
                            let mut text = RichText::new(text).font(theme::font_row());
                            if a.status.is_complete() {
                                text = text.strikethrough();
                            }
                            ui.add(egui::Label::new(text).truncate().selectable(false));
                        });
                    }
                    if row.response().clicked() {
                        action = if toggle_modifier {
                            TableAction::Toggle(a.id)
                        } else {
                            TableAction::Select(a.id)
                        };
                    }
                });
            }
        });

    if class.is_empty() {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No assignments yet").weak());
        });
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_scale_with_available_space() {
        let w = column_widths(958.0);
        // 940 usable pixels over a 940 base: widths equal the weights.
        assert_eq!(w, BASE_WIDTHS);

        let wide = column_widths(1898.0);
        assert_eq!(wide[6], 500.0);
        assert_eq!(wide[3], 160.0);
    }

    #[test]
    fn narrow_tables_clamp_to_minimums() {
        let w = column_widths(100.0);
        // Usable width floors at 400; the narrowest column floors at 50.
        assert_eq!(w[3], MIN_COLUMN_WIDTH);
        assert_eq!(w[6], (400.0_f32 * 250.0 / 940.0).floor());
        assert!(w.iter().all(|c| *c >= MIN_COLUMN_WIDTH));
    }
}
