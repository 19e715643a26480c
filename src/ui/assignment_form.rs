use egui::{Context, RichText, Window};
use uuid::Uuid;

use crate::model::assignment::is_valid_due_date;
use crate::model::{Assignment, AssignmentFields, Status};
use crate::ui::theme::{self, Palette, Themed};

/// What a form will do when saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    /// Every target in slot `class` receives the values captured by the form.
    Edit { class: usize, targets: Vec<Uuid> },
}

/// Draft values for the add/edit popup. Dropping it discards the draft.
#[derive(Debug, Clone)]
pub struct AssignmentForm {
    pub mode: FormMode,
    pub fields: AssignmentFields,
}

impl AssignmentForm {
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            fields: AssignmentFields::default(),
        }
    }

    /// Pre-filled from the first selected record.
    pub fn edit(first: &Assignment, class: usize, targets: Vec<Uuid>) -> Self {
        Self {
            mode: FormMode::Edit { class, targets },
            fields: first.fields(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add an Assignment",
            FormMode::Edit { .. } => "Edit Assignment",
        }
    }

    pub fn can_save(&self) -> bool {
        is_valid_due_date(&self.fields.due_date)
    }
}

/// Index of the field that Enter moves to, wrapping past the last one.
fn next_field(current: usize, count: usize) -> usize {
    (current + 1) % count
}

/// What the user did with the form this frame.
pub enum FormOutcome {
    Open,
    Save,
    Cancel,
}

/// Render the add/edit popup.
pub fn show_assignment_form(form: &mut AssignmentForm, palette: &Palette, ctx: &Context) -> FormOutcome {
    let mut outcome = FormOutcome::Open;
    let mut open = true;
    let is_edit = matches!(form.mode, FormMode::Edit { .. });

    Window::new(RichText::new(form.title()).strong().size(14.0))
        .id(egui::Id::new("assignment_form"))
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            let mut inputs: Vec<egui::Response> = Vec::with_capacity(5);
            ui.add_space(4.0);

            egui::Grid::new("assignment_form_grid")
                .num_columns(2)
                .striped(false)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    if is_edit {
                        ui.label("Status:");
                        egui::ComboBox::from_id_salt("form_status")
                            .selected_text(form.fields.status.label())
                            .width(200.0)
                            .show_ui(ui, |ui| {
                                for s in Status::all() {
                                    let label = s.label().to_string();
                                    ui.selectable_value(&mut form.fields.status, s, label);
                                }
                            });
                        ui.end_row();
                    }

                    ui.label("Assignment:");
                    let name = ui.add_sized(
                        [200.0, 22.0],
                        egui::TextEdit::singleline(&mut form.fields.name),
                    );
                    if ui.memory(|m| m.focused().is_none()) {
                        name.request_focus();
                    }
                    inputs.push(name);
                    ui.end_row();

                    ui.label("Due Date:");
                    inputs.push(ui.add_sized(
                        [200.0, 22.0],
                        egui::TextEdit::singleline(&mut form.fields.due_date).hint_text("MM/DD/YYYY"),
                    ));
                    ui.end_row();

                    ui.label("Due Time:");
                    inputs.push(ui.add_sized([200.0, 22.0], egui::TextEdit::singleline(&mut form.fields.due_time)));
                    ui.end_row();

                    ui.label("Type:");
                    inputs.push(ui.add_sized([200.0, 22.0], egui::TextEdit::singleline(&mut form.fields.kind)));
                    ui.end_row();

                    ui.label("Description:");
                    inputs.push(ui.add_sized(
                        [200.0, 22.0],
                        egui::TextEdit::singleline(&mut form.fields.description),
                    ));
                    ui.end_row();
                });

            // Enter walks through the text fields
            if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                if let Some(pos) = inputs.iter().position(|r| r.lost_focus()) {
                    inputs[next_field(pos, inputs.len())].request_focus();
                }
            }

            if !form.can_save() {
                ui.add_space(2.0);
                ui.label(
                    RichText::new("Due date must be MM/DD/YYYY or left blank")
                        .small()
                        .color(egui::Color32::from_rgb(180, 30, 30)),
                );
            }

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let save = egui::Button::new("Save").themed(palette);
                if ui.add_enabled(form.can_save(), save).clicked() {
                    outcome = FormOutcome::Save;
                }
                if ui.add(egui::Button::new("Cancel")).clicked() {
                    outcome = FormOutcome::Cancel;
                }
            });
            ui.add_space(2.0);
        });

    if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        outcome = FormOutcome::Cancel;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn edit_form_prefills_from_first_record() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let a = Assignment::new(
            AssignmentFields {
                status: Status::InProgress,
                name: "Lab report".into(),
                due_date: "10/30/2026".into(),
                ..Default::default()
            },
            today,
        );
        let form = AssignmentForm::edit(&a, 2, vec![a.id]);
        assert_eq!(form.title(), "Edit Assignment");
        assert_eq!(form.fields, a.fields());
        assert_eq!(
            form.mode,
            FormMode::Edit {
                class: 2,
                targets: vec![a.id]
            }
        );
    }

    #[test]
    fn save_is_gated_on_date_validity() {
        let mut form = AssignmentForm::add();
        assert!(form.can_save());
        form.fields.due_date = "02/30/2027".into();
        assert!(!form.can_save());
        form.fields.due_date = "02/28/2027".into();
        assert!(form.can_save());
    }

    #[test]
    fn enter_moves_to_the_next_field_and_wraps() {
        assert_eq!(next_field(0, 5), 1);
        assert_eq!(next_field(3, 5), 4);
        assert_eq!(next_field(4, 5), 0);
    }
}
