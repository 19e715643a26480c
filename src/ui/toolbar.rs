use egui::{RichText, Ui};
use egui_phosphor::regular as icons;

use crate::model::Workspace;
use crate::ui::theme::{Palette, Themed};

/// Actions that the toolbar can request.
pub enum ToolbarAction {
    None,
    SelectClass(usize),
    Add,
    Edit,
    Delete,
    Settings,
}

/// Render the class picker and the action buttons.
pub fn show_toolbar(workspace: &Workspace, palette: &Palette, ui: &mut Ui) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.add_space(5.0);
    ui.horizontal(|ui| {
        ui.add_space(5.0);

        let current = workspace.current;
        egui::ComboBox::from_id_salt("class_picker")
            .selected_text(RichText::new(&workspace.current_class().name).strong())
            .width(160.0)
            .show_ui(ui, |ui| {
                for (idx, class) in workspace.classes.iter().enumerate() {
                    if ui.selectable_label(idx == current, &class.name).clicked() && idx != current {
                        action = ToolbarAction::SelectClass(idx);
                    }
                }
            });

        ui.add_space(6.0);

        let buttons = [
            (icons::PLUS, "Add Assignment", ToolbarAction::Add),
            (icons::PENCIL_SIMPLE, "Edit Assignment", ToolbarAction::Edit),
            (icons::TRASH, "Delete Assignment", ToolbarAction::Delete),
            (icons::GEAR, "Settings", ToolbarAction::Settings),
        ];
        for (icon, label, on_click) in buttons {
            let btn = egui::Button::new(format!("{}  {}", icon, label)).themed(palette);
            if ui.add(btn).clicked() {
                action = on_click;
            }
        }
    });
    ui.add_space(5.0);

    action
}
