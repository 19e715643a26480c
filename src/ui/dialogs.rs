use egui::{Context, RichText, Window};
use egui_phosphor::regular as icons;

use crate::app::TrackerApp;
use crate::model::{ThemeName, CLASS_COUNT};
use crate::ui::theme::{self, Palette, Themed};

fn dialog(title: &str) -> Window<'static> {
    Window::new(RichText::new(title).strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

/// Render the "Settings" hub.
pub fn show_settings_dialog(app: &mut TrackerApp, ctx: &Context) {
    let mut should_close = false;
    let palette = app.palette;
    dialog("Settings")
        .fixed_size([220.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered_justified(|ui| {
                ui.add_space(4.0);
                let manage = egui::Button::new(format!("{}  Manage Classes", icons::PENCIL_SIMPLE)).themed(&palette);
                if ui.add(manage).clicked() {
                    app.open_class_names();
                    should_close = true;
                }
                let themes = egui::Button::new(format!("{}  Manage Theme", icons::PALETTE)).themed(&palette);
                if ui.add(themes).clicked() {
                    app.show_theme_picker = true;
                    should_close = true;
                }
                let folder = egui::Button::new(format!("{}  Open Data Folder", icons::FOLDER_OPEN)).themed(&palette);
                if ui.add(folder).clicked() {
                    app.open_data_folder();
                    should_close = true;
                }
                let about = egui::Button::new(format!("{}  About", icons::INFO)).themed(&palette);
                if ui.add(about).clicked() {
                    app.show_about = true;
                    should_close = true;
                }
                ui.add_space(6.0);
                ui.separator();
                if ui.button("Close").clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_settings = false;
    }
}

/// Render the "Manage Classes" popup: one text field per slot.
pub fn show_class_names_dialog(app: &mut TrackerApp, ctx: &Context) {
    let Some(mut drafts) = app.class_name_drafts.take() else {
        return;
    };
    let mut keep_open = true;
    let mut save = false;
    let palette = app.palette;

    dialog("Manage Classes")
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new("Edit Class Names:").strong());
            ui.add_space(4.0);
            egui::Grid::new("class_names_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for (idx, draft) in drafts.iter_mut().enumerate().take(CLASS_COUNT) {
                        ui.label(format!("Class {}:", idx + 1));
                        ui.add_sized([180.0, 22.0], egui::TextEdit::singleline(draft));
                        ui.end_row();
                    }
                });
            ui.add_space(6.0);
            ui.label(
                RichText::new("Blank names are left out of the saved list.")
                    .small()
                    .weak(),
            );
            ui.separator();
            ui.horizontal(|ui| {
                if ui.add(egui::Button::new("Save").themed(&palette)).clicked() {
                    save = true;
                }
                if ui.button("Cancel").clicked() {
                    keep_open = false;
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
        save = true;
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        keep_open = false;
    }

    if save {
        app.rename_classes(&drafts);
    } else if keep_open {
        app.class_name_drafts = Some(drafts);
    }
}

/// Render the theme picker: one colour swatch per theme.
pub fn show_theme_dialog(app: &mut TrackerApp, ctx: &Context) {
    let mut should_close = false;
    let mut picked: Option<ThemeName> = None;
    let active = app.workspace.theme();

    dialog("Manage Theme").show(ctx, |ui| {
        ui.label(RichText::new("Pick a Theme:").strong());
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            for t in ThemeName::all() {
                let swatch = Palette::for_theme(*t).swatch;
                let stroke_width = if *t == active { 3.0 } else { 1.0 };
                let btn = egui::Button::new("")
                    .fill(swatch)
                    .stroke(egui::Stroke::new(stroke_width, egui::Color32::BLACK))
                    .min_size(egui::vec2(32.0, 32.0));
                if ui.add(btn).on_hover_text(t.as_str()).clicked() {
                    picked = Some(*t);
                }
            }
        });
        ui.add_space(6.0);
        if ui.button("Close").clicked() {
            should_close = true;
        }
    });

    if let Some(t) = picked {
        app.set_theme(t);
    }
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_theme_picker = false;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut TrackerApp, ctx: &Context) {
    let mut should_close = false;
    dialog("About")
        .fixed_size([260.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading(RichText::new("Assignment Tracker").strong());
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(8.0);
                ui.label("Track assignments across seven classes.");
                ui.label(RichText::new(app.workspace.dir().display().to_string()).small().weak());
                ui.add_space(10.0);
                if ui.button("Close").clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
