use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{Action, TrackerError};
use crate::model::{ThemeName, Workspace};
use crate::ui;
use crate::ui::assignment_form::{AssignmentForm, FormMode, FormOutcome};
use crate::ui::assignment_table::TableAction;
use crate::ui::theme::{Palette, Themed};

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Main application state.
pub struct TrackerApp {
    pub workspace: Workspace,
    pub palette: Palette,
    /// Ids of the selected rows in the current class.
    pub selected: Vec<Uuid>,

    // Dialog state
    pub form: Option<AssignmentForm>,
    pub class_name_drafts: Option<Vec<String>>,
    pub show_settings: bool,
    pub show_theme_picker: bool,
    pub show_about: bool,

    // Status message
    pub status_message: String,

    /// Day the displayed day counts were computed for.
    shown_day: NaiveDate,
}

impl TrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, workspace: Workspace) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let palette = Palette::for_theme(workspace.theme());
        ui::theme::apply_theme(&cc.egui_ctx, &palette);

        Self {
            workspace,
            palette,
            selected: Vec::new(),
            form: None,
            class_name_drafts: None,
            show_settings: false,
            show_theme_picker: false,
            show_about: false,
            status_message: "Ready".to_string(),
            shown_day: today(),
        }
    }

    /// Show a blocking error dialog and note the failure in the status bar.
    pub fn report_error(&mut self, err: &TrackerError) {
        log::error!("{}", err);
        self.status_message = err.to_string();
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Error")
            .set_description(err.to_string())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    // --- Class operations ---

    pub fn select_class(&mut self, index: usize) {
        self.workspace.select_class(index);
        self.workspace.classes[self.workspace.current].refresh(today());
        self.selected.clear();
        self.status_message = format!("Showing {}", self.workspace.current_class().name);
    }

    pub fn open_class_names(&mut self) {
        self.class_name_drafts = Some(
            self.workspace
                .classes
                .iter()
                .map(|c| c.name.clone())
                .collect(),
        );
    }

    pub fn rename_classes(&mut self, entries: &[String]) {
        match self.workspace.rename_classes(entries) {
            Ok(()) => self.status_message = "Class names saved".to_string(),
            Err(e) => self.report_error(&e),
        }
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        match self.workspace.set_theme(theme) {
            Ok(()) => self.status_message = format!("Theme set to {}", theme),
            Err(e) => self.report_error(&e),
        }
        self.palette = Palette::for_theme(self.workspace.theme());
    }

    pub fn open_data_folder(&mut self) {
        let dir = self.workspace.dir().to_path_buf();
        if let Err(e) = open::that(&dir) {
            self.report_error(&TrackerError::io(dir, e));
        }
    }

    // --- Assignment operations ---

    pub fn open_add_form(&mut self) {
        self.form = Some(AssignmentForm::add());
    }

    /// Open the edit form pre-filled from the first selected row.
    pub fn open_edit_form(&mut self) {
        let first = self
            .workspace
            .current_class()
            .assignments
            .iter()
            .find(|a| self.selected.contains(&a.id));
        match first {
            Some(a) => {
                self.form = Some(AssignmentForm::edit(
                    a,
                    self.workspace.current,
                    self.selected.clone(),
                ))
            }
            None => self.report_error(&TrackerError::NoSelection(Action::Edit)),
        }
    }

    pub fn save_form(&mut self, form: AssignmentForm) {
        let result = match form.mode {
            FormMode::Add => self
                .workspace
                .add_assignment(form.fields, today())
                .map(|_| "Assignment added".to_string()),
            FormMode::Edit { class, targets } => self
                .workspace
                .edit_selected(class, &targets, &form.fields, today())
                .map(|n| format!("Updated {} assignment(s)", n)),
        };
        match result {
            Ok(msg) => self.status_message = msg,
            Err(e) => self.report_error(&e),
        }
    }

    pub fn delete_selected(&mut self) {
        match self.workspace.delete_selected(&self.selected, today()) {
            Ok(n) => {
                self.selected.clear();
                self.status_message = format!("Deleted {} assignment(s)", n);
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Recompute day counts once the calendar day has changed.
    fn refresh_for_new_day(&mut self) {
        let now = today();
        if now != self.shown_day {
            log::info!("Date changed to {}; refreshing day counts", now);
            self.workspace.refresh(now);
            self.shown_day = now;
        }
    }

    fn handle_table_action(&mut self, action: TableAction) {
        match action {
            TableAction::Select(id) => {
                self.selected.clear();
                self.selected.push(id);
            }
            TableAction::Toggle(id) => {
                if let Some(pos) = self.selected.iter().position(|s| *s == id) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(id);
                }
            }
            TableAction::None => {}
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx, &self.palette);
        self.refresh_for_new_day();
        ctx.request_repaint_after(std::time::Duration::from_secs(60));

        // Top panel: class picker and actions
        let mut toolbar_action = ui::toolbar::ToolbarAction::None;
        let chrome = egui::Frame::default()
            .themed(&self.palette)
            .inner_margin(egui::Margin::symmetric(4.0, 0.0));
        egui::TopBottomPanel::top("toolbar").frame(chrome).show(ctx, |ui| {
            toolbar_action = ui::toolbar::show_toolbar(&self.workspace, &self.palette, ui);
        });
        match toolbar_action {
            ui::toolbar::ToolbarAction::SelectClass(i) => self.select_class(i),
            ui::toolbar::ToolbarAction::Add => self.open_add_form(),
            ui::toolbar::ToolbarAction::Edit => self.open_edit_form(),
            ui::toolbar::ToolbarAction::Delete => self.delete_selected(),
            ui::toolbar::ToolbarAction::Settings => self.show_settings = true,
            ui::toolbar::ToolbarAction::None => {}
        }

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(chrome.inner_margin(egui::Margin::symmetric(10.0, 0.0)))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(egui::RichText::new(&self.status_message).font(ui::theme::font_status()));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let class = self.workspace.current_class();
                        ui.label(
                            egui::RichText::new(format!("{}: {} assignment(s)", class.name, class.len()))
                                .font(ui::theme::font_status()),
                        );
                    });
                });
            });

        // Central panel: assignment table
        let mut table_action = TableAction::None;
        let table_frame = egui::Frame::default()
            .fill(egui::Color32::WHITE)
            .inner_margin(egui::Margin::same(3.0))
            .stroke(egui::Stroke::new(3.0, self.palette.background));
        egui::CentralPanel::default().frame(table_frame).show(ctx, |ui| {
            table_action = ui::assignment_table::show_assignment_table(
                self.workspace.current_class(),
                &self.selected,
                &self.palette,
                ui,
            );
        });
        self.handle_table_action(table_action);

        // Dialogs
        if let Some(mut form) = self.form.take() {
            match ui::assignment_form::show_assignment_form(&mut form, &self.palette, ctx) {
                FormOutcome::Open => self.form = Some(form),
                FormOutcome::Save => self.save_form(form),
                FormOutcome::Cancel => {}
            }
        }
        if self.show_settings {
            ui::dialogs::show_settings_dialog(self, ctx);
        }
        if self.class_name_drafts.is_some() {
            ui::dialogs::show_class_names_dialog(self, ctx);
        }
        if self.show_theme_picker {
            ui::dialogs::show_theme_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
