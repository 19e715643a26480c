pub mod assignment_form;
pub mod assignment_table;
pub mod dialogs;
pub mod theme;
pub mod toolbar;
