pub mod class_file;
pub mod paths;
pub mod settings_file;

pub use class_file::{load_class, save_class};
pub use settings_file::{load_settings, save_settings, write_theme};
