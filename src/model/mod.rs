pub mod assignment;
pub mod class_slot;
pub mod settings;
pub mod workspace;

pub use assignment::{Assignment, AssignmentFields, Status};
pub use class_slot::ClassSlot;
pub use settings::{ThemeName, CLASS_COUNT};
pub use workspace::Workspace;
