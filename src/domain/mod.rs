mod enums;
mod task;

pub use enums::{FilterTab, Priority, UiMode};
pub use task::Task;
