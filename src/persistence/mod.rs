pub mod files;
pub mod metadata;
pub mod snapshot;

pub use files::{
    atomic_write, ensure_data_dir, get_data_dir, init_local_dir, meta_file, read_file, tasks_file,
};
pub use metadata::{load_metadata, save_metadata, AppMetadata, DEFAULT_DAILY_GOAL};
pub use snapshot::{load_tasks, save_tasks};
