pub mod files;
pub mod store;

pub use files::{
    atomic_write, ensure_data_dir, init_local_data_dir, log_file, read_file,
    store_file,
};
pub use store::{FileStore, SettingsStore};
