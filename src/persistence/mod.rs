pub mod migrate;
pub mod storage;

pub use migrate::{encode, migrate, SaveFile, SAVE_VERSION};
pub use storage::{FileStorage, MemoryStorage, ProfileStorage};
