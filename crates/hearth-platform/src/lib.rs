pub mod composer;
pub mod paths;
pub mod storage;

pub use composer::{Composer, ComposerAction, Key, Modifiers};
pub use paths::{data_dir, storage_file};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
