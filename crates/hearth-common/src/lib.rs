pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, HearthError, StorageError};
pub use events::{EventBus, SessionEvent};
pub use id::{new_id, ClientIdentity};
pub use types::{MessageEntry, Role, Status};

pub type Result<T> = std::result::Result<T, HearthError>;
