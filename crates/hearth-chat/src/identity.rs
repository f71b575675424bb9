//! Persisted client identity.

use hearth_common::{ClientIdentity, StorageError};
use hearth_platform::KeyValueStore;
use tracing::{debug, info};

/// Storage key holding the client identity.
pub const CLIENT_ID_KEY: &str = "gf_client_id";

/// Return the stored client identity, generating and persisting one if absent.
///
/// An empty stored value counts as absent. Storage failures are returned to
/// the caller; there is no fallback identity.
pub fn get_or_create_client_id(store: &dyn KeyValueStore) -> Result<ClientIdentity, StorageError> {
    if let Some(token) = store.get(CLIENT_ID_KEY)? {
        if !token.is_empty() {
            debug!(client_id = %token, "using stored client id");
            return Ok(ClientIdentity::from_stored(token));
        }
    }

    let identity = ClientIdentity::generate();
    store.set(CLIENT_ID_KEY, identity.as_str())?;
    info!(client_id = %identity, "generated new client id");
    Ok(identity)
}

/// Forget the stored identity so the next lookup generates a fresh one.
pub fn reset_client_id(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(CLIENT_ID_KEY)
}
