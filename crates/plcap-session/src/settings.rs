//! Persisted registry settings: the selected environment and one API key per
//! environment.

use plcap_core::Environment;
use plcap_registry::{RegistryClient, RegistryError};

use crate::error::{SessionError, StoreError};
use crate::store::{entry, keys, read, KeyValueStore};

/// # Errors
///
/// Returns [`StoreError::Decode`] if the stored value is not an environment.
pub fn selected_environment<S>(store: &S) -> Result<Environment, StoreError>
where
    S: KeyValueStore + ?Sized,
{
    Ok(read(store, keys::ENVIRONMENT)?.unwrap_or_default())
}

/// # Errors
///
/// Returns [`StoreError`] if persisting fails.
pub fn select_environment<S>(store: &mut S, environment: Environment) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
{
    tracing::info!(%environment, "selected registry environment");
    store.set_many(vec![entry(keys::ENVIRONMENT, &environment)?])
}

/// The saved key for `environment`, or `None` if absent or blank.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] if the stored value is not a string.
pub fn api_key<S>(store: &S, environment: Environment) -> Result<Option<String>, StoreError>
where
    S: KeyValueStore + ?Sized,
{
    let key: Option<String> = read(store, &environment.api_key_storage_key())?;
    Ok(key.filter(|k| !k.trim().is_empty()))
}

/// # Errors
///
/// Returns [`StoreError`] if persisting fails.
pub fn save_api_key<S>(store: &mut S, environment: Environment, key: &str) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
{
    let storage_key = environment.api_key_storage_key();
    store.set_many(vec![entry(&storage_key, &key.trim())?])
}

/// A client for the selected environment using its saved key.
///
/// # Errors
///
/// Returns [`RegistryError::MissingApiKey`] (wrapped) when no key is saved
/// for the selected environment.
pub fn registry_client<S>(store: &S, timeout_secs: u64) -> Result<RegistryClient, SessionError>
where
    S: KeyValueStore + ?Sized,
{
    let environment = selected_environment(store)?;
    let key = api_key(store, environment)?
        .ok_or(RegistryError::MissingApiKey { environment })?;
    Ok(RegistryClient::new(environment, &key, timeout_secs)?)
}
