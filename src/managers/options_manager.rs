// MangaMark options manager
// Loads, saves, and updates the flat user options, persisted as a JSON
// document under a fixed key of the injected key-value store.

use serde_json::Value;

use crate::storage::{KeyValueStore, OPTIONS_KEY};
use crate::types::errors::OptionsError;
use crate::types::options::SiteOptions;

/// Trait defining the options manager interface.
pub trait OptionsManagerTrait {
    fn load(&mut self) -> Result<SiteOptions, OptionsError>;
    fn save(&mut self) -> Result<(), OptionsError>;
    fn options(&self) -> &SiteOptions;
    fn is_set(&self, key: &str) -> bool;
    fn get_value(&self, key: &str) -> Result<Value, OptionsError>;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), OptionsError>;
    fn reset(&mut self) -> Result<(), OptionsError>;
    fn clear(&mut self) -> Result<(), OptionsError>;
}

/// Options manager backed by an injected key-value store.
pub struct OptionsManager {
    store: Box<dyn KeyValueStore>,
    options: SiteOptions,
}

impl OptionsManager {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            options: SiteOptions::default(),
        }
    }

    /// Serializes the current options to a JSON object map.
    fn to_map(&self) -> Result<serde_json::Map<String, Value>, OptionsError> {
        match serde_json::to_value(&self.options) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(OptionsError::Serialization(
                "Options did not serialize to an object".to_string(),
            )),
            Err(e) => Err(OptionsError::Serialization(e.to_string())),
        }
    }
}

impl OptionsManagerTrait for OptionsManager {
    /// Loads options from the key-value store.
    ///
    /// A missing key yields the defaults; a stored but malformed document is
    /// a serialization error.
    fn load(&mut self) -> Result<SiteOptions, OptionsError> {
        let stored = self
            .store
            .get(OPTIONS_KEY)
            .map_err(|e| OptionsError::Storage(e.to_string()))?;

        self.options = match stored {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| OptionsError::Serialization(e.to_string()))?,
            None => SiteOptions::default(),
        };
        Ok(self.options.clone())
    }

    /// Saves the current options to the key-value store.
    fn save(&mut self) -> Result<(), OptionsError> {
        let json = serde_json::to_string(&self.options)
            .map_err(|e| OptionsError::Serialization(e.to_string()))?;
        self.store
            .set(OPTIONS_KEY, &json)
            .map_err(|e| OptionsError::Storage(e.to_string()))
    }

    /// Returns a reference to the current in-memory options.
    fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Checks whether `key` names a known option.
    fn is_set(&self, key: &str) -> bool {
        self.to_map().map(|m| m.contains_key(key)).unwrap_or(false)
    }

    /// Returns the value of a single option by its flat key name.
    fn get_value(&self, key: &str) -> Result<Value, OptionsError> {
        self.to_map()?
            .remove(key)
            .ok_or_else(|| OptionsError::InvalidKey(key.to_string()))
    }

    /// Updates a single option by its flat key name and saves.
    ///
    /// The updated document is deserialized back into [`SiteOptions`] before
    /// being accepted, so a type-mismatched value is rejected without
    /// touching the stored state.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), OptionsError> {
        let mut map = self.to_map()?;
        if !map.contains_key(key) {
            return Err(OptionsError::InvalidKey(key.to_string()));
        }
        map.insert(key.to_string(), value);

        let updated: SiteOptions = serde_json::from_value(Value::Object(map))
            .map_err(|e| {
                OptionsError::InvalidValue(format!("Invalid value for '{}': {}", key, e))
            })?;

        self.options = updated;
        self.save()
    }

    /// Resets all options to defaults and saves.
    fn reset(&mut self) -> Result<(), OptionsError> {
        self.options = SiteOptions::default();
        self.save()
    }

    /// Removes the persisted options and resets the in-memory state.
    fn clear(&mut self) -> Result<(), OptionsError> {
        self.store
            .remove(OPTIONS_KEY)
            .map_err(|e| OptionsError::Storage(e.to_string()))?;
        self.options = SiteOptions::default();
        Ok(())
    }
}
