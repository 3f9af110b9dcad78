use core::num::{NonZeroUsize, ParseIntError};

use serde::{Deserialize, Serialize};

/// Buffer size of a streaming resolution when none is configured.
pub const DEFAULT_BUFFER_SIZE: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(size) => size,
    None => unreachable!(),
};

const NAMESPACE_ENV: &str = "SPLAY_NAMESPACE";
const BUFFER_SIZE_ENV: &str = "SPLAY_BUFFER_SIZE";

/// Errors raised while building a [`RegistryConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The buffer size was zero.
    #[error("buffer size must be at least 1")]
    ZeroBufferSize,
    /// The buffer size could not be parsed.
    #[error("invalid buffer size {value:?}: {source}")]
    InvalidBufferSize {
        /// The raw value.
        value: String,
        /// Why parsing failed.
        #[source]
        source: ParseIntError,
    },
}

/// Settings shared by the registries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryConfig {
    namespace: Option<String>,
    buffer_size: NonZeroUsize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl RegistryConfig {
    /// Prefixes every procedure path with `namespace`.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the per-stream buffer bound of streaming resolutions.
    #[must_use]
    pub const fn with_buffer_size(mut self, size: NonZeroUsize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Same as [`with_buffer_size`](Self::with_buffer_size) for a plain count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroBufferSize`] if `size` is zero.
    pub fn try_with_buffer_size(self, size: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(size)
            .map(|size| self.with_buffer_size(size))
            .ok_or(ConfigError::ZeroBufferSize)
    }

    /// Reads `SPLAY_NAMESPACE` and `SPLAY_BUFFER_SIZE`, defaulting what is unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `SPLAY_BUFFER_SIZE` is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(namespace) = lookup(NAMESPACE_ENV).filter(|ns| !ns.is_empty()) {
            config = config.with_namespace(namespace);
        }
        if let Some(raw) = lookup(BUFFER_SIZE_ENV) {
            let size = raw
                .trim()
                .parse::<usize>()
                .map_err(|source| ConfigError::InvalidBufferSize {
                    value: raw.clone(),
                    source,
                })?;
            config = config.try_with_buffer_size(size)?;
        }
        Ok(config)
    }

    /// The namespace prefix, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Maximum number of unconsumed items per streaming resolution.
    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.namespace(), None);
        assert_eq!(config.buffer_size(), 16);
    }

    #[test]
    fn reads_environment() {
        let config = RegistryConfig::from_lookup(env(&[
            ("SPLAY_NAMESPACE", "ui"),
            ("SPLAY_BUFFER_SIZE", " 4 "),
        ]))
        .unwrap();
        assert_eq!(config.namespace(), Some("ui"));
        assert_eq!(config.buffer_size(), 4);

        let empty = RegistryConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(empty, RegistryConfig::default());
    }

    #[test]
    fn rejects_bad_buffer_sizes() {
        assert!(matches!(
            RegistryConfig::from_lookup(env(&[("SPLAY_BUFFER_SIZE", "0")])),
            Err(ConfigError::ZeroBufferSize)
        ));
        let err = RegistryConfig::from_lookup(env(&[("SPLAY_BUFFER_SIZE", "lots")])).unwrap_err();
        assert!(err.to_string().contains("\"lots\""));
    }

    #[test]
    fn deserializes_camel_case() {
        let config: RegistryConfig =
            serde_json::from_str(r#"{"namespace":"ui","bufferSize":8}"#).unwrap();
        assert_eq!(config.namespace(), Some("ui"));
        assert_eq!(config.buffer_size(), 8);

        let partial: RegistryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(partial, RegistryConfig::default());
        assert!(serde_json::from_str::<RegistryConfig>(r#"{"bufferSize":0}"#).is_err());
    }
}
