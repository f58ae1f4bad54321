use crate::errors::RegistryError;
use crate::models::RegistryRecord;

/// Lookup of bibliographic records by identifier.
pub trait IBibliographicRegistry: Send + Sync {
    /// Fetch the record for `identifier`.
    ///
    /// `Ok(None)` means the registry answered but does not know the
    /// identifier. Transport and decoding failures are `Err`.
    fn fetch(&self, identifier: &str) -> Result<Option<RegistryRecord>, RegistryError>;

    /// Human-readable registry name for logs.
    fn name(&self) -> &str;
}
