//! Blacklist storage trait.

use crate::StoreError;
use vital_types::{BlacklistEntry, ProofHash};

/// Permanently rejected proof identifiers plus their evidence.
///
/// Deliberately has no delete operation: blacklist entries are permanent.
pub trait BlacklistStore {
    fn get_blacklist_entry(&self, hash: &ProofHash) -> Result<Option<BlacklistEntry>, StoreError>;
    fn put_blacklist_entry(&self, entry: &BlacklistEntry) -> Result<(), StoreError>;
    fn blacklist_count(&self) -> Result<u64, StoreError>;
    fn iter_blacklist(&self) -> Result<Vec<BlacklistEntry>, StoreError>;

    fn is_blacklisted(&self, hash: &ProofHash) -> Result<bool, StoreError> {
        Ok(self.get_blacklist_entry(hash)?.is_some())
    }
}
