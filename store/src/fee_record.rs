//! Fee-distribution audit-record storage trait.

use crate::StoreError;
use vital_types::FeeDistributionRecord;

/// Append-only log of fee distributions, one record per fee-bearing
/// verification.
pub trait FeeRecordStore {
    fn append_fee_record(&self, record: &FeeDistributionRecord) -> Result<(), StoreError>;
    fn fee_records(&self) -> Result<Vec<FeeDistributionRecord>, StoreError>;
    fn fee_record_count(&self) -> Result<u64, StoreError>;
}
