//! Fixed validator roster for tests.

use std::collections::BTreeSet;
use std::sync::Mutex;
use vital_store::ValidatorRoster;
use vital_types::Did;

/// An in-memory validator set with explicit membership control.
///
/// Mutable at any point so tests can exercise roster churn between votes —
/// the tally must always see the live size, never a cached one.
pub struct FixedRoster {
    validators: Mutex<BTreeSet<Did>>,
}

impl FixedRoster {
    pub fn new(validators: impl IntoIterator<Item = Did>) -> Self {
        Self {
            validators: Mutex::new(validators.into_iter().collect()),
        }
    }

    pub fn empty() -> Self {
        Self::new([])
    }

    pub fn add(&self, validator: Did) {
        self.validators.lock().unwrap().insert(validator);
    }

    pub fn remove(&self, validator: &Did) {
        self.validators.lock().unwrap().remove(validator);
    }
}

impl ValidatorRoster for FixedRoster {
    fn contains(&self, validator: &Did) -> bool {
        self.validators.lock().unwrap().contains(validator)
    }

    fn validator_count(&self) -> u32 {
        self.validators.lock().unwrap().len() as u32
    }
}
