//! Nullable store — thread-safe in-memory storage for testing.

use std::collections::BTreeMap;
use std::sync::Mutex;
use vital_store::{
    BlacklistStore, FeeRecordStore, ProofStore, StoreError, SubjectKeyStore, SupplyStore,
    VoteStore,
};
use vital_types::{
    BlacklistEntry, DeepfakeVote, Did, FeeDistributionRecord, LivenessProof, PoolId, ProofHash,
    PublicKey, TokenAmount,
};

/// An in-memory backend for every kernel storage trait.
///
/// BTreeMaps keep iteration order deterministic; Mutexes make the store
/// shareable across test tasks. Vote keys are `(proof_hash, validator)` so
/// `votes_for_proof` is a range scan, mirroring the prefix iteration a KV
/// backend would use.
pub struct NullStore {
    proofs: Mutex<BTreeMap<[u8; 32], LivenessProof>>,
    blacklist: Mutex<BTreeMap<[u8; 32], BlacklistEntry>>,
    votes: Mutex<BTreeMap<([u8; 32], String), DeepfakeVote>>,
    supply: Mutex<TokenAmount>,
    balances: Mutex<BTreeMap<String, TokenAmount>>,
    pools: Mutex<BTreeMap<PoolId, TokenAmount>>,
    jurisdictions: Mutex<BTreeMap<String, ()>>,
    fee_records: Mutex<Vec<FeeDistributionRecord>>,
    subject_keys: Mutex<BTreeMap<String, PublicKey>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            proofs: Mutex::new(BTreeMap::new()),
            blacklist: Mutex::new(BTreeMap::new()),
            votes: Mutex::new(BTreeMap::new()),
            supply: Mutex::new(TokenAmount::ZERO),
            balances: Mutex::new(BTreeMap::new()),
            pools: Mutex::new(BTreeMap::new()),
            jurisdictions: Mutex::new(BTreeMap::new()),
            fee_records: Mutex::new(Vec::new()),
            subject_keys: Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProofStore for NullStore {
    fn get_proof(&self, hash: &ProofHash) -> Result<Option<LivenessProof>, StoreError> {
        Ok(self.proofs.lock().unwrap().get(hash.as_bytes()).cloned())
    }

    fn put_proof(&self, hash: &ProofHash, proof: &LivenessProof) -> Result<(), StoreError> {
        self.proofs
            .lock()
            .unwrap()
            .insert(*hash.as_bytes(), proof.clone());
        Ok(())
    }

    fn proof_count(&self) -> Result<u64, StoreError> {
        Ok(self.proofs.lock().unwrap().len() as u64)
    }

    fn iter_proofs(&self) -> Result<Vec<(ProofHash, LivenessProof)>, StoreError> {
        Ok(self
            .proofs
            .lock()
            .unwrap()
            .iter()
            .map(|(bytes, proof)| (ProofHash::new(*bytes), proof.clone()))
            .collect())
    }

    fn delete_proof(&self, hash: &ProofHash) -> Result<(), StoreError> {
        self.proofs.lock().unwrap().remove(hash.as_bytes());
        Ok(())
    }
}

impl BlacklistStore for NullStore {
    fn get_blacklist_entry(&self, hash: &ProofHash) -> Result<Option<BlacklistEntry>, StoreError> {
        Ok(self.blacklist.lock().unwrap().get(hash.as_bytes()).cloned())
    }

    fn put_blacklist_entry(&self, entry: &BlacklistEntry) -> Result<(), StoreError> {
        self.blacklist
            .lock()
            .unwrap()
            .insert(*entry.proof_hash.as_bytes(), entry.clone());
        Ok(())
    }

    fn blacklist_count(&self) -> Result<u64, StoreError> {
        Ok(self.blacklist.lock().unwrap().len() as u64)
    }

    fn iter_blacklist(&self) -> Result<Vec<BlacklistEntry>, StoreError> {
        Ok(self.blacklist.lock().unwrap().values().cloned().collect())
    }
}

impl VoteStore for NullStore {
    fn put_vote(&self, vote: &DeepfakeVote) -> Result<(), StoreError> {
        let key = (
            *vote.proof_hash.as_bytes(),
            vote.validator_id.as_str().to_string(),
        );
        self.votes.lock().unwrap().insert(key, vote.clone());
        Ok(())
    }

    fn get_vote(
        &self,
        hash: &ProofHash,
        validator: &Did,
    ) -> Result<Option<DeepfakeVote>, StoreError> {
        let key = (*hash.as_bytes(), validator.as_str().to_string());
        Ok(self.votes.lock().unwrap().get(&key).cloned())
    }

    fn votes_for_proof(&self, hash: &ProofHash) -> Result<Vec<DeepfakeVote>, StoreError> {
        let bytes = *hash.as_bytes();
        Ok(self
            .votes
            .lock()
            .unwrap()
            .range((bytes, String::new())..)
            .take_while(|((prefix, _), _)| *prefix == bytes)
            .map(|(_, vote)| vote.clone())
            .collect())
    }

    fn vote_count(&self) -> Result<u64, StoreError> {
        Ok(self.votes.lock().unwrap().len() as u64)
    }
}

impl SupplyStore for NullStore {
    fn circulating_supply(&self) -> Result<TokenAmount, StoreError> {
        Ok(*self.supply.lock().unwrap())
    }

    fn set_circulating_supply(&self, supply: TokenAmount) -> Result<(), StoreError> {
        *self.supply.lock().unwrap() = supply;
        Ok(())
    }

    fn balance(&self, citizen: &Did) -> Result<TokenAmount, StoreError> {
        Ok(self
            .balances
            .lock()
            .unwrap()
            .get(citizen.as_str())
            .copied()
            .unwrap_or(TokenAmount::ZERO))
    }

    fn set_balance(&self, citizen: &Did, amount: TokenAmount) -> Result<(), StoreError> {
        self.balances
            .lock()
            .unwrap()
            .insert(citizen.as_str().to_string(), amount);
        Ok(())
    }

    fn pool_balance(&self, pool: &PoolId) -> Result<TokenAmount, StoreError> {
        Ok(self
            .pools
            .lock()
            .unwrap()
            .get(pool)
            .copied()
            .unwrap_or(TokenAmount::ZERO))
    }

    fn set_pool_balance(&self, pool: &PoolId, amount: TokenAmount) -> Result<(), StoreError> {
        self.pools.lock().unwrap().insert(pool.clone(), amount);
        Ok(())
    }

    fn register_jurisdiction(&self, code: &str) -> Result<(), StoreError> {
        self.jurisdictions
            .lock()
            .unwrap()
            .insert(code.to_string(), ());
        Ok(())
    }

    fn has_jurisdiction_pool(&self, code: &str) -> Result<bool, StoreError> {
        Ok(self.jurisdictions.lock().unwrap().contains_key(code))
    }
}

impl FeeRecordStore for NullStore {
    fn append_fee_record(&self, record: &FeeDistributionRecord) -> Result<(), StoreError> {
        self.fee_records.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn fee_records(&self) -> Result<Vec<FeeDistributionRecord>, StoreError> {
        Ok(self.fee_records.lock().unwrap().clone())
    }

    fn fee_record_count(&self) -> Result<u64, StoreError> {
        Ok(self.fee_records.lock().unwrap().len() as u64)
    }
}

impl SubjectKeyStore for NullStore {
    fn put_subject_key(&self, subject: &Did, key: &PublicKey) -> Result<(), StoreError> {
        self.subject_keys
            .lock()
            .unwrap()
            .insert(subject.as_str().to_string(), key.clone());
        Ok(())
    }

    fn subject_key(&self, subject: &Did) -> Result<Option<PublicKey>, StoreError> {
        Ok(self
            .subject_keys
            .lock()
            .unwrap()
            .get(subject.as_str())
            .cloned())
    }
}
