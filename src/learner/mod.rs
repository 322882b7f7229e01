use std::collections::HashSet;

use log::{
    info,
    warn,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    catalog::VocabCatalog,
    core::{
        Progress,
        TangoError,
    },
    persistence::Storage,
};

/// On-disk shape of the learner state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LearnerData {
    pub studied_ids: Vec<u32>, // learned, in commit order
    pub queue_ids: Vec<u32>,   // backlog, in scheduling order
}

impl LearnerData {
    pub fn fresh(catalog: &VocabCatalog) -> Self {
        Self { studied_ids: Vec::new(), queue_ids: catalog.ids_by_rank() }
    }

    /// Checks that both lists are duplicate-free, disjoint and inside the catalog.
    pub fn validate(&self, catalog: &VocabCatalog) -> Result<(), TangoError> {
        let mut learned = HashSet::with_capacity(self.studied_ids.len());
        for &id in &self.studied_ids {
            if !catalog.contains(id) {
                return Err(TangoError::CorruptState(format!(
                    "learned id {} is not in the catalog",
                    id
                )));
            }
            if !learned.insert(id) {
                return Err(TangoError::CorruptState(format!("learned id {} appears twice", id)));
            }
        }

        let mut queued = HashSet::with_capacity(self.queue_ids.len());
        for &id in &self.queue_ids {
            if !catalog.contains(id) {
                return Err(TangoError::CorruptState(format!(
                    "queued id {} is not in the catalog",
                    id
                )));
            }
            if !queued.insert(id) {
                return Err(TangoError::CorruptState(format!("queued id {} appears twice", id)));
            }
            if learned.contains(&id) {
                return Err(TangoError::CorruptState(format!(
                    "id {} is both queued and learned",
                    id
                )));
            }
        }

        Ok(())
    }
}

/// Backlog and learned set for one learner, written through to `filename` on
/// every mutation.
#[derive(Debug, Clone)]
pub struct LearnerState {
    data: LearnerData,
    storage: Storage,
    filename: String,
}

impl LearnerState {
    pub fn load(
        catalog: &VocabCatalog,
        storage: &Storage,
        filename: &str,
    ) -> Result<Self, TangoError> {
        let stored = storage.load_json::<LearnerData>(filename).map_err(|e| match e {
            TangoError::Json(err) => {
                TangoError::CorruptState(format!("Failed to parse {}: {}", filename, err))
            }
            other => other,
        })?;

        let state = match stored {
            Some(data) => {
                data.validate(catalog)?;
                let state =
                    Self { data, storage: storage.clone(), filename: filename.to_string() };
                info!(
                    "event=state_load source=store queued={} learned={}",
                    state.data.queue_ids.len(),
                    state.data.studied_ids.len()
                );
                state
            }
            None => {
                let state = Self {
                    data: LearnerData::fresh(catalog),
                    storage: storage.clone(),
                    filename: filename.to_string(),
                };
                state.save()?;
                info!("event=state_load source=fresh queued={}", state.data.queue_ids.len());
                state
            }
        };

        Ok(state)
    }

    pub fn save(&self) -> Result<(), TangoError> {
        self.storage
            .save_json(&self.data, &self.filename)
            .map_err(|e| TangoError::Persistence(e.to_string()))
    }

    /// The first `min(n, queue length)` queued ids. Does not mutate.
    pub fn next_batch(&self, n: usize) -> Vec<u32> {
        self.data.queue_ids.iter().take(n).copied().collect()
    }

    /// Moves `ids` from the queue to the learned set and persists the result.
    ///
    /// Ids already learned are skipped. Unknown ids reject the whole batch before
    /// anything changes; a failed write restores the previous state.
    pub fn commit(&mut self, ids: &[u32], catalog: &VocabCatalog) -> Result<(), TangoError> {
        if let Some(&unknown) = ids.iter().find(|&&id| !catalog.contains(id)) {
            warn!("event=commit status=rejected unknown_id={}", unknown);
            return Err(TangoError::UnknownId(unknown));
        }

        let snapshot = self.data.clone();
        let committing: HashSet<u32> = ids.iter().copied().collect();

        self.data.queue_ids.retain(|id| !committing.contains(id));

        let mut learned: HashSet<u32> = self.data.studied_ids.iter().copied().collect();
        for &id in ids {
            if learned.insert(id) {
                self.data.studied_ids.push(id);
            }
        }

        if let Err(e) = self.save() {
            self.data = snapshot;
            warn!("event=commit status=rolled_back error={}", e);
            return Err(e);
        }

        info!(
            "event=commit status=ok count={} queued={} learned={}",
            ids.len(),
            self.data.queue_ids.len(),
            self.data.studied_ids.len()
        );
        Ok(())
    }

    /// Starts over from the full catalog. The fresh state replaces the stored one
    /// in a single write, so a failure leaves both memory and disk untouched.
    pub fn reset(&mut self, catalog: &VocabCatalog) -> Result<(), TangoError> {
        let fresh = Self {
            data: LearnerData::fresh(catalog),
            storage: self.storage.clone(),
            filename: self.filename.clone(),
        };
        if let Err(e) = fresh.save() {
            warn!("event=reset status=failed error={}", e);
            return Err(e);
        }
        *self = fresh;

        info!("event=reset status=ok queued={}", self.data.queue_ids.len());
        Ok(())
    }

    pub fn queue(&self) -> &[u32] {
        &self.data.queue_ids
    }

    pub fn learned(&self) -> &[u32] {
        &self.data.studied_ids
    }

    pub fn data(&self) -> &LearnerData {
        &self.data
    }

    pub fn is_learned(&self, id: u32) -> bool {
        self.data.studied_ids.contains(&id)
    }

    pub fn stats(&self) -> Progress {
        Progress { queued: self.data.queue_ids.len(), learned: self.data.studied_ids.len() }
    }
}
