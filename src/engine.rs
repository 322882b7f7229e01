use log::{
    info,
    warn,
};

use crate::{
    catalog::{
        SeedCatalog,
        VocabCatalog,
    },
    config::EngineConfig,
    core::{
        Progress,
        TangoError,
    },
    learner::LearnerState,
    persistence::Storage,
    session::{
        Session,
        SessionLifecycle,
        SessionPlanner,
    },
};

/// Catalog, learner state and the live proposal for one data directory.
///
/// Several engines may exist side by side as long as they use different
/// directories; nothing is shared between them.
#[derive(Debug)]
pub struct VocabEngine {
    config: EngineConfig,
    catalog: VocabCatalog,
    state: LearnerState,
    planner: SessionPlanner,
    lifecycle: SessionLifecycle,
}

impl VocabEngine {
    /// Loads (or seeds) the catalog and the learner state. Any error here is fatal
    /// for the run.
    pub fn open(
        storage: &Storage,
        config: EngineConfig,
        seed: &dyn SeedCatalog,
    ) -> Result<Self, TangoError> {
        config.validate()?;
        let catalog = VocabCatalog::load(storage, &config.catalog_file, seed)?;
        let state = LearnerState::load(&catalog, storage, &config.state_file)?;
        let planner = SessionPlanner::from(&config);

        info!(
            "event=engine_open dir={} items={} learned={}",
            storage.root().display(),
            catalog.len(),
            state.learned().len()
        );

        Ok(Self { config, catalog, state, planner, lifecycle: SessionLifecycle::Idle })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &VocabCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &LearnerState {
        &self.state
    }

    pub fn stats(&self) -> Progress {
        self.state.stats()
    }

    /// Proposes with the configured batch size.
    pub fn propose(&self) -> Session {
        self.propose_with(self.config.batch_size)
    }

    pub fn propose_with(&self, batch_size: usize) -> Session {
        self.planner.propose(&self.catalog, &self.state, batch_size)
    }

    /// Proposes a session and keeps it as the live proposal. Returns `None` when
    /// nothing is left to learn. While a proposal is live it is returned unchanged.
    pub fn start_session(&mut self, batch_size: Option<usize>) -> Option<&Session> {
        if !self.lifecycle.is_proposed() {
            let session = self.propose_with(batch_size.unwrap_or(self.config.batch_size));
            if session.is_empty() {
                info!("event=start_session status=complete");
            }
            self.lifecycle.offer(session);
        }
        self.lifecycle.current()
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.lifecycle.current()
    }

    /// Commits exactly the ids of the live proposal and returns them.
    ///
    /// A failed write keeps the proposal so the commit can be retried; an unknown
    /// id drops it.
    pub fn finish_session(&mut self) -> Result<Vec<u32>, TangoError> {
        let session = self.lifecycle.take()?;
        let ids = session.ids();

        match self.state.commit(&ids, &self.catalog) {
            Ok(()) => Ok(ids),
            Err(e @ TangoError::Persistence(_)) => {
                warn!("event=finish_session status=retryable error={}", e);
                self.lifecycle.restore(session);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    pub fn discard_session(&mut self) -> Result<(), TangoError> {
        let session = self.lifecycle.discard()?;
        info!("event=discard_session count={}", session.new_words.len());
        Ok(())
    }

    /// Forgets all progress. Any live proposal is dropped.
    pub fn reset(&mut self) -> Result<(), TangoError> {
        self.state.reset(&self.catalog)?;
        self.lifecycle = SessionLifecycle::Idle;
        Ok(())
    }
}
