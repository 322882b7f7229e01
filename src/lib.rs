pub mod catalog;
pub mod config;
pub mod core;
pub mod engine;
pub mod learner;
pub mod logging;
pub mod persistence;
pub mod session;

pub use crate::{
    catalog::{
        BuiltinSeed,
        SeedCatalog,
        VocabCatalog,
    },
    config::EngineConfig,
    core::{
        distance::distance,
        Progress,
        TangoError,
        VocabularyItem,
    },
    engine::VocabEngine,
    learner::LearnerState,
    persistence::Storage,
    session::{
        Session,
        SessionLifecycle,
        SessionPlanner,
    },
};
