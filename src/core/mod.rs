pub mod distance;
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::TangoError;
pub use models::{
    Progress,
    VocabularyItem,
};
