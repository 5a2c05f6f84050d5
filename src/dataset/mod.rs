// Dataset — the tabular career records everything else is derived from.

pub mod loader;
pub mod models;

pub use loader::{load_dataset, read_dataset, split_skills};
pub use models::DatasetRow;
