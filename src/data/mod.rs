mod dataset;
mod document;
mod loader;

pub use dataset::{CapitalDataset, ContinentTable};
pub use loader::{EMBEDDED_DATASET_LABEL, load_dataset_from_json, parse_dataset};
