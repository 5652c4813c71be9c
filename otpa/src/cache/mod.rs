//! deterministic output file naming, resume decisions and safe writes. a file
//! only becomes part of the cache once it has been fully written.
mod atomic_write;
pub mod cache_ops;
mod derived_stage;
mod resume_policy;
mod run_metadata;

pub use atomic_write::write_atomically;
pub use derived_stage::DerivedStage;
pub use resume_policy::ResumePolicy;
pub use run_metadata::{load_run_metadata, metadata_filename, save_run_metadata, RunMetadata};
