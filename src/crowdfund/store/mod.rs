//! # Storage Layer
//!
//! The whole dataset is one document: every operation loads it, changes it
//! in memory and writes it back in full. The [`DataStore`] trait hides where
//! that document lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file
//!   - A missing file reads as an empty dataset
//!   - Malformed content is reported as `StorageCorrupt`, never repaired
//!   - Saves replace the whole file through a temporary sibling
//!
//! - [`memory::InMemoryStore`]: keeps the dataset in memory for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "users": [{"id": 0, "fname": .., "lname": .., "email": .., "password": .., "phone": ..}],
//!     "projects": [{"user_id": 0, "title": .., "details": .., "total_target": 5000.0,
//!                   "start_date": "2025-01-01", "end_date": "2025-02-01"}]
//! }
//! ```

use crate::error::Result;
use crate::model::Dataset;

pub mod fs;
pub mod memory;

/// Abstract interface for dataset persistence.
pub trait DataStore {
    /// Read the full dataset. A store that was never written is empty.
    fn load(&self) -> Result<Dataset>;

    /// Replace the stored dataset with `dataset`.
    fn save(&mut self, dataset: &Dataset) -> Result<()>;
}
