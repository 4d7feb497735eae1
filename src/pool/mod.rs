//! Tranche storage.

mod tranche_pool;

pub use tranche_pool::TranchePool;
