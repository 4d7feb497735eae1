//! Declarative configuration structs.
//!
//! Every config has private fields, a validating `new`, a `validate()`
//! method for instances obtained any other way (e.g. deserialization with
//! the `serde` feature), and `const` accessors.

mod keeper;
mod pool;
mod tranche;

pub use keeper::KeeperConfig;
pub use pool::PoolConfig;
pub use tranche::TrancheConfig;
