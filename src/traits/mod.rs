//! Core trait abstractions.
//!
//! The engine never owns assets, prices or share tokens.  It reads them
//! through three read-only collaborators injected by the caller:
//!
//! | Trait | Supplies |
//! |-------|----------|
//! | [`RateSource`] | live A-in-B exchange rate |
//! | [`ShareLedger`] | outstanding claim shares per tranche |
//! | [`BalanceReader`] | subsidy reserve balances |
//!
//! [`FromConfig`] is the uniform construction path from configuration.

mod balance_reader;
mod from_config;
mod rate_source;
mod share_ledger;

pub use balance_reader::BalanceReader;
pub use from_config::FromConfig;
pub use rate_source::RateSource;
pub use share_ledger::ShareLedger;
