//! Immutable models for the consumed slice of each upstream payload.
//!
//! Every struct derives `Deserialize` with defaults so a missing key decodes
//! to its zero value instead of failing the whole payload. Derived
//! quantities live in pure methods, never in constructors.

pub mod addresses;
pub mod blocks;
pub mod inscriptions;
pub mod market;
pub mod mining;
pub mod network;
pub mod transactions;

pub use addresses::{AddressInfo, AddressOverview, TxoStats};
pub use blocks::{BlockSummary, LatestBlock};
pub use inscriptions::{Inscription, Inscriptions};
pub use market::{
    AlternativeGlobal, CoinMarket, FearGreed, FngEntry, GlobalMarket, SimplePrice,
};
pub use mining::{MiningPools, PoolDetail, PoolHashrate, PoolStat};
pub use network::{ChainStats, FeeEstimates, MempoolInfo};
pub use transactions::{Transaction, TxInput, TxOutput, TxStatus};
