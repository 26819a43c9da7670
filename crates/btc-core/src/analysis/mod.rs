//! Pure derivations over the model types, plus the plain-text reports the
//! tools return. Nothing in here touches the network.

pub mod addresses;
pub mod blocks;
pub mod market;
pub mod mining;
pub mod network;
pub mod ordinals;
pub mod transactions;
