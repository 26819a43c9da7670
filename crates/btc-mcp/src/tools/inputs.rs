//! Argument structs for the tool handlers.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddressInput {
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct TxidInput {
    pub txid: String,
}

#[derive(Debug, Deserialize)]
pub struct HeightInput {
    pub height: u64,
}

#[derive(Debug, Deserialize)]
pub struct SlugInput {
    pub slug: String,
}
