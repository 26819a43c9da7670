//! Transaction payloads from mempool.space.

use serde::Deserialize;

/// Sequence values at or above this do not signal replace-by-fee.
const RBF_SEQUENCE_CEILING: u32 = 0xfffffffe;

/// mempool.space transaction, as returned by `/tx/{txid}` and
/// `/address/{addr}/txs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub txid: String,
    pub size: u64,
    pub weight: u64,
    pub fee: u64,
    pub vsize: Option<u64>,
    pub vin: Vec<TxInput>,
    pub vout: Vec<TxOutput>,
    pub status: TxStatus,
}

impl Transaction {
    /// Virtual size; endpoints that omit it fall back to the raw size.
    pub fn vsize_vb(&self) -> u64 {
        self.vsize.unwrap_or(self.size)
    }

    /// Fee rate in sat/vB, zero when the size is unknown.
    pub fn fee_rate(&self) -> f64 {
        let vsize = self.vsize_vb();
        if vsize == 0 {
            0.0
        } else {
            self.fee as f64 / vsize as f64
        }
    }

    /// True when any input sequence leaves room for replacement.
    pub fn signals_rbf(&self) -> bool {
        self.vin
            .iter()
            .any(|input| input.sequence < RBF_SEQUENCE_CEILING)
    }

    /// Confirmation count relative to the given tip, zero when unconfirmed.
    pub fn confirmations(&self, tip_height: Option<u64>) -> u64 {
        match (self.status.confirmed, self.status.block_height, tip_height) {
            (true, Some(height), Some(tip)) if tip >= height => tip - height + 1,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TxInput {
    pub txid: String,
    pub vout: u32,
    pub prevout: Option<PrevOut>,
    pub sequence: u32,
}

impl Default for TxInput {
    fn default() -> Self {
        Self {
            txid: String::new(),
            vout: 0,
            prevout: None,
            // Final sequence, i.e. no RBF signal.
            sequence: u32::MAX,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrevOut {
    pub scriptpubkey_address: Option<String>,
    pub value: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TxOutput {
    pub scriptpubkey_address: Option<String>,
    pub value: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TxStatus {
    pub confirmed: bool,
    pub block_height: Option<u64>,
    pub block_time: Option<u64>,
}
