use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{encode::payload::EncodedPayload, foundation::error::RainbowResult};

/// `eth_sendTransaction` parameter object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub value: String,
    pub data: String,
}

impl TransactionRequest {
    /// Zero-value transaction from `account` to itself carrying `payload` as calldata.
    pub fn self_inscription(account: &str, payload: &EncodedPayload) -> Self {
        Self {
            from: account.to_owned(),
            to: account.to_owned(),
            value: "0x0".to_owned(),
            data: payload.to_tx_data(),
        }
    }

    /// JSON-RPC 2.0 envelope, as a wallet relay would receive it.
    pub fn to_rpc_request(&self, id: u64) -> serde_json::Value {
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "eth_sendTransaction",
            "params": [self],
        })
    }
}

/// Identifier returned by the provider for a submitted transaction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host-injected wallet capability (`eth_requestAccounts`, `eth_chainId`, `eth_sendTransaction`).
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    async fn request_accounts(&mut self) -> RainbowResult<Vec<String>>;

    async fn chain_id(&mut self) -> RainbowResult<u64>;

    async fn send_transaction(&mut self, tx: &TransactionRequest) -> RainbowResult<TxHash>;
}
