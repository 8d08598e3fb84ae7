use crate::{
    encode::payload::EncodedPayload,
    foundation::error::{RainbowError, RainbowResult},
    wallet::{
        network::{UNKNOWN_NETWORK, network_name},
        provider::{TransactionRequest, TxHash, WalletProvider},
    },
};

/// Connected account (first one the provider reported) and its network label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletSession {
    pub account: String,
    pub network: String,
}

/// Adapter over an optional injected provider. Owns the session lifecycle:
/// unset, then connected, then unset again on disconnect.
#[derive(Debug)]
pub struct WalletBridge<P> {
    provider: Option<P>,
    session: Option<WalletSession>,
}

impl<P: WalletProvider> WalletBridge<P> {
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&WalletSession> {
        self.session.as_ref()
    }

    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    pub async fn connect(&mut self) -> RainbowResult<&WalletSession> {
        let Some(provider) = self.provider.as_mut() else {
            tracing::warn!("connect requested but no wallet provider is present");
            return Err(RainbowError::no_provider("no injected wallet provider"));
        };

        let accounts = provider.request_accounts().await.map_err(|e| {
            tracing::error!(error = %e, "account request failed");
            RainbowError::provider(format!("account request: {e}"))
        })?;
        let Some(account) = accounts.into_iter().next() else {
            tracing::error!("provider returned no accounts");
            return Err(RainbowError::provider("provider returned no accounts"));
        };

        let network = match provider.chain_id().await {
            Ok(id) => network_name(id),
            Err(e) => {
                tracing::error!(error = %e, "chain id query failed");
                UNKNOWN_NETWORK
            }
        };

        tracing::info!(%account, network, "wallet connected");
        let session = self.session.insert(WalletSession {
            account,
            network: network.to_owned(),
        });
        Ok(&*session)
    }

    /// Local reset only. Injected wallets offer no way to revoke access from the page.
    pub fn disconnect(&mut self) -> Option<WalletSession> {
        let prev = self.session.take();
        if prev.is_some() {
            tracing::info!("wallet disconnected");
        }
        prev
    }

    pub async fn submit(&mut self, payload: Option<&EncodedPayload>) -> RainbowResult<TxHash> {
        let (Some(session), Some(payload)) = (self.session.as_ref(), payload) else {
            return Err(RainbowError::precondition(
                "an active wallet session and a composed result are required",
            ));
        };
        let Some(provider) = self.provider.as_mut() else {
            return Err(RainbowError::no_provider("no injected wallet provider"));
        };

        let tx = TransactionRequest::self_inscription(&session.account, payload);
        tracing::debug!(from = %tx.from, data_len = tx.data.len(), "sending self-inscription");

        let hash = provider.send_transaction(&tx).await.map_err(|e| {
            tracing::error!(error = %e, "send transaction failed");
            RainbowError::provider(format!("send transaction: {e}"))
        })?;

        tracing::info!(%hash, "transaction sent");
        Ok(hash)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wallet/bridge.rs"]
mod tests;
