pub(crate) mod bridge;
pub(crate) mod network;
pub(crate) mod provider;

#[cfg(test)]
#[path = "../tests/unit/support/mock_wallet.rs"]
pub(crate) mod mock_wallet;
