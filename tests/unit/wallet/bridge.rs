use pollster::block_on;

use super::*;
use crate::wallet::mock_wallet::MockProvider;

fn payload() -> EncodedPayload {
    crate::encode::payload::encode_payload("<svg/>").unwrap()
}

#[test]
fn connect_without_provider_is_distinct_failure() {
    let mut bridge = WalletBridge::<MockProvider>::new(None);
    let err = block_on(bridge.connect()).unwrap_err();
    assert!(matches!(err, RainbowError::NoProvider(_)));
    assert!(bridge.session().is_none());
}

#[test]
fn connect_records_first_account_and_network() {
    let mut bridge = WalletBridge::new(Some(MockProvider::with_account("0xABC", 4)));
    let session = block_on(bridge.connect()).unwrap().clone();
    assert_eq!(
        session,
        WalletSession {
            account: "0xABC".to_string(),
            network: "Rinkeby Testnet".to_string(),
        }
    );
    assert_eq!(bridge.session(), Some(&session));
}

#[test]
fn chain_id_failure_falls_back_to_unknown_network() {
    let mut provider = MockProvider::with_account("0xABC", 1);
    provider.chain_id = None;
    let mut bridge = WalletBridge::new(Some(provider));
    let session = block_on(bridge.connect()).unwrap();
    assert_eq!(session.network, "Unknown Network");
}

#[test]
fn rejected_or_empty_account_request_is_provider_error() {
    let mut provider = MockProvider::with_account("0xABC", 1);
    provider.reject_accounts = true;
    let mut bridge = WalletBridge::new(Some(provider));
    assert!(matches!(
        block_on(bridge.connect()),
        Err(RainbowError::Provider(_))
    ));
    assert!(bridge.session().is_none());

    let mut bridge = WalletBridge::new(Some(MockProvider {
        chain_id: Some(1),
        ..MockProvider::default()
    }));
    assert!(matches!(
        block_on(bridge.connect()),
        Err(RainbowError::Provider(_))
    ));
    assert!(bridge.session().is_none());
}

#[test]
fn submit_sends_zero_value_self_transaction() {
    let mut bridge = WalletBridge::new(Some(MockProvider::with_account("0xABC", 1)));
    block_on(bridge.connect()).unwrap();

    let p = payload();
    let hash = block_on(bridge.submit(Some(&p))).unwrap();
    assert_eq!(hash, TxHash("0xhash1".to_string()));

    let sent = &bridge.provider().unwrap().sent;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, "0xABC");
    assert_eq!(sent[0].to, "0xABC");
    assert_eq!(sent[0].value, "0x0");
    assert_eq!(sent[0].data, format!("0x{}", p.as_str()));
}

#[test]
fn submit_without_session_or_payload_never_sends() {
    let mut bridge = WalletBridge::new(Some(MockProvider::with_account("0xABC", 1)));
    let p = payload();
    assert!(matches!(
        block_on(bridge.submit(Some(&p))),
        Err(RainbowError::Precondition(_))
    ));

    block_on(bridge.connect()).unwrap();
    assert!(matches!(
        block_on(bridge.submit(None)),
        Err(RainbowError::Precondition(_))
    ));
    assert!(bridge.provider().unwrap().sent.is_empty());
}

#[test]
fn disconnect_clears_session_and_blocks_submit() {
    let mut bridge = WalletBridge::new(Some(MockProvider::with_account("0xABC", 1)));
    block_on(bridge.connect()).unwrap();
    let prev = bridge.disconnect().unwrap();
    assert_eq!(prev.account, "0xABC");
    assert!(bridge.session().is_none());
    assert!(bridge.disconnect().is_none());

    let p = payload();
    assert!(block_on(bridge.submit(Some(&p))).is_err());
    assert!(bridge.provider().unwrap().sent.is_empty());
}

#[test]
fn provider_send_failure_is_reported() {
    let mut provider = MockProvider::with_account("0xABC", 1);
    provider.reject_send = true;
    let mut bridge = WalletBridge::new(Some(provider));
    block_on(bridge.connect()).unwrap();
    let p = payload();
    let err = block_on(bridge.submit(Some(&p))).unwrap_err();
    assert!(matches!(err, RainbowError::Provider(_)));
    assert!(err.to_string().contains("denied"));
}

#[test]
fn rpc_envelope_wraps_request() {
    let tx = TransactionRequest::self_inscription("0xABC", &payload());
    let rpc = tx.to_rpc_request(7);
    assert_eq!(rpc["method"], "eth_sendTransaction");
    assert_eq!(rpc["id"], 7);
    assert_eq!(rpc["params"][0]["from"], "0xABC");
    assert_eq!(rpc["params"][0]["to"], "0xABC");
    assert_eq!(rpc["params"][0]["value"], "0x0");
}
