//! Live-node integration tests.
//!
//! Run with: cargo test -p nano-rpc --test live_node -- --ignored
//!
//! Requires a Nano node RPC endpoint at NANO_RPC_URL (default:
//! http://localhost:7076).

use nano_rpc::NanoRpc;

// Genesis account; its first block is the largest send in the ledger.
const GENESIS_ACCOUNT: &str =
    "nano_3t6k35gi95xu6tergt6p69ck76ogmitsa8mnijtpxm9fkcm736xtoncuohr3";

fn node() -> NanoRpc {
    let _ = env_logger::builder().is_test(true).try_init();
    let url =
        std::env::var("NANO_RPC_URL").unwrap_or_else(|_| "http://localhost:7076".to_string());
    NanoRpc::new(&url)
}

// ─── 1. Connectivity ────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn test_version() {
    let n = node();
    let version = n.version().await.expect("version failed");

    assert!(!version.node_vendor.is_empty(), "node vendor should be set");
    assert!(!version.protocol_version.is_empty());
    println!("Node vendor: {}", version.node_vendor);
    println!("Protocol version: {}", version.protocol_version);
}

#[tokio::test]
#[ignore]
async fn test_block_count() {
    let n = node();
    let count = n.block_count(Some(true)).await.expect("block_count failed");

    let blocks: u64 = count.count.parse().expect("count should be numeric");
    assert!(blocks > 0, "ledger should not be empty");
    println!("Blocks: {}, unchecked: {}", count.count, count.unchecked);
}

#[tokio::test]
#[ignore]
async fn test_uptime() {
    let n = node();
    let uptime = n.uptime().await.expect("uptime failed");
    let seconds: u64 = uptime.seconds.parse().expect("seconds should be numeric");
    println!("Node uptime: {}s", seconds);
}

// ─── 2. Accounts ────────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn test_genesis_account_balance() {
    let n = node();
    let balance = n
        .account_balance(GENESIS_ACCOUNT, None)
        .await
        .expect("account_balance failed");

    assert!(!balance.balance.is_empty());
    println!("Genesis balance: {} raw", balance.balance);
}

#[tokio::test]
#[ignore]
async fn test_genesis_account_history() {
    let n = node();
    let history = n
        .account_history(GENESIS_ACCOUNT, 5, None)
        .await
        .expect("account_history failed");

    assert_eq!(history.account, GENESIS_ACCOUNT);
    assert!(!history.history.is_empty(), "genesis should have history");
    for entry in &history.history {
        assert!(!entry.hash.is_empty());
        println!("{} {} at height {}", entry.entry_type, entry.hash, entry.height);
    }
}

#[tokio::test]
#[ignore]
async fn test_account_key_roundtrip() {
    let n = node();
    let key = n
        .account_key(GENESIS_ACCOUNT)
        .await
        .expect("account_key failed");
    assert_eq!(key.key.len(), 64, "public key should be 64 hex chars");

    let account = n.account_get(&key.key).await.expect("account_get failed");
    assert_eq!(account.account, GENESIS_ACCOUNT);
}

#[tokio::test]
#[ignore]
async fn test_validate_account_number() {
    let n = node();
    let valid = n
        .validate_account_number(GENESIS_ACCOUNT)
        .await
        .expect("validate_account_number failed");
    assert_eq!(valid.valid, "1");

    let invalid = n
        .validate_account_number("nano_1nonsense")
        .await
        .expect("validate_account_number failed");
    assert_eq!(invalid.valid, "0");
}

// ─── 3. Blocks ──────────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn test_frontier_block_info() {
    let n = node();
    let info = n
        .account_info(GENESIS_ACCOUNT, None)
        .await
        .expect("account_info failed");

    let block = n
        .block_info(
            &info.frontier,
            Some(nano_rpc::node::BlockInfoOptions {
                json_block: Some(true),
                ..Default::default()
            }),
        )
        .await
        .expect("block_info failed");

    assert_eq!(block.block_account, GENESIS_ACCOUNT);
    assert!(block.contents.is_object(), "json_block should give an object");
    println!("Frontier height: {}", block.height);
}

#[tokio::test]
#[ignore]
async fn test_chain_walk() {
    let n = node();
    let info = n
        .account_info(GENESIS_ACCOUNT, None)
        .await
        .expect("account_info failed");
    let chain = n
        .chain(&info.frontier, 5, None)
        .await
        .expect("chain failed");

    assert!(!chain.blocks.is_empty());
    assert_eq!(chain.blocks[0], info.frontier);
}

// ─── 4. Network ─────────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn test_peers() {
    let n = node();
    let peers = n.peers(None).await.expect("peers failed");
    println!("Peers: {:?}", peers.peers);
}

#[tokio::test]
#[ignore]
async fn test_representatives_online() {
    let n = node();
    let online = n
        .representatives_online(None, None)
        .await
        .expect("representatives_online failed");
    println!("Online representatives: {:?}", online.representatives);
}

#[tokio::test]
#[ignore]
async fn test_telemetry() {
    let n = node();
    let telemetry = n.telemetry(None).await.expect("telemetry failed");
    println!(
        "Telemetry: {} blocks, {} cemented, {} peers",
        telemetry.block_count, telemetry.cemented_count, telemetry.peer_count
    );
}

// ─── 5. Work (validation only; generation may be disabled) ──────────────────

#[tokio::test]
#[ignore]
async fn test_work_validate_garbage() {
    let n = node();
    // Obviously wrong work for the genesis frontier should come back invalid,
    // not crash the node.
    let info = n
        .account_info(GENESIS_ACCOUNT, None)
        .await
        .expect("account_info failed");
    match n
        .work_validate(&info.frontier, "0000000000000000", None)
        .await
    {
        Ok(result) => {
            assert_ne!(result.valid_all.as_deref(), Some("1"));
            println!("Garbage work correctly invalid: {:?}", result.valid_all);
        }
        Err(e) => {
            println!("work_validate returned error for garbage work: {} (ok)", e);
        }
    }
}
