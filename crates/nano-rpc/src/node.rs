//! Nano node RPC client.
//!
//! Typed async methods for the Nano node RPC actions. Covers accounts,
//! blocks, bootstrap, confirmation, keys, ledger queries, network info,
//! telemetry, stats, and proof-of-work.
//!
//! Reference: Nano RPC protocol documentation.
//!
//! The node serializes almost every numeric value as a decimal string, and
//! expects `count`, `port`, `index`, `epoch`, and `threads` request
//! parameters as decimal strings as well. The methods below perform that
//! coercion; callers pass plain integers.

use crate::client::{RpcClient, RpcConfig};
use crate::error::RpcError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// =============================================================================
// Response Types: Accounts
// =============================================================================

/// Response from `account_balance`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalance {
    pub balance: String,
    #[serde(default)]
    pub pending: String,
    #[serde(default)]
    pub receivable: String,
}

/// Response from `account_block_count`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBlockCount {
    pub block_count: String,
}

/// Response carrying a single `account` field (`account_get`, `block_account`).
#[derive(Debug, Clone, Deserialize)]
pub struct AccountResult {
    pub account: String,
}

/// Response from `account_history`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountHistory {
    pub account: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub previous: Option<String>,
    /// Present for reverse history.
    #[serde(default)]
    pub next: Option<String>,
}

/// Single `account_history` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEntry {
    /// `send`, `receive`; with `raw`, also `change`, `state`, etc.
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub amount: String,
    pub local_timestamp: String,
    pub height: String,
    pub hash: String,
    #[serde(default)]
    pub confirmed: String,
    /// Only for raw history.
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Response from `account_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    pub frontier: String,
    pub open_block: String,
    pub representative_block: String,
    pub balance: String,
    pub modified_timestamp: String,
    pub block_count: String,
    #[serde(default)]
    pub account_version: String,
    #[serde(default)]
    pub confirmation_height: Option<String>,
    #[serde(default)]
    pub confirmation_height_frontier: Option<String>,
    #[serde(default)]
    pub representative: Option<String>,
    #[serde(default)]
    pub confirmed_representative: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub pending: Option<String>,
    #[serde(default)]
    pub receivable: Option<String>,
    #[serde(default)]
    pub confirmed_balance: Option<String>,
    #[serde(default)]
    pub confirmed_height: Option<String>,
    #[serde(default)]
    pub confirmed_frontier: Option<String>,
    #[serde(default)]
    pub confirmed_pending: Option<String>,
    #[serde(default)]
    pub confirmed_receivable: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Response from `account_key`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountKey {
    pub key: String,
}

/// Response from `account_representative`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRepresentative {
    pub representative: String,
}

/// Response from `account_weight`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountWeight {
    pub weight: String,
}

/// Response from `accounts_balances`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsBalances {
    pub balances: HashMap<String, AccountBalanceEntry>,
    /// Per-account errors (node v25+).
    #[serde(default)]
    pub errors: Option<HashMap<String, String>>,
}

/// Per-account entry in `accounts_balances`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalanceEntry {
    #[serde(default)]
    pub balance: String,
    #[serde(default)]
    pub pending: String,
    #[serde(default)]
    pub receivable: String,
    /// Per-account error (node v24).
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from `accounts_frontiers`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsFrontiers {
    pub frontiers: HashMap<String, String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, String>>,
}

/// Response from `accounts_representatives`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsRepresentatives {
    pub representatives: HashMap<String, String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, String>>,
}

/// Response from `accounts_receivable` / `accounts_pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsReceivable {
    pub blocks: AccountsReceivableBlocks,
}

/// `blocks` field of `accounts_receivable`; the node encodes an empty result
/// set as `""` instead of an object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AccountsReceivableBlocks {
    ByAccount(HashMap<String, ReceivableBlocks>),
    Empty(String),
}

/// Receivable blocks for one account, shape depending on request flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReceivableBlocks {
    /// Plain list of block hashes.
    Hashes(Vec<String>),
    /// Hash to amount, for threshold requests.
    Amounts(HashMap<String, String>),
    /// Hash to amount and source, for `source = true` requests.
    Sources(HashMap<String, ReceivableSource>),
    /// The node encodes an empty set as `""`.
    Empty(String),
}

/// Amount and source account of one receivable block.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceivableSource {
    pub amount: String,
    pub source: String,
}

// =============================================================================
// Response Types: Blocks
// =============================================================================

/// Response from `available_supply`.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailableSupply {
    pub available: String,
}

/// Response from `block_count`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockCount {
    pub count: String,
    pub unchecked: String,
    #[serde(default)]
    pub cemented: Option<String>,
}

/// Response from `block_create`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockCreate {
    pub hash: String,
    /// Block contents; a JSON object with `json_block`, a blob string otherwise.
    pub block: Value,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Response carrying a single block hash (`block_hash`,
/// `confirmation_height_currently_processing`).
#[derive(Debug, Clone, Deserialize)]
pub struct BlockHash {
    pub hash: String,
}

/// Response from `block_info`; also the per-hash entry of `blocks_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockInfo {
    pub block_account: String,
    pub amount: String,
    pub balance: String,
    pub height: String,
    pub local_timestamp: String,
    #[serde(default)]
    pub successor: Option<String>,
    pub confirmed: String,
    /// Block contents; a JSON object with `json_block`, a blob string otherwise.
    pub contents: Value,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub receive_hash: Option<String>,
    /// Only in `blocks_info` with `pending = true`.
    #[serde(default)]
    pub pending: Option<String>,
    /// Only in `blocks_info` with `source = true`.
    #[serde(default)]
    pub source_account: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Response from `blocks`.
#[derive(Debug, Clone, Deserialize)]
pub struct Blocks {
    pub blocks: HashMap<String, Value>,
}

/// Response from `blocks_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlocksInfo {
    pub blocks: HashMap<String, BlockInfo>,
    #[serde(default)]
    pub blocks_not_found: Option<Vec<String>>,
}

/// Response from `chain` / `successors`: a run of block hashes.
#[derive(Debug, Clone, Deserialize)]
pub struct Chain {
    pub blocks: Vec<String>,
}

// =============================================================================
// Response Types: Bootstrap
// =============================================================================

/// Response from `bootstrap_lazy`.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapLazy {
    pub started: String,
    #[serde(default)]
    pub key_inserted: String,
}

/// Response from `bootstrap_status`. Field availability varies widely across
/// node versions; older-version counters land in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapStatus {
    #[serde(default)]
    pub bootstrap_threads: Option<String>,
    #[serde(default)]
    pub running_attempts_count: Option<String>,
    #[serde(default)]
    pub total_attempts_count: Option<String>,
    #[serde(default)]
    pub connections: Option<BootstrapConnections>,
    #[serde(default)]
    pub attempts: Vec<BootstrapAttempt>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Connection counters in `bootstrap_status`.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConnections {
    pub clients: String,
    pub connections: String,
    pub idle: String,
    pub target_connections: String,
    pub pulls: String,
}

/// Single attempt entry in `bootstrap_status`.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapAttempt {
    pub id: String,
    pub mode: String,
    #[serde(default)]
    pub started: String,
    #[serde(default)]
    pub pulling: String,
    #[serde(default)]
    pub total_blocks: String,
    #[serde(default)]
    pub requeued_pulls: String,
    #[serde(default)]
    pub frontiers_received: String,
    #[serde(default)]
    pub frontiers_confirmed: String,
    #[serde(default)]
    pub last_account: String,
    #[serde(default)]
    pub duration: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// =============================================================================
// Response Types: Confirmation
// =============================================================================

/// Response from `confirmation_active`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationActive {
    #[serde(default)]
    pub confirmations: Vec<String>,
    #[serde(default)]
    pub unconfirmed: Option<String>,
    #[serde(default)]
    pub confirmed: Option<String>,
}

/// Response from `confirmation_history`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationHistory {
    pub confirmation_stats: ConfirmationStats,
    pub confirmations: Confirmations,
}

/// Aggregate stats in `confirmation_history`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationStats {
    pub count: String,
    #[serde(default)]
    pub average: Option<String>,
}

/// Confirmation list; `""` when no confirmation matched the requested hash.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Confirmations {
    Details(Vec<ConfirmationDetails>),
    Empty(String),
}

/// Single entry in `confirmation_history`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationDetails {
    pub hash: String,
    pub duration: String,
    pub time: String,
    pub tally: String,
    #[serde(default)]
    pub blocks: Option<String>,
    #[serde(default)]
    pub voters: Option<String>,
    #[serde(default)]
    pub request_count: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Response from `confirmation_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationInfo {
    pub announcements: String,
    #[serde(default)]
    pub voters: String,
    pub last_winner: String,
    #[serde(default)]
    pub total_tally: String,
    pub blocks: HashMap<String, ConfirmationBlockInfo>,
}

/// Per-block detail in `confirmation_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationBlockInfo {
    pub tally: String,
    #[serde(default)]
    pub contents: Option<Value>,
    #[serde(default)]
    pub representatives: Option<HashMap<String, String>>,
}

/// Response from `confirmation_quorum`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationQuorum {
    pub quorum_delta: String,
    pub online_weight_quorum_percent: String,
    pub online_weight_minimum: String,
    pub online_stake_total: String,
    pub peers_stake_total: String,
    #[serde(default)]
    pub trended_stake_total: String,
    #[serde(default)]
    pub peer_details: Vec<PeerStakeDetail>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Per-peer voting weight in `confirmation_quorum`.
#[derive(Debug, Clone, Deserialize)]
pub struct PeerStakeDetail {
    pub account: String,
    pub ip: String,
    pub weight: String,
}

// =============================================================================
// Response Types: Keys / Representatives / Ledger
// =============================================================================

/// Response from `delegators`.
#[derive(Debug, Clone, Deserialize)]
pub struct Delegators {
    pub delegators: HashMap<String, String>,
}

/// Response from `delegators_count` / `frontier_count`.
#[derive(Debug, Clone, Deserialize)]
pub struct Count {
    pub count: String,
}

/// Key triple from `key_create`, `key_expand`, and `deterministic_key`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyPair {
    pub private: String,
    pub public: String,
    pub account: String,
}

/// Response from `frontiers`.
#[derive(Debug, Clone, Deserialize)]
pub struct Frontiers {
    pub frontiers: HashMap<String, String>,
}

/// Response from `ledger`.
#[derive(Debug, Clone, Deserialize)]
pub struct Ledger {
    pub accounts: HashMap<String, LedgerAccountInfo>,
}

/// Per-account ledger entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerAccountInfo {
    pub frontier: String,
    pub open_block: String,
    pub representative_block: String,
    pub balance: String,
    pub modified_timestamp: String,
    pub block_count: String,
    #[serde(default)]
    pub representative: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub pending: Option<String>,
    #[serde(default)]
    pub receivable: Option<String>,
}

/// Response from `representatives`.
#[derive(Debug, Clone, Deserialize)]
pub struct Representatives {
    pub representatives: HashMap<String, String>,
}

/// Response from `representatives_online`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepresentativesOnline {
    pub representatives: OnlineRepresentatives,
}

/// Online representative list; a map with weight detail when `weight = true`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OnlineRepresentatives {
    List(Vec<String>),
    Weights(HashMap<String, RepresentativeWeight>),
    Simple(HashMap<String, String>),
    Empty(String),
}

/// Weight detail for one online representative.
#[derive(Debug, Clone, Deserialize)]
pub struct RepresentativeWeight {
    pub weight: String,
}

// =============================================================================
// Response Types: Node / Network
// =============================================================================

/// Response from `node_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeId {
    pub private: String,
    pub public: String,
    /// Deprecated account rendering of the node ID.
    #[serde(default)]
    pub as_account: String,
    pub node_id: String,
}

/// Response from `node_id_delete`.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeIdDelete {
    pub deprecated: String,
}

/// Response from `peers`.
#[derive(Debug, Clone, Deserialize)]
pub struct Peers {
    pub peers: PeersList,
}

/// Peer listing; a map of `[ip]:port` to protocol version, or to a detail
/// object with `peer_details = true`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PeersList {
    Simple(HashMap<String, String>),
    Detailed(HashMap<String, PeerDetail>),
    List(Vec<String>),
    Empty(String),
}

/// Per-peer detail.
#[derive(Debug, Clone, Deserialize)]
pub struct PeerDetail {
    pub protocol_version: String,
    pub node_id: String,
    #[serde(rename = "type")]
    pub peer_type: String,
}

/// Response from `telemetry`.
#[derive(Debug, Clone, Deserialize)]
pub struct Telemetry {
    #[serde(default)]
    pub block_count: String,
    #[serde(default)]
    pub cemented_count: String,
    #[serde(default)]
    pub unchecked_count: String,
    #[serde(default)]
    pub account_count: String,
    #[serde(default)]
    pub bandwidth_cap: String,
    #[serde(default)]
    pub peer_count: String,
    #[serde(default)]
    pub protocol_version: String,
    #[serde(default)]
    pub uptime: String,
    #[serde(default)]
    pub genesis_block: String,
    #[serde(default)]
    pub major_version: String,
    #[serde(default)]
    pub minor_version: String,
    #[serde(default)]
    pub patch_version: String,
    #[serde(default)]
    pub pre_release_version: String,
    #[serde(default)]
    pub maker: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub active_difficulty: Option<String>,
    /// Per-peer metrics, for `raw = true`.
    #[serde(default)]
    pub metrics: Option<Vec<TelemetryMetric>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Per-peer telemetry entry (`raw = true`).
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryMetric {
    #[serde(default)]
    pub node_id: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub port: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Response from `version`.
#[derive(Debug, Clone, Deserialize)]
pub struct Version {
    pub rpc_version: String,
    pub store_version: String,
    pub protocol_version: String,
    pub node_vendor: String,
    #[serde(default)]
    pub store_vendor: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub network_identifier: Option<String>,
    #[serde(default)]
    pub build_info: Option<String>,
}

/// Response from `uptime`.
#[derive(Debug, Clone, Deserialize)]
pub struct Uptime {
    pub seconds: String,
}

// =============================================================================
// Response Types: Stats / Unchecked / Work
// =============================================================================

/// Response from `stats`. RocksDB database stats use dynamic keys; anything
/// outside the well-known fields lands in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    #[serde(rename = "type", default)]
    pub stat_type: String,
    #[serde(default)]
    pub created: String,
    /// For `counters` and `samples`.
    #[serde(default)]
    pub entries: Option<Vec<StatsEntry>>,
    #[serde(default)]
    pub stat_duration_seconds: Option<String>,
    /// For `objects`; unstable shape.
    #[serde(default)]
    pub node: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Single counter/sample entry in `stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsEntry {
    pub time: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub detail: String,
    pub dir: String,
    pub value: String,
}

/// Response from `unchecked`.
#[derive(Debug, Clone, Deserialize)]
pub struct Unchecked {
    pub blocks: HashMap<String, Value>,
}

/// Response from `unchecked_get`.
#[derive(Debug, Clone, Deserialize)]
pub struct UncheckedGet {
    pub modified_timestamp: String,
    pub contents: Value,
}

/// Response from `unchecked_keys`.
#[derive(Debug, Clone, Deserialize)]
pub struct UncheckedKeys {
    #[serde(default)]
    pub unchecked: Vec<UncheckedKeyBlock>,
}

/// Single entry in `unchecked_keys`.
#[derive(Debug, Clone, Deserialize)]
pub struct UncheckedKeyBlock {
    pub key: String,
    pub hash: String,
    pub modified_timestamp: String,
    pub contents: Value,
}

/// Response from `unopened`.
#[derive(Debug, Clone, Deserialize)]
pub struct Unopened {
    pub accounts: HashMap<String, String>,
}

/// Response from `process`.
#[derive(Debug, Clone, Deserialize)]
pub struct Process {
    pub hash: String,
}

/// Response from `republish`.
#[derive(Debug, Clone, Deserialize)]
pub struct Republish {
    #[serde(default)]
    pub success: String,
    #[serde(default)]
    pub blocks: Vec<String>,
}

/// Response from `sign`.
#[derive(Debug, Clone, Deserialize)]
pub struct Sign {
    pub signature: String,
    #[serde(default)]
    pub block: Option<Value>,
}

/// Response from `validate_account_number`: `valid` is `"1"` or `"0"`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidAccount {
    pub valid: String,
}

/// Response from `receivable_exists` / `pending_exists`: `"1"` or `"0"`.
#[derive(Debug, Clone, Deserialize)]
pub struct Exists {
    pub exists: String,
}

/// Response from `receivable` / `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct Receivable {
    pub blocks: ReceivableBlocks,
}

/// Response from `work_generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkGenerate {
    pub work: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub multiplier: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
}

/// Response from `work_peers`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkPeers {
    #[serde(default)]
    pub work_peers: Vec<String>,
}

/// Response from `work_validate`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkValidate {
    #[serde(default)]
    pub valid_all: Option<String>,
    #[serde(default)]
    pub valid_receive: Option<String>,
    /// Up to node v20.
    #[serde(default)]
    pub valid: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub multiplier: Option<String>,
}

/// Acknowledgement response carrying a `success` field.
#[derive(Debug, Clone, Deserialize)]
pub struct Success {
    #[serde(default)]
    pub success: String,
}

/// Acknowledgement response carrying a `started` field.
#[derive(Debug, Clone, Deserialize)]
pub struct Started {
    pub started: String,
}

// =============================================================================
// Option Types
// =============================================================================

/// Options for `account_balance` / `accounts_balances`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountBalanceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_only_confirmed: Option<bool>,
}

/// Options for `account_history`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountHistoryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_filter: Option<Vec<String>>,
}

/// Options for `account_info`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountInfoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receivable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_confirmed: Option<bool>,
}

/// Options for `accounts_receivable` / `accounts_pending`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountsReceivableOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_only_confirmed: Option<bool>,
}

/// Options for `receivable` / `pending`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReceivableOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_only_confirmed: Option<bool>,
}

/// Options for `receivable_exists` / `pending_exists`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReceivableExistsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_only_confirmed: Option<bool>,
}

/// Options for `block_info`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlockInfoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_hash: Option<bool>,
}

/// Options for `blocks`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlocksOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
}

/// Options for `blocks_info`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlocksInfoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_not_found: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_hash: Option<bool>,
}

/// Parameters for `block_create`. `block_type` is always `"state"` on
/// current networks; the remaining fields depend on the block being built.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlockCreateParams {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

/// Options for `chain` / `successors`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChainOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
}

/// Options for `confirmation_info`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfirmationInfoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representatives: Option<bool>,
}

/// Options for `ledger`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LedgerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receivable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_since: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
}

/// Options for `process`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_work: Option<bool>,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub is_async: Option<bool>,
}

/// Options for `republish`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepublishOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<bool>,
}

/// Parameters for `sign`: either a wallet/account pair or a private key,
/// plus the block (or hash) to sign.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Options for `telemetry`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TelemetryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Options for `unchecked`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UncheckedOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
}

/// Options for `work_generate`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkGenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_peers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_block: Option<bool>,
}

/// Options for `work_validate`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkValidateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Merge an option struct's set fields into a params object.
fn merge_options<T: Serialize>(params: &mut Value, options: Option<T>) -> Result<(), RpcError> {
    if let Some(options) = options {
        let extra = serde_json::to_value(options)?;
        if let (Value::Object(base), Value::Object(extra)) = (&mut *params, extra) {
            base.extend(extra);
        }
    }
    Ok(())
}

// =============================================================================
// NanoRpc
// =============================================================================

/// Async typed client for the Nano node RPC interface.
pub struct NanoRpc {
    client: RpcClient,
}

impl NanoRpc {
    /// Create a client connected to the given node URL.
    pub fn new(url: &str) -> Self {
        Self {
            client: RpcClient::new(url),
        }
    }

    /// Create with full configuration (auth, retries, timeout, log sink).
    pub fn with_config(config: RpcConfig) -> Self {
        Self {
            client: RpcClient::with_config(config),
        }
    }

    /// Get the underlying dispatch client, for actions without a typed wrapper.
    pub fn client(&self) -> &RpcClient {
        &self.client
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Get balance, pending, and receivable amounts for an account.
    pub async fn account_balance(
        &self,
        account: &str,
        options: Option<AccountBalanceOptions>,
    ) -> Result<AccountBalance, RpcError> {
        let mut params = serde_json::json!({ "account": account });
        merge_options(&mut params, options)?;
        let val = self.client.execute("account_balance", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get the number of blocks in an account's chain.
    pub async fn account_block_count(&self, account: &str) -> Result<AccountBlockCount, RpcError> {
        let val = self
            .client
            .execute("account_block_count", serde_json::json!({ "account": account }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Derive the account address for a public key.
    pub async fn account_get(&self, key: &str) -> Result<AccountResult, RpcError> {
        let val = self
            .client
            .execute("account_get", serde_json::json!({ "key": key }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get transaction history for an account.
    pub async fn account_history(
        &self,
        account: &str,
        count: u64,
        options: Option<AccountHistoryOptions>,
    ) -> Result<AccountHistory, RpcError> {
        let mut params = serde_json::json!({
            "account": account,
            "count": count.to_string(),
        });
        merge_options(&mut params, options)?;
        let val = self.client.execute("account_history", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get frontier, balance, and metadata for an account.
    pub async fn account_info(
        &self,
        account: &str,
        options: Option<AccountInfoOptions>,
    ) -> Result<AccountInfo, RpcError> {
        let mut params = serde_json::json!({ "account": account });
        merge_options(&mut params, options)?;
        let val = self.client.execute("account_info", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get the public key of an account.
    pub async fn account_key(&self, account: &str) -> Result<AccountKey, RpcError> {
        let val = self
            .client
            .execute("account_key", serde_json::json!({ "account": account }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get the representative of an account.
    pub async fn account_representative(
        &self,
        account: &str,
    ) -> Result<AccountRepresentative, RpcError> {
        let val = self
            .client
            .execute(
                "account_representative",
                serde_json::json!({ "account": account }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get the voting weight of an account.
    pub async fn account_weight(&self, account: &str) -> Result<AccountWeight, RpcError> {
        let val = self
            .client
            .execute("account_weight", serde_json::json!({ "account": account }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get balances for multiple accounts.
    pub async fn accounts_balances(
        &self,
        accounts: &[&str],
        options: Option<AccountBalanceOptions>,
    ) -> Result<AccountsBalances, RpcError> {
        let mut params = serde_json::json!({ "accounts": accounts });
        merge_options(&mut params, options)?;
        let val = self.client.execute("accounts_balances", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get frontier hashes for multiple accounts.
    pub async fn accounts_frontiers(
        &self,
        accounts: &[&str],
    ) -> Result<AccountsFrontiers, RpcError> {
        let val = self
            .client
            .execute(
                "accounts_frontiers",
                serde_json::json!({ "accounts": accounts }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get receivable blocks for multiple accounts.
    pub async fn accounts_receivable(
        &self,
        accounts: &[&str],
        count: u64,
        options: Option<AccountsReceivableOptions>,
    ) -> Result<AccountsReceivable, RpcError> {
        let mut params = serde_json::json!({
            "accounts": accounts,
            "count": count.to_string(),
        });
        merge_options(&mut params, options)?;
        let val = self.client.execute("accounts_receivable", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get pending blocks for multiple accounts (deprecated alias of
    /// [`accounts_receivable`](Self::accounts_receivable)).
    pub async fn accounts_pending(
        &self,
        accounts: &[&str],
        count: u64,
        options: Option<AccountsReceivableOptions>,
    ) -> Result<AccountsReceivable, RpcError> {
        let mut params = serde_json::json!({
            "accounts": accounts,
            "count": count.to_string(),
        });
        merge_options(&mut params, options)?;
        let val = self.client.execute("accounts_pending", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get representatives for multiple accounts.
    pub async fn accounts_representatives(
        &self,
        accounts: &[&str],
    ) -> Result<AccountsRepresentatives, RpcError> {
        let val = self
            .client
            .execute(
                "accounts_representatives",
                serde_json::json!({ "accounts": accounts }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// Get the total circulating supply.
    pub async fn available_supply(&self) -> Result<AvailableSupply, RpcError> {
        let val = self.client.execute("available_supply", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get the account owning a block.
    pub async fn block_account(&self, hash: &str) -> Result<AccountResult, RpcError> {
        let val = self
            .client
            .execute("block_account", serde_json::json!({ "hash": hash }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Request confirmation for a block. (Restricted)
    pub async fn block_confirm(&self, hash: &str) -> Result<Started, RpcError> {
        let val = self
            .client
            .execute("block_confirm", serde_json::json!({ "hash": hash }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get ledger block counts.
    pub async fn block_count(&self, include_cemented: Option<bool>) -> Result<BlockCount, RpcError> {
        let val = self
            .client
            .execute(
                "block_count",
                serde_json::json!({ "include_cemented": include_cemented }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Create a block from the given parameters. (Restricted)
    pub async fn block_create(&self, params: BlockCreateParams) -> Result<BlockCreate, RpcError> {
        let val = self
            .client
            .execute("block_create", serde_json::to_value(params)?)
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Compute the hash of a block.
    pub async fn block_hash(
        &self,
        block: Value,
        json_block: Option<bool>,
    ) -> Result<BlockHash, RpcError> {
        let val = self
            .client
            .execute(
                "block_hash",
                serde_json::json!({ "block": block, "json_block": json_block }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get details for a single block.
    pub async fn block_info(
        &self,
        hash: &str,
        options: Option<BlockInfoOptions>,
    ) -> Result<BlockInfo, RpcError> {
        let mut params = serde_json::json!({ "hash": hash });
        merge_options(&mut params, options)?;
        let val = self.client.execute("block_info", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get contents for multiple blocks.
    pub async fn blocks(
        &self,
        hashes: &[&str],
        options: Option<BlocksOptions>,
    ) -> Result<Blocks, RpcError> {
        let mut params = serde_json::json!({ "hashes": hashes });
        merge_options(&mut params, options)?;
        let val = self.client.execute("blocks", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get details for multiple blocks.
    pub async fn blocks_info(
        &self,
        hashes: &[&str],
        options: Option<BlocksInfoOptions>,
    ) -> Result<BlocksInfo, RpcError> {
        let mut params = serde_json::json!({ "hashes": hashes });
        merge_options(&mut params, options)?;
        let val = self.client.execute("blocks_info", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Walk back an account chain from a block.
    pub async fn chain(
        &self,
        block: &str,
        count: u64,
        options: Option<ChainOptions>,
    ) -> Result<Chain, RpcError> {
        let mut params = serde_json::json!({
            "block": block,
            "count": count.to_string(),
        });
        merge_options(&mut params, options)?;
        let val = self.client.execute("chain", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Walk forward an account chain from a block.
    pub async fn successors(
        &self,
        block: &str,
        count: u64,
        options: Option<ChainOptions>,
    ) -> Result<Chain, RpcError> {
        let mut params = serde_json::json!({
            "block": block,
            "count": count.to_string(),
        });
        merge_options(&mut params, options)?;
        let val = self.client.execute("successors", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Publish a block to the network.
    pub async fn process(
        &self,
        block: Value,
        options: Option<ProcessOptions>,
    ) -> Result<Process, RpcError> {
        let mut params = serde_json::json!({ "block": block });
        merge_options(&mut params, options)?;
        let val = self.client.execute("process", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Rebroadcast a block (and optionally its chain) to the network.
    pub async fn republish(
        &self,
        hash: &str,
        options: Option<RepublishOptions>,
    ) -> Result<Republish, RpcError> {
        let mut params = serde_json::json!({ "hash": hash });
        merge_options(&mut params, options)?;
        let val = self.client.execute("republish", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Sign a block with a wallet account or an explicit private key. (Restricted)
    pub async fn sign(&self, params: SignParams) -> Result<Sign, RpcError> {
        let val = self
            .client
            .execute("sign", serde_json::to_value(params)?)
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    // =========================================================================
    // Bootstrap
    // =========================================================================

    /// Initialize bootstrap to a specific peer. (Restricted)
    pub async fn bootstrap(
        &self,
        address: &str,
        port: u16,
        bypass_frontier_confirmation: Option<bool>,
        id: Option<&str>,
    ) -> Result<Success, RpcError> {
        let val = self
            .client
            .execute(
                "bootstrap",
                serde_json::json!({
                    "address": address,
                    "port": port.to_string(),
                    "bypass_frontier_confirmation": bypass_frontier_confirmation,
                    "id": id,
                }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Initialize multi-connection bootstrap to random peers. (Restricted)
    pub async fn bootstrap_any(
        &self,
        force: Option<bool>,
        id: Option<&str>,
        account: Option<&str>,
    ) -> Result<Success, RpcError> {
        let val = self
            .client
            .execute(
                "bootstrap_any",
                serde_json::json!({ "force": force, "id": id, "account": account }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Initialize lazy bootstrap from a block hash. (Restricted)
    pub async fn bootstrap_lazy(
        &self,
        hash: &str,
        force: Option<bool>,
        id: Option<&str>,
    ) -> Result<BootstrapLazy, RpcError> {
        let val = self
            .client
            .execute(
                "bootstrap_lazy",
                serde_json::json!({ "hash": hash, "force": force, "id": id }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get status of current bootstrap attempts. (Restricted, debug-only)
    pub async fn bootstrap_status(&self) -> Result<BootstrapStatus, RpcError> {
        let val = self.client.execute("bootstrap_status", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    // =========================================================================
    // Confirmation
    // =========================================================================

    /// Get hashes of active elections.
    pub async fn confirmation_active(
        &self,
        announcements: Option<u64>,
    ) -> Result<ConfirmationActive, RpcError> {
        let val = self
            .client
            .execute(
                "confirmation_active",
                serde_json::json!({ "announcements": announcements }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get the hash whose confirmation height is currently being updated.
    pub async fn confirmation_height_currently_processing(
        &self,
    ) -> Result<BlockHash, RpcError> {
        let val = self
            .client
            .execute("confirmation_height_currently_processing", Value::Null)
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get recently confirmed elections, optionally filtered to one hash.
    pub async fn confirmation_history(
        &self,
        hash: Option<&str>,
    ) -> Result<ConfirmationHistory, RpcError> {
        let val = self
            .client
            .execute("confirmation_history", serde_json::json!({ "hash": hash }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get details of an active election by root.
    pub async fn confirmation_info(
        &self,
        root: &str,
        options: Option<ConfirmationInfoOptions>,
    ) -> Result<ConfirmationInfo, RpcError> {
        let mut params = serde_json::json!({ "root": root });
        merge_options(&mut params, options)?;
        let val = self.client.execute("confirmation_info", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get quorum parameters and online stake.
    pub async fn confirmation_quorum(
        &self,
        peer_details: Option<bool>,
    ) -> Result<ConfirmationQuorum, RpcError> {
        let val = self
            .client
            .execute(
                "confirmation_quorum",
                serde_json::json!({ "peer_details": peer_details }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    // =========================================================================
    // Representatives / Delegators
    // =========================================================================

    /// Get accounts delegating to a representative.
    pub async fn delegators(
        &self,
        account: &str,
        threshold: Option<&str>,
        count: Option<u64>,
        start: Option<&str>,
    ) -> Result<Delegators, RpcError> {
        let mut params = serde_json::json!({ "account": account });
        if let Some(threshold) = threshold {
            params["threshold"] = Value::String(threshold.to_string());
        }
        if let Some(count) = count {
            params["count"] = Value::String(count.to_string());
        }
        if let Some(start) = start {
            params["start"] = Value::String(start.to_string());
        }
        let val = self.client.execute("delegators", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get the number of accounts delegating to a representative.
    pub async fn delegators_count(&self, account: &str) -> Result<Count, RpcError> {
        let val = self
            .client
            .execute("delegators_count", serde_json::json!({ "account": account }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get known representatives and their voting weight.
    pub async fn representatives(
        &self,
        count: Option<u64>,
        sorting: Option<bool>,
    ) -> Result<Representatives, RpcError> {
        let mut params = serde_json::json!({});
        if let Some(count) = count {
            params["count"] = Value::String(count.to_string());
        }
        if let Some(sorting) = sorting {
            params["sorting"] = Value::Bool(sorting);
        }
        let val = self.client.execute("representatives", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get representatives that have voted recently.
    pub async fn representatives_online(
        &self,
        weight: Option<bool>,
        accounts: Option<&[&str]>,
    ) -> Result<RepresentativesOnline, RpcError> {
        let mut params = serde_json::json!({});
        if let Some(weight) = weight {
            params["weight"] = Value::Bool(weight);
        }
        if let Some(accounts) = accounts {
            params["accounts"] = serde_json::json!(accounts);
        }
        let val = self.client.execute("representatives_online", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    // =========================================================================
    // Keys
    // =========================================================================

    /// Derive a deterministic keypair from a seed and index.
    pub async fn deterministic_key(&self, seed: &str, index: u64) -> Result<KeyPair, RpcError> {
        let val = self
            .client
            .execute(
                "deterministic_key",
                serde_json::json!({ "seed": seed, "index": index.to_string() }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Generate a random keypair.
    pub async fn key_create(&self) -> Result<KeyPair, RpcError> {
        let val = self.client.execute("key_create", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Derive the public key and account for a private key.
    pub async fn key_expand(&self, key: &str) -> Result<KeyPair, RpcError> {
        let val = self
            .client
            .execute("key_expand", serde_json::json!({ "key": key }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    // =========================================================================
    // Ledger Queries
    // =========================================================================

    /// Trigger epoch block upgrades. (Restricted)
    pub async fn epoch_upgrade(
        &self,
        epoch: u64,
        key: &str,
        count: Option<u64>,
        threads: Option<u64>,
    ) -> Result<Started, RpcError> {
        let mut params = serde_json::json!({
            "epoch": epoch.to_string(),
            "key": key,
        });
        if let Some(count) = count {
            params["count"] = Value::String(count.to_string());
        }
        if let Some(threads) = threads {
            params["threads"] = Value::String(threads.to_string());
        }
        let val = self.client.execute("epoch_upgrade", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get the total number of accounts in the ledger.
    pub async fn frontier_count(&self) -> Result<Count, RpcError> {
        let val = self.client.execute("frontier_count", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// List account frontiers starting at an account.
    pub async fn frontiers(&self, account: &str, count: u64) -> Result<Frontiers, RpcError> {
        let val = self
            .client
            .execute(
                "frontiers",
                serde_json::json!({ "account": account, "count": count.to_string() }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get ledger information for a range of accounts. (Restricted)
    pub async fn ledger(
        &self,
        account: &str,
        count: u64,
        options: Option<LedgerOptions>,
    ) -> Result<Ledger, RpcError> {
        let mut params = serde_json::json!({
            "account": account,
            "count": count.to_string(),
        });
        merge_options(&mut params, options)?;
        let val = self.client.execute("ledger", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get receivable blocks for an account.
    pub async fn receivable(
        &self,
        account: &str,
        count: u64,
        options: Option<ReceivableOptions>,
    ) -> Result<Receivable, RpcError> {
        let mut params = serde_json::json!({
            "account": account,
            "count": count.to_string(),
        });
        merge_options(&mut params, options)?;
        let val = self.client.execute("receivable", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get pending blocks for an account (deprecated alias of
    /// [`receivable`](Self::receivable)).
    pub async fn pending(
        &self,
        account: &str,
        count: u64,
        options: Option<ReceivableOptions>,
    ) -> Result<Receivable, RpcError> {
        let mut params = serde_json::json!({
            "account": account,
            "count": count.to_string(),
        });
        merge_options(&mut params, options)?;
        let val = self.client.execute("pending", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Check whether a block is still receivable.
    pub async fn receivable_exists(
        &self,
        hash: &str,
        options: Option<ReceivableExistsOptions>,
    ) -> Result<Exists, RpcError> {
        let mut params = serde_json::json!({ "hash": hash });
        merge_options(&mut params, options)?;
        let val = self.client.execute("receivable_exists", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Check whether a block is still pending (deprecated alias of
    /// [`receivable_exists`](Self::receivable_exists)).
    pub async fn pending_exists(
        &self,
        hash: &str,
        options: Option<ReceivableExistsOptions>,
    ) -> Result<Exists, RpcError> {
        let mut params = serde_json::json!({ "hash": hash });
        merge_options(&mut params, options)?;
        let val = self.client.execute("pending_exists", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// List accounts with only receivable blocks (never opened).
    pub async fn unopened(
        &self,
        account: Option<&str>,
        count: Option<u64>,
        threshold: Option<&str>,
    ) -> Result<Unopened, RpcError> {
        let mut params = serde_json::json!({});
        if let Some(account) = account {
            params["account"] = Value::String(account.to_string());
        }
        if let Some(count) = count {
            params["count"] = Value::String(count.to_string());
        }
        if let Some(threshold) = threshold {
            params["threshold"] = Value::String(threshold.to_string());
        }
        let val = self.client.execute("unopened", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Validate an account address checksum.
    pub async fn validate_account_number(&self, account: &str) -> Result<ValidAccount, RpcError> {
        let val = self
            .client
            .execute(
                "validate_account_number",
                serde_json::json!({ "account": account }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    // =========================================================================
    // Node / Network
    // =========================================================================

    /// Send a keepalive packet to a peer. (Restricted)
    pub async fn keepalive(&self, address: &str, port: u16) -> Result<Started, RpcError> {
        let val = self
            .client
            .execute(
                "keepalive",
                serde_json::json!({ "address": address, "port": port.to_string() }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get the node's ID keypair. (Restricted, deprecated)
    pub async fn node_id(&self) -> Result<NodeId, RpcError> {
        let val = self.client.execute("node_id", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Delete the node's ID. (Restricted, deprecated)
    pub async fn node_id_delete(&self) -> Result<NodeIdDelete, RpcError> {
        let val = self.client.execute("node_id_delete", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// List connected peers.
    pub async fn peers(&self, peer_details: Option<bool>) -> Result<Peers, RpcError> {
        let val = self
            .client
            .execute("peers", serde_json::json!({ "peer_details": peer_details }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Schedule backlog population. (Restricted)
    pub async fn populate_backlog(&self) -> Result<Success, RpcError> {
        let val = self.client.execute("populate_backlog", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get local (and optionally per-peer) telemetry.
    pub async fn telemetry(&self, options: Option<TelemetryOptions>) -> Result<Telemetry, RpcError> {
        let mut params = serde_json::json!({});
        merge_options(&mut params, options)?;
        let val = self.client.execute("telemetry", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get node version information.
    pub async fn version(&self) -> Result<Version, RpcError> {
        let val = self.client.execute("version", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get node uptime.
    pub async fn uptime(&self) -> Result<Uptime, RpcError> {
        let val = self.client.execute("uptime", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Stop the node. (Restricted)
    pub async fn stop(&self) -> Result<Success, RpcError> {
        let val = self.client.execute("stop", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    // =========================================================================
    // Stats
    // =========================================================================

    /// Get counter statistics.
    pub async fn stats_counters(&self) -> Result<Stats, RpcError> {
        let val = self
            .client
            .execute("stats", serde_json::json!({ "type": "counters" }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get sample statistics.
    pub async fn stats_samples(&self) -> Result<Stats, RpcError> {
        let val = self
            .client
            .execute("stats", serde_json::json!({ "type": "samples" }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get node object statistics.
    pub async fn stats_objects(&self) -> Result<Stats, RpcError> {
        let val = self
            .client
            .execute("stats", serde_json::json!({ "type": "objects" }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get database statistics.
    pub async fn stats_database(&self) -> Result<Stats, RpcError> {
        let val = self
            .client
            .execute("stats", serde_json::json!({ "type": "database" }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Reset statistics counters. (Restricted)
    pub async fn stats_clear(&self) -> Result<Success, RpcError> {
        let val = self.client.execute("stats_clear", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    // =========================================================================
    // Unchecked Blocks
    // =========================================================================

    /// List unchecked (synchronizing) blocks.
    pub async fn unchecked(
        &self,
        count: u64,
        options: Option<UncheckedOptions>,
    ) -> Result<Unchecked, RpcError> {
        let mut params = serde_json::json!({ "count": count.to_string() });
        merge_options(&mut params, options)?;
        let val = self.client.execute("unchecked", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Clear unchecked blocks. (Restricted)
    pub async fn unchecked_clear(&self) -> Result<Success, RpcError> {
        let val = self.client.execute("unchecked_clear", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Get an unchecked block by hash.
    pub async fn unchecked_get(
        &self,
        hash: &str,
        json_block: Option<bool>,
    ) -> Result<UncheckedGet, RpcError> {
        let val = self
            .client
            .execute(
                "unchecked_get",
                serde_json::json!({ "hash": hash, "json_block": json_block }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// List unchecked blocks starting at a dependency key.
    pub async fn unchecked_keys(
        &self,
        key: &str,
        count: u64,
        options: Option<UncheckedOptions>,
    ) -> Result<UncheckedKeys, RpcError> {
        let mut params = serde_json::json!({
            "key": key,
            "count": count.to_string(),
        });
        merge_options(&mut params, options)?;
        let val = self.client.execute("unchecked_keys", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    // =========================================================================
    // Work
    // =========================================================================

    /// Cancel work generation for a root. (Restricted)
    pub async fn work_cancel(&self, hash: &str) -> Result<Success, RpcError> {
        let val = self
            .client
            .execute("work_cancel", serde_json::json!({ "hash": hash }))
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Generate proof-of-work for a root. (Restricted)
    pub async fn work_generate(
        &self,
        hash: &str,
        options: Option<WorkGenerateOptions>,
    ) -> Result<WorkGenerate, RpcError> {
        let mut params = serde_json::json!({ "hash": hash });
        merge_options(&mut params, options)?;
        let val = self.client.execute("work_generate", params).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Add a work peer. (Restricted)
    pub async fn work_peer_add(&self, address: &str, port: u16) -> Result<Success, RpcError> {
        let val = self
            .client
            .execute(
                "work_peer_add",
                serde_json::json!({ "address": address, "port": port.to_string() }),
            )
            .await?;
        Ok(serde_json::from_value(val)?)
    }

    /// List work peers. (Restricted)
    pub async fn work_peers(&self) -> Result<WorkPeers, RpcError> {
        let val = self.client.execute("work_peers", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Clear work peers. (Restricted)
    pub async fn work_peers_clear(&self) -> Result<Success, RpcError> {
        let val = self.client.execute("work_peers_clear", Value::Null).await?;
        Ok(serde_json::from_value(val)?)
    }

    /// Check whether work is valid for a root.
    pub async fn work_validate(
        &self,
        hash: &str,
        work: &str,
        options: Option<WorkValidateOptions>,
    ) -> Result<WorkValidate, RpcError> {
        let mut params = serde_json::json!({ "hash": hash, "work": work });
        merge_options(&mut params, options)?;
        let val = self.client.execute("work_validate", params).await?;
        Ok(serde_json::from_value(val)?)
    }
}
