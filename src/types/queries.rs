//! Types that appear in various queries of the node.

use super::basic::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Summary of the current state of consensus.
pub struct ConsensusInfo {
    pub last_finalized_block_height:    BlockHeight,
    pub block_arrive_latency_e_m_s_d:   f64,
    pub block_receive_latency_e_m_s_d:  f64,
    pub last_finalized_block:           BlockHash,
    pub block_receive_period_e_m_s_d:   Option<f64>,
    pub block_arrive_period_e_m_s_d:    Option<f64>,
    pub blocks_received_count:          u64,
    pub transactions_per_block_e_m_s_d: f64,
    /// Exponential moving average of the time between finalizations, in
    /// seconds.
    pub finalization_period_e_m_a:      Option<f64>,
    pub best_block_height:              BlockHeight,
    pub last_finalized_time:            Option<chrono::DateTime<chrono::Utc>>,
    pub finalization_count:             u64,
    #[serde(with = "crate::internal::duration_millis")]
    pub epoch_duration:                 chrono::Duration,
    pub blocks_verified_count:          u64,
    pub slot_duration:                  SlotDuration,
    pub genesis_time:                   chrono::DateTime<chrono::Utc>,
    pub finalization_period_e_m_s_d:    Option<f64>,
    pub transactions_per_block_e_m_a:   f64,
    pub block_arrive_latency_e_m_a:     f64,
    pub block_receive_latency_e_m_a:    f64,
    pub block_arrive_period_e_m_a:      Option<f64>,
    pub block_receive_period_e_m_a:     Option<f64>,
    /// Time the last block arrived. [`None`] before the first block after
    /// genesis.
    pub block_last_arrived_time:        Option<chrono::DateTime<chrono::Utc>>,
    pub best_block:                     BlockHash,
    pub genesis_block:                  BlockHash,
    /// Time the last block was received. [`None`] before the first block
    /// after genesis.
    pub block_last_received_time:       Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Human readable description of an identity provider or anonymity revoker.
pub struct Description {
    pub name:        String,
    pub url:         String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Public information about an identity provider.
pub struct IpInfo {
    pub ip_identity:       IpIdentity,
    pub ip_description:    Description,
    /// Hex encoded key used to verify identity objects.
    pub ip_verify_key:     String,
    /// Hex encoded key used to verify credential deployments.
    pub ip_cdi_verify_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Public information about an anonymity revoker.
pub struct ArInfo {
    pub ar_identity:    ArIdentity,
    pub ar_description: Description,
    /// Hex encoded public key of the anonymity revoker.
    pub ar_public_key:  String,
}
