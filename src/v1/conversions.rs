//! Conversions from the messages returned by the node into the types of
//! [`crate::types`].
use super::generated;
use crate::{
    endpoints::{QueryError, QueryResult, RPCError},
    internal::Unbox,
    types::{
        network::{
            BakingCommitteeStatus, BannedPeer, CatchupStatus, NodeInfo, Peer, PeerAddress,
            PeerInfo, PeerStats, PeersInfo,
        },
        queries::{ArInfo, IpInfo},
        ArIdentity, BakerId, IpIdentity,
    },
};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};

/// Parse the JSON payload of a response. The node returns `null` for queries
/// about blocks or accounts it does not know about.
pub(crate) fn parse_json<A: DeserializeOwned>(json: &str) -> QueryResult<A> {
    let value: Option<A> = serde_json::from_str(json)?;
    value.ok_or(QueryError::NotFound)
}

fn parse_error(msg: impl std::fmt::Display) -> RPCError {
    RPCError::ParseError(anyhow::anyhow!("{msg}"))
}

impl From<generated::node_info_response::IsInBakingCommittee> for BakingCommitteeStatus {
    fn from(status: generated::node_info_response::IsInBakingCommittee) -> Self {
        use generated::node_info_response::IsInBakingCommittee as Status;
        match status {
            Status::NotInCommittee => Self::NotInCommittee,
            Status::AddedButNotActiveInCommittee => Self::AddedButNotActiveInCommittee,
            Status::AddedButWrongKeys => Self::AddedButWrongKeys,
            Status::ActiveInCommittee => Self::ActiveInCommittee,
        }
    }
}

impl TryFrom<generated::NodeInfoResponse> for NodeInfo {
    type Error = RPCError;

    fn try_from(value: generated::NodeInfoResponse) -> Result<Self, Self::Error> {
        let baking_committee = generated::node_info_response::IsInBakingCommittee::try_from(
            value.consensus_baker_committee,
        )
        .map_err(|_| {
            parse_error(format_args!(
                "Unknown baking committee status {}.",
                value.consensus_baker_committee
            ))
        })?
        .into();
        let local_time = i64::try_from(value.current_localtime)
            .ok()
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| parse_error("Local time of the node out of range."))?;
        Ok(Self {
            node_id: value.node_id.unbox(),
            local_time,
            peer_type: value.peer_type,
            baker_running: value.consensus_baker_running,
            consensus_running: value.consensus_running,
            consensus_type: value.consensus_type,
            baking_committee,
            in_finalizer_committee: value.consensus_finalizer_committee,
            baker_id: value.consensus_baker_id.unbox().map(BakerId::from),
        })
    }
}

/// Assemble the node's own network statistics from the individual responses.
pub(crate) fn peer_info(
    version: generated::StringResponse,
    uptime: generated::NumberResponse,
    total_sent: generated::NumberResponse,
    total_received: generated::NumberResponse,
) -> Result<PeerInfo, RPCError> {
    let version = semver::Version::parse(&version.value)?;
    let uptime = i64::try_from(uptime.value)
        .ok()
        .and_then(chrono::Duration::try_milliseconds)
        .ok_or_else(|| parse_error("Uptime of the node out of range."))?;
    Ok(PeerInfo {
        version,
        uptime,
        total_sent: total_sent.value,
        total_received: total_received.value,
    })
}

fn peer_address(element: &mut generated::PeerElement) -> Result<PeerAddress, RPCError> {
    let port = element
        .port
        .unbox()
        .map(|p| u16::try_from(p).map_err(|_| parse_error(format_args!("Invalid port {p}."))))
        .transpose()?;
    Ok(PeerAddress::new(element.ip.take().unbox(), port))
}

impl TryFrom<generated::PeerElement> for Peer {
    type Error = RPCError;

    fn try_from(mut value: generated::PeerElement) -> Result<Self, Self::Error> {
        use generated::peer_element::CatchupStatus as Status;
        let status = match Status::try_from(value.catchup_status) {
            Ok(Status::Uptodate) => CatchupStatus::UpToDate,
            Ok(Status::Pending) => CatchupStatus::Pending,
            Ok(Status::Catchingup) => CatchupStatus::CatchingUp,
            Err(_) => {
                return Err(parse_error(format_args!(
                    "Unknown catchup status {}.",
                    value.catchup_status
                )))
            }
        };
        let address = peer_address(&mut value)?;
        Ok(Self {
            node_id: value.node_id.unbox(),
            address,
            status,
            stats: None,
        })
    }
}

impl TryFrom<generated::PeerElement> for BannedPeer {
    type Error = RPCError;

    fn try_from(mut value: generated::PeerElement) -> Result<Self, Self::Error> {
        let address = peer_address(&mut value)?;
        Ok(Self {
            node_id: value.node_id.unbox(),
            address,
        })
    }
}

impl From<generated::peer_stats_response::PeerStats> for PeerStats {
    fn from(value: generated::peer_stats_response::PeerStats) -> Self {
        Self {
            packets_sent:     value.packets_sent,
            packets_received: value.packets_received,
            latency:          value.latency,
        }
    }
}

/// Attach to each peer the statistics with the same node id. Peers without
/// an id, or whose id has no statistics, get no statistics. Peers that share
/// a node id get the same statistics. Statistics for node ids that are not in
/// the peer list are dropped.
pub fn join_peer_stats(
    peers: Vec<Peer>,
    stats: impl IntoIterator<Item = (String, PeerStats)>,
) -> Vec<Peer> {
    let by_id: HashMap<String, PeerStats> = stats.into_iter().collect();
    peers
        .into_iter()
        .map(|mut peer| {
            peer.stats = peer.node_id.as_ref().and_then(|id| by_id.get(id).copied());
            peer
        })
        .collect()
}

/// Assemble the peers of the node from the peer list, the per peer statistics
/// and the list of banned peers.
pub(crate) fn peers_info(
    list: generated::PeerListResponse,
    stats: generated::PeerStatsResponse,
    banned: generated::PeerListResponse,
) -> Result<PeersInfo, RPCError> {
    let peers = list
        .peers
        .into_iter()
        .map(Peer::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let banned = banned
        .peers
        .into_iter()
        .map(BannedPeer::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let peers = join_peer_stats(
        peers,
        stats
            .peerstats
            .into_iter()
            .map(|s| (s.node_id.clone(), PeerStats::from(s))),
    );
    Ok(PeersInfo {
        peer_type: list.peer_type,
        peers,
        banned,
        avg_bps_in: stats.avg_bps_in,
        avg_bps_out: stats.avg_bps_out,
    })
}

/// Parse the list of identity providers, keyed by their identity.
pub(crate) fn identity_providers(json: &str) -> QueryResult<BTreeMap<IpIdentity, IpInfo>> {
    let ips: Vec<IpInfo> = parse_json(json)?;
    Ok(ips.into_iter().map(|ip| (ip.ip_identity, ip)).collect())
}

/// Parse the list of anonymity revokers, keyed by their identity.
pub(crate) fn anonymity_revokers(json: &str) -> QueryResult<BTreeMap<ArIdentity, ArInfo>> {
    let ars: Vec<ArInfo> = parse_json(json)?;
    Ok(ars.into_iter().map(|ar| (ar.ar_identity, ar)).collect())
}

/// The request that identifies a peer by its node id, as used for banning and
/// unbanning.
pub(crate) fn peer_element(node_id: &str) -> generated::PeerElement {
    generated::PeerElement {
        node_id:        Some(node_id.to_string()),
        port:           None,
        ip:             None,
        catchup_status: 0,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::{queries::ConsensusInfo, AccountInfo, Amount, BirkParameters, CredentialIndex};

    const CONSENSUS_STATUS: &str = r#"{
        "bestBlock": "0ab3ba2c6cb8ce1b0b2fca5e0bc0ea6e1d4f8ce22d4a77a58fa8b02a34d3f8a8",
        "genesisBlock": "4221332d34e1694168c2a0c0b3fd0f273809612cb13d000d5c2e00e85f50f796",
        "genesisTime": "2021-06-09T06:00:00Z",
        "slotDuration": 250,
        "epochDuration": 3600000,
        "lastFinalizedBlock": "c1c9b3c7c3a7a09b0d6d4a4d3ad1e1a3c7bd3ea6a4b6a1b54e2c87bb4fd8c3b1",
        "bestBlockHeight": 1234567,
        "lastFinalizedBlockHeight": 1234565,
        "blocksReceivedCount": 105,
        "blockLastReceivedTime": null,
        "blockReceiveLatencyEMA": 0.3,
        "blockReceiveLatencyEMSD": 0.1,
        "blockReceivePeriodEMA": 11.2,
        "blockReceivePeriodEMSD": 10.8,
        "blocksVerifiedCount": 104,
        "blockLastArrivedTime": "2021-09-01T12:00:00.123Z",
        "blockArriveLatencyEMA": 0.4,
        "blockArriveLatencyEMSD": 0.2,
        "blockArrivePeriodEMA": null,
        "blockArrivePeriodEMSD": null,
        "transactionsPerBlockEMA": 0.02,
        "transactionsPerBlockEMSD": 0.14,
        "finalizationCount": 50,
        "lastFinalizedTime": "2021-09-01T11:59:55Z",
        "finalizationPeriodEMA": 12.1,
        "finalizationPeriodEMSD": 3.2
    }"#;

    const ACCOUNT_INFO: &str = r#"{
        "accountNonce": 4,
        "accountAmount": "123456789012345678901234567890",
        "accountReleaseSchedule": {
            "total": "2000000",
            "schedule": [
                {
                    "timestamp": 1640995200000,
                    "amount": "2000000",
                    "transactions": ["9a7e5e1f4b3c"]
                }
            ]
        },
        "accountCredentials": {
            "0": {
                "v": 0,
                "value": {
                    "type": "initial",
                    "contents": {
                        "ipIdentity": 0,
                        "regId": "b0aa65f420a9f3",
                        "policy": {
                            "createdAt": "202309",
                            "validTo": "202409",
                            "revealedAttributes": {}
                        }
                    }
                }
            }
        },
        "accountBaker": {
            "bakerId": 7,
            "stakedAmount": "15000000000",
            "restakeEarnings": true,
            "pendingChange": {"change": "RemoveBaker", "epoch": 100}
        },
        "accountInstances": []
    }"#;

    fn peer(node_id: &str) -> Peer {
        Peer {
            node_id: Some(node_id.into()),
            address: PeerAddress::Unknown,
            status:  CatchupStatus::UpToDate,
            stats:   None,
        }
    }

    #[test]
    fn test_consensus_status() {
        let info: ConsensusInfo = serde_json::from_str(CONSENSUS_STATUS).expect("Valid status");
        assert_eq!(info.block_last_received_time, None);
        assert_eq!(
            info.block_last_arrived_time.map(|t| t.timestamp_millis()),
            Some(1_630_497_600_123)
        );
        assert_eq!(info.epoch_duration, chrono::Duration::hours(1));
        assert_eq!(info.slot_duration.millis, 250);
        assert_eq!(info.block_arrive_period_e_m_a, None);
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let bad = CONSENSUS_STATUS.replace("2021-06-09T06:00:00Z", "June 9th");
        let res: QueryResult<ConsensusInfo> = parse_json(&bad);
        assert!(matches!(res, Err(QueryError::RPCError(RPCError::ParseError(_)))));
        let res: QueryResult<ConsensusInfo> = parse_json("{\"bestBlock\":");
        assert!(matches!(res, Err(QueryError::RPCError(RPCError::ParseError(_)))));
    }

    #[test]
    fn test_null_is_not_found() {
        let res: QueryResult<AccountInfo> = parse_json("null");
        assert!(matches!(res, Err(QueryError::NotFound)));
        let res: QueryResult<BirkParameters> = parse_json(" null ");
        assert!(res.is_err_and(|e| e.is_not_found()));
    }

    #[test]
    fn test_account_info() {
        let info: AccountInfo = parse_json(ACCOUNT_INFO).expect("Valid account info");
        let expected: Amount = "123456789012345678901234567890"
            .parse()
            .expect("Valid amount");
        assert_eq!(info.account_amount, expected);
        assert_eq!(
            info.account_release_schedule.schedule[0]
                .timestamp
                .timestamp_millis(),
            1_640_995_200_000
        );
        let credential = &info.account_credentials[&CredentialIndex::from(0u8)].value;
        assert_eq!(credential.contents.policy.created_at.month, 9);
        assert_eq!(credential.contents.policy.valid_to.year, 2024);
        let baker = info.account_baker.expect("Account is a baker");
        assert_eq!(baker.baker_id, BakerId::from(7u64));
        assert_eq!(baker.pending_change.map(|c| c.epoch().epoch), Some(100));
    }

    #[test]
    fn test_amount_must_be_digit_string() {
        let numeric = ACCOUNT_INFO.replace(
            "\"123456789012345678901234567890\"",
            "123456789012345678901234567890",
        );
        assert!(parse_json::<AccountInfo>(&numeric).is_err());
        let signed = ACCOUNT_INFO.replace("\"15000000000\"", "\"-15000000000\"");
        assert!(parse_json::<AccountInfo>(&signed).is_err());
    }

    #[test]
    fn test_join_peer_stats() {
        let stats = PeerStats {
            packets_sent:     10,
            packets_received: 12,
            latency:          35,
        };
        let joined = join_peer_stats(vec![peer("abc"), peer("xyz")], vec![(
            "abc".to_string(),
            stats,
        )]);
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].stats, Some(stats));
        assert_eq!(joined[1].stats, None);
    }

    #[test]
    fn test_join_peer_stats_shared_id() {
        let stats = PeerStats {
            packets_sent:     1,
            packets_received: 2,
            latency:          3,
        };
        let mut anonymous = peer("abc");
        anonymous.node_id = None;
        let joined = join_peer_stats(
            vec![peer("abc"), peer("abc"), anonymous],
            vec![("abc".to_string(), stats)],
        );
        assert_eq!(joined[0].stats, Some(stats));
        assert_eq!(joined[1].stats, Some(stats));
        assert_eq!(joined[2].stats, None);
    }

    #[test]
    fn test_peer_element_sets_only_node_id() {
        let element = peer_element("0000000000000abc");
        assert_eq!(element.node_id.as_deref(), Some("0000000000000abc"));
        assert_eq!(element.ip, None);
        assert_eq!(element.port, None);
        assert_eq!(element.catchup_status, 0);
    }

    #[test]
    fn test_node_info() {
        let response = generated::NodeInfoResponse {
            node_id: Some("0000000000000abc".into()),
            current_localtime: 1_700_000_000,
            peer_type: "Node".into(),
            consensus_baker_running: true,
            consensus_running: true,
            consensus_type: "Active".into(),
            consensus_baker_committee: 3,
            consensus_finalizer_committee: false,
            consensus_baker_id: Some(42),
            ..Default::default()
        };
        let info = NodeInfo::try_from(response).expect("Valid node info");
        assert_eq!(info.baking_committee, BakingCommitteeStatus::ActiveInCommittee);
        assert_eq!(info.baker_id, Some(BakerId::from(42u64)));
        assert_eq!(info.local_time.timestamp(), 1_700_000_000);

        let unknown = generated::NodeInfoResponse {
            consensus_baker_committee: 9,
            ..Default::default()
        };
        assert!(NodeInfo::try_from(unknown).is_err());
    }

    #[test]
    fn test_peers_info() {
        let list = generated::PeerListResponse {
            peer_type: "Node".into(),
            peers:     vec![
                generated::PeerElement {
                    node_id:        Some("abc".into()),
                    port:           Some(8888),
                    ip:             Some("10.0.0.1".into()),
                    catchup_status: 2,
                },
                generated::PeerElement {
                    node_id:        Some("xyz".into()),
                    port:           None,
                    ip:             None,
                    catchup_status: 1,
                },
            ],
        };
        let stats = generated::PeerStatsResponse {
            peerstats:   vec![generated::peer_stats_response::PeerStats {
                node_id:          "xyz".into(),
                packets_sent:     1,
                packets_received: 2,
                latency:          600,
            }],
            avg_bps_in:  100,
            avg_bps_out: 200,
        };
        let banned = generated::PeerListResponse {
            peer_type: "Node".into(),
            peers:     vec![generated::PeerElement {
                node_id:        None,
                port:           None,
                ip:             Some("*".into()),
                catchup_status: 0,
            }],
        };
        let info = peers_info(list, stats, banned).expect("Valid peers");
        assert_eq!(info.peers[0].status, CatchupStatus::CatchingUp);
        assert_eq!(info.peers[0].address.to_string(), "10.0.0.1:8888");
        assert_eq!(info.peers[0].stats, None);
        assert_eq!(info.peers[1].stats.map(|s| s.latency), Some(600));
        assert_eq!(info.banned[0].address, PeerAddress::Any);
        assert_eq!(info.avg_bps_out, 200);
    }

    #[test]
    fn test_peer_info() {
        let info = peer_info(
            generated::StringResponse {
                value: "1.0.1".into(),
            },
            generated::NumberResponse { value: 90_061_000 },
            generated::NumberResponse { value: 1 },
            generated::NumberResponse { value: 2 },
        )
        .expect("Valid peer info");
        assert_eq!(info.version, semver::Version::new(1, 0, 1));
        assert_eq!(info.uptime, chrono::Duration::milliseconds(90_061_000));
        let bad = peer_info(
            generated::StringResponse {
                value: "not a version".into(),
            },
            generated::NumberResponse { value: 0 },
            generated::NumberResponse { value: 0 },
            generated::NumberResponse { value: 0 },
        );
        assert!(matches!(bad, Err(RPCError::ParseError(_))));
    }

    #[test]
    fn test_identity_providers() {
        let json = r#"[{
            "ipIdentity": 1,
            "ipDescription": {"name": "Notabene", "url": "https://notabene.id", "description": "Identity verification"},
            "ipVerifyKey": "97f1d3a7",
            "ipCdiVerifyKey": "2e8c61c6"
        }]"#;
        let ips = identity_providers(json).expect("Valid identity providers");
        assert_eq!(ips[&IpIdentity(1)].ip_description.name, "Notabene");
        assert!(matches!(identity_providers("null"), Err(QueryError::NotFound)));
    }
}
