//! Health checks of a node, computed from the records fetched in a polling
//! cycle.
use crate::{
    constants::*,
    format::format_duration,
    types::{
        network::{CatchupStatus, NodeInfo, Peer, PeersInfo},
        queries::ConsensusInfo,
    },
};
use chrono::{DateTime, Utc};

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Success,
    Error { message: String },
}

impl CheckStatus {
    fn error(message: String) -> Self { CheckStatus::Error { message } }

    pub fn is_success(&self) -> bool { matches!(self, CheckStatus::Success) }
}

/// A named check. The status is [`None`] if the data needed for the check is
/// not available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub description: &'static str,
    pub status:      Option<CheckStatus>,
}

/// Checks grouped under a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckGroup {
    pub header: &'static str,
    pub checks: Vec<Check>,
}

impl CheckGroup {
    /// Messages of the failing checks.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().filter_map(|c| match &c.status {
            Some(CheckStatus::Error { message }) => Some(message.as_str()),
            _ => None,
        })
    }
}

/// Check that the node's clock agrees with `now`.
pub fn check_local_time(local_time: DateTime<Utc>, now: DateTime<Utc>) -> CheckStatus {
    let difference = now - local_time;
    if difference.num_milliseconds() > NODE_LOCAL_TIME_OFFSET_MILLIS {
        CheckStatus::error(format!(
            "Node local time is behind by {}",
            format_duration(difference, false)
        ))
    } else if difference.num_milliseconds() < -NODE_LOCAL_TIME_OFFSET_MILLIS {
        CheckStatus::error(format!(
            "Node local time is ahead by {}",
            format_duration(difference.abs(), false)
        ))
    } else {
        CheckStatus::Success
    }
}

/// Check that the node has enough peers.
pub fn check_number_of_peers(peers: &[Peer]) -> CheckStatus {
    if peers.len() < MINIMUM_NUMBER_OF_PEERS {
        CheckStatus::error(format!("Node only have {} peers.", peers.len()))
    } else {
        CheckStatus::Success
    }
}

/// Check that at most half of the peers have a high latency. Peers without
/// statistics count as having no latency.
pub fn check_latency_of_peers(peers: &[Peer]) -> CheckStatus {
    let high_latency = peers
        .iter()
        .filter(|p| p.stats.map_or(0, |s| s.latency) >= HIGH_PEER_LATENCY_MILLIS)
        .count();
    if high_latency > peers.len() / 2 {
        CheckStatus::error(format!(
            "{high_latency} out of {} peers have a high latency",
            peers.len()
        ))
    } else {
        CheckStatus::Success
    }
}

/// Check that at most half of the peers are not up to date.
pub fn check_catchup_status_of_peers(peers: &[Peer]) -> CheckStatus {
    let not_up_to_date = peers
        .iter()
        .filter(|p| p.status != CatchupStatus::UpToDate)
        .count();
    if not_up_to_date > peers.len() / 2 {
        CheckStatus::error(format!(
            "{not_up_to_date} out of {} peers are not up to date",
            peers.len()
        ))
    } else {
        CheckStatus::Success
    }
}

fn check_recent(
    time: DateTime<Utc>,
    now: DateTime<Utc>,
    maximum_millis: i64,
    what: &str,
) -> CheckStatus {
    let difference = now - time;
    if difference.num_milliseconds() > maximum_millis {
        CheckStatus::error(format!(
            "{what} is more than {} ago",
            format_duration(difference, false)
        ))
    } else {
        CheckStatus::Success
    }
}

/// Check that the last block was received recently. [`None`] if no block has
/// been received yet.
pub fn check_last_block_received(
    consensus: &ConsensusInfo,
    now: DateTime<Utc>,
) -> Option<CheckStatus> {
    consensus.block_last_received_time.map(|time| {
        check_recent(
            time,
            now,
            MAXIMUM_MILLIS_SINCE_LAST_BLOCK_RECEIVED,
            "Last received block",
        )
    })
}

/// Check that the last finalization happened recently. [`None`] if nothing
/// has been finalized yet.
pub fn check_last_finalization(
    consensus: &ConsensusInfo,
    now: DateTime<Utc>,
) -> Option<CheckStatus> {
    consensus.last_finalized_time.map(|time| {
        check_recent(
            time,
            now,
            MAXIMUM_MILLIS_SINCE_LAST_FINALIZATION,
            "Last finalized block",
        )
    })
}

/// All health checks of a node. Any of the inputs may be missing, e.g., if the
/// corresponding query failed, in which case the checks that depend on it have
/// no status.
pub fn health_checks(
    node: Option<&NodeInfo>,
    peers: Option<&PeersInfo>,
    consensus: Option<&ConsensusInfo>,
    now: DateTime<Utc>,
) -> Vec<CheckGroup> {
    let peer_list = peers.map(|p| p.peers.as_slice());
    vec![
        CheckGroup {
            header: "Peers",
            checks: vec![
                Check {
                    description: "Node local time line up",
                    status:      node.map(|n| check_local_time(n.local_time, now)),
                },
                Check {
                    description: "Number of peers",
                    status:      peer_list.map(check_number_of_peers),
                },
                Check {
                    description: "Latency of peers",
                    status:      peer_list.map(check_latency_of_peers),
                },
                Check {
                    description: "Up to date with most peers",
                    status:      peer_list.map(check_catchup_status_of_peers),
                },
            ],
        },
        CheckGroup {
            header: "Consensus",
            checks: vec![
                Check {
                    description: "Last received block is recent",
                    status:      consensus.and_then(|c| check_last_block_received(c, now)),
                },
                Check {
                    description: "Last finalization is recent",
                    status:      consensus.and_then(|c| check_last_finalization(c, now)),
                },
            ],
        },
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::network::{PeerAddress, PeerStats};

    fn peer(latency: Option<u64>, status: CatchupStatus) -> Peer {
        Peer {
            node_id: Some("0000000000000001".into()),
            address: PeerAddress::Unknown,
            status,
            stats: latency.map(|latency| PeerStats {
                packets_sent: 1,
                packets_received: 1,
                latency,
            }),
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("Valid time")
    }

    #[test]
    fn test_local_time() {
        assert!(check_local_time(now(), now()).is_success());
        let behind = now() - chrono::Duration::seconds(3);
        assert_eq!(
            check_local_time(behind, now()),
            CheckStatus::error("Node local time is behind by 3 seconds".into())
        );
        let ahead = now() + chrono::Duration::seconds(2);
        assert_eq!(
            check_local_time(ahead, now()),
            CheckStatus::error("Node local time is ahead by 2 seconds".into())
        );
        let slightly_ahead = now() + chrono::Duration::milliseconds(900);
        assert!(check_local_time(slightly_ahead, now()).is_success());
    }

    #[test]
    fn test_peer_checks() {
        let few = vec![peer(Some(10), CatchupStatus::UpToDate); 4];
        assert_eq!(
            check_number_of_peers(&few),
            CheckStatus::error("Node only have 4 peers.".into())
        );
        let enough = vec![peer(Some(10), CatchupStatus::UpToDate); 5];
        assert!(check_number_of_peers(&enough).is_success());

        let mut mixed = vec![peer(Some(600), CatchupStatus::Pending); 2];
        mixed.push(peer(None, CatchupStatus::UpToDate));
        mixed.push(peer(Some(499), CatchupStatus::UpToDate));
        // 2 out of 4 is not more than half.
        assert!(check_latency_of_peers(&mixed).is_success());
        assert!(check_catchup_status_of_peers(&mixed).is_success());
        mixed.push(peer(Some(500), CatchupStatus::CatchingUp));
        assert_eq!(
            check_latency_of_peers(&mixed),
            CheckStatus::error("3 out of 5 peers have a high latency".into())
        );
        assert_eq!(
            check_catchup_status_of_peers(&mixed),
            CheckStatus::error("3 out of 5 peers are not up to date".into())
        );
    }

    #[test]
    fn test_missing_inputs() {
        let groups = health_checks(None, None, None, now());
        assert_eq!(groups.len(), 2);
        assert!(groups
            .iter()
            .flat_map(|g| g.checks.iter())
            .all(|c| c.status.is_none()));
        assert_eq!(groups[0].errors().count(), 0);
    }
}
