//! Network related types.

use super::BakerId;
use std::fmt;

/// Brief information about the node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInfo {
    /// Node ID. This is only used for reporting to the network dashboard, and
    /// has no protocol meaning. [`None`] if the node did not report one.
    pub node_id:                 Option<String>,
    /// Current local time of the node.
    pub local_time:              chrono::DateTime<chrono::Utc>,
    /// The node type, either `Node` or `Bootstrapper`.
    pub peer_type:               String,
    /// Whether the baker thread of the node is running.
    pub baker_running:           bool,
    /// Whether consensus is running. This is only false if the protocol was
    /// updated to a version the node does not support.
    pub consensus_running:       bool,
    /// Either `Active` (the node has baker credentials) or `Passive`.
    pub consensus_type:          String,
    /// Membership of the baking committee.
    pub baking_committee:        BakingCommitteeStatus,
    /// Whether the node is part of the finalization committee.
    pub in_finalizer_committee: bool,
    /// The baker id of the node, if it runs with baker credentials.
    pub baker_id:                Option<BakerId>,
}

/// The baking status of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BakingCommitteeStatus {
    /// The node is not in the baking committee.
    NotInCommittee,
    /// The node has baker keys, but the account is not currently a baker
    /// (and possibly never will be).
    AddedButNotActiveInCommittee,
    /// The node has baker keys, but they don't match the current keys on the
    /// baker account.
    AddedButWrongKeys,
    /// The node has valid baker keys and is active in the baker committee.
    ActiveInCommittee,
}

/// Aggregate network statistics of the node itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PeerInfo {
    /// Version of the node software.
    pub version:        semver::Version,
    /// How long the node has been running.
    pub uptime:         chrono::Duration,
    /// Total number of bytes sent by the node.
    pub total_sent:     u64,
    /// Total number of bytes received by the node.
    pub total_received: u64,
}

/// The peers of the node, with their network statistics, together with the
/// peers the node has banned.
#[derive(Debug, Clone, PartialEq)]
pub struct PeersInfo {
    /// The type of the node, either `Node` or `Bootstrapper`.
    pub peer_type:   String,
    /// Peers the node is connected to.
    pub peers:       Vec<Peer>,
    /// Peers the node has banned.
    pub banned:      Vec<BannedPeer>,
    /// Average inbound throughput in bytes per second.
    pub avg_bps_in:  u64,
    /// Average outbound throughput in bytes per second.
    pub avg_bps_out: u64,
}

/// A peer that the node is connected to.
#[derive(Debug, Clone, PartialEq)]
pub struct Peer {
    /// The id of the peer.
    pub node_id: Option<String>,
    /// Where the peer is reachable.
    pub address: PeerAddress,
    /// Catchup status of the peer.
    pub status:  CatchupStatus,
    /// Network statistics for the peer. [`None`] if the node reported no
    /// statistics for this peer.
    pub stats:   Option<PeerStats>,
}

/// A peer that has been banned by the node.
#[derive(Debug, Clone, PartialEq)]
pub struct BannedPeer {
    /// The id of the banned peer, if banned by id.
    pub node_id: Option<String>,
    /// The address of the banned peer.
    pub address: PeerAddress,
}

/// The address of a peer as reported by the node. The node reports the IP
/// `*` for entries that match any address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerAddress {
    Any,
    Ip { ip: String, port: Option<u16> },
    Unknown,
}

impl PeerAddress {
    pub(crate) fn new(ip: Option<String>, port: Option<u16>) -> Self {
        match ip {
            Some(ip) if ip == "*" => PeerAddress::Any,
            Some(ip) => PeerAddress::Ip { ip, port },
            None => PeerAddress::Unknown,
        }
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerAddress::Any => f.write_str("Any"),
            PeerAddress::Ip { ip, port: Some(port) } => write!(f, "{ip}:{port}"),
            PeerAddress::Ip { ip, port: None } => f.write_str(ip),
            PeerAddress::Unknown => f.write_str("Unknown"),
        }
    }
}

/// The catch up status of the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchupStatus {
    /// The peer is up to date.
    UpToDate,
    /// We do not know the status of the peer,
    /// e.g. the node just established a connection with
    /// the peer.
    Pending,
    /// The peer is catching up on the chain.
    CatchingUp,
}

impl fmt::Display for CatchupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatchupStatus::UpToDate => f.write_str("Up to date"),
            CatchupStatus::Pending => f.write_str("Pending"),
            CatchupStatus::CatchingUp => f.write_str("Catching up"),
        }
    }
}

/// Network statistics for the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerStats {
    /// How many packets the node has sent to the peer.
    pub packets_sent:     u64,
    /// How many packets the node has received from the peer.
    pub packets_received: u64,
    /// The connection latency aka. 'ping' time (measured in milliseconds).
    pub latency:          u64,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_peer_address() {
        assert_eq!(PeerAddress::new(Some("*".into()), Some(0)).to_string(), "Any");
        assert_eq!(
            PeerAddress::new(Some("10.0.0.1".into()), Some(8888)).to_string(),
            "10.0.0.1:8888"
        );
        assert_eq!(PeerAddress::new(None, Some(8888)), PeerAddress::Unknown);
    }
}
