use crate::{
    constants::AUTHENTICATION_METADATA_KEY,
    endpoints::{QueryResult, RPCResult},
    types::{
        network::{NodeInfo, PeerInfo, PeersInfo},
        queries::{ArInfo, ConsensusInfo, IpInfo},
        AccountAddress, AccountInfo, ArIdentity, BirkParameters, BlockHash, IpIdentity,
    },
};
use std::collections::BTreeMap;
use tonic::metadata::AsciiMetadataValue;

pub mod conversions;
mod generated;

pub use conversions::join_peer_stats;

#[derive(Clone, Debug)]
/// Client that can perform queries against the node's administrative API.
/// All endpoints take a `&mut self` as an argument which means that a single
/// instance cannot be used concurrently. However instead of putting the Client
/// behind a Mutex, the intended way to use it is to clone it. Cloning is very
/// cheap and will reuse the underlying connection.
pub struct Client {
    client: generated::p2p_client::P2pClient<tonic::transport::Channel>,
    token:  AsciiMetadataValue,
}

impl Client {
    /// Connect to the node at the given endpoint. Every request made by the
    /// client carries the given authentication token.
    pub async fn new<E: Into<tonic::transport::Endpoint>>(
        endpoint: E,
        token: &str,
    ) -> RPCResult<Self> {
        let token = token.parse::<AsciiMetadataValue>()?;
        let endpoint = endpoint.into();
        tracing::debug!(target: "node_monitor", "Connecting to {}.", endpoint.uri());
        let client = generated::p2p_client::P2pClient::connect(endpoint).await?;
        Ok(Self { client, token })
    }

    /// Like [`Client::new`], but the connection is only established on the
    /// first request. Must be called within a tokio runtime.
    pub fn new_lazy<E: Into<tonic::transport::Endpoint>>(
        endpoint: E,
        token: &str,
    ) -> RPCResult<Self> {
        let token = token.parse::<AsciiMetadataValue>()?;
        let channel = endpoint.into().connect_lazy();
        Ok(Self {
            client: generated::p2p_client::P2pClient::new(channel),
            token,
        })
    }

    fn construct_request<T>(&self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        request
            .metadata_mut()
            .insert(AUTHENTICATION_METADATA_KEY, self.token.clone());
        request
    }

    /// Check that the node accepts the authentication token by querying the
    /// node's version. Use [`RPCError::is_unauthenticated`](crate::endpoints::RPCError::is_unauthenticated)
    /// on the error to distinguish a rejected token from other failures.
    pub async fn check_connection(&mut self) -> RPCResult<()> {
        tracing::debug!(target: "node_monitor", "Checking connection.");
        self.client
            .peer_version(self.construct_request(generated::Empty {}))
            .await?;
        Ok(())
    }

    pub async fn get_node_info(&mut self) -> RPCResult<NodeInfo> {
        tracing::debug!(target: "node_monitor", "Querying node info.");
        let response = self
            .client
            .node_info(self.construct_request(generated::Empty {}))
            .await?;
        NodeInfo::try_from(response.into_inner())
    }

    /// The node's version, uptime and total traffic. The four underlying
    /// queries are made concurrently.
    pub async fn get_peer_info(&mut self) -> RPCResult<PeerInfo> {
        tracing::debug!(target: "node_monitor", "Querying peer info.");
        let mut version_client = self.client.clone();
        let mut uptime_client = self.client.clone();
        let mut sent_client = self.client.clone();
        let mut received_client = self.client.clone();
        let (version, uptime, sent, received) = futures::try_join!(
            version_client.peer_version(self.construct_request(generated::Empty {})),
            uptime_client.peer_uptime(self.construct_request(generated::Empty {})),
            sent_client.peer_total_sent(self.construct_request(generated::Empty {})),
            received_client.peer_total_received(self.construct_request(generated::Empty {})),
        )?;
        conversions::peer_info(
            version.into_inner(),
            uptime.into_inner(),
            sent.into_inner(),
            received.into_inner(),
        )
    }

    /// The peers of the node, bootstrappers included, joined with their
    /// network statistics, together with the banned peers.
    pub async fn get_peers_info(&mut self) -> RPCResult<PeersInfo> {
        tracing::debug!(target: "node_monitor", "Querying peers.");
        let peers_request = generated::PeersRequest {
            include_bootstrappers: true,
        };
        let mut list_client = self.client.clone();
        let mut stats_client = self.client.clone();
        let mut banned_client = self.client.clone();
        let (list, stats, banned) = futures::try_join!(
            list_client.peer_list(self.construct_request(peers_request.clone())),
            stats_client.peer_stats(self.construct_request(peers_request)),
            banned_client.get_banned_peers(self.construct_request(generated::Empty {})),
        )?;
        conversions::peers_info(list.into_inner(), stats.into_inner(), banned.into_inner())
    }

    /// The current consensus status. A payload that does not describe a
    /// consensus status, `null` included, is a parse error.
    pub async fn get_consensus_info(&mut self) -> RPCResult<ConsensusInfo> {
        tracing::debug!(target: "node_monitor", "Querying consensus status.");
        let response = self
            .client
            .get_consensus_status(self.construct_request(generated::Empty {}))
            .await?;
        Ok(serde_json::from_str(&response.into_inner().value)?)
    }

    /// Birk parameters at the given block. Fails with
    /// [`QueryError::NotFound`](crate::endpoints::QueryError::NotFound) if
    /// the node does not know the block.
    pub async fn get_birk_parameters(&mut self, bh: &BlockHash) -> QueryResult<BirkParameters> {
        tracing::debug!(target: "node_monitor", "Querying birk parameters at {bh}.");
        let response = self
            .client
            .get_birk_parameters(self.construct_request(generated::BlockHash {
                block_hash: bh.to_string(),
            }))
            .await?;
        conversions::parse_json(&response.into_inner().value)
    }

    /// Account information at the given block. Fails with
    /// [`QueryError::NotFound`](crate::endpoints::QueryError::NotFound) if
    /// the block or the account is unknown.
    pub async fn get_account_info(
        &mut self,
        bh: &BlockHash,
        address: &AccountAddress,
    ) -> QueryResult<AccountInfo> {
        tracing::debug!(target: "node_monitor", "Querying account {address} at {bh}.");
        let response = self
            .client
            .get_account_info(self.construct_request(generated::GetAddressInfoRequest {
                block_hash: bh.to_string(),
                address:    address.to_string(),
            }))
            .await?;
        conversions::parse_json(&response.into_inner().value)
    }

    pub async fn get_identity_providers(
        &mut self,
        bh: &BlockHash,
    ) -> QueryResult<BTreeMap<IpIdentity, IpInfo>> {
        tracing::debug!(target: "node_monitor", "Querying identity providers at {bh}.");
        let response = self
            .client
            .get_identity_providers(self.construct_request(generated::BlockHash {
                block_hash: bh.to_string(),
            }))
            .await?;
        conversions::identity_providers(&response.into_inner().value)
    }

    pub async fn get_anonymity_revokers(
        &mut self,
        bh: &BlockHash,
    ) -> QueryResult<BTreeMap<ArIdentity, ArInfo>> {
        tracing::debug!(target: "node_monitor", "Querying anonymity revokers at {bh}.");
        let response = self
            .client
            .get_anonymity_revokers(self.construct_request(generated::BlockHash {
                block_hash: bh.to_string(),
            }))
            .await?;
        conversions::anonymity_revokers(&response.into_inner().value)
    }

    /// Ban the peer with the given node id. Returns whether the node
    /// reported success.
    pub async fn ban_node(&mut self, node_id: &str) -> RPCResult<bool> {
        tracing::info!(target: "node_monitor", "Banning peer {node_id}.");
        let response = self
            .client
            .ban_node(self.construct_request(conversions::peer_element(node_id)))
            .await?;
        Ok(response.into_inner().value)
    }

    /// Lift the ban of the peer with the given node id. Returns whether the
    /// node reported success.
    pub async fn unban_node(&mut self, node_id: &str) -> RPCResult<bool> {
        tracing::info!(target: "node_monitor", "Unbanning peer {node_id}.");
        let response = self
            .client
            .unban_node(self.construct_request(conversions::peer_element(node_id)))
            .await?;
        Ok(response.into_inner().value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::endpoints::{Endpoint, RPCError};

    fn client(token: &str) -> RPCResult<Client> {
        Client::new_lazy(Endpoint::from_static("http://localhost:10000"), token)
    }

    #[tokio::test]
    async fn test_requests_carry_token() {
        let client = client("rpcadmin").expect("Valid token");
        let request = client.construct_request(conversions::peer_element("abc"));
        let token = request
            .metadata()
            .get(AUTHENTICATION_METADATA_KEY)
            .and_then(|v| v.to_str().ok());
        assert_eq!(token, Some("rpcadmin"));
        assert_eq!(request.metadata().len(), 1);
        assert_eq!(request.get_ref().node_id.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_invalid_token() {
        assert!(matches!(
            client("bad\ntoken"),
            Err(RPCError::InvalidMetadata(_))
        ));
    }
}
