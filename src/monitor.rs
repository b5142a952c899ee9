//! The fetch graphs of the polling cycles of a node dashboard.
//!
//! The functions in this module are generic over [`NodeQueries`], which is
//! implemented by [`v1::Client`]. Each function makes independent queries
//! concurrently on clones of the client, and resolves the best block at most
//! once per call so that all dependent queries of a cycle refer to the same
//! block.
use crate::{
    endpoints::{not_found_to_none, QueryResult, RPCResult},
    estimates::{self, BlockRate},
    health::{self, CheckGroup},
    types::{
        network::{NodeInfo, PeerInfo, PeersInfo},
        queries::{ConsensusInfo, IpInfo},
        AccountAddress, AccountInfo, BakerId, BirkParameters, BlockHash, CredentialIndex,
        IpIdentity,
    },
    v1,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
pub use tonic::async_trait;

#[async_trait]
/// The queries the polling cycles are built from.
///
/// Implementors are expected to be cheap to clone, with clones sharing the
/// underlying connection.
pub trait NodeQueries: Clone + Send + Sync {
    async fn node_info(&mut self) -> RPCResult<NodeInfo>;

    async fn peer_info(&mut self) -> RPCResult<PeerInfo>;

    async fn peers_info(&mut self) -> RPCResult<PeersInfo>;

    async fn consensus_info(&mut self) -> RPCResult<ConsensusInfo>;

    async fn birk_parameters(&mut self, bh: &BlockHash) -> QueryResult<BirkParameters>;

    async fn account_info(
        &mut self,
        bh: &BlockHash,
        address: &AccountAddress,
    ) -> QueryResult<AccountInfo>;

    async fn identity_providers(
        &mut self,
        bh: &BlockHash,
    ) -> QueryResult<BTreeMap<IpIdentity, IpInfo>>;
}

#[async_trait]
impl NodeQueries for v1::Client {
    async fn node_info(&mut self) -> RPCResult<NodeInfo> { self.get_node_info().await }

    async fn peer_info(&mut self) -> RPCResult<PeerInfo> { self.get_peer_info().await }

    async fn peers_info(&mut self) -> RPCResult<PeersInfo> { self.get_peers_info().await }

    async fn consensus_info(&mut self) -> RPCResult<ConsensusInfo> {
        self.get_consensus_info().await
    }

    async fn birk_parameters(&mut self, bh: &BlockHash) -> QueryResult<BirkParameters> {
        self.get_birk_parameters(bh).await
    }

    async fn account_info(
        &mut self,
        bh: &BlockHash,
        address: &AccountAddress,
    ) -> QueryResult<AccountInfo> {
        self.get_account_info(bh, address).await
    }

    async fn identity_providers(
        &mut self,
        bh: &BlockHash,
    ) -> QueryResult<BTreeMap<IpIdentity, IpInfo>> {
        self.get_identity_providers(bh).await
    }
}

/// Everything shown on the overview page of the dashboard.
#[derive(Debug, Clone)]
pub struct Overview {
    pub node:      NodeInfo,
    pub peer:      PeerInfo,
    pub peers:     PeersInfo,
    pub consensus: ConsensusInfo,
    /// Present if the node runs with baker credentials.
    pub baker:     Option<NodeBaker>,
}

impl Overview {
    /// The health checks of the node at the given time.
    pub fn health_checks(&self, now: DateTime<Utc>) -> Vec<CheckGroup> {
        health::health_checks(Some(&self.node), Some(&self.peers), Some(&self.consensus), now)
    }
}

/// The baker the node runs as.
#[derive(Debug, Clone)]
pub struct NodeBaker {
    pub baker_id:      BakerId,
    /// Lottery power in the best block. [`None`] if the baker is not among
    /// the active bakers.
    pub lottery_power: Option<f64>,
    /// Expected block production of the baker.
    pub block_rate:    Option<BlockRate>,
    /// The baker's account in the best block.
    pub account:       Option<AccountInfo>,
}

/// A baker as shown on the consensus page.
#[derive(Debug, Clone, PartialEq)]
pub struct BakerSummary {
    pub baker_id:      BakerId,
    pub account:       AccountAddress,
    pub lottery_power: f64,
    pub block_rate:    Option<BlockRate>,
    /// Whether this is the baker the node runs as.
    pub is_this_node:  bool,
}

/// Everything shown on the consensus page of the dashboard.
#[derive(Debug, Clone)]
pub struct ConsensusOverview {
    pub consensus:          ConsensusInfo,
    pub node:               NodeInfo,
    /// Index of the current epoch.
    pub epoch:              Option<i64>,
    /// Network wide block rate. [`None`] if birk parameters are unavailable.
    pub network_block_rate: Option<BlockRate>,
    /// The active bakers, by decreasing lottery power.
    pub bakers:             Vec<BakerSummary>,
}

/// Account information together with the identity providers of its
/// credentials.
#[derive(Debug, Clone)]
pub struct AccountLookup {
    /// The block the lookup refers to.
    pub block_hash: BlockHash,
    pub account:    AccountInfo,
    /// The identity provider of each credential, if known at the block.
    pub issuers:    BTreeMap<CredentialIndex, Option<IpInfo>>,
}

/// One cycle of the overview page: node info, consensus status and the
/// network statistics concurrently, then the node's baker, if any, in the
/// best block of the consensus status. The birk parameters come from
/// `birk_cache` and are only refetched when the epoch at `now` changes.
pub async fn poll_overview<C: NodeQueries>(
    client: &mut C,
    birk_cache: &mut BirkCache,
    now: DateTime<Utc>,
) -> RPCResult<Overview> {
    let mut consensus_client = client.clone();
    let mut peer_client = client.clone();
    let mut peers_client = client.clone();
    let (node, consensus, peer, peers) = futures::try_join!(
        client.node_info(),
        consensus_client.consensus_info(),
        peer_client.peer_info(),
        peers_client.peers_info(),
    )?;
    let baker = match node.baker_id {
        Some(baker_id) => Some(node_baker(client, birk_cache, baker_id, &consensus, now).await?),
        None => None,
    };
    Ok(Overview {
        node,
        peer,
        peers,
        consensus,
        baker,
    })
}

async fn node_baker<C: NodeQueries>(
    client: &mut C,
    birk_cache: &mut BirkCache,
    baker_id: BakerId,
    consensus: &ConsensusInfo,
    now: DateTime<Utc>,
) -> RPCResult<NodeBaker> {
    let best_block = consensus.best_block;
    let inactive = NodeBaker {
        baker_id,
        lottery_power: None,
        block_rate: None,
        account: None,
    };
    let Some(birk) = birk_cache.get(client, consensus, now).await? else {
        tracing::warn!(target: "node_monitor", "Best block {best_block} is unknown to the node.");
        return Ok(inactive);
    };
    let Some(birk_baker) = birk.baker(baker_id) else {
        tracing::debug!(target: "node_monitor", "Baker {baker_id} is not an active baker.");
        return Ok(inactive);
    };
    let account = not_found_to_none(
        client
            .account_info(&best_block, &birk_baker.baker_account)
            .await,
    )?;
    Ok(NodeBaker {
        baker_id,
        lottery_power: Some(birk_baker.baker_lottery_power),
        block_rate: BlockRate::new(birk.election_difficulty, consensus.slot_duration)
            .map(|rate| rate.for_baker(birk_baker.baker_lottery_power)),
        account,
    })
}

/// Birk parameters, kept until the epoch changes.
#[derive(Debug, Default)]
pub struct BirkCache {
    cached: Option<(i64, BirkParameters)>,
}

impl BirkCache {
    pub fn new() -> Self { Self::default() }

    /// Birk parameters for the epoch at `now`, fetched in the best block of
    /// the given consensus status if the epoch differs from the one of the
    /// cached parameters. [`None`] if the node does not know the best block.
    pub async fn get<C: NodeQueries>(
        &mut self,
        client: &mut C,
        consensus: &ConsensusInfo,
        now: DateTime<Utc>,
    ) -> RPCResult<Option<BirkParameters>> {
        let epoch =
            estimates::epoch_index_at(now, consensus.epoch_duration, consensus.genesis_time);
        if let (Some(epoch), Some((cached_epoch, birk))) = (epoch, &self.cached) {
            if epoch == *cached_epoch {
                return Ok(Some(birk.clone()));
            }
        }
        tracing::debug!(target: "node_monitor", "Refreshing birk parameters for epoch {epoch:?}.");
        let birk = not_found_to_none(client.birk_parameters(&consensus.best_block).await)?;
        self.cached = epoch.zip(birk.clone());
        Ok(birk)
    }
}

/// One cycle of the consensus page: consensus status and node info
/// concurrently, then the birk parameters of the current epoch.
pub async fn poll_consensus<C: NodeQueries>(
    client: &mut C,
    birk_cache: &mut BirkCache,
    now: DateTime<Utc>,
) -> RPCResult<ConsensusOverview> {
    let mut node_client = client.clone();
    let (consensus, node) = futures::try_join!(client.consensus_info(), node_client.node_info())?;
    let epoch = estimates::epoch_index_at(now, consensus.epoch_duration, consensus.genesis_time);
    let birk = birk_cache.get(client, &consensus, now).await?;
    let network_block_rate = birk
        .as_ref()
        .and_then(|b| BlockRate::new(b.election_difficulty, consensus.slot_duration));
    let mut bakers: Vec<BakerSummary> = birk
        .map(|b| b.bakers)
        .unwrap_or_default()
        .into_iter()
        .map(|b| BakerSummary {
            is_this_node:  node.baker_id == Some(b.baker_id),
            block_rate:    network_block_rate.map(|rate| rate.for_baker(b.baker_lottery_power)),
            baker_id:      b.baker_id,
            account:       b.baker_account,
            lottery_power: b.baker_lottery_power,
        })
        .collect();
    bakers.sort_by(|a, b| b.lottery_power.total_cmp(&a.lottery_power));
    Ok(ConsensusOverview {
        consensus,
        node,
        epoch,
        network_block_rate,
        bakers,
    })
}

/// Identity providers in a given block. These only change with chain updates,
/// so they are kept until a lookup fails to find a provider.
#[derive(Debug, Default)]
pub struct IdentityProviderCache {
    cached: Option<(BlockHash, BTreeMap<IpIdentity, IpInfo>)>,
}

impl IdentityProviderCache {
    pub fn new() -> Self { Self::default() }

    /// Look up an identity provider in the given block. A provider that is
    /// not found invalidates the cache so the next lookup refetches.
    pub async fn lookup<C: NodeQueries>(
        &mut self,
        client: &mut C,
        bh: &BlockHash,
        ip_identity: IpIdentity,
    ) -> RPCResult<Option<IpInfo>> {
        let fresh = match &self.cached {
            Some((cached_block, _)) if cached_block == bh => false,
            _ => true,
        };
        if fresh {
            match not_found_to_none(client.identity_providers(bh).await)? {
                Some(ips) => self.cached = Some((*bh, ips)),
                None => {
                    self.cached = None;
                    return Ok(None);
                }
            }
        }
        let found = self
            .cached
            .as_ref()
            .and_then(|(_, ips)| ips.get(&ip_identity).cloned());
        if found.is_none() {
            tracing::debug!(
                target: "node_monitor",
                "Identity provider {ip_identity} not found, invalidating identity providers."
            );
            self.cached = None;
        }
        Ok(found)
    }
}

/// Look up an account in the given block, or in the current best block if no
/// block is given. The identity providers of the account's credentials are
/// looked up in the same block. [`None`] if the account or block is unknown.
pub async fn lookup_account<C: NodeQueries>(
    client: &mut C,
    ip_cache: &mut IdentityProviderCache,
    address: &AccountAddress,
    block: Option<BlockHash>,
) -> RPCResult<Option<AccountLookup>> {
    let block_hash = match block {
        Some(bh) => bh,
        None => client.consensus_info().await?.best_block,
    };
    let Some(account) = not_found_to_none(client.account_info(&block_hash, address).await)?
    else {
        tracing::info!(target: "node_monitor", "Account {address} not found in block {block_hash}.");
        return Ok(None);
    };
    let mut issuers = BTreeMap::new();
    for (index, credential) in &account.account_credentials {
        let ip = ip_cache
            .lookup(client, &block_hash, credential.value.contents.ip_identity)
            .await?;
        issuers.insert(*index, ip);
    }
    Ok(Some(AccountLookup {
        block_hash,
        account,
        issuers,
    }))
}
