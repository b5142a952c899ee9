/// An empty message.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Empty {}
/// A numeric response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NumberResponse {
    #[prost(uint64, tag = "1")]
    pub value: u64,
}
/// A response consisting of a boolean.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoolResponse {
    #[prost(bool, tag = "1")]
    pub value: bool,
}
/// A response in string format.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StringResponse {
    #[prost(string, tag = "1")]
    pub value: ::prost::alloc::string::String,
}
/// A response that is encoded in JSON.
/// JSON schemas are available at <https://developer.concordium.software/en/mainnet/net/references/grpc.html.>
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JsonResponse {
    #[prost(string, tag = "1")]
    pub value: ::prost::alloc::string::String,
}
/// A peer node.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PeerElement {
    /// The id of the node.
    #[prost(message, optional, tag = "1")]
    pub node_id:        ::core::option::Option<::prost::alloc::string::String>,
    /// The port of the node.
    #[prost(message, optional, tag = "2")]
    pub port:           ::core::option::Option<u32>,
    /// The IP of the node.
    #[prost(message, optional, tag = "3")]
    pub ip:             ::core::option::Option<::prost::alloc::string::String>,
    /// The current status of the peer.
    #[prost(enumeration = "peer_element::CatchupStatus", tag = "4")]
    pub catchup_status: i32,
}
/// Nested message and enum types in `PeerElement`.
pub mod peer_element {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum CatchupStatus {
        /// The peer does not have any data unknown to us. If we receive a
        /// message from the peer that refers to unknown data (e.g., an
        /// unknown block) the peer is marked as pending.
        Uptodate   = 0,
        /// The peer might have some data unknown to us. A peer can be in this
        /// state either because it sent a message that refers to data
        /// unknown to us, or before we have established a baseline with it.
        /// The latter happens during node startup, as well as upon protocol
        /// updates until the initial catchup handshake completes.
        Pending    = 1,
        /// The node is currently catching up by requesting blocks from this
        /// peer. There will be at most one peer with this status at a
        /// time. Once the peer has responded to the request, its status
        /// will be changed to:
        /// - 'UPTODATE' if the peer has no more data that is not known to us
        /// - 'PENDING' if the node has more data that is unknown to us.
        Catchingup = 2,
    }
    impl CatchupStatus {
        /// String value of the enum field names used in the ProtoBuf
        /// definition.
        ///
        /// The values are not transformed in any way and thus are considered
        /// stable (if the ProtoBuf definition does not change) and safe
        /// for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                CatchupStatus::Uptodate => "UPTODATE",
                CatchupStatus::Pending => "PENDING",
                CatchupStatus::Catchingup => "CATCHINGUP",
            }
        }
    }
}
/// A response containing a list of peers.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PeerListResponse {
    /// The type of the queried node.
    /// Possible values: "Node" or "Bootstrapper".
    #[prost(string, tag = "1")]
    pub peer_type: ::prost::alloc::string::String,
    /// A list of peers.
    #[prost(message, repeated, tag = "2")]
    pub peers:     ::prost::alloc::vec::Vec<PeerElement>,
}
/// A response containing information about a peer.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PeerStatsResponse {
    /// A list of stats for the peers.
    #[prost(message, repeated, tag = "1")]
    pub peerstats:   ::prost::alloc::vec::Vec<peer_stats_response::PeerStats>,
    /// Average outbound throughput in bytes per second.
    #[prost(uint64, tag = "2")]
    pub avg_bps_in:  u64,
    /// Average inbound throughput in bytes per second.
    #[prost(uint64, tag = "3")]
    pub avg_bps_out: u64,
}
/// Nested message and enum types in `PeerStatsResponse`.
pub mod peer_stats_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct PeerStats {
        /// The node id.
        #[prost(string, tag = "1")]
        pub node_id:          ::prost::alloc::string::String,
        /// The number of messages sent to the peer.
        #[prost(uint64, tag = "2")]
        pub packets_sent:     u64,
        /// The number of messages received from the peer.
        #[prost(uint64, tag = "3")]
        pub packets_received: u64,
        /// The connection latency (i.e., ping time) in milliseconds.
        #[prost(uint64, tag = "4")]
        pub latency:          u64,
    }
}
/// A response containing information about the node.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeInfoResponse {
    /// The unique node identifier.
    #[prost(message, optional, tag = "1")]
    pub node_id: ::core::option::Option<::prost::alloc::string::String>,
    /// The local time of the node represented as a unix timestamp in seconds.
    #[prost(uint64, tag = "2")]
    pub current_localtime: u64,
    /// The node type. Either "Node" or "Bootstrapper".
    #[prost(string, tag = "3")]
    pub peer_type: ::prost::alloc::string::String,
    /// Whether the node is a baker.
    #[prost(bool, tag = "4")]
    pub consensus_baker_running: bool,
    /// Whether consensus is running.
    /// This is only false if the protocol was updated to a version which the
    /// node software does not support.
    #[prost(bool, tag = "5")]
    pub consensus_running: bool,
    /// Whether the node is "Active" or "Passive".
    /// - "Active": the node has baker credentials and can thus potentially
    ///   participate in baking and finalization.
    /// - "Passive": the node has no baker credentials is thus only an observer
    ///   of the consensus protocol.
    #[prost(string, tag = "6")]
    pub consensus_type: ::prost::alloc::string::String,
    /// The baking status of the node.
    #[prost(enumeration = "node_info_response::IsInBakingCommittee", tag = "7")]
    pub consensus_baker_committee: i32,
    /// Whether the node is part of the finalization committee.
    #[prost(bool, tag = "8")]
    pub consensus_finalizer_committee: bool,
    /// The baker id. This will be `null` if the node is not a baker.
    #[prost(message, optional, tag = "9")]
    pub consensus_baker_id: ::core::option::Option<u64>,
    /// Deprecated.
    #[deprecated]
    #[prost(message, optional, tag = "50")]
    pub staging_net_username: ::core::option::Option<::prost::alloc::string::String>,
}
/// Nested message and enum types in `NodeInfoResponse`.
pub mod node_info_response {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum IsInBakingCommittee {
        /// The node is not the baking committee.
        NotInCommittee    = 0,
        /// The node has baker keys, but the account is not currently a baker
        /// (and possibly never will be).
        AddedButNotActiveInCommittee = 1,
        /// The node has baker keys, but they don't match the current keys on
        /// the baker account.
        AddedButWrongKeys = 2,
        /// The node has valid baker keys and is active in the baker committee.
        ActiveInCommittee = 3,
    }
    impl IsInBakingCommittee {
        /// String value of the enum field names used in the ProtoBuf
        /// definition.
        ///
        /// The values are not transformed in any way and thus are considered
        /// stable (if the ProtoBuf definition does not change) and safe
        /// for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                IsInBakingCommittee::NotInCommittee => "NOT_IN_COMMITTEE",
                IsInBakingCommittee::AddedButNotActiveInCommittee => {
                    "ADDED_BUT_NOT_ACTIVE_IN_COMMITTEE"
                }
                IsInBakingCommittee::AddedButWrongKeys => "ADDED_BUT_WRONG_KEYS",
                IsInBakingCommittee::ActiveInCommittee => "ACTIVE_IN_COMMITTEE",
            }
        }
    }
}
/// Hash of a block (encoded in hex). Is always 64 characters long.
/// Example: "987d6c06256fbf874d6ba14f19baee4390a31c6ee58edd9cc4efef62e89d22d7"
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockHash {
    #[prost(string, tag = "1")]
    pub block_hash: ::prost::alloc::string::String,
}
/// Request for getting information about an account address.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAddressInfoRequest {
    /// Hash of the block (encoded in hex) at which the information should be
    /// gathered.
    #[prost(string, tag = "1")]
    pub block_hash: ::prost::alloc::string::String,
    /// The account address to request information about.
    #[prost(string, tag = "2")]
    pub address:    ::prost::alloc::string::String,
}
/// Request for getting (information about) the peers.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PeersRequest {
    /// Whether bootstrapper nodes should be included in the result.
    #[prost(bool, tag = "1")]
    pub include_bootstrappers: bool,
}
/// Generated client implementations.
pub mod p2p_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::{http::Uri, *};
    #[derive(Debug, Clone)]
    pub struct P2pClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl P2pClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>, {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> P2pClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }

        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> P2pClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<http::Request<tonic::body::BoxBody>>>::Error:
                Into<StdError> + Send + Sync, {
            P2pClient::new(InterceptedService::new(inner, interceptor))
        }

        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond
        /// with an error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }

        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }

        /// Uptime of the *node* in milliseconds.
        pub async fn peer_uptime(
            &mut self,
            request: impl tonic::IntoRequest<super::Empty>,
        ) -> Result<tonic::Response<super::NumberResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/PeerUptime");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Total number of sent packets by the node.
        pub async fn peer_total_sent(
            &mut self,
            request: impl tonic::IntoRequest<super::Empty>,
        ) -> Result<tonic::Response<super::NumberResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/PeerTotalSent");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Total number of received packets by the node.
        pub async fn peer_total_received(
            &mut self,
            request: impl tonic::IntoRequest<super::Empty>,
        ) -> Result<tonic::Response<super::NumberResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/PeerTotalReceived");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Node software version.
        pub async fn peer_version(
            &mut self,
            request: impl tonic::IntoRequest<super::Empty>,
        ) -> Result<tonic::Response<super::StringResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/PeerVersion");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Stats for connected peers.
        pub async fn peer_stats(
            &mut self,
            request: impl tonic::IntoRequest<super::PeersRequest>,
        ) -> Result<tonic::Response<super::PeerStatsResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/PeerStats");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// List of connected peers.
        pub async fn peer_list(
            &mut self,
            request: impl tonic::IntoRequest<super::PeersRequest>,
        ) -> Result<tonic::Response<super::PeerListResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/PeerList");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Ban a the given peer.
        pub async fn ban_node(
            &mut self,
            request: impl tonic::IntoRequest<super::PeerElement>,
        ) -> Result<tonic::Response<super::BoolResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/BanNode");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Unban the given peer.
        pub async fn unban_node(
            &mut self,
            request: impl tonic::IntoRequest<super::PeerElement>,
        ) -> Result<tonic::Response<super::BoolResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/UnbanNode");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Get information about the running node.
        pub async fn node_info(
            &mut self,
            request: impl tonic::IntoRequest<super::Empty>,
        ) -> Result<tonic::Response<super::NodeInfoResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/NodeInfo");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Get information about the consensus.
        /// A JSON schema for the return type is provided at: https://developer.concordium.software/en/mainnet/net/references/grpc.html.
        pub async fn get_consensus_status(
            &mut self,
            request: impl tonic::IntoRequest<super::Empty>,
        ) -> Result<tonic::Response<super::JsonResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/GetConsensusStatus");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Get information about an account.
        /// A JSON schema for the return type is provided at: https://developer.concordium.software/en/mainnet/net/references/grpc.html.
        pub async fn get_account_info(
            &mut self,
            request: impl tonic::IntoRequest<super::GetAddressInfoRequest>,
        ) -> Result<tonic::Response<super::JsonResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/GetAccountInfo");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Get an overview of the parameters used for baking.
        /// A JSON schema for the return type is provided at: https://developer.concordium.software/en/mainnet/net/references/grpc.html.
        pub async fn get_birk_parameters(
            &mut self,
            request: impl tonic::IntoRequest<super::BlockHash>,
        ) -> Result<tonic::Response<super::JsonResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/GetBirkParameters");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Get a list of all identity providers that exist in the state after
        /// the given block. A JSON schema for the return type is provided at: https://developer.concordium.software/en/mainnet/net/references/grpc.html.
        pub async fn get_identity_providers(
            &mut self,
            request: impl tonic::IntoRequest<super::BlockHash>,
        ) -> Result<tonic::Response<super::JsonResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/GetIdentityProviders");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Get a list of all anonymity revokers that exist in the state after
        /// the given block. A JSON schema for the return type is provided at: https://developer.concordium.software/en/mainnet/net/references/grpc.html.
        pub async fn get_anonymity_revokers(
            &mut self,
            request: impl tonic::IntoRequest<super::BlockHash>,
        ) -> Result<tonic::Response<super::JsonResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/GetAnonymityRevokers");
            self.inner.unary(request.into_request(), path, codec).await
        }

        /// Get a list of banned peers.
        pub async fn get_banned_peers(
            &mut self,
            request: impl tonic::IntoRequest<super::Empty>,
        ) -> Result<tonic::Response<super::PeerListResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/concordium.P2P/GetBannedPeers");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}
