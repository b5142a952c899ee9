/// Number of decimals in the display of an amount. Amounts are stored in
/// microCCD.
pub const AMOUNT_DECIMALS: usize = 6;

/// Token used to authenticate with the node if none is configured.
pub const DEFAULT_RPC_TOKEN: &str = "rpcadmin";

/// Name of the request metadata entry that carries the authentication token.
pub const AUTHENTICATION_METADATA_KEY: &str = "authentication";

/// Milliseconds in a day.
pub const MILLIS_PER_DAY: u64 = 1000 * 60 * 60 * 24;
/// Milliseconds in a week of 7 days.
pub const MILLIS_PER_WEEK: u64 = MILLIS_PER_DAY * 7;
/// Milliseconds in a month. Months are counted as 30 days.
pub const MILLIS_PER_MONTH: u64 = MILLIS_PER_DAY * 30;
/// Milliseconds in a year. Years are counted as 12 months of 30 days.
pub const MILLIS_PER_YEAR: u64 = MILLIS_PER_MONTH * 12;

/// The minimum number of peers a node should have.
pub const MINIMUM_NUMBER_OF_PEERS: usize = 5;
/// Latency in milliseconds from which a peer is considered slow.
pub const HIGH_PEER_LATENCY_MILLIS: u64 = 500;
/// Allowed difference in milliseconds between the node's local time and ours.
pub const NODE_LOCAL_TIME_OFFSET_MILLIS: i64 = 1000;
/// Maximal age in milliseconds of the last received block.
pub const MAXIMUM_MILLIS_SINCE_LAST_BLOCK_RECEIVED: i64 = 4000;
/// Maximal age in milliseconds of the last finalization.
pub const MAXIMUM_MILLIS_SINCE_LAST_FINALIZATION: i64 = 14000;
