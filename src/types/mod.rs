mod basic;
pub mod network;
pub mod queries;

pub use basic::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// State of the account's release schedule. This is the balance of the account
/// that is owned by the account, but cannot be used until the release point.
pub struct AccountReleaseSchedule {
    /// Total amount that is locked up in releases.
    pub total:    Amount,
    /// List of timestamped releases. In increasing order of timestamps.
    pub schedule: Vec<Release>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// An individual release of a locked balance.
pub struct Release {
    #[serde(with = "crate::internal::timestamp_millis")]
    /// Effective time of release.
    pub timestamp:    chrono::DateTime<chrono::Utc>,
    /// Amount to be released.
    pub amount:       Amount,
    /// List of transaction hashes that contribute a balance to this release.
    pub transactions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// The baker state of an account.
pub struct AccountBaker {
    /// Identity of the baker. This is the account index of the account
    /// controlling the baker.
    pub baker_id:         BakerId,
    /// The amount the baker has staked.
    pub staked_amount:    Amount,
    /// Whether rewards are added to the stake.
    pub restake_earnings: bool,
    #[serde(default)]
    /// A change to the stake that takes effect at a later epoch.
    pub pending_change:   Option<BakerPendingChange>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "change")]
/// Pending change in the baker's stake.
pub enum BakerPendingChange {
    #[serde(rename_all = "camelCase")]
    /// The stake is being reduced. The new stake will take affect in the given
    /// epoch.
    ReduceStake { new_stake: Amount, epoch: Epoch },
    #[serde(rename_all = "camelCase")]
    /// The baker will be removed at the end of the given epoch.
    RemoveBaker { epoch: Epoch },
}

impl BakerPendingChange {
    /// Epoch at which the change takes effect.
    pub fn epoch(&self) -> Epoch {
        match self {
            BakerPendingChange::ReduceStake { epoch, .. } => *epoch,
            BakerPendingChange::RemoveBaker { epoch } => *epoch,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Whether a credential is the initial one created by the identity provider,
/// or a normal one deployed by the account holder.
pub enum CredentialType {
    Initial,
    Normal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// Versioned value as transmitted by the node.
pub struct Versioned<A> {
    #[serde(rename = "v")]
    pub version: u32,
    pub value:   A,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// A credential on an account.
pub struct AccountCredential {
    #[serde(rename = "type")]
    pub credential_type: CredentialType,
    pub contents:        CredentialContents,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// The publicly visible parts of a credential.
pub struct CredentialContents {
    /// The identity provider that issued the identity behind the credential.
    pub ip_identity: IpIdentity,
    /// Registration id of the credential, hex encoded.
    pub reg_id:      String,
    /// Validity and revealed attributes.
    pub policy:      Policy,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Policy of a credential.
pub struct Policy {
    /// Month the credential was created.
    pub created_at:          YearMonth,
    /// Month after which the credential is no longer valid.
    pub valid_to:            YearMonth,
    #[serde(default)]
    /// Attributes the account holder chose to reveal.
    pub revealed_attributes: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
/// Address of a smart contract instance.
pub struct ContractAddress {
    pub index:    u64,
    pub subindex: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Account information exposed via the node's API. This is always the state of
/// an account in a specific block.
pub struct AccountInfo {
    /// Next nonce to be used for transactions signed from this account.
    pub account_nonce:            Nonce,
    /// Current (unencrypted) balance of the account.
    pub account_amount:           Amount,
    /// Release schedule for any locked up amount. This could be an empty
    /// release schedule.
    pub account_release_schedule: AccountReleaseSchedule,
    /// Map of all currently active credentials on the account.
    pub account_credentials:      BTreeMap<CredentialIndex, Versioned<AccountCredential>>,
    #[serde(default)]
    /// Internal index of the account, if reported by the node.
    pub account_index:            Option<AccountIndex>,
    #[serde(default)]
    /// `Some` if and only if the account is a baker.
    pub account_baker:            Option<AccountBaker>,
    #[serde(default)]
    /// Smart contract instances owned by the account.
    pub account_instances:        Vec<ContractAddress>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// The state of consensus parameters, and allowed participants (i.e., bakers).
pub struct BirkParameters {
    /// Current election difficulty.
    pub election_difficulty: f64,
    /// Leadership election nonce for the current epoch, hex encoded.
    pub election_nonce:      String,
    /// The list of active bakers.
    pub bakers:              Vec<BirkBaker>,
}

impl BirkParameters {
    /// Find a baker by id.
    pub fn baker(&self, baker_id: BakerId) -> Option<&BirkBaker> {
        self.bakers.iter().find(|b| b.baker_id == baker_id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// State of an individual baker.
pub struct BirkBaker {
    /// ID of the baker. Matches their account index.
    pub baker_id:            BakerId,
    /// The lottery power of the baker. This is the baker's stake relative to
    /// the total staked amount.
    pub baker_lottery_power: f64,
    /// Address of the account this baker is associated with.
    pub baker_account:       AccountAddress,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pending_change() {
        let reduce: BakerPendingChange =
            serde_json::from_str(r#"{"change":"ReduceStake","newStake":"500000000","epoch":17}"#)
                .expect("Valid change");
        assert_eq!(reduce, BakerPendingChange::ReduceStake {
            new_stake: 500_000_000u64.into(),
            epoch:     Epoch { epoch: 17 },
        });
        let remove: BakerPendingChange =
            serde_json::from_str(r#"{"change":"RemoveBaker","epoch":3}"#).expect("Valid change");
        assert_eq!(remove.epoch(), Epoch { epoch: 3 });
    }
}
