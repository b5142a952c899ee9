use derive_more::{Display, From, FromStr, Into};
use num_bigint::BigUint;
use num_traits::{Num, Zero};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Duration of a slot in milliseconds.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, FromStr, Display, From, Into)]
pub struct SlotDuration {
    pub millis: u64,
}

impl From<SlotDuration> for chrono::Duration {
    fn from(s: SlotDuration) -> Self {
        // slot durations are far below i64::MAX milliseconds.
        Self::milliseconds(s.millis as i64)
    }
}

/// Internal short id of the baker.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, FromStr, Display, From, Into)]
pub struct BakerId {
    pub id: u64,
}

/// Epoch number
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, FromStr, Display, From, Into)]
pub struct Epoch {
    pub epoch: u64,
}

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, FromStr, Display, From, Into)]
pub struct Nonce {
    pub nonce: u64,
}

/// Height of a block. Last genesis block is at height 0, a child of a block at
/// height n is at height n+1. This height counts from the last protocol update.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, FromStr, Display, From, Into)]
pub struct BlockHeight {
    pub height: u64,
}

/// Index of the account in the account table.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, FromStr, Display, From, Into)]
pub struct AccountIndex {
    pub index: u64,
}

/// Index of a credential on an account.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, FromStr, Display, From, Into)]
pub struct CredentialIndex {
    pub index: u8,
}

/// Identity of an identity provider.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, FromStr, Display, From, Into)]
pub struct IpIdentity(pub u32);

/// Identity of an anonymity revoker.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, FromStr, Display, From, Into)]
pub struct ArIdentity(pub u32);

/// An amount of CCD, stored in its smallest unit (microCCD). The node
/// transmits amounts as strings of decimal digits, and they are parsed
/// directly into an arbitrary precision integer.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, From, Into)]
pub struct Amount {
    pub micro_ccd: BigUint,
}

#[derive(Debug, Error)]
#[error("Amount must be a non-empty string of decimal digits, got '{0}'.")]
pub struct AmountParseError(String);

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountParseError(s.into()));
        }
        let micro_ccd = BigUint::from_str_radix(s, 10).map_err(|_| AmountParseError(s.into()))?;
        Ok(Amount { micro_ccd })
    }
}

impl Amount {
    pub fn is_zero(&self) -> bool { self.micro_ccd.is_zero() }
}

impl From<u64> for Amount {
    fn from(micro_ccd: u64) -> Self {
        Self {
            micro_ccd: micro_ccd.into(),
        }
    }
}

/// Display the amount in CCD with all six decimals, e.g., `1.000000`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&crate::format::format_int_as_decimal(
            &self.micro_ccd.to_string(),
            crate::constants::AMOUNT_DECIMALS,
        ))
    }
}

impl Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&self.micro_ccd.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        let s = String::deserialize(des)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Hash of a block. Transmitted as 64 hex characters.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, From, Into)]
pub struct BlockHash {
    bytes: [u8; 32],
}

impl BlockHash {
    pub fn new(bytes: [u8; 32]) -> Self { Self { bytes } }
}

impl AsRef<[u8]> for BlockHash {
    fn as_ref(&self) -> &[u8] { &self.bytes }
}

#[derive(Debug, Error)]
pub enum HashParseError {
    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl FromStr for BlockHash {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self { bytes })
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.bytes))
    }
}

impl Serialize for BlockHash {
    fn serialize<S: serde::Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D: serde::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        let s = String::deserialize(des)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Address of an account, in its base58-check encoding.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Into)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress(String);

/// Length of the base58-check encoding of an account address.
const ACCOUNT_ADDRESS_LENGTH: usize = 50;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[derive(Debug, Error)]
#[error("Invalid account address '{0}'.")]
pub struct AddressParseError(String);

impl TryFrom<String> for AccountAddress {
    type Error = AddressParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.len() == ACCOUNT_ADDRESS_LENGTH && value.chars().all(|c| BASE58_ALPHABET.contains(c))
        {
            Ok(Self(value))
        } else {
            Err(AddressParseError(value))
        }
    }
}

impl FromStr for AccountAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { s.to_string().try_into() }
}

impl AsRef<str> for AccountAddress {
    fn as_ref(&self) -> &str { &self.0 }
}

/// A year and month, used for the validity of credentials. The node encodes it
/// as `YYYYMM` without a separator. The month is one-indexed, i.e., `1` is
/// January.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct YearMonth {
    pub year:  u16,
    pub month: u8,
}

#[derive(Debug, Error)]
#[error("Invalid year-month '{0}', expected the format YYYYMM.")]
pub struct YearMonthParseError(String);

impl YearMonth {
    /// The first day of the month.
    pub fn first_day(self) -> chrono::NaiveDate {
        // month is validated on construction, so the date always exists.
        chrono::NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), 1)
            .unwrap_or(chrono::NaiveDate::MIN)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || YearMonthParseError(s.into());
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let year: u16 = s[..4].parse().map_err(|_| err())?;
        let month: u8 = s[4..].parse().map_err(|_| err())?;
        if !(1..=12).contains(&month) {
            return Err(err());
        }
        Ok(YearMonth { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: serde::Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: serde::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        let s = String::deserialize(des)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
