/// The one entry point through which conversions read `google.protobuf`
/// wrapper fields. The generated code already represents a wrapper as
/// [`Option`], so for it this performs no conversion; it only keeps wrapper
/// access in a single place.
pub(crate) trait Unbox {
    type A;
    /// Return the wrapped value, or [`None`] if the wrapper is unset.
    fn unbox(self) -> Option<Self::A>;
}

/// Identity: the generated wrapper is already an [`Option`].
impl<A> Unbox for Option<A> {
    type A = A;

    fn unbox(self) -> Option<A> { self }
}

pub(crate) mod timestamp_millis {
    use serde::Deserialize;
    /// Serialize (via Serde) chrono::DateTime in milliseconds as an i64.
    pub fn serialize<S: serde::Serializer>(
        dt: &chrono::DateTime<chrono::Utc>,
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        ser.serialize_i64(dt.timestamp_millis())
    }

    /// Deserialize (via Serde) chrono::DateTime in milliseconds as an i64.
    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
        des: D,
    ) -> Result<chrono::DateTime<chrono::Utc>, D::Error> {
        let millis = i64::deserialize(des)?;
        chrono::DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| serde::de::Error::custom("Timestamp out of range."))
    }
}

pub(crate) mod duration_millis {
    use serde::Deserialize;
    /// Serialize (via Serde) chrono::Duration in milliseconds as an i64.
    pub fn serialize<S: serde::Serializer>(
        duration: &chrono::Duration,
        ser: S,
    ) -> Result<S::Ok, S::Error> {
        ser.serialize_i64(duration.num_milliseconds())
    }

    /// Deserialize (via Serde) chrono::Duration in milliseconds as an i64.
    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
        des: D,
    ) -> Result<chrono::Duration, D::Error> {
        let millis = i64::deserialize(des)?;
        chrono::Duration::try_milliseconds(millis)
            .ok_or_else(|| serde::de::Error::custom("Duration out of range."))
    }
}
