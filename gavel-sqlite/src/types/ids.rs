//! Identifier newtype for auction records.

/// Unique identifier for an auction.
///
/// A newtype wrapper around a uuid, stored in SQLite as its textual form.
/// Using a distinct type keeps auction ids from being confused with any other
/// uuid floating through the system.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct AuctionId(pub uuid::Uuid);

impl From<uuid::Uuid> for AuctionId {
    fn from(value: uuid::Uuid) -> Self {
        Self(value)
    }
}

impl From<AuctionId> for uuid::Uuid {
    fn from(value: AuctionId) -> Self {
        value.0
    }
}

impl std::fmt::Display for AuctionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for AuctionId {
    type Err = <uuid::Uuid as std::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl sqlx::Type<sqlx::Sqlite> for AuctionId {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for AuctionId {
    fn encode_by_ref(
        &self,
        args: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        sqlx::Encode::<'q, sqlx::Sqlite>::encode_by_ref(&self.0.to_string(), args)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for AuctionId {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let string = <&str as sqlx::Decode<'r, sqlx::Sqlite>>::decode(value)?;
        let value = string.parse()?;
        Ok(value)
    }
}
