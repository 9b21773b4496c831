use std::fmt::Display;
use std::str::FromStr;

/// The lifecycle state of an auction.
///
/// The only permitted transition is `Active` → `Completed`, and it happens
/// exclusively through the store's conditional update. There is no reverse
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AuctionStatus {
    /// The auction is open; its deadline has not been enforced yet.
    Active,
    /// The auction has been closed. Final.
    Completed,
}

impl AuctionStatus {
    /// The stable label used for storage and display.
    pub fn as_str(self) -> &'static str {
        match self {
            AuctionStatus::Active => "active",
            AuctionStatus::Completed => "completed",
        }
    }
}

impl Display for AuctionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuctionStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AuctionStatus::Active),
            "completed" => Ok(AuctionStatus::Completed),
            other => Err(ParseLabelError(other.to_owned())),
        }
    }
}

/// The physical condition of the product being auctioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProductCondition {
    /// Never used.
    New,
    /// Previously owned.
    Used,
    /// Restored to working order.
    Refurbished,
}

impl ProductCondition {
    /// The stable label used for storage and display.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductCondition::New => "new",
            ProductCondition::Used => "used",
            ProductCondition::Refurbished => "refurbished",
        }
    }
}

impl Display for ProductCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCondition {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(ProductCondition::New),
            "used" => Ok(ProductCondition::Used),
            "refurbished" => Ok(ProductCondition::Refurbished),
            other => Err(ParseLabelError(other.to_owned())),
        }
    }
}

/// Error produced when a stored label does not match any known variant.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized label {0:?}")]
pub struct ParseLabelError(pub String);

/// A persisted auction.
///
/// The descriptive payload is immutable after creation and carried through
/// storage untouched; only `status` ever changes, and only once. The type is
/// generic over the backend's temporal and identifier types.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuctionRecord<DateTime, AuctionId> {
    /// Unique identifier, fixed at creation.
    pub id: AuctionId,
    /// Name of the product on offer.
    pub product_name: String,
    /// Free-form product category.
    pub category: String,
    /// Free-form product description.
    pub description: String,
    /// Condition of the product.
    pub condition: ProductCondition,
    /// Current lifecycle state.
    pub status: AuctionStatus,
    /// Creation time; the expiration boundary is `created_at + lifetime`.
    pub created_at: DateTime,
}

/// The caller-supplied payload for a new auction.
///
/// Identifier, status, and creation time are assigned by the creation flow,
/// not the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuctionDraft {
    /// Name of the product on offer.
    pub product_name: String,
    /// Free-form product category.
    pub category: String,
    /// Free-form product description.
    pub description: String,
    /// Condition of the product.
    pub condition: ProductCondition,
}
