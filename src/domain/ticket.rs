use crate::error::PurchaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// The closed set of ticket categories sold for a screening.
///
/// Adults and children occupy a seat each; infants sit on an adult's lap and
/// are neither charged nor seated.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    #[serde(alias = "ADULT", alias = "Adult")]
    Adult,
    #[serde(alias = "CHILD", alias = "Child")]
    Child,
    #[serde(alias = "INFANT", alias = "Infant")]
    Infant,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Price of a single ticket of this category.
    pub fn unit_price(self) -> Price {
        match self {
            Self::Adult => Price(20),
            Self::Child => Price(10),
            Self::Infant => Price::ZERO,
        }
    }

    /// Number of reserved seats a single ticket of this category consumes.
    pub fn seats_per_ticket(self) -> u64 {
        match self {
            Self::Adult | Self::Child => 1,
            Self::Infant => 0,
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adult => f.write_str("ADULT"),
            Self::Child => f.write_str("CHILD"),
            Self::Infant => f.write_str("INFANT"),
        }
    }
}

/// A request for `count` tickets of one category. Immutable once built.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct TicketRequest {
    category: TicketCategory,
    count: u32,
}

impl TicketRequest {
    pub fn new(category: TicketCategory, count: u32) -> Self {
        Self { category, count }
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// A non-negative amount in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u64);

impl Price {
    pub const ZERO: Self = Self(0);

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Price of `count` items at this unit price, clamped at `u64::MAX`.
    pub fn times(self, count: u64) -> Self {
        Self(self.0.saturating_mul(count))
    }
}

impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the purchasing account. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(value: i64) -> Result<Self, PurchaseError> {
        if value > 0 {
            Ok(Self(value.unsigned_abs()))
        } else {
            Err(PurchaseError::InvalidAccount)
        }
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = PurchaseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<Option<i64>> for AccountId {
    type Error = PurchaseError;

    fn try_from(value: Option<i64>) -> Result<Self, Self::Error> {
        value.ok_or(PurchaseError::InvalidAccount).and_then(Self::new)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
