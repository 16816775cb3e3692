use crate::error::{InventoryError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Warranty assigned to electronics when none is known (e.g. after a load).
pub const DEFAULT_WARRANTY_MONTHS: u32 = 12;
/// Shelf life assigned to perishables when none is known (e.g. after a load).
pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 7;

/// A non-negative stock count.
///
/// Built from raw signed input so that negative values are rejected at the
/// boundary instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ZERO: Self = Self(0);

    pub fn new(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(InventoryError::InvalidInput(
                "Quantity cannot be negative".to_string(),
            ));
        }
        u32::try_from(value).map(Self).map_err(|_| {
            InventoryError::InvalidInput(format!("Quantity {} is too large", value))
        })
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for Quantity {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s.trim().parse().map_err(|_| {
            InventoryError::InvalidInput(format!("Quantity must be a whole number, got '{}'", s))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A non-negative unit price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(InventoryError::InvalidInput(
                "Price cannot be negative".to_string(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s.trim()).map_err(|_| {
            InventoryError::InvalidInput(format!("Price must be a number, got '{}'", s))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The variant tag of an item, without its variant-specific attribute.
///
/// This is what the flat file records in its `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemType {
    Basic,
    Electronic,
    Perishable,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Basic => "Basic",
            ItemType::Electronic => "Electronic",
            ItemType::Perishable => "Perishable",
        }
    }

    /// Builds the full variant, falling back to the default attribute when
    /// `attribute` is `None`. Basic items ignore the attribute.
    pub fn with_attribute(self, attribute: Option<u32>) -> ItemKind {
        match self {
            ItemType::Basic => ItemKind::Basic,
            ItemType::Electronic => ItemKind::Electronic {
                warranty_months: attribute.unwrap_or(DEFAULT_WARRANTY_MONTHS),
            },
            ItemType::Perishable => ItemKind::Perishable {
                shelf_life_days: attribute.unwrap_or(DEFAULT_SHELF_LIFE_DAYS),
            },
        }
    }
}

impl FromStr for ItemType {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        [ItemType::Basic, ItemType::Electronic, ItemType::Perishable]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InventoryError::InvalidInput(format!("Invalid item type '{}'", s)))
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The item variant together with its variant-specific attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ItemKind {
    Basic,
    Electronic { warranty_months: u32 },
    Perishable { shelf_life_days: u32 },
}

impl ItemKind {
    pub fn item_type(&self) -> ItemType {
        match self {
            ItemKind::Basic => ItemType::Basic,
            ItemKind::Electronic { .. } => ItemType::Electronic,
            ItemKind::Perishable { .. } => ItemType::Perishable,
        }
    }
}

/// A single inventory record.
///
/// Items are identified by name only; the store does not enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    pub quantity: Quantity,
    pub price: Price,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, quantity: Quantity, price: Price) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            kind,
        }
    }
}

/// Unvalidated item details as entered by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub name: String,
    pub kind: ItemKind,
    pub quantity: i64,
    pub price: Decimal,
}

impl ItemDetails {
    /// Checks quantity and price and produces an [`Item`].
    pub fn validate(self) -> Result<Item> {
        let quantity = Quantity::new(self.quantity)?;
        let price = Price::new(self.price)?;
        Ok(Item::new(self.name, self.kind, quantity, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quantity_validation() {
        assert_eq!(Quantity::new(5).unwrap().value(), 5);
        assert!(Quantity::new(0).is_ok());
        assert!(matches!(
            Quantity::new(-1),
            Err(InventoryError::InvalidInput(_))
        ));
        assert!(matches!(
            Quantity::new(i64::from(u32::MAX) + 1),
            Err(InventoryError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_price_validation() {
        assert!(Price::new(dec!(9.99)).is_ok());
        assert!(Price::new(dec!(0.0)).is_ok());
        assert!(matches!(
            Price::new(dec!(-0.01)),
            Err(InventoryError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_malformed_numbers() {
        assert!(matches!(
            "abc".parse::<Quantity>(),
            Err(InventoryError::InvalidInput(_))
        ));
        assert!(matches!(
            "1.5".parse::<Quantity>(),
            Err(InventoryError::InvalidInput(_))
        ));
        assert!(matches!(
            "cheap".parse::<Price>(),
            Err(InventoryError::InvalidInput(_))
        ));
        assert_eq!(" 2.50 ".parse::<Price>().unwrap().value(), dec!(2.50));
    }

    #[test]
    fn test_item_type_parsing_ignores_case() {
        assert_eq!("Electronic".parse::<ItemType>().unwrap(), ItemType::Electronic);
        assert_eq!("perishable".parse::<ItemType>().unwrap(), ItemType::Perishable);
        assert!("Furniture".parse::<ItemType>().is_err());
    }

    #[test]
    fn test_default_attributes() {
        assert_eq!(
            ItemType::Electronic.with_attribute(None),
            ItemKind::Electronic { warranty_months: 12 }
        );
        assert_eq!(
            ItemType::Perishable.with_attribute(Some(3)),
            ItemKind::Perishable { shelf_life_days: 3 }
        );
        assert_eq!(ItemType::Basic.with_attribute(Some(3)), ItemKind::Basic);
    }

    #[test]
    fn test_details_validation_rejects_negative_values() {
        let details = ItemDetails {
            name: "Pen".to_string(),
            kind: ItemKind::Basic,
            quantity: -3,
            price: dec!(1.0),
        };
        assert!(matches!(
            details.validate(),
            Err(InventoryError::InvalidInput(_))
        ));

        let details = ItemDetails {
            name: "Pen".to_string(),
            kind: ItemKind::Basic,
            quantity: 3,
            price: dec!(-1.0),
        };
        assert!(matches!(
            details.validate(),
            Err(InventoryError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_item_serializes_flat_with_type_tag() {
        let item = Item::new(
            "TV",
            ItemKind::Electronic { warranty_months: 24 },
            Quantity::new(3).unwrap(),
            Price::new(dec!(499.99)).unwrap(),
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "Electronic");
        assert_eq!(json["name"], "TV");
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["warranty_months"], 24);
    }
}
