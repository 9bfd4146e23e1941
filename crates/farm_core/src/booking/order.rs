//! Event order built at booking time: a catalog package or a custom selection.
//!
//! **Pricing:**
//! - Package: the package's base price.
//! - Custom: sum over selected items of `unit price * quantity`, where the
//!   unit price is `price`, else `price_per_tray`, else 0 (a zero price falls
//!   through to the next field).
//!
//! **Rules:**
//! - A newly selected item starts at quantity 1; adjusting never goes below 1.
//! - Selecting an already selected item removes it.
//! - A package order needs a package; a custom order needs a non-zero total.

use std::fmt;

/// Custom-order item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Dishes,
    Beverages,
    SoundSystems,
    Lights,
    Decor,
    Equipment,
    MediaServices,
}

impl ItemCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Dishes => "dishes",
            ItemCategory::Beverages => "beverages",
            ItemCategory::SoundSystems => "soundSystems",
            ItemCategory::Lights => "lights",
            ItemCategory::Decor => "decor",
            ItemCategory::Equipment => "equipment",
            ItemCategory::MediaServices => "mediaServices",
        }
    }
}

/// Catalog package with a fixed price.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPackage {
    pub id: String,
    pub name: String,
    pub event_type: String,
    pub price: f64,
}

/// One selected catalog item in a custom order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: String,
    pub category: ItemCategory,
    pub name: String,
    pub price: Option<f64>,
    /// Catering is priced per tray instead of per unit.
    pub price_per_tray: Option<f64>,
    quantity: u32,
}

impl OrderItem {
    pub fn new(id: impl Into<String>, category: ItemCategory, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            price: None,
            price_per_tray: None,
            quantity: 1,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_price_per_tray(mut self, price: f64) -> Self {
        self.price_per_tray = Some(price);
        self
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        [self.price, self.price_per_tray]
            .into_iter()
            .flatten()
            .find(|p| *p != 0.0)
            .unwrap_or(0.0)
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }

    fn is_same(&self, category: ItemCategory, id: &str) -> bool {
        self.category == category && self.id == id
    }
}

/// Items picked one by one, in selection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomOrder {
    items: Vec<OrderItem>,
}

impl CustomOrder {
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add `item` at quantity 1, or remove it if already selected.
    /// Returns whether the item is selected afterwards.
    pub fn toggle(&mut self, item: OrderItem) -> bool {
        if let Some(pos) = self
            .items
            .iter()
            .position(|i| i.is_same(item.category, &item.id))
        {
            self.items.remove(pos);
            return false;
        }
        self.items.push(OrderItem { quantity: 1, ..item });
        true
    }

    /// Change a selected item's quantity by `delta`, clamped at 1.
    /// Returns the new quantity, or `None` if the item is not selected.
    pub fn adjust_quantity(
        &mut self,
        category: ItemCategory,
        id: &str,
        delta: i64,
    ) -> Option<u32> {
        let item = self.items.iter_mut().find(|i| i.is_same(category, id))?;
        let next = (i64::from(item.quantity) + delta).clamp(1, i64::from(u32::MAX));
        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        Some(item.quantity)
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

/// Why an order cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    NoPackageSelected,
    /// Custom order with nothing priced in it.
    EmptyCustomOrder,
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPackageSelected => write!(f, "no package selected"),
            Self::EmptyCustomOrder => write!(f, "custom order has no priced items"),
        }
    }
}

impl std::error::Error for OrderError {}

/// The order attached to a new booking.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderSelection {
    Package(Option<EventPackage>),
    Custom(CustomOrder),
}

impl OrderSelection {
    pub fn total(&self) -> f64 {
        match self {
            OrderSelection::Package(Some(package)) => package.price,
            OrderSelection::Package(None) => 0.0,
            OrderSelection::Custom(order) => order.total(),
        }
    }

    pub fn event_name(&self) -> &str {
        match self {
            OrderSelection::Package(Some(package)) => &package.name,
            _ => "Custom Event",
        }
    }

    pub fn event_type(&self) -> &str {
        match self {
            OrderSelection::Package(Some(package)) => &package.event_type,
            _ => "Custom",
        }
    }

    /// Total amount to book, or why the order is incomplete.
    pub fn checkout_total(&self) -> Result<f64, OrderError> {
        match self {
            OrderSelection::Package(None) => Err(OrderError::NoPackageSelected),
            OrderSelection::Custom(order) if order.total() == 0.0 => {
                Err(OrderError::EmptyCustomOrder)
            }
            selection => Ok(selection.total()),
        }
    }
}
