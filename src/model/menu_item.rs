/// A purchasable entry in a restaurant's menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for MenuItem`](#impl-ActorEntity-for-MenuItem) for details on:
/// - Creation parameters ([`MenuItemCreate`])
/// - Update parameters ([`MenuItemUpdate`])
/// - Custom actions ([`MenuAction`](crate::menu_actor::MenuAction))
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// Identifier of the restaurant that owns a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RestaurantId(pub u32);

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub available: bool,
    pub image: String,
    pub ingredients: Vec<String>,
    pub allergens: Vec<String>,
}

impl MenuItem {
    /// Creates an available item with no description, image, ingredients or allergens.
    pub fn new(
        id: MenuItemId,
        restaurant_id: RestaurantId,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            available: true,
            image: String::new(),
            ingredients: Vec::new(),
            allergens: Vec::new(),
        }
    }
}

/// Payload for adding an item to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub available: bool,
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
}

impl MenuItemCreate {
    /// An available item with the given name, price and category; other fields empty.
    pub fn new(
        restaurant_id: RestaurantId,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            restaurant_id,
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            available: true,
            image: String::new(),
            ingredients: Vec::new(),
            allergens: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

/// Payload for editing a catalog item. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Browse filter over the catalog.
///
/// `search` matches name or description, case-insensitively. A `category` of
/// `None`, `""` or `"All"` matches every category.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub restaurant_id: Option<RestaurantId>,
    pub available_only: bool,
}

impl MenuFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn restaurant(mut self, restaurant_id: RestaurantId) -> Self {
        self.restaurant_id = Some(restaurant_id);
        self
    }

    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        let matches_search = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                item.name.to_lowercase().contains(&term)
                    || item.description.to_lowercase().contains(&term)
            }
        };
        let matches_category = match self.category.as_deref() {
            None | Some("") | Some(ALL_CATEGORIES) => true,
            Some(category) => item.category == category,
        };
        let matches_restaurant = self
            .restaurant_id
            .map_or(true, |restaurant| item.restaurant_id == restaurant);

        matches_search
            && matches_category
            && matches_restaurant
            && (!self.available_only || item.available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, description: &str, category: &str) -> MenuItem {
        let mut item = MenuItem::new(MenuItemId(1), RestaurantId(1), name, Decimal::ONE, category);
        item.description = description.to_string();
        item
    }

    #[test]
    fn search_covers_name_and_description() {
        let burger = item("Classic Burger", "Beef patty with cheddar", "Main Course");
        assert!(MenuFilter::default().search("BURGER").matches(&burger));
        assert!(MenuFilter::default().search("cheddar").matches(&burger));
        assert!(!MenuFilter::default().search("salmon").matches(&burger));
    }

    #[test]
    fn all_and_empty_category_match_everything() {
        let wings = item("Wings", "", "Appetizers");
        assert!(MenuFilter::default().category("All").matches(&wings));
        assert!(MenuFilter::default().category("").matches(&wings));
        assert!(MenuFilter::default().category("Appetizers").matches(&wings));
        assert!(!MenuFilter::default().category("Desserts").matches(&wings));
    }

    #[test]
    fn restaurant_and_availability_filters() {
        let mut cake = item("Cake", "", "Desserts");
        cake.available = false;
        assert!(!MenuFilter::default().available_only().matches(&cake));
        assert!(MenuFilter::default().restaurant(RestaurantId(1)).matches(&cake));
        assert!(!MenuFilter::default().restaurant(RestaurantId(2)).matches(&cake));
    }

    #[test]
    fn ids_display_with_prefix() {
        assert_eq!(MenuItemId(7).to_string(), "item_7");
        assert_eq!(RestaurantId(3).to_string(), "restaurant_3");
    }
}
