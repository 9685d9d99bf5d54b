//! ActorEntity implementation for [`MenuItem`].
//!
//! Creation and updates reject negative prices and blank names; everything
//! else about a catalog record is free-form.

use super::actions::{MenuAction, MenuActionResult};
use super::error::MenuError;
use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use rust_decimal::Decimal;

fn check_price(price: Decimal) -> Result<Decimal, MenuError> {
    if price < Decimal::ZERO {
        return Err(MenuError::InvalidPrice(price));
    }
    Ok(price)
}

fn check_name(name: String) -> Result<String, MenuError> {
    if name.trim().is_empty() {
        return Err(MenuError::EmptyName);
    }
    Ok(name)
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            name: check_name(params.name)?,
            description: params.description,
            price: check_price(params.price)?,
            category: params.category,
            available: params.available,
            image: params.image,
            ingredients: params.ingredients,
            allergens: params.allergens,
        })
    }

    /// Applies every `Some` field. Nothing changes if any field is invalid.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        let name = update.name.map(check_name).transpose()?;
        let price = update.price.map(check_price).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MenuAction,
        _ctx: &(),
    ) -> Result<MenuActionResult, MenuError> {
        match action {
            MenuAction::ToggleAvailability => {
                self.available = !self.available;
                Ok(MenuActionResult::ToggleAvailability(self.available))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RestaurantId;

    fn burger() -> MenuItemCreate {
        MenuItemCreate::new(RestaurantId(1), "Classic Burger", Decimal::new(1299, 2), "Main Course")
    }

    #[test]
    fn create_rejects_negative_price_and_blank_name() {
        let mut params = burger();
        params.price = Decimal::new(-1, 2);
        assert_eq!(
            MenuItem::from_create_params(MenuItemId(1), params),
            Err(MenuError::InvalidPrice(Decimal::new(-1, 2)))
        );

        let mut params = burger();
        params.name = "  ".into();
        assert_eq!(
            MenuItem::from_create_params(MenuItemId(1), params),
            Err(MenuError::EmptyName)
        );
    }

    #[test]
    fn zero_price_is_allowed() {
        let mut params = burger();
        params.price = Decimal::ZERO;
        assert!(MenuItem::from_create_params(MenuItemId(1), params).is_ok());
    }

    #[tokio::test]
    async fn invalid_update_changes_nothing() {
        let mut item = MenuItem::from_create_params(MenuItemId(1), burger()).unwrap();
        let before = item.clone();
        let update = MenuItemUpdate {
            name: Some("Double Burger".into()),
            price: Some(Decimal::NEGATIVE_ONE),
            ..Default::default()
        };
        assert!(item.on_update(update, &()).await.is_err());
        assert_eq!(item, before);
    }

    #[tokio::test]
    async fn toggle_flips_availability() {
        let mut item = MenuItem::from_create_params(MenuItemId(1), burger()).unwrap();
        let result = item.handle_action(MenuAction::ToggleAvailability, &()).await.unwrap();
        assert_eq!(result, MenuActionResult::ToggleAvailability(false));
        let result = item.handle_action(MenuAction::ToggleAvailability, &()).await.unwrap();
        assert_eq!(result, MenuActionResult::ToggleAvailability(true));
    }
}
