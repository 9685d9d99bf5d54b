//! # Menu Client
//!
//! High-level API over the menu actor: the owner's management calls and the
//! customer's browse call.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<MenuError>() {
            Ok(menu_error) => menu_error,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(other) => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn create_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies the `Some` fields of `update` and returns the stored record.
    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Returns the availability after the flip.
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: MenuItemId) -> Result<bool, MenuError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, MenuAction::ToggleAvailability)
            .await
            .map_err(Self::map_error)?
        {
            MenuActionResult::ToggleAvailability(available) => Ok(available),
        }
    }

    /// Catalog items matching `filter`, ordered by id.
    #[instrument(skip(self))]
    pub async fn browse(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, MenuError> {
        let mut items = self.list().await?;
        items.retain(|item| filter.matches(item));
        debug!(matched = items.len(), "Browse");
        Ok(items)
    }

    /// A snapshot of the catalog keyed by id, used to price carts.
    #[instrument(skip(self))]
    pub async fn price_book(&self) -> Result<HashMap<MenuItemId, MenuItem>, MenuError> {
        let items = self.list().await?;
        Ok(items.into_iter().map(|item| (item.id, item)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};
    use crate::model::RestaurantId;
    use rust_decimal::Decimal;

    fn item(id: u32, name: &str, category: &str) -> MenuItem {
        MenuItem::new(MenuItemId(id), RestaurantId(1), name, Decimal::new(999, 2), category)
    }

    #[tokio::test]
    async fn test_toggle_availability_returns_new_flag() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu = MenuClient::new(client);

        let task = tokio::spawn(async move { menu.toggle_availability(MenuItemId(3)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, MenuItemId(3));
        assert_eq!(action, MenuAction::ToggleAvailability);
        responder
            .send(Ok(MenuActionResult::ToggleAvailability(false)))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(false));
    }

    #[tokio::test]
    async fn test_browse_filters_listed_items() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_list().return_ok(vec![
            item(1, "Classic Burger", "Main Course"),
            item(2, "Chicken Wings", "Appetizers"),
            item(3, "Veggie Burger", "Main Course"),
        ]);
        let menu = MenuClient::new(mock.client());

        let found = menu
            .browse(&MenuFilter::default().search("burger").category("Main Course"))
            .await
            .unwrap();
        let ids: Vec<_> = found.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![MenuItemId(1), MenuItemId(3)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_price_book_keys_by_id() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_list()
            .return_ok(vec![item(1, "Soup", "Starters"), item(4, "Cake", "Desserts")]);
        let menu = MenuClient::new(mock.client());

        let book = menu.price_book().await.unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book[&MenuItemId(4)].name, "Cake");
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_variant() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_create()
            .return_err(FrameworkError::entity(MenuError::InvalidPrice(Decimal::NEGATIVE_ONE)));
        mock.expect_update(MenuItemId(9))
            .return_err(FrameworkError::NotFound("item_9".into()));
        let menu = MenuClient::new(mock.client());

        let params = MenuItemCreate::new(RestaurantId(1), "Soup", Decimal::NEGATIVE_ONE, "Starters");
        assert_eq!(
            menu.create_item(params).await,
            Err(MenuError::InvalidPrice(Decimal::NEGATIVE_ONE))
        );
        assert_eq!(
            menu.update_item(MenuItemId(9), MenuItemUpdate::default()).await,
            Err(MenuError::NotFound("item_9".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<MenuItem>(1);
        drop(receiver);
        let menu = MenuClient::new(client);

        assert!(matches!(
            menu.get(MenuItemId(1)).await,
            Err(MenuError::ActorCommunicationError(_))
        ));
    }
}
