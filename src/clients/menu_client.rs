use std::time::Instant;
use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{MenuItem, MenuItemId};
use crate::menu_actor::MenuError;

/// Client for interacting with the menu store actor.
///
/// Business rules live here, in front of the store: prices must not be
/// negative, and update/delete require the item to exist.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Stores a new item under a freshly assigned id. Any id in the payload is
    /// discarded.
    #[instrument(fields(menu_item_name = %item.name), skip(self, item))]
    pub async fn create_menu_item(&self, item: MenuItem) -> Result<MenuItem, MenuError> {
        let start = Instant::now();
        validate_price(item.price)?;

        debug!("Sending request");
        let created = self.inner.insert(MenuItem { id: None, ..item }).await?;

        info!(menu_item_id = ?created.id, elapsed_ms = elapsed_ms(start), "Menu item created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn list_menu_items(&self) -> Result<Vec<MenuItem>, MenuError> {
        let start = Instant::now();
        debug!("Sending request");
        let items = self.inner.find_all().await?;
        debug!(count = items.len(), elapsed_ms = elapsed_ms(start), "Listed menu items");
        Ok(items)
    }

    #[instrument(skip(self))]
    pub async fn get_menu_item(&self, id: MenuItemId) -> Result<Option<MenuItem>, MenuError> {
        debug!("Sending request");
        Ok(self.inner.find_by_id(id).await?)
    }

    /// Replaces every field of an existing item except its id.
    ///
    /// Existence is checked before the price, so an unknown id reports
    /// `NotFound` even when the payload is also invalid.
    #[instrument(fields(menu_item_id = %id), skip(self, item))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        item: MenuItem,
    ) -> Result<MenuItem, MenuError> {
        let start = Instant::now();
        debug!("Sending request");

        if !self.inner.exists(id).await? {
            debug!("Menu item not found");
            return Err(MenuError::NotFound(id));
        }
        validate_price(item.price)?;

        // The item may have been deleted since the existence check.
        let updated = self
            .inner
            .replace(id, item)
            .await?
            .ok_or(MenuError::NotFound(id))?;

        info!(elapsed_ms = elapsed_ms(start), "Menu item updated");
        Ok(updated)
    }

    #[instrument(fields(menu_item_id = %id), skip(self))]
    pub async fn delete_menu_item(&self, id: MenuItemId) -> Result<(), MenuError> {
        let start = Instant::now();
        debug!("Sending request");

        match self.inner.delete(id).await? {
            Some(removed) => {
                info!(menu_item_name = %removed.name, elapsed_ms = elapsed_ms(start), "Menu item deleted");
                Ok(())
            }
            None => {
                debug!("Menu item not found");
                Err(MenuError::NotFound(id))
            }
        }
    }

    /// Inserts an item as-is, keeping any id it carries. Used for seeding.
    #[instrument(fields(menu_item_name = %item.name), skip(self, item))]
    pub async fn insert_menu_item(&self, item: MenuItem) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        Ok(self.inner.insert(item).await?)
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn clear(&self) -> Result<(), MenuError> {
        debug!("Sending request");
        Ok(self.inner.clear().await?)
    }

    pub async fn shutdown(&self) -> Result<(), MenuError> {
        Ok(self.inner.shutdown().await?)
    }

    #[cfg(test)]
    pub async fn count(&self) -> Result<usize, MenuError> {
        Ok(self.inner.len().await?)
    }
}

fn validate_price(price: f64) -> Result<(), MenuError> {
    if price < 0.0 {
        debug!(price, "Validation failed: negative price");
        return Err(MenuError::InvalidArgument("Price cannot be negative".to_string()));
    }
    Ok(())
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
