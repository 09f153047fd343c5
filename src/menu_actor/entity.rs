use crate::actor_framework::Entity;
use crate::domain::{MenuItem, MenuItemId};

impl Entity for MenuItem {
    type Id = MenuItemId;

    fn id(&self) -> Option<MenuItemId> {
        self.id
    }

    /// Stamps the store-assigned id. Any id the caller supplied is overwritten.
    fn set_id(&mut self, id: MenuItemId) {
        self.id = Some(id);
    }
}
