use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use crate::actor_framework::ResourceActor;
use crate::clients::MenuClient;
use crate::config::Settings;
use crate::domain::{seed_menu, MenuItem};
use crate::menu_actor::MenuError;

/// Owns the menu store actor for the lifetime of the process.
///
/// Responsible for starting the actor, seeding it, handing out clients, and
/// shutting it down.
pub struct MenuSystem {
    pub menu_client: MenuClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl MenuSystem {
    /// Start the store actor and, if enabled, insert the seed menu.
    ///
    /// Seed items are inserted one at a time so they receive ids 1, 2, 3 in
    /// order before any request can be served.
    #[instrument(name = "menu_system", skip(settings))]
    pub async fn start(settings: &Settings) -> Result<Self, MenuError> {
        info!("Starting menu system");

        let id_counter = Arc::new(AtomicI64::new(1));
        let next_id = move || id_counter.fetch_add(1, Ordering::SeqCst);

        let (menu_actor, resource_client) =
            ResourceActor::<MenuItem>::new(settings.channel_buffer, next_id);
        let menu_client = MenuClient::new(resource_client);
        let handles = vec![tokio::spawn(menu_actor.run())];

        if settings.seed_data {
            let mut seeded = 0;
            for item in seed_menu() {
                let stored = menu_client.insert_menu_item(item).await?;
                debug!(menu_item_id = ?stored.id, menu_item_name = %stored.name, "Seeded menu item");
                seeded += 1;
            }
            info!(seeded, "Seed menu loaded");
        }

        info!("Menu system started successfully");
        Ok(Self { menu_client, handles })
    }

    /// Stop the store actor and wait for it to finish.
    ///
    /// Errors are logged but do not stop the shutdown.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down menu system");

        if let Err(e) = self.menu_client.shutdown().await {
            error!(error = %e, "Failed to signal menu store");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Menu system shutdown complete");
        Ok(())
    }
}
