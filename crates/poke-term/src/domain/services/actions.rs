use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::CatalogClientBox;
use crate::domain::models::CatalogEntry;
use crate::domain::models::Event;

async fn load_catalog(
    client: &Arc<CatalogClientBox>,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let res = client.fetch_catalog().await;
    event_tx.send(Event::CatalogLoaded(res))?;

    return Ok(());
}

async fn load_detail(
    client: &Arc<CatalogClientBox>,
    entry: CatalogEntry,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let res = client.fetch_detail(&entry.url).await;
    event_tx.send(Event::DetailLoaded(entry, res))?;

    return Ok(());
}

/// Runs fetches off the UI loop. Every action gets its own worker task whose
/// result comes back as an [`Event`]; workers are never cancelled, so when two
/// detail fetches overlap the later completion is the one shown.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        client: CatalogClientBox,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let client_arc = Arc::new(client);

        while let Some(action) = rx.recv().await {
            let client_worker = client_arc.clone();
            let worker_event_tx = event_tx.clone();
            tracing::debug!(action = ?action, "dispatching");

            match action {
                Action::LoadCatalog => {
                    tokio::spawn(async move {
                        return load_catalog(&client_worker, &worker_event_tx).await;
                    });
                }
                Action::LoadDetail(entry) => {
                    tokio::spawn(async move {
                        return load_detail(&client_worker, entry, &worker_event_tx).await;
                    });
                }
            }
        }

        return Ok(());
    }
}
