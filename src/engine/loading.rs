//! Node batch loading for Session.

use super::Session;
use crate::error::CloudError;
use crate::source::{normalize_batch, NodeLoader, NodeRecord, NodeSource};

impl Session {
    /// Start fetching a batch from `source` on a background thread.
    ///
    /// The batch is installed at the start of the first tick after it
    /// arrives. A fetch already in flight is abandoned.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::ThreadSpawn`] if the loader thread cannot be
    /// started.
    pub fn begin_loading(
        &mut self,
        source: Box<dyn NodeSource>,
    ) -> Result<(), CloudError> {
        log::info!("loading nodes from {}", source.describe());
        self.loader = Some(NodeLoader::spawn(source)?);
        Ok(())
    }

    /// Whether a background fetch is still outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    /// Block until the outstanding fetch (if any) finishes and install it.
    pub fn finish_loading(&mut self) {
        if let Some(loader) = self.loader.take() {
            let records = loader.wait();
            self.load_records(&records);
        }
    }

    /// Install a batch right away, replacing every entity.
    ///
    /// Selection, hover and labels do not survive a reload.
    pub fn load_records(&mut self, records: &[NodeRecord]) {
        let nodes = normalize_batch(records, self.options.source.x_range);
        self.store.replace(nodes);
        self.selection.reset();
        self.labels.clear();
        for viewport in &mut self.viewports {
            viewport.pending_clicks = 0;
            viewport
                .backend
                .nodes_loaded(self.store.as_slice(), viewport.style);
        }
        log::info!(
            "loaded {} nodes ({} records)",
            self.store.len(),
            records.len()
        );
    }

    /// Install the background batch if it has arrived.
    pub(super) fn poll_loader(&mut self) -> bool {
        let Some(records) =
            self.loader.as_mut().and_then(NodeLoader::try_take)
        else {
            return false;
        };
        self.loader = None;
        self.load_records(&records);
        true
    }
}
