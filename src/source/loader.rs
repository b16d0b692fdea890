//! Background node fetch.
//!
//! The fetch is the only blocking operation in a session, so it runs on its
//! own thread and the session polls for the result once per tick.

use std::sync::mpsc;

use super::{NodeRecord, NodeSource};
use crate::error::CloudError;

/// Fetch from `source`, logging and swallowing failures.
///
/// A failed fetch yields an empty batch so the session keeps running with
/// zero nodes.
pub fn fetch_or_empty(source: &dyn NodeSource) -> Vec<NodeRecord> {
    match source.fetch() {
        Ok(records) => {
            log::debug!(
                "fetched {} node records from {}",
                records.len(),
                source.describe()
            );
            records
        }
        Err(e) => {
            log::error!(
                "{e} (source: {}); continuing with no nodes",
                source.describe()
            );
            Vec::new()
        }
    }
}

/// A node fetch running on a background thread.
pub struct NodeLoader {
    result_rx: mpsc::Receiver<Vec<NodeRecord>>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl NodeLoader {
    /// Start fetching from `source` on a background thread.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::ThreadSpawn`] if the thread cannot be spawned.
    pub fn spawn(source: Box<dyn NodeSource>) -> Result<Self, CloudError> {
        let (result_tx, result_rx) = mpsc::channel();
        let thread = std::thread::Builder::new()
            .name("node-loader".into())
            .spawn(move || {
                let records = fetch_or_empty(source.as_ref());
                let _ = result_tx.send(records);
            })
            .map_err(CloudError::ThreadSpawn)?;

        Ok(Self {
            result_rx,
            thread: Some(thread),
        })
    }

    /// Non-blocking check for the fetched batch.
    ///
    /// Returns `Some` exactly once. If the loader thread died without
    /// answering, the batch is empty.
    pub fn try_take(&mut self) -> Option<Vec<NodeRecord>> {
        let records = match self.result_rx.try_recv() {
            Ok(records) => records,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => {
                if self.thread.is_none() {
                    return None;
                }
                log::error!("node loader exited without a result");
                Vec::new()
            }
        };
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
        Some(records)
    }

    /// Block until the batch arrives.
    pub fn wait(mut self) -> Vec<NodeRecord> {
        let records = self.result_rx.recv().unwrap_or_default();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticNodeSource;

    struct Unreachable;

    impl NodeSource for Unreachable {
        fn fetch(&self) -> Result<Vec<NodeRecord>, CloudError> {
            Err(CloudError::Fetch("connection refused".to_owned()))
        }
    }

    #[test]
    fn failed_fetch_yields_empty_batch() {
        assert!(fetch_or_empty(&Unreachable).is_empty());
    }

    #[test]
    fn loader_delivers_once() {
        let source = StaticNodeSource::new(vec![NodeRecord::new("a", 1.0)]);
        let mut loader = NodeLoader::spawn(Box::new(source)).unwrap();

        let mut delivered = None;
        for _ in 0..1000 {
            if let Some(records) = loader.try_take() {
                delivered = Some(records);
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        assert_eq!(delivered.unwrap().len(), 1);
        assert!(loader.try_take().is_none());
    }

    #[test]
    fn wait_blocks_for_result() {
        let loader = NodeLoader::spawn(Box::new(Unreachable)).unwrap();
        assert!(loader.wait().is_empty());
    }
}
