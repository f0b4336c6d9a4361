use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::scan::ScanDocument;

use super::palette::ColourToken;

/// A collection member: a shared document and its assigned colour.
#[derive(Debug, Clone)]
pub struct ScanEntry {
    /// The member document
    pub document: Arc<ScanDocument>,
    /// Colour assigned on insertion
    pub colour: ColourToken,
}

/// Change notification emitted by a [`ScanCollection`](super::ScanCollection).
#[derive(Debug, Clone)]
pub enum CollectionEvent {
    /// A document was appended to the collection
    Added(ScanEntry),
    /// A document was removed from the collection
    Removed(ScanEntry),
}

impl CollectionEvent {
    /// The entry affected by this event.
    pub fn entry(&self) -> &ScanEntry {
        match self {
            CollectionEvent::Added(entry) | CollectionEvent::Removed(entry) => entry,
        }
    }
}

/// Receives collection change notifications.
///
/// Called synchronously on the mutating thread, after the mutation and
/// before `add`/`remove` returns.
pub trait CollectionObserver: Send {
    /// Handle one event.
    fn notify(&mut self, event: &CollectionEvent);
}

impl<F> CollectionObserver for F
where
    F: FnMut(&CollectionEvent) + Send,
{
    fn notify(&mut self, event: &CollectionEvent) {
        self(event)
    }
}

/// Forwards events into a crossbeam channel.
pub struct ChannelObserver {
    sender: Sender<CollectionEvent>,
}

impl ChannelObserver {
    /// Forward events to `sender`.
    pub fn new(sender: Sender<CollectionEvent>) -> Self {
        Self { sender }
    }
}

impl CollectionObserver for ChannelObserver {
    fn notify(&mut self, event: &CollectionEvent) {
        // A dropped receiver just stops listening.
        let _ = self.sender.send(event.clone());
    }
}

/// Handle returned by [`ScanCollection::subscribe`](super::ScanCollection::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
