//! # Scan Collection
//!
//! Ordered set of decoded documents being compared, each holding a display
//! colour drawn from a fixed [`Palette`].
//!
//! Colours come from a pool that starts as the full palette. Adding a
//! document takes the front colour; removing one puts its colour back at the
//! front, so the most recently freed colour is reused first. When the pool is
//! exhausted it is reset to the full palette, which can hand out a colour that
//! a current member already holds.
//!
//! Observers are notified synchronously inside [`ScanCollection::add`] and
//! [`ScanCollection::remove`]. Mutation requires `&mut self`; callers sharing
//! a collection across threads wrap it in a `Mutex`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rgadata::collection::{CollectionEvent, ScanCollection};
//! use rgadata::scan::ScanDocument;
//!
//! let mut scans = ScanCollection::new();
//! let events = scans.channel();
//!
//! let doc = Arc::new(ScanDocument::open("scan.rgadata")?);
//! let colour = scans.add(Arc::clone(&doc));
//! assert!(matches!(events.try_recv(), Ok(CollectionEvent::Added(_))));
//!
//! scans.remove(&doc);
//! # let _ = colour;
//! # Ok::<(), rgadata::format::DecodeError>(())
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver};
use log::{debug, warn};

use crate::scan::{ScanDocument, ViewBounds};

mod observer;
mod palette;


pub use observer::{ChannelObserver, CollectionEvent, CollectionObserver, ScanEntry, SubscriptionId};
pub use palette::{ColourToken, Palette, PaletteError, DEFAULT_PALETTE};

/// Mutable ordered set of scan documents with colour assignment.
pub struct ScanCollection {
    palette: Palette,
    available: VecDeque<ColourToken>,
    entries: Vec<ScanEntry>,
    observers: Vec<(SubscriptionId, Box<dyn CollectionObserver>)>,
    next_subscription: u64,
}

impl Default for ScanCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanCollection {
    /// Empty collection using the default palette.
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    /// Empty collection drawing colours from `palette`.
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            available: palette.colours().iter().cloned().collect(),
            palette,
            entries: Vec::new(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The palette colours are drawn from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Colours currently available for assignment, front first.
    pub fn available_colours(&self) -> impl Iterator<Item = &ColourToken> {
        self.available.iter()
    }

    /// Register an observer; it receives every subsequent event.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: CollectionObserver + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Register a channel-backed observer and return its receiving end.
    pub fn channel(&mut self) -> Receiver<CollectionEvent> {
        let (sender, receiver) = unbounded();
        self.subscribe(ChannelObserver::new(sender));
        receiver
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Append a document, assigning it the front colour of the pool.
    ///
    /// Refills the pool from the full palette when it is empty; the returned
    /// colour may then duplicate one held by a current member.
    pub fn add(&mut self, document: Arc<ScanDocument>) -> ColourToken {
        if self.available.is_empty() {
            warn!(
                "All {} palette colours in use; reusing palette from the start",
                self.palette.len()
            );
            self.available = self.palette.colours().iter().cloned().collect();
        }

        // Palettes are non-empty, so the refilled pool always has a front.
        let colour = self
            .available
            .pop_front()
            .unwrap_or_else(|| self.palette.colours()[0].clone());

        let entry = ScanEntry {
            document,
            colour: colour.clone(),
        };
        debug!("Added scan '{}' with colour {}", entry.document.name(), colour);
        self.entries.push(entry.clone());
        self.emit(CollectionEvent::Added(entry));
        colour
    }

    /// Remove a member, returning its colour to the front of the pool.
    ///
    /// Removing a document that is not a member is a no-op returning `None`.
    pub fn remove(&mut self, document: &Arc<ScanDocument>) -> Option<ColourToken> {
        let index = self.position(document)?;
        let entry = self.entries.remove(index);
        self.available.push_front(entry.colour.clone());
        debug!(
            "Removed scan '{}', freed colour {}",
            entry.document.name(),
            entry.colour
        );
        let colour = entry.colour.clone();
        self.emit(CollectionEvent::Removed(entry));
        Some(colour)
    }

    /// Number of members.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection has no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Member at `index`, in insertion order.
    pub fn at(&self, index: usize) -> Option<&ScanEntry> {
        self.entries.get(index)
    }

    /// Index of `document` (by identity), if it is a member.
    pub fn position(&self, document: &Arc<ScanDocument>) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| Arc::ptr_eq(&entry.document, document))
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScanEntry> {
        self.entries.iter()
    }

    /// Plot limits covering the latest cycle of every member.
    pub fn view_bounds(&self) -> Option<ViewBounds> {
        self.entries
            .iter()
            .filter_map(|entry| entry.document.latest_bounds())
            .reduce(ViewBounds::union)
    }

    fn emit(&mut self, event: CollectionEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.notify(&event);
        }
    }
}

impl<'a> IntoIterator for &'a ScanCollection {
    type Item = &'a ScanEntry;
    type IntoIter = std::slice::Iter<'a, ScanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
