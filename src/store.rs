//! Owned, lock-guarded album collection.
//!
//! All access to the catalog goes through [`AlbumStore`]; handlers never touch
//! the underlying `Vec` directly.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::album::{seed_albums, Album};

#[derive(Debug, Default)]
pub struct AlbumStore {
    albums: Mutex<Vec<Album>>,
}

impl AlbumStore {
    pub fn new(albums: Vec<Album>) -> Self {
        AlbumStore {
            albums: Mutex::new(albums),
        }
    }

    /// A store holding the three seed albums.
    pub fn seeded() -> Self {
        Self::new(seed_albums())
    }

    /// Snapshot of every album in insertion order.
    pub fn list(&self) -> Vec<Album> {
        self.albums().clone()
    }

    /// First album whose id matches exactly. Ids are not unique, so later
    /// duplicates are never returned.
    pub fn get(&self, id: &str) -> Option<Album> {
        self.albums().iter().find(|album| album.id == id).cloned()
    }

    /// Appends and returns the catalog size including the new album.
    pub fn append(&self, album: Album) -> usize {
        let mut albums = self.albums();
        albums.push(album);
        albums.len()
    }

    pub fn count(&self) -> usize {
        self.albums().len()
    }

    // A panic while holding the guard cannot leave the Vec half-written.
    fn albums(&self) -> MutexGuard<'_, Vec<Album>> {
        self.albums.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
