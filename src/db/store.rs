use log::{info, warn};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::db::seed;
use crate::models::bookings::Booking;
use crate::models::content::{CmsContent, CmsUpdate};
use crate::models::rate::RateRule;
use crate::models::room::Room;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
    Poisoned,
    Blocking(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "Storage I/O error: {}", err),
            StoreError::Serialization(err) => write!(f, "Storage serialization error: {}", err),
            StoreError::Poisoned => write!(f, "Storage lock poisoned"),
            StoreError::Blocking(err) => write!(f, "Storage task failed: {}", err),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err)
    }
}

/// All collections owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSnapshot {
    pub rooms: Vec<Room>,
    pub rates: Vec<RateRule>,
    /// Newest first
    pub bookings: Vec<Booking>,
    pub cms: CmsContent,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            rooms: seed::initial_rooms(),
            rates: Vec::new(),
            bookings: Vec::new(),
            cms: seed::initial_cms(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Collection {
    Rooms,
    Rates,
    Bookings,
    Cms,
}

impl Collection {
    fn file_name(&self) -> &'static str {
        match self {
            Collection::Rooms => "rooms.json",
            Collection::Rates => "rates.json",
            Collection::Bookings => "bookings.json",
            Collection::Cms => "cms.json",
        }
    }
}

/// Repository for rooms, rates, bookings and site content.
///
/// With a data directory every collection is loaded from its own JSON file on
/// open and rewritten whenever it changes. A mutation only becomes visible
/// once its file has been written.
pub struct Store {
    data_dir: Option<PathBuf>,
    state: RwLock<StoreSnapshot>,
}

impl Store {
    pub fn in_memory(snapshot: StoreSnapshot) -> Self {
        Self {
            data_dir: None,
            state: RwLock::new(snapshot),
        }
    }

    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, StoreError> {
        let dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let seed = StoreSnapshot::default();
        let snapshot = StoreSnapshot {
            rooms: load_or(&dir, Collection::Rooms, seed.rooms)?,
            rates: load_or(&dir, Collection::Rates, seed.rates)?,
            bookings: load_or(&dir, Collection::Bookings, seed.bookings)?,
            cms: load_or(&dir, Collection::Cms, seed.cms)?,
        };

        info!(
            "Loaded store from {}: {} rooms, {} rate rules, {} bookings",
            dir.display(),
            snapshot.rooms.len(),
            snapshot.rates.len(),
            snapshot.bookings.len()
        );

        Ok(Self {
            data_dir: Some(dir),
            state: RwLock::new(snapshot),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreSnapshot>, StoreError> {
        self.state.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreSnapshot>, StoreError> {
        self.state.write().map_err(|_| StoreError::Poisoned)
    }

    fn persist<T: Serialize>(&self, collection: Collection, value: &T) -> Result<(), StoreError> {
        let Some(dir) = &self.data_dir else {
            return Ok(());
        };

        let path = dir.join(collection.file_name());
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    pub fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        Ok(self.read()?.clone())
    }

    pub fn rooms(&self) -> Result<Vec<Room>, StoreError> {
        Ok(self.read()?.rooms.clone())
    }

    pub fn room(&self, id: &str) -> Result<Option<Room>, StoreError> {
        Ok(self.read()?.rooms.iter().find(|r| r.id == id).cloned())
    }

    pub fn add_room(&self, room: Room) -> Result<(), StoreError> {
        let mut state = self.write()?;
        let mut rooms = state.rooms.clone();
        rooms.push(room);
        self.persist(Collection::Rooms, &rooms)?;
        state.rooms = rooms;
        Ok(())
    }

    /// Returns false when no room had the given id.
    pub fn delete_room(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.write()?;
        let rooms: Vec<Room> = state.rooms.iter().filter(|r| r.id != id).cloned().collect();
        if rooms.len() == state.rooms.len() {
            return Ok(false);
        }
        self.persist(Collection::Rooms, &rooms)?;
        state.rooms = rooms;
        Ok(true)
    }

    pub fn rates(&self) -> Result<Vec<RateRule>, StoreError> {
        Ok(self.read()?.rates.clone())
    }

    /// Replaces every existing rule sharing a (date, room type) pair with the
    /// incoming rules, which are appended in their given order.
    pub fn update_rates(&self, new_rates: Vec<RateRule>) -> Result<(), StoreError> {
        let mut state = self.write()?;
        let mut rates: Vec<RateRule> = state
            .rates
            .iter()
            .filter(|existing| {
                !new_rates
                    .iter()
                    .any(|incoming| existing.matches(incoming.date, incoming.room_type))
            })
            .cloned()
            .collect();
        rates.extend(new_rates);
        self.persist(Collection::Rates, &rates)?;
        state.rates = rates;
        Ok(())
    }

    pub fn bookings(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(self.read()?.bookings.clone())
    }

    pub fn add_booking(&self, booking: Booking) -> Result<(), StoreError> {
        let mut state = self.write()?;
        let mut bookings = Vec::with_capacity(state.bookings.len() + 1);
        bookings.push(booking);
        bookings.extend(state.bookings.iter().cloned());
        self.persist(Collection::Bookings, &bookings)?;
        state.bookings = bookings;
        Ok(())
    }

    pub fn cms(&self) -> Result<CmsContent, StoreError> {
        Ok(self.read()?.cms.clone())
    }

    pub fn update_cms(&self, update: CmsUpdate) -> Result<CmsContent, StoreError> {
        let mut state = self.write()?;
        let mut cms = state.cms.clone();
        cms.apply(update);
        self.persist(Collection::Cms, &cms)?;
        state.cms = cms.clone();
        Ok(cms)
    }
}

/// Runs a store call on the blocking thread pool. Mutations rewrite their
/// collection file under the write lock, so async handlers go through here.
pub async fn blocking<F, T>(store: &Arc<Store>, f: F) -> Result<T, StoreError>
where
    F: FnOnce(&Store) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || f(&store))
        .await
        .map_err(|err| StoreError::Blocking(err.to_string()))?
}

fn load_or<T: DeserializeOwned>(
    dir: &Path,
    collection: Collection,
    fallback: T,
) -> Result<T, StoreError> {
    let path = dir.join(collection.file_name());
    if !path.exists() {
        warn!("{} not found, starting from seed data", path.display());
        return Ok(fallback);
    }
    let bytes = fs::read(&path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
