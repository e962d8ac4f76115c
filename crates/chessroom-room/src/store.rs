//! Room store: owns every live room, keyed by code.

use std::collections::HashMap;
use std::sync::Arc;

use chessroom_protocol::RoomCode;
use tokio::sync::{Mutex, RwLock};

use crate::{CodeGenerator, RandomCodeGenerator, Room, RoomError, StoreConfig};

/// Shared handle to one room. Lock it to read or mutate the room.
pub type RoomHandle = Arc<Mutex<Room>>;

/// The process-wide collection of live rooms.
///
/// Two levels of locking:
/// - the map itself sits behind an `RwLock`, held only long enough to
///   look up, insert, or remove an entry;
/// - each room has its own `Mutex`, so work on one room never waits on
///   another.
///
/// Whoever needs both takes the room lock first, then the map lock. The
/// map lock is never held while waiting on a room.
///
/// Built once at startup and shared behind an `Arc`; nothing here is
/// global, so tests can run as many independent stores as they like.
pub struct RoomStore {
    /// Live rooms, keyed by code.
    rooms: RwLock<HashMap<RoomCode, RoomHandle>>,

    generator: Box<dyn CodeGenerator>,

    config: StoreConfig,
}

impl RoomStore {
    /// Creates an empty store that draws random codes.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_generator(config, RandomCodeGenerator)
    }

    /// Creates an empty store with a custom code generator.
    pub fn with_generator(config: StoreConfig, generator: impl CodeGenerator) -> Self {
        Self::with_boxed_generator(config, Box::new(generator))
    }

    /// Like [`with_generator`](Self::with_generator), for a generator
    /// that is already boxed.
    pub fn with_boxed_generator(config: StoreConfig, generator: Box<dyn CodeGenerator>) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            generator,
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns a code that no live room is using right now.
    ///
    /// The answer can go stale as soon as the read lock is released;
    /// [`create`](Self::create) repeats the search under the write lock
    /// so the code it hands out is reserved atomically.
    pub async fn generate_unique_code(&self) -> Result<RoomCode, RoomError> {
        let rooms = self.rooms.read().await;
        self.unique_code(&rooms)
    }

    /// Inserts `room` under a freshly generated code and returns the code.
    ///
    /// # Errors
    /// [`RoomError::CodeSpaceExhausted`] if no unique code turned up
    /// within `config.max_code_attempts` tries.
    pub async fn create(&self, room: Room) -> Result<RoomCode, RoomError> {
        let mut rooms = self.rooms.write().await;
        let code = self.unique_code(&rooms)?;
        rooms.insert(code.clone(), Arc::new(Mutex::new(room)));
        tracing::info!(room = %code, live = rooms.len(), "room created");
        Ok(code)
    }

    /// Looks up a room by code.
    ///
    /// The handle stays valid after the room is deleted, but a deleted
    /// room is always vacant; callers check
    /// [`Room::is_vacant`](crate::Room::is_vacant) after locking.
    pub async fn get(&self, code: &RoomCode) -> Result<RoomHandle, RoomError> {
        self.rooms
            .read()
            .await
            .get(code)
            .cloned()
            .ok_or_else(|| RoomError::NotFound(code.clone()))
    }

    /// Removes a room. Does nothing if the code isn't live.
    pub async fn delete(&self, code: &RoomCode) {
        let mut rooms = self.rooms.write().await;
        if rooms.remove(code).is_some() {
            tracing::info!(room = %code, live = rooms.len(), "room deleted");
        }
    }

    /// Removes the entry for `code` only if it still points at `handle`.
    ///
    /// Used when a room empties out: the caller holds the room's lock and
    /// must not remove a different room that happens to carry the same
    /// code. Returns `true` if the entry was removed.
    pub async fn delete_if_current(&self, code: &RoomCode, handle: &RoomHandle) -> bool {
        let mut rooms = self.rooms.write().await;
        match rooms.get(code) {
            Some(live) if Arc::ptr_eq(live, handle) => {
                rooms.remove(code);
                tracing::info!(room = %code, live = rooms.len(), "room deleted");
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if a room with this code is live.
    pub async fn contains(&self, code: &RoomCode) -> bool {
        self.rooms.read().await.contains_key(code)
    }

    /// Returns the number of live rooms.
    pub async fn len(&self) -> usize {
        self.rooms.read().await.len()
    }

    /// Returns `true` if there are no live rooms.
    pub async fn is_empty(&self) -> bool {
        self.rooms.read().await.is_empty()
    }

    /// Lists all live room codes, sorted.
    pub async fn codes(&self) -> Vec<RoomCode> {
        let mut codes: Vec<RoomCode> = self.rooms.read().await.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Draws codes until one isn't in `live`.
    fn unique_code(&self, live: &HashMap<RoomCode, RoomHandle>) -> Result<RoomCode, RoomError> {
        let attempts = self.config.max_code_attempts;
        for attempt in 1..=attempts {
            let code = self.generator.generate(self.config.code_length);
            if !live.contains_key(&code) {
                return Ok(code);
            }
            tracing::warn!(room = %code, attempt, "room code collision, retrying");
        }
        tracing::error!(attempts, live = live.len(), "room code space exhausted");
        Err(RoomError::CodeSpaceExhausted { attempts })
    }
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl std::fmt::Debug for RoomStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
