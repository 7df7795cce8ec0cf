use colour_engine::Oklch;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::services::ColourStore;

/// Store key the history is saved under.
pub const RECENT_COLOURS_KEY: &str = "recentColours";

/// Maximum number of colours kept.
pub const RECENT_CAPACITY: usize = 10;

/// Recently used colours, most recent first.
///
/// Colours are unique by (l, c, h); adding a colour that is already present
/// moves it to the front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentColours {
    colours: Vec<Oklch>,
}

impl RecentColours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the history from `store`.
    ///
    /// A missing entry is an empty history. So is an entry that does not
    /// decode, after logging a warning; store failures are returned.
    /// Repeated colours in a hand-edited entry keep only their first,
    /// most recent, occurrence.
    pub fn load(store: &dyn ColourStore) -> Result<Self, StoreError> {
        let Some(value) = store.get(RECENT_COLOURS_KEY)? else {
            return Ok(Self::new());
        };

        match serde_json::from_value::<Vec<Oklch>>(value) {
            Ok(stored) => {
                let mut colours: Vec<Oklch> = Vec::with_capacity(stored.len());
                for colour in stored {
                    if !colours.iter().any(|kept| kept.same_colour(&colour)) {
                        colours.push(colour);
                    }
                }
                colours.truncate(RECENT_CAPACITY);
                tracing::debug!(count = colours.len(), "Loaded recent colours");
                Ok(Self { colours })
            }
            Err(e) => {
                tracing::warn!(%e, "Ignoring unreadable recent colours");
                Ok(Self::new())
            }
        }
    }

    pub fn save(&self, store: &dyn ColourStore) -> Result<(), StoreError> {
        store.set(RECENT_COLOURS_KEY, serde_json::to_value(&self.colours)?)
    }

    /// Put `colour` at the front, dropping any earlier copy and the oldest
    /// entry beyond capacity.
    pub fn add(&mut self, colour: Oklch) {
        self.colours.retain(|existing| !existing.same_colour(&colour));
        self.colours.insert(0, colour);
        self.colours.truncate(RECENT_CAPACITY);
    }

    pub fn list(&self) -> &[Oklch] {
        &self.colours
    }

    pub fn clear(&mut self) {
        self.colours.clear();
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}
