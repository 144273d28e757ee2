//! Name-keyed animation registry.
//!
//! [`AnimationDictionary`] is filled once while assets are prepared and is
//! read-only afterwards. Sprite construction resolves a logical animation
//! name to the shared [`Animation`] handle through [`AnimationDictionary::lookup`].
//!
//! Entries keep their insertion order. Names are exact and case-sensitive;
//! when a name is registered twice the first registration keeps winning
//! lookups and the later one is only kept for [`AnimationDictionary::names`].

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use arrayvec::ArrayString;
use bevy_ecs::prelude::Resource;
use log::warn;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::resources::animation::Animation;

/// Longest accepted animation name, in characters.
pub const ANIM_NAME_MAX_CHARS: usize = 31;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("animation name is empty")]
    EmptyName,
    #[error("animation name '{0}...' is longer than 31 characters")]
    NameTooLong(String),
    #[error("animation '{0}' not found")]
    NotFound(String),
    #[error("animation has no frames")]
    NoFrames,
}

/// Validated animation name: 1 to [`ANIM_NAME_MAX_CHARS`] characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimName(ArrayString<{ ANIM_NAME_MAX_CHARS * 4 }>);

impl AnimName {
    /// Reject empty names and names over the length limit; never truncate.
    pub fn new(name: &str) -> Result<Self, AnimationError> {
        if name.is_empty() {
            return Err(AnimationError::EmptyName);
        }
        if name.chars().count() > ANIM_NAME_MAX_CHARS {
            let prefix: String = name.chars().take(ANIM_NAME_MAX_CHARS).collect();
            return Err(AnimationError::NameTooLong(prefix));
        }
        let inner = ArrayString::from(name).map_err(|_| AnimationError::NameTooLong(name.into()))?;
        Ok(AnimName(inner))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for AnimName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AnimName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry of shared animation handles keyed by [`AnimName`].
#[derive(Resource, Default)]
pub struct AnimationDictionary {
    entries: Vec<(AnimName, Arc<Animation>)>,
    /// Name to index of its first registration in `entries`.
    index: FxHashMap<AnimName, usize>,
}

impl AnimationDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias of [`new`](Self::new), pairing with [`destroy`](Self::destroy).
    pub fn create() -> Self {
        Self::new()
    }

    /// Register `animation` under `name` and return its shared handle.
    pub fn insert(
        &mut self,
        name: &str,
        animation: Animation,
    ) -> Result<Arc<Animation>, AnimationError> {
        let name = AnimName::new(name)?;
        let handle = Arc::new(animation);
        if self.index.contains_key(&name) {
            warn!("Animation '{}' registered twice; the first one wins", name);
        } else {
            self.index.insert(name, self.entries.len());
        }
        self.entries.push((name, Arc::clone(&handle)));
        Ok(handle)
    }

    /// Exact, case-sensitive lookup. `None` when nothing is registered
    /// under `name`.
    pub fn lookup(&self, name: &str) -> Option<&Arc<Animation>> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    /// Like [`lookup`](Self::lookup) but reports a miss as an error naming
    /// the animation.
    pub fn require(&self, name: &str) -> Result<Arc<Animation>, AnimationError> {
        self.lookup(name)
            .cloned()
            .ok_or_else(|| AnimationError::NotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in insertion order, shadowed duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Tear the dictionary down, releasing every entry exactly once.
    ///
    /// Returns how many entries were released. Handles still held by
    /// sprites stay alive until those sprites go away.
    pub fn destroy(self) -> usize {
        let released = self.entries.len();
        drop(self);
        released
    }
}
