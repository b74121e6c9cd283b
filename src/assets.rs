//! Texture leases
//!
//! The drawing backend owns the actual GPU textures. The simulation only holds
//! a [`TextureLease`], which releases its texture on drop. A ship owns its
//! sprite lease, so replacing the ship on restart (or dropping the whole game
//! state) always hands the texture back.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Errors raised by a texture backend
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("texture not found: {0}")]
    NotFound(String),
    #[error("texture backend failure: {0}")]
    Backend(String),
}

/// Backend-assigned texture handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A loaded texture and its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

/// Loads and releases textures on behalf of the simulation
pub trait TextureBackend {
    fn load(&mut self, path: &str) -> Result<TextureInfo, AssetError>;
    fn unload(&mut self, id: TextureId);
}

/// Single-threaded shared handle to a texture backend
pub type SharedTextures = Rc<RefCell<dyn TextureBackend>>;

/// An acquired texture, released when dropped
pub struct TextureLease {
    info: TextureInfo,
    backend: SharedTextures,
}

impl TextureLease {
    pub fn acquire(backend: &SharedTextures, path: &str) -> Result<Self, AssetError> {
        let info = backend.borrow_mut().load(path)?;
        log::debug!("Acquired texture {:?} from {}", info.id, path);
        Ok(Self {
            info,
            backend: Rc::clone(backend),
        })
    }

    pub fn info(&self) -> TextureInfo {
        self.info
    }
}

impl Drop for TextureLease {
    fn drop(&mut self) {
        match self.backend.try_borrow_mut() {
            Ok(mut backend) => {
                backend.unload(self.info.id);
                log::debug!("Released texture {:?}", self.info.id);
            }
            Err(_) => log::error!("Texture backend busy, leaking {:?}", self.info.id),
        }
    }
}

impl fmt::Debug for TextureLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureLease").field("info", &self.info).finish()
    }
}

/// In-memory backend for headless runs and tests
///
/// Knows a fixed table of texture sizes and tracks which handles are live.
#[derive(Debug, Default)]
pub struct HeadlessTextures {
    sizes: HashMap<String, (u32, u32)>,
    live: HashMap<TextureId, String>,
    next_id: u32,
    pub loads: u32,
    pub unloads: u32,
}

impl HeadlessTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture path with its pixel size
    pub fn with_texture(mut self, path: &str, width: u32, height: u32) -> Self {
        self.sizes.insert(path.to_string(), (width, height));
        self
    }

    /// Number of textures currently loaded
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl TextureBackend for HeadlessTextures {
    fn load(&mut self, path: &str) -> Result<TextureInfo, AssetError> {
        let &(width, height) = self
            .sizes
            .get(path)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))?;
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.loads += 1;
        self.live.insert(id, path.to_string());
        Ok(TextureInfo { id, width, height })
    }

    fn unload(&mut self, id: TextureId) {
        if self.live.remove(&id).is_some() {
            self.unloads += 1;
        } else {
            log::warn!("Unload of unknown texture {:?}", id);
        }
    }
}
