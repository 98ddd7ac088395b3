//! Render cache
//!
//! UI code tends to ask for the same few sizes of a patch over and over.
//! `RenderCache` keeps each rendered size around and hands out shared
//! `Bitmap` handles.

use crate::error::PatchResult;
use crate::ninepatch::NinePatch;
use crate::render::RenderOptions;
use log::trace;
use ninepatch_core::Bitmap;
use std::collections::HashMap;

/// Memoised renders of one [`NinePatch`]
#[derive(Debug, Clone)]
pub struct RenderCache {
    patch: NinePatch,
    options: RenderOptions,
    entries: HashMap<(u32, u32), Bitmap>,
}

impl RenderCache {
    /// Create an empty cache rendering with default options.
    pub fn new(patch: NinePatch) -> Self {
        Self::with_options(patch, RenderOptions::default())
    }

    /// Create an empty cache rendering with `options`.
    pub fn with_options(patch: NinePatch, options: RenderOptions) -> Self {
        Self {
            patch,
            options,
            entries: HashMap::new(),
        }
    }

    /// The cached patch.
    pub fn patch(&self) -> &NinePatch {
        &self.patch
    }

    /// Get the render at `width` x `height`, rendering it on first use.
    ///
    /// Failed renders are not cached.
    pub fn get(&mut self, width: u32, height: u32) -> PatchResult<Bitmap> {
        if let Some(bmp) = self.entries.get(&(width, height)) {
            trace!("render cache hit {width}x{height}");
            return Ok(bmp.clone());
        }
        let bmp = self.patch.render_with(width, height, &self.options)?;
        self.entries.insert((width, height), bmp.clone());
        Ok(bmp)
    }

    /// Whether a render of `width` x `height` is cached.
    pub fn contains(&self, width: u32, height: u32) -> bool {
        self.entries.contains_key(&(width, height))
    }

    /// Number of cached sizes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached render.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninepatch_core::Rgba;

    fn patch() -> NinePatch {
        let src = Bitmap::from_fn(5, 5, |x, y| {
            if (y == 0 && x == 2) || (x == 0 && y == 2) {
                Rgba::BLACK
            } else {
                Rgba::rgb(50, 60, 70)
            }
        })
        .unwrap();
        NinePatch::from_bitmap(&src).unwrap()
    }

    #[test]
    fn test_cache_hit_shares_buffer() {
        let mut cache = RenderCache::new(patch());
        let a = cache.get(10, 8).unwrap();
        let b = cache.get(10, 8).unwrap();
        assert_eq!(cache.len(), 1);
        // cache + a + b
        assert_eq!(a.ref_count(), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cache_errors_not_stored() {
        let mut cache = RenderCache::new(patch());
        assert!(cache.get(1, 8).is_err());
        assert!(cache.is_empty());
        assert!(!cache.contains(1, 8));
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = RenderCache::new(patch());
        cache.get(4, 4).unwrap();
        cache.get(6, 4).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
