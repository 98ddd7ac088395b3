//! NinePatch - an analyzed, ready-to-render source
//!
//! Holds the content image (border removed), what the analyzer read from
//! the border, and the source partition, so that repeated renders of one
//! source only compute the target side.

use crate::analyze::{analyze_info, strip_border};
use crate::error::{MalformedPatch, PatchResult};
use crate::geometry::{ContentPadding, PatchGeometry, PatchInfo};
use crate::partition::{Partition, Region};
use crate::render::{RenderOptions, compose};
use ninepatch_core::{Bitmap, Rect};

/// An analyzed nine-patch source
///
/// Cloning is cheap: the content bitmap is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NinePatch {
    content: Bitmap,
    info: PatchInfo,
    source: Partition,
}

impl NinePatch {
    /// Analyze a bordered source image.
    ///
    /// # Errors
    ///
    /// Fails with the same conditions as [`analyze_info`].
    pub fn from_bitmap(src: &Bitmap) -> PatchResult<Self> {
        let info = analyze_info(src)?;
        let content = strip_border(src)?;
        Self::from_parts(content, info.geometry, info.padding)
    }

    /// Build from a border-less content image and a known geometry.
    ///
    /// # Errors
    ///
    /// - [`MalformedPatch::TooSmall`] if `content` has no pixel on either
    ///   axis (reported with the size the bordered source would have)
    /// - a malformed-geometry error if `geometry` does not fit the content
    pub fn from_parts(
        content: Bitmap,
        geometry: PatchGeometry,
        padding: ContentPadding,
    ) -> PatchResult<Self> {
        if content.is_empty() {
            return Err(MalformedPatch::TooSmall {
                width: content.width().saturating_add(2),
                height: content.height().saturating_add(2),
            }
            .into());
        }
        let source = Partition::source(&geometry, content.width(), content.height())?;
        let info = PatchInfo {
            geometry,
            padding,
            content_width: content.width(),
            content_height: content.height(),
        };
        Ok(Self {
            content,
            info,
            source,
        })
    }

    /// The content image, without the marker border.
    pub fn content(&self) -> &Bitmap {
        &self.content
    }

    /// Stretch geometry.
    pub fn geometry(&self) -> &PatchGeometry {
        &self.info.geometry
    }

    /// Content padding.
    pub fn padding(&self) -> &ContentPadding {
        &self.info.padding
    }

    /// Everything read from the border.
    pub fn info(&self) -> &PatchInfo {
        &self.info
    }

    /// Source-side partition of the content image.
    pub fn source_partition(&self) -> &Partition {
        &self.source
    }

    /// Smallest `(width, height)` this patch can render at.
    pub fn min_size(&self) -> (u32, u32) {
        self.info.geometry.min_size()
    }

    /// Render at `width` x `height` with default options.
    pub fn render(&self, width: u32, height: u32) -> PatchResult<Bitmap> {
        self.render_with(width, height, &RenderOptions::default())
    }

    /// Render at `width` x `height`.
    pub fn render_with(
        &self,
        width: u32,
        height: u32,
        options: &RenderOptions,
    ) -> PatchResult<Bitmap> {
        let target = Partition::target(&self.info.geometry, width, height)?;
        compose(&self.content, &self.source, &target, options, None)
    }

    /// Render, handing each source cell to `hook` first.
    pub fn render_with_hook<F>(
        &self,
        width: u32,
        height: u32,
        options: &RenderOptions,
        mut hook: F,
    ) -> PatchResult<Bitmap>
    where
        F: FnMut(Region, &Bitmap),
    {
        let target = Partition::target(&self.info.geometry, width, height)?;
        let hook: &mut dyn FnMut(Region, &Bitmap) = &mut hook;
        compose(&self.content, &self.source, &target, options, Some(hook))
    }

    /// Content area of a render at `width` x `height`.
    ///
    /// The padding insets are fixed, so the content area grows with the
    /// render. It collapses to zero size rather than going negative when
    /// the padding exceeds the render.
    pub fn content_rect(&self, width: u32, height: u32) -> Rect {
        let pad = &self.info.padding;
        let x = pad.left.min(width);
        let y = pad.top.min(height);
        Rect::new(
            x,
            y,
            width.saturating_sub(pad.left).saturating_sub(pad.right),
            height.saturating_sub(pad.top).saturating_sub(pad.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatchError;
    use ninepatch_core::Rgba;

    fn bubble() -> Bitmap {
        // 6x6 content; stretch band 2..4 on both axes; padding 1 on all sides
        Bitmap::from_fn(8, 8, |x, y| {
            let top = y == 0 && (3..5).contains(&x);
            let left = x == 0 && (3..5).contains(&y);
            let bottom = y == 7 && (2..6).contains(&x);
            let right = x == 7 && (2..6).contains(&y);
            if top || left || bottom || right {
                Rgba::BLACK
            } else if x == 0 || y == 0 || x == 7 || y == 7 {
                Rgba::TRANSPARENT
            } else {
                Rgba::rgb(x as u8, y as u8, 200)
            }
        })
        .unwrap()
    }

    #[test]
    fn test_from_bitmap() {
        let patch = NinePatch::from_bitmap(&bubble()).unwrap();
        assert_eq!(*patch.geometry(), PatchGeometry::new(2, 2, 2, 2));
        assert_eq!(
            *patch.padding(),
            ContentPadding {
                left: 1,
                right: 1,
                top: 1,
                bottom: 1
            }
        );
        assert_eq!(patch.content().size(), (6, 6));
        assert_eq!(patch.min_size(), (4, 4));
    }

    #[test]
    fn test_render_matches_free_function() {
        let src = bubble();
        let patch = NinePatch::from_bitmap(&src).unwrap();
        let a = patch.render(20, 11).unwrap();
        let b = crate::render(&src, patch.geometry(), 20, 11).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_content_rect() {
        let patch = NinePatch::from_bitmap(&bubble()).unwrap();
        assert_eq!(patch.content_rect(20, 10), Rect::new(1, 1, 18, 8));
        assert_eq!(patch.content_rect(1, 1), Rect::new(1, 1, 0, 0));
    }

    #[test]
    fn test_from_parts_rejects_bad_geometry() {
        let content = Bitmap::new(4, 4).unwrap();
        let res = NinePatch::from_parts(
            content,
            PatchGeometry::new(0, 0, 4, 1),
            ContentPadding::default(),
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_from_parts_rejects_empty_content() {
        for (w, h) in [(0, 3), (3, 0), (0, 0)] {
            let res = NinePatch::from_parts(
                Bitmap::new(w, h).unwrap(),
                PatchGeometry::uniform(),
                ContentPadding::default(),
            );
            match res {
                Err(PatchError::Malformed(MalformedPatch::TooSmall { width, height })) => {
                    assert_eq!((width, height), (w + 2, h + 2));
                }
                other => panic!("expected TooSmall, got {other:?}"),
            }
        }
    }
}
