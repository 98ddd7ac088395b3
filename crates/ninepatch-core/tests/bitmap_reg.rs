//! Bitmap regression test
//!
//! Checks clipping and rectangle copies against per-pixel reads, and the
//! shared/exclusive ownership handoff.

use ninepatch_core::{Bitmap, BitmapMut, Error, Rect, Rgba};
use ninepatch_test::{RegParams, content_pixel};

#[test]
fn bitmap_reg() {
    let mut rp = RegParams::new("bitmap");
    let bmp = Bitmap::from_fn(17, 11, content_pixel).unwrap();

    // --- Clip matches direct pixel reads ---
    for rect in [
        Rect::new(0, 0, 17, 11),
        Rect::new(3, 2, 5, 7),
        Rect::new(16, 10, 1, 1),
        Rect::new(4, 0, 0, 11),
    ] {
        let sub = bmp.clip_rect(&rect).unwrap();
        rp.compare_values(rect.w as f64, sub.width() as f64, 0.0);
        rp.compare_values(rect.h as f64, sub.height() as f64, 0.0);
        let expected =
            Bitmap::from_fn(rect.w, rect.h, |x, y| content_pixel(rect.x + x, rect.y + y)).unwrap();
        rp.compare_bitmaps(&expected, &sub);
    }

    // --- Copying the pieces back reassembles the bitmap ---
    let mut canvas = BitmapMut::new(17, 11).unwrap();
    for rect in [
        Rect::new(0, 0, 9, 4),
        Rect::new(9, 0, 8, 4),
        Rect::new(0, 4, 17, 7),
    ] {
        canvas.copy_rect(rect.x, rect.y, &bmp, &rect).unwrap();
    }
    let canvas: Bitmap = canvas.into();
    rp.compare_bitmaps(&bmp, &canvas);

    assert!(rp.cleanup(), "bitmap regression test failed");
}

#[test]
fn test_clip_outside_fails() {
    let bmp = Bitmap::new(4, 4).unwrap();
    for rect in [Rect::new(3, 0, 2, 1), Rect::new(0, 4, 1, 1), Rect::new(u32::MAX, 0, 2, 1)] {
        assert!(matches!(bmp.clip_rect(&rect), Err(Error::OutOfBounds { .. })));
    }
}

#[test]
fn test_shared_bitmap_is_copied_on_write() {
    let bmp = Bitmap::from_fn(3, 3, content_pixel).unwrap();
    let shared = bmp.clone();
    assert_eq!(bmp.ref_count(), 2);

    let bmp = bmp.try_into_mut().unwrap_err();
    let mut copy = bmp.to_mut();
    copy.set_pixel(1, 1, Rgba::WHITE).unwrap();
    assert_eq!(shared.pixel(1, 1), Some(content_pixel(1, 1)));

    drop(shared);
    let mut owned = bmp.try_into_mut().unwrap();
    owned.fill(Rgba::BLACK);
    let owned: Bitmap = owned.into();
    assert!(owned.pixels().all(|px| px.is_marker()));
}

#[test]
fn test_from_raw_length_checked() {
    assert!(matches!(
        Bitmap::from_raw(2, 2, vec![0; 15]),
        Err(Error::BufferSizeMismatch { expected: 16, actual: 15 })
    ));
    let bmp = Bitmap::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(bmp.pixel(1, 0), Some(Rgba::new(5, 6, 7, 8)));
    assert_eq!(bmp.pixel(2, 0), None);
}
