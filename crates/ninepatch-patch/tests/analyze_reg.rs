//! Analyzer regression test
//!
//! Marker runs placed at known offsets must come back as exactly those
//! offsets, and inconsistent borders must be rejected.

use ninepatch_core::{Bitmap, Rgba};
use ninepatch_patch::{
    ContentPadding, Edge, MalformedPatch, PatchError, PatchGeometry, analyze, analyze_info,
    analyze_raw, strip_border,
};
use ninepatch_test::{PatchBuilder, RegParams};

#[test]
fn analyze_reg() {
    let mut rp = RegParams::new("analyze");

    // --- Test 1: every single top run on a 9-wide content ---
    let cw = 9;
    for o in 0..cw {
        for k in 1..=(cw - o) {
            let src = PatchBuilder::new(cw, 3).stretch_x(o, k).build();
            let g = analyze(&src).expect("analyze top run");
            rp.compare_values(o as f64, g.stretch_left() as f64, 0.0);
            rp.compare_values((cw - o - k) as f64, g.stretch_right() as f64, 0.0);
            rp.compare_values(0.0, (g.stretch_top() + g.stretch_bottom()) as f64, 0.0);
        }
    }

    // --- Test 2: every single left run on a 6-high content ---
    let ch = 6;
    for o in 0..ch {
        for k in 1..=(ch - o) {
            let src = PatchBuilder::new(2, ch).stretch_y(o, k).build();
            let g = analyze(&src).expect("analyze left run");
            rp.compare_values(o as f64, g.stretch_top() as f64, 0.0);
            rp.compare_values((ch - o - k) as f64, g.stretch_bottom() as f64, 0.0);
        }
    }

    // --- Test 3: both axes plus padding ---
    let src = PatchBuilder::new(10, 8)
        .stretch_x(3, 2)
        .stretch_y(1, 5)
        .padding_x(2, 6)
        .padding_y(1, 4)
        .build();
    let info = analyze_info(&src).expect("analyze_info");
    rp.compare_values(10.0, info.content_width as f64, 0.0);
    rp.compare_values(8.0, info.content_height as f64, 0.0);
    assert_eq!(info.geometry, PatchGeometry::new(3, 5, 1, 2));
    assert_eq!(
        info.padding,
        ContentPadding {
            left: 2,
            right: 2,
            top: 1,
            bottom: 3
        }
    );

    // --- Test 4: the stripped content matches the builder's content ---
    let content = strip_border(&src).expect("strip_border");
    rp.compare_bitmaps(&PatchBuilder::new(10, 8).content(), &content);

    assert!(rp.cleanup(), "analyze regression test failed");
}

#[test]
fn test_disjoint_runs_on_each_edge() {
    let cases = [
        (PatchBuilder::new(8, 4).stretch_x(0, 2).stretch_x(4, 1), Edge::Top),
        (PatchBuilder::new(4, 8).stretch_y(1, 1).stretch_y(3, 1), Edge::Left),
        (
            PatchBuilder::new(8, 4).stretch_x(1, 1).padding_x(0, 1).padding_x(7, 1),
            Edge::Bottom,
        ),
        (
            PatchBuilder::new(4, 8).stretch_y(0, 8).padding_y(2, 2).padding_y(5, 3),
            Edge::Right,
        ),
    ];
    for (builder, edge) in cases {
        let err = analyze(&builder.build()).unwrap_err();
        match err {
            PatchError::Malformed(MalformedPatch::DisjointRuns { edge: e, .. }) => {
                assert_eq!(e, edge)
            }
            other => panic!("expected disjoint runs on {edge}, got {other:?}"),
        }
    }
}

#[test]
fn test_adjacent_runs_merge() {
    // Two builder runs that touch form one contiguous run
    let src = PatchBuilder::new(8, 2).stretch_x(1, 2).stretch_x(3, 2).build();
    assert_eq!(analyze(&src).unwrap(), PatchGeometry::new(1, 3, 0, 0));
}

#[test]
fn test_translucent_marker_color() {
    let src = PatchBuilder::new(5, 5)
        .stretch_x(2, 1)
        .marker_color(Rgba::new(0, 0, 0, 1))
        .build();
    assert_eq!(analyze(&src).unwrap(), PatchGeometry::new(2, 2, 0, 0));
}

#[test]
fn test_non_black_border_is_not_a_marker() {
    let src = PatchBuilder::new(5, 5)
        .stretch_x(2, 1)
        .marker_color(Rgba::rgb(0, 0, 1))
        .build();
    assert!(matches!(
        analyze(&src),
        Err(PatchError::Malformed(MalformedPatch::NoMarkers))
    ));
}

#[test]
fn test_padding_only_is_accepted() {
    let src = PatchBuilder::new(5, 5).padding_x(1, 3).build();
    let info = analyze_info(&src).unwrap();
    assert_eq!(info.geometry, PatchGeometry::uniform());
    assert_eq!(info.padding.left, 1);
    assert_eq!(info.padding.right, 1);
}

#[test]
fn test_too_small_sources() {
    for (w, h) in [(0, 0), (2, 2), (3, 2), (2, 3), (1, 10)] {
        let src = Bitmap::new(w, h).unwrap();
        assert!(
            matches!(
                analyze(&src),
                Err(PatchError::Malformed(MalformedPatch::TooSmall { .. }))
            ),
            "{w}x{h}"
        );
    }
}

#[test]
fn test_analyze_raw_matches_bitmap() {
    let src = PatchBuilder::new(6, 6).stretch_x(2, 2).stretch_y(1, 4).build();
    let raw = analyze_raw(src.data(), 8, 8).unwrap();
    assert_eq!(raw, analyze(&src).unwrap());
}
