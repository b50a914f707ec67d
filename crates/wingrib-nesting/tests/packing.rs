use std::collections::HashSet;

use approx::assert_relative_eq;
use proptest::prelude::*;
use wingrib_core::{close_polygon, Bounds, Point, RawPart};
use wingrib_nesting::{pack_parts, unrotate_quarter_turn, LayoutResult, Rotation, SheetSpec};
use wingrib_wing::{generate_wing, to_parts, AirfoilSpec, WingSpec};

fn rect_part(id: &str, w: f64, h: f64) -> RawPart {
    let outline = close_polygon(&[
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
    ]);
    RawPart::new(id, outline, Vec::new(), id)
}

fn overlaps_with_spacing(a: &Bounds, b: &Bounds, spacing: f64) -> bool {
    let eps = 1e-9;
    a.min_x < b.max_x + spacing - eps
        && b.min_x < a.max_x + spacing - eps
        && a.min_y < b.max_y + spacing - eps
        && b.min_y < a.max_y + spacing - eps
}

fn assert_no_overlap(layout: &LayoutResult, sheet: &SheetSpec) {
    for s in &layout.sheets {
        let boxes: Vec<Bounds> = s.parts.iter().map(|p| p.sheet_bounds()).collect();
        for (i, a) in boxes.iter().enumerate() {
            assert!(a.min_x >= sheet.margin && a.min_y >= sheet.margin);
            assert!(a.max_x <= sheet.width - sheet.margin + 1e-9);
            assert!(a.max_y <= sheet.height - sheet.margin + 1e-9);
            for b in &boxes[i + 1..] {
                assert!(!overlaps_with_spacing(a, b, sheet.spacing), "{:?} vs {:?}", a, b);
            }
        }
    }
}

#[test]
fn test_sixteen_strips_fit_without_overlap() {
    let sheet = SheetSpec::new(600.0, 300.0, 10.0, 6.0);
    let parts: Vec<RawPart> = (0..16)
        .map(|i| rect_part(&format!("rib-{}", i), 150.0 - i as f64, 30.0))
        .collect();

    let layout = pack_parts(&parts, &sheet);
    assert_eq!(layout.part_count(), 16);
    assert_eq!(layout.warnings().count(), 0);
    assert_no_overlap(&layout, &sheet);
}

#[test]
fn test_sixteen_generated_ribs_fit_one_sheet() {
    // constant 150 chord at 20% thickness gives ribs of about 150x30
    let spec = WingSpec {
        root_chord: 150.0,
        tip_chord: 150.0,
        rib_count_per_half: 16,
        airfoil: AirfoilSpec {
            code: "0020".to_string(),
            ..AirfoilSpec::default()
        },
        ..WingSpec::default()
    };
    let parts = to_parts(&generate_wing(&spec).unwrap());
    let sheet = SheetSpec::new(600.0, 300.0, 10.0, 6.0);

    let layout = pack_parts(&parts, &sheet);
    assert_eq!(layout.sheets.len(), 1);
    assert_eq!(layout.part_count(), 16);
    assert_eq!(layout.warnings().count(), 0);
    assert!(layout.parts().all(|p| p.rotation == Rotation::Deg0));
    assert_no_overlap(&layout, &sheet);
}

#[test]
fn test_sheet_breaks_keep_order() {
    let sheet = SheetSpec::default();
    let parts: Vec<RawPart> = (0..12)
        .map(|i| rect_part(&format!("p{}", i), 280.0, 100.0))
        .collect();
    let layout = pack_parts(&parts, &sheet);

    // two per row, two rows per sheet
    assert_eq!(layout.sheets.len(), 3);
    for (i, s) in layout.sheets.iter().enumerate() {
        assert_eq!(s.index, i);
        assert_eq!(s.parts.len(), 4);
        assert!(s.parts.iter().all(|p| p.sheet_index == i));
    }
    let ids: Vec<String> = layout.parts().map(|p| p.id.clone()).collect();
    let expected: Vec<String> = (0..12).map(|i| format!("p{}", i)).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_rotation_inverse_restores_outline() {
    let outline = close_polygon(&[
        Point::new(5.0, 5.0),
        Point::new(25.0, 8.0),
        Point::new(22.0, 405.0),
        Point::new(7.0, 390.0),
    ]);
    let part = RawPart::new("odd", outline.clone(), Vec::new(), "odd");
    let layout = pack_parts(&[part], &SheetSpec::default());
    let placed = &layout.sheets[0].parts[0];
    assert_eq!(placed.rotation, Rotation::Deg90);

    let b = Bounds::of_points(&outline);
    let w0 = b.width();
    for (got, original) in placed.outline.iter().zip(&outline) {
        let back = unrotate_quarter_turn(*got, w0);
        assert_relative_eq!(back.x, original.x - b.min_x, epsilon = 1e-9);
        assert_relative_eq!(back.y, original.y - b.min_y, epsilon = 1e-9);
    }
}

proptest! {
    #[test]
    fn every_part_placed_once(dims in prop::collection::vec((1.0..700.0f64, 1.0..400.0f64), 0..40)) {
        let parts: Vec<RawPart> = dims
            .iter()
            .enumerate()
            .map(|(i, (w, h))| rect_part(&format!("p{}", i), *w, *h))
            .collect();
        let layout = pack_parts(&parts, &SheetSpec::default());

        prop_assert_eq!(layout.part_count(), parts.len());
        let ids: HashSet<&str> = layout.parts().map(|p| p.id.as_str()).collect();
        prop_assert_eq!(ids.len(), parts.len());
        for s in &layout.sheets {
            prop_assert!(!s.parts.is_empty());
        }
    }
}
