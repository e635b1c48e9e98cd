// File: crates/skycast-core/tests/graph_path.rs
// Purpose: Validate chart path geometry: endpoints, padding band, degenerate series.

use skycast_core::path::{graph_path, ChartPathBuilder};
use skycast_core::sample::{Sample, Series};
use skycast_core::types::{Extent, Y_PADDING};

fn series_of(values: &[f64]) -> Series {
    Series::new(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Sample::new(format!("h{i}"), v))
            .collect(),
    )
}

#[test]
fn endpoints_span_full_width() {
    let series = series_of(&[3.0, 7.0, 5.0, 9.0]);
    let extent = Extent::new(640.0, 200.0);
    let desc = graph_path(&series, extent);

    let first = desc.markers.first().unwrap();
    let last = desc.markers.last().unwrap();
    assert!((first.x - 0.0).abs() < 1e-9);
    assert!((last.x - extent.width).abs() < 1e-9);

    // x strictly increasing across the series
    for pair in desc.markers.windows(2) {
        assert!(pair[1].x > pair[0].x);
    }
}

#[test]
fn single_sample_sits_at_origin_x() {
    let desc = graph_path(&series_of(&[42.0]), Extent::new(300.0, 100.0));
    assert_eq!(desc.markers.len(), 1);
    assert_eq!(desc.markers[0].x, 0.0);
    assert!(desc.d.starts_with("M0,"));
}

#[test]
fn flat_series_maps_to_mid_band() {
    let extent = Extent::new(400.0, 120.0);
    let desc = graph_path(&series_of(&[55.0, 55.0, 55.0, 55.0]), extent);

    let expected = extent.height - Y_PADDING - 0.5 * (extent.height - 2.0 * Y_PADDING);
    for m in &desc.markers {
        assert!((m.y - expected).abs() < 1e-9, "y={} expected={}", m.y, expected);
    }
}

#[test]
fn min_and_max_values_hit_band_edges() {
    let extent = Extent::new(500.0, 150.0);
    let desc = graph_path(&series_of(&[12.0, 30.0, 18.0, 5.0, 22.0]), extent);

    let lowest = desc
        .markers
        .iter()
        .min_by(|a, b| a.value.partial_cmp(&b.value).unwrap())
        .unwrap();
    let highest = desc
        .markers
        .iter()
        .max_by(|a, b| a.value.partial_cmp(&b.value).unwrap())
        .unwrap();

    // Minimum value maps to the bottom of the padded band, maximum to the top.
    assert!((lowest.y - (extent.height - Y_PADDING)).abs() < 1e-9);
    assert!((highest.y - Y_PADDING).abs() < 1e-9);
}

#[test]
fn empty_series_yields_empty_descriptor() {
    let desc = graph_path(&Series::default(), Extent::default());
    assert!(desc.is_empty());
    assert!(desc.d.is_empty());
    assert!(desc.markers.is_empty());
}

#[test]
fn reference_scenario_exact_coordinates() {
    // Values 60/70/50 on a 300x100 surface with padding 20:
    // min=50, max=70, range=20, band=60.
    let desc = graph_path(&series_of(&[60.0, 70.0, 50.0]), Extent::new(300.0, 100.0));

    let xs: Vec<f64> = desc.markers.iter().map(|m| m.x).collect();
    let ys: Vec<f64> = desc.markers.iter().map(|m| m.y).collect();
    assert_eq!(xs, vec![0.0, 150.0, 300.0]);
    assert_eq!(ys, vec![50.0, 20.0, 80.0]);

    assert_eq!(
        desc.d,
        "M0,50 C75,50 75,20 150,20 C225,20 225,80 300,80 L300,100 L0,100 Z"
    );
}

#[test]
fn build_is_idempotent() {
    let series = series_of(&[1.0, 4.0, 2.0, 8.0, 3.0]);
    let extent = Extent::new(320.0, 180.0);
    let builder = ChartPathBuilder::default();
    assert_eq!(builder.build(&series, extent), builder.build(&series, extent));
}

#[test]
fn resize_rescales_geometry_not_data() {
    let series = series_of(&[10.0, 40.0, 25.0, 55.0]);
    let small = graph_path(&series, Extent::new(300.0, 100.0));
    let large = graph_path(&series, Extent::new(600.0, 100.0));

    for (s, l) in small.markers.iter().zip(&large.markers) {
        // Doubling the width doubles every x; values and labels are untouched.
        assert!((l.x - 2.0 * s.x).abs() < 1e-9);
        assert_eq!(l.value, s.value);
        assert_eq!(l.label, s.label);
    }

    // Normalized vertical position is extent-independent.
    let tall = graph_path(&series, Extent::new(300.0, 260.0));
    for (s, t) in small.markers.iter().zip(&tall.markers) {
        let norm_s = (100.0 - Y_PADDING - s.y) / (100.0 - 2.0 * Y_PADDING);
        let norm_t = (260.0 - Y_PADDING - t.y) / (260.0 - 2.0 * Y_PADDING);
        assert!((norm_s - norm_t).abs() < 1e-9);
    }
}

#[test]
fn filled_path_stays_inside_extent() {
    let extent = Extent::new(300.0, 100.0);
    let desc = graph_path(&series_of(&[60.0, 70.0, 50.0, 65.0]), extent);
    for m in &desc.markers {
        assert!(m.x >= 0.0 && m.x <= extent.width);
        assert!(m.y >= Y_PADDING && m.y <= extent.height - Y_PADDING);
    }
    assert!(desc.d.ends_with("Z"));
}
