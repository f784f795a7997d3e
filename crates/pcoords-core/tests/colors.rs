// File: crates/pcoords-core/tests/colors.rs
// Purpose: Validate the color-resolution contract (count, precedence, cycling).

use pcoords_core::{resolve_colors, PcoordsError, Rgba, DEFAULT_PALETTE};

#[test]
fn default_palette_in_order() {
    let colors = resolve_colors(3, None, None).expect("resolve");
    assert_eq!(colors, DEFAULT_PALETTE[..3].to_vec());
}

#[test]
fn default_palette_cycles_past_its_length() {
    let n = DEFAULT_PALETTE.len() + 2;
    let colors = resolve_colors(n, None, None).expect("resolve");
    assert_eq!(colors.len(), n);
    assert_eq!(colors[DEFAULT_PALETTE.len()], DEFAULT_PALETTE[0]);
    assert_eq!(colors[DEFAULT_PALETTE.len() + 1], DEFAULT_PALETTE[1]);
}

#[test]
fn explicit_palette_cycles() {
    let palette = vec![Rgba::rgb(1, 2, 3), Rgba::rgb(4, 5, 6)];
    let colors = resolve_colors(5, Some(&palette), None).expect("resolve");
    assert_eq!(colors, vec![palette[0], palette[1], palette[0], palette[1], palette[0]]);
}

#[test]
fn explicit_palette_wins_over_colormap() {
    let palette = vec![Rgba::rgb(9, 9, 9)];
    let colors = resolve_colors(2, Some(&palette), Some("viridis")).expect("resolve");
    assert_eq!(colors, vec![palette[0], palette[0]]);
}

#[test]
fn colormap_sampling_hits_endpoints() {
    let colors = resolve_colors(5, None, Some("viridis")).expect("resolve");
    assert_eq!(colors.len(), 5);
    assert_eq!(colors[0], Rgba::rgb(68, 1, 84));
    assert_eq!(colors[4], Rgba::rgb(253, 231, 37));
}

#[test]
fn gray_colormap_two_classes() {
    let colors = resolve_colors(2, None, Some("gray")).expect("resolve");
    assert_eq!(colors, vec![Rgba::rgb(0, 0, 0), Rgba::rgb(255, 255, 255)]);
}

#[test]
fn single_class_colormap_uses_start() {
    let colors = resolve_colors(1, None, Some("gray")).expect("resolve");
    assert_eq!(colors, vec![Rgba::rgb(0, 0, 0)]);
}

#[test]
fn colormap_name_is_case_insensitive() {
    let a = resolve_colors(3, None, Some("Viridis")).expect("resolve");
    let b = resolve_colors(3, None, Some("viridis")).expect("resolve");
    assert_eq!(a, b);
}

#[test]
fn empty_palette_rejected() {
    let err = resolve_colors(2, Some(&[]), None).unwrap_err();
    assert!(matches!(err, PcoordsError::EmptyPalette));
}

#[test]
fn unknown_colormap_rejected() {
    let err = resolve_colors(2, None, Some("sunburst")).unwrap_err();
    assert!(matches!(err, PcoordsError::UnknownColormap { ref name } if name == "sunburst"));
}
