//! End-to-end pipeline tests: source strings in, PNG pixels out.

use bro_browser::render_to_png;

#[test]
fn fixed_width_centered_block_lands_where_the_width_solver_predicts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("centered.png");

    let _ = render_to_png(
        "<div>hi</div>",
        Some("div { width: 100px; height: 10px; background-color: red; }"),
        &out,
    )
    .unwrap();

    let image = image::open(&out).unwrap().into_rgba8();
    // Unspecified margins fall back to 0px (not auto), so a 100px-wide
    // block is left-aligned: red from x=0, white past x=100.
    assert_eq!(*image.get_pixel(0, 0), image::Rgba([255, 0, 0, 255]));
    assert_eq!(*image.get_pixel(350, 0), image::Rgba([255, 255, 255, 255]));
}

#[test]
fn stacked_siblings_do_not_overlap() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("stacked.png");

    let _ = render_to_png(
        "<div><p>a</p><p>b</p></div>",
        Some(
            "div { width: 50px; } \
             p { height: 10px; background-color: green; margin-bottom: 5px; }",
        ),
        &out,
    )
    .unwrap();

    let image = image::open(&out).unwrap().into_rgba8();
    // Unspecified margins fall back to 0px (not auto), so the 50px-wide
    // div is left-aligned at x=0.
    assert_eq!(*image.get_pixel(0, 0), image::Rgba([0, 128, 0, 255]));
    assert_eq!(*image.get_pixel(0, 9), image::Rgba([0, 128, 0, 255]));
    assert_eq!(*image.get_pixel(0, 10), image::Rgba([255, 255, 255, 255])); // margin gap
    assert_eq!(*image.get_pixel(0, 15), image::Rgba([0, 128, 0, 255]));
}

#[test]
fn malformed_html_still_produces_an_image() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("malformed.png");

    let result = render_to_png("<div><p>unclosed", None, &out).unwrap();
    assert!(!result.html_errors.is_empty());
    assert!(out.exists());
}
