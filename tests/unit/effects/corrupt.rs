use super::*;
use crate::buffer::raster::Raster;

#[test]
fn corruptions_paint_only_the_corruption_color() {
    let px = [10, 10, 10, 255];
    let mut buf = PixelBuffer::from_source(Raster::filled(300, 300, px));
    random_corruptions(&mut buf, &mut GlitchRng::new(6), false);

    let painted = buf
        .output
        .pixels()
        .filter(|&(_, _, p)| p == CORRUPTION_COLOR)
        .count();
    assert!(painted > 0);
    assert!(
        buf.output
            .pixels()
            .all(|(_, _, p)| p == px || p == CORRUPTION_COLOR)
    );
}

#[test]
fn shifted_color_corruption_uses_rotated_source() {
    let px = [10, 20, 30, 255];
    let mut buf = PixelBuffer::from_source(Raster::filled(300, 300, px));
    random_corruptions(&mut buf, &mut GlitchRng::new(6), true);
    assert!(buf.output.pixels().any(|(_, _, p)| p == [20, 30, 10, 255]));
    assert!(buf.output.pixels().all(|(_, _, p)| p[3] == 255));
}

#[test]
fn small_images_get_empty_rectangles() {
    // Below 100 pixels on a side the size bound rounds to zero.
    let mut buf = PixelBuffer::from_source(Raster::filled(50, 50, [1, 2, 3, 4]));
    random_corruptions(&mut buf, &mut GlitchRng::new(6), false);
    assert_eq!(&buf.output, buf.source());
}
