use super::*;
use crate::buffer::raster::Raster;

#[test]
fn ghost_of_flat_color_stays_close() {
    let px = [90, 160, 30, 255];
    let mut buf = PixelBuffer::from_source(Raster::filled(24, 24, px));
    ghost(&mut buf, &mut GlitchRng::new(13)).unwrap();

    for (_, _, p) in buf.output.pixels() {
        assert_eq!(p[3], 255);
        for i in 0..3 {
            assert!((i32::from(p[i]) - i32::from(px[i])).abs() <= 40, "{p:?}");
        }
    }
}

#[test]
fn ghost_leaves_the_trailing_margin_alone() {
    let mut src = Raster::filled(20, 20, [0, 0, 0, 255]);
    src.fill_rect(0, 0, 20, 10, [255, 255, 255, 255]);
    let mut buf = PixelBuffer::from_source(src.clone());
    ghost_tint(&mut buf, &mut GlitchRng::new(21)).unwrap();

    for y in 0..20 {
        for x in 15..20 {
            assert_eq!(buf.output.at(x, y), src.at(x, y));
        }
    }
}

#[test]
fn ghost_stretch_on_short_image_is_a_no_op() {
    let mut src = Raster::new(30, 9);
    src.set(4, 4, [10, 20, 30, 255]);
    let mut buf = PixelBuffer::from_source(src);
    ghost_stretch(&mut buf, &mut GlitchRng::new(1));
    assert_eq!(&buf.output, buf.source());
}

#[test]
fn ghost_stretch_of_flat_opaque_image_is_exact() {
    let mut buf = PixelBuffer::from_source(Raster::filled(100, 100, [33, 66, 99, 255]));
    ghost_stretch(&mut buf, &mut GlitchRng::new(77));
    assert_eq!(&buf.output, buf.source());
}

fn gradient(w: u32, h: u32) -> Raster {
    let mut r = Raster::new(w, h);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            r.set(x, y, [x as u8, y as u8, 0, 255]);
        }
    }
    r
}

#[test]
fn ghost_stretch_layers_diagonal_copies_outside_the_first_margin() {
    let src = gradient(200, 200);
    let mut checked = 0;
    for seed in 0..64 {
        // Replay the effect's draws: ghost count, dx, dy, alpha.
        let mut draws = GlitchRng::new(seed);
        let ghosts = draws.intn(20) as i32 + 1;
        let step = 200 / ghosts;
        let dx = draws.intn(i64::from(step)) as i32 - step * 2;
        let dy = draws.intn(i64::from(step)) as i32 - step * 2;
        let alpha = draws.intn(127);
        let (mx, my) = (-dx, -dy);
        if ghosts < 2 || alpha < 64 || mx >= 200 || my >= 200 {
            continue;
        }

        let mut buf = PixelBuffer::from_source(src.clone());
        ghost_stretch(&mut buf, &mut GlitchRng::new(seed));

        for (x, y, p) in buf.output.pixels() {
            if x < mx || y < my {
                assert_eq!(p, src.at(x, y), "seed {seed} margin ({x},{y})");
            }
        }
        // The first layer puts the black corner (0,0) over (mx,my).
        let before = src.at(mx, my);
        let after = buf.output.at(mx, my);
        assert!(
            after[0] < before[0] && after[1] < before[1],
            "seed {seed}: {before:?} -> {after:?}"
        );
        assert_eq!(after[3], 255);
        checked += 1;
    }
    assert!(checked > 0);
}
