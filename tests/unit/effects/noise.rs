use super::*;
use crate::buffer::raster::Raster;

#[test]
fn noise_output_is_opaque_and_close_to_input() {
    let px = [128, 128, 128, 255];
    let mut src = Raster::filled(32, 32, px);
    src.set(0, 0, [0, 0, 0, 0]);
    let mut buf = PixelBuffer::from_source(src);
    noise(&mut buf, &mut GlitchRng::new(11), [0xc0, 0xff, 0xee, 255]);

    for (x, y, p) in buf.output.pixels() {
        assert_eq!(p[3], 255);
        if (x, y) != (0, 0) {
            for i in 0..3 {
                assert!((i32::from(p[i]) - 128).abs() <= 30, "{p:?} at {x},{y}");
            }
        }
    }
}

#[test]
fn black_tint_never_brightens() {
    let px = [200, 200, 200, 255];
    let mut buf = PixelBuffer::from_source(Raster::filled(16, 16, px));
    noise(&mut buf, &mut GlitchRng::new(2), [0, 0, 0, 255]);
    for (_, _, p) in buf.output.pixels() {
        assert!(p[0] <= 201 && p[1] <= 201 && p[2] <= 201, "{p:?}");
    }
}

#[test]
fn noise_consumes_four_draws_per_pixel() {
    let mut buf = PixelBuffer::from_source(Raster::filled(3, 2, [10, 20, 30, 255]));
    let mut rng = GlitchRng::new(8);
    noise(&mut buf, &mut rng, [255, 255, 255, 255]);

    let mut replay = GlitchRng::new(8);
    for _ in 0..(3 * 2 * 4) {
        replay.float64();
    }
    assert_eq!(rng.float64(), replay.float64());
}

#[test]
fn gaussian_noise_keeps_mid_gray_on_average() {
    let mut buf = PixelBuffer::from_source(Raster::filled(64, 64, [128, 128, 128, 255]));
    gaussian_noise(&mut buf, &mut GlitchRng::new(5));

    let total: u64 = buf.output.pixels().map(|(_, _, p)| u64::from(p[0])).sum();
    let mean = total as f64 / (64.0 * 64.0);
    assert!((mean - 128.0).abs() < 3.0, "mean {mean}");
    assert!(buf.output.pixels().all(|(_, _, p)| p[3] == 255));
    assert!(buf.output.pixels().any(|(_, _, p)| p[0] != 128));
}

#[test]
fn gaussian_noise_gives_transparent_pixels_partial_alpha() {
    let mut buf = PixelBuffer::from_source(Raster::new(4, 4));
    gaussian_noise(&mut buf, &mut GlitchRng::new(5));
    for (_, _, p) in buf.output.pixels() {
        assert!((88..=90).contains(&p[3]), "{p:?}");
        assert!(p[0] <= p[3]);
    }
}
