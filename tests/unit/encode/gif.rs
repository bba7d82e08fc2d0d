use std::io::Cursor;

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        frame_count: 3,
        delay_cs: 20,
    }
}

#[test]
fn writes_a_decodable_animation_with_delays() {
    let mut bytes = Vec::new();
    {
        let mut sink = GifSink::new(&mut bytes);
        sink.begin(cfg(8, 6)).unwrap();
        sink.push_frame(FrameIndex(0), &Raster::filled(8, 6, [255, 0, 0, 255]))
            .unwrap();
        sink.push_frame(FrameIndex(1), &Raster::filled(8, 6, [0, 0, 255, 255]))
            .unwrap();
        sink.end().unwrap();
        assert_eq!((sink.written(), sink.dropped()), (2, 0));
    }

    let frames = GifDecoder::new(Cursor::new(bytes))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(frames.len(), 2);
    let (numer, denom) = frames[0].delay().numer_denom_ms();
    assert_eq!(numer / denom, 200);
    assert_eq!(frames[1].buffer().dimensions(), (8, 6));
}

#[test]
fn mismatched_frames_are_dropped_not_fatal() {
    let mut bytes = Vec::new();
    let mut sink = GifSink::new(&mut bytes);
    sink.begin(cfg(4, 4)).unwrap();
    sink.push_frame(FrameIndex(0), &Raster::filled(5, 4, [1, 2, 3, 255]))
        .unwrap();
    sink.push_frame(FrameIndex(1), &Raster::filled(4, 4, [1, 2, 3, 255]))
        .unwrap();
    sink.end().unwrap();
    assert_eq!((sink.written(), sink.dropped()), (1, 1));
}

#[test]
fn frames_before_begin_are_rejected() {
    let mut sink = GifSink::new(Vec::new());
    let err = sink
        .push_frame(FrameIndex(0), &Raster::new(1, 1))
        .unwrap_err();
    assert!(err.to_string().starts_with("encode error:"), "{err}");
}

#[test]
fn begin_twice_is_an_error() {
    let mut sink = GifSink::new(Vec::new());
    sink.begin(cfg(1, 1)).unwrap();
    assert!(sink.begin(cfg(1, 1)).is_err());
}

struct FullDisk;

impl Write for FullDisk {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("no space left on device"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::other("no space left on device"))
    }
}

#[test]
fn failed_writes_surface_from_end() {
    let mut sink = GifSink::new(std::io::BufWriter::new(FullDisk));
    sink.begin(cfg(4, 4)).unwrap();
    sink.push_frame(FrameIndex(0), &Raster::filled(4, 4, [1, 2, 3, 255]))
        .unwrap();
    let err = sink.end().unwrap_err();
    assert!(err.to_string().starts_with("encode error:"), "{err}");
}

#[test]
fn end_without_begin_is_an_error() {
    let mut sink = GifSink::new(Vec::new());
    assert!(sink.end().is_err());
}
