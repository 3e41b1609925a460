#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender, channel};

use jpeg_quality_lib::processing::{DecodedImage, ImageJpegCodec, JpegCodec, PixelLayout};
use jpeg_quality_lib::utils::CodecError;
use jpeg_quality_lib::{Progress, Quality};

/// Writes a small real JPEG at `dir/name`.
pub fn write_jpeg(dir: &Path, name: &str) -> PathBuf {
    let (width, height) = (24, 16);
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x * 10) as u8, (y * 15) as u8, ((x + y) * 5) as u8]);
        }
    }
    let image = DecodedImage {
        width: width as u32,
        height: height as u32,
        layout: PixelLayout::Rgb8,
        pixels,
    };

    let bytes = ImageJpegCodec
        .encode(&image, Quality::new(95).unwrap())
        .expect("fixture encodes");
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("fixture written");
    path
}

pub fn counts(updates: &[Progress]) -> Vec<(usize, usize)> {
    updates.iter().map(Progress::counts).collect()
}

/// Real codec whose decode announces itself and then blocks until released.
pub struct GatedCodec {
    entered: Mutex<Sender<()>>,
    gate: Mutex<Receiver<()>>,
}

/// Test-side controls for a [`GatedCodec`].
pub struct Gate {
    pub entered: Receiver<()>,
    pub release: Sender<()>,
}

impl Gate {
    /// Blocks until a decode has started.
    pub fn wait_entered(&self) {
        self.entered.recv().expect("worker entered decode");
    }

    /// Lets `n` decodes through.
    pub fn open(&self, n: usize) {
        for _ in 0..n {
            self.release.send(()).expect("worker still listening");
        }
    }
}

pub fn gated_codec() -> (GatedCodec, Gate) {
    let (entered_tx, entered_rx) = channel();
    let (release_tx, release_rx) = channel();
    (
        GatedCodec {
            entered: Mutex::new(entered_tx),
            gate: Mutex::new(release_rx),
        },
        Gate {
            entered: entered_rx,
            release: release_tx,
        },
    )
}

impl JpegCodec for GatedCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, CodecError> {
        let _ = self.entered.lock().unwrap().send(());
        self.gate
            .lock()
            .unwrap()
            .recv()
            .map_err(|_| CodecError("gate closed".into()))?;
        ImageJpegCodec.decode(bytes)
    }

    fn encode(&self, image: &DecodedImage, quality: Quality) -> Result<Vec<u8>, CodecError> {
        ImageJpegCodec.encode(image, quality)
    }
}
