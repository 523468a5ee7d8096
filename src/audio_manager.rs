use std::{fs::File, io::Read, io::Cursor, path::Path, sync::Arc};
use rodio::{OutputStream, OutputStreamHandle, Sink, Decoder};
use rodio::Source;

fn load_bytes(path: &Path) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

/// Sound effects and background music. Every sound is optional: a missing
/// file just stays silent.
pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bg_sink: Option<Sink>,
    caught: Option<Arc<Vec<u8>>>,
    caught_volume: f32,
}

impl AudioManager {
    /// `None` when there is no output device.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        Some(Self {
            _stream,
            handle,
            bg_sink: None,
            caught: None,
            caught_volume: 0.8,
        })
    }

    pub fn load_caught(&mut self, path: &Path, volume: f32) {
        self.caught = load_bytes(path).map(Arc::new);
        self.caught_volume = volume;
        if self.caught.is_none() {
            log::warn!("caught sound {:?} not found, playing silently", path);
        }
    }

    /// Fire-and-forget: each call gets its own detached sink.
    pub fn play_caught(&self) {
        if let Some(d) = self.caught.clone() {
            if let Ok(dec) = Decoder::new(Cursor::new(d.as_ref().clone())) {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec.amplify(self.caught_volume.clamp(0.0, 1.0)));
                    sink.detach();
                }
            }
        }
    }

    pub fn play_music_loop(&mut self, path: &Path) {
        if self.bg_sink.is_some() { return; }
        let Some(bytes) = load_bytes(path) else {
            log::warn!("music {:?} not found", path);
            return;
        };
        if let Ok(dec) = Decoder::new_looped(Cursor::new(bytes)) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(dec);
                sink.set_volume(0.35);
                self.bg_sink = Some(sink);
            }
        }
    }

    pub fn stop_music(&mut self) {
        if let Some(s) = self.bg_sink.take() { s.stop(); }
    }
}
