//! Sound effects and background music.
//!
//! Playback is fire-and-forget. Missing files, undecodable clips and a missing
//! output device all degrade to silence; none of them reach the game loop.
//! Real playback needs the `audio` cargo feature; without it every build
//! runs silent.

use rand::Rng;
use std::path::{Path, PathBuf};

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    Jump,
    Hurt,
    Lose,
}

pub trait AudioService {
    fn play(&mut self, sfx: Sfx);
    /// Stop any playing instance of `sfx`.
    fn silence(&mut self, sfx: Sfx);
    /// Start the looping background track.
    fn start_music(&mut self);
    /// Background track volume, 0.0 to 1.0.
    fn set_music_volume(&mut self, volume: f32);
}

/// Does nothing. Used when muted, when the device is unavailable, or when
/// built without the `audio` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioService for SilentAudio {
    fn play(&mut self, _sfx: Sfx) {}
    fn silence(&mut self, _sfx: Sfx) {}
    fn start_music(&mut self) {}
    fn set_music_volume(&mut self, _volume: f32) {}
}

/// Sound files found in the sound directory; absent ones are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundFiles {
    pub jump: Option<PathBuf>,
    pub hurt: Option<PathBuf>,
    pub lose: Option<PathBuf>,
    pub music: Option<PathBuf>,
}

impl SoundFiles {
    /// Look up `jump.wav`, `lose.wav`, `background.mp3` and one of
    /// `hurt.wav`/`hurt1.wav` (picked at random, once per process).
    pub fn locate<R: Rng>(dir: &Path, rng: &mut R) -> Self {
        let hurt_name = if rng.gen::<bool>() { "hurt.wav" } else { "hurt1.wav" };
        Self {
            jump: existing(dir.join("jump.wav")),
            hurt: existing(dir.join(hurt_name)),
            lose: existing(dir.join("lose.wav")),
            music: existing(dir.join("background.mp3")),
        }
    }

    pub fn get(&self, sfx: Sfx) -> Option<&Path> {
        match sfx {
            Sfx::Jump => self.jump.as_deref(),
            Sfx::Hurt => self.hurt.as_deref(),
            Sfx::Lose => self.lose.as_deref(),
        }
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        tracing::debug!("sound {} not found, will stay silent", path.display());
        None
    }
}

/// Pick the best available audio backend.
pub fn open(sound_dir: &Path, muted: bool) -> Box<dyn AudioService> {
    if muted {
        tracing::info!("audio muted");
        return Box::new(SilentAudio);
    }

    let files = SoundFiles::locate(sound_dir, &mut rand::thread_rng());

    #[cfg(feature = "audio")]
    {
        match playback::RodioAudio::new(&files) {
            Ok(audio) => {
                tracing::info!("audio output ready");
                return Box::new(audio);
            }
            Err(e) => tracing::warn!("audio output unavailable, running silent: {}", e),
        }
    }

    #[cfg(not(feature = "audio"))]
    {
        let _ = files;
        tracing::info!("built without the `audio` feature, running silent");
    }

    Box::new(SilentAudio)
}

#[cfg(feature = "audio")]
mod playback {
    use super::{AudioService, Sfx, SoundFiles};
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
    use std::collections::HashMap;
    use std::fs;
    use std::io::Cursor;

    pub struct RodioAudio {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        clips: HashMap<Sfx, Vec<u8>>,
        music_clip: Option<Vec<u8>>,
        music: Option<Sink>,
        /// Kept so the lose jingle can be cut off on restart.
        lose: Option<Sink>,
    }

    impl RodioAudio {
        pub fn new(files: &SoundFiles) -> Result<Self, rodio::StreamError> {
            let (stream, handle) = OutputStream::try_default()?;

            let mut clips = HashMap::new();
            for sfx in [Sfx::Jump, Sfx::Hurt, Sfx::Lose] {
                if let Some(path) = files.get(sfx) {
                    match fs::read(path) {
                        Ok(bytes) => {
                            clips.insert(sfx, bytes);
                        }
                        Err(e) => tracing::warn!("could not read {}: {}", path.display(), e),
                    }
                }
            }

            let music_clip = files.music.as_ref().and_then(|path| match fs::read(path) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    tracing::warn!("could not read {}: {}", path.display(), e);
                    None
                }
            });

            Ok(Self {
                _stream: stream,
                handle,
                clips,
                music_clip,
                music: None,
                lose: None,
            })
        }
    }

    impl AudioService for RodioAudio {
        fn play(&mut self, sfx: Sfx) {
            let Some(bytes) = self.clips.get(&sfx) else {
                return;
            };
            let source = match Decoder::new(Cursor::new(bytes.clone())) {
                Ok(source) => source,
                Err(e) => {
                    tracing::warn!("dropping undecodable {:?} sound: {}", sfx, e);
                    self.clips.remove(&sfx);
                    return;
                }
            };
            let Ok(sink) = Sink::try_new(&self.handle) else {
                return;
            };
            sink.append(source);
            if sfx == Sfx::Lose {
                self.lose = Some(sink);
            } else {
                sink.detach();
            }
        }

        fn silence(&mut self, sfx: Sfx) {
            if sfx == Sfx::Lose {
                if let Some(sink) = self.lose.take() {
                    sink.stop();
                }
            }
        }

        fn start_music(&mut self) {
            let Some(bytes) = &self.music_clip else {
                return;
            };
            match Decoder::new_looped(Cursor::new(bytes.clone())) {
                Ok(source) => {
                    if let Ok(sink) = Sink::try_new(&self.handle) {
                        sink.append(source);
                        self.music = Some(sink);
                    }
                }
                Err(e) => tracing::warn!("background music undecodable: {}", e),
            }
        }

        fn set_music_volume(&mut self, volume: f32) {
            if let Some(music) = &self.music {
                music.set_volume(volume.clamp(0.0, 1.0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::fs;

    #[test]
    fn test_locate_in_missing_dir_finds_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let files = SoundFiles::locate(Path::new("/definitely/not/here"), &mut rng);
        assert_eq!(files, SoundFiles::default());
        assert!(files.get(Sfx::Jump).is_none());
    }

    #[test]
    fn test_locate_finds_present_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["jump.wav", "hurt.wav", "hurt1.wav", "lose.wav"] {
            fs::write(dir.path().join(name), b"RIFF").unwrap();
        }
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let files = SoundFiles::locate(dir.path(), &mut rng);

        assert_eq!(files.get(Sfx::Jump), Some(dir.path().join("jump.wav").as_path()));
        assert_eq!(files.get(Sfx::Lose), Some(dir.path().join("lose.wav").as_path()));
        let hurt = files.hurt.unwrap();
        assert!(hurt.ends_with("hurt.wav") || hurt.ends_with("hurt1.wav"));
        assert!(files.music.is_none());
    }

    #[test]
    fn test_muted_open_is_silent() {
        let mut audio = open(Path::new("/definitely/not/here"), true);
        audio.start_music();
        audio.play(Sfx::Jump);
        audio.set_music_volume(0.0);
        audio.silence(Sfx::Lose);
    }
}
