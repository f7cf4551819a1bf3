//! Background music playlist.
//!
//! Tracks are numbered files (`theme1.mp3`, `theme2.mp3`, ...) in the assets
//! directory, played in order through a rodio sink. When a track ends the
//! playlist advances; when the next numbered file is missing it wraps back
//! to track 1. Missing or undecodable audio is never an error: playback is
//! simply disabled and the game runs silent.
//!
//! The playlist is owned by the application shell, not the game logic:
//! `start` when the game begins, `poll` once per loop iteration, and the
//! stream closes on drop.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use rodio::{Decoder, OutputStream, Sink};

const MUSIC_VOLUME: f32 = 0.6;

/// Pick the track to play after `current` ends.
///
/// Prefers `current + 1`, falls back to track 1 when that file is missing,
/// and returns None when not even track 1 exists.
pub fn next_track(current: u32, exists: impl Fn(u32) -> bool) -> Option<u32> {
    if exists(current + 1) {
        Some(current + 1)
    } else if exists(1) {
        Some(1)
    } else {
        None
    }
}

/// File name of the numbered track.
pub fn track_name(index: u32) -> String {
    format!("theme{index}.mp3")
}

pub struct MusicPlaylist {
    assets_dir: PathBuf,
    current: u32,
    sink: Option<Sink>,
    // The stream must outlive the sink or playback stops.
    _stream: Option<OutputStream>,
}

impl MusicPlaylist {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            current: 1,
            sink: None,
            _stream: None,
        }
    }

    fn track_path(&self, index: u32) -> PathBuf {
        self.assets_dir.join(track_name(index))
    }

    fn track_exists(&self, index: u32) -> bool {
        self.track_path(index).is_file()
    }

    /// Open the default output device and play track 1.
    ///
    /// Failures (no device, no files) disable playback with a warning.
    pub fn start(&mut self) {
        match OutputStream::try_default() {
            Ok((stream, handle)) => match Sink::try_new(&handle) {
                Ok(sink) => {
                    sink.set_volume(MUSIC_VOLUME);
                    self._stream = Some(stream);
                    self.sink = Some(sink);
                    self.current = 1;
                    if !self.queue_current() {
                        log::warn!("no playable music tracks in {:?}", self.assets_dir);
                        self.disable();
                    }
                }
                Err(e) => log::warn!("audio sink unavailable: {e}"),
            },
            Err(e) => log::warn!("audio output unavailable: {e}"),
        }
    }

    pub fn playing(&self) -> bool {
        self.sink.is_some()
    }

    /// Advance the playlist when the current track has finished.
    pub fn poll(&mut self) {
        let finished = match &self.sink {
            Some(sink) => sink.empty(),
            None => return,
        };
        if !finished {
            return;
        }

        match next_track(self.current, |i| self.track_exists(i)) {
            Some(index) => {
                self.current = index;
                if !self.queue_current() {
                    log::warn!("music track {} failed to play", track_name(index));
                    self.disable();
                }
            }
            None => {
                log::warn!("music tracks disappeared, stopping playback");
                self.disable();
            }
        }
    }

    /// Decode the current track into the sink. False when open/decode fails.
    fn queue_current(&mut self) -> bool {
        let Some(sink) = &self.sink else {
            return false;
        };
        let path = self.track_path(self.current);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("cannot open {:?}: {e}", path);
                return false;
            }
        };
        match Decoder::new(BufReader::new(file)) {
            Ok(source) => {
                sink.append(source);
                log::info!("playing {}", track_name(self.current));
                true
            }
            Err(e) => {
                log::warn!("cannot decode {:?}: {e}", path);
                false
            }
        }
    }

    fn disable(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self._stream = None;
    }

    pub fn stop(&mut self) {
        self.disable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_track_advances_in_order() {
        let exists = |i: u32| i <= 3;
        assert_eq!(next_track(1, exists), Some(2));
        assert_eq!(next_track(2, exists), Some(3));
    }

    #[test]
    fn test_next_track_wraps_past_last() {
        let exists = |i: u32| i <= 3;
        assert_eq!(next_track(3, exists), Some(1));
    }

    #[test]
    fn test_next_track_none_when_no_files() {
        assert_eq!(next_track(1, |_| false), None);
    }

    #[test]
    fn test_single_track_loops_on_itself() {
        let exists = |i: u32| i == 1;
        assert_eq!(next_track(1, exists), Some(1));
    }

    #[test]
    fn test_track_names_are_numbered() {
        assert_eq!(track_name(1), "theme1.mp3");
        assert_eq!(track_name(12), "theme12.mp3");
    }

    #[test]
    fn test_playlist_without_device_stays_silent() {
        // Never started: poll is a no-op and playing() is false.
        let mut playlist = MusicPlaylist::new("assets");
        assert!(!playlist.playing());
        playlist.poll();
        playlist.stop();
        assert!(!playlist.playing());
    }
}
