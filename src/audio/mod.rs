//! Audio module - background music playback via rodio.

pub mod playlist;

pub use playlist::MusicPlaylist;
