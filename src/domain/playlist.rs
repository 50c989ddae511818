use crate::error::{DeckError, Result};
use serde::Serialize;

/// A playlist entry. Nothing is actually played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Track {
    pub id: u32,
    pub title: &'static str,
    pub artist: &'static str,
    pub duration: &'static str,
}

pub static PLAYLIST: [Track; 3] = [
    Track {
        id: 1,
        title: "Focus Flow",
        artist: "Study Beats",
        duration: "03:45",
    },
    Track {
        id: 2,
        title: "Deep Concentration",
        artist: "Mind Tunes",
        duration: "04:20",
    },
    Track {
        id: 3,
        title: "Ambient Work",
        artist: "Productivity",
        duration: "05:15",
    },
];

const DEFAULT_VOLUME: u8 = 50;
const MAX_VOLUME: u8 = 100;

/// Transport state for the music widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MusicPlayer {
    playing: bool,
    current: usize,
    volume: u8,
}

impl MusicPlayer {
    pub fn new() -> Self {
        Self {
            playing: false,
            current: 0,
            volume: DEFAULT_VOLUME,
        }
    }

    pub fn playlist(&self) -> &'static [Track] {
        &PLAYLIST
    }

    pub fn current_track(&self) -> &'static Track {
        &PLAYLIST[self.current]
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Jumps to the track and starts playing it
    pub fn select_track(&mut self, id: u32) -> Result<()> {
        self.current = PLAYLIST
            .iter()
            .position(|track| track.id == id)
            .ok_or(DeckError::TrackNotFound(id))?;
        self.playing = true;
        Ok(())
    }

    pub fn next_track(&mut self) {
        self.current = (self.current + 1) % PLAYLIST.len();
        self.playing = true;
    }

    pub fn previous_track(&mut self) {
        self.current = (self.current + PLAYLIST.len() - 1) % PLAYLIST.len();
        self.playing = true;
    }

    pub fn set_volume(&mut self, volume: u8) -> Result<()> {
        if volume > MAX_VOLUME {
            return Err(DeckError::InvalidVolume(volume));
        }
        self.volume = volume;
        Ok(())
    }
}

impl Default for MusicPlayer {
    fn default() -> Self {
        Self::new()
    }
}
