//! Persisted best score
//!
//! A single non-negative counter stored in LocalStorage: read once at
//! startup, written whenever a run ends above the previous best.

use serde::{Deserialize, Serialize};

/// Best score achieved across sessions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_high_score";

    pub fn new(best: u32) -> Self {
        Self { best }
    }

    /// A score qualifies only when it strictly beats the stored best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished run. Returns true when it set a new best.
    pub fn update(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        true
    }

    /// Whether `score` is the current record (drives the "New High Score!"
    /// banner: the just-finished run equals the best and actually scored)
    pub fn is_record(&self, score: u32) -> bool {
        score == self.best && score > 0
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(score) = serde_json::from_str::<HighScore>(&json) {
                    log::info!("Loaded high score: {}", score.best);
                    return score;
                }
            }
        }

        log::info!("No stored high score, starting from 0");
        Self::default()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High score saved: {}", self.best);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_only_on_strict_improvement() {
        let mut hs = HighScore::new(5);
        assert!(!hs.update(4));
        assert!(!hs.update(5));
        assert_eq!(hs.best, 5);

        assert!(hs.update(6));
        assert_eq!(hs.best, 6);
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut hs = HighScore::default();
        assert!(!hs.update(0));
        assert_eq!(hs.best, 0);
    }

    #[test]
    fn test_record_banner_condition() {
        let mut hs = HighScore::new(2);
        hs.update(3);
        assert!(hs.is_record(3));
        // A later run that merely ties the best is not a new record run,
        // but the banner condition only compares the final score
        assert!(!hs.is_record(2));

        let empty = HighScore::default();
        assert!(!empty.is_record(0));
    }

    #[test]
    fn test_roundtrip_json() {
        let hs = HighScore::new(17);
        let json = serde_json::to_string(&hs).unwrap();
        let back: HighScore = serde_json::from_str(&json).unwrap();
        assert_eq!(back.best, 17);
    }
}
