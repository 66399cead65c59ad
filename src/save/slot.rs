use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::SaveError;
use crate::game::{BoardState, GameSession};

/// Configuration for the save slot.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SaveSlotConfig {
    pub path: PathBuf,
}

impl Default for SaveSlotConfig {
    fn default() -> Self {
        SaveSlotConfig {
            path: PathBuf::from("connect_four_save.json"),
        }
    }
}

/// Reads and writes one saved grid as JSON.
pub struct SaveSlot {
    config: SaveSlotConfig,
}

impl SaveSlot {
    pub fn new(config: SaveSlotConfig) -> Self {
        SaveSlot { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn exists(&self) -> bool {
        self.config.path.is_file()
    }

    /// Write the grid. The previous save survives any failure.
    pub fn save(&self, state: &BoardState) -> Result<(), SaveError> {
        let path = &self.config.path;
        let json = serde_json::to_string(state)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SaveError::Write {
                path: path.clone(),
                source: e,
            })?;
        }

        // Write-then-rename
        let tmp_path = tmp_path_for(path);
        fs::write(&tmp_path, json).map_err(|e| SaveError::Write {
            path: tmp_path.clone(),
            source: e,
        })?;
        fs::rename(&tmp_path, path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            SaveError::Write {
                path: path.clone(),
                source: e,
            }
        })?;

        info!(path = %path.display(), "game saved");
        Ok(())
    }

    /// Read and validate the saved grid.
    pub fn load(&self) -> Result<BoardState, SaveError> {
        let path = &self.config.path;
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SaveError::NotFound(path.clone()),
            _ => SaveError::Read {
                path: path.clone(),
                source: e,
            },
        })?;

        let state: BoardState =
            serde_json::from_str(&json).map_err(|e| SaveError::Parse {
                path: path.clone(),
                source: e,
            })?;
        state.to_board().map_err(|e| SaveError::Invalid {
            path: path.clone(),
            source: e,
        })?;

        Ok(state)
    }

    /// Load the saved grid into `session`. On any failure the session keeps
    /// its current game.
    pub fn load_into(&self, session: &mut GameSession) -> Result<(), SaveError> {
        let result = self.load().and_then(|state| {
            session.restore(&state).map_err(|e| SaveError::Invalid {
                path: self.config.path.clone(),
                source: e,
            })
        });

        match &result {
            Ok(()) => info!(path = %self.config.path.display(), "game loaded"),
            Err(e) => warn!("{e}; keeping current game"),
        }
        result
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, MoveResult, Player, COLS, ROWS};

    fn slot_in(dir: &Path) -> SaveSlot {
        SaveSlot::new(SaveSlotConfig {
            path: dir.join("save.json"),
        })
    }

    fn session_after(moves: &[usize]) -> GameSession {
        let mut session = GameSession::new();
        for &col in moves {
            session.play_column(col).unwrap();
        }
        session
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(dir.path());
        let session = session_after(&[3, 3, 2, 4, 4]);

        slot.save(&session.snapshot()).unwrap();
        assert!(slot.exists());
        assert!(!dir.path().join("save.json.tmp").exists());

        let mut loaded = GameSession::new();
        slot.load_into(&mut loaded).unwrap();
        assert_eq!(loaded.board(), session.board());
        assert_eq!(loaded.current_player(), Player::Yellow);
    }

    #[test]
    fn test_file_holds_only_the_grid() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(dir.path());
        slot.save(&session_after(&[0]).snapshot()).unwrap();

        let json = fs::read_to_string(slot.path()).unwrap();
        let grid: Vec<Vec<u8>> = serde_json::from_str(&json).unwrap();
        assert_eq!(grid.len(), ROWS);
        assert!(grid.iter().all(|row| row.len() == COLS));
        assert_eq!(grid[5][0], Cell::Red.code());
    }

    #[test]
    fn test_save_overwrites_previous() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(dir.path());
        slot.save(&session_after(&[0]).snapshot()).unwrap();
        let second = session_after(&[6, 6]);
        slot.save(&second.snapshot()).unwrap();

        assert_eq!(slot.load().unwrap(), second.snapshot());
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let slot = SaveSlot::new(SaveSlotConfig {
            path: dir.path().join("saves").join("slot.json"),
        });
        slot.save(&GameSession::new().snapshot()).unwrap();
        assert!(slot.exists());
    }

    #[test]
    fn test_missing_save_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(dir.path());
        let mut session = session_after(&[1, 2, 3]);
        let before = session.clone();

        let err = slot.load_into(&mut session).unwrap_err();
        assert!(matches!(err, SaveError::NotFound(_)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_truncated_save_keeps_session() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(dir.path());
        slot.save(&session_after(&[0, 1]).snapshot()).unwrap();
        let json = fs::read_to_string(slot.path()).unwrap();
        fs::write(slot.path(), &json[..json.len() / 2]).unwrap();

        let mut session = session_after(&[4]);
        let before = session.clone();
        let err = slot.load_into(&mut session).unwrap_err();
        assert!(matches!(err, SaveError::Parse { .. }));
        assert_eq!(session, before);
    }

    #[test]
    fn test_wrong_types_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(dir.path());
        fs::write(slot.path(), r#"{"board": "red"}"#).unwrap();
        assert!(matches!(slot.load(), Err(SaveError::Parse { .. })));

        let row = "[0,0,0,0,0,0,0]";
        let rows = vec![row; ROWS - 1].join(",");
        fs::write(slot.path(), format!("[{rows},[0,0,300,0,0,0,0]]")).unwrap();
        assert!(matches!(slot.load(), Err(SaveError::Parse { .. })));
    }

    #[test]
    fn test_invalid_board_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(dir.path());
        let row = "[0,0,0,0,0,0,0]";
        let rows = vec![row; ROWS - 1].join(",");
        fs::write(slot.path(), format!("[{rows},[0,0,3,0,0,0,0]]")).unwrap();

        let mut session = GameSession::new();
        let err = slot.load_into(&mut session).unwrap_err();
        assert!(matches!(err, SaveError::Invalid { .. }));
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_loaded_finished_game_is_over() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(dir.path());
        slot.save(&session_after(&[0, 1, 0, 1, 0, 1, 0]).snapshot())
            .unwrap();

        let mut session = GameSession::new();
        slot.load_into(&mut session).unwrap();
        assert!(session.is_terminal());
        assert_eq!(session.play_column(2).unwrap(), MoveResult::GameOver);
    }
}
