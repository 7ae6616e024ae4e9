//! Slot-based save manager.

use super::error::SaveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, GameSave};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_SLOTS: u8 = 3;

pub struct SaveManager {
    base_dir: PathBuf,
}

impl SaveManager {
    /// Manager rooted at the default `saves/` directory.
    pub fn new() -> Self {
        Self::with_base_dir(PathBuf::from("saves"))
    }

    /// Manager rooted at an explicit directory (tests use a tempdir).
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn save_to_slot(&self, slot: u8, save: &GameSave) -> Result<(), SaveError> {
        Self::validate_slot(slot)?;
        self.save_to_path(&self.slot_path(slot), save)?;
        log::info!("game saved to slot {}", slot);
        Ok(())
    }

    pub fn load_from_slot(&self, slot: u8) -> Result<GameSave, SaveError> {
        Self::validate_slot(slot)?;
        let save = self.load_from_path(&self.slot_path(slot))?;
        log::info!("game loaded from slot {}", slot);
        Ok(save)
    }

    pub fn auto_save(&self, save: &GameSave) -> Result<(), SaveError> {
        self.save_to_path(&self.auto_save_path(), save)?;
        log::debug!("auto-save completed");
        Ok(())
    }

    pub fn load_auto_save(&self) -> Result<GameSave, SaveError> {
        self.load_from_path(&self.auto_save_path())
    }

    pub fn slot_exists(&self, slot: u8) -> bool {
        Self::validate_slot(slot).is_ok() && self.slot_path(slot).exists()
    }

    pub fn delete_slot(&self, slot: u8) -> Result<(), SaveError> {
        Self::validate_slot(slot)?;
        let path = self.slot_path(slot);
        if !path.exists() {
            return Err(SaveError::FileNotFound { path: path.display().to_string() });
        }
        fs::remove_file(path)?;
        Ok(())
    }

    fn save_to_path(&self, path: &Path, save: &GameSave) -> Result<(), SaveError> {
        let bytes = serialize_and_compress(save)?;
        fs::create_dir_all(&self.base_dir)?;

        // Write to a sibling temp file first so a crash mid-write cannot
        // truncate an existing save.
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn load_from_path(&self, path: &Path) -> Result<GameSave, SaveError> {
        if !path.exists() {
            return Err(SaveError::FileNotFound { path: path.display().to_string() });
        }
        let bytes = fs::read(path)?;
        decompress_and_deserialize(&bytes)
    }

    fn slot_path(&self, slot: u8) -> PathBuf {
        self.base_dir.join(format!("slot_{}.nxs", slot))
    }

    fn auto_save_path(&self) -> PathBuf {
        self.base_dir.join("autosave.nxs")
    }

    fn validate_slot(slot: u8) -> Result<(), SaveError> {
        if slot >= MAX_SLOTS {
            return Err(SaveError::InvalidSlot { slot });
        }
        Ok(())
    }
}

impl Default for SaveManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;

    fn manager_in_tempdir() -> (SaveManager, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (SaveManager::with_base_dir(dir.path().to_path_buf()), dir)
    }

    #[test]
    fn slot_save_load_cycle() {
        let (manager, _dir) = manager_in_tempdir();
        let save = GameState::new_campaign().to_save();

        manager.save_to_slot(0, &save).unwrap();
        assert!(manager.slot_exists(0));
        assert!(!manager.slot_exists(1));

        let loaded = manager.load_from_slot(0).unwrap();
        assert_eq!(save, loaded);
    }

    #[test]
    fn auto_save_cycle() {
        let (manager, _dir) = manager_in_tempdir();
        let save = GameState::new_campaign().to_save();
        manager.auto_save(&save).unwrap();
        assert_eq!(manager.load_auto_save().unwrap(), save);
    }

    #[test]
    fn invalid_slot_is_rejected() {
        let (manager, _dir) = manager_in_tempdir();
        let save = GameState::new_campaign().to_save();
        assert!(matches!(
            manager.save_to_slot(9, &save),
            Err(SaveError::InvalidSlot { slot: 9 })
        ));
    }

    #[test]
    fn missing_slot_reports_file_not_found() {
        let (manager, _dir) = manager_in_tempdir();
        assert!(matches!(manager.load_from_slot(2), Err(SaveError::FileNotFound { .. })));
    }

    #[test]
    fn delete_removes_the_slot() {
        let (manager, _dir) = manager_in_tempdir();
        let save = GameState::new_campaign().to_save();
        manager.save_to_slot(1, &save).unwrap();
        manager.delete_slot(1).unwrap();
        assert!(!manager.slot_exists(1));
    }
}
