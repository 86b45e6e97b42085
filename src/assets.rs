//! Frame assets.
//!
//! Frames are plain text blocks: the player ship (several variants for the
//! idle flicker), the hazard shapes, and the game-over banner. A compiled-in
//! set makes the binary self-contained; a directory with the same layout can
//! replace it at startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context, Result};

/// Frame families a caller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Ship,
    Hazard,
}

#[derive(Debug)]
pub struct FrameStore {
    ship: Vec<Rc<str>>,
    hazard: Vec<Rc<str>>,
    game_over: Rc<str>,
}

impl FrameStore {
    /// Compiled-in frames, used when no frames directory is given.
    pub fn builtin() -> Self {
        Self {
            ship: vec![
                Rc::from(include_str!("../frames/ship/ship_a.txt")),
                Rc::from(include_str!("../frames/ship/ship_b.txt")),
            ],
            hazard: vec![
                Rc::from(include_str!("../frames/debris/chunk.txt")),
                Rc::from(include_str!("../frames/debris/panel.txt")),
                Rc::from(include_str!("../frames/debris/strut.txt")),
                Rc::from(include_str!("../frames/debris/tank.txt")),
            ],
            game_over: Rc::from(include_str!("../frames/game_over.txt")),
        }
    }

    /// Load frames from a directory laid out as `ship/*.txt`, `debris/*.txt`
    /// and `game_over.txt`. Missing or empty pieces fail startup.
    pub fn load_dir(root: &Path) -> Result<Self> {
        let ship = read_variants(&root.join("ship"))?;
        let hazard = read_variants(&root.join("debris"))?;
        let banner_path = root.join("game_over.txt");
        let game_over = fs::read_to_string(&banner_path)
            .with_context(|| format!("reading {}", banner_path.display()))?;
        if game_over.trim().is_empty() {
            bail!("banner {} is empty", banner_path.display());
        }
        Ok(Self {
            ship,
            hazard,
            game_over: Rc::from(game_over.as_str()),
        })
    }

    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(root) => Self::load_dir(root),
            None => Ok(Self::builtin()),
        }
    }

    /// All variants of a frame family, in stable order.
    pub fn frames(&self, kind: FrameKind) -> &[Rc<str>] {
        match kind {
            FrameKind::Ship => &self.ship,
            FrameKind::Hazard => &self.hazard,
        }
    }

    pub fn game_over(&self) -> Rc<str> {
        Rc::clone(&self.game_over)
    }
}

fn read_variants(dir: &Path) -> Result<Vec<Rc<str>>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("reading frame folder {}", dir.display()))?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    // Directory order is filesystem-dependent; sort for a stable variant order.
    paths.sort();

    let mut frames = Vec::new();
    for path in paths {
        let text =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        if text.trim().is_empty() {
            bail!("frame {} is empty", path.display());
        }
        frames.push(Rc::from(text.as_str()));
    }
    if frames.is_empty() {
        bail!("no .txt frames in {}", dir.display());
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::measure;
    use std::fs;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn builtin_store_is_complete() {
        let store = FrameStore::builtin();
        assert!(!store.frames(FrameKind::Ship).is_empty());
        assert!(!store.frames(FrameKind::Hazard).is_empty());
        assert!(!store.game_over().trim().is_empty());
    }

    #[test]
    fn builtin_ship_frames_share_one_footprint() {
        // The mover sizes its collision box from the first variant, so all
        // variants must measure the same.
        let store = FrameStore::builtin();
        let frames = store.frames(FrameKind::Ship);
        let first = measure(&frames[0]);
        for frame in frames {
            assert_eq!(measure(frame), first);
        }
    }

    #[test]
    fn loads_a_directory_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("ship/b.txt"), "B");
        write(&root.join("ship/a.txt"), "A");
        write(&root.join("debris/x.txt"), "#\n#");
        write(&root.join("debris/notes.md"), "not a frame");
        write(&root.join("game_over.txt"), "END");

        let store = FrameStore::load_dir(root).unwrap();
        let ship: Vec<&str> = store
            .frames(FrameKind::Ship)
            .iter()
            .map(|f| f.as_ref())
            .collect();
        assert_eq!(ship, vec!["A", "B"]);
        assert_eq!(store.frames(FrameKind::Hazard).len(), 1);
        assert_eq!(store.game_over().as_ref(), "END");
    }

    #[test]
    fn missing_folder_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("game_over.txt"), "END");
        let err = FrameStore::load_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("ship"));
    }

    #[test]
    fn empty_folder_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("ship")).unwrap();
        write(&root.join("debris/x.txt"), "#");
        write(&root.join("game_over.txt"), "END");

        let err = FrameStore::load_dir(root).unwrap_err();
        assert!(err.to_string().contains("no .txt frames"));
    }

    #[test]
    fn blank_frame_fails_startup() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(&root.join("ship/a.txt"), "A");
        write(&root.join("debris/x.txt"), "   \n  ");
        write(&root.join("game_over.txt"), "END");

        let err = FrameStore::load_dir(root).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }
}
