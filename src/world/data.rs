//! Level data structures and text file loading.
//!
//! A level file is a list of `<type> <x> <y>` records, one per line, where
//! `type` is one of `coin`, `spike`, `enemy` or `flag`. Each collection is
//! capacity-bounded; excess records are dropped with a warning.

use bevy::prelude::*;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::LevelLoadError;
use super::geometry::{Bounded, GameObject};
use crate::core::GameConfig;

/// The kind of object a level record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Coin,
    Spike,
    Enemy,
    Flag,
}

impl ObjectKind {
    /// Parse a record type token. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "coin" => Some(ObjectKind::Coin),
            "spike" => Some(ObjectKind::Spike),
            "enemy" => Some(ObjectKind::Enemy),
            "flag" => Some(ObjectKind::Flag),
            _ => None,
        }
    }

    /// Side length of objects of this kind.
    pub fn size(&self, config: &GameConfig) -> f32 {
        match self {
            ObjectKind::Coin => config.coin_size,
            ObjectKind::Spike => config.spike_size,
            ObjectKind::Enemy => config.enemy_size,
            ObjectKind::Flag => config.flag_size,
        }
    }
}

/// One parsed `<type> <x> <y>` line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRecord {
    /// `None` for type tokens the game does not know. Such records are skipped.
    pub kind: Option<ObjectKind>,
    pub x: f32,
    pub y: f32,
}

impl LevelRecord {
    /// Parse a single line. Returns `None` unless it holds exactly three
    /// tokens with numeric coordinates.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let kind = tokens.next()?;
        let x = parse_coordinate(tokens.next()?)?;
        let y = parse_coordinate(tokens.next()?)?;
        if tokens.next().is_some() {
            return None;
        }
        Some(Self {
            kind: ObjectKind::from_token(kind),
            x,
            y,
        })
    }
}

/// A finite decimal number. `NaN` and infinities are rejected.
fn parse_coordinate(token: &str) -> Option<f32> {
    token.parse::<f32>().ok().filter(|value| value.is_finite())
}

/// The static contents of one level, as read from its file.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub spikes: Bounded<GameObject>,
    pub coins: Bounded<GameObject>,
    pub enemies: Bounded<GameObject>,
    /// Last `flag` record wins. Empty when the file has none.
    pub flag: GameObject,
    /// Records dropped because their collection was full.
    pub dropped: usize,
}

impl LevelLayout {
    /// An empty layout with the configured capacities.
    pub fn empty(config: &GameConfig) -> Self {
        Self {
            spikes: Bounded::with_capacity(config.max_spikes),
            coins: Bounded::with_capacity(config.max_coins),
            enemies: Bounded::with_capacity(config.max_enemies),
            flag: GameObject::default(),
            dropped: 0,
        }
    }

    /// Parse level text. Blank lines are skipped; the first malformed line
    /// ends parsing and everything read before it is kept.
    pub fn parse(contents: &str, config: &GameConfig) -> Self {
        let mut layout = Self::empty(config);

        for (number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some(record) = LevelRecord::parse(line) else {
                let stop = LevelLoadError::MalformedRecord {
                    line: number + 1,
                    content: line.trim().to_string(),
                };
                warn!("{}; ignoring the rest of the file", stop);
                break;
            };
            layout.add(record, config);
        }

        if layout.dropped > 0 {
            warn!("Dropped {} record(s) over capacity", layout.dropped);
        }
        layout
    }

    /// Place one record. Full collections and unknown kinds ignore it.
    pub fn add(&mut self, record: LevelRecord, config: &GameConfig) {
        let Some(kind) = record.kind else {
            return;
        };
        let object = GameObject::square(record.x, record.y, kind.size(config));
        let stored = match kind {
            ObjectKind::Coin => self.coins.push(object),
            ObjectKind::Spike => self.spikes.push(object),
            ObjectKind::Enemy => self.enemies.push(object),
            ObjectKind::Flag => {
                self.flag = object;
                true
            }
        };
        if !stored {
            self.dropped += 1;
        }
    }

    pub fn has_flag(&self) -> bool {
        !self.flag.is_empty()
    }
}

/// Where level text comes from.
pub trait LevelSource: Send + Sync {
    /// Read the raw text of level `level`.
    fn read_level(&self, level: u32) -> Result<String, LevelLoadError>;
}

/// Reads `level<n>.txt` files from a directory.
#[derive(Debug, Clone)]
pub struct LevelDirectory {
    root: PathBuf,
}

impl LevelDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File name for a level number, e.g. `level1.txt`.
    pub fn file_name(level: u32) -> String {
        format!("level{}.txt", level)
    }

    pub fn path_for(&self, level: u32) -> PathBuf {
        self.root.join(Self::file_name(level))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LevelSource for LevelDirectory {
    fn read_level(&self, level: u32) -> Result<String, LevelLoadError> {
        let path = self.path_for(level);
        fs::read_to_string(&path).map_err(|e| {
            let path = path.display().to_string();
            if e.kind() == ErrorKind::NotFound {
                LevelLoadError::FileNotFound(path)
            } else {
                LevelLoadError::ReadError {
                    path,
                    details: e.to_string(),
                }
            }
        })
    }
}

/// Read and parse a level from `source`.
pub fn load_level(
    source: &dyn LevelSource,
    level: u32,
    config: &GameConfig,
) -> Result<LevelLayout, LevelLoadError> {
    let contents = source.read_level(level)?;
    let layout = LevelLayout::parse(&contents, config);
    info!(
        "Loaded level {}: {} coin(s), {} spike(s), {} enemy(ies), flag: {}",
        level,
        layout.coins.len(),
        layout.spikes.len(),
        layout.enemies.len(),
        layout.has_flag()
    );
    Ok(layout)
}


#[cfg(test)]
mod tests {
    use super::testing::InMemoryLevels;
    use super::*;

    #[test]
    fn test_record_parsing() {
        let record = LevelRecord::parse("coin 150 480").unwrap();
        assert_eq!(record.kind, Some(ObjectKind::Coin));
        assert_eq!((record.x, record.y), (150.0, 480.0));

        let record = LevelRecord::parse("  spike\t300.5   460 ").unwrap();
        assert_eq!(record.kind, Some(ObjectKind::Spike));
        assert_eq!(record.x, 300.5);

        let unknown = LevelRecord::parse("ladder 1 2").unwrap();
        assert_eq!(unknown.kind, None);
    }

    #[test]
    fn test_record_rejects_wrong_shapes() {
        assert!(LevelRecord::parse("coin 150").is_none());
        assert!(LevelRecord::parse("coin 150 480 9").is_none());
        assert!(LevelRecord::parse("coin x 480").is_none());
        assert!(LevelRecord::parse("coin 150 y").is_none());
    }

    #[test]
    fn test_non_finite_coordinates_end_parsing() {
        assert!(LevelRecord::parse("coin NaN 480").is_none());
        assert!(LevelRecord::parse("coin 150 inf").is_none());
        assert!(LevelRecord::parse("coin -infinity 480").is_none());

        let config = GameConfig::default();
        let layout = LevelLayout::parse("coin 150 480\ncoin NaN 480\ncoin 200 480\n", &config);
        assert_eq!(layout.coins.len(), 1);
    }

    #[test]
    fn test_each_kind_gets_its_size() {
        let config = GameConfig::default();
        let layout = LevelLayout::parse(
            "coin 150 480\nspike 300 460\nenemy 250 460\nflag 700 460\n",
            &config,
        );
        assert_eq!(layout.coins.as_slice(), &[GameObject::square(150.0, 480.0, 20.0)]);
        assert_eq!(layout.spikes.as_slice(), &[GameObject::square(300.0, 460.0, 40.0)]);
        assert_eq!(layout.enemies.as_slice(), &[GameObject::square(250.0, 460.0, 40.0)]);
        assert_eq!(layout.flag, GameObject::square(700.0, 460.0, 40.0));
        assert_eq!(layout.dropped, 0);
    }

    #[test]
    fn test_capacity_overflow_is_dropped() {
        let config = GameConfig::default();
        let mut text = String::new();
        for i in 0..4 {
            text.push_str(&format!("spike {} 460\n", i * 50));
        }
        for i in 0..12 {
            text.push_str(&format!("coin {} 400\n", i * 30));
        }
        let layout = LevelLayout::parse(&text, &config);
        assert_eq!(layout.spikes.len(), 2);
        assert_eq!(layout.coins.len(), 10);
        assert_eq!(layout.spikes.get(1).unwrap().x, 50.0);
        assert_eq!(layout.coins.get(9).unwrap().x, 270.0);
        assert_eq!(layout.dropped, 4);
    }

    #[test]
    fn test_last_flag_wins() {
        let config = GameConfig::default();
        let layout = LevelLayout::parse("flag 100 100\nflag 700 460\n", &config);
        assert_eq!(layout.flag.x, 700.0);
        assert_eq!(layout.flag.y, 460.0);
    }

    #[test]
    fn test_unknown_types_are_ignored() {
        let config = GameConfig::default();
        let layout = LevelLayout::parse("cloud 10 10\ncoin 150 480\n", &config);
        assert_eq!(layout.coins.len(), 1);
        assert!(!layout.has_flag());
    }

    #[test]
    fn test_parsing_stops_at_malformed_line() {
        let config = GameConfig::default();
        let layout = LevelLayout::parse(
            "coin 150 480\n\ncoin 200 480\ncoin oops\ncoin 250 480\n",
            &config,
        );
        assert_eq!(layout.coins.len(), 2);
        assert_eq!(layout.coins.get(1).unwrap().x, 200.0);
    }

    #[test]
    fn test_missing_level_is_an_error() {
        let config = GameConfig::default();
        let source = InMemoryLevels::default().with_level(1, "coin 150 480");
        assert!(load_level(&source, 1, &config).is_ok());
        assert!(matches!(
            load_level(&source, 2, &config),
            Err(LevelLoadError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_directory_names_files_by_level() {
        let dir = LevelDirectory::new("assets/levels");
        assert_eq!(dir.path_for(2), PathBuf::from("assets/levels/level2.txt"));
    }

    #[test]
    fn test_directory_reports_missing_file() {
        let dir = LevelDirectory::new("definitely/not/a/real/dir");
        match dir.read_level(1) {
            Err(LevelLoadError::FileNotFound(path)) => assert!(path.ends_with("level1.txt")),
            other => panic!("expected FileNotFound, got {:?}", other.map(|_| ())),
        }
    }
}
