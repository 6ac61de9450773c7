//! Level records, the stock levels and user-authored level packs
//!
//! A `Level` is read-only while a session runs. The editor works on a copy
//! and hands back a whole new level on reset.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ParkerError, Result};
use crate::sim::{Rect, VehicleState};
use crate::to_radians;

/// Custom level ids are allocated above this floor
pub const CUSTOM_LEVEL_ID_FLOOR: u32 = 1000;

/// Arena size; the arena edge is itself a collision surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Inclusive of the edges
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// Vehicle start pose; heading in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartPose {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

/// A parking puzzle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub bounds: Bounds,
    pub start: StartPose,
    pub target: Rect,
    /// Walls and parked cars, in blame order
    #[serde(default)]
    pub obstacles: Vec<Rect>,
}

impl Level {
    /// Fresh vehicle state at the start pose
    pub fn start_state(&self) -> VehicleState {
        VehicleState::at_pose(
            Vec2::new(self.start.x, self.start.y),
            to_radians(self.start.heading),
        )
    }

    /// Reject levels the simulation cannot meaningfully run
    pub fn validate(&self) -> Result<()> {
        if !(self.bounds.width > 0.0 && self.bounds.height > 0.0) {
            return Err(ParkerError::InvalidLevel(format!(
                "level {} has empty arena {}x{}",
                self.id, self.bounds.width, self.bounds.height
            )));
        }
        if !self.bounds.contains(Vec2::new(self.start.x, self.start.y)) {
            return Err(ParkerError::InvalidLevel(format!(
                "level {} starts outside the arena at ({}, {})",
                self.id, self.start.x, self.start.y
            )));
        }
        check_rect("target", &self.target)?;
        for (i, obstacle) in self.obstacles.iter().enumerate() {
            check_rect(&format!("obstacle {i}"), obstacle)?;
        }
        Ok(())
    }
}

fn check_rect(what: &str, rect: &Rect) -> Result<()> {
    if rect.is_degenerate() {
        return Err(ParkerError::DegenerateRect {
            what: what.to_string(),
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(())
}

/// The four walls of a 600x400 arena, `thickness` thick: top, bottom, left, right
fn perimeter(thickness: f32) -> [Rect; 4] {
    [
        Rect::new(0.0, 0.0, 600.0, thickness),
        Rect::new(0.0, 400.0 - thickness, 600.0, thickness),
        Rect::new(0.0, 0.0, thickness, 400.0),
        Rect::new(600.0 - thickness, 0.0, thickness, 400.0),
    ]
}

/// Levels shipped with the game
pub fn builtin_levels() -> Vec<Level> {
    let bounds = Bounds {
        width: 600.0,
        height: 400.0,
    };

    let mut basic_box = perimeter(20.0).to_vec();
    basic_box.push(Rect::new(300.0, 100.0, 20.0, 200.0));

    let alley = vec![
        // Outer walls: top, right, bottom, left
        Rect::new(0.0, 0.0, 600.0, 20.0),
        Rect::new(580.0, 0.0, 20.0, 400.0),
        Rect::new(0.0, 380.0, 600.0, 20.0),
        Rect::new(0.0, 0.0, 20.0, 400.0),
        // Inner block forming the L
        Rect::new(200.0, 150.0, 400.0, 250.0),
    ];

    vec![
        Level {
            id: 1,
            name: "The Basic Box".to_string(),
            description: "Get used to the controls. Park the car in the green box.".to_string(),
            bounds,
            start: StartPose {
                x: 100.0,
                y: 200.0,
                heading: 0.0,
            },
            target: Rect::new(450.0, 150.0, 100.0, 100.0),
            obstacles: basic_box,
        },
        Level {
            id: 2,
            name: "The Alley Turn".to_string(),
            description: "A tight L-turn. Don't scratch the paint.".to_string(),
            bounds,
            start: StartPose {
                x: 80.0,
                y: 320.0,
                heading: 0.0,
            },
            target: Rect::new(450.0, 50.0, 80.0, 120.0),
            obstacles: alley,
        },
        Level {
            id: 3,
            name: "Parallel Nightmare".to_string(),
            description: "Parallel park between two cars.".to_string(),
            bounds,
            start: StartPose {
                x: 100.0,
                y: 200.0,
                heading: 0.0,
            },
            target: Rect::new(400.0, 280.0, 120.0, 60.0),
            obstacles: vec![
                // Curb
                Rect::new(0.0, 360.0, 600.0, 40.0),
                // Parked cars: in front, behind, across the street
                Rect::new(540.0, 290.0, 50.0, 50.0),
                Rect::new(250.0, 290.0, 50.0, 50.0),
                Rect::new(400.0, 50.0, 50.0, 100.0),
                Rect::new(0.0, 0.0, 20.0, 400.0),
                Rect::new(580.0, 0.0, 20.0, 400.0),
                Rect::new(0.0, 0.0, 600.0, 20.0),
            ],
        },
    ]
}

/// User-authored levels, stored as a JSON array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelPack {
    pub levels: Vec<Level>,
}

impl LevelPack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a pack from disk; a missing file is an empty pack
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => {
                let pack = Self::from_json(&json)?;
                log::info!("Loaded {} custom levels from {}", pack.len(), path.display());
                Ok(pack)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No custom levels at {}, starting fresh", path.display());
                Ok(Self::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Saved {} custom levels to {}", self.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Next free id, never below `CUSTOM_LEVEL_ID_FLOOR + 1`
    pub fn next_id(&self) -> u32 {
        self.levels
            .iter()
            .map(|l| l.id)
            .fold(CUSTOM_LEVEL_ID_FLOOR, u32::max)
            + 1
    }

    pub fn get(&self, id: u32) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Validate, assign a fresh id and append; returns the id
    pub fn add(&mut self, mut level: Level) -> Result<u32> {
        level.validate()?;
        level.id = self.next_id();
        let id = level.id;
        self.levels.push(level);
        Ok(id)
    }

    /// Swap in an edited copy of an existing level
    pub fn replace(&mut self, level: Level) -> Result<()> {
        level.validate()?;
        let slot = self
            .levels
            .iter_mut()
            .find(|l| l.id == level.id)
            .ok_or_else(|| ParkerError::InvalidLevel(format!("no custom level {}", level.id)))?;
        *slot = level;
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> Option<Level> {
        let index = self.levels.iter().position(|l| l.id == id)?;
        Some(self.levels.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_levels_valid() {
        let levels = builtin_levels();
        assert_eq!(levels.len(), 3);
        for level in &levels {
            assert!(level.validate().is_ok(), "level {} invalid", level.id);
        }
        assert_eq!(levels[0].obstacles.len(), 5);
        assert_eq!(levels[2].target, Rect::new(400.0, 280.0, 120.0, 60.0));
    }

    #[test]
    fn test_alley_walls_in_blame_order() {
        let alley = &builtin_levels()[1];
        assert_eq!(
            alley.obstacles,
            vec![
                Rect::new(0.0, 0.0, 600.0, 20.0),
                Rect::new(580.0, 0.0, 20.0, 400.0),
                Rect::new(0.0, 380.0, 600.0, 20.0),
                Rect::new(0.0, 0.0, 20.0, 400.0),
                Rect::new(200.0, 150.0, 400.0, 250.0),
            ]
        );
    }

    #[test]
    fn test_start_state_converts_heading() {
        let mut level = builtin_levels().remove(0);
        level.start.heading = 90.0;
        let state = level.start_state();
        assert_eq!(state.position, Vec2::new(100.0, 200.0));
        assert!((state.heading - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_degenerate_obstacle() {
        let mut level = builtin_levels().remove(0);
        level.obstacles.push(Rect::new(10.0, 10.0, 0.0, 30.0));
        match level.validate() {
            Err(ParkerError::DegenerateRect { what, .. }) => assert_eq!(what, "obstacle 5"),
            other => panic!("expected degenerate rect, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_bad_arena() {
        let mut level = builtin_levels().remove(0);
        level.start.x = 700.0;
        assert!(matches!(level.validate(), Err(ParkerError::InvalidLevel(_))));
        level.bounds.width = 0.0;
        assert!(matches!(level.validate(), Err(ParkerError::InvalidLevel(_))));
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds {
            width: 600.0,
            height: 400.0,
        };
        assert!(bounds.contains(Vec2::ZERO));
        assert!(bounds.contains(Vec2::new(600.0, 400.0)));
        assert!(!bounds.contains(Vec2::new(-0.1, 10.0)));
        assert!(!bounds.contains(Vec2::new(10.0, 400.1)));
    }

    #[test]
    fn test_level_json_without_rotation() {
        let json = r#"[{
            "id": 1001,
            "name": "Custom",
            "description": "",
            "bounds": { "width": 600, "height": 400 },
            "start": { "x": 100, "y": 200, "heading": 0 },
            "target": { "x": 450, "y": 150, "width": 100, "height": 100 },
            "obstacles": [ { "x": 300, "y": 100, "width": 20, "height": 200, "rotation": 15 } ]
        }]"#;
        let pack = LevelPack::from_json(json).unwrap();
        assert_eq!(pack.len(), 1);
        let level = pack.get(1001).unwrap();
        assert_eq!(level.target.rotation, 0.0);
        assert_eq!(level.obstacles[0].rotation, 15.0);
    }

    #[test]
    fn test_pack_ids_and_editing() {
        let mut pack = LevelPack::new();
        assert_eq!(pack.next_id(), 1001);

        let template = builtin_levels().remove(0);
        let first = pack.add(template.clone()).unwrap();
        let second = pack.add(template.clone()).unwrap();
        assert_eq!((first, second), (1001, 1002));

        let mut edited = pack.get(first).unwrap().clone();
        edited.name = "Renamed".to_string();
        pack.replace(edited).unwrap();
        assert_eq!(pack.get(first).unwrap().name, "Renamed");

        let mut missing = template.clone();
        missing.id = 42;
        assert!(pack.replace(missing).is_err());

        assert!(pack.remove(first).is_some());
        assert!(pack.remove(first).is_none());
        assert_eq!(pack.next_id(), 1003);
    }

    #[test]
    fn test_pack_add_rejects_invalid() {
        let mut pack = LevelPack::new();
        let mut level = builtin_levels().remove(0);
        level.target.height = -5.0;
        assert!(pack.add(level).is_err());
        assert!(pack.is_empty());
    }

    #[test]
    fn test_pack_save_load_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "precision_parker_pack_{}.json",
            std::process::id()
        ));
        let mut pack = LevelPack::new();
        pack.add(builtin_levels().remove(1)).unwrap();
        pack.save(&path).unwrap();

        let loaded = LevelPack::load(&path).unwrap();
        assert_eq!(loaded, pack);
        let _ = fs::remove_file(&path);

        let missing = LevelPack::load(&path).unwrap();
        assert!(missing.is_empty());
    }
}
