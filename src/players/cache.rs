use crate::players::snapshot::PlayerSnapshot;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::Path;

/// Anything that can list the players present at a tick.
pub trait PlayerSource {
    fn players_at_tick(&self, tick: u32) -> Vec<PlayerSnapshot>;
}

/// Player snapshots keyed by tick.
///
/// Samples may be sparse: a lookup returns the newest sample at or before the
/// requested tick, and nothing before the first sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerCache {
    #[serde(default)]
    ticks: BTreeMap<u32, Vec<PlayerSnapshot>>,
}

impl PlayerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_tick(&mut self, tick: u32, players: Vec<PlayerSnapshot>) {
        self.ticks.insert(tick, players);
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn tick_range(&self) -> Option<RangeInclusive<u32>> {
        let first = *self.ticks.keys().next()?;
        let last = *self.ticks.keys().next_back()?;
        Some(first..=last)
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read player file {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cache: Self = serde_json::from_str(&content)
            .with_context(|| format!("deserialize player file {}", path.display()))?;
        tracing::info!(ticks = cache.len(), path = %path.display(), "loaded player snapshots");
        Ok(cache)
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize player snapshots")?;
        std::fs::write(path, json)
            .with_context(|| format!("write player file {}", path.display()))
    }
}

impl PlayerSource for PlayerCache {
    fn players_at_tick(&self, tick: u32) -> Vec<PlayerSnapshot> {
        self.ticks
            .range(..=tick)
            .next_back()
            .map(|(_, players)| players.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::snapshot::Team;

    fn scout(name: &str) -> PlayerSnapshot {
        PlayerSnapshot::new(name, Team::Blue, 1, 125)
    }

    #[test]
    fn sparse_lookup_uses_latest_earlier_sample() {
        let mut cache = PlayerCache::new();
        cache.insert_tick(10, vec![scout("a")]);
        cache.insert_tick(20, vec![scout("a"), scout("b")]);

        assert!(cache.players_at_tick(9).is_empty());
        assert_eq!(cache.players_at_tick(10).len(), 1);
        assert_eq!(cache.players_at_tick(19).len(), 1);
        assert_eq!(cache.players_at_tick(500).len(), 2);
        assert_eq!(cache.tick_range(), Some(10..=20));
    }

    #[test]
    fn empty_cache_has_no_range() {
        let cache = PlayerCache::new();
        assert_eq!(cache.tick_range(), None);
        assert!(cache.players_at_tick(0).is_empty());
    }

    #[test]
    fn json_fixture_loads_with_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("players.json");
        std::fs::write(
            &path,
            r#"{"ticks": {"0": [
                {"name": "Medic", "team": "red", "class_id": 5, "health": 150, "charge_level": 42.0},
                {"name": "Ghost", "team": "spectator", "class_id": 0, "health": 0, "connected": false}
            ]}}"#,
        )
        .unwrap();

        let cache = PlayerCache::load_json(&path).expect("load players");
        let players = cache.players_at_tick(3);
        assert_eq!(players.len(), 2);
        assert!(players[0].connected);
        assert_eq!(players[0].team, Team::Red);
        assert_eq!(players[0].charge_level, Some(42.0));
        assert!(!players[1].connected);
    }

    #[test]
    fn saved_cache_loads_back_unchanged() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("players.json");
        let mut cache = PlayerCache::new();
        cache.insert_tick(0, vec![scout("a")]);
        cache.insert_tick(
            30,
            vec![
                scout("a").disconnected(),
                PlayerSnapshot::new("medic", Team::Red, 5, 150).with_charge(64.0),
            ],
        );

        cache.save_json(&path).expect("save players");
        let loaded = PlayerCache::load_json(&path).expect("load players");

        assert_eq!(loaded, cache);
        assert_eq!(loaded.tick_range(), Some(0..=30));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(PlayerCache::load_json(&dir.path().join("nope.json")).is_err());
    }
}
