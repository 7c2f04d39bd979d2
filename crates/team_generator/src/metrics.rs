//! Win rates and partner synergy computed from match history

use std::collections::BTreeMap;
use team_core::Side;

use crate::history::MatchRecord;

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;

/// Pairs need at least this many games together to be reported
pub const MIN_GAMES_TOGETHER: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub name: String,
    pub played: u32,
    pub wins: u32,
}

impl PlayerStats {
    /// Win rate in percent
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.played) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSynergy {
    /// Alphabetically ordered teammates
    pub players: (String, String),
    pub together: u32,
    pub wins: u32,
}

impl PairSynergy {
    /// `a & b`
    pub fn label(&self) -> String {
        format!("{} & {}", self.players.0, self.players.1)
    }

    pub fn win_rate(&self) -> f64 {
        if self.together == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.together) * 100.0
    }
}

/// Games played and won per player name, sorted by name.
pub fn player_stats(matches: &[MatchRecord]) -> Vec<PlayerStats> {
    let mut stats: BTreeMap<&str, (u32, u32)> = BTreeMap::new();

    for record in matches {
        let winning_side = record.winner.side();
        for side in [Side::Team1, Side::Team2] {
            for name in record.players(side) {
                let entry = stats.entry(name).or_insert((0, 0));
                entry.0 += 1;
                if side == winning_side {
                    entry.1 += 1;
                }
            }
        }
    }

    stats
        .into_iter()
        .map(|(name, (played, wins))| PlayerStats {
            name: name.to_string(),
            played,
            wins,
        })
        .collect()
}

/// Record of every teammate pair that played together at least
/// [`MIN_GAMES_TOGETHER`] times, best win rate first.
pub fn partner_synergy(matches: &[MatchRecord]) -> Vec<PairSynergy> {
    let mut pairs: BTreeMap<(String, String), (u32, u32)> = BTreeMap::new();

    for record in matches {
        let winning_side = record.winner.side();
        for side in [Side::Team1, Side::Team2] {
            let team = record.players(side);
            for (i, first) in team.iter().enumerate() {
                for second in &team[i + 1..] {
                    let key = if first <= second {
                        (first.to_string(), second.to_string())
                    } else {
                        (second.to_string(), first.to_string())
                    };
                    let entry = pairs.entry(key).or_insert((0, 0));
                    entry.0 += 1;
                    if side == winning_side {
                        entry.1 += 1;
                    }
                }
            }
        }
    }

    let mut synergy: Vec<PairSynergy> = pairs
        .into_iter()
        .filter(|(_, (together, _))| *together >= MIN_GAMES_TOGETHER)
        .map(|(players, (together, wins))| PairSynergy {
            players,
            together,
            wins,
        })
        .collect();
    synergy.sort_by(|a, b| {
        b.win_rate()
            .partial_cmp(&a.win_rate())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    synergy
}

/// Case-insensitive search over player names.
pub fn filter_player_stats<'a>(stats: &'a [PlayerStats], term: &str) -> Vec<&'a PlayerStats> {
    let term = term.to_lowercase();
    stats
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&term))
        .collect()
}

/// Case-insensitive search over pair labels.
pub fn filter_synergy<'a>(synergy: &'a [PairSynergy], term: &str) -> Vec<&'a PairSynergy> {
    let term = term.to_lowercase();
    synergy
        .iter()
        .filter(|s| s.label().to_lowercase().contains(&term))
        .collect()
}
