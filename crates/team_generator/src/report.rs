//! Text rendering of players, teams and metrics

use team_core::{score, Partition, Player, Side};

use crate::history::MatchRecord;
use crate::metrics::{PairSynergy, PlayerStats};
use crate::settings::Settings;

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;

/// `name [Score: s] (Weight: w, Aim: a, Game Sense: g)`; the score part only
/// when `show_score` is set.
pub fn format_player(player: &Player, show_score: bool, weight_multiplier: u32) -> String {
    let details = format!(
        "(Weight: {}, Aim: {}, Game Sense: {})",
        player.weight, player.aim, player.game_sense
    );
    if show_score {
        format!(
            "{} [Score: {}] {}",
            player.name,
            score(player, weight_multiplier),
            details
        )
    } else {
        format!("{} {}", player.name, details)
    }
}

/// Both teams as a block of text.
///
/// In name-only mode players are listed by name and no scores are shown.
pub fn format_teams(partition: &Partition, settings: &Settings) -> String {
    let mut report = String::new();

    for (side, title) in [(Side::Team1, "Team 1"), (Side::Team2, "Team 2")] {
        let team_score = match side {
            Side::Team1 => partition.team1_score,
            Side::Team2 => partition.team2_score,
        };
        if partition.is_evaluated() && team_score != 0 {
            report.push_str(&format!("=== {} (Score: {}) ===\n", title, team_score));
        } else {
            report.push_str(&format!("=== {} ===\n", title));
        }

        for player in partition.team(side) {
            let line = if settings.use_only_name {
                player.name.clone()
            } else {
                format_player(player, settings.show_score, settings.weight_multiplier)
            };
            report.push_str(&format!("  {}\n", line));
        }
        report.push('\n');
    }

    if partition.is_evaluated() {
        report.push_str(&format!("Balance: {}\n", partition.balance));
    } else {
        report.push_str("Balance: not evaluated\n");
    }
    report
}

pub fn format_match(record: &MatchRecord) -> String {
    format!(
        "[{}] {} | {} vs {} | {} | Winner: {}",
        record.timestamp.format("%d/%m/%Y %H:%M"),
        record.map_name,
        record.team1,
        record.team2,
        record.team_scores,
        record.winner
    )
}

/// Player statistics table
pub fn format_player_stats(stats: &[&PlayerStats]) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "{:<24} {:>6} {:>6} {:>8}\n",
        "Player", "Played", "Wins", "Win %"
    ));
    report.push_str(&"-".repeat(47));
    report.push('\n');
    if stats.is_empty() {
        report.push_str("No player statistics available.\n");
    }
    for entry in stats {
        report.push_str(&format!(
            "{:<24} {:>6} {:>6} {:>7.1}%\n",
            entry.name,
            entry.played,
            entry.wins,
            entry.win_rate()
        ));
    }
    report
}

/// Partner synergy table
pub fn format_synergy(synergy: &[&PairSynergy]) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "{:<32} {:>8} {:>6} {:>8}\n",
        "Pair", "Together", "Wins", "Win %"
    ));
    report.push_str(&"-".repeat(57));
    report.push('\n');
    if synergy.is_empty() {
        report.push_str(
            "No synergy data available. Players need to play together in at least 2 matches.\n",
        );
    }
    for entry in synergy {
        report.push_str(&format!(
            "{:<32} {:>8} {:>6} {:>7.1}%\n",
            entry.label(),
            entry.together,
            entry.wins,
            entry.win_rate()
        ));
    }
    report
}
