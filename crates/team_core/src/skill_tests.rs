use super::*;
use crate::{BalanceError, SkillLevel};

#[test]
fn test_score_formula() {
    let player = Player::new(1, "p", 5, SkillLevel::Strong, SkillLevel::Average);
    assert_eq!(score(&player, 2), 15);
}

#[test]
fn test_score_is_repeatable() {
    let player = Player::new(1, "p", 7, SkillLevel::Weak, SkillLevel::Strong);
    let first = score(&player, 3);
    for _ in 0..10 {
        assert_eq!(score(&player, 3), first);
    }
}

#[test]
fn test_zero_multiplier_keeps_skill_levels() {
    let player = Player::new(1, "p", 9, SkillLevel::Average, SkillLevel::Average);
    assert_eq!(score(&player, 0), 4);
}

#[test]
fn test_large_multiplier_does_not_overflow() {
    let player = Player::new(1, "p", i32::MAX, SkillLevel::Strong, SkillLevel::Strong);
    let expected = i64::from(i32::MAX) * i64::from(u32::MAX) + 6;
    assert_eq!(score(&player, u32::MAX), expected);
}

#[test]
fn test_team_score_sums_members() {
    let team = vec![
        Player::new(1, "a", 5, SkillLevel::Strong, SkillLevel::Average),
        Player::new(2, "b", 1, SkillLevel::Weak, SkillLevel::Weak),
    ];
    assert_eq!(team_score(&team, 2), 15 + 4);
    assert_eq!(team_score(&[], 2), 0);
}

#[test]
fn test_level_labels_parse() {
    assert_eq!("weak".parse::<SkillLevel>(), Ok(SkillLevel::Weak));
    assert_eq!(" Strong ".parse::<SkillLevel>(), Ok(SkillLevel::Strong));
    assert_eq!("durchschnittlich".parse::<SkillLevel>(), Ok(SkillLevel::Average));
    assert_eq!("schwach".parse::<SkillLevel>(), Ok(SkillLevel::Weak));
    assert_eq!("stark".parse::<SkillLevel>(), Ok(SkillLevel::Strong));
}

#[test]
fn test_unknown_level_is_rejected() {
    let err = "legendary".parse::<SkillLevel>().unwrap_err();
    assert_eq!(err, BalanceError::InvalidSkillLevel("legendary".to_string()));

    let err = Player::from_labels(1, "p", 5, "strong", "").unwrap_err();
    assert!(matches!(err, BalanceError::InvalidSkillLevel(_)));
}

#[test]
fn test_player_json_uses_labels() {
    let json = r#"{"id":3,"name":"zoe","weight":6,"aim":"stark","gameSense":"average"}"#;
    let player: Player = serde_json::from_str(json).unwrap();
    assert_eq!(player.aim, SkillLevel::Strong);
    assert_eq!(player.game_sense, SkillLevel::Average);
    assert!(player.avatar.is_none());

    let back = serde_json::to_string(&player).unwrap();
    assert!(back.contains(r#""aim":"strong""#));
    assert!(back.contains(r#""gameSense":"average""#));
}

#[test]
fn test_player_json_with_bad_level_fails() {
    let json = r#"{"id":3,"name":"zoe","weight":6,"aim":"godlike","gameSense":"average"}"#;
    let err = serde_json::from_str::<Player>(json).unwrap_err();
    assert!(err.to_string().contains("invalid skill level"));
}
