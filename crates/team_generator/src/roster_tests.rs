use super::*;
use chrono::TimeZone;
use team_core::SkillLevel;

const ROSTER_JSON: &str = r#"[
    {"id": 1, "name": "Alice", "weight": 7, "aim": "strong", "gameSense": "average"},
    {"id": 2, "name": "bob", "weight": 4, "aim": "weak", "gameSense": "strong", "avatar": "bob.png"},
    {"id": 3, "name": "Carol", "weight": 5, "aim": "durchschnittlich", "gameSense": "schwach"}
]"#;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[test]
fn test_roster_from_json() {
    let roster = Roster::from_json(ROSTER_JSON).unwrap();
    assert_eq!(roster.len(), 3);
    assert_eq!(roster.get(2).and_then(|p| p.avatar.as_deref()), Some("bob.png"));
    assert_eq!(roster.get(3).map(|p| p.aim), Some(SkillLevel::Average));
    assert_eq!(roster.find_by_name("alice").map(|p| p.id), Some(1));
}

#[test]
fn test_sorted_by_name_ignores_case() {
    let roster = Roster::from_json(ROSTER_JSON).unwrap();
    let names: Vec<&str> = roster.sorted_by_name().into_iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "bob", "Carol"]);
}

#[test]
fn test_duplicate_name_is_rejected() {
    let mut roster = Roster::from_json(ROSTER_JSON).unwrap();
    let err = roster
        .add(Player::new(9, "ALICE", 5, SkillLevel::Weak, SkillLevel::Weak))
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn test_duplicate_id_is_rejected() {
    let mut roster = Roster::from_json(ROSTER_JSON).unwrap();
    let err = roster
        .add(Player::new(1, "Dora", 5, SkillLevel::Weak, SkillLevel::Weak))
        .unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidRoster(_)));
}

#[test]
fn test_weight_and_name_bounds() {
    for player in [
        Player::new(1, "zero", 0, SkillLevel::Weak, SkillLevel::Weak),
        Player::new(2, "eleven", 11, SkillLevel::Weak, SkillLevel::Weak),
        Player::new(3, "   ", 5, SkillLevel::Weak, SkillLevel::Weak),
    ] {
        assert!(Roster::new(vec![player]).is_err());
    }
}

#[test]
fn test_empty_roster_is_rejected() {
    assert!(matches!(Roster::new(Vec::new()), Err(GeneratorError::InvalidRoster(_))));
    assert!(matches!(Roster::from_json("[]"), Err(GeneratorError::InvalidRoster(_))));
}

#[test]
fn test_bad_skill_label_is_rejected() {
    let json = r#"[{"id": 1, "name": "x", "weight": 5, "aim": "legendary", "gameSense": "weak"}]"#;
    let err = Roster::from_json(json).unwrap_err();
    assert!(matches!(err, GeneratorError::Json(_)));
    assert!(err.to_string().contains("invalid skill level"));
}

#[test]
fn test_update_records_skill_change() {
    let mut roster = Roster::from_json(ROSTER_JSON).unwrap();
    let mut alice = roster.get(1).cloned().unwrap();
    alice.weight = 9;
    alice.game_sense = SkillLevel::Strong;

    let change = roster.update(alice, at(1_700_000_000)).unwrap().unwrap();
    assert_eq!(change.player_name, "Alice");
    assert_eq!(change.old_weight, 7);
    assert_eq!(change.new_weight, 9);
    assert_eq!(
        change.describe(),
        vec!["Weight: 7 -> 9".to_string(), "Game Sense: average -> strong".to_string()]
    );
    assert_eq!(roster.get(1).map(|p| p.weight), Some(9));
}

#[test]
fn test_rename_is_not_a_skill_change() {
    let mut roster = Roster::from_json(ROSTER_JSON).unwrap();
    let mut bob = roster.get(2).cloned().unwrap();
    bob.name = "Robert".to_string();

    assert_eq!(roster.update(bob, at(0)).unwrap(), None);
    assert!(roster.find_by_name("robert").is_some());
}

#[test]
fn test_update_unknown_player_fails() {
    let mut roster = Roster::from_json(ROSTER_JSON).unwrap();
    let ghost = Player::new(42, "Ghost", 5, SkillLevel::Weak, SkillLevel::Weak);
    assert!(roster.update(ghost, at(0)).is_err());
}

#[test]
fn test_remove() {
    let mut roster = Roster::from_json(ROSTER_JSON).unwrap();
    assert_eq!(roster.remove(2).map(|p| p.name), Some("bob".to_string()));
    assert_eq!(roster.remove(2), None);
    assert_eq!(roster.len(), 2);
}

#[test]
fn test_skill_history_newest_first() {
    let old = Player::new(1, "a", 5, SkillLevel::Weak, SkillLevel::Weak);
    let new = Player::new(1, "a", 6, SkillLevel::Weak, SkillLevel::Weak);
    let mut changes = vec![
        SkillChange::between(&old, &new, at(10)).unwrap(),
        SkillChange::between(&old, &new, at(30)).unwrap(),
        SkillChange::between(&old, &new, at(20)).unwrap(),
    ];
    crate::skill_history::newest_first(&mut changes);
    let order: Vec<i64> = changes.iter().map(|c| c.timestamp.timestamp()).collect();
    assert_eq!(order, vec![30, 20, 10]);
}
