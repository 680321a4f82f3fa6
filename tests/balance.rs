//! Intra-match balancing by single swaps.

use social_doubles::logic::{is_prohibited_composition, team_strength_gap};
use social_doubles::{balance_match, DoublesMatch, Gender, Grade, MatchFormat, Player};

fn p(name: &str, grade: u8, gender: Gender) -> Player {
    Player::new(name, Grade::new(grade).unwrap(), gender)
}

fn m(name: &str, grade: u8) -> Player {
    p(name, grade, Gender::Male)
}

fn names(team: &[Player; 2]) -> [&str; 2] {
    [team[0].name.as_str(), team[1].name.as_str()]
}

#[test]
fn close_match_is_left_alone() {
    let game = DoublesMatch::new([m("A", 3), m("B", 3)], [m("C", 3), m("D", 2)], MatchFormat::SameSex);
    assert_eq!(balance_match(&game), game);
}

#[test]
fn lopsided_match_gets_the_best_swap() {
    let game = DoublesMatch::new([m("A", 5), m("B", 5)], [m("C", 2), m("D", 2)], MatchFormat::SameSex);
    let balanced = balance_match(&game);
    assert_eq!(team_strength_gap(&balanced.team_1, &balanced.team_2), 0.0);
    assert_eq!(names(&balanced.team_1), ["C", "B"]);
    assert_eq!(names(&balanced.team_2), ["A", "D"]);
}

#[test]
fn no_improving_swap_leaves_match_unchanged() {
    let game = DoublesMatch::new([m("A", 5), m("B", 5)], [m("C", 5), m("D", 3)], MatchFormat::SameSex);
    assert_eq!(balance_match(&game), game);
}

#[test]
fn male_pair_against_female_pair_is_never_produced() {
    let game = DoublesMatch::new(
        [p("M5", 5, Gender::Male), p("F3", 3, Gender::Female)],
        [p("F2", 2, Gender::Female), p("M2", 2, Gender::Male)],
        MatchFormat::Mixed,
    );
    let balanced = balance_match(&game);
    assert!(!is_prohibited_composition(&balanced.team_1, &balanced.team_2));
    assert_eq!(team_strength_gap(&balanced.team_1, &balanced.team_2), 2.0);
    assert_eq!(names(&balanced.team_1), ["M2", "F3"]);
}

#[test]
fn prohibited_composition_detection() {
    let men = [m("A", 3), m("B", 3)];
    let women = [p("C", 3, Gender::Female), p("D", 3, Gender::Female)];
    let mixed = [m("E", 3), p("F", 3, Gender::Female)];
    assert!(is_prohibited_composition(&men, &women));
    assert!(is_prohibited_composition(&women, &men));
    assert!(!is_prohibited_composition(&men, &men));
    assert!(!is_prohibited_composition(&mixed, &women));
}

#[test]
fn balancing_is_a_fixed_point() {
    let game = DoublesMatch::new([m("A", 5), m("B", 4)], [m("C", 1), m("D", 2)], MatchFormat::SameSex);
    let once = balance_match(&game);
    assert_eq!(balance_match(&once), once);
}

#[test]
fn court_and_annotations_survive_a_swap() {
    let mut game = DoublesMatch::new([m("A", 5), m("B", 5)], [m("C", 1), m("D", 1)], MatchFormat::SameSex)
        .with_label("Same-Sex Doubles (Men)");
    game.notes = Some("bring balls".to_string());
    let balanced = balance_match(&game);
    assert_ne!(balanced.team_1, game.team_1);
    assert_eq!(balanced.label, game.label);
    assert_eq!(balanced.notes, game.notes);
}
