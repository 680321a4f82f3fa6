//! Roster CSV loading.

use social_doubles::{load_roster, Gender, PlusMinus, RosterError};

#[test]
fn loads_players_with_all_columns() {
    let csv = "\
name,grade,gender,plus_minus,arrival,resting,unavailable
Ann,4,F,+,2,false,
Bob,3,M,-,1,true,2;5
Cat,,F,,,,
";
    let players = load_roster(csv.as_bytes()).unwrap();
    assert_eq!(players.len(), 3);

    let ann = &players[0];
    assert_eq!(ann.grade.map(|g| g.value()), Some(4));
    assert_eq!(ann.gender, Some(Gender::Female));
    assert_eq!(ann.plus_minus, PlusMinus::Plus);
    assert_eq!(ann.arrival_order, 2);
    assert!(ann.is_eligible_for(1));

    let bob = &players[1];
    assert_eq!(bob.plus_minus, PlusMinus::Minus);
    assert!(bob.is_resting);
    assert!(bob.is_unavailable_for(2));
    assert!(bob.is_unavailable_for(5));
    assert!(!bob.is_unavailable_for(3));

    let cat = &players[2];
    assert!(cat.grade.is_none());
    assert_eq!(cat.arrival_order, 3);
    assert!(!cat.is_eligible_for(1));
}

#[test]
fn rejects_out_of_range_grade() {
    let csv = "name,grade,gender\nAnn,9,F\n";
    assert!(matches!(
        load_roster(csv.as_bytes()),
        Err(RosterError::InvalidGrade { row: 1, .. })
    ));
}

#[test]
fn rejects_unknown_gender_and_set() {
    let csv = "name,grade,gender\nAnn,3,X\n";
    assert!(matches!(
        load_roster(csv.as_bytes()),
        Err(RosterError::InvalidGender { row: 1, .. })
    ));

    let csv = "name,grade,gender,unavailable\nAnn,3,F,\nBob,3,M,7\n";
    let err = load_roster(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, RosterError::InvalidSet { row: 2, .. }));
    assert_eq!(err.to_string(), "Row 2: invalid unavailable set '7'");
}
