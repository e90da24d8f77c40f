use crate::utils::{is_capture_name, to_snake_case};

#[test]
fn snake_case_basic() {
    assert_eq!(to_snake_case("Team"), "team");
    assert_eq!(to_snake_case("MostWins"), "most_wins");
    assert_eq!(to_snake_case("fooBar"), "foo_bar");
}

#[test]
fn snake_case_idempotent() {
    assert_eq!(to_snake_case("team"), "team");
    assert_eq!(to_snake_case("most_wins"), "most_wins");
}

#[test]
fn snake_case_acronyms() {
    assert_eq!(to_snake_case("UTC"), "u_t_c");
}

#[test]
fn capture_names() {
    assert!(is_capture_name("team"));
    assert!(is_capture_name("_x1"));
    assert!(!is_capture_name(""));
    assert!(!is_capture_name("Team"));
    assert!(!is_capture_name("1team"));
    assert!(!is_capture_name("team-name"));
}
