use crate::Colors;

#[test]
fn paint_wraps_role_and_reset() {
    let c = Colors::ON;
    assert_eq!(c.paint(c.failure, "○"), "\x1b[31m○\x1b[0m");
    assert_eq!(c.paint(c.name, "@team"), "\x1b[34m@team\x1b[0m");
}

#[test]
fn paint_is_identity_when_off() {
    let c = Colors::new(false);
    assert_eq!(c, Colors::default());
    assert!(!c.is_enabled());
    assert_eq!(c.paint(c.token, "Arsenal"), "Arsenal");
}
