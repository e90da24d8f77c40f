use crate::Interner;

#[test]
fn intern_deduplicates() {
    let mut interner = Interner::new();

    let a = interner.intern("team");
    let b = interner.intern("team");
    let c = interner.intern("league");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_roundtrip() {
    let mut interner = Interner::new();

    let sym = interner.intern("year");
    assert_eq!(interner.resolve(sym), "year");
}

#[test]
fn get_does_not_intern() {
    let mut interner = Interner::new();
    interner.intern("team");

    assert!(interner.get("team").is_some());
    assert!(interner.get("manager").is_none());
    assert_eq!(interner.len(), 1);
}

#[test]
fn symbol_ordering_is_insertion_order() {
    let mut interner = Interner::new();

    let z = interner.intern("z");
    let a = interner.intern("a");

    assert!(z < a);
}
