use quickpick_core::chord::{parse_chord, KeyEvent, Modifiers};

#[test]
fn parses_default_chord() {
    let chord = parse_chord("Mod+K").unwrap();
    assert_eq!(chord.trigger(), 'k');
    assert_eq!(chord.canonical(), "Mod+K");
}

#[test]
fn parsed_chord_accepts_both_command_modifiers() {
    let chord = parse_chord("Mod+P").unwrap();
    assert!(chord.matches(&KeyEvent::new("p", Modifiers::primary_only())));
    assert!(chord.matches(&KeyEvent::new("P", Modifiers::secondary_only())));
    assert!(!chord.matches(&KeyEvent::new("p", Modifiers::default())));
}
