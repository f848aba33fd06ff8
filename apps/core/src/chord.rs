use std::fmt::{Display, Formatter};

pub const DEFAULT_CHORD: &str = "Mod+K";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub primary: bool,
    pub secondary: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn primary_only() -> Self {
        Self {
            primary: true,
            ..Self::default()
        }
    }

    pub fn secondary_only() -> Self {
        Self {
            secondary: true,
            ..Self::default()
        }
    }

    // Primary and secondary are interchangeable; either satisfies a chord.
    pub fn has_command(self) -> bool {
        self.primary || self.secondary
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: &str, modifiers: Modifiers) -> Self {
        Self {
            key: key.to_string(),
            modifiers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    MissingModifier(String),
    UnsupportedModifier(String),
    InvalidKey(String),
    Reserved(String),
}

impl Display for ChordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingModifier(input) => {
                write!(f, "chord '{input}' must include a modifier and a key")
            }
            Self::UnsupportedModifier(token) => {
                write!(f, "unsupported modifier '{token}'; use Mod")
            }
            Self::InvalidKey(token) => {
                write!(f, "chord key must be a single letter or digit, got '{token}'")
            }
            Self::Reserved(canonical) => {
                write!(f, "'{canonical}' is commonly reserved by the host platform")
            }
        }
    }
}

impl std::error::Error for ChordError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    trigger: char,
}

impl Default for Chord {
    fn default() -> Self {
        Self { trigger: 'k' }
    }
}

impl Chord {
    pub fn new(trigger: char) -> Result<Self, ChordError> {
        if !trigger.is_ascii_alphanumeric() {
            return Err(ChordError::InvalidKey(trigger.to_string()));
        }
        let trigger = trigger.to_ascii_lowercase();
        if is_reserved_trigger(trigger) {
            return Err(ChordError::Reserved(canonical_for(trigger)));
        }
        Ok(Self { trigger })
    }

    pub fn trigger(&self) -> char {
        self.trigger
    }

    pub fn canonical(&self) -> String {
        canonical_for(self.trigger)
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        if !event.modifiers.has_command() {
            return false;
        }

        let mut chars = event.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.eq_ignore_ascii_case(&self.trigger),
            _ => false,
        }
    }
}

pub fn parse_chord(input: &str) -> Result<Chord, ChordError> {
    let parts: Vec<&str> = input
        .split('+')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() < 2 {
        return Err(ChordError::MissingModifier(input.to_string()));
    }

    for part in &parts[..parts.len() - 1] {
        match part.to_ascii_lowercase().as_str() {
            "mod" | "ctrl" | "control" | "cmd" | "meta" | "super" => {}
            other => return Err(ChordError::UnsupportedModifier(other.to_string())),
        }
    }

    let key_part = parts[parts.len() - 1];
    let mut chars = key_part.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Chord::new(c),
        _ => Err(ChordError::InvalidKey(key_part.to_string())),
    }
}

fn canonical_for(trigger: char) -> String {
    format!("Mod+{}", trigger.to_ascii_uppercase())
}

// Mod+Q and Mod+W quit or close windows on the major platforms.
fn is_reserved_trigger(trigger: char) -> bool {
    matches!(trigger, 'q' | 'w')
}

#[cfg(test)]
mod tests {
    use super::{parse_chord, Chord, ChordError, KeyEvent, Modifiers};

    #[test]
    fn default_chord_is_mod_k() {
        let chord = Chord::default();
        assert_eq!(chord.trigger(), 'k');
        assert_eq!(chord.canonical(), "Mod+K");
    }

    #[test]
    fn either_command_modifier_satisfies_the_chord() {
        let chord = Chord::default();
        assert!(chord.matches(&KeyEvent::new("k", Modifiers::primary_only())));
        assert!(chord.matches(&KeyEvent::new("k", Modifiers::secondary_only())));
        assert!(!chord.matches(&KeyEvent::new("k", Modifiers::default())));
    }

    #[test]
    fn trigger_comparison_is_case_insensitive() {
        let chord = Chord::default();
        assert!(chord.matches(&KeyEvent::new("K", Modifiers::secondary_only())));
    }

    #[test]
    fn named_keys_never_match() {
        let chord = Chord::default();
        assert!(!chord.matches(&KeyEvent::new("Enter", Modifiers::primary_only())));
        assert!(!chord.matches(&KeyEvent::new("", Modifiers::primary_only())));
    }

    #[test]
    fn parses_canonical_and_loose_forms() {
        assert_eq!(parse_chord("Mod+K").unwrap().trigger(), 'k');
        assert_eq!(parse_chord("ctrl + p").unwrap().trigger(), 'p');
        assert_eq!(parse_chord("cmd+K").unwrap().canonical(), "Mod+K");
    }

    #[test]
    fn rejects_bare_keys_and_unknown_modifiers() {
        assert!(matches!(
            parse_chord("k"),
            Err(ChordError::MissingModifier(_))
        ));
        assert!(matches!(
            parse_chord("Shift+K"),
            Err(ChordError::UnsupportedModifier(_))
        ));
    }

    #[test]
    fn rejects_reserved_triggers() {
        assert!(matches!(parse_chord("Mod+Q"), Err(ChordError::Reserved(_))));
        assert!(matches!(parse_chord("Mod+W"), Err(ChordError::Reserved(_))));
    }
}
