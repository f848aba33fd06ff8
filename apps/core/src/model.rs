#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    pub key: String,
    pub label: String,
    normalized_key: String,
    normalized_label: String,
}

impl CommandItem {
    pub fn new(key: &str, label: &str) -> Self {
        Self::from_owned(key.to_string(), label.to_string())
    }

    pub fn from_owned(key: String, label: String) -> Self {
        let normalized_key = normalize_for_match(&key);
        let normalized_label = normalize_for_match(&label);
        Self {
            key,
            label,
            normalized_key,
            normalized_label,
        }
    }

    pub fn normalized_key(&self) -> &str {
        &self.normalized_key
    }

    pub fn normalized_label(&self) -> &str {
        &self.normalized_label
    }
}

pub fn normalize_for_match(input: &str) -> String {
    input.chars().flat_map(|c| c.to_lowercase()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceGroup {
    Library,
    Existing,
}

impl SourceGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Existing => "existing",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    pub library: Vec<CommandItem>,
    pub existing: Vec<CommandItem>,
}

impl CandidateSet {
    pub fn new(library: Vec<CommandItem>, existing: Vec<CommandItem>) -> Self {
        Self { library, existing }
    }

    pub fn group(&self, group: SourceGroup) -> &[CommandItem] {
        match group {
            SourceGroup::Library => &self.library,
            SourceGroup::Existing => &self.existing,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.library.is_empty() && self.existing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_for_match, CommandItem};

    #[test]
    fn caches_normalized_forms_at_construction() {
        let item = CommandItem::new("Inst-1", "Header Instance");
        assert_eq!(item.normalized_key(), "inst-1");
        assert_eq!(item.normalized_label(), "header instance");
    }

    #[test]
    fn normalization_lowercases_without_dropping_characters() {
        assert_eq!(normalize_for_match("Q4_Report!"), "q4_report!");
    }
}
