use crate::model::{normalize_for_match, CandidateSet, CommandItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupView {
    Items(Vec<CommandItem>),
    Empty,
}

impl GroupView {
    pub fn items(&self) -> &[CommandItem] {
        match self {
            Self::Items(items) => items,
            Self::Empty => &[],
        }
    }

    pub fn is_empty_marker(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteView {
    pub library: GroupView,
    pub existing: GroupView,
}

impl PaletteView {
    pub fn contains_key(&self, key: &str) -> bool {
        self.library
            .items()
            .iter()
            .chain(self.existing.items())
            .any(|item| item.key == key)
    }
}

pub fn filter_group(items: &[CommandItem], query: &str) -> Vec<CommandItem> {
    let normalized = normalize_for_match(query);
    if normalized.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| matches_item(item, &normalized))
        .cloned()
        .collect()
}

fn matches_item(item: &CommandItem, normalized_query: &str) -> bool {
    item.normalized_label().contains(normalized_query)
        || item.normalized_key().contains(normalized_query)
}

pub fn group_view(items: &[CommandItem], query: &str) -> GroupView {
    let matched = filter_group(items, query);
    if matched.is_empty() && !query.is_empty() {
        return GroupView::Empty;
    }
    GroupView::Items(matched)
}

pub fn palette_view(set: &CandidateSet, query: &str) -> PaletteView {
    PaletteView {
        library: group_view(&set.library, query),
        existing: group_view(&set.existing, query),
    }
}
