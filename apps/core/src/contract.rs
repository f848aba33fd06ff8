use serde::{Deserialize, Serialize};

use crate::filter::{GroupView, PaletteView};
use crate::model::{CandidateSet, CommandItem};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandItemDto {
    pub key: String,
    pub label: String,
}

impl From<CommandItem> for CommandItemDto {
    fn from(value: CommandItem) -> Self {
        Self {
            key: value.key,
            label: value.label,
        }
    }
}

impl CommandItemDto {
    pub fn into_item(self) -> CommandItem {
        CommandItem::from_owned(self.key, self.label)
    }
}

// `Empty` is the explicit no-results marker; a group that was never narrowed
// reports `Items` even when the source list itself is empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GroupDto {
    Items { items: Vec<CommandItemDto> },
    Empty,
}

impl From<GroupView> for GroupDto {
    fn from(value: GroupView) -> Self {
        match value {
            GroupView::Items(items) => Self::Items {
                items: items.into_iter().map(Into::into).collect(),
            },
            GroupView::Empty => Self::Empty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewResponse {
    pub open: bool,
    pub query: String,
    pub library: GroupDto,
    pub existing: GroupDto,
}

impl ViewResponse {
    pub fn from_view(open: bool, query: &str, view: PaletteView) -> Self {
        Self {
            open,
            query: query.to_string(),
            library: view.library.into(),
            existing: view.existing.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetCandidatesRequest {
    pub library: Vec<CommandItemDto>,
    pub existing: Vec<CommandItemDto>,
}

impl SetCandidatesRequest {
    pub fn into_candidates(self) -> CandidateSet {
        CandidateSet::new(
            self.library
                .into_iter()
                .map(CommandItemDto::into_item)
                .collect(),
            self.existing
                .into_iter()
                .map(CommandItemDto::into_item)
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyEventRequest {
    pub key: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub secondary: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyEventResponse {
    pub consumed: bool,
    pub open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectRequest {
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectResponse {
    pub chosen: Option<String>,
    pub open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncOpenRequest {
    pub open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateResponse {
    pub open: bool,
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentsRequest {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentsResponse {
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload")]
pub enum CoreRequest {
    SetCandidates(SetCandidatesRequest),
    Key(KeyEventRequest),
    Query(QueryRequest),
    View,
    Select(SelectRequest),
    SyncOpen(SyncOpenRequest),
    Recents(RecentsRequest),
    Shutdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload")]
pub enum CoreResponse {
    Ack(StateResponse),
    Key(KeyEventResponse),
    View(ViewResponse),
    Select(SelectResponse),
    Recents(RecentsResponse),
    ShuttingDown,
}
