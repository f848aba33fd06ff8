use std::fmt::{Display, Formatter};

use crate::chord::Chord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    AttachFailed(String),
    NotAttached(u64),
}

impl Display for ListenerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AttachFailed(reason) => write!(f, "failed to attach key subscription: {reason}"),
            Self::NotAttached(id) => write!(f, "no active subscription with id {id}"),
        }
    }
}

impl std::error::Error for ListenerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

pub trait GlobalKeySource {
    fn source_name(&self) -> &'static str;
    fn attach(&mut self, chord: &Chord) -> Result<SubscriptionId, ListenerError>;
    fn detach(&mut self, id: SubscriptionId) -> Result<(), ListenerError>;
}

#[derive(Default)]
pub struct MockKeySource {
    next_id: u64,
    attached: Vec<(SubscriptionId, String)>,
}

impl MockKeySource {
    pub fn attached(&self) -> &[(SubscriptionId, String)] {
        &self.attached
    }
}

impl GlobalKeySource for MockKeySource {
    fn source_name(&self) -> &'static str {
        "mock"
    }

    fn attach(&mut self, chord: &Chord) -> Result<SubscriptionId, ListenerError> {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.attached.push((id, chord.canonical()));
        Ok(id)
    }

    fn detach(&mut self, id: SubscriptionId) -> Result<(), ListenerError> {
        let before = self.attached.len();
        self.attached.retain(|(attached_id, _)| *attached_id != id);
        if self.attached.len() == before {
            return Err(ListenerError::NotAttached(id.0));
        }
        Ok(())
    }
}

// Headless hosts deliver key events over the transport instead of a native hook.
#[derive(Default)]
pub struct NoopKeySource {
    next_id: u64,
}

impl GlobalKeySource for NoopKeySource {
    fn source_name(&self) -> &'static str {
        "noop"
    }

    fn attach(&mut self, _chord: &Chord) -> Result<SubscriptionId, ListenerError> {
        self.next_id += 1;
        Ok(SubscriptionId(self.next_id))
    }

    fn detach(&mut self, _id: SubscriptionId) -> Result<(), ListenerError> {
        Ok(())
    }
}

pub fn default_key_source() -> Box<dyn GlobalKeySource> {
    Box::new(NoopKeySource::default())
}

// Scoped acquisition: the subscription is released on drop no matter how the
// owning scope unwinds, so remounts never stack listeners.
pub struct ChordSubscription<'a> {
    source: &'a mut dyn GlobalKeySource,
    id: Option<SubscriptionId>,
}

impl<'a> ChordSubscription<'a> {
    pub fn attach(
        source: &'a mut dyn GlobalKeySource,
        chord: &Chord,
    ) -> Result<Self, ListenerError> {
        let id = source.attach(chord)?;
        Ok(Self {
            source,
            id: Some(id),
        })
    }

    pub fn id(&self) -> Option<SubscriptionId> {
        self.id
    }

    pub fn detach(mut self) -> Result<(), ListenerError> {
        match self.id.take() {
            Some(id) => self.source.detach(id),
            None => Ok(()),
        }
    }
}

impl Drop for ChordSubscription<'_> {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            let _ = self.source.detach(id);
        }
    }
}
