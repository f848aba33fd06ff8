use crate::chord::{Chord, KeyEvent};
use crate::filter::{palette_view, PaletteView};
use crate::model::CandidateSet;
use crate::palette_state::PaletteState;

pub trait OpenSink {
    fn set_open(&mut self, open: bool);
}

impl<F: FnMut(bool)> OpenSink for F {
    fn set_open(&mut self, open: bool) {
        self(open)
    }
}

pub trait ChooseSink {
    fn choose(&mut self, key: &str);
}

impl<F: FnMut(&str)> ChooseSink for F {
    fn choose(&mut self, key: &str) {
        self(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Consumed,
    Ignored,
}

pub struct CommandDispatcher {
    chord: Chord,
    state: PaletteState,
    candidates: CandidateSet,
    open_sink: Box<dyn OpenSink>,
    choose_sink: Box<dyn ChooseSink>,
}

impl CommandDispatcher {
    pub fn new(chord: Chord, open_sink: Box<dyn OpenSink>, choose_sink: Box<dyn ChooseSink>) -> Self {
        Self {
            chord,
            state: PaletteState::default(),
            candidates: CandidateSet::default(),
            open_sink,
            choose_sink,
        }
    }

    pub fn chord(&self) -> Chord {
        self.chord
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn query(&self) -> &str {
        self.state.query()
    }

    // Caller supplies a fresh set whenever its state changes; nothing is retained
    // beyond the next call.
    pub fn set_candidates(&mut self, candidates: CandidateSet) {
        self.candidates = candidates;
    }

    // Reflects the externally owned open flag. The change came from the caller,
    // so it is not echoed back through the sink.
    pub fn sync_open(&mut self, open: bool) {
        self.state.request_open(open);
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyDisposition {
        if self.chord.matches(event) {
            let open = self.state.toggle();
            self.open_sink.set_open(open);
            return KeyDisposition::Consumed;
        }

        if event.key.eq_ignore_ascii_case("escape") && self.state.on_escape() {
            self.open_sink.set_open(false);
            return KeyDisposition::Consumed;
        }

        KeyDisposition::Ignored
    }

    pub fn set_query(&mut self, query: &str) {
        self.state.set_query(query);
    }

    pub fn view(&self) -> PaletteView {
        palette_view(&self.candidates, self.state.query())
    }

    // Selection and close are one synchronous step: a key that is not visible in
    // the current filtered view is ignored without touching state.
    pub fn select(&mut self, key: &str) -> bool {
        if !self.state.is_open() || !self.view().contains_key(key) {
            return false;
        }

        self.choose_sink.choose(key);
        self.state.force_closed();
        self.open_sink.set_open(false);
        true
    }
}
