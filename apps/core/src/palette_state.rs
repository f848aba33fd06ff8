#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteState {
    open: bool,
    query: String,
}

impl Default for PaletteState {
    fn default() -> Self {
        Self {
            open: false,
            query: String::new(),
        }
    }
}

impl PaletteState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.open = false;
        } else {
            self.open = true;
            self.query.clear();
        }
        self.open
    }

    pub fn request_open(&mut self, open: bool) {
        if open && !self.open {
            self.query.clear();
        }
        self.open = open;
    }

    pub fn set_query(&mut self, query: &str) {
        if !self.open {
            return;
        }
        self.query = query.to_string();
    }

    pub fn on_escape(&mut self) -> bool {
        if self.open {
            self.open = false;
            return true;
        }
        false
    }

    pub fn force_closed(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::PaletteState;

    #[test]
    fn starts_closed_with_empty_query() {
        let state = PaletteState::default();
        assert!(!state.is_open());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn toggle_parity_holds_over_many_events() {
        let mut state = PaletteState::default();
        for n in 1..=7 {
            state.toggle();
            assert_eq!(state.is_open(), n % 2 == 1);
        }
    }

    #[test]
    fn opening_clears_a_stale_query() {
        let mut state = PaletteState::default();
        state.toggle();
        state.set_query("butto");
        state.toggle();
        state.toggle();
        assert!(state.is_open());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn explicit_open_request_also_resets_the_query() {
        let mut state = PaletteState::default();
        state.request_open(true);
        state.set_query("head");
        state.request_open(true);
        assert_eq!(state.query(), "head");

        state.request_open(false);
        state.request_open(true);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn query_updates_are_ignored_while_closed() {
        let mut state = PaletteState::default();
        state.set_query("butto");
        assert_eq!(state.query(), "");
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut state = PaletteState::default();
        assert!(!state.on_escape());
        state.toggle();
        assert!(state.on_escape());
        assert!(!state.is_open());
    }
}
