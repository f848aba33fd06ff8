use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use rusqlite::Connection;

use crate::chord::{parse_chord, KeyEvent, Modifiers};
use crate::config::{self, Config};
use crate::contract::{
    CoreRequest, CoreResponse, KeyEventResponse, RecentsResponse, SelectResponse, StateResponse,
    ViewResponse,
};
use crate::dispatcher::{CommandDispatcher, KeyDisposition};
use crate::model::SourceGroup;
use crate::{history, logging};

#[derive(Debug)]
pub enum ServiceError {
    Config(String),
    Store(rusqlite::Error),
    InvalidRequest(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Store(error) => write!(f, "store error: {error}"),
            Self::InvalidRequest(error) => write!(f, "invalid request: {error}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<rusqlite::Error> for ServiceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(value)
    }
}

#[derive(Debug, Default)]
struct SinkLog {
    open_changes: Vec<bool>,
    choices: Vec<String>,
}

// Single-threaded by construction: the dispatcher's sinks and the service share
// the effect cell, and requests are handled one at a time.
pub struct PaletteService {
    config: Config,
    dispatcher: CommandDispatcher,
    db: Connection,
    sink_log: Rc<RefCell<SinkLog>>,
}

impl PaletteService {
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        let db = history::open_at(&config.history_db_path)?;
        Self::with_connection(config, db)
    }

    pub fn with_connection(config: Config, db: Connection) -> Result<Self, ServiceError> {
        config::validate(&config).map_err(ServiceError::Config)?;
        let chord = parse_chord(&config.chord).map_err(|error| ServiceError::Config(error.to_string()))?;

        let sink_log: Rc<RefCell<SinkLog>> = Rc::default();
        let open_log = Rc::clone(&sink_log);
        let choose_log = Rc::clone(&sink_log);
        let dispatcher = CommandDispatcher::new(
            chord,
            Box::new(move |open: bool| open_log.borrow_mut().open_changes.push(open)),
            Box::new(move |key: &str| choose_log.borrow_mut().choices.push(key.to_string())),
        );

        Ok(Self {
            config,
            dispatcher,
            db,
            sink_log,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.dispatcher.is_open()
    }

    pub fn handle_command(&mut self, request: CoreRequest) -> Result<CoreResponse, ServiceError> {
        match request {
            CoreRequest::SetCandidates(request) => {
                self.dispatcher.set_candidates(request.into_candidates());
                Ok(CoreResponse::Ack(self.state_response()))
            }
            CoreRequest::Key(request) => {
                let event = KeyEvent::new(
                    &request.key,
                    Modifiers {
                        primary: request.primary,
                        secondary: request.secondary,
                        shift: request.shift,
                        alt: request.alt,
                    },
                );
                let disposition = self.dispatcher.handle_key(&event);
                self.drain_effects();
                Ok(CoreResponse::Key(KeyEventResponse {
                    consumed: disposition == KeyDisposition::Consumed,
                    open: self.dispatcher.is_open(),
                }))
            }
            CoreRequest::Query(request) => {
                self.dispatcher.set_query(&request.query);
                Ok(CoreResponse::View(self.view_response()))
            }
            CoreRequest::View => Ok(CoreResponse::View(self.view_response())),
            CoreRequest::Select(request) => {
                let key = request.key.trim();
                if key.is_empty() {
                    return Err(ServiceError::InvalidRequest("select key is required".into()));
                }

                let group = self.visible_group(key);
                let chosen = self.dispatcher.select(key);
                let effects = self.drain_effects();

                if chosen {
                    if let Some(group) = group {
                        history::record_selection(&self.db, key, group)?;
                    }
                }

                Ok(CoreResponse::Select(SelectResponse {
                    chosen: effects.choices.into_iter().next(),
                    open: self.dispatcher.is_open(),
                }))
            }
            CoreRequest::SyncOpen(request) => {
                self.dispatcher.sync_open(request.open);
                Ok(CoreResponse::Ack(self.state_response()))
            }
            CoreRequest::Recents(request) => {
                let cap = self.config.max_results as usize;
                let limit = request.limit.map(|limit| limit.min(cap)).unwrap_or(cap);
                let keys = history::recent_keys(&self.db, limit)?;
                Ok(CoreResponse::Recents(RecentsResponse { keys }))
            }
            CoreRequest::Shutdown => Ok(CoreResponse::ShuttingDown),
        }
    }

    fn state_response(&self) -> StateResponse {
        StateResponse {
            open: self.dispatcher.is_open(),
            query: self.dispatcher.query().to_string(),
        }
    }

    fn view_response(&self) -> ViewResponse {
        ViewResponse::from_view(
            self.dispatcher.is_open(),
            self.dispatcher.query(),
            self.dispatcher.view(),
        )
    }

    fn visible_group(&self, key: &str) -> Option<SourceGroup> {
        let view = self.dispatcher.view();
        if view.library.items().iter().any(|item| item.key == key) {
            return Some(SourceGroup::Library);
        }
        if view.existing.items().iter().any(|item| item.key == key) {
            return Some(SourceGroup::Existing);
        }
        None
    }

    fn drain_effects(&mut self) -> SinkLog {
        let effects = std::mem::take(&mut *self.sink_log.borrow_mut());
        for open in &effects.open_changes {
            logging::info(&format!("open_state_changed open={open}"));
        }
        for key in &effects.choices {
            logging::info(&format!("command_chosen key={key}"));
        }
        effects
    }
}
