use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::catalog::{CandidateProvider, CatalogError, DirCatalogProvider, StaticProvider};
use crate::config::{self, ConfigError};
use crate::contract::{CommandItemDto, CoreRequest, SetCandidatesRequest};
use crate::listener::{default_key_source, ChordSubscription, ListenerError};
use crate::service::{PaletteService, ServiceError};
use crate::{logging, transport};

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Catalog(CatalogError),
    Service(ServiceError),
    Listener(ListenerError),
    Io(String),
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Catalog(error) => write!(f, "catalog error: {error}"),
            Self::Service(error) => write!(f, "service error: {error}"),
            Self::Listener(error) => write!(f, "listener error: {error}"),
            Self::Io(error) => write!(f, "io error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<CatalogError> for RuntimeError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<ServiceError> for RuntimeError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<ListenerError> for RuntimeError {
    fn from(value: ListenerError) -> Self {
        Self::Listener(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
}

pub fn parse_cli_args(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--config requires a path".to_string())?;
                options.config_path = Some(PathBuf::from(value));
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(options)
}

pub fn run_with_options(options: RunOptions) -> Result<(), RuntimeError> {
    if let Err(error) = logging::init() {
        eprintln!("[quickpick-core] logging unavailable: {error}");
    }

    let config = config::load(options.config_path.as_deref())?;
    if !config.config_path.exists() {
        config::save(&config)?;
        println!(
            "[quickpick-core] wrote default config to {}",
            config.config_path.display()
        );
    }

    let chord = config::chord(&config)
        .map_err(|error| RuntimeError::Config(ConfigError::Invalid(error)))?;
    println!(
        "[quickpick-core] startup chord={} config_path={} history_db_path={}",
        chord.canonical(),
        config.config_path.display(),
        config.history_db_path.display(),
    );
    logging::info(&format!("startup chord={}", chord.canonical()));

    let provider: Box<dyn CandidateProvider> = match &config.catalog_dir {
        Some(dir) => Box::new(DirCatalogProvider::new(dir.clone())),
        None => Box::new(StaticProvider::deterministic_fixture()),
    };
    let library = provider.provide()?;
    println!(
        "[quickpick-core] catalog provider={} items={}",
        provider.provider_name(),
        library.len()
    );

    let mut service = PaletteService::new(config)?;
    service.handle_command(CoreRequest::SetCandidates(SetCandidatesRequest {
        library: library.into_iter().map(CommandItemDto::from).collect(),
        existing: Vec::new(),
    }))?;

    let mut key_source = default_key_source();
    let subscription = ChordSubscription::attach(key_source.as_mut(), &chord)?;
    println!(
        "[quickpick-core] chord subscription active id={:?}",
        subscription.id()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.map_err(|error| RuntimeError::Io(error.to_string()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let shutdown = matches!(
            serde_json::from_str::<CoreRequest>(trimmed),
            Ok(CoreRequest::Shutdown)
        );
        let reply = transport::handle_json(&mut service, trimmed);
        {
            let mut out = stdout.lock();
            writeln!(out, "{reply}").map_err(|error| RuntimeError::Io(error.to_string()))?;
            out.flush()
                .map_err(|error| RuntimeError::Io(error.to_string()))?;
        }

        if shutdown {
            break;
        }
    }

    subscription.detach()?;
    logging::info("shutdown");
    Ok(())
}
