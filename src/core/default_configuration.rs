use std::fmt;
use std::fs;
use serde::Deserialize;
use log::LevelFilter;

use crate::core::{
    config::Config,
    Error,
    Result,
};

pub const DEFAULT_DATABASE: &str = "phonebook.db";
pub const DEFAULT_LOG_FILE: &str = "phonebook.log";

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Deserialize)]
struct Configuration {
    #[serde(rename = "database")]
    database    : Option<String>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,
}

pub struct Builder<'a> {
    database    : Option<&'a str>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            database    : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_database(&mut self, path: &'a str) -> &mut Self {
        self.database = Some(path);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config {} error: {}", input, e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data)?;
        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

impl<'a> Default for Builder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let mut cfg = match b.cfg.as_ref() {
            Some(cfg) => cfg.clone(),
            None => Self {
                database    : None,
                logger      : None,
            }
        };

        if let Some(path) = b.database {
            cfg.database = Some(path.to_string());
        }

        match cfg.database.as_deref() {
            Some(path) if path.trim().is_empty() => {
                return Err(Error::Argument(format!("Database path must not be empty")));
            },
            Some(_) => {},
            None => cfg.database = Some(DEFAULT_DATABASE.to_string()),
        }

        if let Some(ref mut logger) = cfg.logger {
            let level = logger.level.parse::<LevelFilter>().ok();
            logger.deserde_level = Some(b.log_level.or(level).unwrap_or(LevelFilter::Info));
            if let Some(file) = b.log_file {
                logger.file = Some(file.to_string());
            }
        } else {
            let level = b.log_level.unwrap_or(LevelFilter::Info);
            cfg.logger = Some(LogCfg {
                level: level.to_string(),
                file: Some(b.log_file.unwrap_or(DEFAULT_LOG_FILE).to_string()),
                deserde_level: Some(level),
            });
        }

        Ok(cfg)
    }
}

impl Config for Configuration {
    fn database_path(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(LevelFilter::Info)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref().and_then(|v| v.file.as_deref())
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "database:{},", self.database_path())?;
        write!(f, "logLevel:{}", self.log_level())?;
        if let Some(file) = self.log_file() {
            write!(f, ",logFile:{}", file)?;
        }
        Ok(())
    }
}
