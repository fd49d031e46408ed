mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, LlmSettings, LoggingSettings, ScanSettings, ServerSettings, Settings,
};
