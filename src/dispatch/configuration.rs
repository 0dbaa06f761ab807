use crate::tools::env_args::Setting;
use crate::tools::error::ConfigurationError;
use crate::tools::error::ConfigurationError::UnknownDispatchMode;
use std::str::FromStr;

const DISPATCH_MODE: Setting = Setting::new("--dispatch-mode", "DISPATCH_MODE");

/// How the recipients of a batch are walked through.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub enum DispatchMode {
    /// One recipient at a time, in order.
    #[default]
    Sequential,
    /// All recipients at once. Outcomes still come back in order.
    Concurrent,
}

impl DispatchMode {
    pub fn load() -> Result<Self, ConfigurationError> {
        DISPATCH_MODE
            .value()
            .map_or(Ok(Self::default()), |mode| mode.parse())
    }
}

impl FromStr for DispatchMode {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "concurrent" => Ok(Self::Concurrent),
            _ => Err(UnknownDispatchMode(value.to_owned())),
        }
    }
}
