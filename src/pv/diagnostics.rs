use std::fmt;

/// Severity of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Remark,
    Warning,
    Error,
}

/// Non-fatal message raised during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    /// Forwards the message to the `log` facade at the matching level.
    pub(crate) fn log(&self) {
        match self.level {
            Level::Remark => log::info!("{}", self.message),
            Level::Warning => log::warn!("{}", self.message),
            Level::Error => log::error!("{}", self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            Level::Remark => "remark",
            Level::Warning => "warning",
            Level::Error => "error",
        };
        write!(f, "[{level}] {}", self.message)
    }
}
