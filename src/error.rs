use crate::config::ConfigError;
use std::io;

#[derive(Debug)]
pub enum ChatBotError {
    Config(ConfigError),
    /// The flush timer thread could not be spawned.
    Timer(io::Error),
}

impl std::fmt::Display for ChatBotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatBotError::Config(e) => write!(f, "{}", e),
            ChatBotError::Timer(e) => write!(f, "Failed to start flush timer: {}", e),
        }
    }
}

impl std::error::Error for ChatBotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatBotError::Config(e) => Some(e),
            ChatBotError::Timer(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ChatBotError {
    fn from(e: ConfigError) -> Self {
        ChatBotError::Config(e)
    }
}

impl From<io::Error> for ChatBotError {
    fn from(e: io::Error) -> Self {
        ChatBotError::Timer(e)
    }
}
