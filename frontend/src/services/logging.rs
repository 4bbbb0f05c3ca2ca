use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

pub struct Logger;

impl Logger {
    /// Set the minimum level that reaches the console
    pub fn init(level: LogLevel) {
        MIN_LEVEL.store(level as u8, Ordering::Relaxed);
    }

    pub fn enabled(level: LogLevel) -> bool {
        level as u8 >= MIN_LEVEL.load(Ordering::Relaxed)
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, message, component);
    }

    fn log(level: LogLevel, message: &str, component: &str) {
        if !Self::enabled(level) {
            return;
        }
        emit(level, format!("[{}] {}", component, message));
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: String) {
    match level {
        LogLevel::Debug => gloo::console::debug!(line),
        LogLevel::Info => gloo::console::info!(line),
        LogLevel::Warn => gloo::console::warn!(line),
        LogLevel::Error => gloo::console::error!(line),
    }
}

// Unit tests run on the host, where there is no browser console
#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LogLevel, line: String) {
    eprintln!("{:?} {}", level, line);
}
