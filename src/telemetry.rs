use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU8, Ordering as AtomicOrdering};

static THRESHOLD: AtomicU8 = AtomicU8::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl LogLevel {
    fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Warn => 2,
        }
    }

    fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::Debug,
            1 => Self::Info,
            _ => Self::Warn,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

pub fn set_threshold(level: LogLevel) {
    THRESHOLD.store(level.rank(), AtomicOrdering::Relaxed);
}

pub fn threshold() -> LogLevel {
    LogLevel::from_rank(THRESHOLD.load(AtomicOrdering::Relaxed))
}

pub fn enabled(level: LogLevel) -> bool {
    level >= threshold()
}

/// Emits one JSON object per event: `ts`, `level`, `event`, then any fields
/// carried by `fields` when it is an object.
pub fn log_event(level: LogLevel, event: &str, fields: Value) {
    if !enabled(level) {
        return;
    }

    let line = render_event(now_unix_seconds(), level, event, fields);
    emit(level, &line);
}

pub fn render_event(ts: u64, level: LogLevel, event: &str, fields: Value) -> String {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload).to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let level = match level {
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
    };
    log::log!(level, "{line}");
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}
