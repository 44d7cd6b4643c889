use chrono::{DateTime, Local};
use std::collections::VecDeque;

const MAX_LOG_SIZE: usize = 200;

pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl LogEntry {
    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

pub struct LogManager {
    logs: VecDeque<LogEntry>,
}

impl LogManager {
    pub fn new() -> Self {
        Self {
            logs: VecDeque::with_capacity(MAX_LOG_SIZE),
        }
    }

    pub fn push(&mut self, message: String) {
        if self.logs.len() >= MAX_LOG_SIZE {
            self.logs.pop_front();
        }
        self.logs.push_back(LogEntry {
            timestamp: Local::now(),
            message,
        });
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = String>) {
        for message in messages {
            self.push(message);
        }
    }

    pub fn all_logs(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter()
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_newest_entries() {
        let mut logs = LogManager::new();
        logs.extend((0..MAX_LOG_SIZE + 5).map(|i| format!("entry {i}")));

        assert_eq!(logs.len(), MAX_LOG_SIZE);
        assert_eq!(logs.all_logs().next().map(|e| e.message.as_str()), Some("entry 5"));
    }

    #[test]
    fn timestamp_is_clock_time() {
        let mut logs = LogManager::new();
        logs.push("hello".to_string());
        let stamp = logs.all_logs().next().unwrap().format_timestamp();
        assert_eq!(stamp.len(), 8);
        assert_eq!(stamp.matches(':').count(), 2);
    }
}
