use crate::domain::repositories::Navigator;
use anyhow::{Result, anyhow};
use std::sync::Mutex;

struct LocationState {
    search: String,
    reload_pending: bool,
}

/// In-process stand-in for `window.location`. Navigating replaces the query
/// string and flags a reload that the page picks up on its next frame.
pub struct PageLocation {
    state: Mutex<LocationState>,
}

impl PageLocation {
    pub fn new(initial_query: &str) -> Self {
        Self {
            state: Mutex::new(LocationState {
                search: normalize(initial_query),
                reload_pending: false,
            }),
        }
    }

    /// Current query string, including the leading `?` when non-empty.
    pub fn search(&self) -> String {
        self.state
            .lock()
            .map(|state| state.search.clone())
            .unwrap_or_default()
    }

    /// Returns true once per navigation.
    pub fn take_reload(&self) -> bool {
        self.state
            .lock()
            .map(|mut state| std::mem::take(&mut state.reload_pending))
            .unwrap_or(false)
    }
}

impl Navigator for PageLocation {
    fn navigate(&self, query: &str) -> Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| anyhow!("Location state poisoned"))?;
        state.search = normalize(query);
        state.reload_pending = true;
        tracing::debug!("Location set to {:?}", state.search);
        Ok(())
    }
}

fn normalize(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        String::new()
    } else {
        format!("?{query}")
    }
}
