//! Per-view load state with a request-generation counter.
//!
//! Every load takes a ticket from `begin`. Only the result carrying the most
//! recent ticket is applied; anything older is dropped, so a slow first load
//! can never overwrite the outcome of a later refresh.

use crate::errors::{AppError, AppResult};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    Stale,
}

#[derive(Debug)]
pub struct ViewState<T> {
    generation: u64,
    loading: bool,
    refreshing: bool,
    data: Option<T>,
    error: Option<AppError>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            loading: false,
            refreshing: false,
            data: None,
            error: None,
        }
    }
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, refresh: bool) -> Ticket {
        self.generation += 1;
        if refresh {
            self.refreshing = true;
        } else {
            self.loading = true;
        }
        Ticket(self.generation)
    }

    pub fn finish(&mut self, ticket: Ticket, result: AppResult<T>) -> Applied {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale load result"
            );
            return Applied::Stale;
        }
        self.loading = false;
        self.refreshing = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            // keep the last good data on screen
            Err(e) => self.error = Some(e),
        }
        Applied::Current
    }

    /// Begin, run `load`, finish.
    pub fn load_with(&mut self, refresh: bool, load: impl FnOnce() -> AppResult<T>) -> Applied {
        let ticket = self.begin(refresh);
        self.finish(ticket, load())
    }

    pub fn is_busy(&self) -> bool {
        self.loading || self.refreshing
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn take_data(&mut self) -> Option<T> {
        self.data.take()
    }

    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<AppError> {
        self.error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_result_is_discarded() {
        let mut state: ViewState<&str> = ViewState::new();
        let first = state.begin(false);
        let refresh = state.begin(true);
        assert!(state.is_busy());

        assert_eq!(state.finish(refresh, Ok("fresh")), Applied::Current);
        assert_eq!(state.finish(first, Ok("old")), Applied::Stale);
        assert_eq!(state.data(), Some(&"fresh"));
        assert!(!state.is_busy());
    }

    #[test]
    fn error_keeps_previous_data() {
        let mut state: ViewState<u32> = ViewState::new();
        state.load_with(false, || Ok(7));
        state.load_with(true, || Err(AppError::Other("offline".into())));
        assert_eq!(state.data(), Some(&7));
        assert_eq!(
            state.error().map(|e| e.to_string()).as_deref(),
            Some("Internal error: offline")
        );
    }
}
