//! Event System
//!
//! Callbacks for resolution workflow events. This is how embedding layers
//! (UI, CLI) observe merges, dismissals and analysis runs without the core
//! depending on any particular state-management mechanism.

use std::sync::Arc;

/// Events emitted by the deduplication session.
#[derive(Debug, Clone)]
pub enum DedupEvent {
    /// A grouping pass finished.
    AnalysisCompleted {
        /// Number of duplicate groups found.
        group_count: usize,
    },

    /// A group was merged into its primary record.
    GroupMerged {
        /// The group ID.
        group_id: String,
        /// The surviving record.
        primary_id: String,
        /// The records merged away.
        merged_ids: Vec<String>,
    },

    /// A group was dismissed without merging.
    GroupDismissed {
        /// The group ID.
        group_id: String,
    },

    /// A merge was dispatched to the store and failed. The group stays
    /// in the active list for a manual retry.
    MergeFailed {
        /// The group ID.
        group_id: String,
        /// Error description.
        error: String,
    },
}

/// Event handler trait.
///
/// Implement this trait to receive session events.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: DedupEvent);
}

/// Simple callback-based event handler.
///
/// Wraps a closure for easy event handling.
pub struct CallbackHandler<F>
where
    F: Fn(DedupEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(DedupEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(DedupEvent) + Send + Sync,
{
    fn on_event(&self, event: DedupEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: Vec::new(),
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches an event to all handlers.
    pub fn dispatch(&self, event: DedupEvent) {
        for handler in &self.handlers {
            handler.on_event(event.clone());
        }
    }
}
