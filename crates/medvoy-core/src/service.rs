//! Service lifecycle state management.
//!
//! Provides [`ServiceState`] and [`ServiceHandle`] for tracking long-lived
//! components (the content store, the directory index) so the API health
//! endpoint can report whether the platform is ready to serve requests.
//!
//! # Usage
//!
//! ```rust
//! use medvoy_core::service::{ServiceHandle, ServiceState};
//!
//! let handle = ServiceHandle::new("content-store");
//! assert_eq!(handle.state(), ServiceState::Stopped);
//!
//! handle.set_state(ServiceState::Loading);
//! handle.set_state(ServiceState::Ready);
//! assert!(handle.state().is_ready());
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;

// ============================================================================
// ServiceState
// ============================================================================

/// State of a platform component in its lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceState {
    /// Component has not been started.
    Stopped,
    /// Component is loading content or building an index.
    Loading,
    /// Component is operational.
    Ready,
    /// Component failed to start or encountered a fatal error.
    Failed(String),
}

impl ServiceState {
    /// Returns `true` if the component is fully ready.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns `true` if the component failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "stopped"),
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

// ============================================================================
// ServiceHandle
// ============================================================================

/// Thread-safe handle for observing and updating component state.
///
/// Cheap to clone (Arc internals). State changes are broadcast to all
/// subscribers via a watch channel.
#[derive(Clone)]
pub struct ServiceHandle {
    inner: Arc<ServiceHandleInner>,
}

struct ServiceHandleInner {
    name: String,
    tx: watch::Sender<ServiceState>,
    started_at: Instant,
}

impl ServiceHandle {
    /// Create a new handle with the given component name.
    ///
    /// Initial state is [`ServiceState::Stopped`].
    pub fn new(name: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(ServiceState::Stopped);
        Self {
            inner: Arc::new(ServiceHandleInner {
                name: name.into(),
                tx,
                started_at: Instant::now(),
            }),
        }
    }

    /// Get the component name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get the current state.
    pub fn state(&self) -> ServiceState {
        self.inner.tx.borrow().clone()
    }

    /// Update the state, notifying all subscribers.
    pub fn set_state(&self, state: ServiceState) {
        log::info!("component '{}' -> {state}", self.inner.name);
        self.inner.tx.send_replace(state);
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ServiceState> {
        self.inner.tx.subscribe()
    }

    /// Wait until the component reaches Ready or Failed, or the timeout
    /// elapses. Returns the failure reason on error.
    pub async fn wait_ready(&self, timeout: Duration) -> Result<(), String> {
        let mut rx = self.subscribe();
        let deadline = tokio::time::sleep(timeout);
        tokio::pin!(deadline);

        match rx.borrow_and_update().clone() {
            ServiceState::Ready => return Ok(()),
            ServiceState::Failed(reason) => {
                return Err(format!("'{}' failed: {reason}", self.inner.name));
            }
            _ => {}
        }

        loop {
            tokio::select! {
                _ = &mut deadline => {
                    return Err(format!(
                        "'{}' not ready after {timeout:?} (state: {})",
                        self.inner.name, self.state()
                    ));
                }
                changed = rx.changed() => {
                    if changed.is_err() {
                        return Err(format!("'{}' channel closed", self.inner.name));
                    }
                    match rx.borrow().clone() {
                        ServiceState::Ready => return Ok(()),
                        ServiceState::Failed(reason) => {
                            return Err(format!("'{}' failed: {reason}", self.inner.name));
                        }
                        _ => continue,
                    }
                }
            }
        }
    }

    /// Elapsed time since the handle was created.
    pub fn uptime(&self) -> Duration {
        self.inner.started_at.elapsed()
    }
}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
