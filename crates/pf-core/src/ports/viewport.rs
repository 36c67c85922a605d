use thiserror::Error;
use tokio::sync::mpsc;

use crate::scroll::ViewportMeasurements;

/// Kind of host notification that invalidates the scroll state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    Scroll,
    Resize,
}

#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("viewport unavailable: {0}")]
    Unavailable(String),
}

/// Host viewport: current measurements plus scroll/resize notifications.
///
/// 宿主视口端口。
///
/// # Behavior / 行为
/// - `measure()` is cheap and side-effect free.
/// - `subscribe()` registers a listener; dropping the returned
///   [`ScrollSubscription`] deregisters it.
pub trait ViewportPort: Send + Sync {
    fn measure(&self) -> ViewportMeasurements;

    fn subscribe(&self) -> Result<ScrollSubscription, ViewportError>;
}

/// Scoped listener registration. Deregisters on drop.
pub struct ScrollSubscription {
    events: mpsc::Receiver<ViewportEvent>,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl ScrollSubscription {
    pub fn new(
        events: mpsc::Receiver<ViewportEvent>,
        release: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            events,
            release: Some(Box::new(release)),
        }
    }

    /// Next notification, or `None` once the host stopped emitting.
    pub async fn next(&mut self) -> Option<ViewportEvent> {
        self.events.recv().await
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("released", &self.release.is_none())
            .finish()
    }
}
