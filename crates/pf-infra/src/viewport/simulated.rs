//! Viewport driven by code instead of a browser.
//!
//! Sections are laid out at fixed document offsets; measurements are derived
//! from the current scroll position the same way a browser reports
//! `getBoundingClientRect()` and `window.scrollY`.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use pf_core::ports::{ScrollSubscription, ViewportError, ViewportEvent, ViewportPort};
use pf_core::scroll::ViewportMeasurements;
use pf_core::section::SectionRect;
use pf_core::SectionId;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::trace;

const EVENT_BUFFER: usize = 16;

/// One section anchor in document coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionBox {
    pub id: SectionId,
    pub offset: f64,
    pub height: f64,
}

/// Static page geometry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageLayout {
    pub viewport_height: u32,
    /// Defaults to the bottom edge of the lowest section.
    #[serde(default)]
    pub document_height: Option<u32>,
    #[serde(default)]
    pub sections: Vec<SectionBox>,
}

impl PageLayout {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn document_height(&self) -> u32 {
        self.document_height.unwrap_or_else(|| {
            self.sections
                .iter()
                .map(|s| (s.offset + s.height).max(0.0).ceil() as u32)
                .max()
                .unwrap_or(0)
        })
    }

    /// Sections stacked top to bottom, each one viewport tall.
    pub fn stacked(ids: &[SectionId], viewport_height: u32) -> Self {
        let height = f64::from(viewport_height);
        Self {
            viewport_height,
            document_height: None,
            sections: ids
                .iter()
                .enumerate()
                .map(|(i, id)| SectionBox {
                    id: id.clone(),
                    offset: i as f64 * height,
                    height,
                })
                .collect(),
        }
    }
}

struct ViewportInner {
    layout: PageLayout,
    scroll_y: u32,
    next_listener: u64,
    listeners: BTreeMap<u64, mpsc::Sender<ViewportEvent>>,
}

impl ViewportInner {
    fn max_scroll(&self) -> u32 {
        self.layout
            .document_height()
            .saturating_sub(self.layout.viewport_height)
    }

    fn notify(&mut self, event: ViewportEvent) {
        // Listeners re-measure on wake-up, so a dropped event on a full
        // buffer loses nothing.
        self.listeners
            .retain(|_, tx| !matches!(tx.try_send(event), Err(mpsc::error::TrySendError::Closed(_))));
    }
}

#[derive(Clone)]
pub struct SimulatedViewport {
    inner: Arc<Mutex<ViewportInner>>,
}

impl SimulatedViewport {
    pub fn new(layout: PageLayout) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ViewportInner {
                layout,
                scroll_y: 0,
                next_listener: 0,
                listeners: BTreeMap::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ViewportInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Scroll to `y`, clamped to the scrollable range, and notify listeners.
    pub fn scroll_to(&self, y: u32) -> u32 {
        let mut inner = self.lock();
        inner.scroll_y = y.min(inner.max_scroll());
        trace!(scroll_y = inner.scroll_y, "Simulated scroll");
        inner.notify(ViewportEvent::Scroll);
        inner.scroll_y
    }

    /// Change the viewport height and notify listeners.
    pub fn resize(&self, viewport_height: u32) {
        let mut inner = self.lock();
        inner.layout.viewport_height = viewport_height;
        inner.scroll_y = inner.scroll_y.min(inner.max_scroll());
        inner.notify(ViewportEvent::Resize);
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

impl ViewportPort for SimulatedViewport {
    fn measure(&self) -> ViewportMeasurements {
        let inner = self.lock();
        let scroll = f64::from(inner.scroll_y);
        let section_rects = inner
            .layout
            .sections
            .iter()
            .map(|s| {
                let top = s.offset - scroll;
                (s.id.clone(), SectionRect::new(top, top + s.height))
            })
            .collect();

        ViewportMeasurements {
            scroll_y: inner.scroll_y,
            document_height: inner.layout.document_height(),
            viewport_height: inner.layout.viewport_height,
            section_rects,
        }
    }

    fn subscribe(&self) -> Result<ScrollSubscription, ViewportError> {
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        let id = {
            let mut inner = self.lock();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.insert(id, tx);
            id
        };

        let weak = Arc::downgrade(&self.inner);
        Ok(ScrollSubscription::new(rx, move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
                inner.listeners.remove(&id);
            }
        }))
    }
}
