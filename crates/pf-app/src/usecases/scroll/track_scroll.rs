//! Use case keeping the navbar and progress bar in sync with the viewport.
//! 跟踪滚动位置的用例

use std::sync::Arc;

use pf_core::ports::{ViewportError, ViewportPort};
use pf_core::scroll::{ScrollState, ScrollTracker, ScrollTrackerConfig};
use pf_core::section::Section;
use tokio::sync::watch;
use tracing::{debug, info_span, Instrument};

pub struct TrackScroll {
    viewport: Arc<dyn ViewportPort>,
    tracker: ScrollTracker,
}

impl TrackScroll {
    pub fn new(
        viewport: Arc<dyn ViewportPort>,
        sections: Vec<Section>,
        config: ScrollTrackerConfig,
    ) -> Self {
        Self {
            viewport,
            tracker: ScrollTracker::new(sections, config),
        }
    }

    /// Measure once and derive the next state.
    pub fn sample(&mut self) -> ScrollState {
        let measurements = self.viewport.measure();
        self.tracker.on_scroll_or_resize(&measurements)
    }

    /// Recompute on every scroll or resize notification and publish the result.
    ///
    /// Samples once right after subscribing so the initial state reflects the
    /// current position. Returns the last state when the viewport stops
    /// emitting or every receiver is gone; the listener is deregistered on
    /// return in both cases.
    pub async fn run(
        mut self,
        states: watch::Sender<ScrollState>,
    ) -> Result<ScrollState, ViewportError> {
        let span = info_span!("usecase.track_scroll.run");

        async move {
            let mut subscription = self.viewport.subscribe()?;

            let mut last = self.sample();
            if states.send(last.clone()).is_err() {
                return Ok(last);
            }

            while let Some(event) = subscription.next().await {
                last = self.sample();
                debug!(?event, active = ?last.active_section, "Viewport changed");
                if states.send(last.clone()).is_err() {
                    debug!("No scroll state receivers left, stopping");
                    break;
                }
            }

            Ok(last)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::ports::{ScrollSubscription, ViewportEvent};
    use pf_core::scroll::ViewportMeasurements;
    use pf_core::section::{site_sections, SectionRect};
    use pf_core::SectionId;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use tokio::sync::mpsc;

    /// Viewport whose measurements are swapped in by the test.
    struct ScriptedViewport {
        current: Mutex<ViewportMeasurements>,
        sender: Mutex<Option<mpsc::Sender<ViewportEvent>>>,
        released: Arc<AtomicBool>,
    }

    impl ScriptedViewport {
        fn new(initial: ViewportMeasurements) -> Arc<Self> {
            Arc::new(Self {
                current: Mutex::new(initial),
                sender: Mutex::new(None),
                released: Arc::new(AtomicBool::new(false)),
            })
        }

        async fn emit(&self, next: ViewportMeasurements, event: ViewportEvent) {
            *self.current.lock().unwrap() = next;
            let tx = self.sender.lock().unwrap().clone().unwrap();
            tx.send(event).await.unwrap();
        }

        fn close(&self) {
            self.sender.lock().unwrap().take();
        }
    }

    impl ViewportPort for ScriptedViewport {
        fn measure(&self) -> ViewportMeasurements {
            self.current.lock().unwrap().clone()
        }

        fn subscribe(&self) -> Result<ScrollSubscription, ViewportError> {
            let (tx, rx) = mpsc::channel(8);
            *self.sender.lock().unwrap() = Some(tx);
            let released = self.released.clone();
            Ok(ScrollSubscription::new(rx, move || {
                released.store(true, Ordering::SeqCst)
            }))
        }
    }

    fn at(scroll_y: u32, experience_top: f64) -> ViewportMeasurements {
        let mut rects = BTreeMap::new();
        let offset = f64::from(scroll_y);
        rects.insert(SectionId::from("home"), SectionRect::new(-offset, 800.0 - offset));
        rects.insert(
            SectionId::from("experience"),
            SectionRect::new(experience_top, experience_top + 900.0),
        );
        ViewportMeasurements {
            scroll_y,
            document_height: 3000,
            viewport_height: 1000,
            section_rects: rects,
        }
    }

    #[tokio::test]
    async fn test_publishes_initial_and_follow_up_states() {
        let viewport = ScriptedViewport::new(at(0, 800.0));
        let usecase = TrackScroll::new(viewport.clone(), site_sections(), ScrollTrackerConfig::default());
        let (tx, mut rx) = watch::channel(ScrollState::initial(&site_sections()));

        let handle = tokio::spawn(usecase.run(tx));

        // First publish happens after the listener is registered.
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().active_section, Some(SectionId::from("home")));

        viewport.emit(at(1000, -200.0), ViewportEvent::Scroll).await;
        let state = rx
            .wait_for(|s| s.scroll_y == 1000)
            .await
            .unwrap()
            .clone();
        assert_eq!(state.active_section, Some(SectionId::from("experience")));
        assert_eq!(state.progress_percent, 50.0);
        assert!(state.is_scrolled);

        viewport.close();
        let last = handle.await.unwrap().unwrap();
        assert_eq!(last.scroll_y, 1000);
        assert!(viewport.released.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_stops_and_deregisters_when_receivers_drop() {
        let viewport = ScriptedViewport::new(at(0, 800.0));
        let usecase = TrackScroll::new(viewport.clone(), site_sections(), ScrollTrackerConfig::default());
        let (tx, rx) = watch::channel(ScrollState::initial(&site_sections()));
        drop(rx);

        let last = usecase.run(tx).await.unwrap();

        assert_eq!(last.active_section, Some(SectionId::from("home")));
        assert!(viewport.released.load(Ordering::SeqCst));
    }

    struct UnavailableViewport;

    impl ViewportPort for UnavailableViewport {
        fn measure(&self) -> ViewportMeasurements {
            ViewportMeasurements::default()
        }

        fn subscribe(&self) -> Result<ScrollSubscription, ViewportError> {
            Err(ViewportError::Unavailable("headless".into()))
        }
    }

    #[tokio::test]
    async fn test_unavailable_viewport_is_reported() {
        let usecase = TrackScroll::new(
            Arc::new(UnavailableViewport),
            site_sections(),
            ScrollTrackerConfig::default(),
        );
        let (tx, _rx) = watch::channel(ScrollState::initial(&site_sections()));

        assert!(matches!(
            usecase.run(tx).await,
            Err(ViewportError::Unavailable(_))
        ));
    }
}
