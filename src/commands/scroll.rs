use std::fmt::Write;

use anyhow::{anyhow, Context};
use pf_app::App;
use pf_core::scroll::{NavigationState, ScrollState};
use pf_core::section::Section;
use pf_core::SectionId;
use pf_infra::{PageLayout, SimulatedViewport};
use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Serialize)]
struct Frame {
    state: ScrollState,
    back_to_top: bool,
}

/// Scroll the simulated page through `positions` (then `goto`, if any) and
/// report the navbar state after each step.
pub async fn replay(
    app: &App,
    viewport: &SimulatedViewport,
    layout: &PageLayout,
    positions: &[u32],
    goto: Option<&str>,
    json: bool,
) -> anyhow::Result<String> {
    let mut targets = positions.to_vec();
    if let Some(section) = goto {
        targets.push(goto_offset(app.sections(), layout, section)?);
    }

    let (tx, mut rx) = watch::channel(ScrollState::initial(app.sections()));
    let tracker = tokio::spawn(app.track_scroll().run(tx));

    // The initial sample is published once the listener is registered.
    rx.changed().await.context("Scroll tracker stopped")?;
    let mut frames = vec![frame(rx.borrow_and_update().clone())];

    for y in targets {
        let actual = viewport.scroll_to(y);
        debug!(requested = y, actual, "Replaying scroll position");
        rx.changed().await.context("Scroll tracker stopped")?;
        frames.push(frame(rx.borrow_and_update().clone()));
    }

    drop(rx);
    tracker.abort();

    if json {
        super::to_json(&frames)
    } else {
        Ok(render(app.sections(), &frames))
    }
}

fn frame(state: ScrollState) -> Frame {
    Frame {
        back_to_top: NavigationState::back_to_top_visible(&state),
        state,
    }
}

/// Document offset of a section, resolved the way a navbar click is.
fn goto_offset(sections: &[Section], layout: &PageLayout, target: &str) -> anyhow::Result<u32> {
    let id = SectionId::from(target);
    let anchor = NavigationState::default()
        .navigate_to(sections, &id)
        .ok_or_else(|| anyhow!("Unknown section: {target}"))?;
    let section = layout
        .sections
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| anyhow!("Layout has no element for {anchor}"))?;
    Ok(section.offset.max(0.0) as u32)
}

fn render(sections: &[Section], frames: &[Frame]) -> String {
    let mut out = String::new();
    for frame in frames {
        let nav: Vec<String> = sections
            .iter()
            .map(|s| {
                if NavigationState::is_highlighted(&frame.state, &s.id) {
                    format!("[{}]", s.label)
                } else {
                    s.label.clone()
                }
            })
            .collect();
        let _ = writeln!(
            out,
            "y={:<6} progress={:>5.1}%  {}{}{}",
            frame.state.scroll_y,
            frame.state.progress_percent,
            nav.join(" "),
            if frame.state.is_scrolled { "  (scrolled)" } else { "" },
            if frame.back_to_top { "  ^top" } else { "" },
        );
    }
    out.truncate(out.trim_end().len());
    out
}
