pub mod track_scroll;

pub use track_scroll::TrackScroll;
