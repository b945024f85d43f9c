pub mod orchestrator;
pub mod region;
pub mod smooth;
pub mod track;

pub use region::{RegionSpec, TrackLayout};
pub use track::{Binding, Scrub, Track};
