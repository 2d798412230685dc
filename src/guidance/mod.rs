pub mod search;

pub use search::{find_pitchover_angle, PitchoverSolution, SearchMethod, SearchOptions, SearchResult};
