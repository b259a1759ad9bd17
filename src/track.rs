mod bbox;
mod display;
mod filter;
mod interpolate;
mod observation;
mod selection;

pub use bbox::BBox;
pub use display::{DrawConfig, DrawFilter};
pub use filter::reject_outliers;
pub use interpolate::interpolate_track;
pub use observation::{BallObservation, BallTrack};
pub use selection::{ClassMap, Detection, select_ball};
