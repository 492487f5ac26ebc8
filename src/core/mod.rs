pub mod duration;
pub mod etl;
pub mod filters;
pub mod pipeline;
pub mod ranking;

pub use crate::domain::model::{RankedReport, RankedSchool, School, SchoolRecord, Travel};
pub use crate::domain::ports::{DistanceResolver, Geocoder, Pipeline, RecordSource, Storage};
pub use crate::utils::error::Result;
