mod ids;
mod page;

pub use ids::TrackId;
pub use page::{preselect_index, Page, PageTrack};
