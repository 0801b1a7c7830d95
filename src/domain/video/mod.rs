//! Video domain module

mod reference;
mod video_id;

pub use reference::VideoReference;
pub use video_id::VideoId;
