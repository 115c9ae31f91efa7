mod algorithm;
mod direction;
mod job_status;
mod media_category;
mod storage_area;

pub use algorithm::Algorithm;
pub use direction::Direction;
pub use job_status::JobStatus;
pub use media_category::MediaCategory;
pub use storage_area::StorageArea;
