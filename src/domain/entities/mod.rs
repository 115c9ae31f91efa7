mod transform_job;
mod transform_request;
mod transform_result;

pub use transform_job::TransformJob;
pub use transform_request::TransformRequest;
pub use transform_result::TransformResult;
