mod download_file;
mod transform_file;

pub use download_file::DownloadFileUseCase;
pub use transform_file::TransformFileUseCase;
