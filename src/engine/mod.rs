mod session;
mod status;
mod upload_engine;

pub use session::UploadSession;
pub use status::UploadStatus;
pub use upload_engine::UploadEngine;
