mod scan;
mod tags;

pub use scan::infer_identity;
pub use scan::list_audio_files;
pub use tags::LoftyTagReader;
pub use tags::TagReader;
