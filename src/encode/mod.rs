//! Frame sinks: in-memory, PNG sequence and `ffmpeg` MP4.

pub(crate) mod ffmpeg;
pub(crate) mod sink;
