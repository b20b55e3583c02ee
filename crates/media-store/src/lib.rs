//! Public media storage: the registry seam, a filesystem-backed registry, and
//! the audio save flow.

pub mod error;
pub mod fs;
pub mod registry;
pub mod save;

pub use error::{Error, Result};
pub use fs::FsMediaRegistry;
pub use registry::{EntryId, EntryMetadata, EntryWriter, MediaRegistry};
pub use save::{AUDIO_RELATIVE_PATH, AudioSaver, SaveRequest};
