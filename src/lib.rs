pub mod content;
pub mod error;
pub mod escape;
pub mod filer;
pub mod model;
pub mod note_store;
pub mod remote_control;
pub mod selection;
pub mod settings;
pub mod store;

pub use error::FilerError;
pub use escape::{xml_escape, xml_unescape};
pub use filer::NoteFiler;
pub use model::{FilingOutcome, NoteReference, NoteRequest};
pub use note_store::{InMemoryNoteStore, NoteStore, StoreOp};
pub use remote_control::RemoteControlStore;
pub use selection::{CommandSelectionProvider, SelectionProvider, StaticSelection};
pub use settings::FilerSettings;
pub use store::SettingsStore;
