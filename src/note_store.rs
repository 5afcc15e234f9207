use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::{anyhow, bail, Result};

use crate::{content, model::NoteReference};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    FindNote,
    NoteExists,
    CreateNamedNote,
    GetNoteContentsXml,
    SetNoteContentsXml,
    AddTagToNote,
    DisplayNote,
}

impl StoreOp {
    pub fn method_name(self) -> &'static str {
        match self {
            StoreOp::FindNote => "FindNote",
            StoreOp::NoteExists => "NoteExists",
            StoreOp::CreateNamedNote => "CreateNamedNote",
            StoreOp::GetNoteContentsXml => "GetNoteContentsXml",
            StoreOp::SetNoteContentsXml => "SetNoteContentsXml",
            StoreOp::AddTagToNote => "AddTagToNote",
            StoreOp::DisplayNote => "DisplayNote",
        }
    }

    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            StoreOp::CreateNamedNote | StoreOp::SetNoteContentsXml | StoreOp::AddTagToNote
        )
    }
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

pub trait NoteStore: Send {
    /// Returns an empty reference when no note has this title.
    fn find_note(&mut self, title: &str) -> Result<NoteReference>;
    fn note_exists(&mut self, note: &NoteReference) -> Result<bool>;
    fn create_named_note(&mut self, title: &str) -> Result<NoteReference>;
    /// Content as stored, including the `<note-content>` envelope.
    fn get_note_content(&mut self, note: &NoteReference) -> Result<String>;
    fn set_note_content(&mut self, note: &NoteReference, content_xml: &str) -> Result<bool>;
    fn add_tag_to_note(&mut self, note: &NoteReference, tag: &str) -> Result<()>;
    fn display_note(&mut self, note: &NoteReference) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCall {
    pub op: StoreOp,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredNote {
    pub title: String,
    pub content_xml: String,
    pub tags: Vec<String>,
}

#[derive(Default)]
struct Inner {
    notes: BTreeMap<String, StoredNote>,
    next_id: u64,
    calls: Vec<StoreCall>,
    displayed: Vec<NoteReference>,
    stale: BTreeMap<String, NoteReference>,
    fail_on: Option<StoreOp>,
    reject_writes: bool,
}

/// Process-local note store. Clones share the same notes, so a caller can
/// keep a handle for inspection after boxing one into a filer.
#[derive(Clone, Default)]
pub struct InMemoryNoteStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_note(&self, title: &str, content_xml: &str) -> NoteReference {
        let mut inner = self.lock();
        let reference = inner.allocate();
        inner.notes.insert(
            reference.as_str().to_string(),
            StoredNote {
                title: title.to_string(),
                content_xml: content_xml.to_string(),
                tags: Vec::new(),
            },
        );
        reference
    }

    /// Makes lookups of `title` return a reference to a note that no longer
    /// exists, as after the note was deleted in the store's UI.
    pub fn insert_stale_reference(&self, title: &str) -> NoteReference {
        let mut inner = self.lock();
        let reference = inner.allocate();
        inner.stale.insert(title.to_string(), reference.clone());
        reference
    }

    pub fn fail_on(&self, op: StoreOp) {
        self.lock().fail_on = Some(op);
    }

    pub fn reject_writes(&self) {
        self.lock().reject_writes = true;
    }

    pub fn note(&self, note: &NoteReference) -> Option<StoredNote> {
        self.lock().notes.get(note.as_str()).cloned()
    }

    pub fn note_count(&self) -> usize {
        self.lock().notes.len()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    pub fn operations(&self) -> Vec<StoreOp> {
        self.lock().calls.iter().map(|call| call.op).collect()
    }

    pub fn displayed(&self) -> Vec<NoteReference> {
        self.lock().displayed.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self, op: StoreOp, args: &[&str]) -> Result<MutexGuard<'_, Inner>> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall {
            op,
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });
        if inner.fail_on == Some(op) {
            bail!("{op} failed: injected fault");
        }
        Ok(inner)
    }
}

impl Inner {
    fn allocate(&mut self) -> NoteReference {
        self.next_id += 1;
        NoteReference::new(format!("note://memory/{}", self.next_id))
    }

    fn existing_mut(&mut self, note: &NoteReference) -> Result<&mut StoredNote> {
        self.notes
            .get_mut(note.as_str())
            .ok_or_else(|| anyhow!("no note at {note}"))
    }
}

impl NoteStore for InMemoryNoteStore {
    fn find_note(&mut self, title: &str) -> Result<NoteReference> {
        let inner = self.begin(StoreOp::FindNote, &[title])?;
        let found = inner
            .notes
            .iter()
            .find(|(_, note)| note.title == title)
            .map(|(uri, _)| NoteReference::new(uri.clone()))
            .or_else(|| inner.stale.get(title).cloned());
        Ok(found.unwrap_or_default())
    }

    fn note_exists(&mut self, note: &NoteReference) -> Result<bool> {
        let inner = self.begin(StoreOp::NoteExists, &[note.as_str()])?;
        Ok(inner.notes.contains_key(note.as_str()))
    }

    fn create_named_note(&mut self, title: &str) -> Result<NoteReference> {
        let mut inner = self.begin(StoreOp::CreateNamedNote, &[title])?;
        if inner.notes.values().any(|note| note.title == title) {
            bail!("a note titled {title:?} already exists");
        }
        let reference = inner.allocate();
        inner.notes.insert(
            reference.as_str().to_string(),
            StoredNote {
                title: title.to_string(),
                content_xml: content::wrap_envelope(&format!("{title}\n\n")),
                tags: Vec::new(),
            },
        );
        Ok(reference)
    }

    fn get_note_content(&mut self, note: &NoteReference) -> Result<String> {
        let mut inner = self.begin(StoreOp::GetNoteContentsXml, &[note.as_str()])?;
        Ok(inner.existing_mut(note)?.content_xml.clone())
    }

    fn set_note_content(&mut self, note: &NoteReference, content_xml: &str) -> Result<bool> {
        let mut inner =
            self.begin(StoreOp::SetNoteContentsXml, &[note.as_str(), content_xml])?;
        if inner.reject_writes {
            return Ok(false);
        }
        inner.existing_mut(note)?.content_xml = content_xml.to_string();
        Ok(true)
    }

    fn add_tag_to_note(&mut self, note: &NoteReference, tag: &str) -> Result<()> {
        let mut inner = self.begin(StoreOp::AddTagToNote, &[note.as_str(), tag])?;
        let stored = inner.existing_mut(note)?;
        if !stored.tags.iter().any(|existing| existing == tag) {
            stored.tags.push(tag.to_string());
        }
        Ok(())
    }

    fn display_note(&mut self, note: &NoteReference) -> Result<()> {
        let mut inner = self.begin(StoreOp::DisplayNote, &[note.as_str()])?;
        inner.existing_mut(note)?;
        inner.displayed.push(note.clone());
        Ok(())
    }
}
