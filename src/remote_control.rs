use anyhow::{bail, Context, Result};
use log::debug;
use serde::{de::DeserializeOwned, Serialize};
use zbus::{
    blocking::{Connection, Proxy},
    zvariant::{DynamicType, Type},
};

use crate::{
    model::NoteReference,
    note_store::{NoteStore, StoreOp},
    settings::FilerSettings,
};

pub struct RemoteControlStore {
    connection: Connection,
    bus_name: String,
    object_path: String,
    interface: String,
}

impl RemoteControlStore {
    pub fn connect(settings: &FilerSettings) -> Result<Self> {
        let connection = Connection::session().context("failed to connect to the session bus")?;
        Ok(Self::with_connection(connection, settings))
    }

    pub fn with_connection(connection: Connection, settings: &FilerSettings) -> Self {
        Self {
            connection,
            bus_name: settings.bus_name.clone(),
            object_path: settings.object_path.clone(),
            interface: settings.interface.clone(),
        }
    }

    fn call<B, R>(&self, op: StoreOp, body: &B) -> Result<R>
    where
        B: Serialize + DynamicType,
        R: DeserializeOwned + Type,
    {
        debug!("{} {op}", self.bus_name);
        let proxy = Proxy::new(
            &self.connection,
            self.bus_name.as_str(),
            self.object_path.as_str(),
            self.interface.as_str(),
        )
        .with_context(|| format!("invalid remote-control address for {op}"))?;
        proxy
            .call(op.method_name(), body)
            .with_context(|| format!("{op} call to {} failed", self.bus_name))
    }
}

impl NoteStore for RemoteControlStore {
    fn find_note(&mut self, title: &str) -> Result<NoteReference> {
        self.call::<_, String>(StoreOp::FindNote, &(title,))
            .map(NoteReference::new)
    }

    fn note_exists(&mut self, note: &NoteReference) -> Result<bool> {
        self.call(StoreOp::NoteExists, &(note.as_str(),))
    }

    fn create_named_note(&mut self, title: &str) -> Result<NoteReference> {
        let uri: String = self.call(StoreOp::CreateNamedNote, &(title,))?;
        if uri.is_empty() {
            bail!("note store refused to create {title:?}");
        }
        Ok(NoteReference::new(uri))
    }

    fn get_note_content(&mut self, note: &NoteReference) -> Result<String> {
        self.call(StoreOp::GetNoteContentsXml, &(note.as_str(),))
    }

    fn set_note_content(&mut self, note: &NoteReference, content_xml: &str) -> Result<bool> {
        self.call(StoreOp::SetNoteContentsXml, &(note.as_str(), content_xml))
    }

    fn add_tag_to_note(&mut self, note: &NoteReference, tag: &str) -> Result<()> {
        self.call(StoreOp::AddTagToNote, &(note.as_str(), tag))
    }

    fn display_note(&mut self, note: &NoteReference) -> Result<()> {
        self.call(StoreOp::DisplayNote, &(note.as_str(),))
    }
}
