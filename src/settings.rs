use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilerSettings {
    pub notebook: String,
    pub hotkey: String,
    pub bus_name: String,
    pub object_path: String,
    pub interface: String,
}

impl FilerSettings {
    pub fn gnote() -> Self {
        Self {
            bus_name: "org.gnome.Gnote".to_string(),
            object_path: "/org/gnome/Gnote/RemoteControl".to_string(),
            interface: "org.gnome.Gnote.RemoteControl".to_string(),
            ..Self::default()
        }
    }
}

impl Default for FilerSettings {
    fn default() -> Self {
        Self {
            notebook: "Snippets".to_string(),
            hotkey: "Ctrl+Shift+B".to_string(),
            bus_name: "org.gnome.Tomboy".to_string(),
            object_path: "/org/gnome/Tomboy/RemoteControl".to_string(),
            interface: "org.gnome.Tomboy.RemoteControl".to_string(),
        }
    }
}
