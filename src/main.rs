use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use snippet_filer::{
    CommandSelectionProvider, FilerSettings, FilingOutcome, InMemoryNoteStore, NoteFiler,
    NoteStore, RemoteControlStore, SelectionProvider, SettingsStore, StaticSelection,
};

/// File the selected text into a Tomboy note named after the page.
#[derive(Parser, Debug)]
#[command(name = "snippet-filer", version)]
struct Args {
    /// Title of the page the text came from; also the note title
    #[arg(long)]
    title: String,

    /// Address of the page the text came from
    #[arg(long)]
    url: String,

    /// Text to file instead of the primary selection
    #[arg(long)]
    text: Option<String>,

    /// Settings file (defaults to ~/.config/snippet-filer/settings.json)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Notebook to tag the note into, overriding the settings file
    #[arg(long)]
    notebook: Option<String>,

    /// Talk to Gnote instead of Tomboy
    #[arg(long)]
    gnote: bool,

    /// File into a throwaway in-memory store and print the note
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(outcome) => {
            if let Some(note) = outcome.reference() {
                println!("{}: {note}", outcome.label());
            } else {
                println!("{}", outcome.label());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("snippet-filer: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_settings(args: &Args) -> Result<FilerSettings> {
    let path = args.settings.clone().or_else(SettingsStore::default_path);
    let mut settings = match path {
        Some(path) => {
            let store = SettingsStore::new(path);
            log::debug!("settings from {}", store.path().display());
            store.load()?
        }
        None => FilerSettings::default(),
    };
    if args.gnote {
        settings = FilerSettings {
            notebook: settings.notebook,
            hotkey: settings.hotkey,
            ..FilerSettings::gnote()
        };
    }
    if let Some(notebook) = &args.notebook {
        settings.notebook = notebook.clone();
    }
    Ok(settings)
}

fn run(args: Args) -> Result<FilingOutcome> {
    let settings = load_settings(&args).context("failed loading settings")?;
    let selection: Box<dyn SelectionProvider> = match &args.text {
        Some(text) => Box::new(StaticSelection(text.clone())),
        None => Box::new(CommandSelectionProvider::default()),
    };

    let preview = args.dry_run.then(InMemoryNoteStore::new);
    let store: Box<dyn NoteStore> = match &preview {
        Some(memory) => Box::new(memory.clone()),
        None => Box::new(RemoteControlStore::connect(&settings)?),
    };

    let mut filer = NoteFiler::new(store, &settings);
    if preview.is_some() {
        println!(
            "dry run: {} would tag notes {}",
            settings.hotkey,
            filer.tag()
        );
    }
    let outcome = filer.file_selection(selection.as_ref(), &args.title, &args.url)?;

    if let (Some(memory), Some(note)) = (&preview, outcome.reference()) {
        if let Some(stored) = memory.note(note) {
            println!("{}", stored.content_xml);
        }
    }
    Ok(outcome)
}
