use std::process::Command;

use anyhow::{bail, Result};
use log::debug;

pub trait SelectionProvider: Send {
    fn selected_text(&self) -> Result<String>;
}

/// Reads the X11 PRIMARY selection through the first reader that can be
/// started: `xclip`, then `xsel`.
pub struct CommandSelectionProvider {
    readers: Vec<(String, Vec<String>)>,
}

impl CommandSelectionProvider {
    pub fn with_readers<P, A>(readers: impl IntoIterator<Item = (P, A)>) -> Self
    where
        P: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            readers: readers
                .into_iter()
                .map(|(program, args)| (program.into(), args.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }
}

impl Default for CommandSelectionProvider {
    fn default() -> Self {
        Self::with_readers([
            ("xclip", vec!["-selection", "primary", "-o"]),
            ("xsel", vec!["--primary", "--output"]),
        ])
    }
}

impl SelectionProvider for CommandSelectionProvider {
    fn selected_text(&self) -> Result<String> {
        for (program, args) in &self.readers {
            let output = match Command::new(program).args(args).output() {
                Ok(output) => output,
                Err(err) => {
                    debug!("{program} unavailable: {err}");
                    continue;
                }
            };
            // xclip exits non-zero when nothing owns the selection.
            if !output.status.success() {
                debug!("{program} exited with {}, treating selection as empty", output.status);
                return Ok(String::new());
            }
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }
        bail!("could not read the primary selection (install xclip or xsel)")
    }
}

pub struct StaticSelection(pub String);

impl SelectionProvider for StaticSelection {
    fn selected_text(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
