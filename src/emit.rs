//! Capability seams toward the host CAD application
//!
//! The live host is never touched directly. Two narrow traits stand in for
//! it: [`ExistingNameChecker`] answers "does this layer already exist in the
//! open document?", and [`CommandEmitter`] receives each finalized record at
//! session handoff. [`ScriptEmitter`] renders the same `-LAYER` command-line
//! sequence the host would execute, which keeps the whole pipeline testable
//! without a CAD application present.

use crate::error::Result;
use crate::store::LayerRecord;
use crate::types::LayerName;

/// Inbound predicate over the host document's layer table
pub trait ExistingNameChecker {
    /// Whether a layer with this name already exists in the host document
    fn exists(&self, name: &LayerName) -> bool;
}

impl<F> ExistingNameChecker for F
where
    F: Fn(&LayerName) -> bool,
{
    fn exists(&self, name: &LayerName) -> bool {
        self(name)
    }
}

/// Checker for sessions with no host document attached
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExistingNames;

impl ExistingNameChecker for NoExistingNames {
    fn exists(&self, _name: &LayerName) -> bool {
        false
    }
}

/// Outbound handoff of finalized layer records
pub trait CommandEmitter {
    /// Emit a create-or-update request for one fully populated record
    fn emit(&mut self, record: &LayerRecord) -> Result<()>;
}

/// Renders records as the host's `-LAYER` command-line sequence.
///
/// Per record, three command strings:
///
/// ```text
/// -LAYER M <name>
/// C T <r>,<g>,<b>
///
/// L <linetype>
/// ```
///
/// each terminated the way the host's command line expects (blank entries
/// accept the command's follow-up prompts).
#[derive(Debug, Clone, Default)]
pub struct ScriptEmitter {
    commands: Vec<String>,
}

impl ScriptEmitter {
    /// Create an empty emitter
    pub fn new() -> Self {
        Self::default()
    }

    /// The individual command strings emitted so far
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// The full script; commands carry their own terminators
    pub fn script(&self) -> String {
        self.commands.concat()
    }
}

impl CommandEmitter for ScriptEmitter {
    fn emit(&mut self, record: &LayerRecord) -> Result<()> {
        self.commands.push(format!("-LAYER M {}\n", record.name));
        self.commands
            .push(format!("C T {}\n\n", record.color.truecolor_arg()));
        self.commands.push(format!("L {}\n\n\n", record.linetype));
        Ok(())
    }
}
