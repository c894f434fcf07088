use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::script::operationscript::{
    OperationScript,
    ScriptReport
};
use crate::script::scripterror::ScriptError;

/// Shipped example scripts, resolved against the crate root so the binary
/// finds them from any working directory.
pub const DEFAULT_SCRIPT_PATH: &'static str = concat!(env!("CARGO_MANIFEST_DIR"), "/json/sequences.json");

/// Operation scripts loaded from JSON. A document holds either a single
/// script object or an array of them.
pub struct Configuration {
    scripts: Vec<OperationScript>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration { scripts: Vec::new() }
    }

    pub fn scripts(&self) -> &[OperationScript] {
        &self.scripts
    }

    pub fn from_reader<P: AsRef<Path>>(&mut self, file_path: P) -> Result<(), ScriptError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.insert_from_json(json_value)
    }

    pub fn from_json_str(&mut self, json: &str) -> Result<(), ScriptError> {
        let json_value: serde_json::Value = serde_json::from_str(json)?;
        self.insert_from_json(json_value)
    }

    fn insert_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ScriptError> {
        if json_value.is_array() {
            let scripts: Vec<OperationScript> = serde_json::from_value(json_value)?;
            self.scripts.extend(scripts);
        } else {
            let script: OperationScript = serde_json::from_value(json_value)?;
            self.scripts.push(script);
        }
        Ok(())
    }

    pub fn replay_all(&self) -> Vec<ScriptReport> {
        self.scripts.iter().map(|script| script.replay()).collect()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
