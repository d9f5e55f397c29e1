use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const MANIFEST_FILE: &str = "manifest.json";
pub const SCHEMA_FILE: &str = "schema.json";
pub const MACHINE_FILE: &str = "machine.json";
pub const DATA_FILE: &str = "data.json";
pub const LEGACY_DEFINITION_FILE: &str = "definition.json";
pub const DSL_DIR_ENV: &str = "LUDIZ_DSL_DIR";
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Free-form key/value tree used for the parts of a definition this
/// pipeline does not interpret (classes, states, defaults, static data).
pub type Document = Map<String, Value>;

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

// An explicit `null` reads the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_version))
}

/// Normalized bundle describing one playable experience.
///
/// Absent fields deserialize to empty values; structural problems are
/// reported by validation, not by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(
        default = "default_version",
        deserialize_with = "null_as_default_version"
    )]
    pub version: String,
    #[serde(default)]
    pub schema: Option<Schema>,
    #[serde(default)]
    pub machine: Option<Machine>,
    /// Whitelisted action names, in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Document,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Name of the aggregate root class.
    #[serde(default, deserialize_with = "null_as_default")]
    pub root: String,
    #[serde(default)]
    pub classes: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<Document>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Name of the starting state.
    #[serde(default, deserialize_with = "null_as_default")]
    pub initial: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(default)]
    pub states: Option<Document>,
}

/// Identity and descriptive metadata of a DSL directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
}

impl GameDefinition {
    /// Assembles a definition from the four documents of a DSL directory,
    /// filling the documented manifest defaults.
    pub fn from_parts(
        manifest: Manifest,
        schema: Schema,
        machine: Machine,
        data: Document,
    ) -> Self {
        Self {
            id: manifest.slug,
            name: manifest.name,
            description: manifest.description.unwrap_or_default(),
            version: manifest.version.unwrap_or_else(default_version),
            schema: Some(schema),
            machine: Some(machine),
            actions: manifest.actions.unwrap_or_default(),
            data,
        }
    }

    pub fn class_count(&self) -> usize {
        self.schema
            .as_ref()
            .and_then(|schema| schema.classes.as_ref())
            .map_or(0, |entries| entries.len())
    }

    pub fn state_count(&self) -> usize {
        self.machine
            .as_ref()
            .and_then(|machine| machine.states.as_ref())
            .map_or(0, |entries| entries.len())
    }

    pub fn allows_action(&self, action: &str) -> bool {
        self.actions.iter().any(|allowed| allowed == action)
    }
}
