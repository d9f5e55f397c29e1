//! Deprecated single-file definitions (`definition.json` next to the process)

use crate::document::load_document;
use crate::error::{DefinitionError, DefinitionSource};
use log::{info, warn};
use shared::GameDefinition;
use std::path::Path;

/// Loads a whole definition from one document.
///
/// No identity or structural checks happen here; the file is trusted to be
/// the definition requested as `definition_id`.
pub async fn load_legacy_definition(
    path: &Path,
    definition_id: &str,
) -> Result<GameDefinition, DefinitionError> {
    warn!(
        "Loading '{}' from legacy file {} (deprecated, use a DSL directory)",
        definition_id,
        path.display()
    );

    let definition: GameDefinition = load_document(path).await.map_err(|cause| {
        DefinitionError::load(
            definition_id,
            DefinitionSource::Legacy(path.to_path_buf()),
            cause,
        )
    })?;

    info!(
        "Loaded {} v{} from legacy file {}",
        definition.name,
        definition.version,
        path.display()
    );
    Ok(definition)
}
