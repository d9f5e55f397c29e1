//! Four-document DSL directories
//!
//! A DSL directory holds `manifest.json`, `schema.json`, `machine.json` and
//! `data.json`. Documents are read strictly in that order and the manifest
//! slug is checked before anything else is touched. Any failure aborts the
//! whole assembly.

use crate::document::load_document;
use crate::error::{DefinitionError, DefinitionSource, DocumentError};
use log::info;
use shared::{
    Document, GameDefinition, Machine, Manifest, Schema, DATA_FILE, MACHINE_FILE, MANIFEST_FILE,
    SCHEMA_FILE,
};
use std::path::Path;

/// Assembles the definition stored in `dsl_dir`, which must declare
/// `definition_id` as its slug.
pub async fn load_dsl_definition(
    dsl_dir: &Path,
    definition_id: &str,
) -> Result<GameDefinition, DefinitionError> {
    let wrap = |cause: DocumentError| {
        DefinitionError::load(
            definition_id,
            DefinitionSource::Directory(dsl_dir.to_path_buf()),
            cause,
        )
    };

    let manifest: Manifest = load_document(&dsl_dir.join(MANIFEST_FILE))
        .await
        .map_err(wrap)?;

    if manifest.slug != definition_id {
        return Err(DefinitionError::IdentityMismatch {
            requested: definition_id.to_string(),
            declared: manifest.slug,
        });
    }

    let schema: Schema = load_document(&dsl_dir.join(SCHEMA_FILE))
        .await
        .map_err(wrap)?;
    let machine: Machine = load_document(&dsl_dir.join(MACHINE_FILE))
        .await
        .map_err(wrap)?;
    let data: Document = load_document(&dsl_dir.join(DATA_FILE))
        .await
        .map_err(wrap)?;

    let definition = GameDefinition::from_parts(manifest, schema, machine, data);

    info!(
        "Loaded {} v{} from DSL directory {}",
        definition.name,
        definition.version,
        dsl_dir.display()
    );
    Ok(definition)
}
