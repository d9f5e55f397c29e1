//! Source selection for definition requests
//!
//! Exactly one strategy runs per request, chosen in this order:
//!
//! 1. A definition supplied with the request is returned as-is.
//! 2. A configured DSL directory is loaded with [`load_dsl_definition`].
//! 3. Otherwise the legacy single file is loaded with
//!    [`load_legacy_definition`].
//!
//! The chosen strategy's failure is returned unchanged; there is no fallthrough
//! to a later strategy. Resolutions share no state, so any number may run
//! concurrently.

use crate::config::ResolverConfig;
use crate::dsl::load_dsl_definition;
use crate::error::DefinitionError;
use crate::legacy::load_legacy_definition;
use crate::validator::validate_definition;
use log::info;
use shared::GameDefinition;

/// Inputs handed over by the room runtime when a session asks for a game
#[derive(Debug, Clone)]
pub struct DefinitionRequest {
    pub definition_id: String,
    /// In-process override, e.g. for embedding or tests
    pub config: Option<GameDefinition>,
}

impl DefinitionRequest {
    pub fn new(definition_id: impl Into<String>) -> Self {
        Self {
            definition_id: definition_id.into(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: GameDefinition) -> Self {
        self.config = Some(config);
        self
    }
}

/// Resolves definition requests against a fixed [`ResolverConfig`]
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Produces a candidate definition without validating it
    pub async fn resolve(
        &self,
        request: DefinitionRequest,
    ) -> Result<GameDefinition, DefinitionError> {
        let DefinitionRequest {
            definition_id,
            config,
        } = request;

        if let Some(definition) = config {
            info!("Using provided definition for {}", definition_id);
            return Ok(definition);
        }

        match &self.config.dsl_dir {
            Some(dsl_dir) => load_dsl_definition(dsl_dir, &definition_id).await,
            None => load_legacy_definition(&self.config.legacy_path, &definition_id).await,
        }
    }

    /// Resolves and validates; the only definitions a runtime should accept
    pub async fn load(
        &self,
        request: DefinitionRequest,
    ) -> Result<GameDefinition, DefinitionError> {
        let definition = self.resolve(request).await?;
        validate_definition(&definition)?;
        Ok(definition)
    }
}
