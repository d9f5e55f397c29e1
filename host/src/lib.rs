//! # Game Definition Host Library
//!
//! Locates, assembles and validates game definitions before a room runtime
//! executes them. A definition bundles the game's data schema, its state
//! machine, the whitelist of invokable actions and opaque static data.
//!
//! ## Pipeline
//!
//! ```text
//! DefinitionRequest -> Resolver -> (DSL directory | legacy file) -> Validator -> GameDefinition
//! ```
//!
//! ### Source Resolver (`resolver`)
//! Picks one strategy per request: an override supplied with the request, a
//! configured DSL directory, or the deprecated single `definition.json`.
//!
//! ### DSL Directory Loader (`dsl`)
//! Reads `manifest.json`, `schema.json`, `machine.json` and `data.json` from one
//! directory. The manifest slug must equal the requested identifier.
//!
//! ### Legacy Loader (`legacy`)
//! Reads a complete definition from a single document.
//!
//! ### Validator (`validator`)
//! Checks that the required sections exist and that the schema root class and
//! the machine's initial state are actually defined.
//!
//! ### Document Store Access (`document`)
//! Async file reads and JSON parsing with typed failures.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use host::config::ResolverConfig;
//! use host::resolver::{DefinitionRequest, Resolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = Resolver::new(ResolverConfig::default().with_dsl_dir("./dsl"));
//!
//!     let definition = resolver.load(DefinitionRequest::new("maze-escape")).await?;
//!     println!("{} v{}", definition.name, definition.version);
//!
//!     Ok(())
//! }
//! ```
//!
//! Every resolution reads fresh documents and builds an independent value.
//! Nothing is cached or shared between requests.

pub mod config;
pub mod document;
pub mod dsl;
pub mod error;
pub mod legacy;
pub mod resolver;
pub mod validator;

pub use config::ResolverConfig;
pub use error::{DefinitionError, DefinitionSource, DocumentError, Invariant, ValidationError};
pub use resolver::{DefinitionRequest, Resolver};
pub use validator::validate_definition;
