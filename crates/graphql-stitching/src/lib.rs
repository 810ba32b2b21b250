//! Stitches a set of independently authored GraphQL subschemas into a single
//! merged schema document plus the routing metadata a request-time executor
//! needs to resolve fields across the original subschemas.
//!
//! The engine is a pure function of one request: register → merge → extract →
//! render, with no state shared between invocations. Any error aborts the
//! whole invocation; there is no partial output.

mod emit_output;
mod error;
mod ingest_subschema;
mod output;
mod render_sdl;
mod stitch;
mod stitch_ir;
mod subschemas;

pub use error::StitchError;
pub use output::{FieldNode, MergedType, StitchedSchema};

use std::collections::{BTreeMap, HashSet};

/// One subschema in a stitching request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubschemaInput {
    /// Unique within the request.
    pub name: String,
    /// The subschema's SDL document.
    pub schema: String,
    /// Type name → how to resolve an instance of that type by key from this
    /// subschema. Empty is legal: a subschema may contribute no merged types.
    pub type_merge_config: BTreeMap<String, MergeDirective>,
}

/// Per-type merge configuration for one subschema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeDirective {
    /// A GraphQL selection set literal: the key fetched from the owning
    /// subschema.
    pub selection_set: String,
    /// The root query field resolving an instance of the merged type by key.
    pub field_name: String,
}

/// Stitches the subschemas together.
pub fn stitch(inputs: &[SubschemaInput]) -> Result<StitchedSchema, StitchError> {
    let mut seen = HashSet::new();
    for input in inputs {
        if !seen.insert(input.name.as_str()) {
            return Err(StitchError::DuplicateSubschemaName {
                name: input.name.clone(),
            });
        }
    }

    let mut subschemas = subschemas::Subschemas::default();
    for input in inputs {
        ingest_subschema::ingest_subschema(input, &mut subschemas)?;
    }
    subschemas.sort_merge_directives();

    tracing::debug!(subschemas = inputs.len(), "merging subschemas");
    let ir = stitch::stitch(&subschemas)?;
    tracing::debug!(
        definitions = ir.definitions.len(),
        merged_types = ir.merged_types.len(),
        "merge complete"
    );

    let sdl = render_sdl::render_sdl(&ir, &subschemas);

    emit_output::emit_output(ir, &subschemas, sdl)
}
