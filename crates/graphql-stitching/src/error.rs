/// Errors produced by [`stitch()`](crate::stitch()).
///
/// Every variant is fatal for the whole invocation: stitching is a
/// deterministic function of its inputs, so there is no partial output and no
/// internal retry.
#[derive(Debug, thiserror::Error)]
pub enum StitchError {
    /// A subschema was registered with an empty schema document.
    #[error("the `{subschema}` subschema has an empty schema document")]
    MissingSchema { subschema: String },

    /// The subschema's SDL did not parse. The message comes from the parser
    /// unchanged.
    #[error("invalid GraphQL document in the `{subschema}` subschema: {message}")]
    SchemaSyntax { subschema: String, message: String },

    /// Two subschemas in the same request share a name.
    #[error("duplicate subschema name: `{name}`")]
    DuplicateSubschemaName { name: String },

    /// A type is defined in more than one subschema with differing shapes,
    /// and no merge directive reconciles them.
    #[error(
        "the `{type_name}` type is defined with conflicting shapes in the `{first_subschema}` and `{second_subschema}` subschemas, and no merge directive reconciles them"
    )]
    ConflictingTypeShape {
        type_name: String,
        first_subschema: String,
        second_subschema: String,
    },

    /// A field of a merged type is declared with different signatures in two
    /// subschemas.
    #[error(
        "the `{type_name}.{field_name}` field has conflicting signatures in the `{first_subschema}` and `{second_subschema}` subschemas"
    )]
    FieldSignatureConflict {
        type_name: String,
        field_name: String,
        first_subschema: String,
        second_subschema: String,
    },

    /// The merge produced a subschema reference that does not correspond to
    /// any registered subschema. This is an internal invariant violation:
    /// emitting routing metadata with unresolved references would silently
    /// mis-route traffic, so we abort instead.
    #[error("internal error: the merge result references an unknown subschema (index {index})")]
    UnresolvedSubschemaReference { index: usize },

    /// A merge directive does not match the subschema it is declared on.
    #[error("invalid merge directive on `{type_name}` in the `{subschema}` subschema: {message}")]
    InvalidMergeDirective {
        subschema: String,
        type_name: String,
        message: String,
    },

    /// A merge directive key selects more than a single scalar field.
    /// Composite keys are not supported.
    #[error(
        "unsupported key shape on `{type_name}` in the `{subschema}` subschema: only a single field without arguments or subselections is supported as a merge key"
    )]
    UnsupportedKeyShape { subschema: String, type_name: String },
}
