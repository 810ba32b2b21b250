use std::collections::BTreeMap;

/// The terminal artifact of one stitching invocation. Immutable once
/// produced.
///
/// All maps are `BTreeMap`s so that the output, and anything serialized from
/// it, is deterministic for a given input.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StitchedSchema {
    /// The merged schema, rendered as SDL.
    pub sdl: String,
    /// For every type name, the field selection nodes observed while walking
    /// merge key selection sets on that type, in walk order.
    pub field_nodes_by_type: BTreeMap<String, Vec<FieldNode>>,
    /// The same nodes, indexed by field name first. The nested map
    /// disambiguates field names that exist on several types.
    pub field_nodes_by_field: BTreeMap<String, BTreeMap<String, Vec<FieldNode>>>,
    /// Routing configuration for every type that at least one subschema
    /// declared a merge directive for.
    pub merged_types: BTreeMap<String, MergedType>,
}

/// A field selection node observed during the merge walk. Only the field name
/// survives; all other AST detail is discarded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldNode {
    pub name: String,
}

/// How a request-time executor resolves one merged type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MergedType {
    pub type_name: String,
    /// Subschema name → the key selection set fetched from that subschema.
    pub selection_sets: BTreeMap<String, String>,
    /// Field name → the single subschema that declares it. Fields declared by
    /// two or more subschemas are shared and never appear here.
    pub unique_fields: BTreeMap<String, String>,
    /// Subschema name → the other contributing subschemas directly reachable
    /// from it when resolving this type.
    pub declarative_targets: BTreeMap<String, Vec<String>>,
}
