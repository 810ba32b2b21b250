//! The wire messages shared with the host. Hand-written `prost` message
//! structs, so no protoc invocation is needed at build time.
//!
//! All map fields are `btree_map`s: together with the engine's ordered
//! output, this makes the encoded response byte-deterministic for a given
//! request.

use std::collections::BTreeMap;

/// Version both sides of the boundary must agree on. Bumped on any change to
/// the message shapes.
pub const PROTOCOL_VERSION: u32 = 1;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StitchRequest {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(message, repeated, tag = "2")]
    pub subschemas: Vec<Subschema>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Subschema {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub schema: String,
    #[prost(btree_map = "string, message", tag = "3")]
    pub type_merge_config: BTreeMap<String, MergeDirective>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MergeDirective {
    #[prost(string, tag = "1")]
    pub selection_set: String,
    #[prost(string, tag = "2")]
    pub field_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StitchResponse {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(string, tag = "2")]
    pub stitched_schema: String,
    #[prost(btree_map = "string, message", tag = "3")]
    pub field_nodes_by_type: BTreeMap<String, FieldNodeList>,
    #[prost(btree_map = "string, message", tag = "4")]
    pub field_nodes_by_field: BTreeMap<String, FieldNodesByTypeName>,
    #[prost(btree_map = "string, message", tag = "5")]
    pub merged_types: BTreeMap<String, MergedType>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldNode {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldNodeList {
    #[prost(message, repeated, tag = "1")]
    pub nodes: Vec<FieldNode>,
}

/// Map values cannot nest in protobuf, hence this wrapper for the inner map
/// of `field_nodes_by_field`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldNodesByTypeName {
    #[prost(btree_map = "string, message", tag = "1")]
    pub by_type_name: BTreeMap<String, FieldNodeList>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MergedType {
    #[prost(string, tag = "1")]
    pub type_name: String,
    #[prost(btree_map = "string, string", tag = "2")]
    pub selection_sets: BTreeMap<String, String>,
    #[prost(btree_map = "string, string", tag = "3")]
    pub unique_fields: BTreeMap<String, String>,
    #[prost(btree_map = "string, message", tag = "4")]
    pub declarative_targets: BTreeMap<String, SubschemaNameList>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubschemaNameList {
    #[prost(string, repeated, tag = "1")]
    pub names: Vec<String>,
}
