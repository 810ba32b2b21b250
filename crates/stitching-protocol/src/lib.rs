//! The host boundary of the stitching engine.
//!
//! The host calls exactly one function, [`stitch()`], handing it the request
//! as a length-delimited protobuf blob and getting the response back the same
//! way. One invocation runs the whole cycle of decoding, registering, merging,
//! extracting and encoding. Any error aborts it with no partial output; the
//! caller retries from scratch with corrected input, if at all.

pub mod proto;

pub use prost;

use graphql_stitching::{MergeDirective, StitchError, StitchedSchema, SubschemaInput};
use prost::Message;

/// Errors surfaced across the host boundary.
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    /// The request blob did not decode, or was produced for another protocol
    /// version. Always fatal; there is no partial-decode recovery.
    #[error("malformed stitching request: {message}")]
    MalformedRequest { message: String },

    /// The request decoded but stitching failed.
    #[error(transparent)]
    Stitch(#[from] StitchError),
}

/// Handles one stitching request end to end.
pub fn stitch(request_bytes: &[u8]) -> Result<Vec<u8>, BoundaryError> {
    let request = {
        let _span = tracing::debug_span!("decode_request", len = request_bytes.len()).entered();
        decode_request(request_bytes)?
    };

    let inputs = to_engine_inputs(request);

    let stitched = {
        let _span = tracing::debug_span!("stitch", subschemas = inputs.len()).entered();
        graphql_stitching::stitch(&inputs)?
    };

    let _span = tracing::debug_span!("encode_response").entered();
    Ok(encode_response(&stitched))
}

fn decode_request(bytes: &[u8]) -> Result<proto::StitchRequest, BoundaryError> {
    let request = proto::StitchRequest::decode_length_delimited(bytes).map_err(|err| {
        BoundaryError::MalformedRequest {
            message: err.to_string(),
        }
    })?;

    if request.version != proto::PROTOCOL_VERSION {
        return Err(BoundaryError::MalformedRequest {
            message: format!(
                "unsupported protocol version {} (expected {})",
                request.version,
                proto::PROTOCOL_VERSION
            ),
        });
    }

    Ok(request)
}

fn to_engine_inputs(request: proto::StitchRequest) -> Vec<SubschemaInput> {
    request
        .subschemas
        .into_iter()
        .map(|subschema| SubschemaInput {
            name: subschema.name,
            schema: subschema.schema,
            type_merge_config: subschema
                .type_merge_config
                .into_iter()
                .map(|(type_name, directive)| {
                    (
                        type_name,
                        MergeDirective {
                            selection_set: directive.selection_set,
                            field_name: directive.field_name,
                        },
                    )
                })
                .collect(),
        })
        .collect()
}

/// Pure and total: everything in the output was validated by the engine.
fn encode_response(stitched: &StitchedSchema) -> Vec<u8> {
    let field_nodes_by_type = stitched
        .field_nodes_by_type
        .iter()
        .map(|(type_name, nodes)| (type_name.clone(), to_node_list(nodes)))
        .collect();

    let field_nodes_by_field = stitched
        .field_nodes_by_field
        .iter()
        .map(|(field_name, by_type_name)| {
            let by_type_name = by_type_name
                .iter()
                .map(|(type_name, nodes)| (type_name.clone(), to_node_list(nodes)))
                .collect();
            (field_name.clone(), proto::FieldNodesByTypeName { by_type_name })
        })
        .collect();

    let merged_types = stitched
        .merged_types
        .iter()
        .map(|(type_name, merged)| {
            let declarative_targets = merged
                .declarative_targets
                .iter()
                .map(|(subschema, targets)| {
                    (subschema.clone(), proto::SubschemaNameList {
                        names: targets.clone(),
                    })
                })
                .collect();

            (type_name.clone(), proto::MergedType {
                type_name: merged.type_name.clone(),
                selection_sets: merged.selection_sets.clone(),
                unique_fields: merged.unique_fields.clone(),
                declarative_targets,
            })
        })
        .collect();

    let response = proto::StitchResponse {
        version: proto::PROTOCOL_VERSION,
        stitched_schema: stitched.sdl.clone(),
        field_nodes_by_type,
        field_nodes_by_field,
        merged_types,
    };

    response.encode_length_delimited_to_vec()
}

fn to_node_list(nodes: &[graphql_stitching::FieldNode]) -> proto::FieldNodeList {
    proto::FieldNodeList {
        nodes: nodes
            .iter()
            .map(|node| proto::FieldNode { name: node.name.clone() })
            .collect(),
    }
}
