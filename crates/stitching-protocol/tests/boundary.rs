use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use stitching_protocol::{BoundaryError, proto, stitch};
use stitching_protocol::prost::Message;

fn subschema(name: &str, schema: &str) -> proto::Subschema {
    proto::Subschema {
        name: name.to_owned(),
        schema: schema.to_owned(),
        type_merge_config: BTreeMap::new(),
    }
}

fn with_merge_directive(
    mut subschema: proto::Subschema,
    type_name: &str,
    selection_set: &str,
    field_name: &str,
) -> proto::Subschema {
    subschema.type_merge_config.insert(
        type_name.to_owned(),
        proto::MergeDirective {
            selection_set: selection_set.to_owned(),
            field_name: field_name.to_owned(),
        },
    );
    subschema
}

fn encode_request(subschemas: Vec<proto::Subschema>) -> Vec<u8> {
    proto::StitchRequest {
        version: proto::PROTOCOL_VERSION,
        subschemas,
    }
    .encode_length_delimited_to_vec()
}

#[test]
fn stitches_a_request_end_to_end() {
    let request = encode_request(vec![
        with_merge_directive(
            subschema("A", "type Product { id: ID! name: String }"),
            "Product",
            "id",
            "productById",
        ),
        with_merge_directive(
            subschema("B", "type Product { id: ID! price: Float }"),
            "Product",
            "id",
            "productById",
        ),
    ]);

    let response_bytes = stitch(&request).unwrap();
    let response = proto::StitchResponse::decode_length_delimited(&response_bytes[..]).unwrap();

    assert_eq!(response.version, proto::PROTOCOL_VERSION);

    insta::assert_snapshot!(response.stitched_schema, @r#"
    type Product {
      id: ID!
      name: String
      price: Float
    }
    "#);

    let product = &response.merged_types["Product"];
    assert_eq!(product.selection_sets["A"], "id");
    assert_eq!(product.unique_fields["name"], "A");
    assert_eq!(product.unique_fields["price"], "B");
    assert_eq!(product.declarative_targets["A"].names, ["B"]);
    assert_eq!(product.declarative_targets["B"].names, ["A"]);

    let nodes = &response.field_nodes_by_type["Product"].nodes;
    assert_eq!(nodes.len(), 2);
    assert!(nodes.iter().all(|node| node.name == "id"));

    let by_field = &response.field_nodes_by_field["id"].by_type_name["Product"];
    assert_eq!(by_field.nodes.len(), 2);
}

#[test]
fn garbage_bytes_are_a_malformed_request() {
    let err = stitch(&[0xff, 0xff, 0xff, 0xff, 0xff]).unwrap_err();

    assert!(matches!(err, BoundaryError::MalformedRequest { .. }));
}

#[test]
fn a_truncated_request_is_a_malformed_request() {
    let request = encode_request(vec![subschema("A", "type Product { id: ID! }")]);

    let err = stitch(&request[..request.len() / 2]).unwrap_err();

    assert!(matches!(err, BoundaryError::MalformedRequest { .. }));
}

#[test]
fn a_future_protocol_version_is_a_malformed_request() {
    let request = proto::StitchRequest {
        version: proto::PROTOCOL_VERSION + 1,
        subschemas: vec![subschema("A", "type Product { id: ID! }")],
    }
    .encode_length_delimited_to_vec();

    let err = stitch(&request).unwrap_err();

    assert!(matches!(err, BoundaryError::MalformedRequest { .. }));
    assert!(err.to_string().contains("unsupported protocol version"));
}

#[test]
fn engine_errors_cross_the_boundary() {
    let request = encode_request(vec![
        with_merge_directive(subschema("A", ""), "Product", "id", "productById"),
    ]);

    let err = stitch(&request).unwrap_err();

    assert!(matches!(err, BoundaryError::Stitch(_)));
    assert!(err.to_string().contains("A"));
}

#[test]
fn responses_are_byte_identical_across_invocations() {
    let request = encode_request(vec![
        with_merge_directive(
            subschema("A", "type Product { id: ID! name: String }"),
            "Product",
            "id",
            "productById",
        ),
        with_merge_directive(
            subschema("B", "type Product { id: ID! price: Float }"),
            "Product",
            "id",
            "productById",
        ),
    ]);

    let first = stitch(&request).unwrap();
    let second = stitch(&request).unwrap();

    assert_eq!(first, second);
}
