use graphql_stitching::{MergeDirective, StitchError, SubschemaInput, stitch};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn subschema(name: &str, schema: &str) -> SubschemaInput {
    SubschemaInput {
        name: name.to_owned(),
        schema: schema.to_owned(),
        type_merge_config: BTreeMap::new(),
    }
}

fn with_merge_directive(mut input: SubschemaInput, type_name: &str, selection_set: &str, field_name: &str) -> SubschemaInput {
    input.type_merge_config.insert(
        type_name.to_owned(),
        MergeDirective {
            selection_set: selection_set.to_owned(),
            field_name: field_name.to_owned(),
        },
    );
    input
}

fn field_names(nodes: &[graphql_stitching::FieldNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.name.as_str()).collect()
}

#[test]
fn merges_two_subschemas_sharing_a_key() {
    let inputs = [
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
    ];

    let stitched = stitch(&inputs).unwrap();

    insta::assert_snapshot!(stitched.sdl, @r#"
    type Product {
      id: ID!
      name: String
      price: Float
    }
    "#);

    let product = &stitched.merged_types["Product"];
    assert_eq!(product.type_name, "Product");
    assert_eq!(product.selection_sets["A"], "id");
    assert_eq!(product.selection_sets["B"], "id");

    // `id` is declared by both subschemas, so it is shared, not unique.
    assert_eq!(product.unique_fields["name"], "A");
    assert_eq!(product.unique_fields["price"], "B");
    assert!(!product.unique_fields.contains_key("id"));

    assert_eq!(product.declarative_targets["A"], ["B".to_owned()]);
    assert_eq!(product.declarative_targets["B"], ["A".to_owned()]);

    assert_eq!(field_names(&stitched.field_nodes_by_type["Product"]), ["id", "id"]);
    assert_eq!(field_names(&stitched.field_nodes_by_field["id"]["Product"]), ["id", "id"]);
}

#[test]
fn stitching_a_single_subschema_is_the_identity_modulo_formatting() {
    let sdl = r#"
        type Query {
          products(first: Int = 10): [Product!]!
        }

        type Product {
          id: ID!
          name: String
        }
    "#;

    let stitched = stitch(&[subschema("products", sdl)]).unwrap();

    insta::assert_snapshot!(stitched.sdl, @r#"
    type Query {
      products(first: Int = 10): [Product!]!
    }

    type Product {
      id: ID!
      name: String
    }
    "#);

    assert!(stitched.merged_types.is_empty());
    assert!(stitched.field_nodes_by_type.is_empty());
}

#[test]
fn empty_schema_with_merge_directive_is_a_missing_schema() {
    let inputs = [
        with_merge_directive(subschema("A", "  "), "Product", "id", "productById"),
        subschema("B", "type Product { id: ID! }"),
    ];

    let err = stitch(&inputs).unwrap_err();

    assert!(matches!(err, StitchError::MissingSchema { ref subschema } if subschema == "A"));
}

#[test]
fn unparseable_sdl_is_a_syntax_error() {
    let inputs = [
        subschema("A", "type Product {"),
        subschema("B", "type Product { id: ID! }"),
    ];

    let err = stitch(&inputs).unwrap_err();

    assert!(matches!(err, StitchError::SchemaSyntax { ref subschema, .. } if subschema == "A"));
}

#[test]
fn identical_duplicate_types_collapse_without_a_directive() {
    let inputs = [
        subschema("A", "type Status { code: Int }"),
        subschema("B", "type Status { code: Int }"),
    ];

    let stitched = stitch(&inputs).unwrap();

    insta::assert_snapshot!(stitched.sdl, @r#"
    type Status {
      code: Int
    }
    "#);
    assert!(!stitched.merged_types.contains_key("Status"));
}

#[test]
fn conflicting_duplicate_types_are_rejected() {
    let inputs = [
        subschema("A", "type Status { code: Int }"),
        subschema("B", "type Status { code: String }"),
    ];

    let err = stitch(&inputs).unwrap_err();

    assert!(matches!(err, StitchError::ConflictingTypeShape { ref type_name, .. } if type_name == "Status"));
}

#[test]
fn conflicting_enum_values_are_rejected() {
    let inputs = [
        subschema("A", "enum Color { RED GREEN }"),
        subschema("B", "enum Color { RED BLUE }"),
    ];

    let err = stitch(&inputs).unwrap_err();

    assert!(matches!(err, StitchError::ConflictingTypeShape { ref type_name, .. } if type_name == "Color"));
}

#[test]
fn duplicate_subschema_names_are_rejected() {
    let inputs = [
        subschema("A", "type Product { id: ID! }"),
        subschema("A", "type Review { id: ID! }"),
    ];

    let err = stitch(&inputs).unwrap_err();

    assert!(matches!(err, StitchError::DuplicateSubschemaName { ref name } if name == "A"));
}

#[test]
fn conflicting_field_signatures_on_a_merged_type_are_rejected() {
    let inputs = [
        with_merge_directive(
            subschema("A", "type Product { id: ID! sku: String }"),
            "Product",
            "id",
            "productById",
        ),
        with_merge_directive(
            subschema("B", "type Product { id: ID! sku: Int }"),
            "Product",
            "id",
            "productById",
        ),
    ];

    let err = stitch(&inputs).unwrap_err();

    assert!(matches!(
        err,
        StitchError::FieldSignatureConflict { ref type_name, ref field_name, .. }
            if type_name == "Product" && field_name == "sku"
    ));
}

#[test]
fn composite_keys_are_unsupported() {
    let inputs = [with_merge_directive(
        subschema("A", "type Product { id: ID! sku: String }"),
        "Product",
        "id sku",
        "productById",
    )];

    let err = stitch(&inputs).unwrap_err();

    assert!(matches!(err, StitchError::UnsupportedKeyShape { ref type_name, .. } if type_name == "Product"));
}

#[test]
fn nested_keys_are_unsupported() {
    let inputs = [with_merge_directive(
        subschema("A", "type Product { id: ID! }"),
        "Product",
        "profile { id }",
        "productById",
    )];

    let err = stitch(&inputs).unwrap_err();

    assert!(matches!(err, StitchError::UnsupportedKeyShape { .. }));
}

#[test]
fn merge_directive_on_an_undefined_type_is_rejected() {
    let inputs = [with_merge_directive(
        subschema("A", "type Product { id: ID! }"),
        "Review",
        "id",
        "reviewById",
    )];

    let err = stitch(&inputs).unwrap_err();

    assert!(matches!(err, StitchError::InvalidMergeDirective { ref type_name, .. } if type_name == "Review"));
}

#[test]
fn merge_directive_key_must_exist_on_the_type() {
    let inputs = [with_merge_directive(
        subschema("A", "type Product { id: ID! }"),
        "Product",
        "sku",
        "productById",
    )];

    let err = stitch(&inputs).unwrap_err();

    assert!(matches!(err, StitchError::InvalidMergeDirective { .. }));
}

#[test]
fn merge_directive_resolver_must_exist_on_the_query_root() {
    let schema = "type Query { product: Product } type Product { id: ID! }";
    let inputs = [with_merge_directive(subschema("A", schema), "Product", "id", "productById")];

    let err = stitch(&inputs).unwrap_err();

    assert!(matches!(err, StitchError::InvalidMergeDirective { .. }));
}

#[test]
fn mismatched_keys_omit_declarative_targets() {
    let inputs = [
        with_merge_directive(
            subschema("A", "type Product { id: ID! name: String }"),
            "Product",
            "id",
            "productById",
        ),
        with_merge_directive(
            subschema("B", "type Product { sku: ID! price: Float }"),
            "Product",
            "sku",
            "productBySku",
        ),
    ];

    let stitched = stitch(&inputs).unwrap();

    let product = &stitched.merged_types["Product"];
    assert!(product.declarative_targets["A"].is_empty());
    assert!(product.declarative_targets["B"].is_empty());
    assert_eq!(product.selection_sets["A"], "id");
    assert_eq!(product.selection_sets["B"], "sku");
}

#[test]
fn root_types_take_the_union_of_their_fields() {
    let inputs = [
        subschema("A", "type Query { products: [String] }"),
        subschema("B", "type Query { reviews: [String] }"),
    ];

    let stitched = stitch(&inputs).unwrap();

    insta::assert_snapshot!(stitched.sdl, @r#"
    type Query {
      products: [String]
      reviews: [String]
    }
    "#);
    assert!(stitched.merged_types.is_empty());
}

#[test]
fn repeated_invocations_are_deterministic() {
    let inputs = [
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
    ];

    let first = stitch(&inputs).unwrap();
    let second = stitch(&inputs).unwrap();

    assert_eq!(first, second);
}

#[test]
fn every_subschema_name_in_the_output_is_a_registered_input_name() {
    let inputs = [
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
        subschema("C", "type Review { body: String }"),
    ];

    let stitched = stitch(&inputs).unwrap();

    let known = ["A", "B", "C"];
    for merged in stitched.merged_types.values() {
        for name in merged.selection_sets.keys() {
            assert!(known.contains(&name.as_str()));
        }
        for name in merged.unique_fields.values() {
            assert!(known.contains(&name.as_str()));
        }
        for (name, targets) in &merged.declarative_targets {
            assert!(known.contains(&name.as_str()));
            for target in targets {
                assert!(known.contains(&target.as_str()));
            }
        }
    }
}

#[test]
fn merged_type_metadata_serializes_to_json() {
    let inputs = [
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
    ];

    let stitched = stitch(&inputs).unwrap();

    assert_eq!(
        serde_json::to_value(&stitched.merged_types).unwrap(),
        serde_json::json!({
            "Product": {
                "type_name": "Product",
                "selection_sets": { "A": "id", "B": "id" },
                "unique_fields": { "name": "A", "price": "B" },
                "declarative_targets": { "A": ["B"], "B": ["A"] }
            }
        })
    );

    assert_eq!(
        serde_json::to_value(&stitched.field_nodes_by_field).unwrap(),
        serde_json::json!({
            "id": { "Product": [{ "name": "id" }, { "name": "id" }] }
        })
    );
}

#[test]
fn scalars_interfaces_and_unions_deduplicate() {
    let sdl_a = r#"
        scalar DateTime

        interface Node {
          id: ID!
        }

        type Product implements Node {
          id: ID!
        }

        union SearchResult = Product
    "#;
    let sdl_b = r#"
        scalar DateTime

        interface Node {
          id: ID!
        }

        type Review implements Node {
          id: ID!
        }
    "#;

    let stitched = stitch(&[subschema("A", sdl_a), subschema("B", sdl_b)]).unwrap();

    insta::assert_snapshot!(stitched.sdl, @r#"
    scalar DateTime

    interface Node {
      id: ID!
    }

    type Product implements Node {
      id: ID!
    }

    union SearchResult = Product

    type Review implements Node {
      id: ID!
    }
    "#);
}
