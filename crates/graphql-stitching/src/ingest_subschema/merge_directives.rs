use super::*;
use crate::{MergeDirective, subschemas::MergeDirectiveRecord};

pub(super) fn ingest_merge_directives(ctx: &mut Context<'_>, input: &SubschemaInput) -> Result<(), StitchError> {
    for (type_name, directive) in &input.type_merge_config {
        ingest_merge_directive(ctx, &input.name, type_name, directive)?;
    }
    Ok(())
}

fn ingest_merge_directive(
    ctx: &mut Context<'_>,
    subschema_name: &str,
    type_name: &str,
    directive: &MergeDirective,
) -> Result<(), StitchError> {
    let invalid = |message: String| StitchError::InvalidMergeDirective {
        subschema: subschema_name.to_owned(),
        type_name: type_name.to_owned(),
        message,
    };

    let Some(definition_id) = ctx.subschemas.definition_by_name(type_name, ctx.subschema_id) else {
        return Err(invalid(format!("the subschema does not define a `{type_name}` type")));
    };

    let kind = ctx.subschemas.at(definition_id).kind;
    if kind != DefinitionKind::Object {
        return Err(invalid(format!(
            "merge directives can only target object types, but `{type_name}` is defined as {}",
            kind.as_str()
        )));
    }

    let key_field_name = parse_single_field_key(&directive.selection_set).map_err(|err| match err {
        KeyShapeError::Composite => StitchError::UnsupportedKeyShape {
            subschema: subschema_name.to_owned(),
            type_name: type_name.to_owned(),
        },
        KeyShapeError::Parse(message) => invalid(message),
    })?;

    let key_field = ctx.subschemas.strings.intern(&key_field_name);
    if definition_id.field_by_name(ctx.subschemas, key_field).is_none() {
        return Err(invalid(format!(
            "the `{key_field_name}` key field does not exist on `{type_name}`"
        )));
    }

    // The resolver field must exist on the query root. Subschemas that name
    // their root unconventionally are left to the executor to reject.
    if let Some(query_root) = ctx.subschemas.definition_by_name(QUERY_ROOT_NAME, ctx.subschema_id) {
        let resolver = ctx.subschemas.strings.lookup(&directive.field_name);
        if resolver
            .and_then(|name| query_root.field_by_name(ctx.subschemas, name))
            .is_none()
        {
            return Err(invalid(format!(
                "the `{}` resolver field does not exist on the query root",
                directive.field_name
            )));
        }
    }

    let record = MergeDirectiveRecord {
        type_name: ctx.subschemas.strings.intern(type_name),
        subschema_id: ctx.subschema_id,
        selection_set: ctx.subschemas.strings.intern(&directive.selection_set),
        key_field,
        resolver_field: ctx.subschemas.strings.intern(&directive.field_name),
    };
    ctx.subschemas.push_merge_directive(record);

    Ok(())
}

enum KeyShapeError {
    /// Anything beyond a single field without arguments or subselections.
    /// Composite keys stay unsupported until their routing semantics are
    /// specified.
    Composite,
    Parse(String),
}

fn parse_single_field_key(selection_set: &str) -> Result<String, KeyShapeError> {
    use cynic_parser::executable as ast;

    let document = format!("{{ {selection_set} }}");
    let parsed = cynic_parser::parse_executable_document(&document)
        .map_err(|err| KeyShapeError::Parse(format!("could not parse the key as a selection set: {err}")))?;

    let Some(operation) = parsed.operations().next() else {
        return Err(KeyShapeError::Parse("the key must be a selection set".to_owned()));
    };

    let mut selections = operation.selection_set();
    let Some(first) = selections.next() else {
        return Err(KeyShapeError::Parse("the key selection set is empty".to_owned()));
    };
    if selections.next().is_some() {
        return Err(KeyShapeError::Composite);
    }

    match first {
        ast::Selection::Field(field) => {
            if field.arguments().next().is_some() || field.selection_set().next().is_some() {
                return Err(KeyShapeError::Composite);
            }
            Ok(field.name().to_owned())
        }
        ast::Selection::InlineFragment(_) | ast::Selection::FragmentSpread(_) => Err(KeyShapeError::Composite),
    }
}
