use anyhow::{Context, Result, anyhow, bail};
use schemars::{Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
}

/// Prompt-relevant view of one field of a choice's `params` object.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub path: Option<PathSpec>,
}

/// Constraints for fields tagged `"format": "path"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSpec {
    pub must_exist: bool,
    pub must_be_file: bool,
    pub extensions: Vec<String>,
}

// Return the whole tagged-enum schema for T
pub fn schema_for<T: schemars::JsonSchema>() -> Schema {
    schema_for!(T)
}

/// Lists the `params` fields of the branch whose `type` equals `kind_key`.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let alts = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(|v| v.as_array())
        .context("missing oneOf/anyOf")?;

    let branch = alts
        .iter()
        .filter_map(|b| b.get("properties").and_then(Value::as_object))
        .find(|props| discriminant_matches(props, kind_key))
        .ok_or_else(|| anyhow!("no branch found for type={kind_key}"))?;

    let Some(params_obj) = branch
        .get("params")
        .and_then(Value::as_object)
        .and_then(|o| resolve_ref_obj(root_obj, o))
    else {
        return Ok(vec![]);
    };

    let Some(params_props) = params_obj.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let required: Vec<&str> = params_obj
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(params_props.len());
    for (name, field_schema) in params_props {
        let mut fs_obj = field_schema
            .as_object()
            .context("field schema not object")?;

        if fs_obj.contains_key("$ref") {
            fs_obj = resolve_ref_obj(root_obj, fs_obj)
                .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;
        }

        let Some(kind) = detect_field_kind(fs_obj.get("type")) else {
            continue;
        };

        let str_of = |key: &str| fs_obj.get(key).and_then(Value::as_str);
        let num_of = |keys: [&str; 2]| keys.iter().find_map(|k| fs_obj.get(*k)?.as_f64());

        out.push(FieldSpec {
            name: name.clone(),
            title: str_of("title").unwrap_or(name).to_string(),
            description: str_of("description").map(str::to_string),
            required: required.contains(&name.as_str()),
            kind,
            default: fs_obj.get("default").cloned(),
            min: num_of(["minimum", "exclusiveMinimum"]),
            max: num_of(["maximum", "exclusiveMaximum"]),
            path: path_spec(fs_obj),
        });
    }

    Ok(out)
}

fn path_spec(fs_obj: &Map<String, Value>) -> Option<PathSpec> {
    if fs_obj.get("format").and_then(Value::as_str) != Some("path") {
        return None;
    }
    let flag = |key: &str| fs_obj.get(key).and_then(Value::as_bool).unwrap_or(false);
    let extensions = fs_obj
        .get("x-extensions")
        .and_then(Value::as_array)
        .map(|a| {
            a.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(PathSpec {
        must_exist: flag("x-must-exist"),
        must_be_file: flag("x-file"),
        extensions,
    })
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tobj) = props.get("type").and_then(Value::as_object) else {
        return false;
    };

    if tobj.get("const").and_then(Value::as_str) == Some(kind_key) {
        return true;
    }
    matches!(
        tobj.get("enum").and_then(Value::as_array).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Resolve a local $ref like "#/$defs/TerminalParameters" against the root object.
/// Objects without a `$ref` are returned unchanged.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    let Some(reference) = obj.get("$ref") else {
        return Some(obj);
    };
    let path = reference.as_str()?.strip_prefix("#/")?;
    let mut cur = root_obj;
    for raw_seg in path.split('/') {
        // JSON Pointer unescape (~1 => /, ~0 => ~)
        let seg = raw_seg.replace("~1", "/").replace("~0", "~");
        cur = cur.get(&seg)?.as_object()?;
    }
    Some(cur)
}

fn kind_from_name(name: &str) -> Option<FieldKind> {
    match name {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    match ty? {
        Value::String(s) => kind_from_name(s),
        // unions like ["integer", "null"] come from Option<T>
        Value::Array(arr) => arr.iter().filter_map(Value::as_str).find_map(kind_from_name),
        _ => None,
    }
}
