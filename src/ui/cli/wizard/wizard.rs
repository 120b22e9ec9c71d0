use anyhow::{Context, Result, anyhow};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, PathSpec, UIChoice, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_items<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

/// Walks the user through one choice enum: pick a variant, then fill in its
/// params field by field (defaults come from the schema or
/// [`UIChoice::default_params`]), then any nested subprompts.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let items = kind_items::<C::Kind>();
    let texts: Vec<String> = items.iter().map(|(_, t)| t.clone()).collect();

    let picked = driver.select(C::prompt_label(), C::prompt_help(), &texts)?;
    let choice_kind: C::Kind = items
        .get(picked)
        .map(|(k, _)| *k)
        .ok_or_else(|| anyhow!("no option at index {picked}"))?;

    let key: &'static str = choice_kind.into();
    let schema = C::schema();
    let specs = specs_for_kind(&schema, key)?;

    let defaults = C::default_params(choice_kind);

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        if let Some(val) = prompt_field(driver, &s, init)? {
            params.insert(s.name.clone(), val);
        }
    }

    if let Some(extra) = C::subprompts(driver, choice_kind)? {
        params.extend(extra);
    }
    C::from_parts(choice_kind, Value::Object(params))
}

fn prompt_field<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");

    let is_optional_integer =
        !s.required && s.kind == FieldKind::Integer && matches!(init, None | Some(Value::Null));

    if is_optional_integer {
        let answer = driver.ask_string(&s.title, &format!("{help}\n(leave blank for none)"), "")?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        let n: u64 = answer
            .parse()
            .with_context(|| format!("invalid integer for {}", s.title))?;
        return Ok(Some(Value::from(n)));
    }

    let value = match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();

            let answered = match &s.path {
                Some(spec) => {
                    let more_help = if help.is_empty() {
                        "Please type a valid file path"
                    } else {
                        help
                    };
                    prompt_path_until_ok(driver, &s.title, more_help, &def, spec)?
                        .to_string_lossy()
                        .into_owned()
                }
                None => driver.ask_string(&s.title, help, &def)?,
            };

            // an empty optional string means "not set"
            if answered.trim().is_empty() && !s.required {
                return Ok(None);
            }
            Value::String(answered)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
    };
    Ok(Some(value))
}

fn validate_path_str(input: &str, spec: &PathSpec) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if spec.must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if spec.must_be_file && p.is_dir() {
        return Err("Expected a file path, not a directory".into());
    }
    if !spec.extensions.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if spec.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", spec.extensions.join(" / ."))),
        }
    }
    Ok(())
}

fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    spec: &PathSpec,
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, spec) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}
