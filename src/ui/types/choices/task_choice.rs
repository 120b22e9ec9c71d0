use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::choices::{SurfaceChoice, UIChoice};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_repeat_count() -> u64 {
    1000
}

fn default_sample_count() -> u64 {
    100_000
}

fn default_progress_frequency() -> u64 {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EstimatePiParams {
    #[schemars(skip)]
    #[serde(default)]
    pub surface: SurfaceChoice,

    #[serde(default = "default_repeat_count")]
    #[schemars(
        title = "Repeat Count",
        description = "How many pi estimates to collect for the histogram",
        range(min = 1),
        default = "default_repeat_count"
    )]
    pub repeat_count: u64,

    #[serde(default = "default_sample_count")]
    #[schemars(
        title = "Sample Count",
        description = "Random points drawn for every single estimate",
        range(min = 1),
        default = "default_sample_count"
    )]
    pub sample_count: u64,

    #[serde(default)]
    #[schemars(
        title = "Seed",
        description = "PRNG seed (None = fresh OS entropy on every run)"
    )]
    pub seed: Option<u64>,

    #[serde(default)]
    #[schemars(
        title = "Chart Title",
        description = "Overrides the default histogram title"
    )]
    pub title: Option<String>,

    #[serde(default = "default_progress_frequency")]
    #[schemars(
        title = "Progress Frequency",
        description = "Log progress every N estimates",
        range(min = 1),
        default = "default_progress_frequency"
    )]
    pub progress_frequency: u64,
}

impl Default for EstimatePiParams {
    fn default() -> Self {
        Self {
            surface: SurfaceChoice::default(),
            repeat_count: default_repeat_count(),
            sample_count: default_sample_count(),
            seed: None,
            title: None,
            progress_frequency: default_progress_frequency(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Estimate Pi",
        detailed_message = "Repeat the Monte Carlo estimator and plot a histogram of the estimates."
    ))]
    EstimatePi(EstimatePiParams),
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            TaskKind::EstimatePi => json!({
                "repeat_count": default_repeat_count(),
                "sample_count": default_sample_count(),
                "seed": null,
                "title": null,
                "progress_frequency": default_progress_frequency(),
            }),
        }
    }

    fn subprompts<D: PromptDriver>(
        driver: &D,
        kind: Self::Kind,
    ) -> anyhow::Result<Option<Map<String, Value>>> {
        match kind {
            TaskKind::EstimatePi => {
                let surface = prompt_choice::<SurfaceChoice, _>(driver)?;

                let mut m = Map::new();
                m.insert("surface".into(), serde_json::to_value(surface)?);
                Ok(Some(m))
            }
        }
    }

    fn from_parts(kind: Self::Kind, params: Value) -> anyhow::Result<Self> {
        match kind {
            TaskKind::EstimatePi => {
                let p: EstimatePiParams = serde_json::from_value(params)?;
                Ok(TaskChoice::EstimatePi(p))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{FieldKind, TerminalParameters, specs_for_kind};

    #[test]
    fn defaults_match_original_component() {
        let p = EstimatePiParams::default();
        assert_eq!(p.repeat_count, 1000);
        assert_eq!(p.sample_count, 100_000);
        assert_eq!(p.seed, None);
        assert_eq!(p.surface, SurfaceChoice::Terminal(TerminalParameters::default()));
    }

    #[test]
    fn minimal_json_fills_defaults() {
        let task: TaskChoice =
            serde_json::from_value(json!({ "type": "estimate-pi", "params": {} })).unwrap();
        let TaskChoice::EstimatePi(p) = task;
        assert_eq!(p, EstimatePiParams::default());
    }

    #[test]
    fn nested_surface_is_read_from_json() {
        let task: TaskChoice = serde_json::from_value(json!({
            "type": "estimate-pi",
            "params": {
                "repeat_count": 10,
                "sample_count": 20,
                "seed": 7,
                "surface": { "type": "series-file", "params": { "path": "out.json" } }
            }
        }))
        .unwrap();
        let TaskChoice::EstimatePi(p) = task;
        assert_eq!((p.repeat_count, p.sample_count, p.seed), (10, 20, Some(7)));
        assert!(matches!(p.surface, SurfaceChoice::SeriesFile(_)));
    }

    #[test]
    fn default_params_round_trip_through_from_parts() {
        let v = <TaskChoice as UIChoice>::default_params(TaskKind::EstimatePi);
        let TaskChoice::EstimatePi(p) =
            <TaskChoice as UIChoice>::from_parts(TaskKind::EstimatePi, v).unwrap();
        assert_eq!(p, EstimatePiParams::default());
    }

    #[test]
    fn schema_exposes_prompted_fields_but_not_surface() {
        let schema = <TaskChoice as UIChoice>::schema();
        let specs = specs_for_kind(&schema, "estimate-pi").unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert!(!names.contains(&"surface"));

        let repeat = specs.iter().find(|s| s.name == "repeat_count").unwrap();
        assert_eq!(repeat.kind, FieldKind::Integer);
        assert_eq!(repeat.title, "Repeat Count");
        assert_eq!(repeat.min, Some(1.0));

        let seed = specs.iter().find(|s| s.name == "seed").unwrap();
        assert_eq!(seed.kind, FieldKind::Integer);
        assert!(!seed.required);

        let title = specs.iter().find(|s| s.name == "title").unwrap();
        assert_eq!(title.kind, FieldKind::String);
    }
}
