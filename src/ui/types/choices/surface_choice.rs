use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Widest bar the terminal surface accepts. Mirrored by the schema range.
pub const MAX_BAR_WIDTH: u64 = 200;

fn default_bar_width() -> u64 {
    50
}

fn default_html_path() -> PathBuf {
    PathBuf::from("monte_carlo_pi.html")
}

fn default_series_path() -> PathBuf {
    PathBuf::from("monte_carlo_pi.csv")
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TerminalParameters {
    #[serde(default = "default_bar_width")]
    #[schemars(
        title = "Bar Width",
        description = "Characters used by the tallest histogram bar",
        range(min = 1, max = 200),
        default = "default_bar_width"
    )]
    pub bar_width: u64,
}

impl Default for TerminalParameters {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HtmlPageParameters {
    #[serde(default = "default_html_path")]
    #[schemars(
        with = "String",
        title = "HTML Path",
        description = "Where to write the page with the Plotly histogram",
        extend(
            "format" = "path",
            "x-file" = true,
            "x-must-exist" = false,
            "x-extensions" = ["html", "htm"]
        )
    )]
    pub path: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        title = "Plotly Script",
        description = "URL of plotly.js to load (None = the pinned CDN build)"
    )]
    pub plotly_src: Option<String>,
}

impl Default for HtmlPageParameters {
    fn default() -> Self {
        Self {
            path: default_html_path(),
            plotly_src: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SeriesFileParameters {
    #[serde(default = "default_series_path")]
    #[schemars(
        with = "String",
        title = "Series Path",
        description = "Where to write the raw estimates (.csv, .tsv or .json)",
        extend(
            "format" = "path",
            "x-file" = true,
            "x-must-exist" = false,
            "x-extensions" = ["csv", "tsv", "json"]
        )
    )]
    pub path: PathBuf,
}

impl Default for SeriesFileParameters {
    fn default() -> Self {
        Self {
            path: default_series_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SurfaceKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SurfaceChoice {
    #[strum_discriminants(strum(
        message = "Terminal",
        detailed_message = "Draw a text histogram on standard output."
    ))]
    Terminal(TerminalParameters),

    #[strum_discriminants(strum(
        message = "HTML Page",
        detailed_message = "Write a standalone page with an interactive Plotly histogram."
    ))]
    HtmlPage(HtmlPageParameters),

    #[strum_discriminants(strum(
        message = "Series File",
        detailed_message = "Export the raw estimates as CSV, TSV or JSON."
    ))]
    SeriesFile(SeriesFileParameters),
}

impl Default for SurfaceChoice {
    fn default() -> Self {
        SurfaceChoice::Terminal(TerminalParameters::default())
    }
}

impl UIChoice for SurfaceChoice {
    type Kind = SurfaceKind;

    fn schema() -> Schema {
        schema_for!(SurfaceChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose where to show the histogram:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            SurfaceKind::Terminal => json!({ "bar_width": default_bar_width() }),
            SurfaceKind::HtmlPage => json!({ "path": default_html_path() }),
            SurfaceKind::SeriesFile => json!({ "path": default_series_path() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::specs_for_kind;
    use serde_json::{Value, json};
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn tagged_enum_serialization() {
        let v = serde_json::to_value(SurfaceChoice::default()).unwrap();
        assert_eq!(v, json!({ "type": "terminal", "params": { "bar_width": 50 } }));

        let v = serde_json::to_value(SurfaceChoice::HtmlPage(HtmlPageParameters::default()))
            .unwrap();
        assert_eq!(v.get("type").and_then(Value::as_str), Some("html-page"));
        assert_eq!(v["params"]["path"], json!("monte_carlo_pi.html"));
    }

    #[test]
    fn missing_params_apply_defaults() {
        let p: TerminalParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, TerminalParameters::default());
        let p: SeriesFileParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.path, PathBuf::from("monte_carlo_pi.csv"));
    }

    #[test]
    fn bar_width_range_matches_build_limit() {
        let schema = <SurfaceChoice as UIChoice>::schema();
        let specs = specs_for_kind(&schema, "terminal").unwrap();
        let bar = specs.iter().find(|s| s.name == "bar_width").unwrap();
        assert_eq!(bar.min, Some(1.0));
        assert_eq!(bar.max, Some(MAX_BAR_WIDTH as f64));
    }

    #[test]
    fn plotly_src_is_optional_in_task_files() {
        let p: HtmlPageParameters =
            serde_json::from_value(json!({ "path": "pi.html" })).unwrap();
        assert_eq!(p.plotly_src, None);

        let p: HtmlPageParameters = serde_json::from_value(
            json!({ "path": "pi.html", "plotly_src": "plotly.min.js" }),
        )
        .unwrap();
        assert_eq!(p.plotly_src.as_deref(), Some("plotly.min.js"));
    }

    #[test]
    fn default_params_rebuild_every_kind() {
        for kind in SurfaceKind::iter() {
            let params = <SurfaceChoice as UIChoice>::default_params(kind);
            let rebuilt = <SurfaceChoice as UIChoice>::from_parts(kind, params).unwrap();
            let got: &'static str = SurfaceKind::from(&rebuilt).into();
            let want: &'static str = kind.into();
            assert_eq!(got, want);
        }
    }

    #[test]
    fn discriminant_messages_available() {
        for kind in SurfaceKind::iter() {
            assert!(kind.get_message().is_some());
            assert!(kind.get_detailed_message().is_some());
        }
    }
}
