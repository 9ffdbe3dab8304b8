use serde::{Deserialize, Serialize};

use super::markup::{classes, escape_html};

/// Visual density of a legend item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendVariant {
    /// Inline swatch, name and value on one row.
    Small,
    /// Stacked swatch and name over a large value with optional unit.
    #[default]
    Large,
}

/// One name/color/value triple shown next to a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendItem {
    pub name: String,
    pub color: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default)]
    pub inactive: bool,
}

impl LegendItem {
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            value: value.into(),
            unit: None,
            inactive: false,
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_inactive(mut self, inactive: bool) -> Self {
        self.inactive = inactive;
        self
    }

    #[must_use]
    pub fn render(&self, variant: LegendVariant) -> String {
        match variant {
            LegendVariant::Small => self.render_small(),
            LegendVariant::Large => self.render_large(),
        }
    }

    fn swatch(&self) -> String {
        format!(
            "<span class=\"{}\" style=\"background-color: {}\"></span>",
            classes("size-2 rounded-full inline-block", self.inactive),
            escape_html(&self.color)
        )
    }

    /// The compact form never shows the unit.
    #[must_use]
    pub fn render_small(&self) -> String {
        format!(
            concat!(
                "<div class=\"inline-flex items-center gap-2\">",
                "{swatch}",
                "<span class=\"{name_class}\">{name}</span>",
                "<span class=\"{value_class}\">{value}</span>",
                "</div>"
            ),
            swatch = self.swatch(),
            name_class = classes("text-xs", self.inactive),
            name = escape_html(&self.name),
            value_class = classes("text-xs font-medium", self.inactive),
            value = escape_html(&self.value),
        )
    }

    #[must_use]
    pub fn render_large(&self) -> String {
        let unit = self
            .unit
            .as_deref()
            .filter(|unit| !unit.is_empty())
            .map(|unit| {
                format!(
                    "<span class=\"{}\">{}</span>",
                    classes("text-xs text-kumo-subtle leading-none", self.inactive),
                    escape_html(unit)
                )
            })
            .unwrap_or_default();

        format!(
            concat!(
                "<div class=\"inline-flex flex-col gap-2 min-w-42 py-2\">",
                "<div class=\"flex items-center gap-2\">",
                "{swatch}",
                "<span class=\"{name_class}\">{name}</span>",
                "</div>",
                "<div class=\"flex items-baseline gap-0.5\">",
                "<span class=\"{value_class}\">{value}</span>",
                "{unit}",
                "</div>",
                "</div>"
            ),
            swatch = self.swatch(),
            name_class = classes("text-xs", self.inactive),
            name = escape_html(&self.name),
            value_class = classes("text-lg font-medium leading-none", self.inactive),
            value = escape_html(&self.value),
            unit = unit,
        )
    }
}
