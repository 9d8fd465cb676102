//! Typed configuration for the radar-chart collaborator.
//!
//! The renderer consumes the serialized form verbatim, so field names follow
//! its camelCase option schema via serde renames.

use crate::theme::Theme;
use serde::Serialize;

const DATASET_LABEL: &str = "Proficiency (1-5)";
const DATASET_FILL: &str = "rgba(54, 162, 235, 0.2)";
const DATASET_LINE: &str = "rgba(54, 162, 235, 1)";
const POINT_BORDER: &str = "#fff";

#[derive(Serialize, Debug)]
pub struct RadarChartConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: RadarChartData,
    pub options: RadarChartOptions,
}

#[derive(Serialize, Debug)]
pub struct RadarChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<RadarDataset>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RadarDataset {
    pub label: &'static str,
    pub data: Vec<u8>,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u8,
    pub point_background_color: &'static str,
    pub point_border_color: &'static str,
    pub point_hover_background_color: &'static str,
    pub point_hover_border_color: &'static str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RadarChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: RadarScales,
    pub plugins: RadarPlugins,
}

#[derive(Serialize, Debug)]
pub struct RadarScales {
    pub r: RadialScale,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RadialScale {
    pub min: u8,
    pub max: u8,
    pub angle_lines: LineStyle,
    pub grid: LineStyle,
    pub point_labels: PointLabelStyle,
    pub ticks: TickStyle,
}

#[derive(Serialize, Debug)]
pub struct LineStyle {
    pub color: &'static str,
}

#[derive(Serialize, Debug)]
pub struct PointLabelStyle {
    pub color: &'static str,
    pub font: FontStyle,
}

#[derive(Serialize, Debug)]
pub struct FontStyle {
    pub size: u8,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TickStyle {
    pub step_size: u8,
    pub color: &'static str,
    pub backdrop_color: &'static str,
}

#[derive(Serialize, Debug)]
pub struct RadarPlugins {
    pub legend: LegendOptions,
}

#[derive(Serialize, Debug)]
pub struct LegendOptions {
    pub labels: LegendLabelStyle,
}

#[derive(Serialize, Debug)]
pub struct LegendLabelStyle {
    pub color: &'static str,
}

struct ChartPalette {
    axis: &'static str,
    label: &'static str,
    tick: &'static str,
}

fn palette(theme: Theme) -> ChartPalette {
    match theme {
        Theme::Dark => ChartPalette {
            axis: "rgba(255, 255, 255, 0.2)",
            label: "#fff",
            tick: "rgba(255, 255, 255, 0.7)",
        },
        Theme::Light => ChartPalette {
            axis: "rgba(0, 0, 0, 0.2)",
            label: "#333",
            tick: "rgba(0, 0, 0, 0.7)",
        },
    }
}

/// Chart dataset and styling as a pure function of the skill table and the
/// current theme. Labels and values keep the table's order.
pub fn radar_config(skills: &[(&'static str, u8)], theme: Theme) -> RadarChartConfig {
    let palette = palette(theme);

    RadarChartConfig {
        chart_type: "radar",
        data: RadarChartData {
            labels: skills.iter().map(|(skill, _)| *skill).collect(),
            datasets: vec![RadarDataset {
                label: DATASET_LABEL,
                data: skills.iter().map(|(_, score)| *score).collect(),
                background_color: DATASET_FILL,
                border_color: DATASET_LINE,
                border_width: 1,
                point_background_color: DATASET_LINE,
                point_border_color: POINT_BORDER,
                point_hover_background_color: POINT_BORDER,
                point_hover_border_color: DATASET_LINE,
            }],
        },
        options: RadarChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            scales: RadarScales {
                r: RadialScale {
                    min: 0,
                    max: 5,
                    angle_lines: LineStyle {
                        color: palette.axis,
                    },
                    grid: LineStyle {
                        color: palette.axis,
                    },
                    point_labels: PointLabelStyle {
                        color: palette.label,
                        font: FontStyle { size: 12 },
                    },
                    ticks: TickStyle {
                        step_size: 1,
                        color: palette.tick,
                        backdrop_color: "transparent",
                    },
                },
            },
            plugins: RadarPlugins {
                legend: LegendOptions {
                    labels: LegendLabelStyle {
                        color: palette.label,
                    },
                },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_data_keep_table_order() {
        let skills: &[(&str, u8)] = &[("Python", 5), ("PHP", 2)];

        let config = radar_config(skills, Theme::Dark);

        assert_eq!(config.data.labels, vec!["Python", "PHP"]);
        assert_eq!(config.data.datasets.len(), 1);
        assert_eq!(config.data.datasets[0].data, vec![5, 2]);
    }

    #[test]
    fn styling_follows_the_theme() {
        let skills: &[(&str, u8)] = &[("Python", 5)];

        let dark = radar_config(skills, Theme::Dark);
        let light = radar_config(skills, Theme::Light);

        assert_eq!(dark.options.scales.r.grid.color, "rgba(255, 255, 255, 0.2)");
        assert_eq!(light.options.scales.r.grid.color, "rgba(0, 0, 0, 0.2)");
        assert_eq!(dark.options.plugins.legend.labels.color, "#fff");
        assert_eq!(light.options.plugins.legend.labels.color, "#333");
        assert_eq!(dark.data.datasets[0].border_color, light.data.datasets[0].border_color);
    }

    #[test]
    fn serialized_form_matches_the_renderer_schema() {
        let skills: &[(&str, u8)] = &[("Python", 5), ("PHP", 2)];

        let raw = serde_json::to_value(radar_config(skills, Theme::Dark)).expect("serializable");

        assert_eq!(raw["type"], "radar");
        assert_eq!(raw["data"]["labels"][0], "Python");
        assert_eq!(raw["data"]["datasets"][0]["data"][1], 2);
        assert_eq!(raw["data"]["datasets"][0]["backgroundColor"], DATASET_FILL);
        assert_eq!(raw["options"]["maintainAspectRatio"], false);
        assert_eq!(raw["options"]["scales"]["r"]["max"], 5);
        assert_eq!(raw["options"]["scales"]["r"]["ticks"]["stepSize"], 1);
        assert_eq!(
            raw["options"]["scales"]["r"]["ticks"]["backdropColor"],
            "transparent"
        );
        assert_eq!(
            raw["options"]["scales"]["r"]["pointLabels"]["font"]["size"],
            12
        );
    }

    #[test]
    fn full_skill_table_produces_one_axis_per_skill() {
        let config = radar_config(crate::content::SKILL_PROFICIENCY, Theme::Light);

        assert_eq!(config.data.labels.len(), crate::content::SKILL_PROFICIENCY.len());
        assert_eq!(
            config.data.datasets[0].data.len(),
            crate::content::SKILL_PROFICIENCY.len()
        );
    }
}
