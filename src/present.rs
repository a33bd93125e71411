//! Terminal presentation of render reports.

use std::fmt::Write;

use anyhow::{Context, Result};
use citycast_weather::icons::css_class_or_placeholder;
use citycast_weather::{CityReport, CityReportView, DisplayModel};

/// Plain text widgets, one block per city in list order
pub fn render_text(reports: &[CityReport]) -> String {
    let mut out = String::new();
    for report in reports {
        match &report.outcome {
            Ok(model) => write_widget(&mut out, model),
            Err(e) => {
                let _ = writeln!(out, "[city{}] {}", report.position + 1, report.query);
                let _ = writeln!(out, "  {}", e.user_message());
            }
        }
        out.push('\n');
    }
    out
}

fn write_widget(out: &mut String, model: &DisplayModel) {
    let _ = writeln!(out, "[{}] {}", model.widget_id, model.city_name);

    if let Some(current) = &model.current {
        let _ = writeln!(
            out,
            "  {} ({})  {}  {}",
            current.reading,
            current.reading.color.hex(),
            css_class_or_placeholder(current.icon),
            current.sample.description
        );
    }

    for day in &model.forecast {
        let _ = writeln!(
            out,
            "  {:<10}{} ({})  {}",
            day.day_name,
            day.reading,
            day.reading.color.hex(),
            css_class_or_placeholder(day.icon)
        );
    }

    if let Some(map) = &model.map {
        let _ = writeln!(
            out,
            "  map {} at {:.2}, {:.2} (zoom {}, {} layers)",
            map.surface_id,
            map.center.latitude,
            map.center.longitude,
            map.zoom,
            map.layers.len()
        );
    }
}

/// Reports as a pretty JSON array
pub fn to_json(reports: &[CityReport]) -> Result<String> {
    let views: Vec<CityReportView<'_>> = reports.iter().map(CityReportView::from).collect();
    serde_json::to_string_pretty(&views).context("Failed to serialize reports")
}
