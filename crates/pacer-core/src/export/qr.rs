//! Scannable plan summary as QR code SVGs in two size and contrast tiers.

use qrcode::{render::svg, EcLevel, QrCode};

use super::{Artifact, Exporter, Format};
use crate::{
    display::MinutesSeconds,
    error::{PacerError, Result},
    models::{ExportOptions, Plan},
};

const MEDIA_TYPE: &str = "image/svg+xml";

/// Rendering parameters for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrStyle {
    /// Side of one module in pixels
    pub module_px: u32,
    pub dark: &'static str,
    pub light: &'static str,
}

pub const NORMAL: QrStyle = QrStyle {
    module_px: 4,
    dark: "#333333",
    light: "#ffffff",
};

pub const ACCESSIBLE: QrStyle = QrStyle {
    module_px: 8,
    dark: "#000000",
    light: "#ffffff",
};

pub struct QrExporter;

impl Exporter for QrExporter {
    fn format(&self) -> Format {
        Format::Qr
    }

    fn render(&self, plan: &Plan, options: &ExportOptions) -> Result<Vec<Artifact>> {
        let payload = summary(plan, options);
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)
            .map_err(|e| {
                PacerError::export(Format::Qr)
                    .with_reason(format!("{} byte summary does not fit: {e}", payload.len()))
            })?;
        let names = Format::Qr.artifact_names();
        Ok(vec![
            Artifact::new(names[0], MEDIA_TYPE, render_svg(&code, NORMAL).into_bytes()),
            Artifact::new(names[1], MEDIA_TYPE, render_svg(&code, ACCESSIBLE).into_bytes()),
        ])
    }
}

/// Render `code` as SVG. Larger modules also widen the four-module quiet
/// zone in pixels.
pub fn render_svg(code: &QrCode, style: QrStyle) -> String {
    code.render::<svg::Color<'_>>()
        .module_dimensions(style.module_px, style.module_px)
        .dark_color(svg::Color(style.dark))
        .light_color(svg::Color(style.light))
        .quiet_zone(true)
        .build()
}

/// Plain text encoded in the code: header lines, then one line per week with
/// the training dates (`MM-DD`) and the session length.
pub fn summary(plan: &Plan, options: &ExportOptions) -> String {
    let labels = &plan.labels;
    let profile = &plan.profile;
    let mut lines = vec![labels.title.clone()];
    if let Some(name) = &profile.name {
        lines.push(format!("{}: {name}", labels.name));
    }
    if let Some(first) = plan.sessions().next() {
        lines.push(format!(
            "{}: {} {}",
            labels.start_date,
            first.date,
            first.start_time.strftime("%H:%M")
        ));
    }
    if let Some(goal) = &profile.goal {
        lines.push(format!("{}: {goal}", labels.goal));
    }

    for week in &plan.weeks {
        let training: Vec<_> = week.sessions.iter().filter(|s| s.is_training()).collect();
        let dates: Vec<String> = training
            .iter()
            .map(|s| s.date.strftime("%m-%d").to_string())
            .collect();
        let mut line = format!("W{} {}", week.week, dates.join(","));
        if let Some(first) = training.first() {
            line.push_str(&format!(" {}", MinutesSeconds(first.adjusted_seconds)));
        }
        lines.push(line);
    }

    if let Some(link) = &options.share_link {
        lines.push(link.clone());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_short_plan, create_test_plan};

    #[test]
    fn test_summary_covers_every_week() {
        let plan = create_test_plan();
        let text = summary(&plan, &ExportOptions::default());
        assert!(text.contains("Start date: 2025-07-16 07:30"));
        assert!(text.contains("\nW1 07-16,07-18 25:00"));
        assert!(text.contains("\nW10 09-15,09-17,09-19 35:00"));
        assert!(!text.contains("https://"));
    }

    #[test]
    fn test_two_tiers() {
        let plan = create_short_plan(2);
        let artifacts = QrExporter.render(&plan, &ExportOptions::default()).unwrap();
        assert_eq!(artifacts.len(), 2);
        let normal = artifacts[0].text().unwrap();
        let accessible = artifacts[1].text().unwrap();
        assert!(normal.contains("<svg"));
        assert!(normal.contains("#333333"));
        assert!(accessible.contains("#000000"));
        assert_eq!(svg_width(accessible), svg_width(normal) * 2);
    }

    fn svg_width(svg: &str) -> u32 {
        let start = svg.find("width=\"").unwrap() + "width=\"".len();
        let end = start + svg[start..].find('"').unwrap();
        svg[start..end].parse().unwrap()
    }

    #[test]
    fn test_oversized_summary_fails() {
        let mut plan = create_short_plan(1);
        plan.profile.goal = Some("x".repeat(4000));
        let err = QrExporter.render(&plan, &ExportOptions::default()).unwrap_err();
        assert!(matches!(err, PacerError::Export { format: Format::Qr, .. }));
    }
}
