//! Printable PDF 1.4 document.
//!
//! Layout: a cover block (title, name, start date, goal, accessibility), the
//! per-session table, then resources, optional advisory and share link, and
//! the disclaimer. Text uses the standard Helvetica fonts with
//! WinAnsiEncoding, so no font data is embedded; characters outside that
//! encoding print as `?`.

use std::fmt::Write as _;

use super::{session_heading, session_timing, Artifact, Exporter, Format};
use crate::{
    error::Result,
    models::{format_intervals, ExportOptions, Plan},
};

const MEDIA_TYPE: &str = "application/pdf";

/// A4 portrait in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;

/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.5;

/// Typography derived from the accessibility flags.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Typography {
    size: f32,
    leading: f32,
    /// Fill gray level, 0 is black
    gray: f32,
}

impl Typography {
    fn for_options(options: &ExportOptions) -> Self {
        let access = options.accessibility;
        let size = if access.large_font { 14.0 } else { 10.0 };
        let spacing = if access.dyslexia_friendly { 1.6 } else { 1.3 };
        Self {
            size,
            leading: size * spacing,
            gray: if access.high_contrast { 0.0 } else { 0.2 },
        }
    }

    fn chars_per_line(&self, indent: usize) -> usize {
        let usable = PAGE_WIDTH - 2.0 * MARGIN;
        let chars = (usable / (self.size * GLYPH_WIDTH)) as usize;
        chars.saturating_sub(indent).max(20)
    }

    fn lines_per_page(&self) -> usize {
        ((PAGE_HEIGHT - 2.0 * MARGIN) / self.leading) as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    bold: bool,
}

struct Document {
    typography: Typography,
    lines: Vec<Line>,
}

impl Document {
    fn heading(&mut self, text: &str) {
        self.lines.push(Line {
            text: text.to_string(),
            bold: true,
        });
    }

    fn blank(&mut self) {
        self.lines.push(Line {
            text: String::new(),
            bold: false,
        });
    }

    /// Word-wrapped paragraph; continuation lines are indented.
    fn paragraph(&mut self, text: &str, indent: usize) {
        let width = self.typography.chars_per_line(indent);
        let pad = " ".repeat(indent);
        for line in wrap(text, width) {
            self.lines.push(Line {
                text: format!("{pad}{line}"),
                bold: false,
            });
        }
    }
}

/// Greedy word wrap on character counts. Words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.len();
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Encode a string as a PDF literal string body in WinAnsiEncoding.
fn pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            '\u{a0}'..='\u{ff}' => {
                let _ = write!(out, "\\{:03o}", u32::from(c));
            }
            _ => out.push('?'),
        }
    }
    out
}

pub struct PdfExporter;

impl Exporter for PdfExporter {
    fn format(&self) -> Format {
        Format::Pdf
    }

    fn render(&self, plan: &Plan, options: &ExportOptions) -> Result<Vec<Artifact>> {
        let document = layout(plan, options);
        Ok(vec![Artifact::new(
            Format::Pdf.artifact_names()[0],
            MEDIA_TYPE,
            write_pdf(&document, plan, options),
        )])
    }
}

fn layout(plan: &Plan, options: &ExportOptions) -> Document {
    let labels = &plan.labels;
    let profile = &plan.profile;
    let mut doc = Document {
        typography: Typography::for_options(options),
        lines: Vec::new(),
    };

    doc.heading(&labels.title);
    doc.blank();
    if let Some(name) = &profile.name {
        doc.paragraph(&format!("{}: {name}", labels.name), 0);
    }
    doc.paragraph(&format!("{}: {}", labels.start_date, profile.start_date), 0);
    if let Some(goal) = &profile.goal {
        doc.paragraph(&format!("{}: {goal}", labels.goal), 0);
    }
    if options.accessibility.any() {
        doc.paragraph(
            &format!("Accessibility: {}", options.accessibility.describe()),
            0,
        );
    }

    for week in &plan.weeks {
        doc.blank();
        doc.heading(&format!("{} {}", labels.week, week.week));
        for session in &week.sessions {
            let heading = session_heading(labels, session);
            if session.rest_day {
                doc.paragraph(
                    &format!("{} {heading}: {}", session.date, labels.rest_day),
                    0,
                );
                continue;
            }
            doc.paragraph(&format!("{}  {heading}", session_timing(session)), 0);
            if !session.intervals.is_empty() {
                doc.paragraph(&format_intervals(&session.intervals), 4);
            }
            doc.paragraph(&session.instruction, 4);
            doc.paragraph(&session.tip, 4);
        }
    }

    doc.blank();
    doc.heading(&labels.notes);
    if let Some(advisory) = &options.advisory {
        doc.paragraph(advisory, 0);
    }
    if let Some(link) = &options.share_link {
        doc.paragraph(link, 0);
    }
    doc.paragraph(&labels.resources, 0);
    doc.blank();
    doc.paragraph(&labels.disclaimer, 0);
    if let Some(generated_at) = &options.generated_at {
        doc.blank();
        doc.paragraph(&format!("Generated: {generated_at}"), 0);
    }
    doc
}

/// Content stream for one page of lines.
fn page_stream(lines: &[Line], typography: Typography) -> String {
    let mut stream = String::new();
    let top = PAGE_HEIGHT - MARGIN - typography.size;
    let _ = writeln!(stream, "BT");
    let _ = writeln!(stream, "{:.2} g", typography.gray);
    let _ = writeln!(stream, "{:.1} TL", typography.leading);
    let _ = writeln!(stream, "{MARGIN:.1} {top:.1} Td");
    let mut bold = None;
    for line in lines {
        if bold != Some(line.bold) {
            let font = if line.bold { "F2" } else { "F1" };
            let size = if line.bold {
                typography.size + 2.0
            } else {
                typography.size
            };
            let _ = writeln!(stream, "/{font} {size:.1} Tf");
            bold = Some(line.bold);
        }
        let _ = writeln!(stream, "({}) Tj T*", pdf_string(&line.text));
    }
    let _ = writeln!(stream, "ET");
    stream
}

/// Serialize the laid out document, tracking byte offsets for the xref table.
fn write_pdf(document: &Document, plan: &Plan, options: &ExportOptions) -> Vec<u8> {
    let per_page = document.typography.lines_per_page().max(1);
    let pages: Vec<&[Line]> = document.lines.chunks(per_page).collect();

    // 1 catalog, 2 pages, 3 regular font, 4 bold font, 5 info,
    // then a page object and a content object per page
    let first_page = 6;
    let object_count = first_page + 2 * pages.len();
    let mut out: Vec<u8> = Vec::new();
    let mut offsets = vec![0usize; object_count];

    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let mut object = |out: &mut Vec<u8>, id: usize, body: &str| {
        offsets[id] = out.len();
        out.extend_from_slice(format!("{id} 0 obj\n{body}\nendobj\n").as_bytes());
    };

    object(&mut out, 1, "<< /Type /Catalog /Pages 2 0 R >>");
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", first_page + 2 * i))
        .collect();
    object(
        &mut out,
        2,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ),
    );
    object(
        &mut out,
        3,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );
    object(
        &mut out,
        4,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
    );
    let mut info = format!(
        "<< /Title ({}) /Producer (Pacer)",
        pdf_string(&plan.labels.title)
    );
    if let Some(generated_at) = &options.generated_at {
        let _ = write!(
            info,
            " /CreationDate (D:{})",
            generated_at.strftime("%Y%m%d%H%M%SZ")
        );
    }
    info.push_str(" >>");
    object(&mut out, 5, &info);

    for (i, lines) in pages.iter().enumerate() {
        let page_id = first_page + 2 * i;
        let content_id = page_id + 1;
        object(
            &mut out,
            page_id,
            &format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {content_id} 0 R >>"
            ),
        );
        let stream = page_stream(lines, document.typography);
        object(
            &mut out,
            content_id,
            &format!(
                "<< /Length {} >>\nstream\n{stream}endstream",
                stream.len()
            ),
        );
    }

    let xref_offset = out.len();
    let mut xref = format!("xref\n0 {object_count}\n0000000000 65535 f \n");
    for offset in offsets.iter().skip(1) {
        let _ = writeln!(xref, "{offset:010} 00000 n ");
    }
    let _ = write!(
        xref,
        "trailer\n<< /Size {object_count} /Root 1 0 R /Info 5 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
    );
    out.extend_from_slice(xref.as_bytes());
    out
}
