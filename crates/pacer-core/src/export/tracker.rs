//! Progress tracker workbook in SpreadsheetML 2003 XML.
//!
//! Three sheets: `Schedule` holds the same rows as the tabular artifact,
//! `Tracker` adds formula columns over a user-filled `done` column, and
//! `Formulas` documents each formula. Formulas use R1C1 references and are
//! recomputed by the spreadsheet application, not validated here.
//!
//! Accessibility flags only change the `Styles` table.

use std::io::Cursor;

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use super::{tabular::TabularRow, Artifact, Exporter, Format};
use crate::{
    error::{PacerError, Result},
    models::{Accessibility, ExportOptions, Plan},
};

const MEDIA_TYPE: &str = "application/vnd.ms-excel";

const NS_SPREADSHEET: &str = "urn:schemas-microsoft-com:office:spreadsheet";
const NS_OFFICE: &str = "urn:schemas-microsoft-com:office:office";

/// Tracker sheet columns, 1-based positions used by the formulas.
const TRACKER_COLUMNS: [&str; 9] = [
    "week",
    "day",
    "date",
    "rest_day",
    "done",
    "completed",
    "streak",
    "missed",
    "milestone",
];

/// Column, formula (row 2 onward) and explanation for the `Formulas` sheet.
const FORMULA_DOCS: [(&str, &str, &str); 5] = [
    (
        "completed",
        "=IF(AND(RC4=\"no\",RC5<>\"\"),1,0)",
        "1 when a training session has anything entered in 'done'.",
    ),
    (
        "streak",
        "=IF(RC6=1,R[-1]C+1,IF(RC4=\"yes\",R[-1]C,0))",
        "Consecutive completed sessions; rest days keep the streak, a skipped session resets it.",
    ),
    (
        "missed",
        "=IF(AND(RC4=\"no\",RC5=\"\",RC3<TODAY()),1,0)",
        "1 when a training session date has passed and 'done' is empty.",
    ),
    (
        "milestone",
        "=IF(AND(RC6=1,RC2=<last training day>,OR(RC1=1,RC1=<half>,RC1=<last week>)),1,0)",
        "1 on the last training session of the first, middle and final week once completed.",
    ),
    (
        "progress",
        "=IF(<training>=0,0,SUM(completed)/<training>)",
        "Share of training sessions completed, below the last row.",
    ),
];

/// Style-table values derived from the accessibility flags.
struct Palette {
    font: &'static str,
    size: &'static str,
    text: &'static str,
    header_fill: &'static str,
    header_text: &'static str,
    rest_fill: &'static str,
}

impl Palette {
    fn for_accessibility(accessibility: Accessibility) -> Self {
        let (header_fill, header_text, rest_fill) = if accessibility.high_contrast {
            ("#000000", "#FFFFFF", "#FFFF00")
        } else {
            ("#D9E1F2", "#1F1F1F", "#EDEDED")
        };
        Self {
            font: if accessibility.dyslexia_friendly {
                "Verdana"
            } else {
                "Calibri"
            },
            size: if accessibility.large_font { "14" } else { "11" },
            text: if accessibility.high_contrast {
                "#000000"
            } else {
                "#1F1F1F"
            },
            header_fill,
            header_text,
            rest_fill,
        }
    }
}

pub struct TrackerExporter;

impl Exporter for TrackerExporter {
    fn format(&self) -> Format {
        Format::Tracker
    }

    fn render(&self, plan: &Plan, options: &ExportOptions) -> Result<Vec<Artifact>> {
        let bytes = write_workbook(plan, options)
            .map_err(|e| PacerError::export(Format::Tracker).with_reason(e))?;
        Ok(vec![Artifact::new(
            Format::Tracker.artifact_names()[0],
            MEDIA_TYPE,
            bytes,
        )])
    }
}

/// Cell content.
enum Cell<'a> {
    Text(&'a str),
    Number(u32),
    Date(String),
    Formula(String),
    Empty,
}

type XmlResult<T> = std::result::Result<T, quick_xml::Error>;

struct Sheet<W: std::io::Write> {
    writer: Writer<W>,
}

impl<W: std::io::Write> Sheet<W> {
    fn start(&mut self, element: BytesStart<'_>) -> XmlResult<()> {
        self.writer.write_event(Event::Start(element))
    }

    fn end(&mut self, name: &str) -> XmlResult<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, element: BytesStart<'_>) -> XmlResult<()> {
        self.writer.write_event(Event::Empty(element))
    }

    fn text_element(&mut self, name: &str, text: &str) -> XmlResult<()> {
        self.start(BytesStart::new(name))?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn row(&mut self, style: Option<&str>, cells: &[Cell<'_>]) -> XmlResult<()> {
        let mut row = BytesStart::new("Row");
        if let Some(style) = style {
            row.push_attribute(("ss:StyleID", style));
        }
        self.start(row)?;
        for cell in cells {
            self.cell(cell)?;
        }
        self.end("Row")
    }

    fn cell(&mut self, cell: &Cell<'_>) -> XmlResult<()> {
        let mut element = BytesStart::new("Cell");
        let (kind, value) = match cell {
            Cell::Text(text) => ("String", (*text).to_string()),
            Cell::Number(n) => ("Number", n.to_string()),
            Cell::Date(date) => {
                element.push_attribute(("ss:StyleID", "Date"));
                ("DateTime", date.clone())
            }
            Cell::Formula(formula) => {
                element.push_attribute(("ss:Formula", formula.as_str()));
                self.empty(element)?;
                return Ok(());
            }
            Cell::Empty => {
                self.empty(element)?;
                return Ok(());
            }
        };
        self.start(element)?;
        let mut data = BytesStart::new("Data");
        data.push_attribute(("ss:Type", kind));
        self.start(data)?;
        self.writer
            .write_event(Event::Text(BytesText::new(&value)))?;
        self.end("Data")?;
        self.end("Cell")
    }

    fn begin_worksheet(&mut self, name: &str) -> XmlResult<()> {
        let mut sheet = BytesStart::new("Worksheet");
        sheet.push_attribute(("ss:Name", name));
        self.start(sheet)?;
        self.start(BytesStart::new("Table"))
    }

    fn end_worksheet(&mut self) -> XmlResult<()> {
        self.end("Table")?;
        self.end("Worksheet")
    }
}

fn write_style<W: std::io::Write>(
    sheet: &mut Sheet<W>,
    id: &str,
    palette: &Palette,
    header: bool,
    fill: Option<&str>,
) -> XmlResult<()> {
    let mut style = BytesStart::new("Style");
    style.push_attribute(("ss:ID", id));
    sheet.start(style)?;

    let mut font = BytesStart::new("Font");
    font.push_attribute(("ss:FontName", palette.font));
    font.push_attribute(("ss:Size", palette.size));
    if header {
        font.push_attribute(("ss:Color", palette.header_text));
        font.push_attribute(("ss:Bold", "1"));
    } else {
        font.push_attribute(("ss:Color", palette.text));
    }
    sheet.empty(font)?;

    if let Some(fill) = fill {
        let mut interior = BytesStart::new("Interior");
        interior.push_attribute(("ss:Color", fill));
        interior.push_attribute(("ss:Pattern", "Solid"));
        sheet.empty(interior)?;
    }
    sheet.end("Style")
}

fn write_styles<W: std::io::Write>(sheet: &mut Sheet<W>, palette: &Palette) -> XmlResult<()> {
    sheet.start(BytesStart::new("Styles"))?;
    write_style(sheet, "Default", palette, false, None)?;
    write_style(sheet, "Header", palette, true, Some(palette.header_fill))?;
    write_style(sheet, "Rest", palette, false, Some(palette.rest_fill))?;

    let mut date = BytesStart::new("Style");
    date.push_attribute(("ss:ID", "Date"));
    sheet.start(date)?;
    let mut number_format = BytesStart::new("NumberFormat");
    number_format.push_attribute(("ss:Format", "yyyy-mm-dd"));
    sheet.empty(number_format)?;
    sheet.end("Style")?;
    sheet.end("Styles")
}

fn write_schedule<W: std::io::Write>(sheet: &mut Sheet<W>, plan: &Plan) -> XmlResult<()> {
    sheet.begin_worksheet("Schedule")?;
    let header: Vec<Cell<'_>> = super::tabular::COLUMNS
        .iter()
        .map(|c| Cell::Text(c))
        .collect();
    sheet.row(Some("Header"), &header)?;
    for session in plan.sessions() {
        let row = TabularRow::from(session);
        let date = row.date.to_string();
        let rest = if row.rest_day { "true" } else { "false" };
        sheet.row(
            row.rest_day.then_some("Rest"),
            &[
                Cell::Number(row.week),
                Cell::Number(row.day),
                Cell::Text(&date),
                Cell::Text(&row.weekday),
                Cell::Text(&row.start_time),
                Cell::Text(rest),
                Cell::Text(&row.intervals),
                Cell::Number(row.nominal_seconds),
                Cell::Number(row.adjusted_seconds),
                Cell::Text(&row.duration),
                Cell::Text(&row.instruction),
                Cell::Text(&row.tip),
                Cell::Text(&row.note),
            ],
        )?;
    }
    sheet.end_worksheet()
}

fn write_tracker<W: std::io::Write>(sheet: &mut Sheet<W>, plan: &Plan) -> XmlResult<()> {
    let weeks = plan.config.weeks;
    let half = weeks.div_ceil(2);
    // day number of the last weekly slot that is not a rest day
    let last_training_day = plan
        .config
        .weekly_slots()
        .iter()
        .rposition(|&(_, rest_day)| !rest_day)
        .map_or(0, |index| index + 1);
    let training = plan.training_sessions().count();
    let rows = plan.total_sessions();

    sheet.begin_worksheet("Tracker")?;
    let header: Vec<Cell<'_>> = TRACKER_COLUMNS.iter().map(|c| Cell::Text(c)).collect();
    sheet.row(Some("Header"), &header)?;

    for (index, session) in plan.sessions().enumerate() {
        let streak = if index == 0 {
            "=IF(RC6=1,1,0)".to_string()
        } else {
            FORMULA_DOCS[1].1.to_string()
        };
        let milestone = format!(
            "=IF(AND(RC6=1,RC2={last_training_day},OR(RC1=1,RC1={half},RC1={weeks})),1,0)"
        );
        sheet.row(
            session.rest_day.then_some("Rest"),
            &[
                Cell::Number(session.week),
                Cell::Number(session.day),
                Cell::Date(format!("{}T00:00:00.000", session.date)),
                Cell::Text(if session.rest_day { "yes" } else { "no" }),
                Cell::Empty,
                Cell::Formula(FORMULA_DOCS[0].1.to_string()),
                Cell::Formula(streak),
                Cell::Formula(FORMULA_DOCS[2].1.to_string()),
                Cell::Formula(milestone),
            ],
        )?;
    }

    // data rows occupy R2..R{rows + 1}
    let progress = format!(
        "=IF({training}=0,0,SUM(R2C6:R{}C6)/{training})",
        rows + 1
    );
    sheet.row(
        None,
        &[
            Cell::Text("progress"),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Formula(progress),
        ],
    )?;
    sheet.end_worksheet()
}

fn write_formula_docs<W: std::io::Write>(sheet: &mut Sheet<W>) -> XmlResult<()> {
    sheet.begin_worksheet("Formulas")?;
    sheet.row(
        Some("Header"),
        &[Cell::Text("column"), Cell::Text("formula"), Cell::Text("meaning")],
    )?;
    sheet.row(
        None,
        &[
            Cell::Text("done"),
            Cell::Text("(entered by you)"),
            Cell::Text("Type x or any note once the session is done."),
        ],
    )?;
    for (column, formula, meaning) in FORMULA_DOCS {
        sheet.row(
            None,
            &[Cell::Text(column), Cell::Text(formula), Cell::Text(meaning)],
        )?;
    }
    sheet.end_worksheet()
}

fn write_workbook(plan: &Plan, options: &ExportOptions) -> XmlResult<Vec<u8>> {
    let palette = Palette::for_accessibility(options.accessibility);
    let mut sheet = Sheet {
        writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 1),
    };

    sheet
        .writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    sheet
        .writer
        .write_event(Event::PI(BytesText::from_escaped(
            "mso-application progid=\"Excel.Sheet\"",
        )))?;

    let mut workbook = BytesStart::new("Workbook");
    workbook.push_attribute(("xmlns", NS_SPREADSHEET));
    workbook.push_attribute(("xmlns:o", NS_OFFICE));
    workbook.push_attribute(("xmlns:ss", NS_SPREADSHEET));
    sheet.start(workbook)?;

    let mut properties = BytesStart::new("DocumentProperties");
    properties.push_attribute(("xmlns", NS_OFFICE));
    sheet.start(properties)?;
    sheet.text_element("Title", &plan.labels.title)?;
    if let Some(name) = &plan.profile.name {
        sheet.text_element("Author", name)?;
    }
    if let Some(generated_at) = &options.generated_at {
        sheet.text_element("Created", &generated_at.to_string())?;
    }
    sheet.end("DocumentProperties")?;

    write_styles(&mut sheet, &palette)?;
    write_schedule(&mut sheet, plan)?;
    write_tracker(&mut sheet, plan)?;
    write_formula_docs(&mut sheet)?;

    sheet.end("Workbook")?;
    Ok(sheet.writer.into_inner().into_inner())
}
