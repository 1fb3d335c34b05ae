//! Spreadsheet report assembly.
//!
//! One worksheet per non-empty research table, in fixed phase order. Header
//! row in bold; word counts are written as numbers, everything else as text.

pub mod error;

pub use error::ReportError;

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use seohub_core::{Cell, ResearchTables, SheetRow};

/// Download filename for the assembled report.
pub const REPORT_FILENAME: &str = "SEO_Master_Plan.xlsx";

/// MIME type of the assembled report.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const COMPETITORS_SHEET: &str = "Phase1_Competitors";
pub const COMMUNITY_SHEET: &str = "Phase2_Community";
pub const YOUTUBE_SHEET: &str = "Phase3_YouTube";
pub const AI_INSIGHTS_SHEET: &str = "Phase4_AI_Insights";
pub const PERSONA_SHEET: &str = "Phase5_User_Persona";
pub const CONTENT_BRIEF_SHEET: &str = "Phase6_Content_Brief";

// Excel rejects longer cell strings.
const MAX_CELL_CHARS: usize = 32_767;
const COLUMN_WIDTH: f64 = 40.0;

/// One worksheet's content, flattened from its row type.
struct SheetData {
    name: &'static str,
    headers: &'static [&'static str],
    rows: Vec<Vec<Cell>>,
}

fn sheet<R: SheetRow>(name: &'static str, rows: &[R]) -> SheetData {
    SheetData {
        name,
        headers: R::HEADERS,
        rows: rows.iter().map(R::cells).collect(),
    }
}

/// The non-empty tables in fixed phase order. Both [`sheet_names`] and
/// [`build_workbook`] read from this list.
fn sheets(tables: &ResearchTables) -> Vec<SheetData> {
    [
        sheet(COMPETITORS_SHEET, &tables.competitors),
        sheet(COMMUNITY_SHEET, &tables.community),
        sheet(YOUTUBE_SHEET, &tables.videos),
        sheet(AI_INSIGHTS_SHEET, &tables.qa),
        sheet(PERSONA_SHEET, &tables.personas),
        sheet(CONTENT_BRIEF_SHEET, &tables.briefs),
    ]
    .into_iter()
    .filter(|sheet| !sheet.rows.is_empty())
    .collect()
}

/// Names of the sheets [`build_workbook`] will write, in order.
#[must_use]
pub fn sheet_names(tables: &ResearchTables) -> Vec<&'static str> {
    sheets(tables).iter().map(|sheet| sheet.name).collect()
}

/// Serializes `tables` into an in-memory xlsx workbook.
///
/// # Errors
///
/// Returns [`ReportError::NoData`] when every table is empty, or
/// [`ReportError::Xlsx`] if the workbook cannot be written.
pub fn build_workbook(tables: &ResearchTables) -> Result<Vec<u8>, ReportError> {
    let mut workbook = render_workbook(tables)?;
    let buffer = workbook.save_to_buffer()?;
    tracing::debug!(
        sheets = workbook.worksheets().len(),
        bytes = buffer.len(),
        "report workbook assembled"
    );
    Ok(buffer)
}

fn render_workbook(tables: &ResearchTables) -> Result<Workbook, ReportError> {
    let sheets = sheets(tables);
    if sheets.is_empty() {
        return Err(ReportError::NoData);
    }

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    for data in &sheets {
        write_sheet(&mut workbook, &header, data)?;
    }
    Ok(workbook)
}

fn write_sheet(workbook: &mut Workbook, header: &Format, data: &SheetData) -> Result<(), ReportError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(data.name)?;

    for (col, title) in (0u16..).zip(data.headers) {
        sheet.write_string_with_format(0, col, *title, header)?;
        sheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    for (row, cells) in (1u32..).zip(&data.rows) {
        for (col, cell) in (0u16..).zip(cells) {
            write_cell(sheet, row, col, cell)?;
        }
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<(), ReportError> {
    match cell {
        Cell::Text(text) => {
            let text = match text.char_indices().nth(MAX_CELL_CHARS) {
                Some((idx, _)) => &text[..idx],
                None => text.as_str(),
            };
            sheet.write_string(row, col, text)?;
        }
        Cell::Count(n) => {
            sheet.write_number(row, col, *n as f64)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use seohub_core::{
        CommunityQuestion, CompetitorPage, ContentBrief, FetchStatus, PersonaReport, Platform,
    };

    use super::*;

    fn competitor() -> CompetitorPage {
        CompetitorPage {
            url: "https://a.com".to_string(),
            status: FetchStatus::Success,
            title: "A".to_string(),
            meta_description: "desc".to_string(),
            headings: "[H1]: A".to_string(),
            has_faq_schema: false,
            word_count: 120,
        }
    }

    #[test]
    fn sheet_names_follow_phase_order_and_skip_empty() {
        let tables = ResearchTables {
            competitors: vec![competitor()],
            personas: vec![PersonaReport {
                keyword: "crm".to_string(),
                persona: "AI Not Active".to_string(),
            }],
            briefs: vec![ContentBrief {
                keyword: "crm".to_string(),
                brief: "AI Not Active".to_string(),
            }],
            ..ResearchTables::default()
        };

        assert_eq!(
            sheet_names(&tables),
            vec![COMPETITORS_SHEET, PERSONA_SHEET, CONTENT_BRIEF_SHEET]
        );
    }

    #[test]
    fn empty_tables_are_no_data() {
        let err = build_workbook(&ResearchTables::default()).unwrap_err();
        assert!(matches!(err, ReportError::NoData));
    }

    #[test]
    fn workbook_is_a_zip_container() {
        let tables = ResearchTables {
            competitors: vec![competitor(), CompetitorPage::failed("https://b.com")],
            briefs: vec![ContentBrief {
                keyword: "crm".to_string(),
                brief: "x".repeat(40_000),
            }],
            ..ResearchTables::default()
        };

        let bytes = build_workbook(&tables).expect("workbook");
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn rendered_worksheets_follow_phase_order() {
        let tables = ResearchTables {
            competitors: vec![competitor()],
            community: vec![CommunityQuestion {
                keyword: "crm".to_string(),
                platform: Platform::Reddit,
                question: "Which CRM?".to_string(),
                link: "https://reddit.com/r/crm".to_string(),
            }],
            briefs: vec![ContentBrief {
                keyword: "crm".to_string(),
                brief: "brief".to_string(),
            }],
            ..ResearchTables::default()
        };

        let mut workbook = render_workbook(&tables).expect("workbook");
        let names: Vec<String> = workbook.worksheets().iter().map(Worksheet::name).collect();

        assert_eq!(
            names,
            vec![COMPETITORS_SHEET, COMMUNITY_SHEET, CONTENT_BRIEF_SHEET]
        );
        assert_eq!(names, sheet_names(&tables));
    }
}
