//! Excel workbook rendition of the report.
//!
//! A single worksheet named [`SHEET_NAME`] with a bold, frozen header row.
//! Size and bitrate are numeric cells; every other column is text, and
//! unknown values are left as empty cells.

use anyhow::{Context, Result};
use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};
use std::io::{Read, Seek};

use vidmeta_av::VideoRecord;

use super::{ReportRow, HEADERS};

/// Name of the report worksheet.
pub const SHEET_NAME: &str = "Video Metadata";

const COL_SIZE: ColNum = 1;
const COL_BITRATE: ColNum = 6;

/// Build the report workbook for `records`.
///
/// The caller decides where it goes (`save` to a path, or `save_to_buffer`).
pub fn build_workbook(records: &[VideoRecord]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in (0..).zip(HEADERS) {
        worksheet.write_string_with_format(0, col, title, &bold)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (i, record) in records.iter().enumerate() {
        let row = RowNum::try_from(i + 1).context("Too many rows for one worksheet")?;
        write_row(worksheet, row, &ReportRow::from(record))?;
    }

    worksheet.autofit();

    Ok(workbook)
}

fn write_row(worksheet: &mut Worksheet, row: RowNum, cells: &ReportRow) -> Result<()> {
    let text: [(ColNum, &str); 8] = [
        (0, cells.path.as_str()),
        (2, cells.resolution.as_str()),
        (3, cells.audio_tracks.as_str()),
        (4, cells.video_codec.as_str()),
        (5, cells.profile.as_str()),
        (7, cells.container.as_str()),
        (8, cells.frame_rate.as_str()),
        (9, cells.hdr.as_str()),
    ];
    for (col, value) in text {
        if !value.is_empty() {
            worksheet.write_string(row, col, value)?;
        }
    }

    worksheet.write_number(row, COL_SIZE, cells.size_gb)?;
    if let Some(kbps) = cells.bitrate_kbps {
        worksheet.write_number(row, COL_BITRATE, kbps as f64)?;
    }

    Ok(())
}

/// Read report rows from a workbook, checking the header row.
pub fn read_xlsx<RS: Read + Seek>(reader: RS) -> Result<Vec<ReportRow>> {
    let mut workbook: Xlsx<RS> = Xlsx::new(reader)?;
    let range = workbook
        .worksheet_range(SHEET_NAME)
        .with_context(|| format!("Report has no {:?} worksheet", SHEET_NAME))?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .context("Report worksheet is empty")?
        .iter()
        .map(cell_text)
        .collect();
    if !header.iter().map(String::as_str).eq(HEADERS.iter().copied()) {
        anyhow::bail!("Unexpected report header: {:?}", header);
    }

    Ok(rows.map(row_from_cells).collect())
}

fn row_from_cells(cells: &[Data]) -> ReportRow {
    let text = |col: usize| cells.get(col).map(cell_text).unwrap_or_default();
    let number = |col: usize| cells.get(col).and_then(cell_number);

    ReportRow {
        path: text(0),
        size_gb: number(COL_SIZE as usize).unwrap_or(0.0),
        resolution: text(2),
        audio_tracks: text(3),
        video_codec: text(4),
        profile: text(5),
        bitrate_kbps: number(COL_BITRATE as usize).map(|n| n.round() as u64),
        container: text(7),
        frame_rate: text(8),
        hdr: text(9),
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
