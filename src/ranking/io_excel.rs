// Primitives for reading spreadsheets (xlsx, xls, ods).

use calamine::{open_workbook_auto, DataType, Range, Reader};

use crate::ranking::*;

/// Reads the given worksheet, or the first one, as a table with a header row.
///
/// Numeric cells are turned into text, they are parsed again by the validator.
pub fn read_excel_table(path: &str, worksheet: Option<&str>) -> RunResult<RawTable> {
    let wrange = get_range(path, worksheet)?;

    let mut iter = wrange.rows();
    let header: Vec<String> = match iter.next() {
        Some(cells) => cells.iter().map(read_cell).collect(),
        None => Vec::new(),
    };
    debug!("read_excel_table: header: {:?}", header);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, row) in iter.enumerate() {
        debug!("read_excel_table: idx: {:?} row: {:?}", idx, row);
        rows.push(row.iter().map(read_cell).collect());
    }
    Ok(RawTable::new(header, rows))
}

fn get_range(path: &str, worksheet: Option<&str>) -> RunResult<Range<DataType>> {
    debug!("get_range: path: {:?} worksheet: {:?}", path, worksheet);
    let mut workbook = open_workbook_auto(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(name) = worksheet {
        workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { name, path })?
            .context(ReadingWorksheetSnafu { path })
    } else {
        workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu { path })?
            .context(ReadingWorksheetSnafu { path })
    }
}

fn read_cell(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Float(f) => format!("{}", f),
        DataType::Int(i) => i.to_string(),
        DataType::Bool(b) => b.to_string(),
        DataType::Empty => "".to_string(),
        // Dates and error cells are not numbers. Keep something readable for the logs.
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phones_path() -> String {
        format!(
            "{}/tests/data/phones_excel/phones.xlsx",
            env!("CARGO_MANIFEST_DIR")
        )
    }

    #[test]
    fn reads_first_worksheet() {
        let t = read_excel_table(&phones_path(), None).unwrap();
        assert_eq!(t.header, vec!["Model", "Price", "Storage", "Camera", "Looks"]);
        assert_eq!(t.rows.len(), 5);
        assert_eq!(t.rows[0], vec!["M1", "250", "16", "12", "5"]);
    }

    #[test]
    fn reads_named_worksheet() {
        let t = read_excel_table(&phones_path(), Some("Phones")).unwrap();
        assert_eq!(t.rows[4][0], "M5");
    }

    #[test]
    fn unknown_worksheet() {
        let res = read_excel_table(&phones_path(), Some("Laptops"));
        assert!(matches!(res, Err(RunError::MissingWorksheet { .. })));
    }

    #[test]
    fn cells_as_text() {
        assert_eq!(read_cell(&DataType::Float(2.5)), "2.5");
        assert_eq!(read_cell(&DataType::Float(3.0)), "3");
        assert_eq!(read_cell(&DataType::Int(7)), "7");
        assert_eq!(read_cell(&DataType::Empty), "");
    }
}
