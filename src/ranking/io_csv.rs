// Primitives for reading CSV tables and writing CSV results.

use crate::ranking::{io_common::*, *};

pub const SCORE_HEADER: &str = "Topsis Score";
pub const RANK_HEADER: &str = "Rank";

/// Reads a CSV file with a header row.
///
/// Rows of a different length than the header are kept as they are, the
/// validator decides what to do with them.
pub fn read_csv_table(path: &str) -> RunResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .context(OpeningCsvSnafu { path })?;

    let header: Vec<String> = rdr
        .headers()
        .context(CsvLineParseSnafu { path, lineno: 1usize })?
        .iter()
        .map(|s| s.to_string())
        .collect();
    debug!("read_csv_table: header: {:?}", header);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, line_r) in rdr.records().enumerate() {
        // The header is line 1.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { path, lineno })?;
        debug!("read_csv_table: lineno: {:?} row: {:?}", lineno, &line);
        rows.push(line.iter().map(|s| s.to_string()).collect());
    }
    Ok(RawTable::new(header, rows))
}

/// The result as CSV text: the input columns, then the score and the rank.
///
/// The input cells are written back as they were read, so `0.10` stays `0.10`.
/// The rows of `input` and `result` are in the same order.
pub fn format_result(input: &RawTable, result: &ResultTable) -> RunResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);

    let mut header: Vec<&str> = input.header.iter().map(|s| s.as_str()).collect();
    header.push(SCORE_HEADER);
    header.push(RANK_HEADER);
    wtr.write_record(&header).context(FormattingCsvSnafu)?;

    for (cells, row) in input.rows.iter().zip(result.rows.iter()) {
        let mut record: Vec<String> = cells.clone();
        record.push(format_score(row.score));
        record.push(row.rank.to_string());
        wtr.write_record(&record).context(FormattingCsvSnafu)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| e.into_error())
        .context(BufferingCsvSnafu)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn reads_header_and_rows() {
        let f = write_tmp("Name,P1,P2\nA,1,2.5\n\"B, inc\",3,4\n");
        let t = read_csv_table(f.path().to_str().unwrap()).unwrap();
        assert_eq!(t.header, vec!["Name", "P1", "P2"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0], vec!["A", "1", "2.5"]);
        assert_eq!(t.rows[1][0], "B, inc");
    }

    #[test]
    fn keeps_ragged_rows() {
        let f = write_tmp("Name,P1,P2\nA,1\nB,1,2,3\n");
        let t = read_csv_table(f.path().to_str().unwrap()).unwrap();
        assert_eq!(t.rows[0].len(), 2);
        assert_eq!(t.rows[1].len(), 4);
        // The validator rejects them.
        assert!(validate(Some(&t), "1,1", "+,+").is_err());
    }

    #[test]
    fn missing_file() {
        let res = read_csv_table("/nonexistent/dir/input.csv");
        assert!(matches!(res, Err(RunError::OpeningCsv { .. })));
    }

    #[test]
    fn formats_result() {
        let f = write_tmp("Item,Cost,Quality\ncheap,10,2\n\"fancy, big\",40,9.5\n");
        let raw = read_csv_table(f.path().to_str().unwrap()).unwrap();
        let input = validate(Some(&raw), "1,1", "-,+").unwrap();
        let result = compute(&input.table, &input.weights, &input.impacts).unwrap();
        let text = format_result(&raw, &result).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Item,Cost,Quality,Topsis Score,Rank");
        assert!(lines[1].starts_with("cheap,10,2,"));
        assert!(lines[2].starts_with("\"fancy, big\",40,9.5,"));
        assert_eq!(lines.len(), 3);
        assert!(!text.contains('\r'));
    }

    #[test]
    fn echoes_input_cells() {
        let f = write_tmp("Item,Cost,Quality\nA,0.10,1e3\nB,0.20,1e300\n");
        let raw = read_csv_table(f.path().to_str().unwrap()).unwrap();
        let input = validate(Some(&raw), "1,1", "-,+").unwrap();
        let result = compute(&input.table, &input.weights, &input.impacts).unwrap();
        let text = format_result(&raw, &result).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("A,0.10,1e3,"), "{}", lines[1]);
        assert!(lines[2].starts_with("B,0.20,1e300,"), "{}", lines[2]);
    }
}
