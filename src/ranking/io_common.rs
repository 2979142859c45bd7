use std::path::Path;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Csv,
    Excel,
}

impl InputType {
    pub fn parse(s: &str) -> Option<InputType> {
        match s.to_lowercase().as_str() {
            "csv" => Some(InputType::Csv),
            "excel" | "xlsx" | "xls" | "ods" => Some(InputType::Excel),
            _ => None,
        }
    }

    /// Spreadsheet extensions select the spreadsheet reader, everything else is read as CSV.
    pub fn from_path(path: &str) -> InputType {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("xlsx") | Some("xls") | Some("xlsm") | Some("xlsb") | Some("ods") => {
                InputType::Excel
            }
            _ => InputType::Csv,
        }
    }
}

/// Renders a score with at least one decimal: `0.5`, `1.0`.
pub fn format_score(x: f64) -> String {
    format!("{:?}", x)
}

// CRLF and trailing blank lines do not count as differences.
pub fn normalize_lines(s: &str) -> String {
    let lines: Vec<&str> = s.lines().map(|l| l.trim_end()).collect();
    lines.join("\n").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_type_from_extension() {
        assert_eq!(InputType::from_path("data.csv"), InputType::Csv);
        assert_eq!(InputType::from_path("data.XLSX"), InputType::Excel);
        assert_eq!(InputType::from_path("dir.v2/data.ods"), InputType::Excel);
        assert_eq!(InputType::from_path("data"), InputType::Csv);
        assert_eq!(InputType::from_path("data.txt"), InputType::Csv);
    }

    #[test]
    fn input_type_from_name() {
        assert_eq!(InputType::parse("CSV"), Some(InputType::Csv));
        assert_eq!(InputType::parse("excel"), Some(InputType::Excel));
        assert_eq!(InputType::parse("json"), None);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(0.53), "0.53");
        assert_eq!(format_score(1.0), "1.0");
    }

    #[test]
    fn line_endings() {
        assert_eq!(normalize_lines("a,b\r\nc,d\r\n\n"), "a,b\nc,d");
    }
}
