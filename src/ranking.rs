use log::{debug, info};

use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::Path;

use text_diff::print_diff;

use topsis::*;

use crate::args::Args;

mod io_common;
mod io_csv;
mod io_excel;
mod summary;

use crate::ranking::io_common::InputType;

#[derive(Debug, Snafu)]
pub enum RunError {
    #[snafu(display("Could not read file \"{path}\": {source}"))]
    OpeningCsv { source: csv::Error, path: String },
    #[snafu(display("Could not read line {lineno} of \"{path}\": {source}"))]
    CsvLineParse {
        source: csv::Error,
        path: String,
        lineno: usize,
    },
    #[snafu(display("Could not read file \"{path}\": {source}"))]
    OpeningExcel {
        source: calamine::Error,
        path: String,
    },
    #[snafu(display("Could not read the worksheet of \"{path}\": {source}"))]
    ReadingWorksheet {
        source: calamine::Error,
        path: String,
    },
    #[snafu(display("No worksheet named {name:?} in \"{path}\""))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display("The spreadsheet \"{path}\" does not contain any worksheet"))]
    EmptyExcel { path: String },
    #[snafu(display("Unknown input type {input_type:?} (expected csv or excel)"))]
    UnknownInputType { input_type: String },

    #[snafu(display("Input file not found: \"{path}\""))]
    MissingInput { path: String },
    #[snafu(display("{source}"))]
    Validation { source: ValidationError },
    #[snafu(display("Error running TOPSIS: {source}"))]
    Computation { source: EngineError },

    #[snafu(display("Could not format the result: {source}"))]
    FormattingCsv { source: csv::Error },
    #[snafu(display("Could not format the result: {source}"))]
    BufferingCsv { source: std::io::Error },
    #[snafu(display("Could not write file \"{path}\": {source}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Could not write the summary: {source}"))]
    WritingSummary { source: serde_json::Error },
    #[snafu(display("Could not read the reference file \"{path}\": {source}"))]
    ReadingReference {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("The result differs from the reference file \"{path}\""))]
    ReferenceMismatch { path: String },
}

pub type RunResult<T> = Result<T, RunError>;

/// Loads the input table, ranks it and writes the result.
///
/// The result file is written before the optional summary and reference check,
/// so that a failure in those steps still leaves the result available.
pub fn run(args: &Args) -> RunResult<()> {
    let raw = load_table(args)?;

    let validated = match validate(raw.as_ref(), &args.weights, &args.impacts) {
        Err(ValidationError::MissingFile) => {
            return MissingInputSnafu {
                path: args.input.clone(),
            }
            .fail()
        }
        res => res.context(ValidationSnafu)?,
    };
    let (table, weights, impacts) = validated.into_parts();

    let result = compute(&table, &weights, &impacts).context(ComputationSnafu)?;
    info!("ranking: {:?}", result.ranking());

    // The validator only accepts a present table.
    let raw = raw.unwrap_or_default();
    let result_csv = io_csv::format_result(&raw, &result)?;
    fs::write(&args.output, &result_csv).context(WritingOutputSnafu {
        path: args.output.clone(),
    })?;
    info!("run: result written to {}", args.output);

    if let Some(summary_path) = &args.summary {
        let js = summary::build_summary(&result, &weights, &impacts);
        let pretty = serde_json::to_string_pretty(&js).context(WritingSummarySnafu)?;
        if summary_path == "stdout" {
            println!("{}", pretty);
        } else {
            fs::write(summary_path, pretty).context(WritingOutputSnafu {
                path: summary_path.clone(),
            })?;
        }
    }

    if let Some(reference_path) = &args.reference {
        check_reference(reference_path, &result_csv)?;
    }

    Ok(())
}

// A missing input file is not an error here: the validator reports it.
// Nothing above info is logged, stderr only carries the final error line.
fn load_table(args: &Args) -> RunResult<Option<RawTable>> {
    let path = args.input.as_str();
    if !Path::new(path).is_file() {
        debug!("load_table: no file at {:?}", path);
        return Ok(None);
    }
    let input_type = match &args.input_type {
        Some(s) => InputType::parse(s).context(UnknownInputTypeSnafu {
            input_type: s.clone(),
        })?,
        None => InputType::from_path(path),
    };
    info!("Attempting to read {:?} file {:?}", input_type, path);
    let table = match input_type {
        InputType::Csv => io_csv::read_csv_table(path)?,
        InputType::Excel => io_excel::read_excel_table(path, args.worksheet.as_deref())?,
    };
    debug!(
        "load_table: header: {:?}, {} rows",
        table.header,
        table.rows.len()
    );
    Ok(Some(table))
}

fn check_reference(reference_path: &str, computed: &str) -> RunResult<()> {
    let reference = fs::read_to_string(reference_path).context(ReadingReferenceSnafu {
        path: reference_path.to_string(),
    })?;
    let reference = io_common::normalize_lines(&reference);
    let computed = io_common::normalize_lines(computed);
    if reference != computed {
        info!("Found differences with the reference file");
        print_diff(reference.as_str(), computed.as_str(), "\n");
        return ReferenceMismatchSnafu {
            path: reference_path.to_string(),
        }
        .fail();
    }
    info!("check_reference: result matches {}", reference_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::Deserialize;

    #[derive(Debug, Clone, Deserialize)]
    struct ScenarioConfig {
        #[serde(rename = "inputFile")]
        input_file: String,
        weights: String,
        impacts: String,
        worksheet: Option<String>,
    }

    fn test_dir() -> String {
        format!("{}/tests/data", env!("CARGO_MANIFEST_DIR"))
    }

    fn args_for(input: String, weights: &str, impacts: &str, output: String) -> Args {
        Args {
            input,
            weights: weights.to_string(),
            impacts: impacts.to_string(),
            output,
            input_type: None,
            worksheet: None,
            summary: None,
            reference: None,
            verbose: false,
        }
    }

    // Runs tests/data/<name>/<name>_config.json and compares with <name>_expected.csv.
    fn test_wrapper(test_name: &str) {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = format!("{}/{}", test_dir(), test_name);
        let config_str =
            fs::read_to_string(format!("{}/{}_config.json", dir, test_name)).unwrap();
        let config: ScenarioConfig = serde_json::from_str(&config_str).unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("result.csv").display().to_string();
        let mut args = args_for(
            format!("{}/{}", dir, config.input_file),
            &config.weights,
            &config.impacts,
            output,
        );
        args.worksheet = config.worksheet.clone();
        args.reference = Some(format!("{}/{}_expected.csv", dir, test_name));
        let res = run(&args);
        assert!(res.is_ok(), "{}: {:?}", test_name, res);
    }

    #[test]
    fn abc() {
        test_wrapper("abc");
    }

    #[test]
    fn phones() {
        test_wrapper("phones");
    }

    #[test]
    fn phones_excel() {
        test_wrapper("phones_excel");
    }

    #[test]
    fn ties() {
        test_wrapper("ties");
    }

    #[test]
    fn reference_mismatch_keeps_the_output() {
        let dir = format!("{}/abc", test_dir());
        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("result.csv").display().to_string();
        let mut args = args_for(format!("{}/abc.csv", dir), "1,1", "+,-", output.clone());
        args.reference = Some(format!("{}/abc_expected.csv", dir));
        let res = run(&args);
        assert!(matches!(res, Err(RunError::ReferenceMismatch { .. })));
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("Name,P1,P2,Topsis Score,Rank\n"));
    }

    #[test]
    fn writes_a_summary() {
        let dir = format!("{}/phones", test_dir());
        let out_dir = tempfile::tempdir().unwrap();
        let summary_path = out_dir.path().join("summary.json").display().to_string();
        let mut args = args_for(
            format!("{}/phones.csv", dir),
            "1,1,1,1",
            "-,+,+,+",
            out_dir.path().join("result.csv").display().to_string(),
        );
        args.summary = Some(summary_path.clone());
        run(&args).unwrap();
        let js: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(summary_path).unwrap()).unwrap();
        assert_eq!(js["criteria"].as_array().unwrap().len(), 4);
        assert_eq!(js["criteria"][0]["name"], "Price");
        assert_eq!(js["criteria"][0]["impact"], "-");
        assert_eq!(js["results"][2]["label"], "M3");
        assert_eq!(js["results"][2]["rank"], 1);
    }

    #[test]
    fn missing_input_file() {
        let out_dir = tempfile::tempdir().unwrap();
        let args = args_for(
            format!("{}/does_not_exist.csv", test_dir()),
            "1,1",
            "+,+",
            out_dir.path().join("result.csv").display().to_string(),
        );
        let res = run(&args);
        assert!(matches!(res, Err(RunError::MissingInput { .. })));
        let msg = res.unwrap_err().to_string();
        assert!(msg.contains("does_not_exist.csv"), "{}", msg);
    }

    #[test]
    fn validation_errors_are_reported() {
        let dir = format!("{}/abc", test_dir());
        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("result.csv").display().to_string();

        let args = args_for(format!("{}/abc.csv", dir), "1,1,x", "+,+", output.clone());
        let res = run(&args);
        assert!(matches!(
            res,
            Err(RunError::Validation {
                source: ValidationError::WeightParseError(_)
            })
        ));

        let args = args_for(format!("{}/abc.csv", dir), "1,1,1", "+,+,+", output.clone());
        let res = run(&args);
        assert!(matches!(
            res,
            Err(RunError::Validation {
                source: ValidationError::CardinalityMismatch { .. }
            })
        ));
        // Nothing is written when the input is rejected.
        assert!(!Path::new(&output).exists());
    }

    #[test]
    fn unknown_input_type() {
        let dir = format!("{}/abc", test_dir());
        let out_dir = tempfile::tempdir().unwrap();
        let mut args = args_for(
            format!("{}/abc.csv", dir),
            "1,1",
            "+,+",
            out_dir.path().join("result.csv").display().to_string(),
        );
        args.input_type = Some("parquet".to_string());
        assert!(matches!(
            run(&args),
            Err(RunError::UnknownInputType { .. })
        ));
    }
}
