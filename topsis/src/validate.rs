use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::*;

// Same acceptance rule as the web form: something@domain.tld, no spaces.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").unwrap());

/// Checks a raw table and the raw weights and impacts strings.
///
/// Arguments:
/// * `table` the table read by the loader, or `None` if there was no input file
/// * `weights` comma-separated weights, for example `"1,1,2"`
/// * `impacts` comma-separated impacts, for example `"+,-,+"`
///
/// The checks stop at the first failure. They run in this order: presence of
/// the inputs, number of columns, numeric columns, weights, impacts, and
/// finally the agreement between the counts.
pub fn validate(
    table: Option<&RawTable>,
    weights: &str,
    impacts: &str,
) -> Result<ValidatedInput, ValidationError> {
    let table = check_presence(table, weights, impacts)?;
    check_content(table, weights, impacts)
}

/// Same as [validate], for callers that deliver the result to an email address.
///
/// The address must be present and well-formed. It is checked before the
/// content of the table.
pub fn validate_for_delivery(
    table: Option<&RawTable>,
    weights: &str,
    impacts: &str,
    recipient: &str,
) -> Result<ValidatedInput, ValidationError> {
    let table = check_presence(table, weights, impacts)?;
    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(ValidationError::MissingField("an email address".to_string()));
    }
    if !EMAIL_PATTERN.is_match(recipient) {
        return Err(ValidationError::EmailFormatError(recipient.to_string()));
    }
    check_content(table, weights, impacts)
}

fn check_presence<'a>(
    table: Option<&'a RawTable>,
    weights: &str,
    impacts: &str,
) -> Result<&'a RawTable, ValidationError> {
    let table = table.ok_or(ValidationError::MissingFile)?;
    if weights.trim().is_empty() {
        return Err(ValidationError::MissingField("weights".to_string()));
    }
    if impacts.trim().is_empty() {
        return Err(ValidationError::MissingField("impacts".to_string()));
    }
    Ok(table)
}

fn check_content(
    table: &RawTable,
    weights: &str,
    impacts: &str,
) -> Result<ValidatedInput, ValidationError> {
    let decision_table = read_decision_table(table)?;
    let weights = parse_weights(weights)?;
    let impacts = parse_impacts(impacts)?;

    let num_criteria = decision_table.num_criteria();
    if weights.len() != num_criteria || impacts.len() != num_criteria {
        return Err(ValidationError::CardinalityMismatch {
            weights: weights.len(),
            impacts: impacts.len(),
            criteria: num_criteria,
        });
    }

    debug!(
        "validate: {} alternatives, criteria: {:?}, weights: {:?}, impacts: {:?}",
        decision_table.num_alternatives(),
        decision_table.criteria,
        weights,
        impacts
    );

    Ok(ValidatedInput {
        table: decision_table,
        weights: WeightVector(weights),
        impacts: ImpactVector(impacts),
    })
}

// Schema then numeric content, column by column.
fn read_decision_table(table: &RawTable) -> Result<DecisionTable, ValidationError> {
    let num_columns = table.num_columns();
    if num_columns < 3 {
        return Err(ValidationError::SchemaError(format!(
            "Input file must contain three or more columns (found {}).",
            num_columns
        )));
    }
    if let Some((idx, row)) = table
        .rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() > num_columns)
    {
        return Err(ValidationError::SchemaError(format!(
            "Row {} has {} cells but the header only has {} columns.",
            idx + 1,
            row.len(),
            num_columns
        )));
    }
    if table.rows.is_empty() {
        return Err(ValidationError::NoAlternatives);
    }

    let criteria: Vec<String> = table.header[1..].to_vec();
    let mut matrix: Vec<Vec<f64>> = vec![Vec::with_capacity(criteria.len()); table.rows.len()];
    for (offset, name) in criteria.iter().enumerate() {
        let col = offset + 1;
        for (row, values) in table.rows.iter().zip(matrix.iter_mut()) {
            let value = row
                .get(col)
                .and_then(|cell| parse_number(cell))
                .ok_or_else(|| ValidationError::NonNumericColumn(name.clone()))?;
            values.push(value);
        }
    }

    let labels: Vec<String> = table
        .rows
        .iter()
        .map(|row| row.first().cloned().unwrap_or_default())
        .collect();

    Ok(DecisionTable {
        criteria,
        labels,
        matrix,
    })
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

fn parse_weights(raw: &str) -> Result<Vec<f64>, ValidationError> {
    raw.split(',')
        .map(|token| {
            parse_number(token)
                .filter(|w| *w >= 0.0)
                .ok_or_else(|| ValidationError::WeightParseError(token.trim().to_string()))
        })
        .collect()
}

fn parse_impacts(raw: &str) -> Result<Vec<Impact>, ValidationError> {
    raw.split(',')
        .map(|token| {
            let token = token.trim();
            Impact::from_token(token)
                .ok_or_else(|| ValidationError::ImpactParseError(token.to_string()))
        })
        .collect()
}
