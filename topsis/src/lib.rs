mod config;
mod validate;

pub mod builder;
pub mod manual;

use log::{debug, info};

pub use crate::config::*;
pub use crate::validate::{validate, validate_for_delivery};

/// Ranks the alternatives of a decision table with the TOPSIS method.
///
/// Arguments:
/// * `table` the alternatives and their value for each criterion
/// * `weights` the weight of each criterion, in the order of the criteria
/// * `impacts` whether each criterion should be maximized or minimized
///
/// The rows of the result are in the same order as the rows of the table. Among
/// alternatives with exactly the same closeness, the one that comes first in the
/// table gets the better rank.
pub fn compute(
    table: &DecisionTable,
    weights: &WeightVector,
    impacts: &ImpactVector,
) -> Result<ResultTable, EngineError> {
    let num_criteria = table.num_criteria();
    if weights.len() != num_criteria || impacts.len() != num_criteria {
        return Err(EngineError::CardinalityMismatch {
            weights: weights.len(),
            impacts: impacts.len(),
            criteria: num_criteria,
        });
    }
    info!(
        "compute: ranking {} alternatives over {} criteria",
        table.num_alternatives(),
        num_criteria
    );

    let weighted = weighted_normalized(&table.matrix, weights.values())?;
    let (ideal_best, ideal_worst) = ideal_points(&weighted, impacts.values(), num_criteria);
    debug!(
        "compute: ideal best: {:?} ideal worst: {:?}",
        ideal_best, ideal_worst
    );

    let mut closeness: Vec<f64> = Vec::with_capacity(weighted.len());
    let mut distances: Vec<(f64, f64)> = Vec::with_capacity(weighted.len());
    for (idx, row) in weighted.iter().enumerate() {
        let d_best = euclidean(row, &ideal_best);
        let d_worst = euclidean(row, &ideal_worst);
        let total = d_best + d_worst;
        if total == 0.0 {
            return Err(EngineError::DegenerateScore(idx));
        }
        closeness.push(d_worst / total);
        distances.push((d_best, d_worst));
    }

    let ranks = assign_ranks(&closeness);

    let rows: Vec<ResultRow> = table
        .labels
        .iter()
        .zip(table.matrix.iter())
        .zip(closeness.iter().zip(ranks.iter()).zip(distances.iter()))
        .map(
            |((label, values), ((c, rank), (d_best, d_worst)))| ResultRow {
                label: label.clone(),
                values: values.clone(),
                closeness: *c,
                score: round_score(*c),
                rank: *rank,
                distance_best: *d_best,
                distance_worst: *d_worst,
            },
        )
        .collect();

    for r in rows.iter() {
        debug!(
            "compute: {} -> closeness {:.6} rank {}",
            r.label, r.closeness, r.rank
        );
    }

    Ok(ResultTable {
        criteria: table.criteria.clone(),
        rows,
        ideal_best,
        ideal_worst,
    })
}

// Each column is divided by its euclidean norm, then multiplied by its weight.
fn weighted_normalized(
    matrix: &[Vec<f64>],
    weights: &[f64],
) -> Result<Vec<Vec<f64>>, EngineError> {
    let mut norms: Vec<f64> = Vec::with_capacity(weights.len());
    for j in 0..weights.len() {
        let norm = matrix.iter().map(|row| row[j] * row[j]).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Err(EngineError::DegenerateColumn(j));
        }
        norms.push(norm);
    }
    debug!("weighted_normalized: column norms: {:?}", norms);
    Ok(matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(norms.iter().zip(weights.iter()))
                .map(|(x, (norm, w))| (x / norm) * w)
                .collect()
        })
        .collect())
}

fn ideal_points(
    weighted: &[Vec<f64>],
    impacts: &[Impact],
    num_criteria: usize,
) -> (Vec<f64>, Vec<f64>) {
    let mut best: Vec<f64> = Vec::with_capacity(num_criteria);
    let mut worst: Vec<f64> = Vec::with_capacity(num_criteria);
    for (j, impact) in impacts.iter().enumerate() {
        let max = weighted
            .iter()
            .map(|row| row[j])
            .fold(f64::NEG_INFINITY, f64::max);
        let min = weighted
            .iter()
            .map(|row| row[j])
            .fold(f64::INFINITY, f64::min);
        match impact {
            Impact::Maximize => {
                best.push(max);
                worst.push(min);
            }
            Impact::Minimize => {
                best.push(min);
                worst.push(max);
            }
        }
    }
    (best, worst)
}

fn euclidean(row: &[f64], point: &[f64]) -> f64 {
    row.iter()
        .zip(point.iter())
        .map(|(x, p)| (x - p) * (x - p))
        .sum::<f64>()
        .sqrt()
}

/// The rank of each alternative, in input order. 1 is the highest closeness.
///
/// The sort is stable: ties keep their input order.
fn assign_ranks(closeness: &[f64]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..closeness.len()).collect();
    order.sort_by(|a, b| closeness[*b].total_cmp(&closeness[*a]));
    let mut ranks: Vec<u32> = vec![0; closeness.len()];
    for (position, idx) in order.iter().enumerate() {
        ranks[*idx] = (position + 1) as u32;
    }
    ranks
}

// Half-way values go to the even neighbour, like numpy.round.
fn round_score(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
