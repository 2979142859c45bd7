use serde::Serialize;

use crate::ranking::*;

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct CriterionSummary {
    pub name: String,
    pub weight: f64,
    pub impact: String,
    #[serde(rename = "idealBest")]
    pub ideal_best: f64,
    #[serde(rename = "idealWorst")]
    pub ideal_worst: f64,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct AlternativeSummary {
    pub label: String,
    pub score: f64,
    pub closeness: f64,
    pub rank: u32,
    #[serde(rename = "distanceBest")]
    pub distance_best: f64,
    #[serde(rename = "distanceWorst")]
    pub distance_worst: f64,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct Summary {
    pub criteria: Vec<CriterionSummary>,
    pub results: Vec<AlternativeSummary>,
}

pub fn build_summary(
    result: &ResultTable,
    weights: &WeightVector,
    impacts: &ImpactVector,
) -> Summary {
    let criteria = result
        .criteria
        .iter()
        .zip(weights.values().iter().zip(impacts.values().iter()))
        .zip(result.ideal_best.iter().zip(result.ideal_worst.iter()))
        .map(|((name, (w, impact)), (best, worst))| CriterionSummary {
            name: name.clone(),
            weight: *w,
            impact: impact.symbol().to_string(),
            ideal_best: *best,
            ideal_worst: *worst,
        })
        .collect();
    let results = result
        .rows
        .iter()
        .map(|r| AlternativeSummary {
            label: r.label.clone(),
            score: r.score,
            closeness: r.closeness,
            rank: r.rank,
            distance_best: r.distance_best,
            distance_worst: r.distance_worst,
        })
        .collect();
    Summary { criteria, results }
}
