// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// A table as produced by a tabular reader (CSV, spreadsheet).
///
/// The first column holds the labels of the alternatives, all the other columns are
/// candidate criteria. Nothing has been checked yet: cells are kept as text.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> RawTable {
        RawTable { header, rows }
    }

    pub fn num_columns(&self) -> usize {
        self.header.len()
    }
}

/// The direction of preference for a criterion.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Impact {
    /// Higher values are better (`+`).
    Maximize,
    /// Lower values are better (`-`).
    Minimize,
}

impl Impact {
    /// Parses a single impact token. Only `+` and `-` are accepted.
    pub fn from_token(token: &str) -> Option<Impact> {
        match token {
            "+" => Some(Impact::Maximize),
            "-" => Some(Impact::Minimize),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Maximize => "+",
            Impact::Minimize => "-",
        }
    }
}

/// The alternatives to rank and their values for each criterion.
///
/// Invariant: every row of the matrix has exactly one value per criterion and
/// all the values are finite.
#[derive(PartialEq, Debug, Clone)]
pub struct DecisionTable {
    pub(crate) criteria: Vec<String>,
    pub(crate) labels: Vec<String>,
    pub(crate) matrix: Vec<Vec<f64>>,
}

impl DecisionTable {
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn num_alternatives(&self) -> usize {
        self.labels.len()
    }

    pub fn num_criteria(&self) -> usize {
        self.criteria.len()
    }
}

/// One weight per criterion, in the order of the criteria.
///
/// The weights do not need to sum to 1.
#[derive(PartialEq, Debug, Clone)]
pub struct WeightVector(pub(crate) Vec<f64>);

impl WeightVector {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One impact per criterion, in the order of the criteria.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ImpactVector(pub(crate) Vec<Impact>);

impl ImpactVector {
    pub fn values(&self) -> &[Impact] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A decision table with the weights and impacts that go with it, all aligned.
///
/// It can only be obtained through the validator or the builder.
#[derive(PartialEq, Debug, Clone)]
pub struct ValidatedInput {
    pub table: DecisionTable,
    pub weights: WeightVector,
    pub impacts: ImpactVector,
}

impl ValidatedInput {
    pub fn into_parts(self) -> (DecisionTable, WeightVector, ImpactVector) {
        (self.table, self.weights, self.impacts)
    }
}

// ******** Output data structures *********

/// The outcome for one alternative.
#[derive(PartialEq, Debug, Clone)]
pub struct ResultRow {
    pub label: String,
    pub values: Vec<f64>,
    /// The relative closeness, unrounded. The rank is derived from this value.
    pub closeness: f64,
    /// The closeness rounded to 2 decimal places.
    pub score: f64,
    /// 1 is the best alternative.
    pub rank: u32,
    pub distance_best: f64,
    pub distance_worst: f64,
}

/// The decision table extended with a score and a rank per alternative.
///
/// The rows are in the same order as the input table.
#[derive(PartialEq, Debug, Clone)]
pub struct ResultTable {
    pub criteria: Vec<String>,
    pub rows: Vec<ResultRow>,
    pub ideal_best: Vec<f64>,
    pub ideal_worst: Vec<f64>,
}

impl ResultTable {
    /// The labels, sorted from the best alternative to the worst one.
    pub fn ranking(&self) -> Vec<&str> {
        let mut rows: Vec<&ResultRow> = self.rows.iter().collect();
        rows.sort_by_key(|r| r.rank);
        rows.iter().map(|r| r.label.as_str()).collect()
    }

    pub fn rank_of(&self, label: &str) -> Option<u32> {
        self.rows.iter().find(|r| r.label == label).map(|r| r.rank)
    }
}

// ********* Errors **********

/// Reasons to reject an input before any computation happens.
///
/// The first problem found is reported, in this order: presence, schema,
/// numeric columns, weights, impacts and finally the counts.
#[derive(PartialEq, Debug, Clone)]
pub enum ValidationError {
    MissingFile,
    MissingField(String),
    /// Fewer than 3 columns, or a row longer than the header.
    SchemaError(String),
    NoAlternatives,
    NonNumericColumn(String),
    WeightParseError(String),
    ImpactParseError(String),
    CardinalityMismatch {
        weights: usize,
        impacts: usize,
        criteria: usize,
    },
    EmailFormatError(String),
}

impl Error for ValidationError {}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingFile => write!(f, "Input file not found"),
            ValidationError::MissingField(name) => write!(f, "Please enter {}", name),
            ValidationError::SchemaError(msg) => write!(f, "{}", msg),
            ValidationError::NoAlternatives => {
                write!(f, "Input file must contain at least one row of data.")
            }
            ValidationError::NonNumericColumn(col) => write!(
                f,
                "Column \"{}\" contains non-numeric values. From 2nd to last columns must contain numeric values only.",
                col
            ),
            ValidationError::WeightParseError(token) => write!(
                f,
                "Weights must be non-negative numeric values separated by commas (got {:?}).",
                token
            ),
            ValidationError::ImpactParseError(token) => write!(
                f,
                "Impacts must be either +ve or -ve (use \"+\" or \"-\"), got {:?}.",
                token
            ),
            ValidationError::CardinalityMismatch {
                weights,
                impacts,
                criteria,
            } => write!(
                f,
                "Number of weights ({}) and impacts ({}) must match the number of criteria columns ({}).",
                weights, impacts, criteria
            ),
            ValidationError::EmailFormatError(addr) => {
                write!(f, "Invalid email format: {:?}", addr)
            }
        }
    }
}

/// Errors that prevent the algorithm from completing on numerically degenerate input.
#[derive(PartialEq, Debug, Clone)]
pub enum EngineError {
    /// The column (0-based criterion index) only contains zeros and cannot be normalized.
    DegenerateColumn(usize),
    /// The alternative (0-based row index) is at zero distance of both ideal points.
    DegenerateScore(usize),
    CardinalityMismatch {
        weights: usize,
        impacts: usize,
        criteria: usize,
    },
}

impl Error for EngineError {}

impl Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::DegenerateColumn(j) => write!(
                f,
                "Criterion column {} only contains zeros and cannot be normalized",
                j + 1
            ),
            EngineError::DegenerateScore(i) => write!(
                f,
                "Alternative at row {} coincides with both the ideal best and the ideal worst",
                i + 1
            ),
            EngineError::CardinalityMismatch {
                weights,
                impacts,
                criteria,
            } => write!(
                f,
                "Cannot rank with {} weights, {} impacts and {} criteria",
                weights, impacts, criteria
            ),
        }
    }
}
