pub use crate::config::*;

/// A builder for decision tables made of typed values.
///
/// Using the builder should be considered when the data does not come from a
/// file. It applies the same checks as [crate::validate] on the numeric content.
///
/// ```
/// pub use topsis::builder::Builder;
/// pub use topsis::Impact;
/// # use topsis::ValidationError;
///
/// let mut builder = Builder::new(&["price".to_string(), "storage".to_string()])
///     .weights(&[1.0, 2.0])
///     .impacts(&[Impact::Minimize, Impact::Maximize]);
///
/// builder.add_alternative("phone A", &[250.0, 64.0]);
/// builder.add_alternative("phone B", &[300.0, 128.0]);
///
/// let input = builder.build()?;
/// let result = topsis::compute(&input.table, &input.weights, &input.impacts).unwrap();
/// assert_eq!(result.ranking(), vec!["phone B", "phone A"]);
///
/// # Ok::<(), ValidationError>(())
/// ```
pub struct Builder {
    pub(crate) _criteria: Vec<String>,
    pub(crate) _weights: Vec<f64>,
    pub(crate) _impacts: Vec<Impact>,
    pub(crate) _alternatives: Vec<(String, Vec<f64>)>,
}

impl Builder {
    pub fn new(criteria: &[String]) -> Builder {
        Builder {
            _criteria: criteria.to_vec(),
            _weights: Vec::new(),
            _impacts: Vec::new(),
            _alternatives: Vec::new(),
        }
    }

    pub fn weights(self, weights: &[f64]) -> Builder {
        Builder {
            _weights: weights.to_vec(),
            ..self
        }
    }

    pub fn impacts(self, impacts: &[Impact]) -> Builder {
        Builder {
            _impacts: impacts.to_vec(),
            ..self
        }
    }

    /// Adds an alternative with one value per criterion.
    ///
    /// Nothing is checked at this point, see [Builder::build].
    pub fn add_alternative(&mut self, label: &str, values: &[f64]) {
        self._alternatives.push((label.to_string(), values.to_vec()));
    }

    pub fn build(self) -> Result<ValidatedInput, ValidationError> {
        let num_criteria = self._criteria.len();
        if num_criteria < 2 {
            return Err(ValidationError::SchemaError(format!(
                "At least two criteria are required (found {}).",
                num_criteria
            )));
        }
        if self._alternatives.is_empty() {
            return Err(ValidationError::NoAlternatives);
        }
        for (label, values) in self._alternatives.iter() {
            if values.len() > num_criteria {
                return Err(ValidationError::SchemaError(format!(
                    "Alternative {} has {} values for {} criteria.",
                    label,
                    values.len(),
                    num_criteria
                )));
            }
        }
        // Columns are checked in order, like the validator does.
        for (j, name) in self._criteria.iter().enumerate() {
            let all_finite = self
                ._alternatives
                .iter()
                .all(|(_, values)| values.get(j).map_or(false, |x| x.is_finite()));
            if !all_finite {
                return Err(ValidationError::NonNumericColumn(name.clone()));
            }
        }
        if let Some(w) = self._weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(ValidationError::WeightParseError(w.to_string()));
        }
        if self._weights.len() != num_criteria || self._impacts.len() != num_criteria {
            return Err(ValidationError::CardinalityMismatch {
                weights: self._weights.len(),
                impacts: self._impacts.len(),
                criteria: num_criteria,
            });
        }

        let (labels, matrix): (Vec<String>, Vec<Vec<f64>>) =
            self._alternatives.into_iter().unzip();
        Ok(ValidatedInput {
            table: DecisionTable {
                criteria: self._criteria,
                labels,
                matrix,
            },
            weights: WeightVector(self._weights),
            impacts: ImpactVector(self._impacts),
        })
    }
}
