use serde::{Deserialize, Serialize};

use super::WmoCode;

/// One ensemble member's value for a parameter at one hour.
///
/// `value` is `None` when the model did not deliver the parameter. Non-finite
/// values are treated the same way as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSample {
    #[serde(alias = "model", alias = "modelId")]
    pub model_id: String,
    pub value: Option<f64>,
}

impl ModelSample {
    pub fn new(model_id: impl Into<String>, value: f64) -> Self {
        Self {
            model_id: model_id.into(),
            value: Some(value),
        }
    }

    /// A member that delivered no value.
    pub fn missing(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            value: None,
        }
    }

    /// The value if it is present and finite.
    pub fn valid_value(&self) -> Option<f64> {
        self.value.filter(|v| v.is_finite())
    }

    pub fn is_valid(&self) -> bool {
        self.valid_value().is_some()
    }
}

/// The set of model samples for one (location, hour, parameter).
///
/// Order carries no meaning; every aggregator is order-independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ensemble {
    samples: Vec<ModelSample>,
}

impl Ensemble {
    pub fn new(samples: Vec<ModelSample>) -> Self {
        Self { samples }
    }

    /// Build from `(model_id, value)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<f64>)>,
        S: Into<String>,
    {
        Self {
            samples: pairs
                .into_iter()
                .map(|(model_id, value)| ModelSample {
                    model_id: model_id.into(),
                    value,
                })
                .collect(),
        }
    }

    pub fn samples(&self) -> &[ModelSample] {
        &self.samples
    }

    /// Total members, including those without a valid value.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Finite values only, in member order.
    pub fn valid_values(&self) -> Vec<f64> {
        self.samples.iter().filter_map(ModelSample::valid_value).collect()
    }

    pub fn valid_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_valid()).count()
    }

    /// `(model_id, value)` for members with a finite value.
    pub fn valid_samples(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.samples
            .iter()
            .filter_map(|s| s.valid_value().map(|v| (s.model_id.as_str(), v)))
    }

    /// Valid values interpreted as categorical weather codes.
    ///
    /// Values are rounded to the nearest integer; negative or out-of-range
    /// values are dropped like any other invalid sample.
    pub fn wmo_codes(&self) -> Vec<WmoCode> {
        self.samples
            .iter()
            .filter_map(ModelSample::valid_value)
            .map(f64::round)
            .filter(|v| *v >= 0.0 && *v <= f64::from(WmoCode::MAX))
            .map(|v| v as WmoCode)
            .collect()
    }
}

impl FromIterator<ModelSample> for Ensemble {
    fn from_iter<T: IntoIterator<Item = ModelSample>>(iter: T) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}
