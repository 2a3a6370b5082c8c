use serde::{Deserialize, Serialize};

use crate::errors::{CompnetError, ErrorInfo};

/// Payload stored for every vertex of a competition network.
///
/// The weight is opaque to the incidence store and the classifier; for
/// sellers it is the captive market size.
pub trait Vertex {
    /// Free-form label of the vertex.
    fn label(&self) -> &str;

    /// Numeric weight carried by the vertex.
    fn weight(&self) -> f64;
}

/// Pricing support of a seller over `[begin, end]`.
///
/// The probabilities are points of a reverse cumulative distribution, so
/// `begin_probability >= end_probability` and both lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    begin: f64,
    end: f64,
    begin_probability: f64,
    end_probability: f64,
}

impl Support {
    /// Builds a support interval after validating its bounds.
    pub fn new(
        begin: f64,
        end: f64,
        begin_probability: f64,
        end_probability: f64,
    ) -> Result<Self, CompnetError> {
        if !begin.is_finite() || !end.is_finite() || begin > end {
            return Err(CompnetError::Sketch(
                invalid_support("support bounds must be finite with begin <= end")
                    .with_context("begin", begin)
                    .with_context("end", end),
            ));
        }
        let unit = 0.0..=1.0;
        if !unit.contains(&begin_probability) || !unit.contains(&end_probability) {
            return Err(CompnetError::Sketch(
                invalid_support("support probabilities must lie in [0, 1]")
                    .with_context("begin_probability", begin_probability)
                    .with_context("end_probability", end_probability),
            ));
        }
        if begin_probability < end_probability {
            return Err(CompnetError::Sketch(
                invalid_support("begin probability must not be lower than end probability")
                    .with_context("begin_probability", begin_probability)
                    .with_context("end_probability", end_probability),
            ));
        }
        Ok(Self {
            begin,
            end,
            begin_probability,
            end_probability,
        })
    }

    /// Lower price bound.
    pub fn begin(&self) -> f64 {
        self.begin
    }

    /// Upper price bound.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Probability of pricing at `begin` or higher.
    pub fn begin_probability(&self) -> f64 {
        self.begin_probability
    }

    /// Probability of pricing at `end` or higher.
    pub fn end_probability(&self) -> f64 {
        self.end_probability
    }
}

fn invalid_support(message: &str) -> ErrorInfo {
    ErrorInfo::new("invalid-support", message)
}

/// A seller in the market model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Display label of the seller.
    pub label: String,
    /// Size of the captive market (loyal buyers).
    pub captive_market: f64,
    /// Pricing supports assigned by an equilibrium sketch.
    #[serde(default)]
    pub support: Vec<Support>,
}

impl Seller {
    /// Creates a seller with an empty support list.
    pub fn new(label: impl Into<String>, captive_market: f64) -> Self {
        Self {
            label: label.into(),
            captive_market,
            support: Vec::new(),
        }
    }
}

impl Vertex for Seller {
    fn label(&self) -> &str {
        &self.label
    }

    fn weight(&self) -> f64 {
        self.captive_market
    }
}
