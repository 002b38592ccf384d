use super::{L1Mode, Regularization};
use crate::error::{RegularizationError, Result};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::{debug, warn};

/// Names of the supported regularizations.
///
/// Serialized in snake case. Parsing, from a string or a deserializer, goes through [`FromStr`],
/// which ignores case and surrounding whitespace.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum RegularizationKind {
    /// No penalty.
    None,
    /// L1 penalty through its subgradient.
    L1,
    /// L1 penalty through clipping updates.
    L1Clipping,
    /// L2 penalty.
    L2,
    /// Combined L1 and L2 penalties.
    ElasticNet,
}

impl RegularizationKind {
    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::L1 => "l1",
            Self::L1Clipping => "l1_clipping",
            Self::L2 => "l2",
            Self::ElasticNet => "elastic_net",
        }
    }
}

impl fmt::Display for RegularizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegularizationKind {
    type Err = RegularizationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "l1" => Ok(Self::L1),
            "l1_clipping" => Ok(Self::L1Clipping),
            "l2" => Ok(Self::L2),
            "elastic_net" => Ok(Self::ElasticNet),
            _ => Err(RegularizationError::UnknownKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for RegularizationKind {
    type Error = RegularizationError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// User facing description of a regularization.
///
/// ```
/// use convex_task::{Regularization, RegularizationConfig, RegularizationKind};
///
/// let config = RegularizationConfig::new(RegularizationKind::L2, 0.01);
/// let regularization: Regularization = config.build().unwrap();
///
/// assert!(regularization.is_smooth());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularizationConfig<F = f64> {
    /// Penalty and calling convention.
    pub kind: RegularizationKind,
    /// Regularization strength. For the elastic net it weights the L1 term.
    ///
    /// Required by every kind but [`RegularizationKind::None`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lambda: Option<F>,
    /// Strength of the L2 term of the elastic net.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lambda_l2: Option<F>,
}

impl<F> RegularizationConfig<F>
where
    F: Float + Send + Sync,
{
    /// Creates a new configuration.
    ///
    /// # Arguments
    ///
    /// * `kind` - penalty and calling convention.
    ///
    /// * `lambda` - regularization strength.
    pub fn new(kind: RegularizationKind, lambda: F) -> Self {
        Self {
            kind,
            lambda: Some(lambda),
            lambda_l2: None,
        }
    }

    /// Creates a new elastic net configuration.
    ///
    /// # Arguments
    ///
    /// * `lambda_l1` - L1 regularization coefficient.
    ///
    /// * `lambda_l2` - L2 regularization coefficient.
    pub fn elastic_net(lambda_l1: F, lambda_l2: F) -> Self {
        Self {
            kind: RegularizationKind::ElasticNet,
            lambda: Some(lambda_l1),
            lambda_l2: Some(lambda_l2),
        }
    }

    /// Validates the hyperparameters and builds the corresponding regularization.
    pub fn build(&self) -> Result<Regularization<F>> {
        if self.lambda_l2.is_some() && self.kind != RegularizationKind::ElasticNet {
            warn!(kind = %self.kind, "lambda_l2 is only used by the elastic net, ignoring it");
        }

        let regularization = match self.kind {
            RegularizationKind::None => Regularization::None,
            RegularizationKind::L1 => Regularization::L1 {
                lambda: self.required("lambda", self.lambda)?,
                mode: L1Mode::Subgradient,
            },
            RegularizationKind::L1Clipping => Regularization::L1 {
                lambda: self.required("lambda", self.lambda)?,
                mode: L1Mode::Clipping,
            },
            RegularizationKind::L2 => Regularization::L2 {
                lambda: self.required("lambda", self.lambda)?,
            },
            RegularizationKind::ElasticNet => Regularization::ElasticNet {
                lambda_l1: self.required("lambda", self.lambda)?,
                lambda_l2: self.required("lambda_l2", self.lambda_l2)?,
            },
        };

        debug!(
            kind = %self.kind,
            lambda = self.lambda.and_then(|lambda| lambda.to_f64()),
            "built regularization"
        );
        Ok(regularization)
    }

    // Checks that a strength required by this kind is present and valid.
    fn required(&self, name: &'static str, lambda: Option<F>) -> Result<F> {
        let lambda = lambda.ok_or(RegularizationError::MissingParameter {
            name,
            kind: self.kind,
        })?;
        validate_lambda(name, lambda)
    }
}

fn validate_lambda<F: Float>(name: &'static str, lambda: F) -> Result<F> {
    let value = lambda.to_f64().unwrap_or(f64::NAN);

    if !lambda.is_finite() {
        Err(RegularizationError::NonFiniteLambda { name, value })
    } else if lambda < F::zero() {
        Err(RegularizationError::NegativeLambda { name, value })
    } else {
        Ok(lambda)
    }
}
