// ABOUTME: Cluster classifier integration: stored lookup and live prediction
// ABOUTME: FeatureScaler and ClusterPartitioner traits with StandardScaler and KMeansModel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrisage Project

//! Cluster classification
//!
//! Two paths over the same table: reading the precomputed cluster id
//! stored per ingredient, and running the ingredient's raw nutrient
//! vector through a fitted scaler and partitioner. The model artifacts
//! are consumed read-only; nothing here retrains them.
//!
//! Artifacts are serde JSON replacing the original fitted binaries:
//! `{"mean": [...], "scale": [...]}` for the scaler and
//! `{"centroids": [[...], ...]}` for the partitioner.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AdvisorError, AdvisorResult};
use crate::models::NutrientTable;

/// Maps a raw feature vector to a standardized one
pub trait FeatureScaler {
    /// Standardize a raw nutrient vector
    ///
    /// # Errors
    /// Returns [`AdvisorError::Prediction`] on shape mismatch or any
    /// other transform failure.
    fn transform(&self, features: &[f64]) -> AdvisorResult<Vec<f64>>;
}

/// Maps a standardized feature vector to a cluster id
pub trait ClusterPartitioner {
    /// Predict the cluster id for a standardized vector
    ///
    /// # Errors
    /// Returns [`AdvisorError::Prediction`] on shape mismatch or any
    /// other predict failure.
    fn predict(&self, features: &[f64]) -> AdvisorResult<u32>;
}

/// Fitted standardization parameters: `z = (x - mean) / scale`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature mean from the fit
    pub mean: Vec<f64>,
    /// Per-feature scale from the fit
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Check internal consistency of a deserialized artifact
    ///
    /// # Errors
    /// Returns a schema error on mismatched lengths or a zero scale
    /// entry.
    pub fn validate(&self) -> AdvisorResult<()> {
        if self.mean.len() != self.scale.len() {
            return Err(AdvisorError::Schema {
                entity: "scaler artifact",
                reason: format!(
                    "mean has {} entries, scale has {}",
                    self.mean.len(),
                    self.scale.len()
                ),
            });
        }
        if self.scale.iter().any(|&s| s == 0.0) {
            return Err(AdvisorError::Schema {
                entity: "scaler artifact",
                reason: "scale contains a zero entry".to_owned(),
            });
        }
        Ok(())
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> AdvisorResult<Vec<f64>> {
        if features.len() != self.mean.len() {
            return Err(AdvisorError::Prediction {
                reason: format!(
                    "feature vector has {} values, scaler expects {}",
                    features.len(),
                    self.mean.len()
                ),
            });
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

/// Fitted k-means centroids; predict is nearest centroid by Euclidean
/// distance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeansModel {
    /// One centroid per cluster, in cluster-id order
    pub centroids: Vec<Vec<f64>>,
}

impl KMeansModel {
    /// Check internal consistency of a deserialized artifact
    ///
    /// # Errors
    /// Returns a schema error when there are no centroids or their
    /// dimensions disagree.
    pub fn validate(&self) -> AdvisorResult<()> {
        let Some(first) = self.centroids.first() else {
            return Err(AdvisorError::Schema {
                entity: "kmeans artifact",
                reason: "no centroids".to_owned(),
            });
        };
        if self.centroids.iter().any(|c| c.len() != first.len()) {
            return Err(AdvisorError::Schema {
                entity: "kmeans artifact",
                reason: "centroids have inconsistent dimensions".to_owned(),
            });
        }
        Ok(())
    }
}

impl ClusterPartitioner for KMeansModel {
    fn predict(&self, features: &[f64]) -> AdvisorResult<u32> {
        let mut best: Option<(usize, f64)> = None;
        for (index, centroid) in self.centroids.iter().enumerate() {
            if centroid.len() != features.len() {
                return Err(AdvisorError::Prediction {
                    reason: format!(
                        "feature vector has {} values, centroid {index} has {}",
                        features.len(),
                        centroid.len()
                    ),
                });
            }
            let distance: f64 = centroid
                .iter()
                .zip(features)
                .map(|(c, x)| (c - x) * (c - x))
                .sum();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        let (index, _) = best.ok_or_else(|| AdvisorError::Prediction {
            reason: "model has no centroids".to_owned(),
        })?;
        u32::try_from(index).map_err(|_| AdvisorError::Prediction {
            reason: format!("cluster index {index} out of range"),
        })
    }
}

/// Cluster lookup and prediction over a loaded table and fitted model
pub struct ClusterEngine<'a, S = StandardScaler, P = KMeansModel> {
    table: &'a NutrientTable,
    scaler: S,
    partitioner: P,
}

impl<'a, S: FeatureScaler, P: ClusterPartitioner> ClusterEngine<'a, S, P> {
    /// Create an engine over a table and pre-fitted model parts
    #[must_use]
    pub const fn new(table: &'a NutrientTable, scaler: S, partitioner: P) -> Self {
        Self {
            table,
            scaler,
            partitioner,
        }
    }

    /// Precomputed cluster id stored for the ingredient
    ///
    /// `Ok(None)` means the row exists but was never clustered.
    ///
    /// # Errors
    /// Returns [`AdvisorError::IngredientNotFound`] when the name is
    /// absent from the table.
    pub fn cluster_of(&self, name: &str) -> AdvisorResult<Option<u32>> {
        self.table
            .find(name)
            .map(|record| record.cluster)
            .ok_or_else(|| AdvisorError::IngredientNotFound {
                name: name.to_owned(),
            })
    }

    /// Run the ingredient's raw nutrient vector through scaler and
    /// partitioner
    ///
    /// Absent nutrient values are fed to the model as 0.0, matching the
    /// scorer's missing-value policy. The predicted id is not guaranteed
    /// to equal the stored one.
    ///
    /// # Errors
    /// [`AdvisorError::IngredientNotFound`] when the name is absent;
    /// [`AdvisorError::Prediction`] when transform or predict fails.
    pub fn predict_cluster(&self, name: &str) -> AdvisorResult<u32> {
        let record = self
            .table
            .find(name)
            .ok_or_else(|| AdvisorError::IngredientNotFound {
                name: name.to_owned(),
            })?;
        let features: Vec<f64> = (0..self.table.nutrient_names().len())
            .map(|index| record.nutrient_or_zero(index))
            .collect();
        let standardized = self.scaler.transform(&features)?;
        let cluster = self.partitioner.predict(&standardized)?;
        debug!(ingredient = %record.name, cluster, "predicted cluster");
        Ok(cluster)
    }
}
