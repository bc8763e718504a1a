//! Loads and cross-checks the scaler and classifier artifacts at startup.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{
    ArtifactError, LogisticRegressionArtifact, LogisticRegressionClassifier, StandardScaler,
    StandardScalerArtifact,
};
use crate::config::ModelConfig;
use crate::domain::assessment::{FeatureSchema, FeatureSet};
use crate::ports::{FeatureScaler, RiskClassifier};

/// Model artifacts ready for inference, with their agreed column schema.
#[derive(Clone)]
pub struct ModelArtifacts {
    pub schema: FeatureSchema,
    pub scaler: Option<Arc<dyn FeatureScaler>>,
    pub classifier: Arc<dyn RiskClassifier>,
}

impl std::fmt::Debug for ModelArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelArtifacts")
            .field("schema", &self.schema.names())
            .field("scaled", &self.scaler.is_some())
            .finish()
    }
}

impl ModelArtifacts {
    /// Reads the artifacts named in `config`.
    pub fn load(config: &ModelConfig) -> Result<Self, ArtifactError> {
        let artifact: LogisticRegressionArtifact = read_json(Path::new(&config.classifier_path))?;
        let classifier = LogisticRegressionClassifier::from_artifact(artifact)?;

        let scaler = match config.scaler_path() {
            Some(path) => {
                let artifact: StandardScalerArtifact = read_json(Path::new(path))?;
                Some(Arc::new(StandardScaler::from_artifact(artifact)?) as Arc<dyn FeatureScaler>)
            }
            None => None,
        };

        Self::assemble(config.feature_set, scaler, Arc::new(classifier))
    }

    /// Verifies that every artifact was trained on the configured columns.
    ///
    /// A vector in the wrong order would still produce a probability, just a
    /// meaningless one, so any disagreement is a load failure.
    pub fn assemble(
        feature_set: FeatureSet,
        scaler: Option<Arc<dyn FeatureScaler>>,
        classifier: Arc<dyn RiskClassifier>,
    ) -> Result<Self, ArtifactError> {
        let schema = FeatureSchema::from_names(classifier.feature_names())?;

        let expected = feature_set.schema();
        if schema != expected {
            return Err(ArtifactError::SchemaMismatch {
                artifact: "classifier",
                expected: expected.names().join(","),
                actual: classifier.feature_names().join(","),
            });
        }

        if let Some(scaler) = &scaler {
            if !schema.matches(scaler.feature_names()) {
                return Err(ArtifactError::SchemaMismatch {
                    artifact: "scaler",
                    expected: schema.names().join(","),
                    actual: scaler.feature_names().join(","),
                });
            }
        }

        Ok(Self {
            schema,
            scaler,
            classifier,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const BASIC_COLUMNS: [&str; 9] = [
        "age",
        "sex",
        "bmi",
        "smoking",
        "diabetes",
        "hypertension",
        "atrial_fibrillation",
        "previous_stroke",
        "family_history",
    ];

    fn write(dir: &TempDir, name: &str, value: serde_json::Value) -> String {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(value.to_string().as_bytes()).unwrap();
        path.display().to_string()
    }

    fn classifier_json(columns: &[&str]) -> serde_json::Value {
        serde_json::json!({
            "feature_names": columns,
            "coefficients": vec![0.1; columns.len()],
            "intercept": -3.0,
        })
    }

    fn scaler_json(columns: &[&str]) -> serde_json::Value {
        serde_json::json!({
            "feature_names": columns,
            "mean": vec![0.0; columns.len()],
            "scale": vec![1.0; columns.len()],
        })
    }

    fn config(classifier_path: String, scaler_path: Option<String>) -> ModelConfig {
        ModelConfig {
            classifier_path,
            scaler_path,
            ..ModelConfig::default()
        }
    }

    #[test]
    fn loads_matching_artifacts() {
        let dir = TempDir::new().unwrap();
        let classifier = write(&dir, "classifier.json", classifier_json(&BASIC_COLUMNS));
        let scaler = write(&dir, "scaler.json", scaler_json(&BASIC_COLUMNS));

        let artifacts = ModelArtifacts::load(&config(classifier, Some(scaler))).unwrap();
        assert_eq!(artifacts.schema, FeatureSet::Basic.schema());
        assert!(artifacts.scaler.is_some());
    }

    #[test]
    fn scaler_is_optional() {
        let dir = TempDir::new().unwrap();
        let classifier = write(&dir, "classifier.json", classifier_json(&BASIC_COLUMNS));

        let artifacts = ModelArtifacts::load(&config(classifier, Some(String::new()))).unwrap();
        assert!(artifacts.scaler.is_none());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json").display().to_string();
        let err = ModelArtifacts::load(&config(path, None)).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("classifier.json");
        fs::write(&path, "{not json").unwrap();
        let err = ModelArtifacts::load(&config(path.display().to_string(), None)).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }

    #[test]
    fn reordered_classifier_columns_are_rejected() {
        let dir = TempDir::new().unwrap();
        let mut columns = BASIC_COLUMNS;
        columns.swap(0, 1);
        let classifier = write(&dir, "classifier.json", classifier_json(&columns));

        let err = ModelArtifacts::load(&config(classifier, None)).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::SchemaMismatch {
                artifact: "classifier",
                ..
            }
        ));
    }

    #[test]
    fn scaler_must_agree_with_classifier() {
        let dir = TempDir::new().unwrap();
        let classifier = write(&dir, "classifier.json", classifier_json(&BASIC_COLUMNS));
        let scaler = write(&dir, "scaler.json", scaler_json(&BASIC_COLUMNS[..8]));

        let err = ModelArtifacts::load(&config(classifier, Some(scaler))).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::SchemaMismatch {
                artifact: "scaler",
                ..
            }
        ));
    }

    #[test]
    fn unknown_column_is_schema_error() {
        let dir = TempDir::new().unwrap();
        let classifier = write(&dir, "classifier.json", classifier_json(&["age", "glucose"]));
        let err = ModelArtifacts::load(&config(classifier, None)).unwrap_err();
        assert!(matches!(err, ArtifactError::Schema(_)));
    }
}
