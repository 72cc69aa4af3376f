//! Tree-ensemble classifier tests

use std::path::Path;

use crop_recommendation_backend::error::{ArtifactError, InferenceError};
use crop_recommendation_backend::inference::classifier::{
    DecisionTreeParams, TreeEnsembleClassifier, TreeEnsembleParams, TreeNodeParams,
};
use crop_recommendation_backend::inference::{
    ClassifierSummary, CropClassifier, CropPipeline, FeatureScaler, MinMaxScaler,
};
use crop_recommendation_backend::config::ArtifactConfig;
use shared::{FeatureVector, ScaledFeatures};

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn split(feature: usize, threshold: f64, left: usize, right: usize) -> TreeNodeParams {
    TreeNodeParams::Split {
        feature,
        threshold,
        left,
        right,
    }
}

fn leaf(value: &[f64]) -> TreeNodeParams {
    TreeNodeParams::Leaf {
        value: value.to_vec(),
    }
}

fn tree(nodes: Vec<TreeNodeParams>) -> DecisionTreeParams {
    DecisionTreeParams { nodes }
}

fn ensemble(classes: Vec<i64>, estimators: Vec<DecisionTreeParams>) -> TreeEnsembleParams {
    TreeEnsembleParams {
        n_features: 7,
        classes,
        estimators,
    }
}

/// Splits on humidity at 0.5: dry goes to class 7, humid to class 3
fn humidity_stump() -> DecisionTreeParams {
    tree(vec![
        split(4, 0.5, 1, 2),
        leaf(&[0.0, 10.0]),
        leaf(&[4.0, 0.0]),
    ])
}

fn scaled_with_humidity(humidity: f64) -> ScaledFeatures {
    ScaledFeatures::new([0.5, 0.5, 0.5, 0.5, humidity, 0.5, 0.5])
}

mod prediction {
    use super::*;

    #[test]
    fn split_sends_equal_values_left() {
        let model =
            TreeEnsembleClassifier::from_params(ensemble(vec![3, 7], vec![humidity_stump()]))
                .unwrap();
        assert_eq!(model.predict(&scaled_with_humidity(0.5)).unwrap(), 7);
        assert_eq!(model.predict(&scaled_with_humidity(0.2)).unwrap(), 7);
        assert_eq!(model.predict(&scaled_with_humidity(0.5000001)).unwrap(), 3);
    }

    #[test]
    fn inputs_are_compared_at_single_precision() {
        // Midpoint of two f32 training values, as a fitted tree stores it
        let threshold = (f64::from(0.25f32) + f64::from(0.75f32)) / 2.0;
        let stump = tree(vec![
            split(4, threshold, 1, 2),
            leaf(&[0.0, 10.0]),
            leaf(&[4.0, 0.0]),
        ]);
        let model =
            TreeEnsembleClassifier::from_params(ensemble(vec![3, 7], vec![stump])).unwrap();

        // Rounds to 0.5f32, so it stays on the left
        assert_eq!(model.predict(&scaled_with_humidity(0.5000000001)).unwrap(), 7);
        assert_eq!(model.predict(&scaled_with_humidity(0.50000006)).unwrap(), 3);
    }

    #[test]
    fn inputs_beyond_single_precision_are_rejected() {
        let model =
            TreeEnsembleClassifier::from_params(ensemble(vec![3, 7], vec![humidity_stump()]))
                .unwrap();
        let err = model.predict(&scaled_with_humidity(1.0e39)).unwrap_err();
        assert!(matches!(err, InferenceError::NonFiniteInput { index: 4, .. }));
    }

    #[test]
    fn forest_averages_normalized_leaf_distributions() {
        // Tree 1 is confident in class 1, trees 2 and 3 lean weakly to class 2
        let confident = tree(vec![leaf(&[100.0, 0.0])]);
        let weak = tree(vec![leaf(&[4.0, 6.0])]);
        let model = TreeEnsembleClassifier::from_params(ensemble(
            vec![1, 2],
            vec![confident, weak.clone(), weak],
        ))
        .unwrap();

        let proba = model.predict_proba(&scaled_with_humidity(0.1)).unwrap();
        assert!((proba[0] - (1.0 + 0.4 + 0.4) / 3.0).abs() < 1e-12);
        assert!((proba[1] - (0.0 + 0.6 + 0.6) / 3.0).abs() < 1e-12);
        assert_eq!(model.predict(&scaled_with_humidity(0.1)).unwrap(), 1);
    }

    #[test]
    fn ties_go_to_first_listed_class() {
        let model = TreeEnsembleClassifier::from_params(ensemble(
            vec![9, 4],
            vec![tree(vec![leaf(&[5.0, 5.0])])],
        ))
        .unwrap();
        assert_eq!(model.predict(&scaled_with_humidity(0.3)).unwrap(), 9);
    }

    #[test]
    fn labels_outside_crop_table_pass_through() {
        let model = TreeEnsembleClassifier::from_params(ensemble(
            vec![99],
            vec![tree(vec![leaf(&[1.0])])],
        ))
        .unwrap();
        assert_eq!(model.predict(&scaled_with_humidity(0.3)).unwrap(), 99);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let model =
            TreeEnsembleClassifier::from_params(ensemble(vec![3, 7], vec![humidity_stump()]))
                .unwrap();
        let err = model.predict(&scaled_with_humidity(f64::NAN)).unwrap_err();
        assert!(matches!(err, InferenceError::NonFiniteInput { index: 4, .. }));
    }

    #[test]
    fn summary_reports_model_shape() {
        let model = TreeEnsembleClassifier::from_params(ensemble(
            vec![3, 7],
            vec![humidity_stump(), humidity_stump()],
        ))
        .unwrap();
        assert_eq!(
            model.summary(),
            ClassifierSummary {
                classes: 2,
                estimators: 2
            }
        );
    }
}

mod validation {
    use super::*;

    fn rejection(params: TreeEnsembleParams) -> String {
        TreeEnsembleClassifier::from_params(params).unwrap_err()
    }

    #[test]
    fn rejects_wrong_feature_count() {
        let mut params = ensemble(vec![1], vec![tree(vec![leaf(&[1.0])])]);
        params.n_features = 4;
        assert!(rejection(params).contains("expects 4 features"));
    }

    #[test]
    fn rejects_missing_classes_and_trees() {
        assert!(rejection(ensemble(vec![], vec![tree(vec![leaf(&[])])])).contains("no classes"));
        assert!(rejection(ensemble(vec![1], vec![])).contains("no estimators"));
        assert!(rejection(ensemble(vec![1], vec![tree(vec![])])).contains("no nodes"));
    }

    #[test]
    fn rejects_duplicate_classes() {
        let err = rejection(ensemble(vec![1, 1], vec![tree(vec![leaf(&[1.0, 1.0])])]));
        assert!(err.contains("not unique"));
    }

    #[test]
    fn rejects_backward_and_dangling_children() {
        let cycle = tree(vec![split(0, 0.5, 0, 1), leaf(&[1.0])]);
        assert!(rejection(ensemble(vec![1], vec![cycle])).contains("invalid child 0"));

        let dangling = tree(vec![split(0, 0.5, 1, 5), leaf(&[1.0])]);
        assert!(rejection(ensemble(vec![1], vec![dangling])).contains("invalid child 5"));
    }

    #[test]
    fn rejects_unknown_feature_and_bad_threshold() {
        let unknown = tree(vec![split(7, 0.5, 1, 2), leaf(&[1.0]), leaf(&[1.0])]);
        assert!(rejection(ensemble(vec![1], vec![unknown])).contains("unknown feature 7"));

        let nan = tree(vec![split(0, f64::NAN, 1, 2), leaf(&[1.0]), leaf(&[1.0])]);
        assert!(rejection(ensemble(vec![1], vec![nan])).contains("non-finite threshold"));
    }

    #[test]
    fn rejects_bad_leaves() {
        let short = tree(vec![leaf(&[1.0])]);
        assert!(rejection(ensemble(vec![1, 2], vec![short])).contains("expected 2"));

        let negative = tree(vec![leaf(&[2.0, -1.0])]);
        assert!(rejection(ensemble(vec![1, 2], vec![negative])).contains("negative"));

        let empty = tree(vec![leaf(&[0.0, 0.0])]);
        assert!(rejection(ensemble(vec![1, 2], vec![empty])).contains("no weight"));
    }

    #[test]
    fn error_names_the_offending_tree() {
        let good = tree(vec![leaf(&[1.0])]);
        let bad = tree(vec![leaf(&[-1.0])]);
        assert!(rejection(ensemble(vec![1], vec![good, bad])).starts_with("tree 1:"));
    }
}

mod artifacts {
    use super::*;

    #[test]
    fn fixture_model_loads() {
        let model = TreeEnsembleClassifier::load(&fixture("model.json")).unwrap();
        assert_eq!(model.classes(), (1..=22).collect::<Vec<i64>>().as_slice());
        assert_eq!(model.n_estimators(), 3);
    }

    #[test]
    fn leaf_counts_and_fractions_predict_alike() {
        // Older exports store sample counts per leaf, newer ones fractions
        let counts = tree(vec![split(0, 0.3, 1, 2), leaf(&[8.0, 2.0]), leaf(&[1.0, 3.0])]);
        let fractions = tree(vec![split(0, 0.3, 1, 2), leaf(&[0.8, 0.2]), leaf(&[0.25, 0.75])]);
        let from_counts =
            TreeEnsembleClassifier::from_params(ensemble(vec![5, 6], vec![counts])).unwrap();
        let from_fractions =
            TreeEnsembleClassifier::from_params(ensemble(vec![5, 6], vec![fractions])).unwrap();

        for value in [0.1, 0.9] {
            let x = ScaledFeatures::new([value; 7]);
            let a = from_counts.predict_proba(&x).unwrap();
            let b = from_fractions.predict_proba(&x).unwrap();
            for (p, q) in a.iter().zip(&b) {
                assert!((p - q).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn scaler_file_is_not_a_model() {
        let err = TreeEnsembleClassifier::load(&fixture("minmaxscaler.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }

    #[test]
    fn fixture_pipeline_recommends_rice_for_paddy_conditions() {
        let pipeline = CropPipeline::load(&ArtifactConfig {
            scaler_path: fixture("minmaxscaler.json"),
            model_path: fixture("model.json"),
        })
        .unwrap();
        let label = pipeline
            .run(&FeatureVector::new([90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9]))
            .unwrap();
        assert_eq!(label, 1);
        assert_eq!(pipeline.summary().estimators, 3);
    }

    #[test]
    fn fixture_pipeline_separates_other_regions() {
        let scaler = MinMaxScaler::load(&fixture("minmaxscaler.json")).unwrap();
        let model = TreeEnsembleClassifier::load(&fixture("model.json")).unwrap();

        let grapes = scaler
            .transform(&FeatureVector::new([20.0, 130.0, 200.0, 22.0, 92.0, 6.0, 110.0]))
            .unwrap();
        assert_eq!(model.predict(&grapes).unwrap(), 11);

        let maize = scaler
            .transform(&FeatureVector::new([100.0, 20.0, 30.0, 25.0, 20.0, 6.0, 60.0]))
            .unwrap();
        assert_eq!(model.predict(&maize).unwrap(), 2);
    }

    #[test]
    fn pipeline_load_fails_when_either_artifact_is_missing() {
        let missing_model = CropPipeline::load(&ArtifactConfig {
            scaler_path: fixture("minmaxscaler.json"),
            model_path: fixture("missing_model.json"),
        });
        assert!(matches!(missing_model, Err(ArtifactError::Io { .. })));

        let missing_scaler = CropPipeline::load(&ArtifactConfig {
            scaler_path: fixture("missing_scaler.json"),
            model_path: fixture("model.json"),
        });
        assert!(matches!(missing_scaler, Err(ArtifactError::Io { .. })));
    }
}
