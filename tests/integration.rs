//! Integration tests for the feedback analyzer

use feedback_analyzer::{
    AnalyzerError, Category, FeedbackResult, InputFormat, LexiconOracle, OracleError, Pipeline,
    PipelineOptions, PolarityOracle, TabularCodec,
};
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

/// Oracle returning fixed scores per text
struct FixedOracle {
    scores: HashMap<String, f64>,
}

impl FixedOracle {
    fn new(pairs: &[(&str, f64)]) -> Self {
        Self {
            scores: pairs
                .iter()
                .map(|(text, score)| (text.to_string(), *score))
                .collect(),
        }
    }
}

impl PolarityOracle for FixedOracle {
    fn score(&self, text: &str) -> Result<f64, OracleError> {
        self.scores
            .get(text)
            .copied()
            .ok_or_else(|| OracleError(format!("unscored text: {}", text)))
    }
}

fn scenario_oracle() -> FixedOracle {
    FixedOracle::new(&[
        ("This product is excellent!", 0.75),
        ("Terrible, would not recommend.", -0.65),
        ("It works as expected.", 0.05),
    ])
}

mod pipeline_runs {
    use super::*;

    #[test]
    fn test_text_input_scenario() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("feedback.txt");
        let output = dir.path().join("output.csv");
        fs::write(
            &input,
            "This product is excellent!\n\nTerrible, would not recommend.\n   \nIt works as expected.\n",
        )
        .unwrap();

        let oracle = scenario_oracle();
        let pipeline = Pipeline::new(&oracle, PipelineOptions::default());
        let report = pipeline.run(&input, &output).unwrap();

        let categories: Vec<Category> = report.results.iter().map(|r| r.category()).collect();
        assert_eq!(categories, vec![Category::Happy, Category::Sad, Category::Mild]);

        assert_eq!(report.summary.total_count(), 3);
        assert_eq!(report.summary.happy_count(), 1);
        assert_eq!(report.summary.sad_count(), 1);
        assert_eq!(report.summary.mild_count(), 1);
        for category in Category::ALL {
            assert!((report.summary.percentage(category) - 33.33).abs() < 0.01);
        }

        assert_eq!(report.skipped_blank, 2);
        assert_eq!(report.skipped_failed, 0);
        assert_eq!(report.output.as_deref(), Some(output.as_path()));

        assert_eq!(TabularCodec::read(&output).unwrap(), report.results);
    }

    #[test]
    fn test_csv_input_with_custom_column() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("reviews.csv");
        let output = dir.path().join("nested").join("dir").join("output.csv");
        fs::write(
            &input,
            "id,comments\n1,This product is excellent!\n2,\"Terrible, would not recommend.\"\n3,\n",
        )
        .unwrap();

        let oracle = scenario_oracle();
        let options = PipelineOptions {
            csv_column: "comments".to_string(),
            format: None,
        };
        let report = Pipeline::new(&oracle, options).run(&input, &output).unwrap();

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.skipped_blank, 1);
        assert_eq!(report.results[1].feedback_text(), "Terrible, would not recommend.");
        assert!(output.exists());
    }

    #[test]
    fn test_failed_entries_are_observable() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("feedback.txt");
        fs::write(&input, "This product is excellent!\nunknown text\nIt works as expected.\n").unwrap();

        let oracle = scenario_oracle();
        let report = Pipeline::new(&oracle, PipelineOptions::default())
            .evaluate(&input)
            .unwrap();

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.skipped_failed, 1);
        assert_eq!(report.summary.total_count(), 2);
        assert!(report.output.is_none());
    }

    #[test]
    fn test_empty_input_writes_header_only() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        let output = dir.path().join("output.csv");
        fs::write(&input, "\n   \n\t\n").unwrap();

        let oracle = LexiconOracle::new();
        let report = Pipeline::new(&oracle, PipelineOptions::default())
            .run(&input, &output)
            .unwrap();

        assert!(report.results.is_empty());
        assert_eq!(report.summary.total_count(), 0);
        for category in Category::ALL {
            assert_eq!(report.summary.percentage(category), 0.0);
        }
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "feedback,category,sentiment_score\n"
        );
    }

    #[test]
    fn test_forced_csv_format_on_txt_extension() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("export.txt");
        fs::write(&input, "feedback\nThis product is excellent!\n").unwrap();

        let oracle = scenario_oracle();
        let options = PipelineOptions {
            format: Some(InputFormat::csv()),
            ..PipelineOptions::default()
        };
        let report = Pipeline::new(&oracle, options).evaluate(&input).unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].category(), Category::Happy);
    }

    #[test]
    fn test_lexicon_oracle_end_to_end() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("feedback.txt");
        let output = dir.path().join("output.csv");
        fs::write(
            &input,
            "This product is excellent!\nTerrible, would not recommend.\nIt works as expected.\n",
        )
        .unwrap();

        let oracle = LexiconOracle::new();
        let report = Pipeline::new(&oracle, PipelineOptions::default())
            .run(&input, &output)
            .unwrap();

        let categories: Vec<Category> = report.results.iter().map(|r| r.category()).collect();
        assert_eq!(categories, vec![Category::Happy, Category::Sad, Category::Mild]);
        for result in &report.results {
            assert!((-1.0..=1.0).contains(&result.sentiment_score()));
        }
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_missing_input_produces_no_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("output.csv");

        let oracle = LexiconOracle::new();
        let err = Pipeline::new(&oracle, PipelineOptions::default())
            .run(dir.path().join("nonexistent_file_12345.txt"), &output)
            .unwrap_err();

        assert!(matches!(err, AnalyzerError::InputNotFound { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("nonexistent_file_12345.txt"));
        assert!(!output.exists());
    }

    #[test]
    fn test_csv_missing_column() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.csv");
        let output = dir.path().join("output.csv");
        fs::write(&input, "wrong_column\nsome data\n").unwrap();

        let oracle = LexiconOracle::new();
        let err = Pipeline::new(&oracle, PipelineOptions::default())
            .run(&input, &output)
            .unwrap_err();

        assert!(matches!(err, AnalyzerError::MalformedInput { .. }));
        assert_eq!(err.exit_code(), 3);
        assert!(!output.exists());
    }

    #[test]
    fn test_output_directory_blocked_by_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("feedback.txt");
        let blocker = dir.path().join("results");
        fs::write(&input, "Great product!\n").unwrap();
        fs::write(&blocker, "").unwrap();

        let oracle = LexiconOracle::new();
        let err = Pipeline::new(&oracle, PipelineOptions::default())
            .run(&input, blocker.join("output.csv"))
            .unwrap_err();

        assert_eq!(err.exit_code(), 4);
    }
}

mod codec_files {
    use super::*;

    #[test]
    fn test_round_trip_special_characters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("results.csv");

        let results = vec![
            FeedbackResult::try_new("Commas, commas, commas", 0.3).unwrap(),
            FeedbackResult::try_new("She said \"wow\"", 0.9).unwrap(),
            FeedbackResult::try_new("Multi\nline\r\nfeedback", -0.2).unwrap(),
            FeedbackResult::try_new("  surrounding whitespace  ", 0.1).unwrap(),
            FeedbackResult::try_new("Ünïcödé ✓", -1.0).unwrap(),
            FeedbackResult::try_new("tiny", 1e-7).unwrap(),
        ];

        TabularCodec::write(&results, &path).unwrap();
        assert_eq!(TabularCodec::read(&path).unwrap(), results);

        // Writing again into the existing directory is fine
        TabularCodec::write(&results[..1], &path).unwrap();
        assert_eq!(TabularCodec::read(&path).unwrap(), &results[..1]);
    }

    #[test]
    fn test_read_does_not_rescore() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        fs::write(
            &path,
            "feedback,category,sentiment_score\nTerrible product,Happy,0.9\n",
        )
        .unwrap();

        let results = TabularCodec::read(&path).unwrap();
        assert_eq!(results[0].category(), Category::Happy);
        assert_eq!(results[0].sentiment_score(), 0.9);
    }
}
