use classification_client::ClassificationResult;

use crate::app::FlowError;

/// Secondary predictions below this score are noise and stay hidden.
pub const SECONDARY_PREDICTION_THRESHOLD: f32 = 0.1;

/// Formats one result into the lines of the result card. No I/O here,
/// the caller decides where the lines go.
pub fn render_result(result: &ClassificationResult) -> Vec<String> {
    let mut lines = vec![
        format!("Detected: {}", result.label),
        format!("Confidence: {}", result.confidence),
    ];

    if let Some(secs) = result.processing_time_sec {
        lines.push(format!("Total time: {}s", secs));
    }
    if let Some(secs) = result.model_prediction_time_sec {
        lines.push(format!("Model time: {}s", secs));
    }

    let secondary = notable_predictions(result);
    if !secondary.is_empty() {
        lines.push("Other predictions:".to_string());
        for (label, score) in secondary {
            lines.push(format!("  {}: {}%", label, (score * 100.0) as i32));
        }
    }

    lines
}

pub fn render_error(err: &FlowError) -> String {
    format!("Error: {}", err)
}

/// Secondary predictions worth showing, strongest first. The wire map
/// is unordered, so ties break on the label for a stable display.
pub fn notable_predictions(result: &ClassificationResult) -> Vec<(String, f32)> {
    let Some(predictions) = &result.all_predictions else {
        return Vec::new();
    };

    let mut notable: Vec<(String, f32)> = predictions
        .iter()
        .filter(|(_, score)| **score > SECONDARY_PREDICTION_THRESHOLD)
        .map(|(label, score)| (label.clone(), *score))
        .collect();
    notable.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    notable
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn result_with_predictions(predictions: &[(&str, f32)]) -> ClassificationResult {
        ClassificationResult {
            label: "cat".to_string(),
            confidence: "0.9".to_string(),
            all_predictions: Some(
                predictions
                    .iter()
                    .map(|(label, score)| (label.to_string(), *score))
                    .collect::<HashMap<_, _>>(),
            ),
            processing_time_sec: None,
            model_prediction_time_sec: None,
            timestamp: None,
        }
    }

    #[test]
    fn filters_predictions_at_ten_percent() {
        let result = result_with_predictions(&[("cat", 0.9), ("dog", 0.05)]);

        let notable = notable_predictions(&result);

        assert_eq!(notable.len(), 1);
        assert_eq!(notable[0].0, "cat");
    }

    #[test]
    fn orders_predictions_strongest_first() {
        let result = result_with_predictions(&[("dog", 0.2), ("cat", 0.7), ("fox", 0.11)]);

        let labels: Vec<String> = notable_predictions(&result)
            .into_iter()
            .map(|(label, _)| label)
            .collect();

        assert_eq!(labels, vec!["cat", "dog", "fox"]);
    }

    #[test]
    fn absent_prediction_map_renders_nothing_extra() {
        let result = ClassificationResult {
            label: "cat".to_string(),
            confidence: "0.97".to_string(),
            all_predictions: None,
            processing_time_sec: None,
            model_prediction_time_sec: None,
            timestamp: None,
        };

        let lines = render_result(&result);

        assert_eq!(lines, vec!["Detected: cat", "Confidence: 0.97"]);
    }

    #[test]
    fn renders_times_and_percentages() {
        let mut result = result_with_predictions(&[("cat", 0.9), ("dog", 0.25)]);
        result.processing_time_sec = Some(0.5);
        result.model_prediction_time_sec = Some(0.3);

        let lines = render_result(&result);

        assert!(lines.contains(&"Total time: 0.5s".to_string()));
        assert!(lines.contains(&"Model time: 0.3s".to_string()));
        assert!(lines.contains(&"  cat: 90%".to_string()));
        assert!(lines.contains(&"  dog: 25%".to_string()));
    }

    #[test]
    fn maps_errors_to_a_user_facing_message() {
        use classification_client::{ClassificationError, StatusCode};

        let err = FlowError::Classify(ClassificationError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "model crashed".to_string(),
        });

        assert_eq!(
            render_error(&err),
            "Error: classification failed: classification service returned \
             500 Internal Server Error: model crashed"
        );
    }

    #[test]
    fn maps_capture_failures_to_a_user_facing_message() {
        use crate::capture::CaptureError;

        let err = FlowError::Capture(CaptureError::WriteFailed {
            path: "/gallery".into(),
            source: std::io::Error::other("disk full"),
        });

        assert_eq!(
            render_error(&err),
            "Error: capture failed: failed to write image to /gallery: disk full"
        );
    }

    #[test]
    fn confidence_string_is_rendered_verbatim() {
        let result = ClassificationResult {
            label: "dog".to_string(),
            confidence: "87%".to_string(),
            all_predictions: None,
            processing_time_sec: None,
            model_prediction_time_sec: None,
            timestamp: None,
        };

        let lines = render_result(&result);

        assert!(lines.contains(&"Confidence: 87%".to_string()));
    }
}
