// Plain data describing what the weather widget shows. Handlers move a
// `PageView` from one state to the next and only then hand it to the
// templates, so a panel is never rendered from a partial result.

use crate::models::arc::{ArcAnimation, ArcKeyframes};
use crate::models::prediction::PredictionResult;
use crate::models::reading::{Field, FieldError, RawReading};

pub const ERROR_LABEL: &str = "Error";
pub const ERROR_DESCRIPTION: &str = "Unable to fetch prediction. Please try again.";
pub const ERROR_CONFIDENCE: &str = "--";

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub field: Field,
    pub value: String,
    pub error: Option<String>,
}

impl FieldView {
    pub fn id(&self) -> &'static str {
        self.field.id()
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub fields: Vec<FieldView>,
}

impl FormView {
    pub fn empty() -> FormView {
        FormView::from_raw(&RawReading::default())
    }

    /// Values as typed, with no errors shown.
    pub fn from_raw(raw: &RawReading) -> FormView {
        FormView {
            fields: Field::ALL
                .into_iter()
                .map(|field| FieldView {
                    field,
                    value: raw.value(field).to_string(),
                    error: None,
                })
                .collect(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.has_error())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub label: String,
    pub theme: String,
    pub description: String,
    pub arc: ArcKeyframes,
}

impl PredictionView {
    pub fn confidence_text(&self) -> String {
        self.arc.final_label()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorView {
    pub label: String,
    pub description: String,
    pub confidence_text: String,
}

impl Default for ErrorView {
    fn default() -> Self {
        ErrorView {
            label: ERROR_LABEL.to_string(),
            description: ERROR_DESCRIPTION.to_string(),
            confidence_text: ERROR_CONFIDENCE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Placeholder,
    Prediction(PredictionView),
    Error(ErrorView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub form: FormView,
    pub result: ResultView,
}

impl PageView {
    pub fn new() -> PageView {
        PageView {
            form: FormView::empty(),
            result: ResultView::Placeholder,
        }
    }

    /// Starts a validation pass: shows the submitted values and clears the
    /// errors of the previous pass.
    pub fn with_form(self, form: FormView) -> PageView {
        PageView { form, ..self }
    }

    /// Marks rejected fields. The result panel keeps whatever it showed.
    pub fn with_validation_errors(mut self, errors: &[FieldError]) -> PageView {
        for field_view in self.form.fields.iter_mut() {
            field_view.error = errors
                .iter()
                .find(|e| e.field == field_view.field)
                .map(|e| e.message.clone());
        }
        self
    }

    pub fn with_prediction(self, result: &PredictionResult) -> PageView {
        let prediction = PredictionView {
            label: result.label().to_string(),
            theme: result.theme().to_string(),
            description: format!(
                "Predicted weather with a confidence of {}%",
                result.confidence_percent
            ),
            arc: ArcAnimation::new(result.confidence_percent).keyframes(),
        };
        PageView {
            result: ResultView::Prediction(prediction),
            ..self
        }
    }

    pub fn with_prediction_error(self) -> PageView {
        PageView {
            result: ResultView::Error(ErrorView::default()),
            ..self
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::arc::{CIRCUMFERENCE, dash_offset};
    use crate::models::reading::WeatherReading;

    fn rain(confidence: f64) -> PredictionResult {
        PredictionResult {
            prediction: "RAIN".to_string(),
            confidence_percent: confidence,
            input_features: None,
        }
    }

    #[test]
    fn test_validation_errors_replace_previous_ones() {
        let errors = vec![FieldError {
            field: Field::Wind,
            message: "bad wind".to_string(),
        }];
        let view = PageView::new().with_validation_errors(&errors);
        let shown: Vec<Option<&str>> = view
            .form
            .fields
            .iter()
            .map(|f| f.error.as_deref())
            .collect();
        assert_eq!(shown, vec![None, None, None, Some("bad wind")]);

        let view = view.with_form(FormView::empty());
        assert!(!view.form.has_errors());
    }

    #[test]
    fn test_prediction_view() {
        let view = PageView::new().with_prediction(&rain(87.0));
        let ResultView::Prediction(prediction) = view.result else {
            panic!("expected a prediction");
        };
        assert_eq!(prediction.label, "Rainy");
        assert_eq!(prediction.theme, "from-indigo-400 to-blue-700");
        assert_eq!(
            prediction.description,
            "Predicted weather with a confidence of 87%"
        );
        assert_eq!(prediction.confidence_text(), "87%");
        assert!((prediction.arc.final_offset() - CIRCUMFERENCE * (1.0 - 0.87)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_prediction_view() {
        let result = PredictionResult {
            prediction: "hail".to_string(),
            confidence_percent: 40.0,
            input_features: None,
        };
        let ResultView::Prediction(prediction) = PageView::new().with_prediction(&result).result
        else {
            panic!("expected a prediction");
        };
        assert_eq!(prediction.label, "Unknown");
        assert_eq!(prediction.theme, "from-yellow-400 to-orange-500");
        assert_eq!(prediction.arc.final_offset(), dash_offset(40.0));
    }

    #[test]
    fn test_error_replaces_whole_result() {
        let view = PageView::new()
            .with_prediction(&rain(87.0))
            .with_prediction_error();
        assert_eq!(
            view.result,
            ResultView::Error(ErrorView {
                label: "Error".to_string(),
                description: "Unable to fetch prediction. Please try again.".to_string(),
                confidence_text: "--".to_string(),
            })
        );
    }

    #[test]
    fn test_form_from_random_reading() {
        let form = FormView::from_raw(&RawReading::from(&WeatherReading {
            precipitation: 1.5,
            temp_max: 20.0,
            temp_min: -1.0,
            wind: 3.2,
        }));
        let values: Vec<&str> = form.fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["1.5", "20", "-1", "3.2"]);
    }
}
