//! # BMI Classifier
//!
//! Pure mapping from (weight, height) to a classification record.
//! Nothing in here fails loudly: input that cannot be computed yet (empty,
//! non-numeric, zero or negative) simply produces no result.

use log::debug;

/// Category boundaries, ascending. Each entry is the exclusive upper bound
/// of its category; the last category is open-ended.
const UPPER_BOUNDS: [(f64, BmiCategory); 5] = [
    (18.5, BmiCategory::Underweight),
    (25.0, BmiCategory::Normal),
    (30.0, BmiCategory::Overweight),
    (35.0, BmiCategory::ObesityGrade1),
    (40.0, BmiCategory::ObesityGrade2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObesityGrade1,
    ObesityGrade2,
    ObesityGrade3,
}

impl BmiCategory {
    /// Maps a raw (unrounded) BMI value to its category.
    /// Lower bounds are inclusive, so 18.5 is already `Normal`.
    pub fn from_value(imc: f64) -> Self {
        UPPER_BOUNDS
            .iter()
            .find(|(upper, _)| imc < *upper)
            .map(|(_, category)| *category)
            .unwrap_or(BmiCategory::ObesityGrade3)
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObesityGrade1 => "Obesity Grade I",
            BmiCategory::ObesityGrade2 => "Obesity Grade II (severe)",
            BmiCategory::ObesityGrade3 => "Obesity Grade III (morbid)",
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "See a nutritionist for a diet focused on healthy mass gain."
            }
            BmiCategory::Normal => {
                "Excellent! Keep a balanced diet and regular physical activity."
            }
            BmiCategory::Overweight => {
                "Warning sign. Try to avoid processed food and increase physical activity."
            }
            BmiCategory::ObesityGrade1 => {
                "We recommend seeking professional guidance to adjust your routine."
            }
            BmiCategory::ObesityGrade2 => {
                "Your health needs attention. See a doctor for a complete evaluation."
            }
            BmiCategory::ObesityGrade3 => {
                "It is essential to seek specialized medical help as soon as possible."
            }
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            BmiCategory::Underweight | BmiCategory::Overweight => Severity::Caution,
            BmiCategory::Normal => Severity::Healthy,
            BmiCategory::ObesityGrade1 => Severity::Warning,
            BmiCategory::ObesityGrade2 => Severity::Danger,
            BmiCategory::ObesityGrade3 => Severity::Critical,
        }
    }
}

/// How alarming a result should look. A rendering hint, not a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Caution,
    Healthy,
    Warning,
    Danger,
    Critical,
}

/// Outcome of one calculation. Immutable; replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiResult {
    /// BMI rounded to two decimal places.
    pub value: f64,
    pub category: BmiCategory,
    pub tip: &'static str,
    pub severity: Severity,
}

impl BmiResult {
    /// The value as shown to the user, always with two decimals ("19.50").
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.value)
    }
}

/// Raw text of the two calculator fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BmiInput {
    pub weight_kg: String,
    pub height_cm: String,
}

/// Computes and classifies the BMI for a weight in kilograms and a height
/// in centimetres. Returns `None` unless both are strictly positive.
pub fn classify(weight_kg: f64, height_cm: f64) -> Option<BmiResult> {
    let height_m = height_cm / 100.0;
    // `!(x > 0.0)` also rejects NaN
    if !(height_m > 0.0) || !(weight_kg > 0.0) {
        return None;
    }

    let imc = weight_kg / (height_m * height_m);
    let category = BmiCategory::from_value(imc);
    Some(BmiResult {
        value: round2(imc),
        category,
        tip: category.tip(),
        severity: category.severity(),
    })
}

/// Parses both fields and classifies them. Unparseable text behaves like a
/// non-positive number.
pub fn classify_input(input: &BmiInput) -> Option<BmiResult> {
    let weight = parse_measurement(&input.weight_kg);
    let height = parse_measurement(&input.height_cm);
    let result = match (weight, height) {
        (Some(w), Some(h)) => classify(w, h),
        _ => None,
    };
    debug!(
        "classify_input(weight={:?}, height={:?}) -> {:?}",
        input.weight_kg,
        input.height_cm,
        result.as_ref().map(|r| r.category)
    );
    result
}

/// Parses a user-typed measurement. Accepts surrounding whitespace and a
/// comma as decimal separator ("70,5").
pub fn parse_measurement(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Rounds the scaled binary value half away from zero, so a BMI stored just
/// under a tie (7.674999.. for 30.7 kg at 200 cm) still shows "7.68".
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
