use serde::{Deserialize, Serialize};

/// Body of `POST /madetect`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetectionRequest {
    pub input_ad: String,
    pub project_id: String,
}

/// Analysis of one advertisement: the violated-law explanation and a
/// compliant rewrite.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    #[serde(default)]
    pub result_law: String,
    #[serde(default)]
    pub result_advice: String,
}

/// A stored detection, as returned by `GET /api/project/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    #[serde(default)]
    pub input_ad: String,
    #[serde(default)]
    pub result_law: String,
    #[serde(default)]
    pub result_advice: String,
}

impl DetectionRecord {
    pub fn new(input_ad: impl Into<String>, result: DetectionResult) -> Self {
        Self {
            input_ad: input_ad.into(),
            result_law: result.result_law,
            result_advice: result.result_advice,
        }
    }
}
