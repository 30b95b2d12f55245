//! End-to-end conversion of one input string
//!
//! [`process`] is the whole tool in one call: detect, arbitrate, render.
//! [`explain`] runs the same steps and keeps every intermediate result so a
//! caller can show why a given output was chosen.

use serde::Serialize;

use crate::arbitrate::{self, Ballot};
use crate::config::Config;
use crate::detect::{self, Detector};
use crate::record::Detection;
use crate::render::RenderError;

const TEL_SCHEME: &str = "tel:";

/// One detector's result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub detector: Detector,
    pub detection: Detection,
}

/// Everything [`process`] computed for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    /// The trimmed input every detector saw
    pub input: String,
    pub findings: Vec<Finding>,
    /// Every (finding, renderer) vote; `Ballot::detection` indexes `findings`
    pub ballots: Vec<Ballot>,
    /// `None` when the input was echoed back unchanged
    pub winner: Option<Ballot>,
    pub output: String,
}

/// Normalize raw input before processing
///
/// Trims surrounding whitespace and, for a single-line `tel:` URI, drops the
/// (lowercase) scheme so the phone detector sees the bare number.
pub fn prepare_input(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix(TEL_SCHEME) {
        Some(number) if !trimmed.contains('\n') => number.trim(),
        _ => trimmed,
    }
}

/// Convert `input` into its Markdown form
///
/// Input that no detector recognizes comes back trimmed and otherwise
/// unchanged.
pub fn process(input: &str, config: &Config) -> Result<String, RenderError> {
    explain(input, config).map(|explanation| explanation.output)
}

/// Like [`process`], but return the detections and votes as well
pub fn explain(input: &str, config: &Config) -> Result<Explanation, RenderError> {
    let input = input.trim();
    let findings: Vec<Finding> = detect::detect_all(input, config)
        .into_iter()
        .map(|(detector, detection)| Finding {
            detector,
            detection,
        })
        .collect();

    let detections = findings.iter().map(|finding| &finding.detection);
    let ballots = arbitrate::scoreboard(detections.clone());
    let winner = arbitrate::select(detections);

    let output = match winner {
        Some(ballot) => ballot
            .renderer
            .render(&findings[ballot.detection].detection, config)?,
        None => input.to_string(),
    };

    Ok(Explanation {
        input: input.to_string(),
        findings,
        ballots,
        winner,
        output,
    })
}
