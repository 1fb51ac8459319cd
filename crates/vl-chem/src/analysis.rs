//! Wire types for the reaction-analysis proxy.
//!
//! The bench never talks to the language model itself. It builds an
//! [`AnalysisRequest`], a proxy turns it into a prompt, and the model's
//! free text comes back split into an [`AnalysisResponse`].

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mixture::Mixture;

/// Upstream budget before the proxy gives up.
pub const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(20);

pub const CONTEXT_MARKER: &str = "__CONTEXT__";
pub const NO_ANALYSIS: &str = "No analysis available.";
pub const NO_FURTHER_ANALYSIS: &str = "No further analysis.";

const ANALYSIS_HEADING: &str = "Analysis:";
const SECTION_HEADINGS: [&str; 3] = ["Reaction", "Products", "Analysis"];

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Analysis request timed out")]
    Timeout,

    #[error("Analysis service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Analysis transport error: {0}")]
    Transport(String),
}

impl AnalysisError {
    /// Map a proxy status code onto an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            400 => Self::InvalidRequest(message.into()),
            504 => Self::Timeout,
            _ => Self::Status {
                status,
                message: message.into(),
            },
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::Timeout => 504,
            Self::Status { status, .. } => *status,
            Self::Transport(_) => 502,
        }
    }
}

/// Optional bench conditions sent alongside the reactants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<BTreeMap<String, f64>>,
}

impl ReactionContext {
    /// Conditions of a bench run: temperature, heating, the beaker pH and
    /// the per-reagent volumes.
    pub fn for_mixture(mixture: &Mixture, temperature_c: f64, heating: bool) -> Self {
        Self {
            temperature_c: Some(temperature_c),
            heating: Some(heating),
            ph: Some(mixture.ph()),
            notes: Some(format!(
                "User initiated reaction via React button; include thermal considerations if relevant. Volumes: {}",
                mixture.volume_summary()
            )),
            volumes: Some(mixture.volumes()),
        }
    }

    /// `Temperature=25C; Heating=No; pH=7.00; Notes=...`, skipping unset fields.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(t) = self.temperature_c {
            parts.push(format!("Temperature={t}C"));
        }
        if let Some(heating) = self.heating {
            parts.push(format!("Heating={}", if heating { "Yes" } else { "No" }));
        }
        if let Some(ph) = self.ph {
            parts.push(format!("pH={ph:.2}"));
        }
        if let Some(notes) = &self.notes {
            parts.push(format!("Notes={notes}"));
        }
        parts.join("; ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub reactant_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ReactionContext>,
}

impl AnalysisRequest {
    /// Reactant names, plus a trailing `__CONTEXT__` line when the context
    /// carries at least one condition, so the prompt sees the conditions too.
    pub fn build(names: Vec<String>, context: Option<ReactionContext>) -> Self {
        let mut reactant_names = names;
        if let Some(ctx) = &context {
            let summary = ctx.summary();
            if !summary.is_empty() {
                reactant_names.push(format!("{CONTEXT_MARKER} {summary}"));
            }
        }
        Self {
            reactant_names,
            meta: context,
        }
    }

    /// Request for everything in the beaker. Needs at least two entries.
    pub fn from_mixture(mixture: &Mixture, context: Option<ReactionContext>) -> AnalysisResult<Self> {
        if mixture.len() < 2 {
            return Err(AnalysisError::InvalidRequest(
                "add at least 2 chemicals to react".to_string(),
            ));
        }
        let request = Self::build(mixture.labels(), context);
        debug!(reactants = mixture.len(), "analysis request built");
        Ok(request)
    }

    /// Checks the proxy applies before forwarding.
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.reactant_names.is_empty() || self.reactant_names.iter().any(|n| n.trim().is_empty()) {
            return Err(AnalysisError::InvalidRequest(
                "reactantNames must be a non-empty array of strings".to_string(),
            ));
        }
        Ok(())
    }

    /// Prompt text forwarded to the model.
    pub fn prompt(&self) -> String {
        format!(
            "Given the following chemicals: {}, describe the reaction that occurs, the products, \
             and a brief analysis of the process. If no reaction occurs, state so. \
             Provide clear separation: Reaction:, Products:, Analysis:",
            self.reactant_names.join(", ")
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub result: String,
    pub analysis: String,
}

impl AnalysisResponse {
    pub fn from_model_text(text: &str) -> Self {
        split_model_text(text)
    }

    /// Both fields passed through [`normalize_text`] for display.
    pub fn normalized(&self) -> Self {
        Self {
            result: normalize_text(&self.result),
            analysis: normalize_text(&self.analysis),
        }
    }
}

/// Split model output at its first `Analysis:` heading.
///
/// Text without the heading is all result. Empty halves get placeholders.
pub fn split_model_text(text: &str) -> AnalysisResponse {
    let (result, analysis) = match find_ignore_case(text, ANALYSIS_HEADING) {
        Some(at) if text.contains(ANALYSIS_HEADING) => (
            text[..at].trim(),
            text[at + ANALYSIS_HEADING.len()..].trim(),
        ),
        _ => (text.trim(), ""),
    };

    AnalysisResponse {
        result: non_empty_or(result, NO_ANALYSIS),
        analysis: non_empty_or(analysis, NO_FURTHER_ANALYSIS),
    }
}

fn non_empty_or(text: &str, fallback: &str) -> String {
    let chosen = if text.is_empty() { fallback } else { text };
    chosen.to_string()
}

/// Byte offset of the first ASCII-case-insensitive match of `needle`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - pat.len())
        .filter(|&i| haystack.is_char_boundary(i))
        .find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}

/// Tidy model text for display.
///
/// CRLF becomes LF, runs of three or more newlines collapse to a blank
/// line, each `Reaction:`/`Products:`/`Analysis:` heading starts on a new
/// line, and the ends are trimmed.
pub fn normalize_text(text: &str) -> String {
    let unix = text.replace("\r\n", "\n");
    let collapsed = collapse_blank_lines(&unix);
    break_before_headings(&collapsed).trim().to_string()
}

fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            run += 1;
            continue;
        }
        push_newlines(&mut out, run);
        run = 0;
        out.push(ch);
    }
    push_newlines(&mut out, run);
    out
}

fn push_newlines(out: &mut String, run: usize) {
    let n = if run >= 3 { 2 } else { run };
    out.extend(std::iter::repeat_n('\n', n));
}

fn break_before_headings(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        if let Some(len) = heading_len(rest) {
            out.push('\n');
            out.push_str(&rest[..len]);
            rest = &rest[len..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

/// Length of `Heading<ws>:` at the start of `text`, if present.
fn heading_len(text: &str) -> Option<usize> {
    let word = SECTION_HEADINGS.iter().find(|w| text.starts_with(**w))?;
    let after = &text[word.len()..];
    let gap = after.len() - after.trim_start().len();
    after[gap..].starts_with(':').then_some(word.len() + gap + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reagent::find;

    #[test]
    fn payload_without_context_is_just_names() {
        let req = AnalysisRequest::build(vec!["Water (10ml)".into()], None);
        assert_eq!(req.reactant_names, vec!["Water (10ml)"]);
        assert_eq!(req.to_json().unwrap(), r#"{"reactantNames":["Water (10ml)"]}"#);
    }

    #[test]
    fn context_line_is_appended() {
        let ctx = ReactionContext {
            temperature_c: Some(25.0),
            heating: Some(false),
            ph: Some(7.0),
            notes: Some("careful".into()),
            volumes: None,
        };
        let req = AnalysisRequest::build(vec!["A".into(), "B".into()], Some(ctx));
        assert_eq!(
            req.reactant_names.last().map(String::as_str),
            Some("__CONTEXT__ Temperature=25C; Heating=No; pH=7.00; Notes=careful")
        );

        let json: serde_json::Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
        assert_eq!(json["meta"]["temperatureC"], 25.0);
        assert_eq!(json["meta"]["heating"], false);
    }

    #[test]
    fn empty_context_adds_no_line() {
        let req = AnalysisRequest::build(
            vec!["A".into(), "B".into()],
            Some(ReactionContext::default()),
        );
        assert_eq!(req.reactant_names, vec!["A", "B"]);
        assert_eq!(req.meta, Some(ReactionContext::default()));

        // volumes alone are not part of the context line
        let volumes_only = ReactionContext {
            volumes: Some([("A".to_string(), 10.0)].into()),
            ..ReactionContext::default()
        };
        let req = AnalysisRequest::build(vec!["A".into(), "B".into()], Some(volumes_only));
        assert_eq!(req.reactant_names.len(), 2);
    }

    #[test]
    fn mixture_needs_two_reagents() {
        let mut mix = Mixture::new();
        mix.add(find("HCl").unwrap());
        assert!(matches!(
            AnalysisRequest::from_mixture(&mix, None),
            Err(AnalysisError::InvalidRequest(_))
        ));

        mix.add(find("NaOH").unwrap());
        let ctx = ReactionContext::for_mixture(&mix, 40.0, true);
        let req = AnalysisRequest::from_mixture(&mix, Some(ctx)).unwrap();
        assert_eq!(req.reactant_names.len(), 3);
        assert!(req.reactant_names[2].contains("Heating=Yes"));
        assert!(req.reactant_names[2].contains("Volumes: Hydrochloric Acid: 10ml, Sodium Hydroxide: 10ml"));
        assert!(req.prompt().starts_with(
            "Given the following chemicals: Hydrochloric Acid (10ml), Sodium Hydroxide (10ml), __CONTEXT__"
        ));
    }

    #[test]
    fn validate_rejects_empty_names() {
        let empty = AnalysisRequest::build(Vec::new(), None);
        assert_eq!(empty.validate().map_err(|e| e.status_code()), Err(400));
        let blank = AnalysisRequest::build(vec!["  ".into()], None);
        assert!(blank.validate().is_err());
    }

    #[test]
    fn split_at_first_analysis_heading() {
        let resp = split_model_text("Reaction: acid meets base\nAnalysis: exothermic. Analysis: again");
        assert_eq!(resp.result, "Reaction: acid meets base");
        assert_eq!(resp.analysis, "exothermic. Analysis: again");
    }

    #[test]
    fn split_without_heading_uses_placeholder() {
        let resp = split_model_text("  nothing happens  ");
        assert_eq!(resp.result, "nothing happens");
        assert_eq!(resp.analysis, NO_FURTHER_ANALYSIS);

        // lowercase heading alone does not trigger the split
        let resp = split_model_text("analysis: none");
        assert_eq!(resp.result, "analysis: none");

        let resp = split_model_text("Analysis:");
        assert_eq!(resp.result, NO_ANALYSIS);
        assert_eq!(resp.analysis, NO_FURTHER_ANALYSIS);
    }

    #[test]
    fn normalize_tidies_headings_and_blank_lines() {
        let text = "Reaction: x\r\n\r\n\r\n\r\nProducts : y Analysis: z\n";
        assert_eq!(normalize_text(text), "Reaction: x\n\n\nProducts : y \nAnalysis: z");
        assert_eq!(normalize_text("Reactions are fun"), "Reactions are fun");
    }

    #[test]
    fn status_mapping() {
        assert_eq!(AnalysisError::from_status(504, "Gemini request timed out"), AnalysisError::Timeout);
        assert_eq!(AnalysisError::from_status(405, "Method not allowed").status_code(), 405);
        assert_eq!(AnalysisError::Transport("reset".into()).status_code(), 502);
    }
}
