//! Choosing one (detection, renderer) pair
//!
//! Every renderer votes on every detection. Scores come from a single
//! declarative table, [`VOTE_TABLE`]. The pair with the highest score wins;
//! ties go to the pair seen first, iterating detections in detector order and,
//! within a detection, renderers in [`Renderer::ALL`] order. A score of 0
//! never wins.

use serde::Serialize;

use crate::record::{ContentType, Detection};
use crate::render::Renderer;

/// Score of the passthrough renderer for any detection
pub const PASSTHROUGH_SCORE: u8 = 1;

/// Where a vote's score comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Fixed(u8),
    /// The detection's own confidence
    Confidence,
}

/// One row of the vote table; `kind: None` matches every detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub kind: Option<ContentType>,
    pub renderer: Renderer,
    pub score: Score,
}

const fn rule(kind: ContentType, renderer: Renderer, score: Score) -> Rule {
    Rule {
        kind: Some(kind),
        renderer,
        score,
    }
}

/// Renderer scores per content type. Pairs not listed score 0.
pub const VOTE_TABLE: [Rule; 13] = [
    rule(
        ContentType::GitHubUrl,
        Renderer::UrlFamily,
        Score::Fixed(90),
    ),
    rule(
        ContentType::GitHubUiPaste,
        Renderer::UrlFamily,
        Score::Fixed(95),
    ),
    rule(ContentType::JiraUrl, Renderer::UrlFamily, Score::Fixed(90)),
    rule(
        ContentType::JiraComment,
        Renderer::UrlFamily,
        Score::Fixed(95),
    ),
    rule(
        ContentType::NotionUrl,
        Renderer::UrlFamily,
        Score::Fixed(85),
    ),
    rule(ContentType::Url, Renderer::UrlFamily, Score::Fixed(50)),
    rule(
        ContentType::JiraKeyWithDescription,
        Renderer::JiraWithDescription,
        Score::Fixed(98),
    ),
    rule(ContentType::JiraKey, Renderer::JiraKey, Score::Fixed(95)),
    rule(ContentType::Phone7Digit, Renderer::Phone, Score::Confidence),
    rule(
        ContentType::Phone10Digit,
        Renderer::Phone,
        Score::Confidence,
    ),
    rule(
        ContentType::Phone11Digit,
        Renderer::Phone,
        Score::Confidence,
    ),
    rule(
        ContentType::AppDeepLink,
        Renderer::DeepLink,
        Score::Fixed(85),
    ),
    Rule {
        kind: None,
        renderer: Renderer::Passthrough,
        score: Score::Fixed(PASSTHROUGH_SCORE),
    },
];

/// A renderer's vote on one detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ballot {
    /// Index of the detection in the slice that was scored
    pub detection: usize,
    pub renderer: Renderer,
    pub score: u8,
}

/// Score `renderer` gives `detection`, from the first matching table row
pub fn vote(renderer: Renderer, detection: &Detection) -> u8 {
    let kind = detection.content_type();
    VOTE_TABLE
        .iter()
        .find(|rule| rule.renderer == renderer && rule.kind.is_none_or(|k| k == kind))
        .map_or(0, |rule| match rule.score {
            Score::Fixed(score) => score,
            Score::Confidence => detection.confidence,
        })
}

/// Every (detection, renderer) vote, detections outer, renderers inner
pub fn scoreboard<'a>(detections: impl IntoIterator<Item = &'a Detection>) -> Vec<Ballot> {
    detections
        .into_iter()
        .enumerate()
        .flat_map(|(index, detection)| {
            Renderer::ALL.into_iter().map(move |renderer| Ballot {
                detection: index,
                renderer,
                score: vote(renderer, detection),
            })
        })
        .collect()
}

/// The winning pair, or `None` when nothing scores above 0
pub fn select<'a>(detections: impl IntoIterator<Item = &'a Detection>) -> Option<Ballot> {
    scoreboard(detections)
        .into_iter()
        .fold(None, |best: Option<Ballot>, ballot| {
            if ballot.score > best.map_or(0, |b| b.score) {
                Some(ballot)
            } else {
                best
            }
        })
}
