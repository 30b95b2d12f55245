//! `--explain` report: detections, the vote grid and the chosen pair

use colored::Colorize;
use mdtool_core::arbitrate::Ballot;
use mdtool_core::Explanation;
use prettytable::Table;

use crate::prelude::{println, *};

/// Print the human readable report
pub fn print(explanation: &Explanation) {
    println!("\n{}\n", "Detections".bold());
    if explanation.findings.is_empty() {
        println!("No detector recognized the input.");
    } else {
        findings_table(explanation).printstd();
    }

    if !explanation.ballots.is_empty() {
        println!("\n{}\n", "Votes".bold());
        ballots_table(explanation).printstd();
    }

    println!("\n{}\n", "Result".bold());
    match explanation.winner {
        Some(ballot) => println!(
            "{} {} with {} (score {})",
            "Winner:".green().bold(),
            kind_of(explanation, &ballot),
            ballot.renderer.name(),
            ballot.score
        ),
        None => println!("{}", "No winner, input echoed back".yellow()),
    }
    println!("{}", explanation.output);
}

/// The report as pretty-printed JSON
pub fn to_json(explanation: &Explanation) -> Result<String> {
    serde_json::to_string_pretty(explanation).context("Failed to serialize explain report")
}

fn findings_table(explanation: &Explanation) -> Table {
    let mut table = new_table();
    table.add_row(prettytable::row![
        "#".bold().cyan(),
        "Detector".bold().cyan(),
        "Kind".bold().cyan(),
        "Confidence".bold().cyan(),
        "Attributes".bold().cyan()
    ]);

    for (index, finding) in explanation.findings.iter().enumerate() {
        let attributes = finding
            .detection
            .attributes()
            .into_iter()
            .map(|(name, value)| f!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(prettytable::row![
            index.to_string().green(),
            finding.detector.name().bright_white(),
            finding.detection.content_type().as_str().bright_yellow(),
            finding.detection.confidence.to_string(),
            attributes.bright_black()
        ]);
    }

    table
}

fn ballots_table(explanation: &Explanation) -> Table {
    let mut table = new_table();
    table.add_row(prettytable::row![
        "#".bold().cyan(),
        "Kind".bold().cyan(),
        "Renderer".bold().cyan(),
        "Score".bold().cyan()
    ]);

    for ballot in &explanation.ballots {
        let score = if explanation.winner.as_ref() == Some(ballot) {
            ballot.score.to_string().green().bold()
        } else if ballot.score == 0 {
            ballot.score.to_string().bright_black()
        } else {
            ballot.score.to_string().normal()
        };

        table.add_row(prettytable::row![
            ballot.detection.to_string(),
            kind_of(explanation, ballot),
            ballot.renderer.name(),
            score
        ]);
    }

    table
}

fn kind_of(explanation: &Explanation, ballot: &Ballot) -> &'static str {
    explanation
        .findings
        .get(ballot.detection)
        .map_or("?", |finding| finding.detection.content_type().as_str())
}
