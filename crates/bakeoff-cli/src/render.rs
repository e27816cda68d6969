//! Plain-text rendering of benchmark and probe results.

use std::fmt::Write;

use bakeoff_core::BenchmarkResult;
use bakeoff_engine::{ChainOutcome, ProbeOutcome};

const RULE_WIDTH: usize = 80;

/// Formats a finished benchmark as a numbered leaderboard.
pub fn leaderboard(result: &BenchmarkResult) -> String {
    let mut out = String::new();
    let rule = "-".repeat(RULE_WIDTH);

    let _ = writeln!(out, "BENCHMARK RESULTS");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH + 1));
    let _ = writeln!(out, "\nQuestion:\n{}\n", result.question);
    let _ = writeln!(
        out,
        "Answered: {}/{} agents",
        result.responses.len(),
        result.total_agents
    );

    let _ = writeln!(out, "\nLEADERBOARD:\n{}", rule);
    for (i, ranking) in result.leaderboard.rankings.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n{}. {} ({}) - Score: {}/100",
            i + 1,
            ranking.agent_name,
            ranking.provider,
            ranking.score
        );
        let _ = writeln!(out, "   Strengths: {}", ranking.strengths.join(", "));
        let _ = writeln!(out, "   Weaknesses: {}", ranking.weaknesses.join(", "));
        let _ = writeln!(out, "   Rationale: {}", ranking.rationale);
    }

    let _ = writeln!(out, "\nOVERALL ANALYSIS:\n{}", rule);
    let _ = writeln!(out, "{}", result.leaderboard.overall_analysis);
    let _ = write!(out, "\nTimestamp: {}", result.leaderboard.timestamp.to_rfc3339());

    out
}

/// The idea and its central feature, each under a heading.
pub fn chain_report(outcome: &ChainOutcome) -> String {
    format!(
        "Idea of edtech b2c application in 2025:\n{}\n\nCentral feature to focus on:\n{}",
        outcome.idea.trim(),
        outcome.feature.trim()
    )
}

/// One line per probed agent, then its answer or error.
pub fn probe_report(outcomes: &[ProbeOutcome]) -> String {
    let mut out = String::new();

    for outcome in outcomes {
        match &outcome.result {
            Ok(text) => {
                let _ = writeln!(out, "[ok] {} ({})\n{}\n", outcome.agent_name, outcome.provider, text.trim());
            }
            Err(e) => {
                let _ = writeln!(out, "[failed] {} ({})\n{}\n", outcome.agent_name, outcome.provider, e);
            }
        }
    }

    let ok = outcomes.iter().filter(|o| o.result.is_ok()).count();
    let _ = write!(out, "{}/{} agents answered", ok, outcomes.len());
    out
}
