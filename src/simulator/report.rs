//! Simulation report generation.

use super::config::SimConfig;
use super::series::ConvergenceSeries;
use crate::constants::{THEORETICAL_STAY_RATE, THEORETICAL_SWITCH_RATE};
use crate::error::SimResult;
use serde::Serialize;

/// Results of one simulation run plus the settings that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub series: ConvergenceSeries,
    pub seed: Option<u64>,
    pub workers: usize,
    pub elapsed_ms: u64,
    pub generated_at: String,
}

impl SimReport {
    pub fn new(series: ConvergenceSeries, config: &SimConfig, elapsed_ms: u64) -> Self {
        Self {
            series,
            seed: config.seed,
            workers: config.workers.max(1),
            elapsed_ms,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  THREE-DOOR SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Batches: {}, total games: {}, workers: {}, time: {} ms\n",
            self.series.len(),
            self.series.total_trials(),
            self.workers,
            self.elapsed_ms
        ));
        if let Some(seed) = self.seed {
            report.push_str(&format!("Seed: {}\n", seed));
        }
        report.push('\n');

        report.push_str("── CONVERGENCE ──────────────────────────────────────────────────\n");
        report.push_str("     Games     Stay %   Switch %   Stay Δ   Switch Δ\n");
        report.push_str("  ─────────   ───────  ────────   ──────   ────────\n");
        for summary in &self.series {
            report.push_str(&format!(
                "  {:>9}   {:>6.2}   {:>7.2}   {:>6.2}   {:>7.2}\n",
                summary.batch_size,
                summary.stay_win_rate,
                summary.switch_win_rate,
                summary.stay_win_rate - THEORETICAL_STAY_RATE,
                summary.switch_win_rate - THEORETICAL_SWITCH_RATE,
            ));
        }
        report.push('\n');

        report.push_str("── WIN RATE BY STRATEGY ─────────────────────────────────────────\n");
        for summary in &self.series {
            let stay_bar = "█".repeat((summary.stay_win_rate / 5.0) as usize);
            let switch_bar = "█".repeat((summary.switch_win_rate / 5.0) as usize);
            report.push_str(&format!("  {:>9} stay   {:>5.1}% {}\n", summary.batch_size, summary.stay_win_rate, stay_bar));
            report.push_str(&format!("  {:>9} switch {:>5.1}% {}\n", "", summary.switch_win_rate, switch_bar));
        }
        report.push('\n');

        report.push_str("── THEORY ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Stay:   {:.2}%   Switch: {:.2}%\n",
            THEORETICAL_STAY_RATE, THEORETICAL_SWITCH_RATE
        ));
        if let Some((stay_dev, switch_dev)) = self.series.final_deviation() {
            report.push_str(&format!(
                "  Largest batch off by {:.2} (stay) / {:.2} (switch) points\n",
                stay_dev, switch_dev
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
