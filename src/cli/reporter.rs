// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use super::converter::{ConversionError, ConversionReport, MeshSummary};
use crate::geometry::Vector3;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a converted file; the detailed block only when verbose
    pub fn report_conversion(report: &ConversionReport, verbose: bool) {
        if !verbose {
            println!(
                "{} {} -> {}",
                "✅".green(),
                report.input.display(),
                report.output.display().to_string().cyan()
            );
            return;
        }

        println!("\n{}", "━".repeat(80).bright_black());
        println!(
            "{} {}",
            "Converted:".bold(),
            report.input.display().to_string().cyan()
        );
        println!("{}", "━".repeat(80).bright_black());
        Self::print_field("Object", &format!("{} ({})", report.name, report.style));
        Self::print_field("Facets", &report.facets.to_string());
        Self::print_field("Points", &report.points.to_string());
        if report.degenerate > 0 {
            let note = if report.skipped > 0 {
                format!("{} (skipped)", report.degenerate)
            } else {
                report.degenerate.to_string()
            };
            println!("  {} {}", "Degenerate:".bright_black(), note.yellow());
        }
        Self::print_field("Output", &report.output.display().to_string());
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(report.duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report a file that was not converted
    pub fn report_failure(error: &ConversionError) {
        match error {
            ConversionError::NotStl(_) => Self::report_warning(&error.to_string()),
            _ => Self::report_error(&error.to_string()),
        }
    }

    /// Report mesh statistics
    pub fn report_summary(summary: &MeshSummary) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Solid:".bold(), summary.name.cyan());
        println!("{}", "━".repeat(80).bright_black());
        Self::print_field("Facets", &summary.facets.to_string());
        Self::print_field("Points", &summary.points.to_string());
        if summary.degenerate_facets > 0 {
            println!(
                "  {} {}",
                "Degenerate:".bright_black(),
                summary.degenerate_facets.to_string().yellow()
            );
        }
        match (summary.min, summary.max, summary.center, summary.volume) {
            (Some(min), Some(max), Some(center), Some(volume)) => {
                Self::print_field("BBox min", &Self::format_point(&min));
                Self::print_field("BBox max", &Self::format_point(&max));
                Self::print_field("Center", &Self::format_point(&center));
                Self::print_field("Volume", &format!("{:.5}", volume));
            }
            _ => println!("  {}", "(no points)".bright_black()),
        }
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report batch totals
    pub fn report_totals(converted: usize, failed: usize, skipped: usize) {
        let failed_str = if failed > 0 {
            failed.to_string().red()
        } else {
            failed.to_string().green()
        };
        println!(
            "\n  {} {}  {} {}  {} {}",
            "Converted:".bright_black(),
            converted.to_string().green(),
            "Failed:".bright_black(),
            failed_str,
            "Skipped:".bright_black(),
            skipped.to_string().yellow()
        );
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    fn print_field(name: &str, value: &str) {
        println!("  {} {}", format!("{}:", name).bright_black(), value.cyan());
    }

    fn format_point(point: &Vector3) -> String {
        format!("({:.5}, {:.5}, {:.5})", point.x(), point.y(), point.z())
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
