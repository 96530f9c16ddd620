//! Output formatters for job listings.
//!
//! Renders the job table with box-drawing characters, truncating columns to
//! fit the terminal, plus a JSON mode and a single-job detail view.

use jobdeck_link::Job;

use crate::error::{CLIError, Result};

/// Maximum column width before truncation
const MAX_COLUMN_WIDTH: usize = 40;

/// Minimum column width when shrinking to fit the terminal
const MIN_COLUMN_WIDTH: usize = 6;

/// Output format for job listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Parse a format name; anything unrecognized falls back to the table
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Formats job records for display
pub struct OutputFormatter {
    format: OutputFormat,
    color: bool,
}

impl OutputFormatter {
    /// Create a new formatter
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Get terminal width, defaulting to 80 if unavailable
    fn get_terminal_width() -> usize {
        if let Some((w, _h)) = term_size::dimensions() {
            w
        } else {
            80
        }
    }

    /// Truncate a string to max width with ellipsis
    fn truncate_value(value: &str, max_width: usize) -> String {
        if value.chars().count() <= max_width {
            value.to_string()
        } else if max_width <= 3 {
            value.chars().take(max_width).collect()
        } else {
            let take = max_width - 3;
            format!("{}...", value.chars().take(take).collect::<String>())
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            format!("\x1b[1m{}\x1b[0m", text)
        } else {
            text.to_string()
        }
    }

    /// Format the job collection
    pub fn format_jobs(&self, jobs: &[Job]) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_table(jobs)),
            OutputFormat::Json => Self::format_json(jobs),
        }
    }

    /// Format a single job as a detail view
    pub fn format_job(&self, job: &Job) -> Result<String> {
        match self.format {
            OutputFormat::Json => Self::format_json(job),
            OutputFormat::Table => {
                let mut output = String::new();
                output.push_str(&format!("{}\n", self.bold(&job.title)));
                output.push_str(&format!("Company: {}\n", job.company));
                if !job.date_posted.is_empty() {
                    output.push_str(&format!("Posted:  {}\n", job.date_posted));
                }
                output.push_str(&format!("Id:      {}\n", job.id));
                output.push('\n');
                output.push_str(&job.description);
                output.push('\n');
                Ok(output)
            }
        }
    }

    fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
        serde_json::to_string_pretty(value)
            .map_err(|e| CLIError::InputError(format!("failed to encode output: {}", e)))
    }

    fn format_table(&self, jobs: &[Job]) -> String {
        if jobs.is_empty() {
            return "No job listings available".to_string();
        }

        let columns = ["id", "title", "company", "posted"];
        let string_rows: Vec<[String; 4]> = jobs
            .iter()
            .map(|job| {
                [
                    job.id.clone(),
                    job.title.clone(),
                    job.company.clone(),
                    job.date_posted.clone(),
                ]
            })
            .collect();

        let mut col_widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
        for row in &string_rows {
            for (i, value) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(value.chars().count());
            }
        }

        Self::fit_to_terminal(&mut col_widths);

        let mut output = String::new();

        // Top border
        output.push('┌');
        for (idx, width) in col_widths.iter().enumerate() {
            output.push_str(&"─".repeat(width + 2));
            output.push(if idx == col_widths.len() - 1 { '┐' } else { '┬' });
        }
        output.push('\n');

        // Header row
        output.push('│');
        for (i, col) in columns.iter().enumerate() {
            let truncated = Self::truncate_value(col, col_widths[i]);
            let padded = format!(" {:width$} ", truncated, width = col_widths[i]);
            output.push_str(&self.bold(&padded));
            output.push('│');
        }
        output.push('\n');

        // Header separator
        output.push('├');
        for (idx, width) in col_widths.iter().enumerate() {
            output.push_str(&"─".repeat(width + 2));
            output.push(if idx == col_widths.len() - 1 { '┤' } else { '┼' });
        }
        output.push('\n');

        // Data rows
        for row in &string_rows {
            output.push('│');
            for (i, value) in row.iter().enumerate() {
                let truncated = Self::truncate_value(value, col_widths[i]);
                output.push_str(&format!(" {:width$} ", truncated, width = col_widths[i]));
                output.push('│');
            }
            output.push('\n');
        }

        // Bottom border
        output.push('└');
        for (idx, width) in col_widths.iter().enumerate() {
            output.push_str(&"─".repeat(width + 2));
            output.push(if idx == col_widths.len() - 1 { '┘' } else { '┴' });
        }
        output.push('\n');

        let count = jobs.len();
        output.push_str(&format!(
            "{} job{} available\n",
            count,
            if count == 1 { "" } else { "s" }
        ));

        output
    }

    /// Cap columns at MAX_COLUMN_WIDTH, then shrink the widest until the
    /// table fits the terminal.
    fn fit_to_terminal(col_widths: &mut [usize]) {
        let column_count = col_widths.len();
        if column_count == 0 {
            return;
        }

        let terminal_width = Self::get_terminal_width();
        let border_padding = column_count * 3 + 1;
        let mut available = terminal_width.saturating_sub(border_padding);
        if available < column_count {
            available = column_count;
        }

        let mut total_width: usize = col_widths.iter().sum();
        if total_width <= available {
            return;
        }

        for width in col_widths.iter_mut() {
            if *width > MAX_COLUMN_WIDTH {
                *width = MAX_COLUMN_WIDTH;
            }
        }
        total_width = col_widths.iter().sum();

        while total_width > available {
            if let Some((idx, _)) = col_widths
                .iter()
                .enumerate()
                .filter(|(_, width)| **width > MIN_COLUMN_WIDTH)
                .max_by_key(|(_, width)| *width)
            {
                col_widths[idx] -= 1;
            } else {
                break;
            }
            total_width = col_widths.iter().sum();
        }
    }
}
