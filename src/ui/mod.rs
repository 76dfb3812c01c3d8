use std::io::{self, BufRead, Write};

use crate::domain::FetchOutcome;
use crate::utils::split_url_list;

pub const PROMPT: &str = "Enter image URLs (separated by commas): ";

const BANNER: [&str; 2] = [
    "Welcome to the Ubuntu Image Fetcher",
    "A tool for mindfully collecting images from the web",
];

const CLOSING: [&str; 2] = [
    "Connection strengthened. Community enriched.",
    "\"A person is a person through other persons.\" - Ubuntu Philosophy",
];

/// Console front end: everything the user sees goes through here
pub struct ConsoleView<W: Write> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        for line in BANNER {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)
    }

    /// Prompt once and collect the URLs typed on a single line.
    /// Unreadable or missing input counts as an empty list.
    pub fn prompt_urls<R: BufRead>(&mut self, input: &mut R) -> io::Result<Vec<String>> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()?;

        let mut line = String::new();
        if let Err(e) = input.read_line(&mut line) {
            tracing::warn!(error = %e, "Failed to read URL list");
            return Ok(Vec::new());
        }

        Ok(split_url_list(&line))
    }

    pub fn report(&mut self, url: &str, outcome: &FetchOutcome) -> io::Result<()> {
        for line in render_outcome(url, outcome) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    pub fn closing(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        for line in CLOSING {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

pub fn render_outcome(url: &str, outcome: &FetchOutcome) -> Vec<String> {
    match outcome {
        FetchOutcome::Saved { filename, path } => vec![
            format!("✓ Successfully fetched: {}", filename),
            format!("✓ Image saved to {}", path.display()),
        ],
        FetchOutcome::SkippedNotImage => vec![format!("✗ Skipped (not an image): {}", url)],
        FetchOutcome::SkippedTooLarge => vec![format!("✗ Skipped (file too large): {}", url)],
        FetchOutcome::SkippedDuplicate { filename } => {
            vec![format!("✗ Skipped duplicate: {}", filename)]
        }
        FetchOutcome::NetworkError(e) => vec![format!("✗ Connection error for {}: {}", url, e)],
        FetchOutcome::OtherError(e) => vec![format!("✗ An error occurred for {}: {}", url, e)],
    }
}
