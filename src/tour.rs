//! The greeting-and-arithmetic lesson
//!
//! [`Tour`] holds the lesson parameters; [`Tour::transcript`] renders them
//! into an ordered, section-structured [`Transcript`] without touching I/O.
//! The default parameters reproduce the canonical walkthrough byte for byte:
//! four variable lines, one if/else line, a 1..=5 counting loop, and the
//! methods-section sum.

use crate::constants::{
    COUNT_FROM, COUNT_TO, DEFAULT_AGE, DEFAULT_IS_FUN, DEFAULT_LHS, DEFAULT_NAME, DEFAULT_RHS,
    NIGHTLIFE_MIN_AGE, PI_APPROXIMATION,
};
use crate::error::TourError;
use crate::math::add_numbers;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tracing::debug;

/// Lesson sections, in the order the walkthrough runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Variables,
    IfElse,
    ForLoop,
    Methods,
}

impl Section {
    /// All sections in walkthrough order.
    pub const ALL: [Section; 4] = [
        Section::Variables,
        Section::IfElse,
        Section::ForLoop,
        Section::Methods,
    ];

    /// The printed section header, if the walkthrough prints one.
    ///
    /// The variables section opens the lesson without a header; the printed
    /// numbering therefore starts at 2.
    pub fn header(self) -> Option<&'static str> {
        match self {
            Section::Variables => None,
            Section::IfElse => Some("--- 2. CONTROL FLOW: IF-ELSE STATEMENT ---"),
            Section::ForLoop => Some("--- 3. CONTROL FLOW: FOR LOOP ---"),
            Section::Methods => Some("--- 4. METHODS ---"),
        }
    }

    /// CLI-facing name of the section.
    pub fn name(self) -> &'static str {
        match self {
            Section::Variables => "variables",
            Section::IfElse => "if-else",
            Section::ForLoop => "for-loop",
            Section::Methods => "methods",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "variables" => Ok(Section::Variables),
            "if-else" | "ifelse" => Ok(Section::IfElse),
            "for-loop" | "forloop" => Ok(Section::ForLoop),
            "methods" => Ok(Section::Methods),
            other => Err(format!(
                "unknown section '{other}' (expected one of: variables, if-else, for-loop, methods)"
            )),
        }
    }
}

/// Parameters of one lesson run.
///
/// `Default` reproduces the canonical walkthrough verbatim. The CLI may
/// override the name and age, which changes the greeting line and the
/// if/else branch but nothing about the lesson's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Name greeted in the opening line.
    pub name: String,
    /// Age printed and compared against the nightlife threshold.
    pub age: i64,
    /// Pi approximation printed by the variables section.
    pub pi: f64,
    /// Whether the lesson claims Java is fun.
    pub is_fun: bool,
    /// First value of the counting loop.
    pub count_from: i64,
    /// Last value of the counting loop, inclusive.
    pub count_to: i64,
    /// Left operand of the methods-section addition.
    pub lhs: i64,
    /// Right operand of the methods-section addition.
    pub rhs: i64,
}

impl Default for Tour {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            age: DEFAULT_AGE,
            pi: PI_APPROXIMATION,
            is_fun: DEFAULT_IS_FUN,
            count_from: COUNT_FROM,
            count_to: COUNT_TO,
            lhs: DEFAULT_LHS,
            rhs: DEFAULT_RHS,
        }
    }
}

impl Tour {
    /// Build the full four-section transcript, in walkthrough order.
    ///
    /// Pure: repeated calls on the same parameters produce identical
    /// transcripts.
    pub fn transcript(&self) -> Transcript {
        self.transcript_for(&Section::ALL)
    }

    /// Build a transcript containing a single section.
    pub fn section_transcript(&self, section: Section) -> Transcript {
        self.transcript_for(&[section])
    }

    fn transcript_for(&self, sections: &[Section]) -> Transcript {
        let sections = sections
            .iter()
            .map(|&section| SectionReport {
                section,
                header: section.header(),
                lines: self.section_lines(section),
            })
            .collect::<Vec<_>>();
        debug!(sections = sections.len(), "transcript built");
        Transcript { sections }
    }

    /// Body lines of one section, headers excluded.
    fn section_lines(&self, section: Section) -> Vec<String> {
        match section {
            Section::Variables => vec![
                format!("Hello, {}! Welcome to Java.", self.name),
                format!("Your age is: {}", self.age),
                format!("The value of Pi is approximately: {}", self.pi),
                format!("Is Java fun? {}", self.is_fun),
            ],
            Section::IfElse => {
                // Exactly one branch per run; 21 itself is old enough.
                let line = if self.age >= NIGHTLIFE_MIN_AGE {
                    "You are old enough to enjoy the Las Vegas nightlife!"
                } else {
                    "Not quite old enough for the casinos yet."
                };
                vec![line.to_string()]
            }
            Section::ForLoop => {
                let mut lines = vec![format!("Let's count to {}:", self.count_to)];
                for i in self.count_from..=self.count_to {
                    lines.push(format!("Count: {}", i));
                }
                lines
            }
            Section::Methods => {
                let sum = add_numbers(self.lhs, self.rhs);
                vec![format!(
                    "The sum of {} and {} is: {}",
                    self.lhs, self.rhs, sum
                )]
            }
        }
    }
}

/// One rendered section: its printed header (if any) and its body lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    /// Which section this is.
    pub section: Section,
    /// Header line as printed, absent for the opening section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<&'static str>,
    /// Body lines, in print order.
    pub lines: Vec<String>,
}

/// The ordered output of a lesson run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    /// Section reports in walkthrough order.
    pub sections: Vec<SectionReport>,
}

impl Transcript {
    /// Render as the walkthrough prints it: each header framed by one blank
    /// line on either side, body lines verbatim, one line per `\n`.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for report in &self.sections {
            if let Some(header) = report.header {
                text.push('\n');
                text.push_str(header);
                text.push_str("\n\n");
            }
            for line in &report.lines {
                text.push_str(line);
                text.push('\n');
            }
        }
        text
    }

    /// Write the text rendering to a sink.
    pub fn write_text(&self, out: &mut impl Write) -> Result<(), TourError> {
        out.write_all(self.to_text().as_bytes())?;
        Ok(())
    }

    /// Flattened body lines, headers and blank framing excluded.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|report| report.lines.iter().map(String::as_str))
    }
}
