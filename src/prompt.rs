//! Interactive questions for the input path, axis labels and section plane.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::{
    label_or_default, parse_plane, PlaneInput, ViewConfig, ViewOverrides, DEFAULT_X_LABEL,
    DEFAULT_Y_LABEL, DEFAULT_Z_LABEL,
};
use poincare_section::{SectionPlane, DEFAULT_A, DEFAULT_B};

/// What the data file is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Three columns x, y, z.
    Trajectory,
    /// A scalar signal in one column, to be delay-embedded.
    Signal { column: usize },
}

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one line. EOF reads as an empty answer.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Ask for the data file. Returns `None` on an empty answer.
    pub fn ask_path(&mut self, kind: InputKind) -> io::Result<Option<PathBuf>> {
        match kind {
            InputKind::Trajectory => {
                self.say("Path to a text file with three columns (x, y, z):")?
            }
            InputKind::Signal { column } => self.say(&format!(
                "Path to a text file with the signal in column {} (counting from 0):",
                column
            ))?,
        }
        let answer = self.ask("> ")?;
        Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
    }

    /// Ask for axis labels and plane coefficients not fixed by `overrides`.
    pub fn ask_view(&mut self, overrides: &ViewOverrides) -> io::Result<ViewConfig> {
        let preset = overrides.resolve();

        if !overrides.has_labels() {
            self.say("")?;
            self.say("Axis labels (leave empty for the default):")?;
        }
        let x_label = match overrides.x_label {
            Some(_) => preset.x_label,
            None => self.ask_label("x", DEFAULT_X_LABEL)?,
        };
        let y_label = match overrides.y_label {
            Some(_) => preset.y_label,
            None => self.ask_label("y", DEFAULT_Y_LABEL)?,
        };
        let z_label = match overrides.z_label {
            Some(_) => preset.z_label,
            None => self.ask_label("z", DEFAULT_Z_LABEL)?,
        };

        let plane = match overrides.plane {
            Some(plane) => {
                self.say(&format!("Section plane from the command line: {}", plane))?;
                plane
            }
            None => self.ask_plane()?,
        };

        Ok(ViewConfig {
            x_label,
            y_label,
            z_label,
            plane,
        })
    }

    fn ask_plane(&mut self) -> io::Result<SectionPlane> {
        self.say("")?;
        self.say("Coefficients of the section plane y = a x + b.")?;
        self.say(&format!(
            "Leave empty to use a = {:?}, b = {:?}.",
            DEFAULT_A, DEFAULT_B
        ))?;
        let answer = self.ask("a b > ")?;
        let parsed = parse_plane(&answer);
        if parsed == PlaneInput::Fallback {
            self.say("Could not read the coefficients; using the defaults.")?;
        }
        Ok(parsed.plane())
    }

    fn ask_label(&mut self, axis: &str, default: &str) -> io::Result<String> {
        let answer = self.ask(&format!("{} label (default: {}) > ", axis, default))?;
        Ok(label_or_default(&answer, default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_view_with(input: &str, overrides: &ViewOverrides) -> (ViewConfig, String) {
        let mut out = Vec::new();
        let view = Prompter::new(input.as_bytes(), &mut out)
            .ask_view(overrides)
            .unwrap();
        (view, String::from_utf8(out).unwrap())
    }

    fn run_view(input: &str) -> (ViewConfig, String) {
        run_view_with(input, &ViewOverrides::default())
    }

    #[test]
    fn empty_answers_keep_defaults() {
        let (view, transcript) = run_view("\n\n\n\n");
        assert_eq!(view, ViewConfig::default());
        assert!(transcript.contains("x label (default: K) > "));
        assert!(transcript.contains("z label (default: K + 2τ) > "));
        assert!(transcript.contains("a = 1.0, b = 0.0"));
    }

    #[test]
    fn answers_override_defaults() {
        let (view, transcript) = run_view("x(t)\n  \nx(t+2)\n0 0.5\n");
        assert_eq!(view.x_label, "x(t)");
        assert_eq!(view.y_label, DEFAULT_Y_LABEL);
        assert_eq!(view.z_label, "x(t+2)");
        assert_eq!(view.plane, SectionPlane { a: 0.0, b: 0.5 });
        assert!(!transcript.contains("Could not read"));
    }

    #[test]
    fn bad_plane_falls_back_with_notice() {
        let (view, transcript) = run_view("\n\n\none two\n");
        assert_eq!(view.plane, SectionPlane::default());
        assert!(transcript.contains("Could not read the coefficients"));
    }

    #[test]
    fn eof_reads_as_empty() {
        let (view, _) = run_view("");
        assert_eq!(view, ViewConfig::default());

        let mut out = Vec::new();
        let path = Prompter::new("".as_bytes(), &mut out)
            .ask_path(InputKind::Trajectory)
            .unwrap();
        assert!(path.is_none());
    }

    #[test]
    fn path_is_trimmed() {
        let mut out = Vec::new();
        let path = Prompter::new("  data/lorenz.txt \n".as_bytes(), &mut out)
            .ask_path(InputKind::Trajectory)
            .unwrap();
        assert_eq!(path, Some(PathBuf::from("data/lorenz.txt")));
    }

    #[test]
    fn path_question_follows_input_kind() {
        let mut out = Vec::new();
        Prompter::new("a.txt\n".as_bytes(), &mut out)
            .ask_path(InputKind::Signal { column: 2 })
            .unwrap();
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("signal in column 2"));
        assert!(!transcript.contains("three columns"));

        let mut out = Vec::new();
        Prompter::new("a.txt\n".as_bytes(), &mut out)
            .ask_path(InputKind::Trajectory)
            .unwrap();
        assert!(String::from_utf8(out).unwrap().contains("three columns (x, y, z)"));
    }

    #[test]
    fn plane_flags_skip_the_plane_question() {
        let overrides = ViewOverrides {
            plane: Some(SectionPlane { a: 0.0, b: 0.0 }),
            ..ViewOverrides::default()
        };
        // Blank answers for the three labels, then a plane line that must not be read.
        let (view, transcript) = run_view_with("\n\n\n2 3\n", &overrides);
        assert_eq!(view.plane, SectionPlane { a: 0.0, b: 0.0 });
        assert_eq!(view.x_label, DEFAULT_X_LABEL);
        assert!(!transcript.contains("a b > "));
        assert!(transcript.contains("from the command line: y = 0·x + 0"));
    }

    #[test]
    fn label_flags_skip_their_questions() {
        let overrides = ViewOverrides {
            x_label: Some("s(t)".to_string()),
            y_label: Some("s(t+5)".to_string()),
            z_label: Some("s(t+10)".to_string()),
            plane: None,
        };
        let (view, transcript) = run_view_with("0.5 1\n", &overrides);
        assert_eq!(view.x_label, "s(t)");
        assert_eq!(view.z_label, "s(t+10)");
        assert_eq!(view.plane, SectionPlane { a: 0.5, b: 1.0 });
        assert!(!transcript.contains("label (default"));
        assert!(!transcript.contains("Axis labels"));
    }

    #[test]
    fn partial_label_flags_ask_for_the_rest() {
        let overrides = ViewOverrides {
            y_label: Some("lagged".to_string()),
            ..ViewOverrides::default()
        };
        let (view, transcript) = run_view_with("first\nthird\n\n", &overrides);
        assert_eq!(view.x_label, "first");
        assert_eq!(view.y_label, "lagged");
        assert_eq!(view.z_label, "third");
        assert!(!transcript.contains("y label"));
        assert_eq!(view.plane, SectionPlane::default());
    }
}
