//! View configuration: axis labels and the section plane.

use poincare_section::{SectionError, SectionPlane, DEFAULT_A, DEFAULT_B};

/// Default label for the first embedding coordinate.
pub const DEFAULT_X_LABEL: &str = "K";
/// Default label for the second embedding coordinate.
pub const DEFAULT_Y_LABEL: &str = "K + τ";
/// Default label for the third embedding coordinate.
pub const DEFAULT_Z_LABEL: &str = "K + 2τ";

/// Labels and plane handed to the renderer alongside the computed section.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub x_label: String,
    pub y_label: String,
    pub z_label: String,
    pub plane: SectionPlane,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            z_label: DEFAULT_Z_LABEL.to_string(),
            plane: SectionPlane::default(),
        }
    }
}

/// View settings given on the command line.
///
/// `None` fields are asked for interactively, or take their defaults when
/// running headless.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewOverrides {
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub z_label: Option<String>,
    pub plane: Option<SectionPlane>,
}

impl ViewOverrides {
    /// Collect flag values. Giving only one of `a` and `b` fixes the plane,
    /// with the other coefficient at its default.
    pub fn from_flags(
        x_label: Option<String>,
        y_label: Option<String>,
        z_label: Option<String>,
        a: Option<f64>,
        b: Option<f64>,
    ) -> Result<Self, SectionError> {
        let plane = match (a, b) {
            (None, None) => None,
            (a, b) => {
                let plane = SectionPlane::new(a.unwrap_or(DEFAULT_A), b.unwrap_or(DEFAULT_B))?;
                Some(plane)
            }
        };
        Ok(Self {
            x_label,
            y_label,
            z_label,
            plane,
        })
    }

    /// Every label is fixed.
    pub fn has_labels(&self) -> bool {
        self.x_label.is_some() && self.y_label.is_some() && self.z_label.is_some()
    }

    /// Fill missing values with defaults.
    pub fn resolve(&self) -> ViewConfig {
        let label = |flag: &Option<String>, default: &str| {
            label_or_default(flag.as_deref().unwrap_or(""), default)
        };
        ViewConfig {
            x_label: label(&self.x_label, DEFAULT_X_LABEL),
            y_label: label(&self.y_label, DEFAULT_Y_LABEL),
            z_label: label(&self.z_label, DEFAULT_Z_LABEL),
            plane: self.plane.unwrap_or_default(),
        }
    }
}

/// Trimmed `input`, or `default` when nothing is left.
pub fn label_or_default(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// How the plane coefficients were obtained from user text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaneInput {
    /// Two finite numbers were given.
    Parsed(SectionPlane),
    /// Input was empty.
    Defaulted,
    /// Input could not be used; defaults apply.
    Fallback,
}

impl PlaneInput {
    /// The plane to use.
    pub fn plane(self) -> SectionPlane {
        match self {
            PlaneInput::Parsed(plane) => plane,
            PlaneInput::Defaulted | PlaneInput::Fallback => SectionPlane {
                a: DEFAULT_A,
                b: DEFAULT_B,
            },
        }
    }
}

/// Parse `"a b"` into plane coefficients.
///
/// Exactly two whitespace-separated finite numbers are required. Anything
/// else falls back to `a = 1.0, b = 0.0`.
pub fn parse_plane(input: &str) -> PlaneInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return PlaneInput::Defaulted;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let [a_str, b_str] = tokens.as_slice() else {
        log::warn!(
            "expected two plane coefficients, got {}: {:?}",
            tokens.len(),
            trimmed
        );
        return PlaneInput::Fallback;
    };

    match (a_str.parse::<f64>(), b_str.parse::<f64>()) {
        (Ok(a), Ok(b)) => match SectionPlane::new(a, b) {
            Ok(plane) => PlaneInput::Parsed(plane),
            Err(e) => {
                log::warn!("{}", e);
                PlaneInput::Fallback
            }
        },
        _ => {
            log::warn!("unparsable plane coefficients: {:?}", trimmed);
            PlaneInput::Fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_embedding_axes() {
        let view = ViewConfig::default();
        assert_eq!(view.x_label, "K");
        assert_eq!(view.y_label, "K + τ");
        assert_eq!(view.z_label, "K + 2τ");
        assert_eq!(view.plane, SectionPlane { a: 1.0, b: 0.0 });
    }

    #[test]
    fn labels_are_trimmed_or_defaulted() {
        assert_eq!(label_or_default("   ", "K"), "K");
        assert_eq!(label_or_default("", "K"), "K");
        assert_eq!(label_or_default("  x(t) \n", "K"), "x(t)");
    }

    #[test]
    fn plane_parses_two_numbers() {
        assert_eq!(
            parse_plane(" 0.5   -2 "),
            PlaneInput::Parsed(SectionPlane { a: 0.5, b: -2.0 })
        );
        assert_eq!(
            parse_plane("0 1e-3").plane(),
            SectionPlane { a: 0.0, b: 0.001 }
        );
    }

    #[test]
    fn plane_defaults_on_empty_input() {
        assert_eq!(parse_plane(""), PlaneInput::Defaulted);
        assert_eq!(parse_plane("\t\n").plane(), SectionPlane::default());
    }

    #[test]
    fn plane_falls_back_on_bad_input() {
        for input in ["1", "1 2 3", "a b", "1 x", "nan 0", "1 inf"] {
            let parsed = parse_plane(input);
            assert_eq!(parsed, PlaneInput::Fallback, "input {:?}", input);
            assert_eq!(parsed.plane(), SectionPlane::default());
        }
    }

    fn plane_flags(a: Option<f64>, b: Option<f64>) -> Result<ViewOverrides, SectionError> {
        ViewOverrides::from_flags(None, None, None, a, b)
    }

    #[test]
    fn flags_fix_the_plane() {
        let overrides = plane_flags(Some(0.0), Some(0.0)).unwrap();
        assert_eq!(overrides.plane, Some(SectionPlane { a: 0.0, b: 0.0 }));
        assert_eq!(overrides.resolve().plane, SectionPlane { a: 0.0, b: 0.0 });

        let only_b = plane_flags(None, Some(2.5)).unwrap();
        assert_eq!(only_b.plane, Some(SectionPlane { a: 1.0, b: 2.5 }));

        let none = plane_flags(None, None).unwrap();
        assert_eq!(none.plane, None);
        assert_eq!(none.resolve(), ViewConfig::default());
    }

    #[test]
    fn flags_reject_non_finite_plane() {
        let err = plane_flags(Some(f64::NAN), None).unwrap_err();
        assert!(matches!(err, SectionError::NonFinitePlane { .. }));
    }

    #[test]
    fn flag_labels_override_defaults() {
        let overrides = ViewOverrides::from_flags(
            Some("x(t)".to_string()),
            Some("  ".to_string()),
            None,
            None,
            None,
        )
        .unwrap();
        assert!(!overrides.has_labels());

        let view = overrides.resolve();
        assert_eq!(view.x_label, "x(t)");
        assert_eq!(view.y_label, DEFAULT_Y_LABEL);
        assert_eq!(view.z_label, DEFAULT_Z_LABEL);
    }
}
