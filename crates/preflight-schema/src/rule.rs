//! # Field Rules
//!
//! A [`Rule`] is a pure predicate over one raw string value plus the message
//! emitted when the predicate fails. The set of rule kinds is closed: adding
//! a kind means adding a variant here and a `match` arm in [`Rule::check`].
//!
//! Values are trimmed of surrounding whitespace before every check. Integer
//! parsing is base-10 with an optional sign. Keyword comparisons
//! (enumerations, booleans) ignore case.
//!
//! `AbsoluteExistingDir` is the only rule that touches the outside world: it
//! probes the filesystem at check time.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// Language subtag, required region subtag, optional `.encoding` suffix.
pub const LOCALE_PATTERN: &str = r"^[a-zA-Z]{2,3}([-_][a-zA-Z]{2,3})(\.[\w-]+)?$";

/// Accepted boolean spellings, compared after lowercasing.
pub const BOOL_WORDS: &[&str] = &["true", "false", "yes", "no"];

/// Half-open float interval `(low, high]`.
///
/// The lower bound is exclusive and the upper bound inclusive, unlike
/// [`Rule::IntRange`] which is inclusive at both ends. A value equal to
/// `low` is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    pub low: f64,
    pub high: f64,
}

impl FloatRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low < value && value <= self.high
    }
}

impl fmt::Display for FloatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}]", self.low, self.high)
    }
}

/// Validation rule for a single key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Integer with inclusive bounds.
    IntRange { min: i64, max: i64 },
    /// One of a fixed set of lowercase keywords, or optionally a float
    /// within a [`FloatRange`].
    Enum {
        choices: &'static [&'static str],
        float_range: Option<FloatRange>,
    },
    /// `true`, `false`, `yes` or `no`, any case.
    Bool,
    /// Absolute path naming a directory that exists right now.
    AbsoluteExistingDir,
    /// Any standard textual UUID form.
    Uuid,
    /// Integer with inclusive bounds followed by a literal unit suffix,
    /// e.g. `90m`.
    SuffixedIntRange {
        suffix: &'static str,
        min: i64,
        max: i64,
    },
    /// Locale tag such as `en-US` or `en_US.UTF-8`.
    Locale,
}

impl Rule {
    /// Check `raw` as the value of `key`.
    ///
    /// Returns the user-facing error message on failure. Never panics.
    pub fn check(&self, key: &str, raw: &str) -> Result<(), String> {
        let value = raw.trim();
        match *self {
            Rule::IntRange { min, max } => match parse_int(value) {
                Some(v) if (min..=max).contains(&v) => Ok(()),
                _ => Err(format!("{key} must be integer in [{min}, {max}]")),
            },
            Rule::Enum {
                choices,
                float_range,
            } => {
                let lower = value.to_lowercase();
                if choices.contains(&lower.as_str()) {
                    return Ok(());
                }
                if float_range
                    .is_some_and(|range| value.parse::<f64>().is_ok_and(|f| range.contains(f)))
                {
                    return Ok(());
                }
                let range = match float_range {
                    Some(range) => range.to_string(),
                    None => "None".to_string(),
                };
                Err(format!(
                    "{key} must be one of {} or float in {range}",
                    format_choices(choices)
                ))
            }
            Rule::Bool => {
                if BOOL_WORDS.contains(&value.to_lowercase().as_str()) {
                    Ok(())
                } else {
                    Err(format!("{key} must be boolean (true/false/yes/no)"))
                }
            }
            Rule::AbsoluteExistingDir => {
                let path = Path::new(value);
                if path.is_absolute() && path.is_dir() {
                    Ok(())
                } else {
                    Err(format!("{key} must be an existing absolute directory path"))
                }
            }
            Rule::Uuid => match uuid::Uuid::parse_str(value) {
                Ok(_) => Ok(()),
                Err(_) => Err(format!("{key} must be a valid UUID")),
            },
            Rule::SuffixedIntRange { suffix, min, max } => {
                let Some(number) = value.strip_suffix(suffix) else {
                    return Err(format!("{key} must end with '{suffix}' suffix"));
                };
                match parse_int(number.trim()) {
                    Some(n) if (min..=max).contains(&n) => Ok(()),
                    _ => Err(format!(
                        "{key} must be integer in [{min}-{max}] with suffix '{suffix}'"
                    )),
                }
            }
            Rule::Locale => {
                if locale_regex().is_some_and(|re| re.is_match(value)) {
                    Ok(())
                } else {
                    Err(format!(
                        "{key} must follow RFC 3066 format, e.g. en-US.UTF-8"
                    ))
                }
            }
        }
    }

    /// Short description of what the rule accepts.
    pub fn describe(&self) -> String {
        match *self {
            Rule::IntRange { min, max } => format!("integer in [{min}, {max}]"),
            Rule::Enum {
                choices,
                float_range: Some(range),
            } => format!("one of {} or float in {range}", choices.join(", ")),
            Rule::Enum { choices, .. } => format!("one of {}", choices.join(", ")),
            Rule::Bool => "boolean (true/false/yes/no)".to_string(),
            Rule::AbsoluteExistingDir => "existing absolute directory path".to_string(),
            Rule::Uuid => "UUID".to_string(),
            Rule::SuffixedIntRange { suffix, min, max } => {
                format!("integer in [{min}-{max}] with suffix '{suffix}'")
            }
            Rule::Locale => "locale, e.g. en-US.UTF-8".to_string(),
        }
    }
}

fn parse_int(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

/// Render keyword choices as a bracketed, quoted list: `['rpm', 'deb']`.
fn format_choices(choices: &[&str]) -> String {
    let quoted: Vec<String> = choices.iter().map(|c| format!("'{c}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn locale_regex() -> Option<&'static Regex> {
    static LOCALE: OnceLock<Option<Regex>> = OnceLock::new();
    LOCALE
        .get_or_init(|| match Regex::new(LOCALE_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::error!(error = %e, "locale pattern failed to compile");
                None
            }
        })
        .as_ref()
}
