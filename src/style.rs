//! Styled display text and its console renderings.
//!
//! The pretty-printer emits abstract style tags; this module maps them onto
//! ANSI escape sequences ala DEC's VT100, or strips them for plain sinks.
use crate::{Segment, Severity, Style, Styled, Theme};
/// All attributes off.
pub(crate) const RESET: &str = "\x1b[0m";
/// Decreased intensity.
pub(crate) const DIM: &str = "\x1b[2m";
/// Key-name color (bright cyan).
const KEY: &str = "\x1b[96m";
/// String-value color (bright blue).
const STRING: &str = "\x1b[94m";
/// Literal-value color (bright yellow).
const VALUE: &str = "\x1b[93m";
impl Styled {
  /// Renders the text with ANSI color escapes for the console.
  #[must_use]
  pub fn ansi(&self) -> String {
    let mut out = String::new();
    for segment in &self.segments {
      out.push_str(RESET);
      match segment.style {
        Style::Key => out.push_str(KEY),
        Style::Plain | Style::Structure => {}
        Style::Str => out.push_str(STRING),
        Style::Value => out.push_str(VALUE),
      }
      out.push_str(&segment.text);
    }
    if !self.segments.is_empty() {
      out.push_str(RESET);
    }
    out
  }
  /// Renders the text with every style token stripped.
  #[must_use]
  pub fn plain(&self) -> String {
    self.segments.iter().map(|segment| segment.text.as_str()).collect()
  }
  /// Appends text under a style, merging adjacent runs of the same style.
  pub(crate) fn push(&mut self, style: Style, text: &str) {
    if text.is_empty() {
      return;
    }
    if let Some(last) = self.segments.last_mut() {
      if last.style == style {
        last.text.push_str(text);
        return;
      }
    }
    self.segments.push(Segment { style, text: text.to_owned() });
  }
  /// Styled runs in display order.
  #[must_use]
  pub fn segments(&self) -> &[Segment] {
    &self.segments
  }
}
impl Theme {
  /// Severity foreground color: bright on dark consoles, standard on light.
  pub(crate) fn severity_color(self, severity: Severity) -> &'static str {
    match self {
      Theme::Dark => match severity {
        Severity::Debug | Severity::Info => "\x1b[97m",
        Severity::Error => "\x1b[91m",
        Severity::Exception => "\x1b[95m",
        Severity::Success => "\x1b[92m",
        Severity::Unknown => "\x1b[96m",
        Severity::Warn => "\x1b[93m",
      },
      Theme::Light => match severity {
        Severity::Debug | Severity::Info => "\x1b[37m",
        Severity::Error => "\x1b[31m",
        Severity::Exception => "\x1b[35m",
        Severity::Success => "\x1b[32m",
        Severity::Unknown => "\x1b[36m",
        Severity::Warn => "\x1b[33m",
      },
    }
  }
}
