//! Severity-classified console log entries.
//!
//! Entries use a two-part layout: a `++` header carrying the severity
//! marker, module tag and message, then a `time/from/severity` trailer
//! closed by `--`. Value graphs and embedded JSON are flattened through the
//! serializer and pretty-printer before display.
use {
  crate::{
    Loggable, Logger, Mode, Severity, Theme, Value, logify, serialize, simplify,
    style::{DIM, RESET},
    time_stamp,
  },
  chrono::Utc,
  core::fmt,
  std::{env, sync::OnceLock},
};
/// Source tag for the crate's own entries.
const MODULE_NAME: &str = "logify.rs";
/// Facade instance handed to the `log` crate.
static FACADE: Facade = Facade;
/// Logger used by the installed facade, built on first use.
static FACADE_LOGGER: OnceLock<Logger> = OnceLock::new();
/// Routes `log` crate records through the console formatter.
struct Facade;
/// Installs the console formatter as the `log` crate's global logger.
pub fn init() -> Result<(), log::SetLoggerError> {
  log::set_logger(&FACADE)?;
  log::set_max_level(log::LevelFilter::Trace);
  Ok(())
}
/// Severity for a `log` crate level.
fn level_severity(level: log::Level) -> Severity {
  match level {
    log::Level::Debug | log::Level::Trace => Severity::Debug,
    log::Level::Error => Severity::Error,
    log::Level::Info => Severity::Info,
    log::Level::Warn => Severity::Warn,
  }
}
/// Uppercased source tag up to the first `.`.
fn module_tag(source: &str) -> String {
  source.split('.').next().unwrap_or(source).to_uppercase()
}
impl log::Log for Facade {
  fn enabled(&self, _metadata: &log::Metadata) -> bool {
    true
  }
  fn flush(&self) {}
  fn log(&self, record: &log::Record) {
    let logger = FACADE_LOGGER.get_or_init(Logger::from_env);
    let message = record.args().to_string();
    let _ = logger.log(message.as_str(), record.target(), level_severity(record.level()), None);
  }
}
impl Loggable for str {
  fn display_text(&self) -> String {
    // Text containing a brace is treated as embedded JSON.
    if self.contains('{') { format!("\n{}", logify(self).ansi()) } else { self.to_owned() }
  }
  fn status_text(&self) -> String {
    self.to_owned()
  }
}
impl Loggable for String {
  fn display_text(&self) -> String {
    self.as_str().display_text()
  }
  fn status_text(&self) -> String {
    self.clone()
  }
}
impl Loggable for Value {
  fn display_text(&self) -> String {
    format!("\n{}", logify(&serialize(self)).ansi())
  }
  fn status_text(&self) -> String {
    simplify(&serialize(self))
  }
}
impl Logger {
  /// Logs an exception event.
  pub fn crash<M: Loggable + ?Sized>(&self, message: &M, source: &str) -> String {
    self.log(message, source, Severity::Exception, None)
  }
  /// Logs a debug event.
  pub fn debug<M: Loggable + ?Sized>(&self, message: &M, source: &str) -> String {
    self.log(message, source, Severity::Debug, None)
  }
  /// Logs a success event.
  pub fn done<M: Loggable + ?Sized>(&self, message: &M, source: &str) -> String {
    self.log(message, source, Severity::Success, None)
  }
  /// Logs an error event.
  pub fn error<M: Loggable + ?Sized>(&self, message: &M, source: &str) -> String {
    self.log(message, source, Severity::Error, None)
  }
  /// Logs an error event carrying an underlying error text.
  pub fn error_with<M: Loggable + ?Sized>(
    &self, message: &M, source: &str, error: &str,
  ) -> String {
    self.log(message, source, Severity::Error, Some(error))
  }
  /// Logs a caught exception and returns `"message exception"` for the
  /// caller's UI.
  pub fn exp<M: Loggable + ?Sized>(&self, message: &M, source: &str, exception: &str) -> String {
    let color = self.theme.severity_color(Severity::Exception);
    let module = module_tag(source);
    let display = message.display_text();
    let logified =
      if exception.contains('{') { logify(exception).ansi() } else { exception.to_owned() };
    let simplified = simplify(&logified);
    // A textual stack trace gets its own block under the entry header.
    let with_stack = simplified.contains("Error:") && simplified.contains("at ");
    let label = if with_stack { "exception w/stack" } else { "exception w/trace" };
    println!(
      "{RESET}{DIM}++\n{RESET}{DIM} * \u{ff62}logify\u{ff63}: 🟪 {RESET}{color}[{module}] \
       '{display}'\n{RESET}{DIM}{RESET}{color} exception: {simplified}"
    );
    if with_stack {
      println!("{RESET}{logified}");
    }
    println!(
      "{RESET}{DIM}      time: {RESET}{}{RESET}{DIM}      from: {RESET}{source}{RESET}{DIM}  \
       severity: {RESET}{color}{label}\n{RESET}{DIM}--{RESET}",
      time_stamp(Utc::now(), true)
    );
    format!("{} {exception}", message.status_text())
  }
  /// Builds a logger from `LOGIFY_THEME` and `LOGIFY_MODE`.
  #[must_use]
  pub fn from_env() -> Self {
    Self { mode: Mode::from_env(), theme: Theme::from_env() }
  }
  /// Logs an info event.
  pub fn info<M: Loggable + ?Sized>(&self, message: &M, source: &str) -> String {
    self.log(message, source, Severity::Info, None)
  }
  /// Logs an application event in the standardized two-part format and
  /// returns the `"severity: message"` status line for the caller's UI.
  pub fn log<M: Loggable + ?Sized>(
    &self, message: &M, source: &str, severity: Severity, error: Option<&str>,
  ) -> String {
    let mut status = format!("{severity}: {}", message.status_text());
    // Debug detail stays out of production consoles.
    if severity == Severity::Debug && self.mode == Mode::Production {
      return status;
    }
    let color = self.theme.severity_color(severity);
    let (marker, emoji) = severity.glyphs();
    let module = module_tag(source);
    let display = message.display_text();
    println!(
      "{RESET}{DIM}++\n{RESET}{DIM} {marker} \u{ff62}logify\u{ff63}: {emoji} \
       {RESET}{color}[{module}] '{display}'"
    );
    if let Some(text) = error {
      let simplified = simplify(text);
      println!("{RESET}{DIM}     error: {RESET}{color}{simplified}");
      status.push_str(&format!(" ERROR: {simplified}"));
    }
    println!(
      "{RESET}{DIM}      time: {RESET}{}{RESET}{DIM}      from: {RESET}{source}{RESET}{DIM}  \
       severity: {RESET}{color}{severity}\n{RESET}{DIM}--{RESET}",
      time_stamp(Utc::now(), true)
    );
    status
  }
  /// Builds a logger with explicit settings.
  #[must_use]
  pub const fn new(theme: Theme, mode: Mode) -> Self {
    Self { mode, theme }
  }
  /// Announces the crate version, mode and theme on the console.
  pub fn ready(&self) -> String {
    let message = format!(
      "logify v{} is loaded, mode: {}, theme: {}.",
      env!("CARGO_PKG_VERSION"),
      self.mode,
      self.theme
    );
    self.log(&message, MODULE_NAME, Severity::Success, None)
  }
  /// Logs a warning event.
  pub fn warn<M: Loggable + ?Sized>(&self, message: &M, source: &str) -> String {
    self.log(message, source, Severity::Warn, None)
  }
}
impl Mode {
  /// Reads `LOGIFY_MODE`; anything but `production` is development.
  #[must_use]
  pub fn from_env() -> Self {
    match env::var("LOGIFY_MODE") {
      Ok(value) if value == "production" => Mode::Production,
      _ => Mode::Development,
    }
  }
}
impl fmt::Display for Mode {
  fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
    out.write_str(match self {
      Mode::Development => "development",
      Mode::Production => "production",
    })
  }
}
impl Severity {
  /// Maps the accepted label abbreviations; anything unrecognized is
  /// `Unknown`.
  #[must_use]
  pub fn from_label(label: &str) -> Self {
    match label {
      "d" | "dbg" | "debug" => Severity::Debug,
      "e" | "err" | "error" => Severity::Error,
      "x" | "exp" | "crash" | "exception" => Severity::Exception,
      "i" | "inf" | "info" => Severity::Info,
      "s" | "ack" | "done" | "success" => Severity::Success,
      "w" | "wrn" | "warn" | "warning" => Severity::Warn,
      _ => Severity::Unknown,
    }
  }
  /// Entry marker and emoji for the `++` header line.
  fn glyphs(self) -> (&'static str, &'static str) {
    match self {
      Severity::Debug => ("µ", "🔍"),
      Severity::Error => ("x", "❌"),
      Severity::Exception => ("*", "🟪"),
      Severity::Info => ("i", "📣"),
      Severity::Success => ("✓", "✅"),
      Severity::Unknown => ("?", "❓"),
      Severity::Warn => ("!", "⚠️"),
    }
  }
}
impl fmt::Display for Severity {
  fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
    out.write_str(match self {
      Severity::Debug => "debug",
      Severity::Error => "error",
      Severity::Exception => "exception",
      Severity::Info => "info",
      Severity::Success => "success",
      Severity::Unknown => "undefined",
      Severity::Warn => "warn",
    })
  }
}
impl Theme {
  /// Reads `LOGIFY_THEME`; anything but `light` is dark.
  #[must_use]
  pub fn from_env() -> Self {
    match env::var("LOGIFY_THEME") {
      Ok(value) if value == "light" => Theme::Light,
      _ => Theme::Dark,
    }
  }
}
impl fmt::Display for Theme {
  fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
    out.write_str(match self {
      Theme::Dark => "dark",
      Theme::Light => "light",
    })
  }
}
#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::{Map, Value},
  };
  #[test]
  fn labels_map_to_severities() {
    assert_eq!(Severity::from_label("i"), Severity::Info);
    assert_eq!(Severity::from_label("inf"), Severity::Info);
    assert_eq!(Severity::from_label("warning"), Severity::Warn);
    assert_eq!(Severity::from_label("crash"), Severity::Exception);
    assert_eq!(Severity::from_label("ack"), Severity::Success);
    assert_eq!(Severity::from_label("dbg"), Severity::Debug);
    assert_eq!(Severity::from_label("err"), Severity::Error);
    assert_eq!(Severity::from_label("whatever"), Severity::Unknown);
  }
  #[test]
  fn unknown_severity_displays_as_undefined() {
    assert_eq!(Severity::Unknown.to_string(), "undefined");
    assert_eq!(Severity::Exception.to_string(), "exception");
  }
  #[test]
  fn module_tag_uppercases_the_stem() {
    assert_eq!(module_tag("index.test.js"), "INDEX");
    assert_eq!(module_tag("server.rs"), "SERVER");
    assert_eq!(module_tag("bare"), "BARE");
  }
  #[test]
  fn log_returns_the_status_line() {
    let logger = Logger::new(Theme::Dark, Mode::Development);
    assert_eq!(logger.info("service started", "server.rs"), "info: service started");
    assert_eq!(logger.done("written", "store.rs"), "success: written");
  }
  #[test]
  fn production_suppresses_debug_but_keeps_status() {
    let logger = Logger::new(Theme::Dark, Mode::Production);
    assert_eq!(logger.debug("detail", "probe.rs"), "debug: detail");
  }
  #[test]
  fn error_detail_lands_in_the_status() {
    let logger = Logger::new(Theme::Light, Mode::Development);
    assert_eq!(
      logger.error_with("query failed", "db.rs", "{\"code\":7}"),
      "error: query failed ERROR: code: 7"
    );
  }
  #[test]
  fn value_messages_flatten_in_the_status() {
    let mut map = Map::default();
    map.insert("a", Value::from(1.0));
    let logger = Logger::new(Theme::Dark, Mode::Development);
    assert_eq!(logger.info(&Value::object(map), "api.rs"), "info: a: 1");
  }
  #[test]
  fn ready_announces_the_version() {
    let logger = Logger::new(Theme::Dark, Mode::Development);
    let status = logger.ready();
    assert!(status.starts_with("success: logify v"));
    assert!(status.contains("mode: development"));
    assert!(status.contains("theme: dark"));
  }
  #[test]
  fn exp_returns_message_and_exception() {
    let logger = Logger::new(Theme::Dark, Mode::Development);
    assert_eq!(logger.exp("lookup failed", "dns.rs", "timeout"), "lookup failed timeout");
  }
  #[test]
  fn log_levels_map_onto_severities() {
    assert_eq!(level_severity(log::Level::Error), Severity::Error);
    assert_eq!(level_severity(log::Level::Warn), Severity::Warn);
    assert_eq!(level_severity(log::Level::Info), Severity::Info);
    assert_eq!(level_severity(log::Level::Debug), Severity::Debug);
    assert_eq!(level_severity(log::Level::Trace), Severity::Debug);
  }
}
