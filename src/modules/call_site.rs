use regex::Regex;
use std::fmt;
use std::panic::Location;
use std::sync::OnceLock;

/// Where a log call came from, as printed in the `file:line` prefix.
///
/// Both parts are kept as text so a location that could not be resolved is
/// simply two empty strings rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: String,
}

// Index of the caller's frame in a textual trace (0 is the header line).
const CALLER_FRAME: usize = 2;

fn frame_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\(([^()]*?):(\d+):\d+\)").expect("call-site pattern is valid")
    })
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: line.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Location of whoever called this function (or of the outermost
    /// `#[track_caller]` function above it).
    #[track_caller]
    pub fn here() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line().to_string())
    }

    /// Extract `path` and `line` from the last `(path:line:column)` group of a
    /// single stack frame. Frames without one give an empty call-site.
    pub fn parse_frame(frame: &str) -> Self {
        match frame_pattern().captures_iter(frame).last() {
            Some(caps) => Self::new(&caps[1], &caps[2]),
            None => Self::empty(),
        }
    }

    /// Resolve the caller from a whole textual trace, skipping the header and
    /// the logging function's own frame.
    pub fn from_trace(trace: &str) -> Self {
        trace
            .lines()
            .nth(CALLER_FRAME)
            .map(Self::parse_frame)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_empty() && self.line.is_empty()
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn here_points_at_this_file() {
        let expected_line = line!() + 1;
        let site = CallSite::here();
        assert!(site.file.ends_with("call_site.rs"), "got {}", site.file);
        assert_eq!(site.line, expected_line.to_string());
    }

    #[test]
    fn parses_node_style_frame() {
        let site = CallSite::parse_frame("    at main (/srv/app/index.js:42:7)");
        assert_eq!(site, CallSite::new("/srv/app/index.js", "42"));
    }

    #[test]
    fn takes_last_parenthesised_group() {
        let site =
            CallSite::parse_frame("    at Object.<anonymous> (wrapper (x)) (/srv/a.js:3:1)");
        assert_eq!(site, CallSite::new("/srv/a.js", "3"));
    }

    #[test]
    fn frame_without_location_is_empty() {
        let site = CallSite::parse_frame("    at /srv/app/index.js:42:7");
        assert!(site.is_empty());
        assert_eq!(site.to_string(), ":");
    }

    #[test]
    fn trace_uses_third_line() {
        let trace = "Error\n    at logD (/srv/logger.js:20:17)\n    at run (/srv/job.js:9:3)\n    at next (/srv/x.js:1:1)";
        assert_eq!(CallSite::from_trace(trace), CallSite::new("/srv/job.js", "9"));
    }

    #[test]
    fn short_trace_is_empty() {
        assert!(CallSite::from_trace("Error\n    at logD (/srv/logger.js:20:17)").is_empty());
        assert!(CallSite::from_trace("").is_empty());
    }
}
