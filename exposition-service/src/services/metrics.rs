//! Static Prometheus text exposition.
//!
//! The payload is a fixed table of counter families rendered once and shared
//! for the lifetime of the process. Values are literals; nothing updates them.

use std::sync::OnceLock;

/// Content type of the Prometheus text format, version 0.0.4.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// A single sample line of a counter family.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub labels: &'static [(&'static str, &'static str)],
    pub value: u64,
}

/// A counter with its HELP/TYPE header and ordered samples.
#[derive(Debug, Clone, Copy)]
pub struct CounterFamily {
    pub name: &'static str,
    pub help: &'static str,
    pub samples: &'static [Sample],
}

pub static FAMILIES: &[CounterFamily] = &[
    CounterFamily {
        name: "php_requests_total",
        help: "The total number of HTTP requests.",
        samples: &[
            Sample {
                labels: &[("method", "get")],
                value: 1027,
            },
            Sample {
                labels: &[("method", "post")],
                value: 3,
            },
        ],
    },
    CounterFamily {
        name: "php_errors_total",
        help: "The total number of errors.",
        samples: &[Sample {
            labels: &[],
            value: 42,
        }],
    },
];

static EXPOSITION: OnceLock<String> = OnceLock::new();

impl CounterFamily {
    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.samples.len() + 2);
        lines.push(format!("# HELP {} {}", self.name, self.help));
        lines.push(format!("# TYPE {} counter", self.name));
        lines.extend(self.samples.iter().map(|sample| sample.line(self.name)));
        lines
    }
}

impl Sample {
    fn line(&self, name: &str) -> String {
        if self.labels.is_empty() {
            return format!("{} {}", name, self.value);
        }

        let labels = self
            .labels
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", key, value))
            .collect::<Vec<_>>()
            .join(",");

        format!("{}{{{}}} {}", name, labels, self.value)
    }
}

/// Render families into the exposition body.
///
/// Families are separated by one empty line and the output carries no
/// trailing newline.
pub fn render(families: &[CounterFamily]) -> String {
    families
        .iter()
        .map(|family| family.lines().join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The process-wide exposition body.
pub fn get_metrics() -> &'static str {
    EXPOSITION.get_or_init(|| render(FAMILIES)).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "# HELP php_requests_total The total number of HTTP requests.\n\
# TYPE php_requests_total counter\n\
php_requests_total{method=\"get\"} 1027\n\
php_requests_total{method=\"post\"} 3\n\
\n\
# HELP php_errors_total The total number of errors.\n\
# TYPE php_errors_total counter\n\
php_errors_total 42";

    #[test]
    fn test_payload_matches_literal_block() {
        assert_eq!(get_metrics(), EXPECTED);
    }

    #[test]
    fn test_payload_has_eight_lines_and_no_trailing_newline() {
        let payload = get_metrics();
        assert!(!payload.ends_with('\n'));

        let lines: Vec<&str> = payload.split('\n').collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[4], "");
    }

    #[test]
    fn test_payload_is_shared() {
        assert!(std::ptr::eq(get_metrics(), get_metrics()));
    }

    #[test]
    fn test_render_sample_with_multiple_labels() {
        let family = CounterFamily {
            name: "jobs_total",
            help: "Jobs.",
            samples: &[Sample {
                labels: &[("queue", "default"), ("outcome", "ok")],
                value: 7,
            }],
        };

        assert_eq!(
            render(&[family]),
            "# HELP jobs_total Jobs.\n# TYPE jobs_total counter\njobs_total{queue=\"default\",outcome=\"ok\"} 7"
        );
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render(&[]), "");
    }
}
