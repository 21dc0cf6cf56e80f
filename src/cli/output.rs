/// Output formatting: aligned table, plain rows, JSON. TTY detection.
use std::io::{self, IsTerminal, Write};

use comfy_table::{ContentArrangement, Table, presets::NOTHING};
use serde::Serialize;

use crate::types::{ErrorOutput, WorkflowRun};

/// Width assumed for an interactive terminal whose size cannot be queried.
const FALLBACK_WIDTH: u16 = 80;

/// Terminal capabilities of the output stream.
pub trait Terminal {
    /// Whether the stream is an interactive terminal.
    fn is_interactive(&self) -> bool;
    /// Column count, if known.
    fn width(&self) -> Option<u16>;
}

/// The process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Terminal for Stdout {
    fn is_interactive(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn width(&self) -> Option<u16> {
        crossterm::terminal::size()
            .ok()
            .map(|(cols, _)| cols)
            .filter(|&cols| cols > 0)
    }
}

/// How rows are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    /// Aligned columns fitted to `width`, with a header row.
    Aligned {
        /// Terminal column count.
        width: u16,
    },
    /// One tab-separated line per row, no width limit, no header.
    Plain,
}

impl TableMode {
    /// Aligned on an interactive terminal, plain otherwise.
    #[must_use]
    pub fn detect(terminal: &dyn Terminal) -> Self {
        if terminal.is_interactive() {
            Self::Aligned {
                width: terminal.width().unwrap_or(FALLBACK_WIDTH),
            }
        } else {
            Self::Plain
        }
    }
}

/// Output context passed to all formatters.
#[derive(Debug, Clone, Copy)]
pub struct OutputCtx {
    /// Emit JSON instead of a table.
    pub json: bool,
    /// Layout for table output.
    pub mode: TableMode,
    /// Suppress the header row in aligned mode.
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI flags and the capabilities of the output terminal.
    #[must_use]
    pub fn new(json: bool, no_header: bool, terminal: &dyn Terminal) -> Self {
        Self {
            json,
            mode: TableMode::detect(terminal),
            no_header,
        }
    }
}

// --- Workflow runs ---

/// Write workflow runs to `out`, one row per run in the given order.
///
/// The full output is rendered before the first byte is written.
///
/// # Errors
///
/// Returns any I/O error from `out` (e.g. a closed pipe).
pub fn write_runs(runs: &[WorkflowRun], ctx: &OutputCtx, out: &mut dyn Write) -> io::Result<()> {
    let rendered = if ctx.json {
        render_json(runs)?
    } else {
        match ctx.mode {
            TableMode::Aligned { width } => render_aligned(runs, width, ctx.no_header),
            TableMode::Plain => render_plain(runs),
        }
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()
}

fn render_aligned(runs: &[WorkflowRun], width: u16, no_header: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);

    if !no_header {
        table.set_header(["ID", "NAME", "STATUS"]);
    }
    for run in runs {
        table.add_row([run.id.to_string(), run.name.clone(), run.status.clone()]);
    }

    if no_header && runs.is_empty() {
        return String::new();
    }
    format!("{table}\n")
}

fn render_plain(runs: &[WorkflowRun]) -> String {
    runs.iter()
        .map(|run| {
            format!(
                "{}\t{}\t{}\n",
                run.id,
                single_field(&run.name),
                single_field(&run.status)
            )
        })
        .collect()
}

/// Tabs and line breaks would split a plain row; they become spaces.
fn single_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<String> {
    let mut s = serde_json::to_string_pretty(value)?;
    s.push('\n');
    Ok(s)
}

// --- Error output ---

/// Write an error to stderr: `Error: <message>`, or the JSON envelope.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let _ = io::stderr().lock().write_all(render_error(err, json).as_bytes());
}

fn render_error(err: &ErrorOutput, json: bool) -> String {
    if json {
        render_json(err).unwrap_or_else(|_| format!("Error: {}\n", err.error.message))
    } else {
        format!("Error: {}\n", err.error.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::gh::ApiError;

    struct FakeTerminal {
        interactive: bool,
        width: Option<u16>,
    }

    impl Terminal for FakeTerminal {
        fn is_interactive(&self) -> bool {
            self.interactive
        }

        fn width(&self) -> Option<u16> {
            self.width
        }
    }

    fn run(id: u64, name: &str, status: &str) -> WorkflowRun {
        WorkflowRun {
            id,
            name: name.to_owned(),
            status: status.to_owned(),
        }
    }

    fn render(runs: &[WorkflowRun], ctx: &OutputCtx) -> String {
        let mut out = Vec::new();
        write_runs(runs, ctx, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn plain() -> OutputCtx {
        OutputCtx {
            json: false,
            mode: TableMode::Plain,
            no_header: false,
        }
    }

    fn aligned(no_header: bool) -> OutputCtx {
        OutputCtx {
            json: false,
            mode: TableMode::Aligned { width: 80 },
            no_header,
        }
    }

    #[test]
    fn test_mode_follows_terminal_detection() {
        let tty = FakeTerminal {
            interactive: true,
            width: Some(120),
        };
        assert_eq!(TableMode::detect(&tty), TableMode::Aligned { width: 120 });

        let unknown = FakeTerminal {
            interactive: true,
            width: None,
        };
        assert_eq!(TableMode::detect(&unknown), TableMode::Aligned { width: 80 });

        let pipe = FakeTerminal {
            interactive: false,
            width: Some(120),
        };
        assert_eq!(TableMode::detect(&pipe), TableMode::Plain);
    }

    #[test]
    fn test_plain_rows_in_order() {
        let runs = [
            run(3, "Deploy", "queued"),
            run(1, "Test Workflow", "completed"),
        ];
        let out = render(&runs, &plain());
        assert_eq!(out, "3\tDeploy\tqueued\n1\tTest Workflow\tcompleted\n");
    }

    #[test]
    fn test_plain_row_stays_on_one_line() {
        let runs = [run(7, "Build\tand\ntest\r", "in\tprogress")];
        let out = render(&runs, &plain());
        assert_eq!(out, "7\tBuild and test \tin progress\n");
        assert_eq!(out.lines().count(), 1);
        assert_eq!(out.trim_end().split('\t').count(), 3);
    }

    #[test]
    fn test_plain_does_not_truncate() {
        let long = "x".repeat(300);
        let out = render(&[run(1, &long, "queued")], &plain());
        assert!(out.contains(&long));
    }

    #[test]
    fn test_plain_empty() {
        assert_eq!(render(&[], &plain()), "");
    }

    #[test]
    fn test_aligned_has_header_and_one_line_per_run() {
        let runs = [run(1, "Test Workflow", "queued"), run(22, "Lint", "completed")];
        let out = render(&runs, &aligned(false));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("ID") && lines[0].contains("STATUS"));
        assert!(lines[1].contains('1') && lines[1].contains("Test Workflow"));
        assert!(lines[1].contains("queued"));
        assert!(lines[2].contains("22") && lines[2].contains("Lint"));
    }

    #[test]
    fn test_aligned_fits_width() {
        let runs = [run(1, &"long name ".repeat(30), "queued")];
        let ctx = OutputCtx {
            json: false,
            mode: TableMode::Aligned { width: 40 },
            no_header: false,
        };
        let out = render(&runs, &ctx);
        assert!(out.lines().all(|l| l.chars().count() <= 40));
    }

    #[test]
    fn test_aligned_empty_renders_header_only() {
        let out = render(&[], &aligned(false));
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("NAME"));
    }

    #[test]
    fn test_aligned_no_header() {
        let out = render(&[run(5, "CI", "queued")], &aligned(true));
        assert_eq!(out.lines().count(), 1);
        assert!(!out.contains("STATUS"));
        assert_eq!(render(&[], &aligned(true)), "");
    }

    #[test]
    fn test_json() {
        let ctx = OutputCtx {
            json: true,
            ..plain()
        };
        let out = render(&[run(1, "CI", "queued")], &ctx);
        let parsed: Vec<WorkflowRun> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec![run(1, "CI", "queued")]);
        assert_eq!(render(&[], &ctx).trim(), "[]");
    }

    fn server_error() -> ErrorOutput {
        ErrorOutput::from_app_error(&AppError::Api(ApiError::Http {
            status_code: 500,
            message: "Internal Server Error".to_owned(),
            body: r#"{"message":"Internal Server Error"}"#.to_owned(),
            url: "https://api.github.com/repos/testOrg/testRepo/actions/runs?per_page=5"
                .to_owned(),
        }))
    }

    #[test]
    fn test_error_envelope_for_http_500() {
        let out = render_error(&server_error(), true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "http_error");
        assert_eq!(value["error"]["status"], 500);
        assert!(
            value["error"]["message"]
                .as_str()
                .unwrap()
                .contains("Internal Server Error")
        );
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_error_plain_line() {
        let out = render_error(&server_error(), false);
        assert!(out.starts_with("Error: "));
        assert!(out.contains("500"));
        assert_eq!(out.lines().count(), 1);
    }
}
