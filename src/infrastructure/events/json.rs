//! JSON Event Sink
//!
//! Outputs portfolio events as NDJSON for scripting and CI.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{PortfolioEvent, PortfolioEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PortfolioEventSink for JsonEventSink {
    fn on_event(&self, event: PortfolioEvent) {
        let command = self.command;
        let json = match event {
            PortfolioEvent::ImportStarted { source, row_count } => serde_json::json!({
                "event": "start",
                "command": command,
                "source": source.display().to_string(),
                "rows": row_count,
            }),

            PortfolioEvent::RowValidated {
                line,
                status,
                errors,
                warnings,
            } => serde_json::json!({
                "event": "row",
                "command": command,
                "line": line,
                "status": status,
                "errors": errors,
                "warnings": warnings,
            }),

            PortfolioEvent::ImportCommitted {
                committed,
                rejected,
                discarded,
            } => {
                let status = if rejected == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": status,
                    "committed": committed,
                    "rejected": rejected,
                    "discarded": discarded,
                })
            }

            PortfolioEvent::ImportDiscarded { staged } => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": "dry_run",
                "staged": staged,
            }),

            PortfolioEvent::ApplicationAdded { id, code } => serde_json::json!({
                "event": "added",
                "command": command,
                "id": id,
                "code": code,
            }),

            PortfolioEvent::ApplicationUpdated { id, code } => serde_json::json!({
                "event": "updated",
                "command": command,
                "id": id,
                "code": code,
            }),

            PortfolioEvent::ApplicationDeleted { id, code } => serde_json::json!({
                "event": "deleted",
                "command": command,
                "id": id,
                "code": code,
            }),
        };

        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::RowStatus;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("import", writer);

        sink.on_event(PortfolioEvent::ImportStarted {
            source: PathBuf::from("apps.csv"),
            row_count: 3,
        });

        let output = output(&buffer);
        assert!(output.contains("\"event\":\"start\""));
        assert!(output.contains("\"command\":\"import\""));
        assert!(output.contains("\"rows\":3"));
    }

    #[test]
    fn json_sink_outputs_row_status() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("import", writer);

        sink.on_event(PortfolioEvent::RowValidated {
            line: 4,
            status: RowStatus::Error,
            errors: vec!["Missing Code".to_string()],
            warnings: vec![],
        });

        let output = output(&buffer);
        assert!(output.contains("\"status\":\"ERROR\""));
        assert!(output.contains("Missing Code"));
    }

    #[test]
    fn json_sink_outputs_partial_on_rejections() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("import", writer);

        sink.on_event(PortfolioEvent::ImportCommitted {
            committed: 2,
            rejected: 1,
            discarded: 0,
        });

        let output = output(&buffer);
        assert!(output.contains("\"status\":\"partial\""));
        assert!(output.contains("\"committed\":2"));
    }

    #[test]
    fn each_event_is_one_line() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("add", writer);

        sink.on_event(PortfolioEvent::ApplicationAdded {
            id: "a".into(),
            code: "A-1".to_string(),
        });
        sink.on_event(PortfolioEvent::ApplicationDeleted {
            id: "a".into(),
            code: "A-1".to_string(),
        });

        let output = output(&buffer);
        assert_eq!(output.lines().count(), 2);
        for line in output.lines() {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }
}
