use reconcile_core::reconcile::model::JsonDocument;
use reconcile_core::reconcile::reference_set::ReferenceSet;
use reconcile_core::reconcile::scanner::scan_documents;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn malformed_document_is_logged_and_skipped() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let known: ReferenceSet = ["alice".to_string()].into_iter().collect();
    let documents = vec![
        JsonDocument::new("good.json", r#"{"currentUser":"alice"}"#),
        JsonDocument::new("bad.json", "{\"currentUser\": "),
    ];
    let outcome = tracing::subscriber::with_default(subscriber, || {
        scan_documents(&documents, &known, "currentUser")
    });

    assert_eq!(outcome.match_count, 1);
    assert!(outcome.missing.is_empty());
    let output = logs.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("skipping document"), "{output}");
    assert!(output.contains("bad.json"), "{output}");
    assert!(!output.contains("good.json"), "{output}");
}

#[test]
fn well_formed_batch_logs_no_warnings() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let documents = vec![JsonDocument::new("a.json", r#"{"other":1}"#)];
    tracing::subscriber::with_default(subscriber, || {
        scan_documents(&documents, &ReferenceSet::new(), "currentUser")
    });
    assert!(logs.contents().is_empty());
}
