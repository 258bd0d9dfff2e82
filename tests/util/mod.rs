//! Shared helpers for integration tests.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Captures formatted tracing output emitted on the current thread.
#[derive(Clone, Default)]
pub struct TestTracing {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl TestTracing {
    /// Creates an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a subscriber writing into the buffer until the guard drops.
    #[must_use]
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let buffer = Arc::clone(&self.buffer);
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || BufferWriter(Arc::clone(&buffer)))
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Returns everything captured so far.
    #[must_use]
    pub fn output(&self) -> String {
        let buf = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        let mut buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
