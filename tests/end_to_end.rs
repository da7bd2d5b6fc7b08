//! End-to-end tests: UInt39 embedded in a serde-based wire format

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use uint39_codec::{CodecConfig, UInt39};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Record {
    id: UInt39,
    payload: Vec<u8>,
}

// ============================================================================
// Serde / Bincode
// ============================================================================

#[test]
fn test_bincode_roundtrip() {
    let record = Record {
        id: UInt39::from_u64(0x12_3456_789a).unwrap(),
        payload: vec![1, 2, 3],
    };

    let bytes = bincode::serialize(&record).unwrap();
    let decoded: Record = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn test_bincode_serializes_as_u64() {
    let id = UInt39::MAX;
    assert_eq!(
        bincode::serialize(&id).unwrap(),
        bincode::serialize(&id.to_u64()).unwrap()
    );
}

#[test]
fn test_bincode_rejects_out_of_range() {
    let bytes = bincode::serialize(&(1u64 << 39)).unwrap();
    let result: Result<UInt39, _> = bincode::deserialize(&bytes);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

// ============================================================================
// Codec Pipelines
// ============================================================================

#[test]
fn test_text_to_optimized_wire() {
    let v: UInt39 = "1048576".parse().unwrap();
    let wire = v.size_optimized();
    assert_eq!(hex::encode(&wire), "100000");

    let back = UInt39::from_buffer_with(&wire, &CodecConfig::STRICT).unwrap();
    assert_eq!(back.to_bigint(), BigInt::from(1048576));
    assert_eq!(back.to_string(), "1048576");
}

#[test]
fn test_values_shared_across_threads() {
    let values: Vec<UInt39> = (0..64u32).map(|i| UInt39::from(i * 1000)).collect();
    let handles: Vec<_> = values
        .chunks(16)
        .map(|chunk| {
            let chunk = chunk.to_vec();
            std::thread::spawn(move || {
                chunk
                    .iter()
                    .map(|v| UInt39::from_buffer(&v.size_optimized()).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let decoded: Vec<UInt39> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(decoded, values);
}

// ============================================================================
// Logging
// ============================================================================

/// Writer that collects formatted log output in memory
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a debug-level subscriber and return everything it logged
fn capture_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("uint39_codec=debug"))
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_truncation_logs_warning() {
    let logs = capture_logs(|| {
        let v = UInt39::from_buffer(&[0xff, 0, 0, 0, 0, 7]).unwrap();
        assert_eq!(v.to_u64(), 7);
    });

    let warning = logs
        .lines()
        .find(|line| line.contains("WARN"))
        .expect("truncation should log a warning");
    assert!(warning.contains("truncated nonzero bytes"));
    assert!(warning.contains("len=6"));
    assert!(warning.contains("dropped=1"));
}

#[test]
fn test_zero_padding_logs_nothing() {
    let logs = capture_logs(|| {
        let v = UInt39::from_buffer(&[0, 0, 0, 0, 0, 0, 0, 7]).unwrap();
        assert_eq!(v.to_u64(), 7);
    });
    assert!(logs.is_empty(), "unexpected log output: {}", logs);
}

#[test]
fn test_rejections_log_at_debug() {
    let logs = capture_logs(|| {
        assert!(UInt39::from_i64(-1).is_err());
        assert!(UInt39::from_buffer(&[]).is_err());
        assert!(UInt39::from_f64(0.5).is_err());
    });

    assert!(!logs.contains("WARN"));
    assert!(logs.contains("rejected negative i64"));
    assert!(logs.contains("rejected empty buffer"));
    assert!(logs.contains("rejected fractional f64"));
    assert_eq!(logs.lines().filter(|line| line.contains("DEBUG")).count(), 3);
}
