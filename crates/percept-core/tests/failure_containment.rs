use percept_core::admin::CacheAdmin;
use percept_core::cache::PredictionCache;
use percept_core::classifier::fake::FakeClassifier;
use percept_core::engine::Engine;
use percept_core::history::{HistoryLog, HISTORY_KEY};
use percept_core::model::{HistoryEntry, Prediction};
use percept_core::storage::{MemoryStorage, Storage};
use std::sync::Arc;

/// Storage wrapper that fails selected operations, simulating a backend that
/// went away mid-session.
#[derive(Default)]
struct BrokenStorage {
    inner: MemoryStorage,
    fail_reads: bool,
    fail_writes: bool,
    fail_removes: bool,
}

impl Storage for BrokenStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.fail_reads {
            anyhow::bail!("storage offline (read)");
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.fail_writes {
            anyhow::bail!("storage offline (write)");
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        if self.fail_removes {
            anyhow::bail!("storage offline (remove)");
        }
        self.inner.remove(key)
    }

    fn keys(&self) -> anyhow::Result<Vec<String>> {
        self.inner.keys()
    }
}

fn build_engine(storage: Arc<dyn Storage>, fake: Arc<FakeClassifier>) -> Engine {
    Engine {
        cache: PredictionCache::new(storage.clone()),
        history: HistoryLog::new(storage),
        classifier: fake,
        use_cache: true,
        timeout_seconds: 30,
    }
}

fn prediction(label: &str) -> Prediction {
    Prediction {
        label: label.into(),
        confidence: 0.9,
        model: None,
        meta: serde_json::Value::Null,
    }
}

#[tokio::test]
async fn write_failures_never_fail_a_capture() -> anyhow::Result<()> {
    let storage: Arc<dyn Storage> = Arc::new(BrokenStorage {
        fail_writes: true,
        ..Default::default()
    });
    let fake = Arc::new(FakeClassifier::new());
    let engine = build_engine(storage.clone(), fake.clone());

    // Capture succeeds even though neither cache nor history can be written.
    let outcome = engine.capture(b"frame").await?;
    assert!(!outcome.cached);
    assert!(storage.keys()?.is_empty());

    // With nothing cached, the next capture calls the classifier again.
    let again = engine.capture(b"frame").await?;
    assert!(!again.cached);
    assert_eq!(fake.calls(), 2);
    Ok(())
}

#[tokio::test]
async fn read_failures_degrade_to_misses() -> anyhow::Result<()> {
    let storage: Arc<dyn Storage> = Arc::new(BrokenStorage {
        fail_reads: true,
        ..Default::default()
    });
    let fake = Arc::new(FakeClassifier::new());
    let engine = build_engine(storage.clone(), fake.clone());

    let outcome = engine.capture(b"frame").await?;
    assert!(!outcome.cached);
    // The write path still works, so the entry landed in the backend even
    // though reads cannot see it.
    assert!(storage.keys()?.contains(&outcome.key));

    let again = engine.capture(b"frame").await?;
    assert!(!again.cached);
    assert_eq!(fake.calls(), 2);
    Ok(())
}

#[test]
fn append_during_read_outage_preserves_stored_history() -> anyhow::Result<()> {
    let storage = Arc::new(BrokenStorage {
        fail_reads: true,
        ..Default::default()
    });

    // Three entries already stored; the outage breaks reads, not writes.
    let seeded: Vec<HistoryEntry> = ["perros", "gatos", "conejos"]
        .iter()
        .map(|label| HistoryEntry {
            prediction: prediction(label),
            captured_at: "2026-08-25 10:00:00".into(),
        })
        .collect();
    storage.inner.set(HISTORY_KEY, &serde_json::to_string(&seeded)?)?;

    let log = HistoryLog::new(storage.clone());
    log.append(&prediction("hámsters"));

    // The append was dropped; the stored array is untouched.
    let raw = storage
        .inner
        .get(HISTORY_KEY)?
        .expect("stored log must survive the dropped append");
    let after: Vec<HistoryEntry> = serde_json::from_str(&raw)?;
    assert_eq!(after, seeded);
    Ok(())
}

#[test]
fn history_list_survives_read_outage() {
    let storage = Arc::new(BrokenStorage {
        fail_reads: true,
        ..Default::default()
    });
    storage
        .inner
        .set(
            HISTORY_KEY,
            r#"[{"prediction":{"class":"gatos","confidence":0.9},"captured_at":"2026-08-25 10:00:00"}]"#,
        )
        .unwrap();

    // Entries exist but cannot be read; the listing degrades to empty.
    let log = HistoryLog::new(storage);
    assert!(log.list().is_empty());
}

#[test]
fn eviction_failures_surface_to_the_caller() {
    let storage = Arc::new(BrokenStorage {
        fail_removes: true,
        ..Default::default()
    });
    storage.inner.set("64545", "{}").unwrap();

    let admin = CacheAdmin::new(storage);
    let err = admin.evict_all().unwrap_err();
    assert!(err.to_string().contains("failed to remove cache entry"));
}
