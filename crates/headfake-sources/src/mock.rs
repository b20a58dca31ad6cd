//! Mock source for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use headfake_core::model::{BatchKind, GameSettings};
use headfake_core::traits::{HeadlineSource, RawHeadline};

/// A scripted headline source for testing game flows without network.
pub struct MockSource {
    real: Vec<RawHeadline>,
    fake: Vec<RawHeadline>,
    /// Number of fetch calls made.
    call_count: AtomicU32,
    /// Settings from the most recent fetch.
    last_settings: Mutex<Option<GameSettings>>,
}

impl MockSource {
    pub fn new(real: Vec<RawHeadline>, fake: Vec<RawHeadline>) -> Self {
        Self {
            real,
            fake,
            call_count: AtomicU32::new(0),
            last_settings: Mutex::new(None),
        }
    }

    /// Build a mock from bare titles, no thumbnails.
    pub fn with_titles(real: &[&str], fake: &[&str]) -> Self {
        let to_raw = |titles: &[&str]| {
            titles
                .iter()
                .map(|t| RawHeadline {
                    title: t.to_string(),
                    thumbnail_url: String::new(),
                })
                .collect()
        };
        Self::new(to_raw(real), to_raw(fake))
    }

    /// Get the number of fetch calls made to this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the settings of the most recent fetch.
    pub fn last_settings(&self) -> Option<GameSettings> {
        self.last_settings.lock().unwrap().clone()
    }
}

#[async_trait]
impl HeadlineSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(
        &self,
        kind: BatchKind,
        settings: &GameSettings,
    ) -> anyhow::Result<Vec<RawHeadline>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_settings.lock().unwrap() = Some(settings.clone());

        let mut items = match kind {
            BatchKind::Real => self.real.clone(),
            BatchKind::Fake => self.fake.clone(),
        };
        items.truncate(settings.bank_size as usize);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_scripted_batches() {
        let source = MockSource::with_titles(&["real a", "real b"], &["fake x"]);

        let real = source
            .fetch(BatchKind::Real, &GameSettings::default())
            .await
            .unwrap();
        let fake = source
            .fetch(BatchKind::Fake, &GameSettings::default())
            .await
            .unwrap();

        assert_eq!(real.len(), 2);
        assert_eq!(fake.len(), 1);
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn records_last_settings() {
        let source = MockSource::with_titles(&["a", "b", "c"], &["x"]);
        let settings = GameSettings {
            bank_size: 2,
            sort_by: "top".into(),
        };

        let real = source.fetch(BatchKind::Real, &settings).await.unwrap();
        assert_eq!(real.len(), 2);
        assert_eq!(source.last_settings().unwrap().sort_by, "top");
    }
}
