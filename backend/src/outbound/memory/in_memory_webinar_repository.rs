//! HashMap-backed implementation of [`WebinarRepository`].
//!
//! Stores value copies, so mutating a webinar after handing it to the
//! repository never leaks into the stored state. Write semantics match the
//! PostgreSQL adapter: `create` refuses a taken id and `update` refuses an
//! unknown one.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{WebinarRepository, WebinarRepositoryError};
use crate::domain::{Webinar, WebinarId};

/// In-memory webinar store shared between clones.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWebinarRepository {
    webinars: Arc<Mutex<HashMap<WebinarId, Webinar>>>,
}

impl InMemoryWebinarRepository {
    /// Create a store pre-populated with `seed`.
    ///
    /// Later entries replace earlier ones sharing the same id.
    pub fn new(seed: impl IntoIterator<Item = Webinar>) -> Self {
        let webinars = seed
            .into_iter()
            .map(|webinar| (webinar.id().clone(), webinar))
            .collect();
        Self {
            webinars: Arc::new(Mutex::new(webinars)),
        }
    }

    /// Synchronous lookup for assertions outside an async context.
    pub fn find_by_id_sync(&self, id: &WebinarId) -> Option<Webinar> {
        self.lock().get(id).cloned()
    }

    /// Number of stored webinars.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no webinars.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every write replaces a whole value, so a poisoned map is still
    // consistent and safe to keep using.
    fn lock(&self) -> MutexGuard<'_, HashMap<WebinarId, Webinar>> {
        self.webinars.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, WebinarRepositoryError> {
        Ok(self.find_by_id_sync(id))
    }

    async fn create(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let mut webinars = self.lock();
        if webinars.contains_key(webinar.id()) {
            return Err(WebinarRepositoryError::duplicate_key(webinar.id().as_ref()));
        }
        webinars.insert(webinar.id().clone(), webinar.clone());
        debug!(webinar_id = %webinar.id(), "webinar stored in memory");
        Ok(())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let mut webinars = self.lock();
        let Some(stored) = webinars.get_mut(webinar.id()) else {
            return Err(WebinarRepositoryError::not_found(webinar.id().as_ref()));
        };
        *stored = webinar.clone();
        Ok(())
    }
}
