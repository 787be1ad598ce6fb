use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use super::intent::ListIntent;
use super::reducer::ListReducer;
use super::resource::{MutableResource, Resource};
use super::state::{ListState, PaginatedCollection};
use crate::api::{ApiClient, Page};
use crate::error::Result;
use crate::store::mvi::Reducer;
use crate::validation::{validate_item_id, Field, FormErrors, ValidationError};

/// List Store: one paginated collection of `R` with independent load,
/// create and delete lifecycles.
///
/// Operations take `&self` and may overlap. In-flight requests are never
/// cancelled; each `load` gets a sequence number and only the response to
/// the newest one reaches the state.
pub struct ListStore<R: Resource> {
    client: ApiClient,
    state: Mutex<ListState<R::Item>>,
    next_seq: AtomicU64,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ListStore<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: Mutex::new(ListState::default()),
            next_seq: AtomicU64::new(0),
            _resource: PhantomData,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ListState<R::Item> {
        self.state.lock().clone()
    }

    /// Fetch one page (`offset=page`, `limit=page_size`) and replace the
    /// collection with it.
    ///
    /// Returns the fetched page even when a newer load has been issued in
    /// the meantime and the response was therefore not applied.
    pub async fn load(&self, page: u32, page_size: u32) -> Result<PaginatedCollection<R::Item>> {
        if page_size == 0 {
            return Err(FormErrors(vec![ValidationError {
                field: Field::PageSize,
                message: "Page size must be greater than zero".to_string(),
            }])
            .into());
        }

        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.dispatch(ListIntent::LoadStarted {
            seq,
            page,
            page_size,
        });
        tracing::debug!(resource = R::NAME, seq, page, page_size, "Loading page");

        let query = [("offset", page.to_string()), ("limit", page_size.to_string())];
        let result = self
            .client
            .get_json::<Page<R::Item>>(R::LIST_PATH, &query, R::FETCH_FALLBACK)
            .await;

        if self.is_stale(seq) {
            tracing::warn!(resource = R::NAME, seq, "Discarding response of superseded load");
        }

        match result {
            Ok(page) => {
                let collection = PaginatedCollection::from(page);
                self.dispatch(ListIntent::LoadSucceeded {
                    seq,
                    page: collection.clone(),
                });
                Ok(collection)
            }
            Err(e) => {
                tracing::warn!(resource = R::NAME, seq, kind = e.kind(), error = %e, "Load failed");
                self.dispatch(ListIntent::LoadFailed {
                    seq,
                    message: e.user_message(),
                });
                Err(e)
            }
        }
    }

    /// Re-issue the most recent load with the same page and page size.
    pub async fn refresh(&self) -> Result<PaginatedCollection<R::Item>> {
        let query = self.state.lock().query;
        self.load(query.page, query.page_size).await
    }

    fn is_stale(&self, seq: u64) -> bool {
        self.state.lock().latest_load != seq
    }

    fn dispatch(&self, intent: ListIntent<R::Item>) {
        let mut state = self.state.lock();
        *state = ListReducer::<R>::reduce(std::mem::take(&mut *state), intent);
    }
}

impl<R: MutableResource> ListStore<R> {
    /// Validate and POST a new item, then append it locally.
    ///
    /// The list is not refetched: the new item sits at the end of the
    /// current page regardless of server ordering. On a full page it is
    /// only counted in `total_count`, so the returned item may be missing
    /// from `items` until the next load.
    pub async fn create(&self, draft: R::Draft) -> Result<R::Item> {
        R::validate(&draft)?;
        self.dispatch(ListIntent::CreateStarted);

        match self
            .client
            .post_json::<_, R::Item>(R::CREATE_PATH, &draft, R::CREATE_FALLBACK)
            .await
        {
            Ok(item) => {
                tracing::info!(resource = R::NAME, id = R::id(&item), "Created");
                self.dispatch(ListIntent::CreateSucceeded(item.clone()));
                Ok(item)
            }
            Err(e) => {
                tracing::warn!(resource = R::NAME, kind = e.kind(), error = %e, "Create failed");
                self.dispatch(ListIntent::CreateFailed(e.user_message()));
                Err(e)
            }
        }
    }

    /// DELETE by id, then drop it from the current page and the total.
    pub async fn delete(&self, id: &str) -> Result<String> {
        validate_item_id(id)?;
        self.dispatch(ListIntent::DeleteStarted);

        match self.client.delete_item(R::DELETE_PATH, id, R::DELETE_FALLBACK).await {
            Ok(()) => {
                tracing::info!(resource = R::NAME, id, "Deleted");
                self.dispatch(ListIntent::DeleteSucceeded { id: id.to_string() });
                Ok(id.to_string())
            }
            Err(e) => {
                tracing::warn!(resource = R::NAME, id, kind = e.kind(), error = %e, "Delete failed");
                self.dispatch(ListIntent::DeleteFailed(e.user_message()));
                Err(e)
            }
        }
    }
}
