use std::marker::PhantomData;

use super::intent::ListIntent;
use super::resource::Resource;
use super::state::{ListState, PageQuery};
use crate::store::mvi::Reducer;
use crate::store::status::RequestStatus;

pub struct ListReducer<R>(PhantomData<R>);

impl<R: Resource> Reducer for ListReducer<R> {
    type State = ListState<R::Item>;
    type Intent = ListIntent<R::Item>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::LoadStarted {
                seq,
                page,
                page_size,
            } => {
                state.latest_load = seq;
                state.query = PageQuery { page, page_size };
                state.load = RequestStatus::Loading;
                state
            }
            // Only the response to the most recently issued load is applied.
            ListIntent::LoadSucceeded { seq, .. } | ListIntent::LoadFailed { seq, .. }
                if seq != state.latest_load =>
            {
                state
            }
            ListIntent::LoadSucceeded { page, .. } => {
                state.collection = page;
                state.load = RequestStatus::Succeeded;
                state.loaded_once = true;
                state
            }
            ListIntent::LoadFailed { message, .. } => {
                // Items already on screen stay visible next to the error.
                if !state.loaded_once {
                    state.collection.items.clear();
                }
                state.load = RequestStatus::Failed(message);
                state
            }
            ListIntent::CreateStarted => {
                state.create = RequestStatus::Loading;
                state
            }
            ListIntent::CreateSucceeded(item) => {
                let collection = &mut state.collection;
                if collection.has_room() {
                    collection.items.push(item);
                }
                collection.total_count += 1;
                collection.recount();
                state.create = RequestStatus::Succeeded;
                state
            }
            ListIntent::CreateFailed(message) => {
                state.create = RequestStatus::Failed(message);
                state
            }
            ListIntent::DeleteStarted => {
                state.delete = RequestStatus::Loading;
                state
            }
            ListIntent::DeleteSucceeded { id } => {
                let collection = &mut state.collection;
                // Ids on other pages leave `items` untouched but still count.
                collection.items.retain(|item| R::id(item) != id);
                collection.total_count = collection.total_count.saturating_sub(1);
                collection.recount();
                state.delete = RequestStatus::Succeeded;
                state
            }
            ListIntent::DeleteFailed(message) => {
                state.delete = RequestStatus::Failed(message);
                state
            }
        }
    }
}
