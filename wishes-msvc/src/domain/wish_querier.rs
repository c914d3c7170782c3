use crate::domain::wish_model::ListWishesInput;
use crate::domain::wish_model::Wish;
use crate::domain::wish_model::WishPage;
use crate::providers::state::MemStateImpl;
use log::debug;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WishQuerierError {
    #[error("wish not found")]
    WishNotFound,
    #[error("{0} must be a non-negative number")]
    InvalidPagination(&'static str),
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

#[derive(Clone)]
pub struct WishQuerier {
    state: Arc<MemStateImpl>,
}

impl WishQuerier {
    pub fn new(state: Arc<MemStateImpl>) -> Self {
        Self { state }
    }
}

impl WishQuerier {
    /// Filters by a case-insensitive substring of `text`, then slices
    /// `[offset, offset + limit)`. `total` counts the filtered set.
    pub async fn list_wishes(&self, input: ListWishesInput) -> Result<WishPage, WishQuerierError> {
        let limit = usize::try_from(input.limit)
            .map_err(|_| WishQuerierError::InvalidPagination("limit"))?;
        let offset = usize::try_from(input.offset)
            .map_err(|_| WishQuerierError::InvalidPagination("offset"))?;

        let needle = input.search_term.map(|term| term.to_lowercase());

        let filtered = self
            .state
            .find_all_by(|wish| match &needle {
                Some(term) => wish.text.to_lowercase().contains(term.as_str()),
                None => true,
            })
            .await;

        let total = filtered.len();
        let data: Vec<Wish> = filtered.into_iter().skip(offset).take(limit).collect();

        debug!(
            "listed {} of {} wishes (offset {}, limit {})",
            data.len(),
            total,
            offset,
            limit
        );

        Ok(WishPage {
            total,
            offset,
            limit,
            data,
        })
    }
}

impl WishQuerier {
    pub async fn get_wish_by_id(&self, id: String) -> Result<Wish, WishQuerierError> {
        let id = id
            .parse::<u64>()
            .map_err(|_| WishQuerierError::WishNotFound)?;

        match self.state.find_one_by_id(id).await {
            Some(wish) => Ok(wish),
            None => Err(WishQuerierError::WishNotFound),
        }
    }
}
