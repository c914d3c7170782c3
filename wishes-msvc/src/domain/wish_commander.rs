use crate::domain::wish_model::CreateWishInput;
use crate::domain::wish_model::UpdateWishInput;
use crate::domain::wish_model::Wish;
use crate::providers::state::MemStateImpl;
use log::info;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WishCommanderError {
    #[error("wish not found")]
    WishNotFound,
    #[error("text is required")]
    MissingText,
    #[error("invalid wish body: {0}")]
    InvalidInput(String),
}

#[derive(Clone)]
pub struct WishCommander {
    state: Arc<MemStateImpl>,
}

impl WishCommander {
    pub fn new(state: Arc<MemStateImpl>) -> Self {
        Self { state }
    }
}

fn parse_id(id: &str) -> Result<u64, WishCommanderError> {
    id.parse::<u64>()
        .map_err(|_| WishCommanderError::WishNotFound)
}

impl WishCommander {
    pub async fn create_wish(&self, input: CreateWishInput) -> Result<Wish, WishCommanderError> {
        let text = match input.text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(WishCommanderError::MissingText),
        }?;

        let wish = self
            .state
            .insert_one(|id| Wish {
                id,
                text,
                liked: input.liked.unwrap_or(false),
                fulfilled: input.fulfilled.unwrap_or(false),
            })
            .await;

        info!("wish created with id {}", wish.id);

        Ok(wish)
    }
}

impl WishCommander {
    pub async fn update_wish(
        &self,
        id: String,
        input: UpdateWishInput,
    ) -> Result<Wish, WishCommanderError> {
        let id = parse_id(&id)?;

        if matches!(&input.text, Some(text) if text.is_empty()) {
            return Err(WishCommanderError::MissingText);
        }

        let wish = match self
            .state
            .update_one(id, |wish| wish.apply_update(&input))
            .await
        {
            Some(wish) => Ok(wish),
            None => Err(WishCommanderError::WishNotFound),
        }?;

        info!("wish updated with id {}", id);

        Ok(wish)
    }
}

impl WishCommander {
    pub async fn delete_wish(&self, id: String) -> Result<u64, WishCommanderError> {
        let id = parse_id(&id)?;

        if !self.state.delete_one(id).await {
            return Err(WishCommanderError::WishNotFound);
        }

        info!("wish deleted with id {}", id);

        Ok(id)
    }
}
