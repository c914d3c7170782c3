use crate::domain::wish_model::Wish;
use tokio::sync::RwLock;

struct WishCollection {
    wishes: Vec<Wish>,
    next_id: u64,
}

/// Ordered in-memory wish collection, newest first.
///
/// Ids come from a counter that only moves forward, so an id freed by a
/// delete is never handed out again.
pub struct MemStateImpl {
    collection: RwLock<WishCollection>,
}

impl MemStateImpl {
    pub fn new() -> Self {
        Self::with_documents(Vec::new())
    }

    pub fn with_documents(wishes: Vec<Wish>) -> Self {
        let next_id = wishes.iter().map(|w| w.id).max().unwrap_or(0) + 1;

        Self {
            collection: RwLock::new(WishCollection { wishes, next_id }),
        }
    }
}

impl Default for MemStateImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStateImpl {
    pub async fn find_all_by<F>(&self, filter: F) -> Vec<Wish>
    where
        F: Fn(&Wish) -> bool,
    {
        self.collection
            .read()
            .await
            .wishes
            .iter()
            .filter(|w| filter(*w))
            .cloned()
            .collect()
    }

    pub async fn find_one_by_id(&self, id: u64) -> Option<Wish> {
        self.collection
            .read()
            .await
            .wishes
            .iter()
            .find(|w| w.id == id)
            .cloned()
    }

    pub async fn count(&self) -> usize {
        self.collection.read().await.wishes.len()
    }
}

impl MemStateImpl {
    /// Assigns the next id and prepends the built wish under a single write guard.
    pub async fn insert_one<F>(&self, build: F) -> Wish
    where
        F: FnOnce(u64) -> Wish,
    {
        let mut collection = self.collection.write().await;

        let mut wish = build(collection.next_id);
        wish.id = collection.next_id;
        collection.next_id += 1;
        collection.wishes.insert(0, wish.clone());

        wish
    }

    pub async fn update_one<F>(&self, id: u64, apply: F) -> Option<Wish>
    where
        F: FnOnce(&mut Wish),
    {
        let mut collection = self.collection.write().await;

        let wish = collection.wishes.iter_mut().find(|w| w.id == id)?;
        apply(wish);
        wish.id = id;

        Some(wish.clone())
    }

    pub async fn delete_one(&self, id: u64) -> bool {
        let mut collection = self.collection.write().await;

        match collection.wishes.iter().position(|w| w.id == id) {
            Some(index) => {
                collection.wishes.remove(index);
                true
            }
            None => false,
        }
    }
}
