use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_LIST_LIMIT: i64 = 10;
pub const DEFAULT_LIST_OFFSET: i64 = 0;

// Domain types
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Wish {
    pub id: u64,
    pub text: String,
    pub liked: bool,
    pub fulfilled: bool,
}

impl Wish {
    pub fn apply_update(&mut self, input: &UpdateWishInput) {
        if let Some(text) = &input.text {
            self.text = text.clone();
        }
        if let Some(liked) = input.liked {
            self.liked = liked;
        }
        if let Some(fulfilled) = input.fulfilled {
            self.fulfilled = fulfilled;
        }
    }
}

// Input types
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateWishInput {
    pub text: Option<String>,
    pub liked: Option<bool>,
    pub fulfilled: Option<bool>,
}

// `id` is not a field here, so one sent in the body never reaches the store.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateWishInput {
    pub text: Option<String>,
    pub liked: Option<bool>,
    pub fulfilled: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListWishesParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct ListWishesInput {
    pub search_term: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl From<ListWishesParams> for ListWishesInput {
    fn from(params: ListWishesParams) -> Self {
        Self {
            search_term: params.search_term,
            limit: parse_or(params.limit.as_deref(), DEFAULT_LIST_LIMIT),
            offset: parse_or(params.offset.as_deref(), DEFAULT_LIST_OFFSET),
        }
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

// Output types
#[derive(Debug, Deserialize, Serialize)]
pub struct WishPage {
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub data: Vec<Wish>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteWishOutput {
    pub message: String,
}

// Seed data, newest first
pub fn seed_wishes() -> Vec<Wish> {
    [
        (8, "Plant a lemon tree", false, false),
        (7, "Build a wooden bookshelf", true, false),
        (6, "Run a half marathon", false, true),
        (5, "Learn to play the guitar", true, false),
        (4, "Visit the Northern Lights", false, false),
        (3, "Read fifty books in a year", false, true),
        (2, "Learn Rust", true, false),
        (1, "Trip to Japan", true, false),
    ]
    .into_iter()
    .map(|(id, text, liked, fulfilled)| Wish {
        id,
        text: text.to_string(),
        liked,
        fulfilled,
    })
    .collect()
}
