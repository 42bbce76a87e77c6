use async_graphql::{Context, Object, SimpleObject};

use crate::datamodel::{BookRecord, Bookshelf};

#[derive(SimpleObject)]
pub struct Book {
    title: Option<String>,
    author: Option<String>,
}

impl From<&BookRecord> for Book {
    fn from(record: &BookRecord) -> Self {
        Self {
            title: Some(record.title.clone()),
            author: Some(record.author.clone()),
        }
    }
}

pub struct Query;

#[Object]
impl Query {
    /// Returns every book on the shelf, in insertion order.
    async fn test(&self, ctx: &Context<'_>) -> Vec<Book> {
        let shelf = ctx.data_unchecked::<Bookshelf>();
        shelf.books().iter().map(Book::from).collect()
    }
}
