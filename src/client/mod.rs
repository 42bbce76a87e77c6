use cynic::http::ReqwestExt;
use cynic::serde;
use reqwest::Url;

pub struct Client {
    client: reqwest::Client,
    url: Url,
}

impl Client {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub async fn query<Query, Input>(
        &self,
        op: cynic::Operation<Query, Input>,
    ) -> cynic::GraphQlResponse<Query>
    where
        Input: serde::Serialize,
        Query: serde::de::DeserializeOwned + 'static,
    {
        self.client
            .post(self.url.clone())
            .run_graphql(op)
            .await
            .unwrap()
    }
}

#[cynic::schema("books")]
mod schema {}

/// Selects `test { title author }`.
#[derive(cynic::QueryFragment, Debug, PartialEq)]
#[cynic(graphql_type = "Query")]
pub struct BookList {
    pub test: Vec<Book>,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
pub struct Book {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Selects `test { title }` only.
#[derive(cynic::QueryFragment, Debug, PartialEq)]
#[cynic(graphql_type = "Query")]
pub struct TitleList {
    pub test: Vec<BookTitle>,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
#[cynic(graphql_type = "Book")]
pub struct BookTitle {
    pub title: Option<String>,
}
