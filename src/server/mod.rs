use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;

mod schema;

use crate::datamodel::Bookshelf;
use schema::Query;

type BooksSchema = Schema<Query, EmptyMutation, EmptySubscription>;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().finish())
}

#[axum::debug_handler]
async fn graphql_handler(State(schema): State<BooksSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// The URL reported once the listener is bound.
pub fn ready_url(addr: SocketAddr) -> String {
    format!("http://{addr}/")
}

pub fn make_app(shelf: Bookshelf) -> Router {
    let schema = Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(shelf)
        .finish();
    // std::fs::write("schemas/books.graphql", schema.sdl()).unwrap();

    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .with_state(schema)
}
