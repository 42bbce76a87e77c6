#![allow(unused)]

use datamodel::Bookshelf;
use server::{make_app, ready_url};
use tracing::info;

mod client;
mod datamodel;
mod server;


#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("bookshelf=info")
        .init();

    let app = make_app(Bookshelf::sample());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:4000").await.unwrap();
    let addr = listener.local_addr().unwrap();
    info!("Server ready at {}", ready_url(addr));
    axum::serve(listener, app).await.unwrap();
}
