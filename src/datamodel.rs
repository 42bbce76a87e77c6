/// A single book record as stored in memory.
#[derive(Debug, Clone)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
}

/// The fixed set of books the server exposes.
///
/// Built once in `main` and handed to the schema as context data, so the
/// resolver never touches process-wide state.
#[derive(Debug, Clone)]
pub struct Bookshelf {
    books: Vec<BookRecord>,
}

impl Bookshelf {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    /// The two records this server serves.
    pub fn sample() -> Self {
        Self::new(vec![
            BookRecord {
                title: "吾輩は猫である".into(),
                author: "夏目漱石".into(),
            },
            BookRecord {
                title: "走れメロス".into(),
                author: "太宰治".into(),
            },
        ])
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }
}
