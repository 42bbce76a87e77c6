fn main() {
    cynic_codegen::register_schema("books")
        .from_sdl_file("schemas/books.graphql")
        .expect("failed to parse schemas/books.graphql")
        .as_default()
        .expect("failed to register default schema");
}
