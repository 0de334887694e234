// Data layer: CSV ingestion and the in-memory review store.
pub mod csv_parser;
pub mod review_store;
