//! Ranked full-text search over listings with Tantivy.
//!
//! The catalog is static, so the index lives in RAM and is built once at startup.

use common::JobListing;
use serde::Serialize;
use tantivy::{
    Document, Index, IndexReader, ReloadPolicy,
    collector::TopDocs,
    query::QueryParser,
    schema::{Field, STORED, STRING, Schema, TEXT},
};
use tracing::info;

/// Search hit returned by the API
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub company: String,
    pub score: f32,
}

#[derive(Clone, Copy)]
struct ListingFields {
    id: Field,
    title: Field,
    company: Field,
    location: Field,
}

/// Builds the Tantivy schema for listing indexing
fn build_schema() -> (Schema, ListingFields) {
    let mut schema_builder = Schema::builder();

    // Id: stored verbatim so hits can be resolved against the catalog
    let id = schema_builder.add_text_field("id", STRING | STORED);

    // Title and company: searchable and stored (returned in results)
    let title = schema_builder.add_text_field("title", TEXT | STORED);
    let company = schema_builder.add_text_field("company", TEXT | STORED);

    // Location: searchable only
    let location = schema_builder.add_text_field("location", TEXT);

    (
        schema_builder.build(),
        ListingFields {
            id,
            title,
            company,
            location,
        },
    )
}

pub struct ListingIndex {
    reader: IndexReader,
    query_parser: QueryParser,
    fields: ListingFields,
    doc_count: usize,
}

impl ListingIndex {
    /// Indexes every listing into a fresh in-memory index.
    pub fn build(listings: &[JobListing]) -> tantivy::Result<Self> {
        let (schema, fields) = build_schema();
        let index = Index::create_in_ram(schema);

        // Create index writer with 50MB heap
        let mut index_writer = index.writer(50_000_000)?;

        info!("Indexing {} listings...", listings.len());
        for listing in listings {
            let mut doc = Document::new();
            doc.add_text(fields.id, &listing.id);
            doc.add_text(fields.title, &listing.title);
            doc.add_text(fields.company, &listing.company);
            doc.add_text(fields.location, &listing.location);
            index_writer.add_document(doc)?;
        }
        index_writer.commit()?;

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        let query_parser =
            QueryParser::for_index(&index, vec![fields.title, fields.company, fields.location]);

        Ok(ListingIndex {
            reader,
            query_parser,
            fields,
            doc_count: listings.len(),
        })
    }

    /// Runs a query-language search; returns `Ok(None)` when the query does not parse.
    /// `limit` is capped at the number of indexed listings.
    pub fn search(
        &self,
        query_str: &str,
        limit: usize,
    ) -> tantivy::Result<Option<Vec<SearchResult>>> {
        let query = match self.query_parser.parse_query(query_str) {
            Ok(q) => q,
            Err(_) => return Ok(None),
        };

        let searcher = self.reader.searcher();
        let limit = limit.clamp(1, self.doc_count.max(1));
        let top_docs = searcher.search(&query, &TopDocs::with_limit(limit))?;

        let mut results = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let retrieved_doc = searcher.doc(doc_address)?;
            let text = |field: Field| {
                retrieved_doc
                    .get_first(field)
                    .and_then(|v| v.as_text())
                    .unwrap_or_default()
                    .to_string()
            };

            results.push(SearchResult {
                id: text(self.fields.id),
                title: text(self.fields.title),
                company: text(self.fields.company),
                score,
            });
        }

        Ok(Some(results))
    }
}
