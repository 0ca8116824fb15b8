use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::DataConfig;
use crate::core::error::SimilarityError;
use crate::core::types::ProblemId;
use crate::matrix::index::{HeaderIndex, RowIndex};
use crate::matrix::loader::ShardLoader;
use crate::matrix::source::Fetcher;
use crate::matrix::table::SimilarityTable;
use crate::parsing::metadata::{parse_metadata_text, MetadataTable};

/// Immutable view of the similarity data that every query reads.
///
/// Built once per session; queries borrow it and never mutate it, so a
/// snapshot can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SimilaritySnapshot {
    table: SimilarityTable,
    header_index: HeaderIndex,
    row_index: RowIndex,
    metadata: MetadataTable,
    loaded_at: DateTime<Utc>,
}

impl SimilaritySnapshot {
    /// Build the indexes over an assembled table and its metadata
    pub fn new(table: SimilarityTable, metadata: MetadataTable) -> Self {
        let header_index = HeaderIndex::build(table.header());
        let row_index = RowIndex::build(table.data_rows());

        Self {
            table,
            header_index,
            row_index,
            metadata,
            loaded_at: Utc::now(),
        }
    }

    /// Fetch shards and metadata described by `config` and build a snapshot.
    ///
    /// The metadata table is fetched while the shards are being loaded.
    ///
    /// # Errors
    ///
    /// Returns `SimilarityError::SourceUnavailable` if any shard or the
    /// metadata table cannot be retrieved, or `SimilarityError::EmptyMatrix`
    /// if the first shard has no header.
    pub async fn load(config: &DataConfig) -> Result<Self, SimilarityError> {
        let fetcher = Fetcher::new(config.timeout())?;
        let loader = ShardLoader::new(fetcher.clone(), config.concurrent_fetch);

        let shards = config.shard_sources();
        let metadata_source = config.metadata_source();

        let (table, metadata_text) = tokio::try_join!(
            loader.load(&shards),
            fetcher.fetch_text(&metadata_source)
        )?;

        let metadata = parse_metadata_text(&metadata_text);
        info!(
            "Loaded metadata for {} problems from {metadata_source}",
            metadata.len()
        );

        Ok(Self::new(table, metadata))
    }

    pub fn table(&self) -> &SimilarityTable {
        &self.table
    }

    pub fn header_index(&self) -> &HeaderIndex {
        &self.header_index
    }

    pub fn row_index(&self) -> &RowIndex {
        &self.row_index
    }

    pub fn metadata(&self) -> &MetadataTable {
        &self.metadata
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Number of problems with a column in the matrix
    pub fn problem_count(&self) -> usize {
        self.header_index.len()
    }

    /// Problem identifiers in header order
    pub fn problems(&self) -> impl Iterator<Item = ProblemId> + '_ {
        self.table
            .header()
            .iter()
            .skip(1)
            .map(|id| ProblemId::new(id.trim()))
    }
}
