use tracing::{debug, info, warn};

use crate::core::error::SimilarityError;
use crate::matrix::source::{DataSource, Fetcher};
use crate::matrix::table::SimilarityTable;
use crate::parsing::csv::{split_rows, DELIMITER};

/// Fetches matrix shards and assembles them into one [`SimilarityTable`]
#[derive(Debug, Clone)]
pub struct ShardLoader {
    fetcher: Fetcher,
    /// Fetch all shards at once instead of one after another
    concurrent: bool,
}

impl ShardLoader {
    pub fn new(fetcher: Fetcher, concurrent: bool) -> Self {
        Self {
            fetcher,
            concurrent,
        }
    }

    /// Retrieve every shard and assemble them in the given order.
    ///
    /// # Errors
    ///
    /// Returns `SimilarityError::SourceUnavailable` if any shard cannot be
    /// retrieved (no partial table is returned), or
    /// `SimilarityError::EmptyMatrix` if there are no shards or the first
    /// shard has no header row.
    pub async fn load(&self, shards: &[DataSource]) -> Result<SimilarityTable, SimilarityError> {
        let texts = if self.concurrent {
            self.fetch_concurrent(shards).await?
        } else {
            self.fetch_sequential(shards).await?
        };

        let table = assemble(texts.iter().map(|text| split_rows(text, DELIMITER)))?;
        info!(
            "Assembled similarity matrix from {} shards: {} columns, {} rows",
            shards.len(),
            table.header().len().saturating_sub(1),
            table.len()
        );
        Ok(table)
    }

    async fn fetch_sequential(&self, shards: &[DataSource]) -> Result<Vec<String>, SimilarityError> {
        let mut texts = Vec::with_capacity(shards.len());
        for shard in shards {
            texts.push(self.fetcher.fetch_text(shard).await?);
        }
        Ok(texts)
    }

    /// Fetch every shard in parallel, collecting results in shard order
    async fn fetch_concurrent(&self, shards: &[DataSource]) -> Result<Vec<String>, SimilarityError> {
        let mut handles: Vec<_> = shards
            .iter()
            .cloned()
            .map(|shard| {
                let fetcher = self.fetcher.clone();
                tokio::spawn(async move { fetcher.fetch_text(&shard).await })
            })
            .collect();

        let mut texts = Vec::with_capacity(shards.len());
        for (i, shard) in shards.iter().enumerate() {
            let joined = (&mut handles[i])
                .await
                .map_err(|e| SimilarityError::source_unavailable(shard.location(), e))
                .and_then(|result| result);

            match joined {
                Ok(text) => texts.push(text),
                Err(e) => {
                    for handle in &handles[i + 1..] {
                        handle.abort();
                    }
                    return Err(e);
                }
            }
        }
        Ok(texts)
    }
}

/// Concatenate parsed shards into one table.
///
/// The first shard is taken verbatim, so its row 0 becomes the canonical
/// header. Every later shard contributes all rows except its own row 0.
///
/// # Errors
///
/// Returns `SimilarityError::EmptyMatrix` if there are no shards or the
/// first shard has no rows.
pub fn assemble<I>(shards: I) -> Result<SimilarityTable, SimilarityError>
where
    I: IntoIterator<Item = Vec<Vec<String>>>,
{
    let mut shards = shards.into_iter();
    let mut rows = shards.next().ok_or(SimilarityError::EmptyMatrix)?;
    if rows.is_empty() {
        return Err(SimilarityError::EmptyMatrix);
    }

    for (i, shard) in shards.enumerate() {
        let mut shard_rows = shard.into_iter();
        match shard_rows.next() {
            Some(header) if header != rows[0] => {
                warn!(
                    "Shard {} header differs from the canonical header; column order is assumed to match",
                    i + 2
                );
            }
            Some(_) => {}
            None => debug!("Shard {} is empty", i + 2),
        }
        rows.extend(shard_rows);
    }

    SimilarityTable::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_assemble_drops_repeated_headers() {
        let header = row(&["", "a", "b"]);
        let shard1 = vec![header.clone(), row(&["a", "1.0", "0.5"])];
        let shard2 = vec![header.clone(), row(&["b", "0.5", "1.0"])];

        let table = assemble(vec![shard1, shard2]).unwrap();
        assert_eq!(
            table.rows(),
            &[header, row(&["a", "1.0", "0.5"]), row(&["b", "0.5", "1.0"])][..]
        );
    }

    #[test]
    fn test_assemble_keeps_shard_order() {
        let header = row(&["", "a", "b", "c"]);
        let shards = vec![
            vec![header.clone(), row(&["a"])],
            vec![header.clone(), row(&["b"])],
            vec![header.clone(), row(&["c"])],
        ];
        let table = assemble(shards).unwrap();
        let ids: Vec<&str> = table.data_rows().iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_assemble_drops_mismatched_later_header() {
        let header = row(&["", "a", "b"]);
        let shard1 = vec![header.clone(), row(&["a", "1.0", "0.5"])];
        let shard2 = vec![row(&["", "b", "a"]), row(&["b", "0.5", "1.0"])];

        let table = assemble(vec![shard1, shard2]).unwrap();
        assert_eq!(
            table.rows(),
            &[header, row(&["a", "1.0", "0.5"]), row(&["b", "0.5", "1.0"])][..]
        );
        assert!(table.data_rows().iter().all(|r| r[0] != ""));
    }

    #[test]
    fn test_assemble_tolerates_empty_later_shard() {
        let header = row(&["", "a"]);
        let table = assemble(vec![vec![header, row(&["a", "1.0"])], Vec::new()]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_assemble_empty() {
        assert_eq!(
            assemble(Vec::<Vec<Vec<String>>>::new()),
            Err(SimilarityError::EmptyMatrix)
        );
        assert_eq!(
            assemble(vec![Vec::new(), vec![row(&["", "a"])]]),
            Err(SimilarityError::EmptyMatrix)
        );
    }

    fn write_shards(dir: &std::path::Path) -> Vec<DataSource> {
        let header = ",a,b,c\n";
        let bodies = ["a,1.0,0.8,0.2\n", "b,0.8,1.0,0.5\n", "c,0.2,0.5,1.0\n"];
        bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                let path = dir.join(format!("chunk_{}.csv", i + 1));
                std::fs::write(&path, format!("{header}{body}")).unwrap();
                DataSource::File(path)
            })
            .collect()
    }

    #[tokio::test]
    async fn test_load_sequential_and_concurrent_agree() {
        let dir = tempfile::tempdir().unwrap();
        let shards = write_shards(dir.path());
        let fetcher = Fetcher::new(Duration::from_secs(5)).unwrap();

        let sequential = ShardLoader::new(fetcher.clone(), false)
            .load(&shards)
            .await
            .unwrap();
        let concurrent = ShardLoader::new(fetcher, true).load(&shards).await.unwrap();

        assert_eq!(sequential, concurrent);
        assert_eq!(sequential.len(), 3);
        assert_eq!(sequential.data_rows()[2][0], "c");
    }

    #[tokio::test]
    async fn test_load_fails_when_any_shard_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut shards = write_shards(dir.path());
        shards.push(DataSource::File(dir.path().join("chunk_4.csv")));
        let fetcher = Fetcher::new(Duration::from_secs(5)).unwrap();

        for concurrent in [false, true] {
            let result = ShardLoader::new(fetcher.clone(), concurrent)
                .load(&shards)
                .await;
            assert!(
                matches!(result, Err(SimilarityError::SourceUnavailable { .. })),
                "concurrent={concurrent}: {result:?}"
            );
        }
    }

    /// Serve the first shard over HTTP; any other path answers 404
    async fn serve_first_shard_only() -> String {
        let app = axum::Router::new().route(
            "/chunk_1.csv",
            axum::routing::get(|| async { ",a,b\na,1.0,0.5\n" }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_load_fails_on_http_error_status() {
        let base = serve_first_shard_only().await;
        let shards = vec![
            DataSource::resolve(&base, "chunk_1.csv"),
            DataSource::resolve(&base, "chunk_2.csv"),
        ];
        let fetcher = Fetcher::new(Duration::from_secs(5)).unwrap();

        for concurrent in [false, true] {
            let result = ShardLoader::new(fetcher.clone(), concurrent)
                .load(&shards)
                .await;
            match result {
                Err(SimilarityError::SourceUnavailable { location, .. }) => {
                    assert!(location.ends_with("chunk_2.csv"), "{location}");
                }
                other => panic!("concurrent={concurrent}: expected SourceUnavailable, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_load_over_http() {
        let base = serve_first_shard_only().await;
        let fetcher = Fetcher::new(Duration::from_secs(5)).unwrap();

        let table = ShardLoader::new(fetcher, true)
            .load(&[DataSource::resolve(&base, "chunk_1.csv")])
            .await
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.data_rows()[0][0], "a");
    }
}
