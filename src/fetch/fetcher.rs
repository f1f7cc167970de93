use std::path::Path;

use super::client::{CelestrakClient, TleSource};
use super::error::FetchError;
use crate::catalog::{TleDocument, NORAD_IDS};
use crate::config::FetchConfig;

/// Splits a response body into `[name, line1, line2]`.
///
/// Anything other than exactly three lines is rejected.
pub fn parse_tle_response(body: &str) -> Option<[String; 3]> {
    let lines: Vec<&str> = body.trim().lines().collect();
    match lines.as_slice() {
        [name, line1, line2] => Some([
            name.to_string(),
            line1.to_string(),
            line2.to_string(),
        ]),
        _ => None,
    }
}

/// Fetch every id in turn. Failures are logged and the id is left out.
pub async fn fetch_all<S: TleSource>(source: &S, norad_ids: &[u32]) -> TleDocument {
    let mut document = TleDocument::new();

    for &norad_id in norad_ids {
        let body = match source.fetch_tle(norad_id).await {
            Ok(body) => body,
            Err(e) => {
                log::error!("Error fetching TLE for NORAD {}: {}", norad_id, e);
                continue;
            }
        };

        match parse_tle_response(&body) {
            Some(lines) => document.insert(norad_id, lines),
            None => log::debug!("NORAD {}: response is not a 3-line TLE, dropped", norad_id),
        }
    }

    document
}

/// Fetch the fixed satellite list from `source` and overwrite `output`.
///
/// Returns the number of records written.
pub async fn run_with<S: TleSource>(source: &S, output: &Path) -> Result<usize, FetchError> {
    let document = fetch_all(source, &NORAD_IDS).await;

    document.save(output)?;
    log::info!("Wrote {}", output.display());

    Ok(document.len())
}

/// Batch entry point against the configured catalog service.
pub async fn run(config: &FetchConfig) -> Result<usize, FetchError> {
    let client = CelestrakClient::new(&config.base_url, config.timeout)?;
    run_with(&client, &config.output).await
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const ISS: &str = "ISS (ZARYA)\r\n1 25544U 98067A   24234.51762566  .00013953  00000-0  25266-3 0  9998\r\n2 25544  51.6411  39.2543 0005177  94.4421 325.7228 15.49917990552858\r\n";
    const NOAA: &str = "NOAA 15\n1 25560U 98030A   24234.36247698  .00000093  00000-0  82172-4 0  9994\n2 25560  98.7105 238.2810 0011862  43.8911 316.3239 14.25943725285530";

    enum Reply {
        Body(&'static str),
        Status(u16),
        Down,
    }

    struct FakeSource {
        replies: HashMap<u32, Reply>,
    }

    impl FakeSource {
        fn new(replies: Vec<(u32, Reply)>) -> Self {
            Self {
                replies: replies.into_iter().collect(),
            }
        }
    }

    impl TleSource for FakeSource {
        async fn fetch_tle(&self, norad_id: u32) -> Result<String, FetchError> {
            match self.replies.get(&norad_id) {
                Some(Reply::Body(body)) => Ok(body.to_string()),
                Some(Reply::Status(status)) => Err(FetchError::Status {
                    norad_id,
                    status: *status,
                }),
                Some(Reply::Down) | None => Err(FetchError::Transport("connection refused".into())),
            }
        }
    }

    #[test]
    fn accepts_only_three_line_bodies() {
        let parsed = parse_tle_response(ISS).unwrap();
        assert_eq!(parsed[0], "ISS (ZARYA)");
        assert!(parsed[2].ends_with("52858"));

        assert!(parse_tle_response("No GP data found").is_none());
        assert!(parse_tle_response("").is_none());
        assert!(parse_tle_response(&format!("{ISS}{NOAA}")).is_none());
    }

    #[tokio::test]
    async fn keeps_only_valid_bodies() {
        let source = FakeSource::new(vec![
            (25544, Reply::Body(ISS)),
            (858, Reply::Body("No GP data found")),
            (25560, Reply::Body(NOAA)),
        ]);

        let document = fetch_all(&source, &[25544, 858, 25560]).await;

        assert_eq!(document.ids().collect::<Vec<_>>(), vec![25544, 25560]);
        assert_eq!(document.get(25560).unwrap()[0], "NOAA 15");
    }

    #[tokio::test]
    async fn transport_failure_does_not_stop_batch() {
        let source = FakeSource::new(vec![
            (25544, Reply::Down),
            (25560, Reply::Body(NOAA)),
            (39199, Reply::Status(503)),
            (28874, Reply::Body(ISS)),
        ]);

        let document = fetch_all(&source, &[25544, 25560, 39199, 28874]).await;

        assert_eq!(document.len(), 2);
        assert!(document.get(25560).is_some());
        assert!(document.get(28874).is_some());
        assert!(document.get(25544).is_none());
    }

    #[tokio::test]
    async fn all_failures_yield_empty_document() {
        let source = FakeSource::new(vec![]);
        let document = fetch_all(&source, &NORAD_IDS).await;
        assert!(document.is_empty());
    }

    #[tokio::test]
    async fn saving_identical_responses_is_idempotent() {
        let source = FakeSource::new(vec![(25544, Reply::Body(ISS)), (25560, Reply::Body(NOAA))]);
        let path = std::env::temp_dir().join(format!("tle-{}.json", uuid::Uuid::new_v4()));

        fetch_all(&source, &[25544, 25560]).await.save(&path).unwrap();
        let first = std::fs::read(&path).unwrap();
        fetch_all(&source, &[25544, 25560]).await.save(&path).unwrap();
        let second = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(first, second);
        let reloaded = TleDocument::from_json(std::str::from_utf8(&first).unwrap()).unwrap();
        assert_eq!(reloaded.len(), 2);
    }

    #[tokio::test]
    async fn save_overwrites_previous_content() {
        let path = std::env::temp_dir().join(format!("tle-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "{\"1\": [\"old\", \"1 old\", \"2 old\"], \"2\": [\"a\", \"b\", \"c\"]}").unwrap();

        let source = FakeSource::new(vec![(25560, Reply::Body(NOAA))]);
        fetch_all(&source, &[25560]).await.save(&path).unwrap();
        let reloaded = TleDocument::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(reloaded.ids().collect::<Vec<_>>(), vec![25560]);
    }

    #[tokio::test]
    async fn count_matches_saved_document() {
        let source = FakeSource::new(vec![
            (25544, Reply::Body(ISS)),
            (25560, Reply::Body(NOAA)),
            (858, Reply::Down),
        ]);
        let path = std::env::temp_dir().join(format!("tle-{}.json", uuid::Uuid::new_v4()));

        let count = run_with(&source, &path).await.unwrap();
        let saved = TleDocument::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(count, 2);
        assert_eq!(count, saved.len());
    }

    #[tokio::test]
    async fn nothing_fetched_still_writes_an_empty_file() {
        let source = FakeSource::new(vec![]);
        let path = std::env::temp_dir().join(format!("tle-{}.json", uuid::Uuid::new_v4()));

        let count = run_with(&source, &path).await.unwrap();
        let saved = TleDocument::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(count, 0);
        assert!(saved.is_empty());
    }

    #[tokio::test]
    async fn unwritable_output_is_a_persist_error() {
        let source = FakeSource::new(vec![(25544, Reply::Body(ISS))]);
        let path = std::env::temp_dir()
            .join(uuid::Uuid::new_v4().to_string())
            .join("missing")
            .join("tle.json");

        let result = run_with(&source, &path).await;
        assert!(matches!(result, Err(FetchError::Persist(_))));
        assert!(!path.exists());
    }
}
