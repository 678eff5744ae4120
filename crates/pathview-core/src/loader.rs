//! Sample document loading
//!
//! A sample document is a JSON array of [`Sample`] records as written by the
//! path extractor. Loading happens once per viewing session; there is no
//! retry and no incremental append.

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::timeline::SampleSequence;
use crate::types::Sample;

/// Decode a sample document
pub fn parse_samples(json: &str) -> LoadResult<SampleSequence> {
    let samples: Vec<Sample> = serde_json::from_str(json)?;
    Ok(SampleSequence::new(samples))
}

/// Read and decode a sample document from disk
pub fn load_samples(path: &Path) -> LoadResult<SampleSequence> {
    log::info!("load_samples: Loading from {:?}", path);

    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let sequence = parse_samples(&contents)?;
    log::info!("load_samples: Loaded {} samples", sequence.len());
    Ok(sequence)
}

/// Document name used in titles: file name without a `.json` extension
pub fn document_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let lower = file_name.to_ascii_lowercase();
    match lower.strip_suffix(".json") {
        Some(stem) => file_name[..stem.len()].to_string(),
        None => file_name,
    }
}

/// Viewer title for a sample document, e.g. `Path viewer : path_jug_lh_42`
pub fn document_title(path: &Path) -> String {
    format!("Path viewer : {}", document_name(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_extractor_output() {
        let json = r#"[
  {"t": 0.000, "x": 9921.500, "y": 10012.000, "lastHits": 0, "creepGold": 0, "neutralGold": 0, "heroKillGold": 0},
  {"t": 0.267, "x": 9930.250, "y": 10020.125, "lastHits": 1, "creepGold": 40, "neutralGold": 0, "heroKillGold": 0}
]"#;
        let seq = parse_samples(json).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.last().unwrap().creep_gold, 40);
    }

    #[test]
    fn test_empty_document_is_empty_sequence() {
        let seq = parse_samples("[]").unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_malformed_document_is_error() {
        assert!(matches!(parse_samples("{\"t\": 1}"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_samples("[{\"x\": 1}]"), Err(LoadError::Parse(_))));
        assert!(matches!(
            parse_samples("[{\"t\": 0, \"x\": 0, \"y\": 0, \"lastHits\": -1}]"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_samples(Path::new("/nonexistent/path.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"t": 1.0, "x": 2.0, "y": 3.0}}]"#).unwrap();
        let seq = load_samples(file.path()).unwrap();
        assert_eq!(seq.time_range(), Some((1.0, 1.0)));
    }

    #[test]
    fn test_document_title() {
        assert_eq!(
            document_title(Path::new("data/path_jug_lh_8559667418.json")),
            "Path viewer : path_jug_lh_8559667418"
        );
        assert_eq!(document_name(Path::new("RUN.JSON")), "RUN");
        assert_eq!(document_name(Path::new("notes.txt")), "notes.txt");
    }
}
