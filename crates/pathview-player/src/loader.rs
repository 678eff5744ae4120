//! Asynchronous input loading
//!
//! Both loads run once at startup as iced `Task`s on the tokio runtime, the
//! map image first and the sample document after it. The sample document is
//! decoded by `pathview_core::loader` on a blocking thread. Errors are
//! flattened to strings at the message boundary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use iced::widget::image;
use pathview_core::loader::load_samples;
use pathview_core::timeline::SampleSequence;

/// Read the background map image
pub async fn load_map_image(path: PathBuf) -> Result<image::Handle, String> {
    read_map_image(path).await.map_err(|e| format!("{:#}", e))
}

/// Read and decode the sample document
pub async fn load_sample_document(path: PathBuf) -> Result<SampleSequence, String> {
    read_sample_document(path).await.map_err(|e| format!("{:#}", e))
}

async fn read_map_image(path: PathBuf) -> Result<image::Handle> {
    log::info!("load_map_image: Loading from {:?}", path);
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read map image {:?}", path))?;
    log::info!("load_map_image: Read {} bytes", bytes.len());
    Ok(image::Handle::from_bytes(bytes))
}

async fn read_sample_document(path: PathBuf) -> Result<SampleSequence> {
    let task_path = path.clone();
    let sequence = tokio::task::spawn_blocking(move || load_samples(&task_path))
        .await
        .context("Sample loader task failed")?
        .with_context(|| format!("Failed to load sample document {:?}", path))?;
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn test_sample_document_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(
            &path,
            r#"[{"t": 0.0, "x": 9684.0, "y": 9684.0}, {"t": 60.0, "x": 23034.0, "y": 23034.0, "creepGold": 500}]"#,
        )
        .unwrap();

        let sequence = block_on(load_sample_document(path)).unwrap();
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.time_range(), Some((0.0, 60.0)));
    }

    #[test]
    fn test_missing_document_reports_path() {
        let err = block_on(load_sample_document(PathBuf::from("/nonexistent/run.json")))
            .unwrap_err();
        assert!(err.contains("/nonexistent/run.json"));
    }

    #[test]
    fn test_malformed_document_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = block_on(load_sample_document(path)).unwrap_err();
        assert!(err.contains("Malformed sample document"));
    }

    #[test]
    fn test_missing_map_is_error() {
        assert!(block_on(load_map_image(PathBuf::from("/nonexistent/map.png"))).is_err());
    }
}
