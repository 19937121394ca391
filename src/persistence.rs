// File: src/persistence.rs
use crate::core::types::{PhoneticIndex, VocabularyEntry};
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// On-disk form of the index, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    Json,
    /// `.bin` files: bincode, much smaller and faster to load.
    Bincode,
}

impl IndexFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => IndexFormat::Bincode,
            _ => IndexFormat::Json,
        }
    }
}

/// Writes the index through a temp file in the target directory, so a
/// reader never sees a half-written index.
pub fn save_index(index: &PhoneticIndex, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        match IndexFormat::for_path(path) {
            IndexFormat::Json => serde_json::to_writer_pretty(&mut writer, index)?,
            IndexFormat::Bincode => bincode::serialize_into(&mut writer, index)?,
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), words = index.len(), "saved phonetic index");
    Ok(())
}

pub fn load_index(path: &Path) -> Result<PhoneticIndex> {
    let reader = BufReader::new(File::open(path)?);
    let index: PhoneticIndex = match IndexFormat::for_path(path) {
        IndexFormat::Json => serde_json::from_reader(reader)?,
        IndexFormat::Bincode => bincode::deserialize_from(reader)?,
    };
    Ok(index)
}

pub fn load_vocabulary(path: &Path) -> Result<Vec<VocabularyEntry>> {
    let reader = BufReader::new(File::open(path)?);
    let vocabulary: Vec<VocabularyEntry> = serde_json::from_reader(reader)?;
    info!(path = %path.display(), entries = vocabulary.len(), "loaded vocabulary");
    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::IndexBuilder;
    use crate::error::DistractorError;

    fn sample_index() -> PhoneticIndex {
        let vocabulary: Vec<VocabularyEntry> = ["Cat", "Hat", "Bat", "Chair", "Cake"]
            .iter()
            .map(|w| VocabularyEntry::new(w, "", "things", ""))
            .collect();
        IndexBuilder::default().build(&vocabulary)
    }

    #[test]
    fn json_file_uses_field_names_of_the_web_app() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonetic-index.json");
        save_index(&sample_index(), &path).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let cat = &raw["cat"];
        assert_eq!(cat["initialSound"], "c");
        assert_eq!(cat["finalSound"], "at");
        assert_eq!(cat["syllableCount"], 1);
        assert!(cat["phoneticNeighbors"][0]["distance"].is_u64());
        assert!(cat["similarRhyme"].is_array());
    }

    #[test]
    fn both_formats_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let index = sample_index();
        for name in ["index.json", "nested/index.bin"] {
            let path = dir.path().join(name);
            save_index(&index, &path).unwrap();
            assert_eq!(load_index(&path).unwrap(), index, "{name}");
        }
    }

    #[test]
    fn missing_or_corrupt_files_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_index(&dir.path().join("absent.json")), Err(DistractorError::Io(_))));

        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "{ not json").unwrap();
        assert!(matches!(load_index(&corrupt), Err(DistractorError::Json(_))));
    }

    #[test]
    fn vocabulary_reads_optional_image_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.json");
        fs::write(
            &path,
            r#"[
                {"word": "Cat", "translation": "חתול", "category": "animals", "image": "🐱"},
                {"word": "Sun", "translation": "שמש", "category": "nature", "image": "☀️", "imageUrl": "img/sun.png"}
            ]"#,
        )
        .unwrap();

        let vocabulary = load_vocabulary(&path).unwrap();
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary[0].image_url, None);
        assert_eq!(vocabulary[1].image_url.as_deref(), Some("img/sun.png"));
        assert_eq!(vocabulary[1].translation, "שמש");
    }
}
