use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

///
/// Is the file at this path gzip compressed? Only the extension is checked.
///
pub fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{BufRead, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("hg38.hits", false)]
    #[case("hg38.hits.gz", true)]
    #[case("families.json.gz", true)]
    #[case("gz", false)]
    fn test_is_gzipped(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_gzipped(Path::new(name)), expected);
    }

    #[rstest]
    fn test_read_gzipped_and_plain_files() {
        let tempdir = tempfile::tempdir().unwrap();

        let plain_path = tempdir.path().join("plain.hits");
        std::fs::write(&plain_path, "a\nb\n").unwrap();

        let gz_path = tempdir.path().join("compressed.hits.gz");
        let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::fast());
        encoder.write_all(b"a\nb\n").unwrap();
        encoder.finish().unwrap();

        for path in [plain_path, gz_path] {
            let lines = get_dynamic_reader(&path)
                .unwrap()
                .lines()
                .collect::<io::Result<Vec<_>>>()
                .unwrap();
            assert_eq!(lines, vec!["a".to_string(), "b".to_string()]);
        }
    }

    #[rstest]
    fn test_missing_file_is_not_found() {
        let err = get_dynamic_reader(Path::new("does/not/exist.hits"))
            .err()
            .unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
