use crate::domain::{ContentHash, HashAlgorithm};
use crate::error::ScanError;
use crate::ports::HashingPort;
use blake3::Hasher as Blake3Hasher;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use xxhash_rust::xxh3::Xxh3;
use xxhash_rust::xxh64::Xxh64;

pub struct MultiAlgorithmHasher;

impl MultiAlgorithmHasher {
    pub fn new() -> Self {
        Self
    }

    fn stream_digest(&self, path: &Path, algorithm: HashAlgorithm, chunk_size: usize) -> io::Result<String> {
        let mut file = File::open(path)?;
        let mut buffer = vec![0u8; chunk_size];

        match algorithm {
            HashAlgorithm::XxHash64 => {
                let mut hasher = Xxh64::new(0);
                self.process_chunks(&mut file, &mut buffer, |data| hasher.update(data))?;
                Ok(format!("{:016x}", hasher.digest()))
            }
            HashAlgorithm::XxHash3 => {
                let mut hasher = Xxh3::new();
                self.process_chunks(&mut file, &mut buffer, |data| hasher.update(data))?;
                Ok(format!("{:016x}", hasher.digest()))
            }
            HashAlgorithm::Blake3 => {
                let mut hasher = Blake3Hasher::new();
                self.process_chunks(&mut file, &mut buffer, |data| {
                    hasher.update(data);
                })?;
                Ok(hasher.finalize().to_hex().to_string())
            }
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                self.process_chunks(&mut file, &mut buffer, |data| hasher.update(data))?;
                Ok(format!("{:x}", hasher.finalize()))
            }
        }
    }

    fn process_chunks<R, F>(&self, reader: &mut R, buffer: &mut [u8], mut update_fn: F) -> io::Result<()>
    where
        R: Read,
        F: FnMut(&[u8]),
    {
        loop {
            let bytes_read = match reader.read(buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            update_fn(&buffer[..bytes_read]);
        }
        Ok(())
    }
}

impl Default for MultiAlgorithmHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl HashingPort for MultiAlgorithmHasher {
    fn hash_file(
        &self,
        path: &Path,
        algorithm: HashAlgorithm,
        chunk_size: usize,
    ) -> Result<ContentHash, ScanError> {
        self.stream_digest(path, algorithm, chunk_size.max(1))
            .map(ContentHash::new)
            .map_err(|source| ScanError::Hash {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ALGORITHMS: [HashAlgorithm; 4] = [
        HashAlgorithm::XxHash64,
        HashAlgorithm::XxHash3,
        HashAlgorithm::Blake3,
        HashAlgorithm::Sha256,
    ];

    #[test]
    fn digest_does_not_depend_on_chunk_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let content: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &content).unwrap();

        let hasher = MultiAlgorithmHasher::new();
        for algorithm in ALGORITHMS {
            let small = hasher.hash_file(&path, algorithm, 7).unwrap();
            let large = hasher.hash_file(&path, algorithm, 65536).unwrap();
            assert_eq!(small, large, "{}", algorithm.as_str());
        }
    }

    #[test]
    fn xxhash64_matches_one_shot_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, b"hello duplicate world").unwrap();

        let hash = MultiAlgorithmHasher::new()
            .hash_file(&path, HashAlgorithm::XxHash64, 4)
            .unwrap();
        let expected = format!("{:016x}", xxhash_rust::xxh64::xxh64(b"hello duplicate world", 0));
        assert_eq!(hash.as_str(), expected);
        assert_eq!(hash.as_str().len(), 16);
    }

    #[test]
    fn different_content_gives_different_digest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x"), b"aaaa").unwrap();
        fs::write(dir.path().join("y"), b"aaab").unwrap();

        let hasher = MultiAlgorithmHasher::new();
        for algorithm in ALGORITHMS {
            let x = hasher.hash_file(&dir.path().join("x"), algorithm, 2).unwrap();
            let y = hasher.hash_file(&dir.path().join("y"), algorithm, 2).unwrap();
            assert_ne!(x, y);
        }
    }

    #[test]
    fn missing_file_is_a_hash_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MultiAlgorithmHasher::new()
            .hash_file(&dir.path().join("nope"), HashAlgorithm::XxHash64, 1024)
            .unwrap_err();
        assert!(matches!(err, ScanError::Hash { .. }));
    }
}
