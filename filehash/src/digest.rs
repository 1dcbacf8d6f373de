use anyhow::{Context, Result};
use md5::Md5;
use sha1::{Digest, Sha1};
use sha2::{Sha224, Sha256, Sha384, Sha512};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

// One read() feeds all six content accumulators
const CHUNK_SIZE: usize = 65536;

/// Hex digests of one file, one field per supported algorithm.
///
/// CRC holds the IEEE CRC32 of the file's *path* bytes rather than its
/// content, matching the historical report format. Every other field
/// covers the file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestSet {
    pub crc: String,
    pub md5: String,
    pub sha1: String,
    pub sha224: String,
    pub sha256: String,
    pub sha384: String,
    pub sha512: String,
}

impl DigestSet {
    /// Stream `path` once in fixed-size chunks, updating all content
    /// accumulators per chunk. Open and read failures are fatal; no
    /// partial set is ever returned.
    pub fn for_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .with_context(|| format!("could not open file `{:?}`", path.as_os_str()))?;

        let mut md5 = Md5::new();
        let mut sha1 = Sha1::new();
        let mut sha224 = Sha224::new();
        let mut sha256 = Sha256::new();
        let mut sha384 = Sha384::new();
        let mut sha512 = Sha512::new();

        let mut chunk = vec![0u8; CHUNK_SIZE];
        loop {
            let n = match file.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("could not read file `{:?}`", path.as_os_str())
                    })
                }
            };
            md5.update(&chunk[..n]);
            sha1.update(&chunk[..n]);
            sha224.update(&chunk[..n]);
            sha256.update(&chunk[..n]);
            sha384.update(&chunk[..n]);
            sha512.update(&chunk[..n]);
        }

        Ok(Self {
            crc: path_crc32(path),
            md5: hex::encode(md5.finalize()),
            sha1: hex::encode(sha1.finalize()),
            sha224: hex::encode(sha224.finalize()),
            sha256: hex::encode(sha256.finalize()),
            sha384: hex::encode(sha384.finalize()),
            sha512: hex::encode(sha512.finalize()),
        })
    }

    /// (name, hex) pairs in lexicographic name order for display
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("CRC", self.crc.as_str()),
            ("MD5", self.md5.as_str()),
            ("SHA1", self.sha1.as_str()),
            ("SHA224", self.sha224.as_str()),
            ("SHA256", self.sha256.as_str()),
            ("SHA384", self.sha384.as_str()),
            ("SHA512", self.sha512.as_str()),
        ]
    }
}

// CRC-32, CRC-32/ISO-HDLC
//
// https://reveng.sourceforge.io/crc-catalogue/all.htm
// width=32 poly=0x04c11db7
// init=0xffffffff
// refin=true
// refout=true
// xorout=0xffffffff
// check=0xcbf43926
// residue=0xdebb20e3
// name="CRC-32/ISO-HDLC"
//
// Computed over the UTF-8 bytes of the path string
fn path_crc32(path: &Path) -> String {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(path.to_string_lossy().as_bytes());
    format!("{:08x}", hasher.finalize())
}
