#![allow(missing_docs)]
use fillgen_core::checksum::DigestWriter;
use fillgen_core::{GenerationJob, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sha2::{Digest, Sha256};
use std::io::Write;

#[test]
fn test_digest_of_empty_input() {
    let writer = DigestWriter::new(Vec::<u8>::new());
    let (inner, digest) = writer.finish();
    assert!(inner.is_empty());
    assert_eq!(
        digest,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_digest_matches_forwarded_bytes() {
    let mut writer = DigestWriter::new(Vec::<u8>::new());
    writer.write_all(b"hello ").expect("write to vec");
    writer.write_all(b"world").expect("write to vec");
    writer.flush().expect("flush vec");
    let (inner, digest) = writer.finish();

    assert_eq!(inner, b"hello world");
    assert_eq!(digest, format!("{:x}", Sha256::digest(b"hello world")));
}

#[test]
fn test_digest_of_generated_content() {
    let job = GenerationJob::new(9000, 4096, false).expect("valid job");
    let mut writer = DigestWriter::new(Vec::<u8>::new());
    generate(&mut writer, &mut StdRng::seed_from_u64(11), &job, |_| {}).expect("generation failed");
    let (content, digest) = writer.finish();

    assert_eq!(content.len(), 9000);
    assert_eq!(digest, format!("{:x}", Sha256::digest(&content)));
}
