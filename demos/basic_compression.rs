//! Compresses a file, writes the packed payload, then restores it.
//!
//! Usage: basic_compression <input> <compressed> <decompressed>

use byte_huffman::{CompressedData, HuffmanCodec};
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [input_path, compressed_path, output_path] = args.as_slice() else {
        return Err("usage: basic_compression <input> <compressed> <decompressed>".into());
    };

    let original = fs::read(input_path)?;
    println!("Original file size: {} bytes", original.len());

    let codec = HuffmanCodec::new();
    let compressed = codec.compress(&original)?;
    fs::write(compressed_path, &compressed.packed)?;
    println!(
        "Compressed file size: {} bytes ({:.1}% of original, {} valid bits)",
        compressed.packed_len(),
        compressed.compression_ratio() * 100.0,
        compressed.bit_count
    );

    // the payload on disk has no header; bit count and frequencies are
    // carried over from the compression result
    let stored = CompressedData {
        packed: fs::read(compressed_path)?,
        ..compressed
    };
    let decompressed = codec.decompress(&stored)?;
    fs::write(output_path, &decompressed)?;
    println!("Decompressed file size: {} bytes", decompressed.len());

    if decompressed != original {
        return Err("decompressed output does not match the input".into());
    }
    println!("Round trip verified.");

    Ok(())
}
