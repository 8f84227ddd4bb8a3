// Reader for the word2vec binary format.
//
// The format is an ASCII header line "<vocab_size> <dim>\n" followed by
// one entry per word: the token bytes terminated by a single space,
// then <dim> little-endian f32 values, optionally followed by a
// newline. Token bytes that are not valid UTF-8 are decoded lossily
// rather than rejected, matching how the reference loader treats
// malformed vocabulary entries.

use std::io::BufRead;

use anyhow::{Context, Result};
use ndarray::Array2;

use super::WordEmbeddings;

/// Parse a word2vec binary stream into a normalized embedding table.
pub fn read_word2vec<R: BufRead>(reader: &mut R) -> Result<WordEmbeddings> {
    let (vocab_size, dim) = read_header(reader)?;

    let mut tokens = Vec::with_capacity(vocab_size);
    let mut data = Vec::with_capacity(vocab_size.saturating_mul(dim));
    let mut buf = vec![0u8; dim * 4];

    for index in 0..vocab_size {
        let token_bytes = read_token(reader)
            .with_context(|| format!("failed to read token for entry {index}"))?;
        let token = String::from_utf8_lossy(&token_bytes).into_owned();

        reader.read_exact(&mut buf).with_context(|| {
            format!("truncated vector for entry {index} ({token:?})")
        })?;
        for chunk in buf.chunks_exact(4) {
            data.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }
        tokens.push(token);
    }

    let vectors = Array2::from_shape_vec((vocab_size, dim), data)
        .context("vector data does not match header dimensions")?;
    Ok(WordEmbeddings::from_parts(tokens, vectors))
}

/// Read and validate the "<vocab_size> <dim>" header line.
fn read_header<R: BufRead>(reader: &mut R) -> Result<(usize, usize)> {
    let mut header = String::new();
    reader
        .read_line(&mut header)
        .context("failed to read word2vec header")?;

    let mut parts = header.split_whitespace();
    let vocab_size: usize = parts
        .next()
        .and_then(|p| p.parse().ok())
        .with_context(|| format!("malformed word2vec header: {header:?}"))?;
    let dim: usize = parts
        .next()
        .and_then(|p| p.parse().ok())
        .with_context(|| format!("malformed word2vec header: {header:?}"))?;
    if parts.next().is_some() {
        anyhow::bail!("malformed word2vec header: {header:?}");
    }
    if dim == 0 {
        anyhow::bail!("word2vec header declares zero-dimensional vectors");
    }
    Ok((vocab_size, dim))
}

/// Read one space-terminated token, skipping the newline that some
/// writers emit after each vector.
fn read_token<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    loop {
        let mut byte = [0u8; 1];
        reader
            .read_exact(&mut byte)
            .context("unexpected end of file while reading token")?;
        match byte[0] {
            b' ' => break,
            b'\n' | b'\r' if bytes.is_empty() => continue,
            other => bytes.push(other),
        }
    }
    Ok(bytes)
}
