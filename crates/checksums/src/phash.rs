//! Perceptual image hash.
//!
//! The image is reduced to a 64x64 luminance grid, transformed with a 2-D
//! DCT-II, and the top-left 8x8 block of low-frequency coefficients is
//! thresholded against its median. Visually similar images therefore share
//! most of their 64 bits even when their encoded bytes differ.

use std::f64::consts::PI;
use std::io::{BufReader, Seek, SeekFrom};

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};

use crate::{DigestError, DigestKind, DigestProvider, DigestSource, DigestSpec};

const IDENTIFIER: &str = "phash";
const SAMPLE_SIZE: u32 = 64;
const BLOCK_SIZE: usize = 8;

/// Perceptual image fingerprint registered as `phash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerceptualHash;

impl DigestProvider for PerceptualHash {
    fn spec(&self) -> DigestSpec {
        DigestSpec::new(IDENTIFIER, DigestKind::Perceptual)
    }

    fn compute(&self, source: &mut dyn DigestSource) -> Result<String, DigestError> {
        let size = source
            .seek(SeekFrom::End(0))
            .map_err(|error| DigestError::read(IDENTIFIER, error))?;
        if size == 0 {
            return Err(DigestError::content(IDENTIFIER, "filesize is zero"));
        }
        source
            .seek(SeekFrom::Start(0))
            .map_err(|error| DigestError::read(IDENTIFIER, error))?;

        let reader = ImageReader::new(BufReader::new(source))
            .with_guessed_format()
            .map_err(|error| DigestError::read(IDENTIFIER, error))?;
        let image = reader
            .decode()
            .map_err(|error| DigestError::content(IDENTIFIER, error.to_string()))?;

        Ok(format!("{:016x}", perception_hash(&image)))
    }
}

fn perception_hash(image: &DynamicImage) -> u64 {
    let side = SAMPLE_SIZE as usize;
    let sampled = image
        .resize_exact(SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Triangle)
        .to_rgb8();

    let mut luminance = vec![0.0_f64; side * side];
    for (x, y, pixel) in sampled.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        luminance[y as usize * side + x as usize] =
            0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    }

    let coefficients = dct_2d(&luminance, side);
    let mut block = Vec::with_capacity(BLOCK_SIZE * BLOCK_SIZE);
    for row in 0..BLOCK_SIZE {
        block.extend_from_slice(&coefficients[row * side..row * side + BLOCK_SIZE]);
    }

    let threshold = median(&block);
    let top_bit = block.len() - 1;
    block
        .iter()
        .enumerate()
        .filter(|(_, coefficient)| **coefficient > threshold)
        .fold(0_u64, |hash, (index, _)| hash | (1 << (top_bit - index)))
}

/// Separable, unnormalised DCT-II over a `side` x `side` row-major grid.
fn dct_2d(input: &[f64], side: usize) -> Vec<f64> {
    let basis: Vec<f64> = (0..side * side)
        .map(|index| {
            let (frequency, sample) = (index / side, index % side);
            (PI * (sample as f64 + 0.5) * frequency as f64 / side as f64).cos()
        })
        .collect();

    let mut rows = vec![0.0_f64; side * side];
    for y in 0..side {
        let line = &input[y * side..(y + 1) * side];
        for k in 0..side {
            let weights = &basis[k * side..(k + 1) * side];
            rows[y * side + k] = line.iter().zip(weights).map(|(v, w)| v * w).sum();
        }
    }

    let mut output = vec![0.0_f64; side * side];
    for x in 0..side {
        for k in 0..side {
            let weights = &basis[k * side..(k + 1) * side];
            output[k * side + x] = (0..side).map(|y| rows[y * side + x] * weights[y]).sum();
        }
    }
    output
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    }
}
