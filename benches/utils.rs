#![allow(dead_code)]

use criterion::Criterion;
use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

const DNA_ALPHABET: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Synthetic DNA-alphabet text of length `len`, generated in-process so the
/// benchmarks don't depend on network access or a bundled corpus.
pub fn random_dna(len: usize) -> Vec<u8> {
    let uni = Uniform::from(0..DNA_ALPHABET.len());
    let mut rng = thread_rng();
    (0..len).map(|_| DNA_ALPHABET[rng.sample(uni)]).collect()
}

/// A pattern of length `len` sampled from within `text`, so searches have a
/// realistic hit rate instead of always missing.
pub fn sample_pattern(text: &[u8], len: usize) -> Vec<u8> {
    if text.len() <= len {
        return text.to_vec();
    }
    let uni = Uniform::from(0..=text.len() - len);
    let mut rng = thread_rng();
    let start = rng.sample(uni);
    text[start..start + len].to_vec()
}

pub fn calc_samples(slen: usize) -> usize {
    if slen <= 4096 {
        100
    } else if slen <= 1024 * 1024 {
        10
    } else {
        3
    }
}

pub fn set_criterion_samples(crit: &mut Criterion, mut n: usize) {
    if n < 2 {
        n = 2;
    }

    let tmp = std::mem::replace(crit, Criterion::default());
    let _ = std::mem::replace(crit, tmp.sample_size(n));
}
