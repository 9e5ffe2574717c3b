//! Radix sort engine, built on [`crate::DataSink`] as its bucket type.
//!
//! One counting/bucketing routine per key width, plus a size-aware
//! dispatcher that falls back to a stable comparison sort outside radix's
//! sweet spot. All routines sort ascending internally; `descending` is
//! applied as a single linear reverse afterward.

use crate::buffer::DataSink;

/// Below this input size, per-bucket chain overhead dominates a radix pass;
/// a stable comparison sort is faster and simpler.
const SMALL_THRESHOLD: usize = 4096;

/// Above this input size (64-bit keys only), the four-pass radix sort's
/// fixed per-pass bucket-array overhead (2 x 65536 chains) is no longer
/// worth it versus a comparison sort's bounded memory footprint.
const VERY_LARGE_THRESHOLD_U64: usize = 50_000_000;

/// Picks a bucket block size from the input length: small inputs get small
/// (less wasteful) buckets, large inputs get large (fewer-reallocation)
/// buckets. Each returned size maps to its own monomorphized
/// `radix_sort_u32_inner`/`radix_sort_u64_inner::<N>` instantiation, picked
/// by the `match` in `sort_u32`/`sort_u64`/`radix_sort_u32`/`radix_sort_u64`
/// below.
const fn get_block_size(size: usize) -> usize {
    if size >> 15 == 0 {
        1024
    } else if size >> 18 == 0 {
        2048
    } else if size >> 21 == 0 {
        4096
    } else if size >> 24 == 0 {
        8192
    } else if size >> 27 == 0 {
        16384
    } else {
        32768
    }
}

fn finish(mut data: Vec<u64>, descending: bool, out: &mut [u64]) {
    if descending {
        data.reverse();
    }
    out.copy_from_slice(&data);
}

/// Counting sort for 8-bit keys (256 buckets), ascending, stable, direct
/// emission (no intermediate bucket containers needed at this width).
pub fn radix_sort_u8(data: &mut [u8], descending: bool) {
    let mut counts = [0usize; 256];
    for &v in data.iter() {
        counts[v as usize] += 1;
    }
    let mut offsets = [0usize; 256];
    let mut acc = 0;
    for i in 0..256 {
        offsets[i] = acc;
        acc += counts[i];
    }
    let mut out = vec![0u8; data.len()];
    for &v in data.iter() {
        out[offsets[v as usize]] = v;
        offsets[v as usize] += 1;
    }
    if descending {
        out.reverse();
    }
    data.copy_from_slice(&out);
}

/// Counting sort for 16-bit keys (65536 buckets), ascending, stable, direct
/// emission.
pub fn radix_sort_u16(data: &mut [u16], descending: bool) {
    let mut counts = vec![0usize; 65536];
    for &v in data.iter() {
        counts[v as usize] += 1;
    }
    let mut offsets = vec![0usize; 65536];
    let mut acc = 0;
    for i in 0..65536 {
        offsets[i] = acc;
        acc += counts[i];
    }
    let mut out = vec![0u16; data.len()];
    for &v in data.iter() {
        out[offsets[v as usize]] = v;
        offsets[v as usize] += 1;
    }
    if descending {
        out.reverse();
    }
    data.copy_from_slice(&out);
}

/// Two-pass radix sort for 32-bit keys: partition by the high 16 bits into
/// per-high-half-value buckets (a [`DataSink`] each), then counting-sort
/// each non-empty bucket by its low 16 bits and concatenate in bucket
/// order.
pub fn radix_sort_u32(data: &mut [u32], descending: bool) {
    match get_block_size(data.len()) {
        1024 => radix_sort_u32_inner::<1024>(data, descending),
        2048 => radix_sort_u32_inner::<2048>(data, descending),
        4096 => radix_sort_u32_inner::<4096>(data, descending),
        8192 => radix_sort_u32_inner::<8192>(data, descending),
        16384 => radix_sort_u32_inner::<16384>(data, descending),
        _ => radix_sort_u32_inner::<32768>(data, descending),
    }
}

fn radix_sort_u32_inner<const BLOCK: usize>(data: &mut [u32], descending: bool) {
    let mut buckets: Vec<DataSink<u32, BLOCK>> = (0..65536).map(|_| DataSink::new()).collect();

    for &v in data.iter() {
        let high = (v >> 16) as usize;
        buckets[high].emplace_back(v).expect("bucket append");
    }

    let mut out = Vec::with_capacity(data.len());
    for bucket in &buckets {
        if bucket.is_empty() {
            continue;
        }
        let mut counts = [0usize; 65536];
        for &v in bucket.iter() {
            counts[(v & 0xFFFF) as usize] += 1;
        }
        let mut offsets = [0usize; 65536];
        let mut acc = 0;
        for i in 0..65536 {
            offsets[i] = acc;
            acc += counts[i];
        }
        let mut sorted = vec![0u32; bucket.len()];
        for &v in bucket.iter() {
            let low = (v & 0xFFFF) as usize;
            sorted[offsets[low]] = v;
            offsets[low] += 1;
        }
        out.extend_from_slice(&sorted);
    }

    if descending {
        out.reverse();
    }
    data.copy_from_slice(&out);
}

fn digit_pass<const BLOCK: usize>(
    src: &[u64],
    shift: u32,
    buckets: &mut [DataSink<u64, BLOCK>],
) -> Vec<u64> {
    for bucket in buckets.iter_mut() {
        bucket.clear();
    }
    for &v in src {
        let digit = ((v >> shift) & 0xFFFF) as usize;
        buckets[digit].emplace_back(v).expect("bucket append");
    }
    let mut out = Vec::with_capacity(src.len());
    for bucket in buckets.iter() {
        out.extend(bucket.iter().copied());
    }
    out
}

/// Four-pass (16 bits/pass) LSD radix sort for 64-bit keys, using two
/// alternating arrays of 65536 [`DataSink`] buckets each.
pub fn radix_sort_u64(data: &mut [u64], descending: bool) {
    match get_block_size(data.len()) {
        1024 => radix_sort_u64_inner::<1024>(data, descending),
        2048 => radix_sort_u64_inner::<2048>(data, descending),
        4096 => radix_sort_u64_inner::<4096>(data, descending),
        8192 => radix_sort_u64_inner::<8192>(data, descending),
        16384 => radix_sort_u64_inner::<16384>(data, descending),
        _ => radix_sort_u64_inner::<32768>(data, descending),
    }
}

fn radix_sort_u64_inner<const BLOCK: usize>(data: &mut [u64], descending: bool) {
    let mut buckets_a: Vec<DataSink<u64, BLOCK>> = (0..65536).map(|_| DataSink::new()).collect();
    let mut buckets_b: Vec<DataSink<u64, BLOCK>> = (0..65536).map(|_| DataSink::new()).collect();

    let pass0 = digit_pass(data, 0, &mut buckets_a);
    let pass1 = digit_pass(&pass0, 16, &mut buckets_b);
    let pass2 = digit_pass(&pass1, 32, &mut buckets_a);
    let pass3 = digit_pass(&pass2, 48, &mut buckets_b);

    finish(pass3, descending, data);
}

/// Size-aware dispatcher for `u64` keys: small and very-large inputs use a
/// stable comparison sort; everything in between uses [`radix_sort_u64`].
pub fn sort_u64(data: &mut [u64], descending: bool) {
    let n = data.len();
    if n < SMALL_THRESHOLD || n >= VERY_LARGE_THRESHOLD_U64 {
        data.sort();
        if descending {
            data.reverse();
        }
    } else {
        radix_sort_u64(data, descending);
    }
}

/// Size-aware dispatcher for `u32` keys.
pub fn sort_u32(data: &mut [u32], descending: bool) {
    if data.len() < SMALL_THRESHOLD {
        data.sort();
        if descending {
            data.reverse();
        }
    } else {
        radix_sort_u32(data, descending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_scenario_ascending() {
        let mut data = vec![1u64, 17342, 2, 8, 6, 5, 43, 2, 1, 255, 3];
        sort_u64(&mut data, false);
        assert_eq!(data, vec![1, 1, 2, 2, 3, 5, 6, 8, 43, 255, 17342]);
    }

    #[test]
    fn descending_is_reverse_of_ascending() {
        let mut asc = vec![5u64, 1, 9, 3, 7, 2];
        let mut desc = asc.clone();
        sort_u64(&mut asc, false);
        sort_u64(&mut desc, true);
        let mut expected = asc.clone();
        expected.reverse();
        assert_eq!(desc, expected);
    }

    #[test]
    fn idempotent_on_repeated_sort() {
        let mut data: Vec<u64> = (0..5000).map(|i| (i * 2654435761u64) % 99991).collect();
        sort_u64(&mut data, false);
        let once = data.clone();
        sort_u64(&mut data, false);
        assert_eq!(data, once);
    }

    #[test]
    fn u32_two_pass_matches_comparison_sort() {
        let mut data: Vec<u32> = (0..20_000u32)
            .map(|i| i.wrapping_mul(2654435761))
            .collect();
        let mut reference = data.clone();
        reference.sort();

        sort_u32(&mut data, false);
        assert_eq!(data, reference);
    }

    #[test]
    fn block_size_selection_matches_thresholds() {
        assert_eq!(get_block_size(100), 1024);
        assert_eq!(get_block_size(32_768), 2048);
        assert_eq!(get_block_size(262_144), 4096);
        assert_eq!(get_block_size(2_097_152), 8192);
        assert_eq!(get_block_size(16_777_216), 16384);
        assert_eq!(get_block_size(134_217_728), 32768);
    }

    #[test]
    fn u64_sort_correct_at_a_larger_block_size_tier() {
        let mut data: Vec<u64> = (0..40_000u64)
            .map(|i| i.wrapping_mul(2654435761))
            .collect();
        let mut reference = data.clone();
        reference.sort();
        radix_sort_u64(&mut data, false);
        assert_eq!(data, reference);
    }

    #[test]
    fn u16_counting_sort_matches_reference() {
        let mut data: Vec<u16> = vec![500, 1, 65535, 0, 256, 256, 3];
        let mut reference = data.clone();
        reference.sort();
        radix_sort_u16(&mut data, false);
        assert_eq!(data, reference);
    }

    #[test]
    fn u8_counting_sort_matches_reference() {
        let mut data: Vec<u8> = vec![250, 1, 255, 0, 128, 128, 3];
        let mut reference = data.clone();
        reference.sort();
        radix_sort_u8(&mut data, false);
        assert_eq!(data, reference);
    }
}
