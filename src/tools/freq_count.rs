/// Returns a frequency count of the input data, indexed by byte value.
pub fn freqs(data: &[u8]) -> Vec<u64> {
    let mut freqs = vec![0_u64; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// Returns the (symbol, count) pairs of every byte value that occurs, in ascending symbol order.
/// Empty when the input was empty.
pub fn distinct(freqs: &[u64]) -> Vec<(u8, u64)> {
    freqs
        .iter()
        .enumerate()
        .filter(|(_, &f)| f > 0)
        .map(|(sym, &f)| (sym as u8, f))
        .collect()
}
