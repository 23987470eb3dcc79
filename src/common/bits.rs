//! Width Arithmetic.
//!
//! Small helpers shared by the allocator, the accessors and the decoder.
//! Keeping them in one place guarantees that every layer agrees on how many
//! chunks a register spans and how a word offset becomes a chunk index.

/// Data/word ratios the allocator accepts.
///
/// The bus can only be subdivided relative to the minimum addressable word,
/// and the subdivision must be a power of two so that address-to-chunk
/// conversion is a plain right shift.
pub const VALID_RATIOS: [usize; 4] = [1, 2, 4, 8];

/// Returns the number of `data_width`-bit chunks a `width`-bit register spans.
///
/// This is `ceil(width / data_width)`. A zero `data_width` yields zero.
pub fn chunk_count(width: usize, data_width: usize) -> usize {
    if data_width == 0 {
        return 0;
    }
    width.div_ceil(data_width)
}

/// Returns `true` if `ratio` is one of the supported data/word ratios.
pub fn is_valid_ratio(ratio: usize) -> bool {
    VALID_RATIOS.contains(&ratio)
}

/// Returns `log2(ratio)`, the shift that turns a word offset into a chunk index.
///
/// Only meaningful for ratios accepted by [`is_valid_ratio`].
pub fn ratio_shift(ratio: usize) -> u32 {
    ratio.trailing_zeros()
}

/// Returns the half-open bit range `[start, end)` occupied by `chunk`.
///
/// The final chunk of a register whose width is not a multiple of
/// `data_width` is truncated at `width`.
pub fn chunk_bounds(chunk: usize, data_width: usize, width: usize) -> (usize, usize) {
    let start = chunk * data_width;
    let end = ((chunk + 1) * data_width).min(width);
    (start, end)
}
