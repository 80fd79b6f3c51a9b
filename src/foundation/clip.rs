/// Clips the run `[start, start + len)` against `[0, limit)`.
///
/// Returns the clipped `(start, len)` with `len > 0`, or `None` when nothing of
/// the run is left.
pub(crate) fn clip_run(start: i32, len: i32, limit: usize) -> Option<(usize, usize)> {
    let limit = limit as i64;
    let mut start = i64::from(start);
    let mut len = i64::from(len);
    if start >= limit {
        return None;
    }
    if start < 0 {
        len += start;
        start = 0;
    }
    if start + len > limit {
        len = limit - start;
    }
    if len <= 0 {
        return None;
    }
    Some((start as usize, len as usize))
}

/// Returns `Some(v)` when `0 <= v < limit`.
pub(crate) fn in_range(v: i32, limit: usize) -> Option<usize> {
    usize::try_from(v).ok().filter(|&v| v < limit)
}

pub(crate) fn round_up(v: usize, align: usize) -> usize {
    v.div_ceil(align) * align
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/clip.rs"]
mod tests;
