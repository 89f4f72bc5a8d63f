//! Directional, nesting-aware bracket matching over a flat instruction
//! sequence.

/// Finds the matching counterpart of a paired delimiter, taking nesting into
/// account.
///
/// `start` is assumed to be the position of one delimiter instance (this is
/// not re-validated). When `forward` is true, the scan runs strictly after
/// `start` toward the end of `haystack`, looking for the matching `right`
/// character; when false, it runs strictly before `start` toward the
/// beginning, looking for the matching `left` character.
///
/// Returns `None` when the scan range is exhausted without a match, which
/// includes the degenerate ranges (scanning forward from the last index, or
/// backward from index 0).
pub fn find_match(
    haystack: &[char],
    left: char,
    right: char,
    start: usize,
    forward: bool,
) -> Option<usize> {
    // Scanning backward, a `right` means entering a deeper nest, so the
    // self/other roles swap with the direction.
    if forward {
        scan(haystack, left, right, start.saturating_add(1)..haystack.len())
    } else {
        scan(haystack, right, left, (0..start.min(haystack.len())).rev())
    }
}

fn scan(
    haystack: &[char],
    self_ch: char,
    other_ch: char,
    indices: impl Iterator<Item = usize>,
) -> Option<usize> {
    let mut seen = 0usize;

    for i in indices {
        let ch = haystack[i];
        if ch == self_ch {
            seen += 1;
        } else if ch == other_ch {
            if seen == 0 {
                return Some(i);
            }
            seen -= 1;
        }
    }

    None
}
