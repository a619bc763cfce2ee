//! Size selection logic
//!
//! The editor shows every concrete size plus a virtual "All" toggle. "All"
//! is never stored; it expands to the full size set or clears a full
//! selection.

use crate::db::models::{SIZE_ORDER, Size};

/// Toggle a single size in or out of the selection
pub fn toggle(selection: &mut Vec<Size>, size: Size) {
    match selection.iter().position(|s| *s == size) {
        Some(idx) => {
            selection.remove(idx);
        }
        None => selection.push(size),
    }
}

/// Toggle the virtual "All" option.
///
/// Expands to every concrete size unless the selection is already complete,
/// in which case it clears. Toggling twice returns to the starting state.
pub fn toggle_all(selection: &mut Vec<Size>) {
    let complete = SIZE_ORDER.iter().all(|size| selection.contains(size));
    if complete {
        selection.clear();
    } else {
        *selection = SIZE_ORDER.to_vec();
    }
}

/// Dedup and sort into canonical size order (never alphabetical)
pub fn normalized(sizes: &[Size]) -> Vec<Size> {
    let mut out: Vec<Size> = Vec::with_capacity(sizes.len());
    for size in SIZE_ORDER {
        if sizes.contains(&size) && !out.contains(&size) {
            out.push(size);
        }
    }
    out
}
