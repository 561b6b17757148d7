//! Raw stack walking
//!
//! Skip counts start at this module's own frame (the anchor), located by
//! comparing each walked frame's symbol address with the walker's function
//! address. Whatever the unwinder reports above the anchor is dropped, so skip
//! counts do not depend on how many frames the platform walker adds.
//!
//! On Apple targets `backtrace` reports the IP as the symbol address, the
//! anchor never matches, and `unanchored_window` counts from the first
//! walked frame instead.

use super::Address;

/// Extra frames buffered while searching for the anchor
const WALKER_FRAME_ALLOWANCE: usize = 32;

/// Walk the current stack, discarding `skip` frames counted from this
/// function's frame and keeping at most `depth` return addresses
///
/// No symbol resolution happens here. If the anchor frame is never found,
/// counting starts at the first frame the unwinder reported.
#[inline(never)]
pub(super) fn trace_addresses(skip: usize, depth: usize) -> Vec<Address> {
    if depth == 0 {
        return Vec::new();
    }

    let anchor = trace_addresses as usize;
    let wanted = skip.saturating_add(depth);
    let mut anchored = false;
    // Every frame before the anchor, kept only for the unanchored fallback
    let mut unanchored = Vec::new();
    let mut seen = 0usize;
    let mut addresses = Vec::with_capacity(depth.min(64));

    backtrace::trace(|frame| {
        let ip = Address::new(frame.ip() as usize);

        if !anchored {
            if frame.symbol_address() as usize == anchor {
                anchored = true;
            } else {
                unanchored.push(ip);
                return unanchored.len() < wanted.saturating_add(WALKER_FRAME_ALLOWANCE);
            }
        }

        seen += 1;
        if seen > skip {
            addresses.push(ip);
        }
        addresses.len() < depth
    });

    if !anchored {
        tracing::trace!(
            walked = unanchored.len(),
            "capture anchor not found; counting from the first walked frame"
        );
        addresses = unanchored_window(unanchored, skip, depth);
    }

    tracing::trace!(skip, depth, captured = addresses.len(), "captured stack");
    addresses
}

/// Skip and depth applied to every walked frame when no anchor was found
fn unanchored_window(walked: Vec<Address>, skip: usize, depth: usize) -> Vec<Address> {
    walked.into_iter().skip(skip).take(depth).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walked(n: usize) -> Vec<Address> {
        (1..=n).map(Address::new).collect()
    }

    #[test]
    fn test_unanchored_window_counts_from_first_frame() {
        let window = unanchored_window(walked(10), 3, 4);
        assert_eq!(window, walked(7)[3..]);
    }

    #[test]
    fn test_unanchored_window_shallow_stack() {
        assert_eq!(unanchored_window(walked(5), 3, 10), walked(5)[3..]);
        assert!(unanchored_window(walked(5), 5, 10).is_empty());
        assert!(unanchored_window(walked(5), 0, 0).is_empty());
    }
}
