//! Kept in its own test binary: the counting allocator is process-wide.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};
use tagbuf_types::serde::{Any, CodecError, ReadCursor};
use tagbuf_types::types::Container;

struct Counting;

static CURRENT: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let cur = CURRENT.fetch_add(layout.size(), Ordering::SeqCst) + layout.size();
            PEAK.fetch_max(cur, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        CURRENT.fetch_sub(layout.size(), Ordering::SeqCst);
    }
}

#[global_allocator]
static ALLOC: Counting = Counting;

const NESTING: usize = 256;
const PADDING: usize = 1 << 20;

/// Returns the result along with the peak allocation `f` caused above what was live before it.
fn peak_alloc_during<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let baseline = CURRENT.load(Ordering::SeqCst);
    PEAK.store(baseline, Ordering::SeqCst);
    let ret = f();
    let peak = PEAK.load(Ordering::SeqCst);
    (ret, peak.saturating_sub(baseline))
}

/// Every level claims `u64::MAX` members, and a large tail is left for each level to see as `remaining`.
fn gen_hostile_buf() -> Vec<u8> {
    let mut buf = vec![];
    buf.extend_from_slice(&1u64.to_le_bytes());
    for _ in 0..NESTING {
        buf.extend_from_slice(&3u64.to_le_bytes());
        buf.extend_from_slice(&u64::MAX.to_le_bytes());
    }
    buf.extend_from_slice(&9u64.to_le_bytes());
    buf.resize(buf.len() + PADDING, 0);
    buf
}

#[test]
fn oversized_nested_counts_do_not_preallocate() {
    let buf = gen_hostile_buf();
    let exp = CodecError::UnknownTag {
        offset: 8 + NESTING * 16,
        tag: 9,
    };

    let (res, peak) = peak_alloc_during(|| Container::decode(&buf));
    assert_eq!(Err(exp), res);
    assert!(peak < PADDING, "Decoding allocated {peak} bytes at peak.");

    let (res, peak) = peak_alloc_during(|| Any::decode(&mut ReadCursor::new(&buf[8..])));
    assert_eq!(
        Err(CodecError::UnknownTag {
            offset: NESTING * 16,
            tag: 9,
        }),
        res
    );
    assert!(peak < PADDING, "Decoding allocated {peak} bytes at peak.");
}
