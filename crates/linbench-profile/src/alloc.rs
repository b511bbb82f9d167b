//! Heap accounting global allocator.
//!
//! [`TrackingAllocator`] forwards to the system allocator and keeps
//! process-wide counters of live bytes, peak live bytes and allocation count.
//! The counters stay at zero unless it is installed with `#[global_allocator]`.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

static CURRENT: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);
static ALLOCATIONS: AtomicUsize = AtomicUsize::new(0);

/// System allocator wrapper that counts heap usage.
pub struct TrackingAllocator;

#[inline]
fn grow(bytes: usize) {
    let now = CURRENT.fetch_add(bytes, Ordering::Relaxed) + bytes;
    PEAK.fetch_max(now, Ordering::Relaxed);
}

#[inline]
fn shrink(bytes: usize) {
    CURRENT.fetch_sub(bytes, Ordering::Relaxed);
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
            grow(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
            grow(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        shrink(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            if new_size >= layout.size() {
                grow(new_size - layout.size());
            } else {
                shrink(layout.size() - new_size);
            }
        }
        new_ptr
    }
}

/// Snapshot of the heap counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllocStats {
    /// Bytes currently allocated.
    pub current_bytes: usize,
    /// Highest value of `current_bytes` since start or the last [`reset_peak`](AllocStats::reset_peak).
    pub peak_bytes: usize,
    /// Number of allocations made so far (reallocations not counted).
    pub allocations: usize,
}

impl AllocStats {
    /// Read the counters.
    pub fn snapshot() -> Self {
        Self {
            current_bytes: CURRENT.load(Ordering::Relaxed),
            peak_bytes: PEAK.load(Ordering::Relaxed),
            allocations: ALLOCATIONS.load(Ordering::Relaxed),
        }
    }

    /// Restart peak tracking from the current live size.
    pub fn reset_peak() {
        PEAK.store(CURRENT.load(Ordering::Relaxed), Ordering::Relaxed);
    }

    /// Whether [`TrackingAllocator`] has served any allocation.
    ///
    /// This is a heuristic for "installed as the global allocator": a direct
    /// call to its `GlobalAlloc` methods also makes it return true.
    pub fn is_active() -> bool {
        ALLOCATIONS.load(Ordering::Relaxed) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_through_allocator_calls() {
        // Unit tests don't install the allocator globally, so call it directly
        // and only compare deltas.
        let before = AllocStats::snapshot();
        let layout = Layout::from_size_align(4096, 8).unwrap();
        unsafe {
            let ptr = TrackingAllocator.alloc(layout);
            assert!(!ptr.is_null());

            let mid = AllocStats::snapshot();
            assert!(mid.allocations > before.allocations);
            assert!(mid.peak_bytes >= 4096);

            let ptr = TrackingAllocator.realloc(ptr, layout, 8192);
            assert!(!ptr.is_null());
            TrackingAllocator.dealloc(ptr, Layout::from_size_align(8192, 8).unwrap());
        }
        assert!(AllocStats::is_active());
    }
}
