use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

use curve_search::{Datum, Model, models, score};

struct CountingAlloc;

static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static TRACKING: Cell<bool> = const { Cell::new(false) };
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn note_alloc() {
    if TRACKING.with(Cell::get) {
        ALLOC_COUNT.fetch_add(1, Ordering::SeqCst);
    }
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        note_alloc();
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        note_alloc();
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        note_alloc();
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

/// Count allocations made by `f` on the current thread.
fn allocations_in<T>(f: impl FnOnce() -> T) -> (T, usize) {
    ALLOC_COUNT.store(0, Ordering::SeqCst);
    TRACKING.with(|t| t.set(true));
    let out = f();
    TRACKING.with(|t| t.set(false));
    (out, ALLOC_COUNT.load(Ordering::SeqCst))
}

#[test]
fn score_does_not_allocate() {
    let quad = models::polynomial(2);
    let plane = models::hyperplane::<3>();
    let curve: Vec<Datum<f64>> = (0..1000)
        .map(|i| Datum::new(i as f64 * 0.01, (i % 7) as f64))
        .collect();
    let cloud: Vec<Datum<[f64; 3]>> = (0..1000)
        .map(|i| Datum::new([i as f64, 1.0, -(i as f64)], 0.5))
        .collect();
    let custom = Model::new(1, |x: &f64, p: &[f64]| (p[0] * x).sin());

    let (results, allocs) = allocations_in(|| {
        [
            score(&quad, &[1.0, 2.0, 3.0], &curve),
            score(&plane, &[0.1, 0.2, 0.3, 0.4], &cloud),
            score(&custom, &[2.0], &curve),
        ]
    });

    assert!(results.iter().all(|r| r.as_ref().is_ok_and(|v| v.is_finite())));
    assert_eq!(allocs, 0);
}
