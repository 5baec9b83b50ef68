//! Runs as its own process so the generator registry starts uninitialized.

use std::sync::{Arc, Barrier};
use std::thread;

use curve25519_dalek::edwards::CompressedEdwardsY;
use seraphis_generators::{
    get_G, get_G_precomputed, get_H, get_H_precomputed, get_U, get_U_precomputed, get_X,
    get_X_precomputed,
};

const THREADS: usize = 32;

fn expected() -> [&'static str; 4] {
    [
        "5866666666666666666666666666666666666666666666666666666666666666",
        "8b655970153799af2aeadc9ff1add0ea6c7251d54154cfa92c173a0dd39c1f94",
        "10948b00d2de50b576998c11e83c59a79684d25c9f8a0dc6864570d797b9c16e",
        "a4fb43ca695e12998802a20a158f12ea79474fb9012116956a69767c4d41110f",
    ]
}

// each thread enters through a different accessor, then reads the other seven
fn read_all(first: usize) -> [CompressedEdwardsY; 8] {
    let accessors: [fn() -> CompressedEdwardsY; 8] = [
        get_G,
        get_H,
        get_U,
        get_X,
        || get_G_precomputed().compress(),
        || get_H_precomputed().compress(),
        || get_U_precomputed().compress(),
        || get_X_precomputed().compress(),
    ];
    let mut out = [CompressedEdwardsY([0u8; 32]); 8];
    for i in 0..8 {
        let index = (first + i) % 8;
        out[index] = accessors[index]();
    }
    out
}

#[test]
fn concurrent_first_access_test() {
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                read_all(i % 8)
            })
        })
        .collect();

    let expected = expected();
    for handle in handles {
        let observed = handle.join().unwrap();
        for (i, point) in observed.iter().enumerate() {
            assert_eq!(hex::encode(point.as_bytes()), expected[i % 4]);
        }
    }
}
