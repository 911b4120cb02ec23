use std::sync::Arc;
use std::thread;

use tabula::table::{Interpolant, Interpolator, Table};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn table_is_send_and_sync() {
    assert_send_sync::<Table>();
}

#[test]
fn concurrent_readers_agree() {
    let x: Vec<f64> = (0..64).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x.iter().map(|&t| (0.3 * t).cos()).collect();
    let table = Arc::new(Table::new(&x, &y, Interpolant::Spline).unwrap());

    let xs: Vec<f64> = (0..200).map(|i| i as f64 * 0.15).collect();
    let expected = table.eval_many(&xs).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&table);
            let xs = xs.clone();
            thread::spawn(move || table.eval_many(&xs).unwrap())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
