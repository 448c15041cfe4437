//! Concurrent add/get/remove drills.
//!
//! The store promises per-map atomicity only: a get that races a
//! mutation may see a transiently inconsistent view across maps, but no
//! operation may panic, and once all mutators finish the store must be
//! exactly consistent.

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use common::*;
use facetmap::prelude::*;

const WRITERS: usize = 10;
const PER_WRITER: usize = 100;

fn numbered(writer: usize, i: usize) -> Book {
    let id = (writer * PER_WRITER + i).to_string();
    Book::new(&id, &format!("title-{}", i % 7), &format!("author-{}", i % 5))
}

#[test]
fn concurrent_adds_then_removes_drain_the_store() {
    init_tracing();
    let store = Arc::new(FacetMap::<Book>::new().unwrap());
    let stop_readers = Arc::new(AtomicBool::new(false));

    // Background readers run across both phases, querying every map.
    let readers: Vec<_> = (0..4)
        .map(|r| {
            let store = Arc::clone(&store);
            let stop = Arc::clone(&stop_readers);
            thread::spawn(move || {
                let mut i = 0usize;
                while !stop.load(Ordering::Relaxed) {
                    let id = ((r * 31 + i) % (WRITERS * PER_WRITER)).to_string();
                    store.get("Id", &id);
                    store.get("Title", &format!("title-{}", i % 7));
                    store.get("Author", &format!("author-{}", i % 5));
                    i = i.wrapping_add(1);
                }
            })
        })
        .collect();

    let adders: Vec<_> = (0..WRITERS)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PER_WRITER {
                    store.add(numbered(w, i)).unwrap();
                }
            })
        })
        .collect();
    for handle in adders {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), WRITERS * PER_WRITER);

    let removers: Vec<_> = (0..WRITERS)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PER_WRITER {
                    store.remove(&numbered(w, i)).unwrap();
                }
            })
        })
        .collect();
    for handle in removers {
        handle.join().unwrap();
    }

    stop_readers.store(true, Ordering::Relaxed);
    for handle in readers {
        handle.join().unwrap();
    }

    // Nothing leaked: primary table and every bucket are gone.
    assert!(store.is_empty());
    assert_eq!(store.bucket_count("Title"), Some(0));
    assert_eq!(store.bucket_count("Author"), Some(0));
}

#[test]
fn concurrent_overwrites_of_one_key_keep_a_single_record() {
    let store = Arc::new(FacetMap::<Book>::new().unwrap());

    let writers: Vec<_> = (0..8)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..200 {
                    store
                        .add(Book::new("1", &format!("title-{}-{}", w, i), "author"))
                        .unwrap();
                }
            })
        })
        .collect();

    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..1000 {
                let hits = store.get("Id", "1");
                // Present or not-yet-present, never duplicated.
                assert!(hits.len() <= 1);
            }
        })
    };

    for handle in writers {
        handle.join().unwrap();
    }
    reader.join().unwrap();

    assert_eq!(store.len(), 1);
    // Overwrites never clean index entries, so the title buckets pile up
    // while the author bucket stays shared.
    assert_eq!(store.bucket_count("Author"), Some(1));
    assert_eq!(store.bucket_count("Title"), Some(8 * 200));
}
