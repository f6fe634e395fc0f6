//! Concurrency tests for the post store
//!
//! Inserts are serialized by the store's mutation lock while lookups run
//! without it. These tests hammer both at once and check that nothing is lost,
//! duplicated, or observed half-built.

#[cfg(feature = "ssr")]
mod common;

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use threadboard::forum::{PostId, PostStore};

const WRITERS: usize = 8;
const INSERTS_PER_WRITER: usize = 200;
const READERS: usize = 6;

fn content_for(writer: usize, seq: usize) -> String {
    format!("w{writer}-{seq}")
}

#[test]
fn test_inserts_and_finds_race_safely() {
    let store = Arc::new(PostStore::default());
    let root = store.root();
    let first = store.insert_reply(&root, "first");
    let baseline = store.next_id();

    let barrier = Arc::new(Barrier::new(WRITERS + READERS));
    let done = Arc::new(AtomicBool::new(false));

    let writers: Vec<_> = (0..WRITERS)
        .map(|w| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let parent = store.find_post(first).expect("seeded parent");
                barrier.wait();
                (0..INSERTS_PER_WRITER)
                    .map(|i| (store.insert_reply(&parent, content_for(w, i)), w, i))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let readers: Vec<_> = (0..READERS)
        .map(|r| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                barrier.wait();
                let mut last_len = 0;
                let mut probe = r as u32;
                while !done.load(Ordering::Acquire) {
                    let parent = store.find_post(first).expect("parent never disappears");
                    let replies = parent.reply_ids();
                    assert!(replies.len() >= last_len, "reply list shrank");
                    last_len = replies.len();

                    // The newest visible replies must already be complete.
                    for id in replies.iter().rev().take(16) {
                        let post = store.find_post(*id).expect("visible reply is findable");
                        assert_eq!(post.id(), *id);
                        assert!(post.content().starts_with('w'), "torn content");
                    }

                    // Probe ids that may or may not exist yet.
                    probe = (probe + 37) % (WRITERS * INSERTS_PER_WRITER + 10) as u32;
                    if let Some(post) = store.find_post(PostId::new(probe)) {
                        assert_eq!(post.id().value(), probe);
                    }
                }
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in writers {
        for (id, w, i) in handle.join().expect("writer panicked") {
            assert!(id >= baseline, "id {id} reused a pre-existing value");
            assert!(seen.insert(id), "duplicate id {id}");
            assert_eq!(store.find_post(id).unwrap().content(), content_for(w, i));
        }
    }
    done.store(true, Ordering::Release);
    for handle in readers {
        handle.join().expect("reader panicked");
    }

    let parent = store.find_post(first).unwrap();
    assert_eq!(seen.len(), WRITERS * INSERTS_PER_WRITER);
    assert_eq!(parent.reply_count(), WRITERS * INSERTS_PER_WRITER);
    assert_eq!(
        parent.reply_ids().into_iter().collect::<HashSet<_>>(),
        seen,
        "every insert landed under the parent exactly once"
    );
}

#[test]
fn test_each_writer_sees_its_own_order() {
    let store = Arc::new(PostStore::default());
    let handles: Vec<_> = (0..4)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let root = store.root();
                (0..100)
                    .map(|i| store.insert_reply(&root, content_for(w, i)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let per_writer: Vec<Vec<PostId>> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let final_order = store.root().reply_ids();
    assert_eq!(final_order.len(), 400);
    for ids in per_writer {
        // A single writer's replies get increasing ids and keep that order.
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        let positions: Vec<usize> = ids
            .iter()
            .map(|id| final_order.iter().position(|x| x == id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[cfg(feature = "ssr")]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_http_replies() {
    use axum::http::StatusCode;

    let (state, app) = common::test_app();
    let baseline = state.store.next_id();

    let mut tasks = Vec::new();
    for i in 0..64 {
        let reply_app = app.clone();
        tasks.push(tokio::spawn(async move {
            let uri = format!("/reply/1?content=reply-{i}");
            common::get(&reply_app, &uri).await.status()
        }));
        let index_app = app.clone();
        tasks.push(tokio::spawn(async move {
            common::get(&index_app, "/").await.status()
        }));
    }
    for task in tasks {
        let status = task.await.unwrap();
        assert!(status == StatusCode::FOUND || status == StatusCode::OK);
    }

    let first = state.store.find_post(PostId::new(1)).unwrap();
    let ids: HashSet<_> = first.reply_ids().into_iter().collect();
    assert_eq!(ids.len(), 64);
    assert!(ids.iter().all(|id| *id >= baseline));
    assert_eq!(state.store.next_id(), PostId::new(baseline.value() + 64));
}
