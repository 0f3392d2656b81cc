use std::thread;
use std::time::Duration;

use handoff::channel;
use handoff::errors::Error;

#[test]
fn test_producer_consumer_threads() {
    let (tx, rx) = channel();

    let consumers = (0..2)
        .map(|_| {
            let rx = rx.clone();
            thread::spawn(move || rx.iter().take(50).collect::<Vec<u32>>())
        })
        .collect::<Vec<_>>();

    let producers = (0..2)
        .map(|p| {
            let tx = tx.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    tx.send(p * 50 + i);
                }
            })
        })
        .collect::<Vec<_>>();

    for h in producers {
        h.join().unwrap();
    }

    let mut all = Vec::new();
    for h in consumers {
        let received = h.join().unwrap();
        assert_eq!(received.len(), 50);
        all.extend(received);
    }
    all.sort();
    assert_eq!(all, (0..100).collect::<Vec<_>>());
    assert_eq!(rx.visited(), 100);
    assert_eq!(tx.size(), 0);
}

#[test]
fn test_try_recv() {
    let (tx, rx) = channel();
    match rx.try_recv() {
        Err(Error::Empty) => {}
        _ => panic!("Should return an Empty error"),
    }

    tx.send(1u8);
    assert_eq!(rx.try_recv(), Ok(1));
}

#[test]
fn test_recv_blocks_until_send() {
    let (tx, rx) = channel();

    let handle = thread::spawn(move || rx.recv());

    while tx.waiting() != 1 {
        thread::sleep(Duration::from_millis(1));
    }
    tx.send("wake up");

    assert_eq!(handle.join().unwrap(), "wake up");
    assert_eq!(tx.waiting(), 0);
}
