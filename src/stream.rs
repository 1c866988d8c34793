//! Sending the values of a tree, in ascending order, through a bounded
//! [`tokio::sync::mpsc`] channel.
//!
//! The channel provides the backpressure: the producer waits while the buffer
//! is full, and the consumer waits while it's empty. A producer that borrows
//! the tree keeps it from being modified until the whole walk is sent.
//!
//!```
//! use wbtree::{stream, WBTree};
//! use tokio::sync::mpsc;
//!
//! let tree = WBTree::try_from_iter(["b", "c", "a"]).unwrap();
//! let (tx, mut rx) = mpsc::channel(1);
//! let received = tokio_test::block_on(async {
//!     let producer = stream::send_owned(tree, tx);
//!     let consumer = async {
//!         let mut res = vec![];
//!         while let Some(value) = rx.recv().await {
//!             res.push(value);
//!         }
//!         res
//!     };
//!     tokio::join!(producer, consumer).1
//! });
//! assert_eq!(received, ["a", "b", "c"]);
//!```

use crate::WBTree;
use tokio::sync::mpsc::Sender;
use tracing::debug;

/// Sends a clone of every value in the tree, in ascending order.
/// Stops early if the receiving side is closed.
/// Returns the number of values sent.
pub async fn send_all<T: Clone>(tree: &WBTree<T>, tx: &Sender<T>) -> usize {
    let mut sent = 0;
    for value in tree.iter() {
        if tx.send(value.clone()).await.is_err() {
            debug!(sent, remaining = tree.len() - sent, "receiver closed");
            break;
        }
        sent += 1;
    }
    sent
}

/// Sends every value in the tree, in ascending order, consuming the tree.
/// The channel is closed from this side once the function returns.
/// Returns the number of values sent.
pub async fn send_owned<T>(tree: WBTree<T>, tx: Sender<T>) -> usize {
    let len = tree.len();
    let mut sent = 0;
    for value in tree {
        if tx.send(value).await.is_err() {
            debug!(sent, remaining = len - sent, "receiver closed");
            break;
        }
        sent += 1;
    }
    sent
}

/// Same as [`send_all`], for producers running on a plain thread.
/// Blocks the thread while the channel is full.
///
/// # Panics
/// Panics if called from inside an asynchronous runtime, like
/// [`Sender::blocking_send`] does.
pub fn send_all_blocking<T: Clone>(tree: &WBTree<T>, tx: &Sender<T>) -> usize {
    let mut sent = 0;
    for value in tree.iter() {
        if tx.blocking_send(value.clone()).is_err() {
            debug!(sent, remaining = tree.len() - sent, "receiver closed");
            break;
        }
        sent += 1;
    }
    sent
}
