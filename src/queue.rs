//! Deferred destruction queues.

use crossbeam_channel as chan;

/// Destroyed objects beyond this count block the dropping thread until the
/// factory next cleans up.
const MAX_QUEUE_SIZE: usize = 1024;

/// Send half of a [`Queue`].
///
/// [`Queue`]: struct.Queue.html
pub type Sender<T> = chan::Sender<T>;

/// Receive half of a [`Queue`].
///
/// [`Queue`]: struct.Queue.html
pub type Receiver<T> = chan::Receiver<T>;

/// A thread-safe queue of destroyed object IDs.
#[derive(Clone)]
pub struct Queue<T> {
    /// Send half of the queue.
    tx: Sender<T>,

    /// Receive half of the queue.
    rx: Receiver<T>,
}

impl<T> Queue<T> {
    /// Constructor.
    pub fn new() -> Self {
        let (tx, rx) = chan::bounded(MAX_QUEUE_SIZE);
        Self { tx, rx }
    }

    /// Clone the send half of the queue.
    pub fn tx(&self) -> Sender<T> {
        self.tx.clone()
    }

    /// Remove every item currently in the queue.
    pub fn drain(&self) -> impl Iterator<Item = T> + '_ {
        self.rx.try_iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue() {
        let queue = Queue::new();
        let tx = queue.tx();
        for id in 1 .. 4u32 {
            tx.send(id).unwrap();
        }
        assert_eq!(vec![1, 2, 3], queue.drain().collect::<Vec<_>>());
        assert_eq!(0, queue.drain().count());
    }
}
