//! Bounded queue for player intents gathered between simulation steps.
//!
//! Key repeat can deliver the same intent many times inside one 16 ms frame;
//! consecutive duplicates are coalesced on push so a burst collapses to one
//! entry. When the queue is full the newest intent overwrites the tail
//! rather than growing without bound.

use arrayvec::ArrayVec;

const QUEUE_CAP: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct IntentQueue<I: PartialEq> {
    items: ArrayVec<I, QUEUE_CAP>,
}

impl<I: PartialEq> IntentQueue<I> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn push(&mut self, intent: I) {
        if self.items.last() == Some(&intent) {
            return;
        }
        if self.items.is_full() {
            let last = self.items.len() - 1;
            self.items[last] = intent;
        } else {
            self.items.push(intent);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drains the queue in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = I> + '_ {
        self.items.drain(..)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_arcade_types::{Direction, SnakeIntent};

    #[test]
    fn preserves_arrival_order() {
        let mut queue = IntentQueue::new();
        queue.push(SnakeIntent::Turn(Direction::Up));
        queue.push(SnakeIntent::Turn(Direction::Left));
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                SnakeIntent::Turn(Direction::Up),
                SnakeIntent::Turn(Direction::Left)
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn consecutive_duplicates_collapse() {
        let mut queue = IntentQueue::new();
        for _ in 0..10 {
            queue.push(SnakeIntent::Turn(Direction::Up));
        }
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn alternating_intents_are_kept() {
        let mut queue = IntentQueue::new();
        queue.push(SnakeIntent::Turn(Direction::Up));
        queue.push(SnakeIntent::Turn(Direction::Left));
        queue.push(SnakeIntent::Turn(Direction::Up));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn overflow_overwrites_the_tail() {
        let mut queue = IntentQueue::new();
        for i in 0..QUEUE_CAP {
            let dir = if i % 2 == 0 {
                Direction::Up
            } else {
                Direction::Down
            };
            queue.push(SnakeIntent::Turn(dir));
        }
        assert_eq!(queue.len(), QUEUE_CAP);
        queue.push(SnakeIntent::Turn(Direction::Left));
        assert_eq!(queue.len(), QUEUE_CAP);
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained[QUEUE_CAP - 1], SnakeIntent::Turn(Direction::Left));
    }
}
