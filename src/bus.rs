//! Named-topic publish/subscribe channel.
//!
//! The only coupling point between the gesture engine and the downstream
//! action dispatcher. Delivery is synchronous and follows subscription order;
//! publishing to a topic nobody listens to does nothing.

use crate::input::{GestureEvent, Topic};
use std::collections::HashMap;

/// Identifies a subscription for [`EventBus::unsubscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<E> = Box<dyn FnMut(&GestureEvent<'_, E>)>;

struct Subscriber<E> {
    id: SubscriptionId,
    handler: Handler<E>,
}

pub struct EventBus<E> {
    topics: HashMap<Topic, Vec<Subscriber<E>>>,
    next_id: u64,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            topics: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn subscribe<F>(&mut self, topic: Topic, handler: F) -> SubscriptionId
    where
        F: FnMut(&GestureEvent<'_, E>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.topics.entry(topic).or_default().push(Subscriber {
            id,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for subscribers in self.topics.values_mut() {
            if let Some(index) = subscribers.iter().position(|s| s.id == id) {
                subscribers.remove(index);
                return true;
            }
        }
        false
    }

    pub fn publish(&mut self, event: &GestureEvent<'_, E>) {
        let topic = event.topic();
        let Some(subscribers) = self.topics.get_mut(&topic) else {
            return;
        };
        for subscriber in subscribers.iter_mut() {
            (subscriber.handler)(event);
        }
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.topics.get(&topic).map_or(0, Vec::len)
    }

    pub fn clear(&mut self) {
        self.topics.clear();
    }
}
