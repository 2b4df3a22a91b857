// src/model/order.rs

/// Lifecycle of a single customer order within its generation day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    Pending,
    Produced,
    Lost,
}

#[derive(Debug, Clone)]
pub struct Order {
    /// Sequence number within the day's batch.
    pub id: usize,
    pub state: OrderState,
}

impl Order {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            state: OrderState::Pending,
        }
    }

    /// Builds the day's batch of pending orders, numbered from zero.
    pub fn batch(count: usize) -> Vec<Order> {
        (0..count).map(Order::new).collect()
    }
}
