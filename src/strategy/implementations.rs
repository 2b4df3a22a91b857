// src/strategy/implementations.rs

use crate::model::machine::MachinePool;
use crate::model::order::{Order, OrderState};
use crate::strategy::traits::AssignmentPolicy;

// =========================================================================
// First-Fit Policy (Fixed Priority)
// =========================================================================

/// Greedy first-fit placement.
///
/// Each order is offered to the machines in ascending id order and goes to
/// the first one that accepts it. No backtracking and no load balancing, so
/// machine 0 always fills up first.
#[derive(Debug, Clone, Default)]
pub struct FirstFitPolicy;

impl FirstFitPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl AssignmentPolicy for FirstFitPolicy {
    fn assign(&mut self, orders: &mut [Order], pool: &mut MachinePool) -> usize {
        let mut lost = 0;
        for order in orders.iter_mut() {
            let placed = pool
                .machines_mut()
                .iter_mut()
                .any(|machine| machine.try_accept(order));
            if !placed {
                order.state = OrderState::Lost;
                lost += 1;
            }
        }
        lost
    }
}
