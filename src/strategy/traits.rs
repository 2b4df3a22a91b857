// src/strategy/traits.rs

use crate::model::machine::MachinePool;
use crate::model::order::Order;
use std::fmt::Debug;

/// Decides which machine produces each of the day's orders.
///
/// We require `Debug` so policies can be logged, and `Send` + `Sync`
/// so whole runs can later be replicated across threads.
pub trait AssignmentPolicy: Debug + Send + Sync {
    /// Places the day's batch onto the pool.
    ///
    /// Every order must leave in either the produced or the lost state.
    ///
    /// # Arguments
    /// * `orders` - Today's batch, in generation order.
    /// * `pool` - The fleet, already reset for the day.
    ///
    /// # Returns
    /// The number of orders no machine could take.
    fn assign(&mut self, orders: &mut [Order], pool: &mut MachinePool) -> usize;
}
