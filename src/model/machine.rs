// src/model/machine.rs

use crate::model::order::{Order, OrderState};
use rand::Rng;

/// A production unit with a fixed daily capacity.
#[derive(Debug, Clone)]
pub struct Machine {
    // Identity
    pub id: usize,
    pub capacity: usize,

    // State Variables
    pub operational: bool,
    pub lifetime_failures: u64,

    // Ids of the orders accepted today, in acceptance order
    accepted: Vec<usize>,
}

impl Machine {
    pub fn new(id: usize, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            operational: true,
            lifetime_failures: 0,
            accepted: Vec::new(),
        }
    }

    /// Start of day: the machine is repaired and its queue emptied.
    pub fn reset(&mut self) {
        self.operational = true;
        self.accepted.clear();
    }

    /// Accepts the order if the machine is running and has room left.
    ///
    /// On success the order is marked produced. On failure nothing changes.
    pub fn try_accept(&mut self, order: &mut Order) -> bool {
        if self.operational && self.accepted.len() < self.capacity {
            self.accepted.push(order.id);
            order.state = OrderState::Produced;
            return true;
        }
        false
    }

    /// End of shift failure check.
    ///
    /// Orders already accepted stay produced; only the flag and the
    /// lifetime counter change.
    pub fn roll_failure<R: Rng>(&mut self, rng: &mut R, probability: f64) -> bool {
        if rng.gen_bool(probability) {
            self.operational = false;
            self.lifetime_failures += 1;
            return true;
        }
        false
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    #[cfg(test)]
    pub fn accepted_orders(&self) -> &[usize] {
        &self.accepted
    }
}

/// The fleet, iterated in ascending id order. That order is the assignment priority.
#[derive(Debug, Clone)]
pub struct MachinePool {
    machines: Vec<Machine>,
}

impl MachinePool {
    pub fn new(machine_count: usize, capacity: usize) -> Self {
        Self {
            machines: (0..machine_count)
                .map(|id| Machine::new(id, capacity))
                .collect(),
        }
    }

    pub fn reset_all(&mut self) {
        for machine in &mut self.machines {
            machine.reset();
        }
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn machines_mut(&mut self) -> &mut [Machine] {
        &mut self.machines
    }

    pub fn total_failures(&self) -> u64 {
        self.machines.iter().map(|m| m.lifetime_failures).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_accept_until_capacity() {
        let mut machine = Machine::new(0, 2);
        let mut orders = Order::batch(3);

        assert!(machine.try_accept(&mut orders[0]));
        assert!(machine.try_accept(&mut orders[1]));
        assert!(!machine.try_accept(&mut orders[2]));

        assert_eq!(machine.accepted_orders(), &[0, 1]);
        assert_eq!(orders[2].state, OrderState::Pending);
    }

    #[test]
    fn test_unbounded_capacity_pool() {
        let mut pool = MachinePool::new(2, usize::MAX);
        let mut orders = Order::batch(3);
        for order in &mut orders {
            assert!(pool.machines_mut()[0].try_accept(order));
        }
        assert_eq!(pool.machines()[0].accepted_count(), 3);
        assert_eq!(pool.machines()[1].accepted_count(), 0);
    }

    #[test]
    fn test_zero_capacity_accepts_nothing() {
        let mut machine = Machine::new(0, 0);
        let mut order = Order::new(0);
        assert!(!machine.try_accept(&mut order));
        assert_eq!(order.state, OrderState::Pending);
    }

    #[test]
    fn test_failed_machine_rejects_work() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut machine = Machine::new(0, 5);
        let mut orders = Order::batch(2);

        assert!(machine.try_accept(&mut orders[0]));
        assert!(machine.roll_failure(&mut rng, 1.0));

        // Work taken before the breakdown is kept
        assert_eq!(orders[0].state, OrderState::Produced);
        assert_eq!(machine.accepted_count(), 1);
        assert!(!machine.try_accept(&mut orders[1]));
        assert_eq!(machine.lifetime_failures, 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut machine = Machine::new(3, 4);
        let mut orders = Order::batch(3);
        for order in &mut orders {
            machine.try_accept(order);
        }
        machine.roll_failure(&mut rng, 1.0);

        machine.reset();
        let once = (machine.operational, machine.accepted_count());
        machine.reset();
        machine.reset();
        assert_eq!((machine.operational, machine.accepted_count()), once);
        assert_eq!(once, (true, 0));
        // Repairs do not erase the failure history
        assert_eq!(machine.lifetime_failures, 1);
    }

    #[test]
    fn test_zero_probability_never_fails() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut machine = Machine::new(0, 1);
        for _ in 0..1000 {
            assert!(!machine.roll_failure(&mut rng, 0.0));
        }
        assert_eq!(machine.lifetime_failures, 0);
    }

    #[test]
    fn test_capacity_holds_across_days() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut pool = MachinePool::new(3, 7);
        for _ in 0..50 {
            pool.reset_all();
            let mut orders = Order::batch(40);
            for order in &mut orders {
                for machine in pool.machines_mut() {
                    if machine.try_accept(order) {
                        break;
                    }
                }
            }
            for machine in pool.machines_mut() {
                assert!(machine.accepted_count() <= machine.capacity);
                machine.roll_failure(&mut rng, 0.5);
            }
        }
        assert!(pool.total_failures() > 0);
    }
}
