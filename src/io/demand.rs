// src/io/demand.rs

use crate::error::SimulationError;
use crate::model::calendar::Regime;
use rand::Rng;
use rand_distr::{Binomial, Distribution};
use serde::Serialize;

/// Share of visitors who open a publication, drawn uniformly per day.
const CLICK_THROUGH_MIN: f64 = 0.001;
const CLICK_THROUGH_MAX: f64 = 0.005;
/// Share of publication views that end in a sale.
const SALE_CONVERSION_RATE: f64 = 0.02;

/// One point of the daily visit chart.
#[derive(Debug, Clone, Serialize)]
pub struct VisitSample {
    pub day: usize,
    pub visits: u64,
}

/// Samples daily visits and turns them into an order count.
///
/// The three visit distributions depend only on the calendar, so they are
/// built once and reused for every draw.
#[derive(Debug, Clone)]
pub struct DemandGenerator {
    special_event: Binomial,
    year_end: Binomial,
    normal: Binomial,
}

impl DemandGenerator {
    pub fn new() -> Result<Self, SimulationError> {
        Ok(Self {
            special_event: binomial_for(Regime::SpecialEvent)?,
            year_end: binomial_for(Regime::YearEnd)?,
            normal: binomial_for(Regime::Normal)?,
        })
    }

    /// Draws the number of visits for a day from its regime's distribution.
    pub fn sample_visits<R: Rng>(&self, day: usize, rng: &mut R) -> u64 {
        let distribution = match Regime::for_day(day) {
            Regime::SpecialEvent => &self.special_event,
            Regime::YearEnd => &self.year_end,
            Regime::Normal => &self.normal,
        };
        distribution.sample(rng)
    }

    /// Draws today's order count.
    ///
    /// Visits, click-through and conversion are all sampled fresh, so two
    /// calls for the same day generally disagree.
    pub fn generate_orders<R: Rng>(&self, day: usize, rng: &mut R) -> usize {
        let visits = self.sample_visits(day, rng);
        let click_through = rng.gen_range(CLICK_THROUGH_MIN..CLICK_THROUGH_MAX);
        let conversions = click_through * visits as f64;
        // Truncation toward zero, never negative
        (conversions * SALE_CONVERSION_RATE) as usize
    }

    /// Redraws a visit count for every day of the horizon, for charting.
    ///
    /// These draws are independent from the ones the simulation consumed.
    pub fn visit_series<R: Rng>(&self, horizon: usize, rng: &mut R) -> Vec<VisitSample> {
        (0..horizon)
            .map(|day| VisitSample {
                day,
                visits: self.sample_visits(day, rng),
            })
            .collect()
    }
}

fn binomial_for(regime: Regime) -> Result<Binomial, SimulationError> {
    let profile = regime.visit_profile();
    Ok(Binomial::new(profile.trials, profile.probability)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_visits_stay_near_regime_mean() {
        let generator = DemandGenerator::new().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        // Means: 6.0M, 4.0M and 3.064M, standard deviations all below 1.1k
        let special = generator.sample_visits(0, &mut rng);
        let year_end = generator.sample_visits(340, &mut rng);
        let normal = generator.sample_visits(50, &mut rng);

        assert!((5_990_000..6_010_000).contains(&special));
        assert!((3_990_000..4_010_000).contains(&year_end));
        assert!((3_054_000..3_074_000).contains(&normal));
    }

    #[test]
    fn test_orders_are_bounded_by_rates() {
        let generator = DemandGenerator::new().unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        for day in [0, 1, 45, 91, 181, 250, 334, 364] {
            for _ in 0..200 {
                let orders = generator.generate_orders(day, &mut rng);
                let max_visits = Regime::for_day(day).visit_profile().trials as f64;
                let ceiling = (max_visits * CLICK_THROUGH_MAX * SALE_CONVERSION_RATE) as usize;
                assert!(orders <= ceiling);
            }
        }
    }

    #[test]
    fn test_normal_day_order_range() {
        let generator = DemandGenerator::new().unwrap();
        let mut rng = StdRng::seed_from_u64(13);

        // ~3.06M visits * [0.001, 0.005) * 0.02 lands in [61, 307)
        for _ in 0..500 {
            let orders = generator.generate_orders(10, &mut rng);
            assert!((55..315).contains(&orders), "orders = {}", orders);
        }
    }

    #[test]
    fn test_same_day_redraws_differ() {
        let generator = DemandGenerator::new().unwrap();
        let mut rng = StdRng::seed_from_u64(17);

        let draws: Vec<usize> = (0..20).map(|_| generator.generate_orders(0, &mut rng)).collect();
        assert!(draws.iter().any(|&d| d != draws[0]));
    }

    #[test]
    fn test_visit_series_covers_horizon() {
        let generator = DemandGenerator::new().unwrap();
        let mut rng = StdRng::seed_from_u64(19);

        let series = generator.visit_series(365, &mut rng);
        assert_eq!(series.len(), 365);
        assert!(series.iter().enumerate().all(|(i, s)| s.day == i));
        // Special-event days are clearly above a normal day
        assert!(series[0].visits > series[10].visits);
    }
}
