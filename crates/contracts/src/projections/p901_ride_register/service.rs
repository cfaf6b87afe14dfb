use super::dto::{EfficiencyPoint, FuelStatistics, RideFilter, RideTotals};
use crate::domain::a001_motorcycle::MotorcycleId;
use crate::domain::a004_ride_log::RideLog;
use std::collections::HashMap;

impl RideFilter {
    pub fn matches(&self, ride: &RideLog) -> bool {
        if let Some(motorcycle_id) = self.motorcycle_id {
            if ride.motorcycle_id != motorcycle_id {
                return false;
            }
        }
        if let Some(from) = self.from {
            if ride.start_date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if ride.start_date > to {
                return false;
            }
        }
        true
    }

    /// Keep matching rides in their incoming order
    pub fn apply(&self, rides: &[RideLog]) -> Vec<RideLog> {
        rides
            .iter()
            .filter(|ride| self.matches(ride))
            .cloned()
            .collect()
    }
}

/// Summarize a ride list. Absent distances, fuel amounts and costs count
/// as zero; rides without a positive efficiency stay out of the mean. The
/// most common trip type is the mode, with ties going to the type seen
/// first.
pub fn build_ride_totals(rides: &[RideLog]) -> RideTotals {
    let total_distance: f64 = rides.iter().map(|ride| ride.distance.unwrap_or(0.0)).sum();
    let total_fuel: f64 = rides
        .iter()
        .map(|ride| ride.fuel_consumed.unwrap_or(0.0))
        .sum();
    let total_fuel_cost: f64 = rides
        .iter()
        .map(|ride| ride.fuel_cost.unwrap_or(0.0))
        .sum();

    let efficiencies: Vec<f64> = rides
        .iter()
        .filter_map(|ride| ride.fuel_efficiency.filter(|value| *value > 0.0))
        .collect();
    let average_efficiency = if efficiencies.is_empty() {
        0.0
    } else {
        efficiencies.iter().sum::<f64>() / efficiencies.len() as f64
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut seen_order: Vec<&str> = Vec::new();
    for ride in rides {
        if let Some(trip_type) = ride.trip_type.as_deref() {
            if trip_type.is_empty() {
                continue;
            }
            let count = counts.entry(trip_type).or_insert(0);
            if *count == 0 {
                seen_order.push(trip_type);
            }
            *count += 1;
        }
    }
    // Strictly-greater comparison lets the first-seen type keep ties
    let mut most_common_trip_type: Option<String> = None;
    let mut best = 0;
    for trip_type in seen_order {
        let count = counts.get(trip_type).copied().unwrap_or(0);
        if count > best {
            best = count;
            most_common_trip_type = Some(trip_type.to_string());
        }
    }

    RideTotals {
        total_rides: rides.len(),
        total_distance,
        total_fuel,
        total_fuel_cost,
        average_efficiency,
        most_common_trip_type,
    }
}

/// Fuel statistics over rides that burned fuel (`fuel_consumed` present
/// and positive), optionally narrowed to one motorcycle. The average
/// price is the mean of each fill's own price per liter; fills without a
/// cost stay out of it. Best and worst keep the first ride seen when
/// efficiencies are equal.
pub fn build_fuel_statistics(
    rides: &[RideLog],
    motorcycle_id: Option<MotorcycleId>,
) -> FuelStatistics {
    let fueled: Vec<&RideLog> = rides
        .iter()
        .filter(|ride| ride.fuel_consumed.map(|fuel| fuel > 0.0).unwrap_or(false))
        .filter(|ride| motorcycle_id.map_or(true, |id| ride.motorcycle_id == id))
        .collect();

    if fueled.is_empty() {
        return FuelStatistics::default();
    }

    let total_fuel_consumed: f64 = fueled
        .iter()
        .map(|ride| ride.fuel_consumed.unwrap_or(0.0))
        .sum();
    let total_fuel_cost: f64 = fueled
        .iter()
        .map(|ride| ride.fuel_cost.unwrap_or(0.0))
        .sum();

    let prices: Vec<f64> = fueled
        .iter()
        .filter_map(|ride| match (ride.fuel_consumed, ride.fuel_cost) {
            (Some(fuel), Some(cost)) if cost > 0.0 => Some(cost / fuel),
            _ => None,
        })
        .collect();
    let average_price_per_liter = if prices.is_empty() {
        0.0
    } else {
        prices.iter().sum::<f64>() / prices.len() as f64
    };

    let mut best: Option<(f64, &RideLog)> = None;
    let mut worst: Option<(f64, &RideLog)> = None;
    let mut efficiency_sum = 0.0;
    let mut efficiency_count = 0usize;
    for &ride in &fueled {
        let efficiency = match ride.fuel_efficiency {
            Some(value) if value > 0.0 => value,
            _ => continue,
        };
        efficiency_sum += efficiency;
        efficiency_count += 1;
        // Strict comparisons keep the first ride on ties
        if best.map_or(true, |(value, _)| efficiency > value) {
            best = Some((efficiency, ride));
        }
        if worst.map_or(true, |(value, _)| efficiency < value) {
            worst = Some((efficiency, ride));
        }
    }
    let to_point = |(value, ride): (f64, &RideLog)| EfficiencyPoint {
        value,
        date: ride.start_date,
        trip_type: ride.trip_type.clone(),
    };

    FuelStatistics {
        total_fuel_consumed,
        total_fuel_cost,
        average_price_per_liter,
        best_efficiency: best.map(to_point),
        worst_efficiency: worst.map(to_point),
        average_efficiency: if efficiency_count == 0 {
            0.0
        } else {
            efficiency_sum / efficiency_count as f64
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_motorcycle::MotorcycleId;
    use crate::domain::a004_ride_log::RideLogId;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ride(id: i64, motorcycle_id: i64, start: NaiveDate) -> RideLog {
        RideLog::new_with_id(
            RideLogId::new(id),
            MotorcycleId::new(motorcycle_id),
            start,
            10000.0,
        )
    }

    #[test]
    fn test_filter_date_range_inclusive() {
        let rides = vec![
            ride(1, 1, day(2025, 5, 31)),
            ride(2, 1, day(2025, 6, 1)),
            ride(3, 1, day(2025, 6, 30)),
            ride(4, 1, day(2025, 7, 1)),
            ride(5, 2, day(2025, 6, 15)),
        ];
        let filter = RideFilter {
            motorcycle_id: Some(MotorcycleId::new(1)),
            from: Some(day(2025, 6, 1)),
            to: Some(day(2025, 6, 30)),
        };
        let kept = filter.apply(&rides);
        let ids: Vec<i64> = kept.iter().map(|r| r.base.id.value()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_totals_sums_and_efficiency_mean() {
        let mut commute = ride(1, 1, day(2025, 6, 1));
        commute.distance = Some(180.0);
        commute.fuel_consumed = Some(9.0);
        commute.fuel_cost = Some(16.25);
        commute.fuel_efficiency = Some(20.0);
        let mut tour = ride(2, 1, day(2025, 6, 8));
        tour.distance = Some(412.5);
        tour.fuel_consumed = Some(16.5);
        tour.fuel_cost = Some(30.0);
        tour.fuel_efficiency = Some(25.0);
        // No measurements at all
        let bare = ride(3, 1, day(2025, 6, 10));
        // Stalled at the gate, zero efficiency stays out of the mean
        let mut stalled = ride(4, 1, day(2025, 6, 11));
        stalled.fuel_consumed = Some(0.5);
        stalled.fuel_efficiency = Some(0.0);

        let totals = build_ride_totals(&[commute, tour, bare, stalled]);
        assert_eq!(totals.total_rides, 4);
        assert_eq!(totals.total_distance, 592.5);
        assert_eq!(totals.total_fuel, 26.0);
        assert_eq!(totals.total_fuel_cost, 46.25);
        assert_eq!(totals.average_efficiency, 22.5);
    }

    #[test]
    fn test_most_common_trip_type_mode_with_tie() {
        let mut first = ride(1, 1, day(2025, 6, 1));
        first.trip_type = Some("commute".to_string());
        let mut second = ride(2, 1, day(2025, 6, 2));
        second.trip_type = Some("touring".to_string());
        let mut third = ride(3, 1, day(2025, 6, 3));
        third.trip_type = Some("touring".to_string());
        let mut fourth = ride(4, 1, day(2025, 6, 4));
        fourth.trip_type = Some("commute".to_string());

        // Two against two, the type seen first wins
        let totals = build_ride_totals(&[first, second, third, fourth]);
        assert_eq!(totals.most_common_trip_type.as_deref(), Some("commute"));
    }

    #[test]
    fn test_totals_empty() {
        let totals = build_ride_totals(&[]);
        assert_eq!(totals.total_rides, 0);
        assert_eq!(totals.total_distance, 0.0);
        assert_eq!(totals.average_efficiency, 0.0);
        assert_eq!(totals.most_common_trip_type, None);
    }

    #[test]
    fn test_fuel_statistics_price_mean_and_extremes() {
        let mut commute = ride(1, 1, day(2025, 6, 1));
        commute.fuel_consumed = Some(10.0);
        commute.fuel_cost = Some(20.0); // 2.00 per liter
        commute.fuel_efficiency = Some(20.0);
        commute.trip_type = Some("commute".to_string());
        let mut tour = ride(2, 1, day(2025, 6, 8));
        tour.fuel_consumed = Some(20.0);
        tour.fuel_cost = Some(30.0); // 1.50 per liter
        tour.fuel_efficiency = Some(26.0);
        tour.trip_type = Some("touring".to_string());
        // Same efficiency as the tour, no cost recorded
        let mut track = ride(3, 1, day(2025, 6, 10));
        track.fuel_consumed = Some(4.0);
        track.fuel_efficiency = Some(26.0);
        track.trip_type = Some("track".to_string());
        // Never fueled, stays out entirely
        let mut pushed = ride(4, 1, day(2025, 6, 12));
        pushed.fuel_efficiency = Some(90.0);

        let stats = build_fuel_statistics(&[commute, tour, track, pushed], None);
        assert_eq!(stats.total_fuel_consumed, 34.0);
        assert_eq!(stats.total_fuel_cost, 50.0);
        // Mean of the two priced fills, not 50 / 34
        assert_eq!(stats.average_price_per_liter, 1.75);
        assert_eq!(stats.average_efficiency, 24.0);

        let best = stats.best_efficiency.unwrap();
        assert_eq!(best.value, 26.0);
        assert_eq!(best.date, day(2025, 6, 8)); // tour beats track on the tie
        assert_eq!(best.trip_type.as_deref(), Some("touring"));
        let worst = stats.worst_efficiency.unwrap();
        assert_eq!(worst.value, 20.0);
        assert_eq!(worst.date, day(2025, 6, 1));
    }

    #[test]
    fn test_fuel_statistics_narrows_by_motorcycle() {
        let mut first = ride(1, 1, day(2025, 6, 1));
        first.fuel_consumed = Some(10.0);
        first.fuel_cost = Some(15.0);
        let mut second = ride(2, 2, day(2025, 6, 2));
        second.fuel_consumed = Some(8.0);
        second.fuel_cost = Some(16.0);
        // Free fill-up, excluded from the price mean but not the totals
        let mut third = ride(3, 2, day(2025, 6, 3));
        third.fuel_consumed = Some(2.0);
        third.fuel_cost = Some(0.0);

        let rides = vec![first, second, third];
        let stats = build_fuel_statistics(&rides, Some(MotorcycleId::new(2)));
        assert_eq!(stats.total_fuel_consumed, 10.0);
        assert_eq!(stats.total_fuel_cost, 16.0);
        assert_eq!(stats.average_price_per_liter, 2.0);

        let empty = build_fuel_statistics(&rides, Some(MotorcycleId::new(3)));
        assert_eq!(empty.total_fuel_consumed, 0.0);
        assert_eq!(empty.average_price_per_liter, 0.0);
        assert!(empty.best_efficiency.is_none());
        assert!(empty.worst_efficiency.is_none());
    }
}
