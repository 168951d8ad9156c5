//! Huntington-Hill (equal proportions) apportionment.

use crate::error::{Error, Result};

/// Priority of a region holding `seats` seats for its next seat.
#[inline]
fn priority(weight: f64, seats: u32) -> f64 {
    let seats = seats as f64;
    weight / (seats * (seats + 1.0)).sqrt()
}

/// Allocate `seats` indivisible seats across regions in proportion to their weights.
///
/// Every region starts with one seat; each remaining seat goes to the region with the
/// highest priority `w / sqrt(c (c + 1))`, where `c` is its current seat count.
/// Equal priorities go to the region with the lowest index.
pub fn apportion(weights: &[f64], seats: u32) -> Result<Vec<u32>> {
    if let Some((index, &weight)) = weights.iter().enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(Error::InvalidWeight { index, weight })
    }
    if (seats as usize) < weights.len() || (weights.is_empty() && seats > 0) {
        return Err(Error::InsufficientSeats { seats, regions: weights.len() })
    }

    let mut allocations = vec![1u32; weights.len()];
    for _ in weights.len()..seats as usize {
        let top = (1..weights.len()).fold(0, |best, i| {
            if priority(weights[i], allocations[i]) > priority(weights[best], allocations[best]) { i }
            else { best }
        });
        allocations[top] += 1;
    }

    Ok(allocations)
}

/// Electoral votes per region: apportioned house seats plus two senate seats each.
pub fn electoral_votes(weights: &[f64], seats: u32) -> Result<Vec<u32>> {
    Ok(apportion(weights, seats)?.into_iter().map(|house| house + 2).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_example_follows_priority_sequence() {
        // Seat 4: 70.7 vs 35.4 vs 17.7 -> region 0.
        assert_eq!(apportion(&[100.0, 50.0, 25.0], 4).unwrap(), vec![2, 1, 1]);
        // Seat 5: 40.8 vs 35.4 -> region 0.
        assert_eq!(apportion(&[100.0, 50.0, 25.0], 5).unwrap(), vec![3, 1, 1]);
        // Seat 6: 28.9 vs 35.4 -> region 1.
        assert_eq!(apportion(&[100.0, 50.0, 25.0], 6).unwrap(), vec![3, 2, 1]);
    }

    #[test]
    fn minimum_is_one_seat_each() {
        assert_eq!(apportion(&[1e9, 1.0, 0.0], 3).unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        assert_eq!(apportion(&[10.0, 10.0], 3).unwrap(), vec![2, 1]);
        assert_eq!(apportion(&[5.0, 10.0, 10.0], 4).unwrap(), vec![1, 2, 1]);
        assert_eq!(apportion(&[0.0, 0.0, 0.0], 5).unwrap(), vec![3, 1, 1]);
    }

    #[test]
    fn too_few_seats_is_an_error() {
        let err = apportion(&[1.0, 2.0, 3.0], 2).unwrap_err();
        assert_eq!(err, Error::InsufficientSeats { seats: 2, regions: 3 });

        let err = apportion(&[], 1).unwrap_err();
        assert_eq!(err, Error::InsufficientSeats { seats: 1, regions: 0 });
    }

    #[test]
    fn empty_input_with_no_seats_is_empty() {
        assert_eq!(apportion(&[], 0).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn invalid_weights_are_rejected() {
        assert_eq!(
            apportion(&[1.0, -2.0], 4).unwrap_err(),
            Error::InvalidWeight { index: 1, weight: -2.0 },
        );
        assert!(matches!(apportion(&[f64::NAN], 4), Err(Error::InvalidWeight { index: 0, .. })));
        assert!(apportion(&[f64::INFINITY], 4).is_err());
    }

    #[test]
    fn matches_2010_style_house_proportions() {
        // Four regions with 40/30/20/10 shares of a 100 seat house.
        let seats = apportion(&[4_000_000.0, 3_000_000.0, 2_000_000.0, 1_000_000.0], 100).unwrap();
        assert_eq!(seats.iter().sum::<u32>(), 100);
        assert_eq!(seats, vec![40, 30, 20, 10]);
    }

    #[test]
    fn electoral_votes_add_two_per_region() {
        assert_eq!(electoral_votes(&[100.0, 50.0, 25.0], 6).unwrap(), vec![5, 4, 3]);
        assert!(electoral_votes(&[1.0, 1.0], 1).is_err());
    }
}
