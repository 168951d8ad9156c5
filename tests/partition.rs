use rand::{rngs::StdRng, SeedableRng};
use statemaker::{DivideOptions, Map, RegionPartitioner, ScaledAcceptance, Unit};

/// A `size` x `size` grid with 4-neighborhood adjacency and unit weights.
fn grid(size: usize) -> Map {
    let units = (0..size * size).map(|i| Unit::new(format!("{:02}{:03}", i / size, i), 1.0)).collect();
    let neighbors = (0..size * size).map(|i| {
        let (x, y) = (i % size, i / size);
        let mut list = vec![];
        if x > 0 { list.push(i - 1) }
        if x + 1 < size { list.push(i + 1) }
        if y > 0 { list.push(i - size) }
        if y + 1 < size { list.push(i + size) }
        list
    }).collect::<Vec<_>>();
    Map::new(units, &neighbors).unwrap()
}

#[test]
fn divide_covers_every_unit_exactly_once() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut partitioner = RegionPartitioner::new(grid(8), ScaledAcceptance::default());
        let created = partitioner.divide(&[0, 7, 56, 63, 27], DivideOptions::default(), &mut rng).unwrap();
        assert_eq!(created, vec![0, 1, 2, 3, 4]);

        assert!(partitioner.unassigned().is_empty());
        assert_eq!(partitioner.regions().map(<[usize]>::len).sum::<usize>(), 64);
        assert!(partitioner.assignments().iter().all(Option::is_some));
        assert_eq!(partitioner.weights().iter().sum::<f64>(), 64.0);
    }
}

#[test]
fn frozen_region_is_untouched_by_growth() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut partitioner = RegionPartitioner::new(grid(6), |_: usize, _: f64| 0.0);
    let frozen = partitioner.create_region(&[0, 1, 6]).unwrap();
    partitioner.freeze(frozen).unwrap();

    partitioner.divide(&[35, 20], DivideOptions::default(), &mut rng).unwrap();

    assert!(partitioner.is_frozen(frozen).unwrap());
    assert_eq!(partitioner.region(frozen).unwrap(), &[0, 1, 6]);
    assert_eq!(partitioner.weight_of(frozen).unwrap(), 3.0);
    assert!(partitioner.unassigned().is_empty());
}

#[test]
fn same_seed_same_partition() {
    let divide = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut partitioner = RegionPartitioner::new(grid(10), ScaledAcceptance::default());
        partitioner.divide(&[5, 50, 99], DivideOptions::default(), &mut rng).unwrap();
        partitioner.assignments()
    };
    assert_eq!(divide(42), divide(42));
}

#[test]
fn invalid_seed_leaves_partition_untouched() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut partitioner = RegionPartitioner::new(grid(3), ScaledAcceptance::default());
    assert!(partitioner.divide(&[0, 9], DivideOptions::default(), &mut rng).is_err());
    assert_eq!(partitioner.num_regions(), 0);
    assert_eq!(partitioner.unassigned().len(), 9);
}
