use statemaker::{io, Simulation, SimulationConfig};

/// Two "states" of three units each in a row: 01xxx leans first party, 02xxx second.
const MAP: &str = r#"{
    "units": [
        {"id": "01001", "weight": 100},
        {"id": "01003", "weight": 100},
        {"id": "01005", "weight": 100},
        {"id": "02001", "weight": 100},
        {"id": "02003", "weight": 100},
        {"id": "02005", "weight": 100}
    ],
    "neighbors": [[1], [0, 2], [1, 3], [2, 4], [3, 5], [4]]
}"#;

const RESULTS: &str = "\
GEOID,d2016,r2016,pop
01001,80,20,100
01003,70,30,100
01005,60,40,100
02001,40,60,100
02003,30,70,100
02005,20,80,100
";

fn map() -> statemaker::Map {
    let mut map = io::json::read_map_str(MAP).unwrap();
    let df = io::csv::read_csv_bytes(RESULTS.as_bytes()).unwrap();
    assert_eq!(io::csv::attach_data(&mut map, &df, "GEOID").unwrap(), 6);
    map
}

#[test]
fn frozen_states_decide_every_run() {
    let config = SimulationConfig::from_json_str(r#"{
        "regions": 0,
        "reps": 4,
        "sims": 5,
        "seed": 1,
        "elections": ["2016"],
        "frozen": [["01001", "01003", "01005"], ["02001", "02003", "02005"]]
    }"#).unwrap();
    let simulation = Simulation::new(map(), config).unwrap();

    let summary = simulation.run_and_summarize().unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].runs, 5);
    assert_eq!(summary[0].ties, 5);
    // Two seats each plus two senate votes.
    assert_eq!(summary[0].mean_votes, 4.0);
    assert_eq!(summary[0].mean_regions, 1.0);
}

#[test]
fn one_region_per_prefix_group() {
    let config = SimulationConfig {
        one_per_group: true,
        reps: 2,
        sims: 10,
        seed: Some(3),
        elections: vec!["2016".into()],
        ..Default::default()
    };
    let simulation = Simulation::new(map(), config).unwrap();

    for run in simulation.run().unwrap() {
        assert_eq!(run.region_sizes.len(), 2);
        assert_eq!(run.region_sizes.iter().sum::<usize>(), 6);
        assert_eq!(run.orphans, 0);
        let outcome = &run.elections[0];
        assert!(outcome.votes[0] + outcome.votes[1] <= 6);
    }
}

#[test]
fn divide_once_is_seeded() {
    use rand::{rngs::StdRng, SeedableRng};

    let config = SimulationConfig { regions: 2, sims: 1, elections: vec!["2016".into()], ..Default::default() };
    let simulation = Simulation::new(map(), config).unwrap();

    let first = simulation.divide_once(&mut StdRng::seed_from_u64(9)).unwrap().assignments();
    let second = simulation.divide_once(&mut StdRng::seed_from_u64(9)).unwrap().assignments();
    assert_eq!(first, second);
    assert_eq!(first.iter().flatten().count(), 6);
}
