//! Test suite for the episode driver and evaluation pipeline
//! Drives configured games end to end with tree and baseline policies

use std::f64::consts::PI;

use pursuit::{
    CarConfig, ConstantPolicy, ExperimentConfig, Game, PursuitGame, PursuitState, TreeBuilder,
    TreePolicy,
    pipeline::{EvaluationSeries, MetricsObserver, PAYOFF_METRIC, SeriesConfig, run_episode},
    ports::Policy,
};

fn experiment_config(evader_x: f64, game_duration: u32) -> ExperimentConfig {
    ExperimentConfig {
        pursuer: CarConfig {
            speed: 1.0,
            turn_radius: 2.0,
            x: 0.0,
            y: 0.0,
            heading: 0.0,
        },
        evader: CarConfig {
            speed: 1.0,
            turn_radius: 2.0,
            x: evader_x,
            y: 0.0,
            heading: PI,
        },
        capture_radius: 1.0,
        game_duration,
    }
}

fn straight_policies() -> (ConstantPolicy, ConstantPolicy) {
    (
        ConstantPolicy::straight("pursuer"),
        ConstantPolicy::straight("evader"),
    )
}

mod episode_driver {
    use super::*;

    #[test]
    fn episodes_terminate_within_the_configured_duration() {
        for (evader_x, duration) in [(10.0, 100), (1000.0, 100), (3.0, 7), (0.0, 1)] {
            let game = PursuitGame::from_config(&experiment_config(evader_x, duration)).unwrap();
            let (mut pursuer, mut evader) = straight_policies();
            let mut policies: Vec<&mut dyn Policy<PursuitState, f64>> =
                vec![&mut pursuer, &mut evader];

            let outcome = run_episode(&game, &mut policies, true).unwrap();
            let trajectory = outcome.trajectory.expect("exhibition trajectory");

            // One record per half-step plus the initial state.
            assert!(trajectory.len() <= 1 + 2 * duration as usize);
            assert!(trajectory.last().unwrap().is_terminal);
        }
    }

    #[test]
    fn head_on_episode_reports_the_capture_payoffs() {
        let game = PursuitGame::from_config(&experiment_config(10.0, 100)).unwrap();
        let (mut pursuer, mut evader) = straight_policies();
        let mut policies: Vec<&mut dyn Policy<PursuitState, f64>> =
            vec![&mut pursuer, &mut evader];

        let outcome = run_episode(&game, &mut policies, false).unwrap();

        assert!((outcome.payoff(1) - (-0.94)).abs() < 1e-12);
        assert!((outcome.payoff(0) - 0.94).abs() < 1e-12);
        assert_eq!(
            outcome.players[0].metrics[PAYOFF_METRIC],
            outcome.payoff(0)
        );
    }

    #[test]
    fn distant_evader_episode_times_out_with_payoff_one() {
        let game = PursuitGame::from_config(&experiment_config(1000.0, 100)).unwrap();
        let (mut pursuer, mut evader) = straight_policies();
        let mut policies: Vec<&mut dyn Policy<PursuitState, f64>> =
            vec![&mut pursuer, &mut evader];

        let outcome = run_episode(&game, &mut policies, false).unwrap();
        assert_eq!(outcome.payoff(1), 1.0);
        assert_eq!(outcome.payoff(0), -1.0);
    }

    #[test]
    fn tree_policies_drive_episodes_end_to_end() {
        let game = PursuitGame::from_config(&experiment_config(10.0, 50)).unwrap();

        let mut pursuer = TreePolicy::new("grown-pursuer", TreeBuilder::new(11).grow_policy());
        let mut evader = TreePolicy::new("grown-evader", TreeBuilder::new(12).grow_policy());
        let mut policies: Vec<&mut dyn Policy<PursuitState, f64>> =
            vec![&mut pursuer, &mut evader];

        let outcome = run_episode(&game, &mut policies, true).unwrap();
        let trajectory = outcome.trajectory.as_ref().expect("exhibition trajectory");

        assert!(trajectory.last().unwrap().is_terminal);
        assert_eq!(outcome.payoff(0), -outcome.payoff(1));
    }

    #[test]
    fn identical_seeds_reproduce_identical_episodes() {
        let config = experiment_config(10.0, 50);

        let run = |seed: u64| {
            let game = PursuitGame::from_config(&config).unwrap();
            let mut pursuer = TreePolicy::new("p", TreeBuilder::new(seed).grow_policy());
            let mut evader = TreePolicy::new("e", TreeBuilder::new(seed + 100).grow_policy());
            let mut policies: Vec<&mut dyn Policy<PursuitState, f64>> =
                vec![&mut pursuer, &mut evader];
            let outcome = run_episode(&game, &mut policies, true).unwrap();
            (outcome.payoff(1), outcome.trajectory.unwrap())
        };

        let (payoff_a, trajectory_a) = run(21);
        let (payoff_b, trajectory_b) = run(21);
        assert_eq!(payoff_a, payoff_b);
        assert_eq!(trajectory_a, trajectory_b);
    }
}

mod evaluation_pipeline {
    use super::*;

    #[test]
    fn series_reports_through_observers_and_result() {
        let game = PursuitGame::from_config(&experiment_config(1000.0, 10)).unwrap();
        let (mut pursuer, mut evader) = straight_policies();
        let mut policies: Vec<&mut dyn Policy<PursuitState, f64>> =
            vec![&mut pursuer, &mut evader];

        let mut series = EvaluationSeries::new(SeriesConfig { num_episodes: 4 })
            .with_observer(Box::new(MetricsObserver::new()));
        let result = series.run(&game, &mut policies).unwrap();

        assert_eq!(result.total_episodes, 4);
        assert_eq!(result.mean_payoffs, vec![-1.0, 1.0]);
        assert_eq!(result.wins, vec![0, 4]);
    }

    #[test]
    fn config_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("experiment.json");

        let config = experiment_config(10.0, 100);
        config.save(&path).unwrap();
        let loaded = ExperimentConfig::load(&path).unwrap();
        assert_eq!(config, loaded);

        // The loaded config drives the same game.
        let game = PursuitGame::from_config(&loaded).unwrap();
        assert_eq!(game.initial_state(), config.initial_state());
    }

    #[test]
    fn tree_policies_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");

        let policy = TreePolicy::new("saved", TreeBuilder::new(5).grow_policy());
        policy.save(&path).unwrap();
        let loaded = TreePolicy::load(&path).unwrap();
        assert_eq!(policy, loaded);
    }

    #[test]
    fn invalid_configs_are_fatal_before_any_episode() {
        let mut config = experiment_config(10.0, 100);
        config.pursuer.turn_radius = 0.0;
        assert!(PursuitGame::from_config(&config).is_err());
    }
}
