// Integration tests for Lume Pairing

use std::fs;

use actix_web::{test, web, App};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lume_pairing::config::MatchingSettings;
use lume_pairing::core::{is_compatible, is_monogamous, MatchOutcome, StableMatcher};
use lume_pairing::models::{CandidatePolicy, ErrorResponse, StableMatchResponse};
use lume_pairing::routes::{self, matches::AppState};
use lume_pairing::services::{load_population, FileError};

const IDENTITIES: [&str; 3] = ["Male", "Female", "Nonbinary"];
const PREFERENCES: [&str; 3] = ["Men", "Women", "Bisexual"];

struct RandomPopulation {
    scores: Vec<Vec<f64>>,
    identities: Vec<&'static str>,
    preferences: Vec<&'static str>,
}

fn random_population(rng: &mut StdRng, size: usize, bisexual_only: bool) -> RandomPopulation {
    let scores = (0..size)
        .map(|_| (0..size).map(|_| rng.random_range(0..10) as f64).collect())
        .collect();
    let identities = (0..size).map(|_| IDENTITIES[rng.random_range(0..3)]).collect();
    let preferences = (0..size)
        .map(|_| if bisexual_only { "Bisexual" } else { PREFERENCES[rng.random_range(0..3)] })
        .collect();

    RandomPopulation {
        scores,
        identities,
        preferences,
    }
}

fn assert_well_formed(outcome: &MatchOutcome, policy: CandidatePolicy) {
    let size = outcome.participants.len();

    assert!(outcome.is_stable(), "blocking pair {:?}", outcome.blocking_pair());
    assert!(is_monogamous(&outcome.pairs, size));

    for pair in &outcome.pairs {
        assert!(outcome.sides.is_proposer(pair.proposer));
        assert!(!outcome.sides.is_proposer(pair.receiver));
        if policy == CandidatePolicy::CompatibleOnly {
            assert!(is_compatible(
                &outcome.participants[pair.proposer],
                &outcome.participants[pair.receiver]
            ));
        }
    }

    // Everyone is accounted for exactly once
    let proposers = outcome.pairs.len() + outcome.unmatched_proposers.len();
    let receivers = outcome.pairs.len() + outcome.unmatched_receivers.len();
    assert_eq!(proposers, size / 2);
    assert_eq!(receivers, size - size / 2);
}

#[::core::prelude::v1::test]
fn test_random_populations_are_stable() {
    let mut rng = StdRng::seed_from_u64(2024);

    for size in [0, 1, 2, 5, 8, 13, 20, 31] {
        for policy in [CandidatePolicy::CompatibleOnly, CandidatePolicy::AllOpposite] {
            let population = random_population(&mut rng, size, false);
            let outcome = StableMatcher::new(policy)
                .run(&population.scores, &population.identities, &population.preferences, &mut rng)
                .unwrap();

            assert_well_formed(&outcome, policy);
            assert!(outcome.proposals <= size * size);
        }
    }
}

#[::core::prelude::v1::test]
fn test_all_opposite_is_complete() {
    let mut rng = StdRng::seed_from_u64(77);

    for size in [2, 3, 10, 11, 24] {
        let population = random_population(&mut rng, size, false);
        let outcome = StableMatcher::new(CandidatePolicy::AllOpposite)
            .run(&population.scores, &population.identities, &population.preferences, &mut rng)
            .unwrap();

        assert_eq!(outcome.pairs.len(), size / 2);
        assert!(outcome.unmatched_proposers.is_empty());
    }
}

#[::core::prelude::v1::test]
fn test_bisexual_population_is_complete_and_compatible() {
    let mut rng = StdRng::seed_from_u64(5);

    for size in [4, 9, 16] {
        let population = random_population(&mut rng, size, true);
        let outcome = StableMatcher::default()
            .run(&population.scores, &population.identities, &population.preferences, &mut rng)
            .unwrap();

        assert_well_formed(&outcome, CandidatePolicy::CompatibleOnly);
        assert_eq!(outcome.pairs.len(), size / 2);
    }
}

#[::core::prelude::v1::test]
fn test_same_seed_same_pairs() {
    let population = random_population(&mut StdRng::seed_from_u64(1), 12, false);
    let matcher = StableMatcher::default();

    let first = matcher
        .run(&population.scores, &population.identities, &population.preferences, &mut StdRng::seed_from_u64(9))
        .unwrap();
    let second = matcher
        .run(&population.scores, &population.identities, &population.preferences, &mut StdRng::seed_from_u64(9))
        .unwrap();

    assert_eq!(first.pairs, second.pairs);
    assert_eq!(first.sides, second.sides);
}

#[::core::prelude::v1::test]
fn test_all_zero_scores_still_pair_everyone() {
    let scores = vec![vec![0.0; 6]; 6];
    let identities = ["Female"; 6];
    let preferences = ["Women"; 6];

    let outcome = StableMatcher::default()
        .run(&scores, &identities, &preferences, &mut StdRng::seed_from_u64(4))
        .unwrap();

    assert_eq!(outcome.pairs.len(), 3);
    assert!(outcome.is_stable());

    // With every score tied, each receiver ends up holding the lowest index that asked
    let fixed = StableMatcher::default()
        .run_with_sides(&scores, &identities, &preferences, vec![4, 2, 0])
        .unwrap();
    let pairs: Vec<(usize, usize)> = fixed.pairs.iter().map(|p| (p.proposer, p.receiver)).collect();
    assert_eq!(pairs, vec![(0, 1), (2, 3), (4, 5)]);
}

#[::core::prelude::v1::test]
fn test_load_population_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("raw_scores.txt"), "0 8 1 3\n6 0 2 0\n1 5 0 7\n4 0 9 0\n").unwrap();
    fs::write(dir.path().join("genders.txt"), "Male\nFemale\nMale\nFemale\n").unwrap();
    fs::write(dir.path().join("gender_preferences.txt"), "Women\nMen\nWomen\nMen\n").unwrap();

    let files = load_population(dir.path()).unwrap();
    assert_eq!(files.identities.len(), 4);
    assert_eq!(files.parse().unwrap().size(), 4);

    let outcome = StableMatcher::default()
        .run(&files.scores, &files.identities, &files.preferences, &mut StdRng::seed_from_u64(0))
        .unwrap();

    assert_eq!(outcome.pairs.len(), 2);
    assert_well_formed(&outcome, CandidatePolicy::CompatibleOnly);
}

#[::core::prelude::v1::test]
fn test_load_population_reports_bad_label() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("raw_scores.txt"), "0 1\n1 0\n").unwrap();
    fs::write(dir.path().join("genders.txt"), "Male\nRobot\n").unwrap();
    fs::write(dir.path().join("gender_preferences.txt"), "Women\nMen\n").unwrap();

    let files = load_population(dir.path()).unwrap();
    let err = files.parse().unwrap_err();

    assert!(matches!(err, FileError::Matching(_)));
    assert!(err.to_string().contains("Robot"));
}

#[::core::prelude::v1::test]
fn test_load_population_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_population(dir.path()).unwrap_err();

    assert!(matches!(err, FileError::Io { .. }));
}

fn app_state() -> AppState {
    AppState::new(MatchingSettings::default())
}

#[actix_web::test]
async fn test_stable_match_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let body = serde_json::json!({
        "scores": [[0, 1, 1, 1], [1, 0, 1, 1], [1, 1, 0, 1], [1, 1, 1, 0]],
        "identities": ["Male", "Female", "Male", "Female"],
        "preferences": ["Women", "Men", "Women", "Men"],
        "seed": 3
    });
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/stable")
        .set_json(&body)
        .to_request();
    let resp: StableMatchResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.pairs.len(), 2);
    assert!(resp.stable);
    assert!(resp.unmatched_proposers.is_empty());

    // Same seed, same answer
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/stable")
        .set_json(&body)
        .to_request();
    let again: StableMatchResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(again.pairs, resp.pairs);
    assert_ne!(again.run_id, resp.run_id);
}

#[actix_web::test]
async fn test_stable_match_rejects_unknown_label() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/stable")
        .set_json(serde_json::json!({
            "scores": [[0, 1], [1, 0]],
            "identities": ["Male", "Female"],
            "preferences": ["Women", "Everyone"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let error: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(error.status_code, 422);
    assert!(error.message.contains("Everyone"));
}

#[actix_web::test]
async fn test_stable_match_rejects_empty_population() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/stable")
        .set_json(serde_json::json!({ "scores": [], "identities": [], "preferences": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}
