use elevator_events::{models::timestamp, repository::store, service::ElevatorService};
use tempfile::TempDir;

const T0: i64 = 1_700_000_000;
const DEMANDS: usize = 50;
const ROUNDS: i64 = 4;

async fn setup_file_service(dir: &TempDir) -> ElevatorService {
    let url = format!("sqlite://{}", dir.path().join("elevator.db").display());
    let pool = store::connect(&url, 10)
        .await
        .expect("Failed to open file database");
    store::migrate(&pool).await.expect("Failed to run migrations");
    ElevatorService::new(pool)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_completions_should_all_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let service = setup_file_service(&dir).await;

    let floor = service.create_floor().await.unwrap();
    let elevator = service.create_elevator().await.unwrap();
    let mut ids = Vec::with_capacity(DEMANDS);
    for i in 0..DEMANDS as i64 {
        let demand = service.create_demand(floor.id, elevator.id, T0 + i).await.unwrap();
        ids.push(demand.id);
    }

    for round in 1..=ROUNDS {
        let handles: Vec<_> = ids
            .iter()
            .map(|&id| {
                let service = service.clone();
                tokio::spawn(async move { service.complete_demand(id, T0 + round * 100).await })
            })
            .collect();

        for handle in handles {
            let result = handle.await.unwrap();
            if let Err(e) = result {
                panic!("Completion failed in round {}: {}", round, e);
            }
        }
    }

    let expected = timestamp::from_epoch_seconds(T0 + ROUNDS * 100).unwrap();
    for id in ids {
        let demand = service
            .demands()
            .find_by_id(id, None)
            .await
            .unwrap()
            .expect("Demand should exist");
        assert_eq!(demand.timestamp_attended, Some(expected));
    }
}
