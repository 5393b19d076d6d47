//! Tests for the budget listing use case.

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use crate::context::RequestContext;
use crate::db::DbError;
use crate::db::stub::{StubRepository, sample_budgets};
use crate::usecase::{BudgetUsecase, GetAllBudgetRequest, Usecase, UsecaseError};

#[tokio::test]
async fn empty_repository_yields_empty_response() {
    let (repo, calls) = StubRepository::with_budgets(vec![]);
    let usecase = Usecase::new(repo);

    let resp = usecase
        .get_all_budget(&RequestContext::new(), GetAllBudgetRequest::default())
        .await
        .unwrap();

    assert!(resp.budgets.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn budgets_are_returned_in_repository_order() {
    let stored = sample_budgets(5);
    let (repo, _) = StubRepository::with_budgets(stored.clone());
    let usecase = Usecase::new(repo);

    let resp = usecase
        .get_all_budget(&RequestContext::new(), GetAllBudgetRequest::default())
        .await
        .unwrap();

    assert_eq!(resp.budgets, stored);
}

#[tokio::test]
async fn cancelled_context_short_circuits_before_repository() {
    let (repo, calls) = StubRepository::with_budgets(sample_budgets(3));
    let usecase = Usecase::new(repo);
    let ctx = RequestContext::new();
    ctx.cancel();

    let err = usecase
        .get_all_budget(&ctx, GetAllBudgetRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err, UsecaseError::ContextCancelled);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn expired_deadline_short_circuits_before_repository() {
    let (repo, calls) = StubRepository::with_budgets(sample_budgets(3));
    let usecase = Usecase::new(repo);
    let ctx = RequestContext::new().with_timeout(Duration::ZERO);

    let err = usecase
        .get_all_budget(&ctx, GetAllBudgetRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err, UsecaseError::TimedOut);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn repository_errors_propagate_unchanged() {
    let (repo, calls) = StubRepository::failing(DbError::Storage {
        message: "connection reset by peer".to_string(),
    });
    let usecase = Usecase::new(repo);

    let err = usecase
        .get_all_budget(&RequestContext::new(), GetAllBudgetRequest::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        UsecaseError::Repository(DbError::Storage {
            message: "connection reset by peer".to_string()
        })
    );
    assert_eq!(err.to_string(), "connection reset by peer");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn connection_unavailable_is_opaque_to_transports() {
    let (repo, _) = StubRepository::failing(DbError::ConnectionUnavailable);
    let usecase = Usecase::new(repo);

    let err = usecase
        .get_all_budget(&RequestContext::new(), GetAllBudgetRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err, UsecaseError::Repository(DbError::ConnectionUnavailable));
}

#[tokio::test]
async fn repository_context_errors_become_sentinels() {
    let (repo, _) = StubRepository::failing(DbError::TimedOut);
    let err = Usecase::new(repo)
        .get_all_budget(&RequestContext::new(), GetAllBudgetRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err, UsecaseError::TimedOut);

    let (repo, _) = StubRepository::failing(DbError::ContextCancelled);
    let err = Usecase::new(repo)
        .get_all_budget(&RequestContext::new(), GetAllBudgetRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err, UsecaseError::ContextCancelled);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_calls_do_not_interfere() {
    let stored = sample_budgets(7);
    let (repo, calls) = StubRepository::with_budgets(stored.clone());
    let usecase = Arc::new(Usecase::new(repo));

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let usecase = Arc::clone(&usecase);
            tokio::spawn(async move {
                usecase
                    .get_all_budget(&RequestContext::new(), GetAllBudgetRequest::default())
                    .await
            })
        })
        .collect();

    for handle in handles {
        let resp = handle.await.unwrap().unwrap();
        assert_eq!(resp.budgets, stored);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 50);
}
