//! Integration tests for proposals and support votes.

mod common;

use agora_core::types::DbId;
use agora_db::models::proposal::{CreateProposal, SupportOutcome};
use agora_db::repositories::ProposalRepo;
use sqlx::PgPool;

use common::{create_space, create_user};

async fn supporters(pool: &PgPool, proposal_id: DbId) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM proposal_supporters WHERE proposal_id = $1")
        .bind(proposal_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

fn new_proposal(title: &str) -> CreateProposal {
    CreateProposal {
        title: title.to_string(),
        description: "Plant more trees".to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_support_count_matches_supporters(pool: PgPool) {
    let author = create_user(&pool, "ana").await;
    let voter = create_user(&pool, "bea").await;
    let space = create_space(&pool, author, "vigo").await;
    let proposal = ProposalRepo::create(&pool, space.id, author, &new_proposal("Trees"))
        .await
        .unwrap();

    let added = SupportOutcome::Added;
    assert_eq!(ProposalRepo::add_support(&pool, proposal.id, author).await.unwrap(), added);
    assert_eq!(ProposalRepo::add_support(&pool, proposal.id, voter).await.unwrap(), added);

    let detail = ProposalRepo::find_in_space(&pool, space.id, proposal.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.support_count, 2);
    assert_eq!(supporters(&pool, proposal.id).await, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_support_for_deleted_proposal_is_gone(pool: PgPool) {
    let author = create_user(&pool, "ana").await;
    let space = create_space(&pool, author, "vigo").await;
    let proposal = ProposalRepo::create(&pool, space.id, author, &new_proposal("Trees"))
        .await
        .unwrap();
    assert!(ProposalRepo::delete(&pool, space.id, proposal.id).await.unwrap());

    assert_eq!(
        ProposalRepo::add_support(&pool, proposal.id, author).await.unwrap(),
        SupportOutcome::ProposalGone
    );
    assert_eq!(supporters(&pool, proposal.id).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_support_is_ignored(pool: PgPool) {
    let author = create_user(&pool, "ana").await;
    let space = create_space(&pool, author, "vigo").await;
    let proposal = ProposalRepo::create(&pool, space.id, author, &new_proposal("Trees"))
        .await
        .unwrap();

    assert_eq!(
        ProposalRepo::add_support(&pool, proposal.id, author).await.unwrap(),
        SupportOutcome::Added
    );
    assert_eq!(
        ProposalRepo::add_support(&pool, proposal.id, author).await.unwrap(),
        SupportOutcome::AlreadySupporting
    );
    assert_eq!(supporters(&pool, proposal.id).await, 1);

    assert!(ProposalRepo::remove_support(&pool, proposal.id, author).await.unwrap());
    assert!(!ProposalRepo::remove_support(&pool, proposal.id, author).await.unwrap());
    assert_eq!(supporters(&pool, proposal.id).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_is_scoped_and_paginated(pool: PgPool) {
    let author = create_user(&pool, "ana").await;
    let vigo = create_space(&pool, author, "vigo").await;
    let other = create_space(&pool, author, "other").await;
    for i in 0..3 {
        ProposalRepo::create(&pool, vigo.id, author, &new_proposal(&format!("P{i}")))
            .await
            .unwrap();
    }
    ProposalRepo::create(&pool, other.id, author, &new_proposal("Elsewhere"))
        .await
        .unwrap();

    assert_eq!(ProposalRepo::count_by_space(&pool, vigo.id).await.unwrap(), 3);
    let page = ProposalRepo::list_by_space(&pool, vigo.id, 2, 2).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].title, "P2");

    let foreign = ProposalRepo::list_by_space(&pool, other.id, 50, 0).await.unwrap();
    assert!(ProposalRepo::find_in_space(&pool, vigo.id, foreign[0].id)
        .await
        .unwrap()
        .is_none());
}
