//! Unit tests for GlossaryService validation against a mocked repository

use super::*;
use crate::error::AppError;
use crate::port::MockTermRepository;

fn service(repo: MockTermRepository) -> GlossaryService {
    GlossaryService::new(Arc::new(repo))
}

fn create_req(source_link: Option<&str>) -> CreateTermRequest {
    CreateTermRequest {
        title: "lcp".to_string(),
        definition: "Largest contentful paint".to_string(),
        source_link: source_link.map(str::to_string),
    }
}

#[tokio::test]
async fn test_create_rejects_bad_link_before_store() {
    let mut repo = MockTermRepository::new();
    repo.expect_insert().never();

    let err = service(repo)
        .create_term("lcp", create_req(Some("not a url")))
        .await
        .unwrap_err();

    match err {
        AppError::InvalidArgument { field, .. } => assert_eq!(field, "source_link"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_rejects_empty_keyword() {
    let mut repo = MockTermRepository::new();
    repo.expect_insert().never();

    let err = service(repo)
        .create_term("", create_req(None))
        .await
        .unwrap_err();

    assert_eq!(err.status(), "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_create_passes_term_through_unchanged() {
    let mut repo = MockTermRepository::new();
    repo.expect_insert()
        .times(1)
        .returning(|_, term| Ok(term));

    let created = service(repo)
        .create_term("lcp", create_req(Some("https://web.dev/lcp")))
        .await
        .unwrap();

    assert_eq!(created.title, "lcp");
    assert_eq!(created.definition, "Largest contentful paint");
    assert_eq!(
        created.source_link.map(String::from),
        Some("https://web.dev/lcp".to_string())
    );
}

#[tokio::test]
async fn test_create_empty_link_stores_none() {
    let mut repo = MockTermRepository::new();
    repo.expect_insert()
        .withf(|_, term| term.source_link.is_none())
        .times(1)
        .returning(|_, term| Ok(term));

    service(repo)
        .create_term("lcp", create_req(Some("")))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_propagates_conflict() {
    let mut repo = MockTermRepository::new();
    repo.expect_insert()
        .returning(|_, _| Err(AppError::AlreadyExists("fps".to_string())));

    let err = service(repo)
        .create_term("fps", create_req(None))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::AlreadyExists(ref k) if k == "fps"));
}

#[tokio::test]
async fn test_update_rejects_bad_link_before_store() {
    let mut repo = MockTermRepository::new();
    repo.expect_update().never();

    let req = UpdateTermRequest {
        definition: Some("X".to_string()),
        source_link: Some("not a url".to_string()),
    };
    let err = service(repo).update_term("fps", req).await.unwrap_err();

    assert_eq!(err.status(), "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_update_empty_link_clears() {
    let mut repo = MockTermRepository::new();
    repo.expect_update()
        .withf(|_, update| update.source_link == Some(None) && update.definition.is_none())
        .times(1)
        .returning(|_, _| Ok(Term::new("fps", "frames", None)));

    let req = UpdateTermRequest {
        definition: None,
        source_link: Some(String::new()),
    };
    let term = service(repo).update_term("fps", req).await.unwrap();

    assert_eq!(term.source_link, None);
}

#[tokio::test]
async fn test_update_propagates_not_found() {
    let mut repo = MockTermRepository::new();
    repo.expect_update()
        .returning(|_, _| Err(AppError::NotFound("ghost".to_string())));

    let err = service(repo)
        .update_term("ghost", UpdateTermRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Term 'ghost' not found");
}
