use super::*;

/// Tests a request carrying a token issued at login.
///
/// Expected: Ok(Admin) matching the logged in admin
#[tokio::test]
async fn grants_access_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let tokens = tokens();
    let (token, _) = AuthService::new(db, &tokens)
        .login(&admin.email, factory::admin::DEFAULT_PASSWORD)
        .await?;

    let headers = headers_with(&format!("Bearer {}", token));
    let authenticated = AuthGuard::new(db, &tokens, &headers).require().await?;

    assert_eq!(authenticated.id, admin.id);
    assert_eq!(authenticated.email, admin.email);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests headers that are present but do not carry a bearer token.
///
/// Expected: Err(AuthError::MissingToken) for each
#[tokio::test]
async fn denies_non_bearer_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = tokens();
    for value in ["Basic YWRtaW46cGFzcw==", "Bearer ", "token-without-scheme"] {
        let headers = headers_with(value);
        let result = AuthGuard::new(db, &tokens, &headers).require().await;

        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))),
            "header {:?} should be rejected",
            value
        );
    }

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let foreign = TokenService::new("another-secret", Duration::hours(1));
    let (token, _) = AuthService::new(db, &foreign)
        .login(&admin.email, factory::admin::DEFAULT_PASSWORD)
        .await?;

    let tokens = tokens();
    let headers = headers_with(&format!("Bearer {}", token));
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests an expired token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let expired = TokenService::new("middleware-test-secret", Duration::minutes(-5));
    let (token, _) = AuthService::new(db, &expired)
        .login(&admin.email, factory::admin::DEFAULT_PASSWORD)
        .await?;

    let tokens = tokens();
    let headers = headers_with(&format!("Bearer {}", token));
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
