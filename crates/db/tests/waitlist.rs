use petride_db::models::waitlist::{CreateWaitlistEntry, UpdateWaitlistEntry};
use petride_db::repositories::WaitlistRepo;
use sqlx::PgPool;
use uuid::Uuid;

fn sample_entry(user_id: Uuid, email: &str) -> CreateWaitlistEntry {
    CreateWaitlistEntry {
        user_id,
        name: "Jessica Chen".to_string(),
        email: email.to_string(),
        phone: "(555) 123-4567".to_string(),
        pet_type: "dog".to_string(),
        city: "San Francisco".to_string(),
    }
}

#[sqlx::test]
async fn create_and_find(pool: PgPool) {
    let user_id = Uuid::new_v4();
    let created = WaitlistRepo::create(&pool, &sample_entry(user_id, "jessica@petride.com"))
        .await
        .unwrap();
    assert_eq!(created.user_id, user_id);
    assert_eq!(created.pet_type, "dog");

    let by_user = WaitlistRepo::find_by_user_id(&pool, user_id)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(by_user.id, created.id);

    let by_email = WaitlistRepo::find_by_email(&pool, "jessica@petride.com")
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(by_email.id, created.id);

    assert!(WaitlistRepo::exists_for_user(&pool, user_id).await.unwrap());
    assert!(!WaitlistRepo::exists_for_user(&pool, Uuid::new_v4())
        .await
        .unwrap());
}

#[sqlx::test]
async fn update_by_email_rebinds_user(pool: PgPool) {
    // Row created during signup, before the account was confirmed.
    let original_user = Uuid::new_v4();
    WaitlistRepo::create(&pool, &sample_entry(original_user, "mo@example.com"))
        .await
        .unwrap();

    // Completion form submits with the confirmed identity.
    let confirmed_user = Uuid::new_v4();
    let updated = WaitlistRepo::update_by_email(
        &pool,
        "mo@example.com",
        &UpdateWaitlistEntry {
            user_id: Some(confirmed_user),
            name: Some("Mo Rivera".to_string()),
            phone: None,
            pet_type: Some("cat".to_string()),
            city: Some("Oakland".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("row should be updated");

    assert_eq!(updated.user_id, confirmed_user);
    assert_eq!(updated.name, "Mo Rivera");
    assert_eq!(updated.pet_type, "cat");
    assert_eq!(updated.city, "Oakland");
    // None fields are left untouched.
    assert_eq!(updated.phone, "(555) 123-4567");
    assert!(updated.updated_at >= updated.created_at);
}

#[sqlx::test]
async fn update_by_email_missing_row(pool: PgPool) {
    let result = WaitlistRepo::update_by_email(
        &pool,
        "nobody@example.com",
        &UpdateWaitlistEntry {
            user_id: None,
            name: Some("Nobody".to_string()),
            phone: None,
            pet_type: None,
            city: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn duplicate_email_violates_unique_constraint(pool: PgPool) {
    WaitlistRepo::create(&pool, &sample_entry(Uuid::new_v4(), "dup@example.com"))
        .await
        .unwrap();

    let err = WaitlistRepo::create(&pool, &sample_entry(Uuid::new_v4(), "dup@example.com"))
        .await
        .expect_err("second insert with the same email must fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_waitlist_email"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test]
async fn list_orders_newest_first(pool: PgPool) {
    WaitlistRepo::create(&pool, &sample_entry(Uuid::new_v4(), "first@example.com"))
        .await
        .unwrap();
    WaitlistRepo::create(&pool, &sample_entry(Uuid::new_v4(), "second@example.com"))
        .await
        .unwrap();

    let entries = WaitlistRepo::list(&pool).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].created_at >= entries[1].created_at);
}
