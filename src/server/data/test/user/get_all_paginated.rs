use super::*;

/// Tests pagination over accounts ordered by name.
///
/// Expected: Ok with 2 users on page 1, 1 on page 3, total 5
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Eve", "Bob", "Dan", "Ann", "Cat"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);

    let (first, total) = repo.get_all_paginated(PageRequest::new(1, 2)).await?;
    assert_eq!(total, 5);
    let names: Vec<&str> = first.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob"]);

    let (last, _) = repo.get_all_paginated(PageRequest::new(3, 2)).await?;
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].name, "Eve");

    Ok(())
}
