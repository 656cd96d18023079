use super::*;

fn filter(page: PageRequest) -> RoomFilter {
    RoomFilter {
        floor: None,
        availability: None,
        room_type_id: None,
        sort: RoomSort::RoomNumberAsc,
        page,
    }
}

/// Tests the floor and availability filters together with the room type name join.
///
/// Expected: Ok with only the AVAILABLE room on floor 2, carrying its type name
#[tokio::test]
async fn filters_by_floor_and_availability() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::room_type::RoomTypeFactory::new(db)
        .name("Deluxe")
        .build()
        .await?;
    let wanted = factory::room::RoomFactory::new(db, room_type.id)
        .floor(2)
        .room_number(201)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, room_type.id)
        .floor(2)
        .room_number(202)
        .availability(RoomAvailability::Cleaning)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, room_type.id)
        .floor(3)
        .room_number(301)
        .build()
        .await?;

    let (rooms, total) = RoomRepository::new(db)
        .get_filtered_paginated(&RoomFilter {
            floor: Some(2),
            availability: Some(RoomAvailability::Available),
            ..filter(PageRequest::new(1, 10))
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rooms[0].id, wanted.id);
    assert_eq!(rooms[0].room_type_name.as_deref(), Some("Deluxe"));

    Ok(())
}

/// Tests descending sort and paging.
///
/// Expected: Ok with the second page holding the lowest number
#[tokio::test]
async fn sorts_descending_across_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    for number in [101, 102, 103] {
        factory::room::RoomFactory::new(db, room_type.id)
            .room_number(number)
            .build()
            .await?;
    }

    let (rooms, total) = RoomRepository::new(db)
        .get_filtered_paginated(&RoomFilter {
            sort: RoomSort::RoomNumberDesc,
            ..filter(PageRequest::new(2, 2))
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].room_number, 101);

    Ok(())
}
