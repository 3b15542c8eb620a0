/// Components that come and go between ticks

use tickcache_shared::{
    BitReader, BitWrite, BitWriter, CacheFields, DataCache, EntityId, GameClock, UsableByEngineerComponent,
    UsableByEngineerData, UsableByEngineerSnapshot,
};
use tickcache_test::{tick_and_exchange, TestClient, TestHost, TestWorld};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn written_bits(cache: &mut UsableByEngineerData) -> u32 {
    let mut writer = BitWriter::new();
    cache.update_data(&mut writer, false);
    writer.bits_written()
}

#[test]
fn removal_sends_only_the_existence_flag() {
    let entity = EntityId::new(1);
    let mut world = TestWorld::new();
    world.insert_component(entity, UsableByEngineerComponent::new(true, false));
    let mut cache = UsableByEngineerData::new(&world, &entity);

    assert!(!cache.prepare_for_update(&world, &GameClock::new(1)));

    world.remove_component::<UsableByEngineerComponent>(&entity);
    assert!(cache.prepare_for_update(&world, &GameClock::new(2)));
    // changed bit and the new flag, no wrapped fields
    assert_eq!(written_bits(&mut cache), 2);
    assert!(!cache.exists());
    assert!(cache.fields().is_none());

    for tick in 3..6 {
        assert!(!cache.prepare_for_update(&world, &GameClock::new(tick)));
        assert_eq!(written_bits(&mut cache), 1);
    }
}

#[test]
fn reappearing_component_is_written_in_full() {
    let entity = EntityId::new(2);
    let mut world = TestWorld::new();
    let mut cache = UsableByEngineerData::new(&world, &entity);
    assert!(!cache.exists());

    world.insert_component(entity, UsableByEngineerComponent::new(false, false));
    assert!(cache.prepare_for_update(&world, &GameClock::new(1)));
    // exists [1][1], used [1][0], in_use [1][0]
    assert_eq!(written_bits(&mut cache), 6);

    assert!(!cache.prepare_for_update(&world, &GameClock::new(2)));
    // exists [0], used [0], in_use [0]
    assert_eq!(written_bits(&mut cache), 3);
}

#[test]
fn client_follows_the_component_in_and_out() {
    init_logger();

    let entity = EntityId::new(3);
    let mut host = TestHost::new();
    host.world
        .insert_component(entity, UsableByEngineerComponent::new(false, false));
    host.register_entity(entity);

    let mut client = TestClient::new();
    client
        .world
        .insert_component(entity, UsableByEngineerComponent::default());

    tick_and_exchange(&mut host, &mut [&mut client]).unwrap();

    host.world
        .component_mut::<UsableByEngineerComponent>(&entity)
        .unwrap()
        .set_used(true);
    tick_and_exchange(&mut host, &mut [&mut client]).unwrap();
    assert!(client
        .world
        .component::<UsableByEngineerComponent>(&entity)
        .unwrap()
        .is_used());

    // removal is consumed without touching the client's component
    host.world
        .remove_component::<UsableByEngineerComponent>(&entity);
    tick_and_exchange(&mut host, &mut [&mut client]).unwrap();
    assert_eq!(client.caches.pending_history(), 0);
    assert_eq!(
        client.world.component::<UsableByEngineerComponent>(&entity),
        Some(&UsableByEngineerComponent::new(true, false))
    );

    host.world
        .insert_component(entity, UsableByEngineerComponent::new(true, true));
    tick_and_exchange(&mut host, &mut [&mut client]).unwrap();
    assert_eq!(
        client.world.component::<UsableByEngineerComponent>(&entity),
        Some(&UsableByEngineerComponent::new(true, true))
    );
}

#[test]
fn existence_only_entries_are_queued_and_consumed_in_order() {
    let entity = EntityId::new(4);
    let mut host = TestHost::new();
    host.world
        .insert_component(entity, UsableByEngineerComponent::new(false, true));
    host.register_entity(entity);
    let mut client = TestClient::new();

    let first_tick = host.tick();
    let (bytes, _) = host.write_update();
    client.receive(&bytes).unwrap();

    host.world
        .remove_component::<UsableByEngineerComponent>(&entity);
    let removed_tick = host.advance();
    let (bytes, records) = host.write_update();
    assert_eq!(records, 1);
    client.receive(&bytes).unwrap();

    // the baseline, then the removal
    assert_eq!(client.caches.pending_history(), 2);

    client.interpolate_at(first_tick);
    assert_eq!(client.caches.pending_history(), 1);

    client.interpolate_at(removed_tick);
    assert_eq!(client.caches.pending_history(), 0);
}

#[test]
fn snapshots_for_a_missing_client_component_are_skipped() {
    init_logger();

    let entity = EntityId::new(5);
    let mut host = TestHost::new();
    host.world
        .insert_component(entity, UsableByEngineerComponent::new(true, true));
    host.register_entity(entity);

    let mut client = TestClient::new();
    tick_and_exchange(&mut host, &mut [&mut client]).unwrap();

    assert_eq!(client.caches.pending_history(), 0);
    assert!(client
        .world
        .component::<UsableByEngineerComponent>(&entity)
        .is_none());
}

#[test]
fn client_shadow_fields_follow_existence() {
    let entity = EntityId::new(6);
    let mut host_world = TestWorld::new();
    host_world.insert_component(entity, UsableByEngineerComponent::new(true, false));
    let mut host_cache = UsableByEngineerData::new(&host_world, &entity);
    let mut client_cache = UsableByEngineerData::new_remote(&TestWorld::new(), &entity);

    let mut writer = BitWriter::new();
    host_cache.update_data(&mut writer, true);
    let bytes = writer.to_bytes();
    client_cache
        .set_data(&mut BitReader::new(&bytes), 1)
        .unwrap();
    assert!(client_cache.exists());
    assert_eq!(
        client_cache.fields().map(|fields| fields.snapshot()),
        Some(UsableByEngineerSnapshot {
            used: true,
            in_use: false
        })
    );

    host_world.remove_component::<UsableByEngineerComponent>(&entity);
    assert!(host_cache.prepare_for_update(&host_world, &GameClock::new(2)));
    let mut writer = BitWriter::new();
    host_cache.update_data(&mut writer, false);
    let bytes = writer.to_bytes();
    client_cache
        .set_data(&mut BitReader::new(&bytes), 2)
        .unwrap();
    assert!(!client_cache.exists());
    assert!(client_cache.fields().is_none());
    assert_eq!(client_cache.history_len(), 2);
}
