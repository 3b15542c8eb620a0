/// Full-state packets for clients that join late or lost their baseline

use tickcache_host::HostConfig;
use tickcache_shared::{EntityId, UsableByEngineerComponent, WaterjetComponent};
use tickcache_test::{exchange_full, tick_and_exchange, TestClient, TestHost};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn spawn_item(host: &mut TestHost, entity: EntityId, target: u64, used: bool) {
    host.world
        .insert_component(entity, WaterjetComponent::new(Some(EntityId::new(target))));
    host.world
        .insert_component(entity, UsableByEngineerComponent::new(used, false));
    host.register_entity(entity);
}

fn spawn_client_item(client: &mut TestClient, entity: EntityId) {
    client
        .world
        .insert_component(entity, WaterjetComponent::default());
    client
        .world
        .insert_component(entity, UsableByEngineerComponent::default());
}

#[test]
fn late_joining_client_reproduces_host_state() {
    init_logger();

    let entities = [EntityId::new(1), EntityId::new(2), EntityId::new(3)];
    let mut host = TestHost::new();
    let mut early = TestClient::new();
    for (index, entity) in entities.iter().enumerate() {
        spawn_item(&mut host, *entity, index as u64 + 100, false);
        spawn_client_item(&mut early, *entity);
    }

    for step in 0..5u64 {
        host.world
            .component_mut::<WaterjetComponent>(&entities[(step % 3) as usize])
            .unwrap()
            .set_target_entity_id(Some(EntityId::new(step)));
        tick_and_exchange(&mut host, &mut [&mut early]).unwrap();
    }
    host.world
        .remove_component::<UsableByEngineerComponent>(&entities[1]);
    host.world
        .component_mut::<UsableByEngineerComponent>(&entities[2])
        .unwrap()
        .set_in_use(true);
    let tick = tick_and_exchange(&mut host, &mut [&mut early]).unwrap();

    let mut late = TestClient::new();
    for entity in &entities {
        spawn_client_item(&mut late, *entity);
    }
    assert_eq!(exchange_full(&mut host, &mut late), Ok(6));
    late.interpolate_at(tick);

    for entity in &entities {
        assert_eq!(
            late.world.component::<WaterjetComponent>(entity),
            host.world.component::<WaterjetComponent>(entity)
        );
        assert_eq!(
            late.world.component::<WaterjetComponent>(entity),
            early.world.component::<WaterjetComponent>(entity)
        );
    }
    assert_eq!(
        late.world.component::<UsableByEngineerComponent>(&entities[2]),
        Some(&UsableByEngineerComponent::new(false, true))
    );
}

#[test]
fn full_update_does_not_consume_the_delta() {
    let entity = EntityId::new(7);
    let mut host = TestHost::new();
    spawn_item(&mut host, entity, 1, false);
    host.write_update();

    host.advance();
    host.world
        .component_mut::<UsableByEngineerComponent>(&entity)
        .unwrap()
        .set_used(true);

    // the delta packet for this tick still carries the change
    let (_, delta_records) = host.write_update();
    assert_eq!(delta_records, 1);
    let (_, all_records) = host.write_full_update();
    assert_eq!(all_records, 2);

    host.advance();
    let (_, records) = host.write_update();
    assert_eq!(records, 0);
}

#[test]
fn delta_after_full_update_in_the_same_tick() {
    let entity = EntityId::new(8);
    let mut host = TestHost::new();
    spawn_item(&mut host, entity, 1, false);
    host.write_update();

    host.advance();
    host.world
        .component_mut::<WaterjetComponent>(&entity)
        .unwrap()
        .set_target_entity_id(None);

    host.write_full_update();
    let (_, records) = host.write_update();
    assert_eq!(records, 1);
}

#[test]
fn full_update_does_not_drop_a_deferred_record() {
    init_logger();

    let first = EntityId::new(1);
    let second = EntityId::new(2);
    let mut host = TestHost::with_config(HostConfig {
        max_records_per_update: Some(1),
        ..HostConfig::default()
    });
    let mut early = TestClient::new();
    for entity in [first, second] {
        host.world
            .insert_component(entity, WaterjetComponent::new(Some(EntityId::new(3))));
        host.register_entity(entity);
        early
            .world
            .insert_component(entity, WaterjetComponent::default());
    }
    for _ in 0..4 {
        tick_and_exchange(&mut host, &mut [&mut early]).unwrap();
    }
    assert_eq!(host.caches.pending_full_records(), 0);

    for (entity, target) in [(first, 10), (second, 20)] {
        host.world
            .component_mut::<WaterjetComponent>(&entity)
            .unwrap()
            .set_target_entity_id(Some(EntityId::new(target)));
    }
    tick_and_exchange(&mut host, &mut [&mut early]).unwrap();
    assert_eq!(host.caches.pending_full_records(), 1);

    let mut late = TestClient::new();
    for entity in [first, second] {
        late.world
            .insert_component(entity, WaterjetComponent::default());
    }
    assert_eq!(exchange_full(&mut host, &mut late), Ok(4));
    assert_eq!(host.caches.pending_full_records(), 1);
    late.interpolate_at(host.tick());

    for _ in 0..5 {
        tick_and_exchange(&mut host, &mut [&mut early]).unwrap();
    }

    for entity in [first, second] {
        assert_eq!(
            early.world.component::<WaterjetComponent>(&entity),
            host.world.component::<WaterjetComponent>(&entity)
        );
        assert_eq!(
            late.world.component::<WaterjetComponent>(&entity),
            host.world.component::<WaterjetComponent>(&entity)
        );
    }
}
