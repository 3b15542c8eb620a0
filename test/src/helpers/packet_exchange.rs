use tickcache_shared::{CacheError, Tick};

use super::{TestClient, TestHost};

/// Sends the host's delta packet for its current tick to every client.
/// Returns the number of records in the packet.
pub fn exchange(host: &mut TestHost, clients: &mut [&mut TestClient]) -> Result<usize, CacheError> {
    let (bytes, records) = host.write_update();
    for client in clients.iter_mut() {
        client.receive(&bytes)?;
    }
    Ok(records)
}

/// Sends the host's full state to one client, as for a late join
pub fn exchange_full(host: &mut TestHost, client: &mut TestClient) -> Result<usize, CacheError> {
    let (bytes, records) = host.write_full_update();
    client.receive(&bytes)?;
    Ok(records)
}

/// Advances the host one tick, exchanges, and lets every client catch up to
/// the host tick. Returns the new tick.
pub fn tick_and_exchange(host: &mut TestHost, clients: &mut [&mut TestClient]) -> Result<Tick, CacheError> {
    let tick = host.advance();
    exchange(host, clients)?;
    for client in clients.iter_mut() {
        client.interpolate_at(tick);
    }
    Ok(tick)
}
