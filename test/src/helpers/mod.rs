pub mod packet_exchange;
pub mod test_client;
pub mod test_host;

pub use packet_exchange::{exchange, exchange_full, tick_and_exchange};
pub use test_client::TestClient;
pub use test_host::TestHost;
