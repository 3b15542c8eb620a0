pub type Tick = u16;
pub type CacheNetId = u16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    Host,
    Client,
}

impl HostType {
    pub fn is_host(&self) -> bool {
        *self == HostType::Host
    }
}
