//! Gateway events consumed by the aggregation engine

mod gateway_event;

pub use gateway_event::GatewayEvent;
