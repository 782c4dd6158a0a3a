//! Public address discovery.

mod resolver;


pub use resolver::{HttpIpResolver, IpError, IpResolver, PublicAddress};
