mod descriptor;
mod storage;

pub use descriptor::RingDescriptor;
pub use storage::Ring;
