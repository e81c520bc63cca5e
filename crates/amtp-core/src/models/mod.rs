pub mod decode_result;
pub mod field_operator;
pub mod module_state;
pub mod packet;

pub use decode_result::{DecodeResult, DecodeSource};
pub use field_operator::{FieldOperator, FieldSequence};
pub use module_state::ModuleState;
pub use packet::Packet;
