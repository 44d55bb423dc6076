pub mod cbd;
pub mod ntt;
pub mod num;
pub mod reduce;

pub use cbd::{CbdError, Eta, cbd};
pub use ntt::{base_mul, invntt, ntt, poly_base_mul};
pub use num::{
    ParseUint32ContractError, Uint32Contract, byte, int16, int32, uint_to_byte, uint16, uint32,
};
pub use reduce::{Poly, barrett_reduce, fqmul, montgomery_reduce};
