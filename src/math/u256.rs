//! 256-bit unsigned integer for intermediate products.

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer for intermediate products.
    pub struct U256(4);
}
