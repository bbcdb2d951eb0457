// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use errors::*` or name `errors::Result` to get at them.
use error_chain::*;

error_chain! {

    errors {
        InvalidWallBits(bits: u8) {
            description("wall bits outside of the four wall flags")
            display("wall bits {:#06b} fall outside TOP | BOTTOM | RIGHT | LEFT", bits)
        }
        UnknownWallName(name: String) {
            description("unknown wall name")
            display("'{}' is not one of TOP, BOTTOM, RIGHT, LEFT or EMPTY", name)
        }
        InvalidRoleValue(value: u8) {
            description("role value out of range")
            display("{} is not a role value (expected 0 to 6)", value)
        }
        UnknownRoleName(name: String) {
            description("unknown role name")
            display("'{}' is not a role name", name)
        }
    }
}
