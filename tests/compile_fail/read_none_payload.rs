//! Binding the payload of an `Optional` without handling `None` is rejected.

use railway::container::Optional;

fn main() {
    let absent: Optional<i32> = Optional::None;
    let Optional::Some(value) = absent;
    let _ = value;
}
