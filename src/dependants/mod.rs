/// Domain layer - dependant discovery
///
/// Pure business logic: value objects and services with no I/O.
pub mod domain;
pub mod services;
